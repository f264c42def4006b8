/*
 * Licensed to the Apache Software Foundation (ASF) under one
 * or more contributor license agreements.  See the NOTICE file
 * distributed with this work for additional information
 * regarding copyright ownership.  The ASF licenses this file
 * to you under the Apache License, Version 2.0 (the
 * "License"); you may not use this file except in compliance
 * with the License.  You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing,
 * software distributed under the License is distributed on an
 * "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
 * KIND, either express or implied.  See the License for the
 * specific language governing permissions and limitations
 * under the License.
 */

pub type NodeId = usize;
pub type Weight = usize;

/// Predecessor slot of a node during a query. The start node and every node
/// that was never reached keep `Invalid`.
#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum Node {
    Invalid,
    Node(NodeId),
}

impl Node {
    pub fn id(&self) -> Option<NodeId> {
        match self {
            Node::Invalid => None,
            Node::Node(node_id) => Some(*node_id),
        }
    }
}

pub const INVALID_NODE: Node = Node::Invalid;

pub const WEIGHT_MAX: Weight = std::usize::MAX;
pub const WEIGHT_ZERO: Weight = 0;
