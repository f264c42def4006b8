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

use std::fmt;

use crate::constants::NodeId;
use crate::constants::Weight;
use crate::constants::WEIGHT_MAX;
use crate::constants::WEIGHT_ZERO;

#[derive(Debug, Clone)]
pub struct ShortestPath {
    source: NodeId,
    target: NodeId,
    weight: Weight,
    nodes: Vec<NodeId>,
}

impl PartialEq for ShortestPath {
    fn eq(&self, other: &ShortestPath) -> bool {
        self.source == other.source
            && self.target == other.target
            && self.weight == other.weight
            && self.is_found() == other.is_found()
        // do not insist on equal nodes arrays, because there can be several shortest paths
    }
}

impl ShortestPath {
    pub fn new(source: NodeId, target: NodeId, weight: Weight, nodes: Vec<NodeId>) -> Self {
        ShortestPath {
            source,
            target,
            weight,
            nodes,
        }
    }

    pub fn singular(node: NodeId) -> Self {
        ShortestPath {
            source: node,
            target: node,
            weight: WEIGHT_ZERO,
            nodes: vec![node],
        }
    }

    pub fn none(source: NodeId, target: NodeId) -> Self {
        ShortestPath {
            source,
            target,
            weight: WEIGHT_MAX,
            nodes: vec![],
        }
    }

    pub fn get_source(&self) -> NodeId {
        self.source
    }

    pub fn get_target(&self) -> NodeId {
        self.target
    }

    /// Total weight of the path. Only meaningful if `is_found()`, a path can
    /// weigh exactly `WEIGHT_MAX`.
    pub fn get_weight(&self) -> Weight {
        self.weight
    }

    /// Nodes from source to target, both included. Empty if no path was found.
    pub fn get_nodes(&self) -> &Vec<NodeId> {
        &self.nodes
    }

    pub fn is_found(&self) -> bool {
        !self.nodes.is_empty()
    }
}

/// Console report of a query result, e.g.
///
/// ```text
/// Shortest path from Z to J:
/// Total distance: 34 km
/// Path: Z -> B -> Q -> K -> J
/// ```
pub struct PathReport<'a, L> {
    path: &'a ShortestPath,
    names: &'a [L],
}

impl<'a, L> PathReport<'a, L> {
    pub fn new(path: &'a ShortestPath, names: &'a [L]) -> Self {
        PathReport { path, names }
    }
}

impl<'a, L: fmt::Display> PathReport<'a, L> {
    // falls back to the node id for a path that belongs to another graph
    fn write_node(&self, f: &mut fmt::Formatter<'_>, node: NodeId) -> fmt::Result {
        match self.names.get(node) {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "#{}", node),
        }
    }
}

impl<'a, L: fmt::Display> fmt::Display for PathReport<'a, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.path.is_found() {
            write!(f, "No path from ")?;
            self.write_node(f, self.path.get_source())?;
            write!(f, " to ")?;
            self.write_node(f, self.path.get_target())?;
            return write!(f, ".");
        }
        write!(f, "Shortest path from ")?;
        self.write_node(f, self.path.get_source())?;
        write!(f, " to ")?;
        self.write_node(f, self.path.get_target())?;
        writeln!(f, ":")?;
        writeln!(f, "Total distance: {} km", self.path.get_weight())?;
        write!(f, "Path: ")?;
        for (i, node) in self.path.get_nodes().iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            self.write_node(f, *node)?;
        }
        Ok(())
    }
}
