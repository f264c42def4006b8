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

use std::error::Error;
use std::fmt;

/// Errors raised while building or querying a `LabeledGraph`. Labels are kept
/// as their display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    InvalidVertexCount,
    NameCountMismatch { expected: usize, actual: usize },
    DuplicateVertexName(String),
    UnknownVertex(String),
    AsymmetricEdge { from: String, to: String, weight: usize },
    WeightOverflow,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::InvalidVertexCount => write!(f, "a graph needs at least one vertex"),
            GraphError::NameCountMismatch { expected, actual } => write!(
                f,
                "number of vertex names ({}) does not match the number of vertices ({})",
                actual, expected
            ),
            GraphError::DuplicateVertexName(name) => {
                write!(f, "vertex name {} is assigned more than once", name)
            }
            GraphError::UnknownVertex(name) => write!(f, "vertex {} does not exist", name),
            GraphError::AsymmetricEdge { from, to, weight } => write!(
                f,
                "edge {} -> {} with weight {} has no matching reverse edge",
                from, to, weight
            ),
            GraphError::WeightOverflow => {
                write!(f, "path weight exceeds the largest representable weight")
            }
        }
    }
}

impl Error for GraphError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let mismatch = GraphError::NameCountMismatch {
            expected: 20,
            actual: 19,
        };
        assert_eq!(
            "number of vertex names (19) does not match the number of vertices (20)",
            mismatch.to_string()
        );
        assert_eq!(
            "vertex X does not exist",
            GraphError::UnknownVertex("X".to_string()).to_string()
        );
        assert_eq!(
            "vertex name A is assigned more than once",
            GraphError::DuplicateVertexName("A".to_string()).to_string()
        );
        assert_eq!(
            "edge a -> b with weight 3 has no matching reverse edge",
            GraphError::AsymmetricEdge {
                from: "a".to_string(),
                to: "b".to_string(),
                weight: 3
            }
            .to_string()
        );
    }
}
