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

use crate::constants::Weight;
use crate::error::GraphError;
use crate::labeled_graph::LabeledGraph;

pub const CITY_NAMES: [char; 20] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'Z',
];

/// Roads between the locations of the city map, weighted by travel distance in km.
pub const CITY_ROADS: [(char, char, Weight); 41] = [
    ('Z', 'A', 6),
    ('Z', 'S', 11),
    ('Z', 'M', 7),
    ('Z', 'B', 8),
    ('M', 'D', 8),
    ('M', 'C', 5),
    ('M', 'B', 8),
    ('D', 'C', 8),
    ('C', 'B', 8),
    ('C', 'E', 8),
    ('A', 'B', 10),
    ('A', 'N', 7),
    ('S', 'A', 6),
    ('S', 'R', 12),
    ('F', 'N', 7),
    ('F', 'A', 8),
    ('R', 'H', 16),
    ('R', 'I', 12),
    ('I', 'H', 18),
    ('H', 'G', 11),
    ('H', 'S', 8),
    ('G', 'F', 5),
    ('G', 'S', 8),
    ('F', 'S', 8),
    ('N', 'B', 8),
    ('N', 'Q', 6),
    ('N', 'L', 5),
    ('F', 'L', 7),
    ('B', 'E', 10),
    ('B', 'O', 10),
    ('B', 'Q', 9),
    ('E', 'O', 8),
    ('Q', 'O', 5),
    ('Q', 'K', 8),
    ('O', 'K', 8),
    ('L', 'Q', 4),
    ('L', 'K', 11),
    ('L', 'P', 9),
    ('P', 'K', 7),
    ('P', 'J', 10),
    ('K', 'J', 9),
];

pub fn city_graph() -> Result<LabeledGraph<char>, GraphError> {
    let mut graph = LabeledGraph::new(CITY_NAMES.len())?;
    graph.set_vertex_names(CITY_NAMES.to_vec())?;
    for (from, to, distance) in CITY_ROADS.iter() {
        graph.add_edge(from, to, *distance)?;
    }
    Ok(graph)
}
