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
use std::fs::File;
use std::hash::Hash;

use log::info;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use crate::city_map::city_graph;
pub use crate::constants::*;
pub use crate::error::GraphError;
pub use crate::labeled_graph::LabeledGraph;
pub use crate::labeled_graph::Neighbor;
pub use crate::shortest_path::PathReport;
pub use crate::shortest_path::ShortestPath;

pub mod city_map;
mod constants;
mod dijkstra;
mod error;
mod heap_item;
mod labeled_graph;
mod shortest_path;

#[derive(Serialize)]
struct GraphDataRef<'a, L> {
    names: &'a [L],
    adjacency: &'a [Vec<Neighbor>],
}

#[derive(Deserialize)]
struct GraphData<L> {
    names: Vec<L>,
    adjacency: Vec<Vec<Neighbor>>,
}

/// Stores the given graph on disk
pub fn save_to_disk<L: Serialize>(
    g: &LabeledGraph<L>,
    file_name: &str,
) -> Result<(), Box<dyn Error>> {
    let data = GraphDataRef {
        names: g.get_names(),
        adjacency: g.adjacency(),
    };
    let file = File::create(file_name)?;
    bincode::serialize_into(file, &data)?;
    info!("saved graph with {} nodes to {}", g.num_nodes(), file_name);
    Ok(())
}

/// Restores a graph from disk, the label lookup is rebuilt from the stored names
pub fn load_from_disk<L>(file_name: &str) -> Result<LabeledGraph<L>, Box<dyn Error>>
where
    L: DeserializeOwned + Eq + Hash + Clone + fmt::Display,
{
    let file = File::open(file_name)?;
    let data: GraphData<L> = bincode::deserialize_from(file)?;
    let graph = LabeledGraph::from_parts(data.names, data.adjacency)?;
    info!("loaded graph with {} nodes from {}", graph.num_nodes(), file_name);
    Ok(graph)
}
