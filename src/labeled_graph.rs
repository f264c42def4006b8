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

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::constants::{NodeId, Weight};
use crate::dijkstra::Dijkstra;
use crate::error::GraphError;
use crate::shortest_path::{PathReport, ShortestPath};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbor {
    pub adj_node: NodeId,
    pub weight: Weight,
}

impl Neighbor {
    pub fn new(adj_node: NodeId, weight: Weight) -> Neighbor {
        Neighbor { adj_node, weight }
    }
}

/// An undirected weighted graph whose vertices are addressed by labels.
///
/// The vertex count is fixed on construction. Names are assigned once, then
/// edges are added, then the graph can be queried any number of times:
///
/// ```
/// use city_paths::LabeledGraph;
///
/// let mut graph = LabeledGraph::new(3).unwrap();
/// graph.set_vertex_names(vec!['a', 'b', 'c']).unwrap();
/// graph.add_edge(&'a', &'b', 4).unwrap();
/// graph.add_edge(&'b', &'c', 2).unwrap();
/// let path = graph.shortest_path(&'a', &'c').unwrap();
/// assert_eq!(6, path.get_weight());
/// assert_eq!(vec![&'a', &'b', &'c'], graph.path_labels(&path));
/// ```
#[derive(Debug, Clone)]
pub struct LabeledGraph<L> {
    adjacency: Vec<Vec<Neighbor>>,
    names: Vec<L>,
    index: HashMap<L, NodeId>,
    num_edges: usize,
}

impl<L> LabeledGraph<L>
where
    L: Eq + Hash + Clone + fmt::Display,
{
    pub fn new(num_nodes: usize) -> Result<Self, GraphError> {
        if num_nodes == 0 {
            return Err(GraphError::InvalidVertexCount);
        }
        debug!("creating graph with {} nodes", num_nodes);
        Ok(LabeledGraph {
            adjacency: vec![Vec::new(); num_nodes],
            names: Vec::with_capacity(num_nodes),
            index: HashMap::with_capacity(num_nodes),
            num_edges: 0,
        })
    }

    /// Rebuilds a graph from its stored names and adjacency lists. Every arc
    /// must have a reverse arc of the same weight.
    pub(crate) fn from_parts(
        names: Vec<L>,
        adjacency: Vec<Vec<Neighbor>>,
    ) -> Result<Self, GraphError> {
        let mut graph = LabeledGraph::new(adjacency.len())?;
        graph.set_vertex_names(names)?;
        let num_nodes = adjacency.len();
        let mut arcs = Vec::new();
        let mut reverse_arcs = Vec::new();
        for (node, neighbors) in adjacency.iter().enumerate() {
            for neighbor in neighbors {
                if neighbor.adj_node >= num_nodes {
                    return Err(GraphError::UnknownVertex(neighbor.adj_node.to_string()));
                }
                arcs.push((node, neighbor.adj_node, neighbor.weight));
                reverse_arcs.push((neighbor.adj_node, node, neighbor.weight));
            }
        }
        arcs.sort_unstable();
        reverse_arcs.sort_unstable();
        if let Some(&(from, to, weight)) = arcs
            .iter()
            .zip(reverse_arcs.iter())
            .find(|(arc, reverse)| arc != reverse)
            .map(|(arc, _)| arc)
        {
            return Err(graph.asymmetric_edge(from, to, weight));
        }
        // a self loop is its own reverse, add_edge stores it twice in the same list
        for (node, neighbors) in adjacency.iter().enumerate() {
            let loops: Vec<&Neighbor> = neighbors.iter().filter(|n| n.adj_node == node).collect();
            if loops.len() % 2 != 0 {
                return Err(graph.asymmetric_edge(node, node, loops[0].weight));
            }
        }
        graph.adjacency = adjacency;
        // every edge is stored twice, a self loop twice in the same list
        graph.num_edges = arcs.len() / 2;
        Ok(graph)
    }

    fn asymmetric_edge(&self, from: NodeId, to: NodeId, weight: Weight) -> GraphError {
        GraphError::AsymmetricEdge {
            from: self.names[from].to_string(),
            to: self.names[to].to_string(),
            weight,
        }
    }

    /// Assigns one label per vertex, in index order. The label count must equal
    /// the vertex count and labels must be unique, otherwise the graph is left
    /// unchanged.
    pub fn set_vertex_names(&mut self, names: Vec<L>) -> Result<(), GraphError> {
        if names.len() != self.num_nodes() {
            return Err(GraphError::NameCountMismatch {
                expected: self.num_nodes(),
                actual: names.len(),
            });
        }
        let mut index = HashMap::with_capacity(names.len());
        for (node, name) in names.iter().enumerate() {
            if index.insert(name.clone(), node).is_some() {
                return Err(GraphError::DuplicateVertexName(name.to_string()));
            }
        }
        debug!("assigned {} vertex names", names.len());
        self.names = names;
        self.index = index;
        Ok(())
    }

    pub fn resolve(&self, name: &L) -> Result<NodeId, GraphError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex(name.to_string()))
    }

    /// Adds an undirected edge. Parallel edges and self loops are kept as they are.
    pub fn add_edge(&mut self, from: &L, to: &L, weight: Weight) -> Result<(), GraphError> {
        let from_node = self.resolve(from)?;
        let to_node = self.resolve(to)?;
        trace!("adding edge {} - {} with weight {}", from, to, weight);
        self.adjacency[from_node].push(Neighbor::new(to_node, weight));
        self.adjacency[to_node].push(Neighbor::new(from_node, weight));
        self.num_edges += 1;
        Ok(())
    }

    /// Finds the shortest path between two named vertices. An unreachable
    /// target is not an error: the result reports `is_found() == false`.
    pub fn shortest_path(&self, source: &L, target: &L) -> Result<ShortestPath, GraphError> {
        let start = self.resolve(source)?;
        let end = self.resolve(target)?;
        debug!("calculating shortest path {} -> {}", source, target);
        Dijkstra::new(self.num_nodes()).calc_path(&self.adjacency, start, end)
    }

    /// Console report for a path calculated on this graph.
    pub fn report<'a>(&'a self, path: &'a ShortestPath) -> PathReport<'a, L> {
        PathReport::new(path, &self.names)
    }

    pub fn path_labels(&self, path: &ShortestPath) -> Vec<&L> {
        path.get_nodes().iter().map(|node| &self.names[*node]).collect()
    }

    /// Weight of the cheapest edge between two vertices, `None` if they are not adjacent.
    pub fn edge_weight(&self, from: &L, to: &L) -> Result<Option<Weight>, GraphError> {
        let from_node = self.resolve(from)?;
        let to_node = self.resolve(to)?;
        Ok(self.adjacency[from_node]
            .iter()
            .filter(|n| n.adj_node == to_node)
            .map(|n| n.weight)
            .min())
    }
}

impl<L> LabeledGraph<L> {
    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn get_name(&self, node: NodeId) -> Option<&L> {
        self.names.get(node)
    }

    pub fn get_names(&self) -> &[L] {
        &self.names
    }

    /// Arcs leaving `node`, empty for an unknown node.
    pub fn neighbors(&self, node: NodeId) -> &[Neighbor] {
        self.adjacency.get(node).map_or(&[], |neighbors| neighbors.as_slice())
    }

    pub(crate) fn adjacency(&self) -> &[Vec<Neighbor>] {
        &self.adjacency
    }
}
