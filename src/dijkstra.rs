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

use std::collections::{BinaryHeap, VecDeque};

use log::{debug, trace, warn};

use crate::constants::{Node, NodeId, Weight, INVALID_NODE, WEIGHT_MAX, WEIGHT_ZERO};
use crate::error::GraphError;
use crate::heap_item::HeapItem;
use crate::labeled_graph::Neighbor;
use crate::shortest_path::ShortestPath;

/// Working state of a single query. It is created per query and dropped
/// afterwards, so queries never share state.
pub struct Dijkstra {
    weights: Vec<Weight>,
    reached: Vec<bool>,
    parents: Vec<Node>,
    heap: BinaryHeap<HeapItem>,
}

impl Dijkstra {
    pub fn new(num_nodes: usize) -> Self {
        Dijkstra {
            weights: vec![WEIGHT_MAX; num_nodes],
            reached: vec![false; num_nodes],
            parents: vec![INVALID_NODE; num_nodes],
            heap: BinaryHeap::new(),
        }
    }

    /// Runs the search from `start` and stops as soon as `end` is popped from
    /// the frontier. Weights are unsigned, so the first pop of `end` carries
    /// its final distance.
    ///
    /// Fails with `GraphError::WeightOverflow` if `end` is connected to `start`
    /// but every path between them weighs more than `WEIGHT_MAX`.
    pub fn calc_path(
        mut self,
        graph: &[Vec<Neighbor>],
        start: NodeId,
        end: NodeId,
    ) -> Result<ShortestPath, GraphError> {
        assert_eq!(
            graph.len(),
            self.weights.len(),
            "dijkstra was created for a different number of nodes"
        );
        assert!(start < graph.len(), "invalid start node");
        assert!(end < graph.len(), "invalid end node");

        self.weights[start] = WEIGHT_ZERO;
        self.reached[start] = true;
        self.heap.push(HeapItem::new(WEIGHT_ZERO, start));
        let mut settled = 0;
        let mut overflowed = false;
        while let Some(curr) = self.heap.pop() {
            if curr.weight > self.weights[curr.node_id] {
                // stale entry, the node was pushed again with a smaller weight
                continue;
            }
            settled += 1;
            trace!("settled node {} at weight {}", curr.node_id, curr.weight);
            if curr.node_id == end {
                debug!(
                    "found path {} -> {} with weight {}, settled {} nodes",
                    start, end, curr.weight, settled
                );
                return Ok(self.build_path(start, end));
            }
            for neighbor in &graph[curr.node_id] {
                let weight = match curr.weight.checked_add(neighbor.weight) {
                    Some(weight) => weight,
                    None => {
                        overflowed = true;
                        continue;
                    }
                };
                let adj_node = neighbor.adj_node;
                if !self.reached[adj_node] || weight < self.weights[adj_node] {
                    self.weights[adj_node] = weight;
                    self.reached[adj_node] = true;
                    self.parents[adj_node] = Node::Node(curr.node_id);
                    self.heap.push(HeapItem::new(weight, adj_node));
                }
            }
        }
        if overflowed && is_connected(graph, start, end) {
            warn!("path weights overflowed while searching {} -> {}", start, end);
            return Err(GraphError::WeightOverflow);
        }
        debug!("no path {} -> {}, settled {} nodes", start, end, settled);
        Ok(ShortestPath::none(start, end))
    }

    fn build_path(&self, start: NodeId, end: NodeId) -> ShortestPath {
        if start == end {
            return ShortestPath::singular(start);
        }
        let mut nodes = vec![end];
        let mut node = self.parents[end];
        while let Some(id) = node.id() {
            nodes.push(id);
            node = self.parents[id];
        }
        nodes.reverse();
        debug_assert_eq!(Some(&start), nodes.first());
        ShortestPath::new(start, end, self.weights[end], nodes)
    }
}

/// Breadth-first reachability, ignoring weights.
fn is_connected(graph: &[Vec<Neighbor>], start: NodeId, end: NodeId) -> bool {
    let mut visited = vec![false; graph.len()];
    let mut queue = VecDeque::new();
    visited[start] = true;
    queue.push_back(start);
    while let Some(node) = queue.pop_front() {
        if node == end {
            return true;
        }
        for neighbor in &graph[node] {
            if !visited[neighbor.adj_node] {
                visited[neighbor.adj_node] = true;
                queue.push_back(neighbor.adj_node);
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_graph(num_nodes: usize, edges: &[(NodeId, NodeId, Weight)]) -> Vec<Vec<Neighbor>> {
        let mut graph = vec![Vec::new(); num_nodes];
        for &(from, to, weight) in edges {
            graph[from].push(Neighbor::new(to, weight));
            graph[to].push(Neighbor::new(from, weight));
        }
        graph
    }

    fn calc_path(graph: &[Vec<Neighbor>], start: NodeId, end: NodeId) -> ShortestPath {
        Dijkstra::new(graph.len())
            .calc_path(graph, start, end)
            .unwrap()
    }

    #[test]
    fn simple_path() {
        //  0 -1- 1 -2- 2
        //  |           |
        //  +-----5-----+
        let graph = create_graph(3, &[(0, 1, 1), (1, 2, 2), (0, 2, 5)]);
        let path = calc_path(&graph, 0, 2);
        assert_eq!(3, path.get_weight());
        assert_eq!(&vec![0, 1, 2], path.get_nodes());
        let back = calc_path(&graph, 2, 0);
        assert_eq!(&vec![2, 1, 0], back.get_nodes());
    }

    #[test]
    fn start_equals_end() {
        let graph = create_graph(2, &[(0, 1, 4)]);
        let path = calc_path(&graph, 1, 1);
        assert!(path.is_found());
        assert_eq!(0, path.get_weight());
        assert_eq!(&vec![1], path.get_nodes());
    }

    #[test]
    fn unreachable() {
        // 0 - 1   2 - 3
        let graph = create_graph(4, &[(0, 1, 1), (2, 3, 1)]);
        let path = calc_path(&graph, 0, 3);
        assert!(!path.is_found());
        assert!(path.get_nodes().is_empty());
    }

    #[test]
    fn parallel_edges_use_cheapest() {
        let graph = create_graph(2, &[(0, 1, 9), (0, 1, 2), (0, 1, 5)]);
        let path = calc_path(&graph, 0, 1);
        assert_eq!(2, path.get_weight());
        assert_eq!(&vec![0, 1], path.get_nodes());
    }

    #[test]
    fn self_loop_is_harmless() {
        let graph = create_graph(2, &[(0, 0, 1), (0, 1, 3)]);
        let path = calc_path(&graph, 0, 1);
        assert_eq!(3, path.get_weight());
        assert_eq!(&vec![0, 1], path.get_nodes());
    }

    #[test]
    fn zero_weight_edges() {
        let graph = create_graph(3, &[(0, 1, 0), (1, 2, 0), (0, 2, 1)]);
        let path = calc_path(&graph, 0, 2);
        assert_eq!(0, path.get_weight());
        assert_eq!(&vec![0, 1, 2], path.get_nodes());
    }

    #[test]
    fn max_weight_edge_is_a_path() {
        let graph = create_graph(2, &[(0, 1, WEIGHT_MAX)]);
        let path = calc_path(&graph, 0, 1);
        assert!(path.is_found());
        assert_eq!(WEIGHT_MAX, path.get_weight());
        assert_eq!(&vec![0, 1], path.get_nodes());
    }

    #[test]
    fn path_weight_can_reach_max() {
        let graph = create_graph(3, &[(0, 1, WEIGHT_MAX - 1), (1, 2, 1)]);
        let path = calc_path(&graph, 0, 2);
        assert!(path.is_found());
        assert_eq!(WEIGHT_MAX, path.get_weight());
        assert_eq!(&vec![0, 1, 2], path.get_nodes());
    }

    #[test]
    fn overflowing_path_is_an_error() {
        let graph = create_graph(3, &[(0, 1, WEIGHT_MAX - 1), (1, 2, WEIGHT_MAX - 1)]);
        assert_eq!(WEIGHT_MAX - 1, calc_path(&graph, 0, 1).get_weight());
        assert_eq!(
            Some(GraphError::WeightOverflow),
            Dijkstra::new(3).calc_path(&graph, 0, 2).err()
        );
    }

    #[test]
    fn overflow_elsewhere_does_not_hide_unreachable() {
        // the search overflows between 1 and 2, but 3 is not connected to 0 at all
        let graph = create_graph(4, &[(0, 1, WEIGHT_MAX), (1, 2, WEIGHT_MAX)]);
        let path = calc_path(&graph, 0, 3);
        assert!(!path.is_found());
        assert!(path.get_nodes().is_empty());
    }

    #[test]
    fn connectivity() {
        let graph = create_graph(4, &[(0, 1, 1), (1, 2, 1)]);
        assert!(is_connected(&graph, 0, 2));
        assert!(is_connected(&graph, 2, 0));
        assert!(is_connected(&graph, 3, 3));
        assert!(!is_connected(&graph, 0, 3));
    }

    #[test]
    fn ties_are_resolved_deterministically() {
        //   1
        //  / \
        // 0   3
        //  \ /
        //   2
        let graph = create_graph(4, &[(0, 2, 1), (2, 3, 1), (0, 1, 1), (1, 3, 1)]);
        let first = calc_path(&graph, 0, 3);
        assert_eq!(2, first.get_weight());
        // node 1 is settled before node 2 and relaxes 3 first
        assert_eq!(&vec![0, 1, 3], first.get_nodes());
        for _ in 0..10 {
            assert_eq!(first.get_nodes(), calc_path(&graph, 0, 3).get_nodes());
        }
    }

    #[test]
    #[should_panic]
    fn node_count_must_match() {
        let graph = create_graph(3, &[(0, 1, 1)]);
        let _ = Dijkstra::new(2).calc_path(&graph, 0, 1);
    }
}
