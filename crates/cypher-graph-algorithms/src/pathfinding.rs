//! Pathfinding algorithms
//!
//! Unweighted (BFS) and weighted (Dijkstra) single-pair shortest paths.

use super::common::{GraphView, NodeId};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, VecDeque};

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub source: NodeId,
    pub target: NodeId,
    /// Nodes on the path, `source` first and `target` last
    pub path: Vec<NodeId>,
    pub cost: f64,
}

impl PathResult {
    /// Number of hops on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

fn reconstruct(view: &GraphView, parent: &HashMap<usize, usize>, target_idx: usize) -> Vec<NodeId> {
    let mut path = vec![view.index_to_node[target_idx]];
    let mut curr = target_idx;
    while let Some(&prev) = parent.get(&curr) {
        path.push(view.index_to_node[prev]);
        curr = prev;
    }
    path.reverse();
    path
}

/// Breadth-First Search (Unweighted Shortest Path)
///
/// Neighbours are visited in successor order, so ties between equally short
/// paths resolve to the one using the earliest-inserted edges.
pub fn bfs(view: &GraphView, source: NodeId, target: NodeId) -> Option<PathResult> {
    let source_idx = *view.node_to_index.get(&source)?;
    let target_idx = *view.node_to_index.get(&target)?;

    let mut queue = VecDeque::new();
    let mut visited = vec![false; view.node_count];
    let mut parent = HashMap::new();

    queue.push_back(source_idx);
    visited[source_idx] = true;

    while let Some(current_idx) = queue.pop_front() {
        if current_idx == target_idx {
            let path = reconstruct(view, &parent, target_idx);
            return Some(PathResult {
                source,
                target,
                cost: (path.len() - 1) as f64,
                path,
            });
        }

        for &next_idx in view.successors(current_idx) {
            if !visited[next_idx] {
                visited[next_idx] = true;
                parent.insert(next_idx, current_idx);
                queue.push_back(next_idx);
            }
        }
    }

    None
}

/// State for Dijkstra priority queue
#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node_idx: usize,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare costs reversed for min-heap
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node_idx.cmp(&self.node_idx))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's Algorithm (Weighted Shortest Path)
///
/// Uses edge weights from GraphView if available, otherwise assumes 1.0.
/// Negative weights are ignored.
pub fn dijkstra(view: &GraphView, source: NodeId, target: NodeId) -> Option<PathResult> {
    let source_idx = *view.node_to_index.get(&source)?;
    let target_idx = *view.node_to_index.get(&target)?;

    let mut dist = vec![f64::INFINITY; view.node_count];
    let mut parent = HashMap::new();
    let mut heap = BinaryHeap::new();

    dist[source_idx] = 0.0;
    heap.push(State { cost: 0.0, node_idx: source_idx });

    while let Some(State { cost, node_idx }) = heap.pop() {
        if node_idx == target_idx {
            return Some(PathResult {
                source,
                target,
                path: reconstruct(view, &parent, target_idx),
                cost,
            });
        }

        if cost > dist[node_idx] {
            continue;
        }

        let weights = view.weights(node_idx);
        for (i, &next_idx) in view.successors(node_idx).iter().enumerate() {
            let weight = weights.map_or(1.0, |w| w[i]);
            if weight < 0.0 {
                continue;
            }

            let next_cost = cost + weight;
            if next_cost < dist[next_idx] {
                dist[next_idx] = next_cost;
                parent.insert(next_idx, node_idx);
                heap.push(State { cost: next_cost, node_idx: next_idx });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::GraphView;

    #[test]
    fn test_bfs_chain_with_parallel_edges() {
        // 10->20 twice, 20->30
        let view = GraphView::from_edge_list(vec![10, 20, 30], &[(0, 1), (0, 1), (1, 2)], None);

        let found = bfs(&view, 10, 30).unwrap();
        assert_eq!(found.path, vec![10, 20, 30]);
        assert_eq!(found.cost, 2.0);
        assert_eq!(found.hops(), 2);
    }

    #[test]
    fn test_bfs_respects_direction() {
        let view = GraphView::from_edge_list(vec![1, 2], &[(0, 1)], None);
        assert!(bfs(&view, 2, 1).is_none());
    }

    #[test]
    fn test_bfs_same_source_and_target() {
        let view = GraphView::from_edge_list(vec![1, 2], &[(0, 1)], None);
        let result = bfs(&view, 1, 1).unwrap();
        assert_eq!(result.path, vec![1]);
        assert_eq!(result.cost, 0.0);
    }

    #[test]
    fn test_unknown_node() {
        let view = GraphView::from_edge_list(vec![1, 2], &[(0, 1)], None);
        assert!(bfs(&view, 1, 99).is_none());
        assert!(dijkstra(&view, 99, 1).is_none());
    }

    #[test]
    fn test_dijkstra_prefers_cheaper_parallel_edge() {
        // 10->20 costs 7 or 2, 10->30 costs 1, 30->20 costs 4
        let edges = [(0, 1), (0, 1), (0, 2), (2, 1)];
        let weights = [7.0, 2.0, 1.0, 4.0];
        let view = GraphView::from_edge_list(vec![10, 20, 30], &edges, Some(&weights));

        let found = dijkstra(&view, 10, 20).unwrap();
        assert_eq!(found.path, vec![10, 20]);
        assert_eq!(found.cost, 2.0);
    }

    #[test]
    fn test_dijkstra_unweighted_matches_bfs_length() {
        // 1->2->3->4 and shortcut 1->4
        let edges = [(0, 1), (1, 2), (2, 3), (0, 3)];
        let view = GraphView::from_edge_list(vec![1, 2, 3, 4], &edges, None);

        let result = dijkstra(&view, 1, 4).unwrap();
        assert_eq!(result.path, vec![1, 4]);
        assert_eq!(result.cost, 1.0);
    }

    #[test]
    fn test_dijkstra_skips_negative_weights() {
        let edges = [(0, 1), (0, 2), (2, 1)];
        let weights = [-100.0, 1.0, 1.0];
        let view = GraphView::from_edge_list(vec![1, 2, 3], &edges, Some(&weights));

        let result = dijkstra(&view, 1, 2).unwrap();
        assert_eq!(result.path, vec![1, 3, 2]);
        assert_eq!(result.cost, 2.0);
    }
}
