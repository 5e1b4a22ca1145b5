//! Shared utilities for graph algorithms
//!
//! Provides a read-only, dense view of a directed multigraph for algorithm execution.

use std::collections::HashMap;

/// Node Identifier type (u64)
pub type NodeId = u64;

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
///
/// Parallel edges and self-loops are kept: a multigraph with two `a -> b`
/// edges has `b` twice in the successor slice of `a`.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: HashMap<NodeId, usize>,

    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<usize>,

    /// Offsets into `in_sources`. Size = node_count + 1
    pub in_offsets: Vec<usize>,
    /// Contiguous array of source node indices
    pub in_sources: Vec<usize>,

    /// Edge weights: aligned with `out_targets`
    pub weights: Option<Vec<f64>>,
}

impl GraphView {
    /// Build a view from an edge list over dense indices.
    ///
    /// `edges` holds `(source_index, target_index)` pairs; `weights`, when
    /// present, must be aligned with `edges`. Edges referencing an index
    /// outside `0..index_to_node.len()` are dropped.
    pub fn from_edge_list(
        index_to_node: Vec<NodeId>,
        edges: &[(usize, usize)],
        weights: Option<&[f64]>,
    ) -> Self {
        let node_count = index_to_node.len();
        let node_to_index = index_to_node
            .iter()
            .enumerate()
            .map(|(idx, &id)| (id, idx))
            .collect();

        let valid = |&&(u, v): &&(usize, usize)| u < node_count && v < node_count;

        // Counting pass
        let mut out_offsets = vec![0usize; node_count + 1];
        let mut in_offsets = vec![0usize; node_count + 1];
        for &(u, v) in edges.iter().filter(valid) {
            out_offsets[u + 1] += 1;
            in_offsets[v + 1] += 1;
        }
        for i in 0..node_count {
            out_offsets[i + 1] += out_offsets[i];
            in_offsets[i + 1] += in_offsets[i];
        }

        // Placement pass, stable with respect to edge order
        let total_out = out_offsets[node_count];
        let total_in = in_offsets[node_count];
        let mut out_targets = vec![0usize; total_out];
        let mut in_sources = vec![0usize; total_in];
        let mut flat_weights = weights.map(|_| vec![0.0f64; total_out]);
        let mut out_cursor = out_offsets.clone();
        let mut in_cursor = in_offsets.clone();

        for (i, &(u, v)) in edges.iter().enumerate() {
            if u >= node_count || v >= node_count {
                continue;
            }
            let slot = out_cursor[u];
            out_targets[slot] = v;
            out_cursor[u] += 1;

            if let (Some(w_flat), Some(w)) = (flat_weights.as_mut(), weights) {
                w_flat[slot] = w.get(i).copied().unwrap_or(1.0);
            }

            in_sources[in_cursor[v]] = u;
            in_cursor[v] += 1;
        }

        GraphView {
            node_count,
            index_to_node,
            node_to_index,
            out_offsets,
            out_targets,
            in_offsets,
            in_sources,
            weights: flat_weights,
        }
    }

    /// Total number of edges in the view
    pub fn edge_count(&self) -> usize {
        self.out_targets.len()
    }

    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get the in-degree of a node (by index)
    pub fn in_degree(&self, idx: usize) -> usize {
        self.in_offsets[idx + 1] - self.in_offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: usize) -> &[usize] {
        &self.out_targets[self.out_offsets[idx]..self.out_offsets[idx + 1]]
    }

    /// Get incoming neighbors (predecessors) of a node
    pub fn predecessors(&self, idx: usize) -> &[usize] {
        &self.in_sources[self.in_offsets[idx]..self.in_offsets[idx + 1]]
    }

    /// Get weights for outgoing edges of a node
    pub fn weights(&self, idx: usize) -> Option<&[f64]> {
        self.weights
            .as_ref()
            .map(|w| &w[self.out_offsets[idx]..self.out_offsets[idx + 1]])
    }
}
