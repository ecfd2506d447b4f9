//! Classical algorithms over [`Graph`](crate::Graph).
//!
//! Every walk that would naturally recurse (DFS, articulation points) runs on
//! an explicit stack of [`Frame`]s and visits vertices in the same order the
//! recursive formulation would.

pub mod centrality;
pub mod connectivity;
pub mod mst;
pub mod paths;
pub mod traversal;

use std::hash::Hash;

use crate::graph::Graph;

pub use centrality::centrality;
pub use connectivity::articulation_points;
pub use mst::{mst_kruskal, mst_prim, mst_prim_from};
pub use paths::{min_inversions, shortest_path, shortest_path_dijkstra, ShortestPaths, UNREACHABLE};
pub use traversal::{bfs, dfs, is_bipartite, topological_sort, Traversal};

/// One suspended call of a depth-first walk: the vertex being expanded and
/// how far through its neighbour list it has got.
pub(crate) struct Frame<T> {
    pub(crate) vertex: T,
    neighbors: Vec<T>,
    next: usize,
}

impl<T> Frame<T>
where
    T: Hash + Eq + Clone,
{
    pub(crate) fn open(g: &Graph<T>, vertex: T) -> Self {
        let neighbors = g.out_edges(&vertex).map(|(w, _)| w.clone()).collect();
        Self {
            vertex,
            neighbors,
            next: 0,
        }
    }

    pub(crate) fn advance(&mut self) -> Option<T> {
        let w = self.neighbors.get(self.next)?.clone();
        self.next += 1;
        Some(w)
    }
}
