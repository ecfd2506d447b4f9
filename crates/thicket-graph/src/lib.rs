//! Weighted graphs over hashable vertices, and the classical algorithms that
//! run on them.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`graph`] | [`Graph`] adjacency map and the [`Edge`] triple |
//! | [`iter`] | [`VertexIter`] |
//! | [`algorithms`] | traversals, shortest paths, spanning trees, cut vertices and centrality |
//! | [`error`] | [`GraphError`] |
//!
//! ```
//! use thicket_graph::{algorithms, Graph};
//!
//! let mut g = Graph::new(false, ["a", "b", "c"]);
//! g.add_edge(&"a", &"b", 2).unwrap();
//! g.add_edge(&"b", &"c", 3).unwrap();
//! let paths = algorithms::shortest_path_dijkstra(&"a", &g).unwrap();
//! assert_eq!(paths.distance_to(&"c"), Ok(5));
//! assert_eq!(algorithms::articulation_points(&g), vec!["b"]);
//! ```

pub mod algorithms;
pub mod error;
pub mod graph;
pub mod iter;

pub use error::GraphError;
pub use graph::{Edge, Graph};
pub use iter::VertexIter;
