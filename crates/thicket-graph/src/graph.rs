use std::hash::Hash;

use rand::Rng;
use thicket_collections::HashDictionary;
use tracing::trace;

use crate::error::GraphError;
use crate::iter::VertexIter;

/// Weighted edge as reported by [`Graph::edges`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge<T> {
    pub source: T,
    pub target: T,
    pub weight: i64,
}

/// Adjacency map of maps: vertex -> (neighbour -> weight).
///
/// An undirected graph stores every edge on both endpoints, and every
/// mutation keeps the two entries in step.
#[derive(Clone, Debug)]
pub struct Graph<T> {
    adjacency: HashDictionary<T, HashDictionary<T, i64>>,
    directed: bool,
}

impl<T> Graph<T>
where
    T: Hash + Eq + Clone,
{
    pub fn new<I>(directed: bool, vertices: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut graph = Self {
            adjacency: HashDictionary::new(),
            directed,
        };
        for v in vertices {
            graph.add_vertex(v);
        }
        graph
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Adds `v` with no edges. Adding a vertex that already exists keeps its
    /// edges.
    pub fn add_vertex(&mut self, v: T) {
        if !self.adjacency.contains(&v) {
            self.adjacency.save(v, HashDictionary::new());
        }
    }

    /// Removes `v` along with every edge that touches it.
    pub fn remove_vertex(&mut self, v: &T) -> Result<(), GraphError> {
        if !self.contains(v) {
            return Err(GraphError::VertexNotFound);
        }
        self.adjacency.delete(v)?;
        for adj in self.adjacency.values_mut() {
            if adj.contains(v) {
                adj.delete(v)?;
            }
        }
        Ok(())
    }

    /// Inserts or re-weights the edge `u -> v` (and `v -> u` when undirected).
    pub fn add_edge(&mut self, u: &T, v: &T, weight: i64) -> Result<(), GraphError> {
        if !self.contains(u) || !self.contains(v) {
            return Err(GraphError::VertexNotFound);
        }
        trace!(weight, directed = self.directed, "adding edge");
        self.adjacency.get_mut(u)?.save(v.clone(), weight);
        if !self.directed {
            self.adjacency.get_mut(v)?.save(u.clone(), weight);
        }
        Ok(())
    }

    pub fn remove_edge(&mut self, u: &T, v: &T) -> Result<(), GraphError> {
        if !self.contains(u) || !self.contains(v) {
            return Err(GraphError::VertexNotFound);
        }
        if !self.contains_edge(u, v) {
            return Err(GraphError::EdgeNotFound);
        }
        self.adjacency.get_mut(u)?.delete(v)?;
        if !self.directed {
            self.adjacency.get_mut(v)?.delete(u)?;
        }
        Ok(())
    }

    pub fn weight(&self, u: &T, v: &T) -> Result<i64, GraphError> {
        if !self.contains(v) {
            return Err(GraphError::VertexNotFound);
        }
        let adj = self.adjacency.get(u).map_err(|_| GraphError::VertexNotFound)?;
        adj.get(v).copied().map_err(|_| GraphError::EdgeNotFound)
    }

    pub fn contains(&self, v: &T) -> bool {
        self.adjacency.contains(v)
    }

    /// False when either endpoint is missing.
    pub fn contains_edge(&self, u: &T, v: &T) -> bool {
        self.adjacency.get(u).is_ok_and(|adj| adj.contains(v))
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.size()
    }

    pub fn vertices(&self) -> Vec<T> {
        self.adjacency.keys().cloned().collect()
    }

    pub fn adjacent(&self, v: &T) -> Result<Vec<T>, GraphError> {
        let adj = self.adjacency.get(v).map_err(|_| GraphError::VertexNotFound)?;
        Ok(adj.keys().cloned().collect())
    }

    /// Neighbours of `v` paired with the weight of the edge leading to them.
    pub fn neighbors(&self, v: &T) -> Result<impl Iterator<Item = (&T, i64)> + '_, GraphError> {
        let adj = self.adjacency.get(v).map_err(|_| GraphError::VertexNotFound)?;
        Ok(adj.iter().map(|(w, weight)| (w, *weight)))
    }

    /// Like [`neighbors`](Self::neighbors), but yields nothing for an unknown
    /// vertex.
    pub(crate) fn out_edges<'a>(&'a self, v: &T) -> impl Iterator<Item = (&'a T, i64)> + 'a {
        self.adjacency
            .get(v)
            .ok()
            .into_iter()
            .flat_map(|adj| adj.iter().map(|(w, weight)| (w, *weight)))
    }

    pub fn random_vertex(&self) -> Result<T, GraphError> {
        self.random_vertex_with(&mut rand::thread_rng())
    }

    pub fn random_vertex_with<R>(&self, rng: &mut R) -> Result<T, GraphError>
    where
        R: Rng + ?Sized,
    {
        let count = self.vertex_count();
        if count == 0 {
            return Err(GraphError::EmptyGraph);
        }
        let pick = rng.gen_range(0..count);
        self.adjacency
            .keys()
            .nth(pick)
            .cloned()
            .ok_or(GraphError::EmptyGraph)
    }

    pub fn iter(&self) -> VertexIter<'_, T> {
        VertexIter::new(self.adjacency.iter())
    }

    /// Every edge once. Undirected edges are reported from whichever endpoint
    /// is scanned first.
    pub fn edges(&self) -> Vec<Edge<T>> {
        let mut edges = Vec::new();
        let mut scanned: HashDictionary<T, ()> = HashDictionary::new();
        for (u, adj) in &self.adjacency {
            for (v, weight) in adj {
                if self.directed || !scanned.contains(v) {
                    edges.push(Edge {
                        source: u.clone(),
                        target: v.clone(),
                        weight: *weight,
                    });
                }
            }
            scanned.save(u.clone(), ());
        }
        edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    pub fn total_weight(&self) -> i64 {
        self.edges().iter().map(|e| e.weight).sum()
    }
}

impl<'a, T> IntoIterator for &'a Graph<T>
where
    T: Hash + Eq + Clone,
{
    type Item = &'a T;
    type IntoIter = VertexIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
