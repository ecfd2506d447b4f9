//! Minimum spanning trees. Both builders return an undirected graph over all
//! vertices of the input and assume the input is connected; on a
//! disconnected graph Prim spans only the component it starts in.

use std::hash::Hash;

use thicket_collections::{heap_sort, HashDictionary, Heap, PriorityQueue, UnionFind};
use tracing::debug;

use crate::error::GraphError;
use crate::graph::{Edge, Graph};

fn by_weight_ascending<T>(a: &Edge<T>, b: &Edge<T>) -> i32 {
    a.weight.cmp(&b.weight) as i32
}

fn push_frontier<T, C>(g: &Graph<T>, from: &T, visited: &HashDictionary<T, ()>, frontier: &mut Heap<Edge<T>, C>)
where
    T: Hash + Eq + Clone,
    C: Fn(&Edge<T>, &Edge<T>) -> i32,
{
    for (to, weight) in g.out_edges(from) {
        if !visited.contains(to) {
            frontier.enqueue(Edge {
                source: from.clone(),
                target: to.clone(),
                weight,
            });
        }
    }
}

/// Prim's algorithm grown from a random vertex.
pub fn mst_prim<T>(g: &Graph<T>) -> Result<Graph<T>, GraphError>
where
    T: Hash + Eq + Clone,
{
    let source = g.random_vertex()?;
    mst_prim_from(g, &source)
}

pub fn mst_prim_from<T>(g: &Graph<T>, source: &T) -> Result<Graph<T>, GraphError>
where
    T: Hash + Eq + Clone,
{
    if !g.contains(source) {
        return Err(GraphError::VertexNotFound);
    }
    let mut visited: HashDictionary<T, ()> = HashDictionary::new();
    let mut frontier = Heap::new(|a: &Edge<T>, b: &Edge<T>| by_weight_ascending(b, a));
    let mut tree = Graph::new(false, g.iter().cloned());

    visited.save(source.clone(), ());
    push_frontier(g, source, &visited, &mut frontier);
    while let Ok(edge) = frontier.dequeue() {
        if visited.contains(&edge.target) {
            continue;
        }
        tree.add_edge(&edge.source, &edge.target, edge.weight)?;
        visited.save(edge.target.clone(), ());
        push_frontier(g, &edge.target, &visited, &mut frontier);
    }
    debug!(total_weight = tree.total_weight(), "prim spanning tree built");
    Ok(tree)
}

/// Kruskal's algorithm: edges in ascending weight, skipping any whose
/// endpoints are already joined.
pub fn mst_kruskal<T>(g: &Graph<T>) -> Result<Graph<T>, GraphError>
where
    T: Hash + Eq + Clone,
{
    let mut sets = UnionFind::new(g.iter().cloned());
    let mut edges = g.edges();
    heap_sort(&mut edges, by_weight_ascending);

    let mut tree = Graph::new(false, g.iter().cloned());
    for edge in edges {
        if sets.connected(&edge.source, &edge.target)? {
            continue;
        }
        tree.add_edge(&edge.source, &edge.target, edge.weight)?;
        sets.union(&edge.source, &edge.target)?;
    }
    debug!(total_weight = tree.total_weight(), "kruskal spanning tree built");
    Ok(tree)
}
