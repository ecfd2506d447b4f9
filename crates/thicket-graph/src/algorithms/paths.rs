use std::hash::Hash;

use thicket_collections::{HashDictionary, Heap, PriorityQueue, Queue};
use tracing::trace;

use crate::error::GraphError;
use crate::graph::Graph;

/// Distance recorded for vertices the source cannot reach.
pub const UNREACHABLE: i64 = i64::MAX;

/// Single-source shortest-path tree.
#[derive(Clone, Debug)]
pub struct ShortestPaths<T> {
    source: T,
    parent: HashDictionary<T, Option<T>>,
    distance: HashDictionary<T, i64>,
}

impl<T> ShortestPaths<T>
where
    T: Hash + Eq + Clone,
{
    fn seeded(g: &Graph<T>, source: &T) -> Result<Self, GraphError> {
        if !g.contains(source) {
            return Err(GraphError::VertexNotFound);
        }
        let mut parent = HashDictionary::new();
        let mut distance = HashDictionary::new();
        for v in g {
            parent.save(v.clone(), None);
            distance.save(v.clone(), UNREACHABLE);
        }
        distance.save(source.clone(), 0);
        Ok(Self {
            source: source.clone(),
            parent,
            distance,
        })
    }

    fn relax(&mut self, from: &T, to: &T, distance: i64) {
        self.distance.save(to.clone(), distance);
        self.parent.save(to.clone(), Some(from.clone()));
    }

    pub fn source(&self) -> &T {
        &self.source
    }

    pub fn distance_to(&self, v: &T) -> Result<i64, GraphError> {
        self.distance.get(v).copied().map_err(|_| GraphError::VertexNotFound)
    }

    pub fn parent_of(&self, v: &T) -> Result<Option<&T>, GraphError> {
        self.parent
            .get(v)
            .map(Option::as_ref)
            .map_err(|_| GraphError::VertexNotFound)
    }

    pub fn distances(&self) -> &HashDictionary<T, i64> {
        &self.distance
    }

    pub fn parents(&self) -> &HashDictionary<T, Option<T>> {
        &self.parent
    }

    /// Vertices from the source to `target`, both ends included. `None` when
    /// `target` is unknown or unreachable.
    pub fn path_to(&self, target: &T) -> Option<Vec<T>> {
        if *self.distance.get(target).ok()? == UNREACHABLE {
            return None;
        }
        let mut path = vec![target.clone()];
        let mut curr = target.clone();
        while curr != self.source {
            curr = self.parent.get(&curr).ok()?.clone()?;
            path.push(curr.clone());
        }
        path.reverse();
        Some(path)
    }
}

/// Hop counts from `source`, by breadth-first layering.
pub fn shortest_path<T>(source: &T, g: &Graph<T>) -> Result<ShortestPaths<T>, GraphError>
where
    T: Hash + Eq + Clone,
{
    let mut paths = ShortestPaths::seeded(g, source)?;
    let mut queue = Queue::new();
    queue.enqueue(source.clone());
    while let Ok(u) = queue.dequeue() {
        let du = *paths.distance.get(&u)?;
        for (w, _) in g.out_edges(&u) {
            if *paths.distance.get(w)? == UNREACHABLE {
                paths.relax(&u, w, du + 1);
                queue.enqueue(w.clone());
            }
        }
    }
    Ok(paths)
}

/// Weighted distances from `source`. Weights must be non-negative; this is
/// not checked.
pub fn shortest_path_dijkstra<T>(source: &T, g: &Graph<T>) -> Result<ShortestPaths<T>, GraphError>
where
    T: Hash + Eq + Clone,
{
    let mut paths = ShortestPaths::seeded(g, source)?;
    // Inverted so the max-heap serves the closest vertex first.
    let mut frontier = Heap::new(|a: &(T, i64), b: &(T, i64)| b.1.cmp(&a.1) as i32);
    frontier.enqueue((source.clone(), 0));
    while let Ok((u, du)) = frontier.dequeue() {
        if du > *paths.distance.get(&u)? {
            continue;
        }
        for (w, weight) in g.out_edges(&u) {
            let candidate = du.saturating_add(weight);
            if candidate < *paths.distance.get(w)? {
                trace!(distance = candidate, "relaxing edge");
                paths.relax(&u, w, candidate);
                frontier.enqueue((w.clone(), candidate));
            }
        }
    }
    Ok(paths)
}

/// Fewest arcs of a directed graph that must be reversed for `t` to become
/// reachable from `s`, or [`UNREACHABLE`].
///
/// Each existing arc costs 0 to follow and each missing reverse arc costs 1,
/// then Dijkstra measures `s -> t` on that auxiliary graph.
pub fn min_inversions<T>(g: &Graph<T>, s: &T, t: &T) -> Result<i64, GraphError>
where
    T: Hash + Eq + Clone,
{
    if !g.contains(t) {
        return Err(GraphError::VertexNotFound);
    }
    let mut weighted = Graph::new(true, g.iter().cloned());
    for u in g {
        for (v, _) in g.out_edges(u) {
            weighted.add_edge(u, v, 0)?;
            if !g.contains_edge(v, u) {
                weighted.add_edge(v, u, 1)?;
            }
        }
    }
    shortest_path_dijkstra(s, &weighted)?.distance_to(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_source_is_rejected() {
        let g = Graph::new(false, [1, 2]);
        assert_eq!(shortest_path(&9, &g).err(), Some(GraphError::VertexNotFound));
        assert_eq!(shortest_path_dijkstra(&9, &g).err(), Some(GraphError::VertexNotFound));
    }

    #[test]
    fn unreachable_vertices_keep_sentinel() {
        let mut g = Graph::new(true, 0..3);
        g.add_edge(&0, &1, 5).unwrap();
        let paths = shortest_path_dijkstra(&0, &g).unwrap();
        assert_eq!(paths.distance_to(&1), Ok(5));
        assert_eq!(paths.distance_to(&2), Ok(UNREACHABLE));
        assert_eq!(paths.path_to(&2), None);
        assert_eq!(paths.path_to(&0), Some(vec![0]));
        assert_eq!(paths.parent_of(&0), Ok(None));
    }

    #[test]
    fn dijkstra_prefers_lighter_detour() {
        let mut g = Graph::new(true, ['a', 'b', 'c']);
        g.add_edge(&'a', &'c', 10).unwrap();
        g.add_edge(&'a', &'b', 3).unwrap();
        g.add_edge(&'b', &'c', 4).unwrap();
        let paths = shortest_path_dijkstra(&'a', &g).unwrap();
        assert_eq!(paths.distance_to(&'c'), Ok(7));
        assert_eq!(paths.path_to(&'c'), Some(vec!['a', 'b', 'c']));

        let hops = shortest_path(&'a', &g).unwrap();
        assert_eq!(hops.distance_to(&'c'), Ok(1));
    }

    #[test]
    fn min_inversions_counts_reversed_arcs() {
        // 0 -> 1 <- 2 -> 3: reaching 3 from 0 needs 1 -> 2 reversed.
        let mut g = Graph::new(true, 0..4);
        g.add_edge(&0, &1, 1).unwrap();
        g.add_edge(&2, &1, 1).unwrap();
        g.add_edge(&2, &3, 1).unwrap();
        assert_eq!(min_inversions(&g, &0, &3), Ok(1));
        assert_eq!(min_inversions(&g, &3, &0), Ok(2));
        assert_eq!(min_inversions(&g, &0, &1), Ok(0));
    }
}
