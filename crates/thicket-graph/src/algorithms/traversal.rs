use std::hash::Hash;

use thicket_collections::{HashDictionary, Queue};

use super::Frame;
use crate::graph::Graph;

/// Result of a whole-graph traversal.
///
/// `order` lists every vertex exactly once, in visiting order. `parent` maps
/// each vertex to the vertex it was discovered from; the first vertex of each
/// component maps to `None`.
#[derive(Clone, Debug)]
pub struct Traversal<T> {
    pub order: Vec<T>,
    pub parent: HashDictionary<T, Option<T>>,
}

impl<T> Traversal<T>
where
    T: Hash + Eq,
{
    fn with_capacity(n: usize) -> Self {
        Self {
            order: Vec::with_capacity(n),
            parent: HashDictionary::new(),
        }
    }
}

/// Breadth-first traversal covering every component.
pub fn bfs<T>(g: &Graph<T>) -> Traversal<T>
where
    T: Hash + Eq + Clone,
{
    let mut walk = Traversal::with_capacity(g.vertex_count());
    let mut queue = Queue::new();
    for root in g {
        if walk.parent.contains(root) {
            continue;
        }
        walk.parent.save(root.clone(), None);
        queue.enqueue(root.clone());
        while let Ok(u) = queue.dequeue() {
            for (w, _) in g.out_edges(&u) {
                if !walk.parent.contains(w) {
                    walk.parent.save(w.clone(), Some(u.clone()));
                    queue.enqueue(w.clone());
                }
            }
            walk.order.push(u);
        }
    }
    walk
}

/// Depth-first traversal covering every component, in preorder.
pub fn dfs<T>(g: &Graph<T>) -> Traversal<T>
where
    T: Hash + Eq + Clone,
{
    let mut walk = Traversal::with_capacity(g.vertex_count());
    let mut stack = Vec::new();
    for root in g {
        if walk.parent.contains(root) {
            continue;
        }
        walk.parent.save(root.clone(), None);
        walk.order.push(root.clone());
        stack.push(Frame::open(g, root.clone()));
        while let Some(frame) = stack.last_mut() {
            let Some(w) = frame.advance() else {
                stack.pop();
                continue;
            };
            if walk.parent.contains(&w) {
                continue;
            }
            walk.parent.save(w.clone(), Some(frame.vertex.clone()));
            walk.order.push(w.clone());
            stack.push(Frame::open(g, w));
        }
    }
    walk
}

/// Two-colours each component breadth first. A self-loop, or any edge between
/// two vertices of the same colour, makes the graph non-bipartite.
pub fn is_bipartite<T>(g: &Graph<T>) -> bool
where
    T: Hash + Eq + Clone,
{
    let mut colour: HashDictionary<T, bool> = HashDictionary::new();
    let mut queue = Queue::new();
    for root in g {
        if colour.contains(root) {
            continue;
        }
        colour.save(root.clone(), false);
        queue.enqueue((root.clone(), false));
        while let Ok((u, side)) = queue.dequeue() {
            for (w, _) in g.out_edges(&u) {
                match colour.get(w) {
                    Ok(&other) if other == side => return false,
                    Ok(_) => {}
                    Err(_) => {
                        colour.save(w.clone(), !side);
                        queue.enqueue((w.clone(), !side));
                    }
                }
            }
        }
    }
    true
}

/// Kahn's algorithm. Vertices on or downstream of a cycle never reach
/// in-degree zero, so a cyclic graph yields only the acyclic prefix of the
/// order.
pub fn topological_sort<T>(g: &Graph<T>) -> Vec<T>
where
    T: Hash + Eq + Clone,
{
    let mut indegree: HashDictionary<T, usize> = HashDictionary::new();
    for v in g {
        indegree.save(v.clone(), 0);
    }
    for v in g {
        for (w, _) in g.out_edges(v) {
            if let Ok(d) = indegree.get_mut(w) {
                *d += 1;
            }
        }
    }

    let mut queue = Queue::new();
    for (v, d) in &indegree {
        if *d == 0 {
            queue.enqueue(v.clone());
        }
    }
    let mut order = Vec::with_capacity(g.vertex_count());
    while let Ok(u) = queue.dequeue() {
        for (w, _) in g.out_edges(&u) {
            if let Ok(d) = indegree.get_mut(w) {
                *d -= 1;
                if *d == 0 {
                    queue.enqueue(w.clone());
                }
            }
        }
        order.push(u);
    }
    order
}
