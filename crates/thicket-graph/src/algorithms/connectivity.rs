use std::hash::Hash;

use thicket_collections::HashDictionary;
use tracing::trace;

use super::Frame;
use crate::graph::Graph;

fn lower<T>(low: &mut HashDictionary<T, usize>, v: &T, to: usize)
where
    T: Hash + Eq,
{
    if let Ok(l) = low.get_mut(v) {
        *l = (*l).min(to);
    }
}

/// Vertices whose removal disconnects their component of an undirected
/// graph.
///
/// One depth-first forest assigns each vertex its discovery order and a
/// low-link: the smallest order reachable from its subtree through a single
/// back edge. A non-root `v` is a cut vertex when some child `w` has
/// `low(w) >= order(v)`; a root is one when it has more than one child.
pub fn articulation_points<T>(g: &Graph<T>) -> Vec<T>
where
    T: Hash + Eq + Clone,
{
    let mut order: HashDictionary<T, usize> = HashDictionary::new();
    let mut low: HashDictionary<T, usize> = HashDictionary::new();
    let mut parent: HashDictionary<T, T> = HashDictionary::new();
    let mut seen: HashDictionary<T, ()> = HashDictionary::new();
    let mut points = Vec::new();
    let mut clock = 0;
    let mut stack = Vec::new();

    for root in g {
        if order.contains(root) {
            continue;
        }
        order.save(root.clone(), clock);
        low.save(root.clone(), clock);
        clock += 1;
        let mut root_children = 0;
        stack.push(Frame::open(g, root.clone()));

        while let Some(frame) = stack.last_mut() {
            let v = frame.vertex.clone();
            match frame.advance() {
                Some(w) => match order.get(&w) {
                    Ok(&ow) => {
                        if parent.get(&v).ok() != Some(&w) {
                            lower(&mut low, &v, ow);
                        }
                    }
                    Err(_) => {
                        order.save(w.clone(), clock);
                        low.save(w.clone(), clock);
                        clock += 1;
                        parent.save(w.clone(), v.clone());
                        if v == *root {
                            root_children += 1;
                        }
                        stack.push(Frame::open(g, w));
                    }
                },
                None => {
                    stack.pop();
                    let Ok(u) = parent.get(&v) else {
                        continue;
                    };
                    let (Ok(&lv), Ok(&ou)) = (low.get(&v), order.get(u)) else {
                        continue;
                    };
                    let u = u.clone();
                    lower(&mut low, &u, lv);
                    if u != *root && lv >= ou && !seen.contains(&u) {
                        trace!(order = ou, "articulation point found");
                        seen.save(u.clone(), ());
                        points.push(u);
                    }
                }
            }
        }

        if root_children > 1 {
            points.push(root.clone());
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn undirected(n: u32, edges: &[(u32, u32)]) -> Graph<u32> {
        let mut g = Graph::new(false, 0..n);
        for (u, v) in edges {
            g.add_edge(u, v, 1).unwrap();
        }
        g
    }

    fn sorted(mut v: Vec<u32>) -> Vec<u32> {
        v.sort_unstable();
        v
    }

    #[test]
    fn path_interior_vertices_are_cut_vertices() {
        let g = undirected(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]);
        assert_eq!(sorted(articulation_points(&g)), vec![1, 2, 3]);
    }

    #[test]
    fn cycle_has_none() {
        let g = undirected(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert!(articulation_points(&g).is_empty());
    }

    #[test]
    fn two_triangles_sharing_a_vertex() {
        let g = undirected(5, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]);
        assert_eq!(articulation_points(&g), vec![2]);
    }

    #[test]
    fn each_component_is_searched() {
        let g = undirected(7, &[(0, 1), (0, 2), (0, 3), (4, 5), (5, 6)]);
        assert_eq!(sorted(articulation_points(&g)), vec![0, 5]);
    }
}
