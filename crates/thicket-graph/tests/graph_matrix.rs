use proptest::prelude::*;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use thicket_graph::{Graph, GraphError};

fn letters() -> Graph<&'static str> {
    let mut g = Graph::new(false, ["A", "B", "C", "D", "E", "F", "G", "H"]);
    for (u, v, w) in [
        ("A", "B", 1),
        ("A", "C", 2),
        ("B", "D", 3),
        ("C", "E", 4),
        ("D", "F", 5),
        ("E", "G", 6),
        ("F", "H", 7),
    ] {
        g.add_edge(&u, &v, w).unwrap();
    }
    g
}

fn sorted<T: Ord>(mut v: Vec<T>) -> Vec<T> {
    v.sort();
    v
}

#[test]
fn undirected_graph_matrix() {
    let mut g = Graph::new(false, vec![1, 2, 3, 4, 5]);
    assert!(!g.is_directed());
    assert!(g.contains(&1));
    assert!(g.contains(&2));
    assert!(!g.contains(&6));

    g.add_edge(&1, &2, 10).unwrap();
    assert!(g.contains_edge(&1, &2));
    assert!(g.contains_edge(&2, &1));
    assert_eq!(g.weight(&1, &2), Ok(10));
    assert_eq!(g.weight(&2, &1), Ok(10));

    g.remove_edge(&1, &2).unwrap();
    assert!(!g.contains_edge(&1, &2));
    assert!(!g.contains_edge(&2, &1));

    g.add_vertex(6);
    assert!(g.contains(&6));
    g.remove_vertex(&6).unwrap();
    assert!(!g.contains(&6));

    g.add_edge(&1, &3, 5).unwrap();
    g.add_edge(&1, &4, 15).unwrap();
    assert_eq!(sorted(g.adjacent(&1).unwrap()), vec![3, 4]);
}

#[test]
fn directed_graph_matrix() {
    let mut g = Graph::new(true, vec![1, 2, 3, 4, 5]);
    assert!(g.is_directed());
    g.add_edge(&1, &2, 10).unwrap();
    assert!(g.contains_edge(&1, &2));
    assert!(!g.contains_edge(&2, &1));
    assert_eq!(g.weight(&1, &2), Ok(10));
    assert_eq!(g.weight(&2, &1), Err(GraphError::EdgeNotFound));
    g.remove_edge(&1, &2).unwrap();
    assert!(!g.contains_edge(&1, &2));
}

#[test]
fn random_vertex_matrix() {
    let vertices = [1, 2, 3, 4, 5];
    let g = Graph::new(false, vertices);
    let v = g.random_vertex().unwrap();
    assert!(vertices.contains(&v));

    let mut rng = Xoshiro256StarStar::seed_from_u64(0x7157);
    let mut hits = [0usize; 5];
    for _ in 0..500 {
        let v = g.random_vertex_with(&mut rng).unwrap();
        hits[v as usize - 1] += 1;
    }
    assert!(hits.iter().all(|&n| n > 0));
}

#[test]
fn graph_operations_matrix() {
    let mut g = letters();
    let weights = [("A", "B", 1), ("A", "C", 2), ("B", "D", 3), ("C", "E", 4), ("D", "F", 5), ("E", "G", 6), ("F", "H", 7)];
    for (u, v, w) in weights {
        assert_eq!(g.weight(&u, &v), Ok(w));
    }
    assert!(g.contains(&"A"));
    assert!(!g.contains(&"Z"));
    assert!(g.contains_edge(&"A", &"B"));
    assert!(!g.contains_edge(&"A", &"Z"));
    assert_eq!(g.weight(&"A", &"Z"), Err(GraphError::VertexNotFound));

    assert_eq!(sorted(g.vertices()), vec!["A", "B", "C", "D", "E", "F", "G", "H"]);
    assert_eq!(sorted(g.adjacent(&"A").unwrap()), vec!["B", "C"]);
    assert_eq!(g.edge_count(), 7);
    assert_eq!(g.total_weight(), 28);

    g.remove_edge(&"A", &"B").unwrap();
    assert!(!g.contains_edge(&"A", &"B"));
    assert_eq!(g.remove_edge(&"A", &"B"), Err(GraphError::EdgeNotFound));

    g.remove_vertex(&"A").unwrap();
    assert!(!g.contains(&"A"));
    assert!(!g.adjacent(&"C").unwrap().contains(&"A"));
    assert_eq!(g.vertex_count(), 7);
}

#[test]
fn vertex_iterator_protocol_matrix() {
    let g = letters();
    let mut iter = g.iter();
    let mut seen = Vec::new();
    while iter.has_next() {
        let v = iter.current().unwrap();
        assert_eq!(iter.try_next(), Ok(v));
        seen.push(*v);
    }
    assert!(iter.try_next().is_err());
    assert_eq!(sorted(seen), sorted(g.vertices()));
    assert_eq!(g.iter().count(), 8);
}

#[test]
fn neighbors_report_weights_matrix() {
    let g = letters();
    let mut around_d: Vec<_> = g.neighbors(&"D").unwrap().map(|(v, w)| (*v, w)).collect();
    around_d.sort();
    assert_eq!(around_d, vec![("B", 3), ("F", 5)]);
    assert!(g.neighbors(&"Z").is_err());
}

#[test]
fn volume_vertex_removal_matrix() {
    let n = 300u32;
    let mut g = Graph::new(true, 0..n);
    for u in 0..n {
        g.add_edge(&u, &((u * 7 + 3) % n), 1).unwrap();
        g.add_edge(&u, &((u * 13 + 5) % n), 2).unwrap();
    }
    for u in (0..n).step_by(3) {
        g.remove_vertex(&u).unwrap();
    }
    for e in g.edges() {
        assert!(e.source % 3 != 0);
        assert!(e.target % 3 != 0);
    }
    assert_eq!(g.vertex_count(), (n - n.div_ceil(3)) as usize);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn undirected_edges_stay_mirrored(
        ops in proptest::collection::vec((0_u8..12, 0_u8..12, -50_i64..50, any::<bool>()), 0..120),
    ) {
        let mut g = Graph::new(false, 0_u8..12);
        for (u, v, w, add) in ops {
            if add {
                g.add_edge(&u, &v, w).unwrap();
            } else {
                let _ = g.remove_edge(&u, &v);
            }
        }
        for u in 0_u8..12 {
            for v in 0_u8..12 {
                prop_assert_eq!(g.contains_edge(&u, &v), g.contains_edge(&v, &u));
                if g.contains_edge(&u, &v) {
                    prop_assert_eq!(g.weight(&u, &v), g.weight(&v, &u));
                }
            }
        }
        let total: i64 = g.edges().iter().map(|e| e.weight).sum();
        prop_assert_eq!(total, g.total_weight());
    }
}
