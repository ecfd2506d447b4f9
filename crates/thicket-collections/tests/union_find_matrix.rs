use proptest::prelude::*;
use thicket_collections::UnionFind;

#[test]
fn union_find_five_elements_matrix() {
    let mut sets = UnionFind::new(vec![1, 2, 3, 4, 5]);
    sets.union(&1, &2).unwrap();
    sets.union(&3, &4).unwrap();
    sets.union(&1, &3).unwrap();
    let root = sets.find(&1).unwrap();
    assert_eq!(sets.find(&2).unwrap(), root);
    assert_eq!(sets.find(&3).unwrap(), root);
    assert_eq!(sets.find(&4).unwrap(), root);
    assert_eq!(sets.find(&5).unwrap(), 5);
}

#[test]
fn union_find_long_chain_matrix() {
    let n = 10_000u32;
    let mut sets = UnionFind::new(0..n);
    for i in (1..n).rev() {
        sets.union(&i, &(i - 1)).unwrap();
    }
    let root = sets.find(&0).unwrap();
    for i in 0..n {
        assert_eq!(sets.find(&i).unwrap(), root);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn union_find_transitivity(
        n in 2_u32..20,
        ops in proptest::collection::vec((0_u32..20, 0_u32..20), 0..50),
    ) {
        let mut sets = UnionFind::new(0..n);
        for &(x, y) in &ops {
            if x < n && y < n {
                sets.union(&x, &y).unwrap();
            }
        }
        for x in 0..n {
            for y in 0..n {
                for z in 0..n {
                    if sets.connected(&x, &y).unwrap() && sets.connected(&y, &z).unwrap() {
                        prop_assert!(sets.connected(&x, &z).unwrap());
                    }
                }
            }
        }
    }
}
