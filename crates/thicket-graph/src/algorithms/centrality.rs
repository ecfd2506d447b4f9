use std::hash::Hash;

use thicket_collections::HashDictionary;

use super::paths::shortest_path;
use crate::graph::Graph;

/// Unweighted betweenness: for every ordered pair of distinct vertices, each
/// vertex strictly inside the BFS path between them scores a point. Counts
/// are halved so a pair contributes once in an undirected graph.
pub fn centrality<T>(g: &Graph<T>) -> HashDictionary<T, u64>
where
    T: Hash + Eq + Clone,
{
    let mut score: HashDictionary<T, u64> = HashDictionary::new();
    for v in g {
        score.save(v.clone(), 0);
    }
    for source in g {
        let Ok(paths) = shortest_path(source, g) else {
            continue;
        };
        for target in g {
            if target == source {
                continue;
            }
            let mut curr = paths.parent_of(target).ok().flatten();
            while let Some(via) = curr {
                if via == source {
                    break;
                }
                if let Ok(s) = score.get_mut(via) {
                    *s += 1;
                }
                curr = paths.parent_of(via).ok().flatten();
            }
        }
    }
    for s in score.values_mut() {
        *s /= 2;
    }
    score
}
