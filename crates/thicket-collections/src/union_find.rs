use std::hash::Hash;

use crate::error::CollectionError;
use crate::hash::HashDictionary;

/// Disjoint sets keyed by value, with full path compression.
///
/// Unions attach one root under the other without a rank heuristic;
/// compression during [`find`](Self::find) keeps chains short.
#[derive(Clone, Debug)]
pub struct UnionFind<T> {
    parents: HashDictionary<T, T>,
}

impl<T> UnionFind<T>
where
    T: Hash + Eq + Clone,
{
    pub fn new<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut parents = HashDictionary::new();
        for element in elements {
            parents.save(element.clone(), element);
        }
        Self { parents }
    }

    pub fn size(&self) -> usize {
        self.parents.size()
    }

    pub fn contains(&self, element: &T) -> bool {
        self.parents.contains(element)
    }

    /// Root of the set holding `element`. Every node on the walked path is
    /// re-parented directly onto that root.
    pub fn find(&mut self, element: &T) -> Result<T, CollectionError> {
        let mut path = Vec::new();
        let mut curr = element.clone();
        loop {
            let parent = self.parents.get(&curr)?;
            if *parent == curr {
                break;
            }
            let next = parent.clone();
            path.push(std::mem::replace(&mut curr, next));
        }
        for node in path {
            self.parents.save(node, curr.clone());
        }
        Ok(curr)
    }

    /// Merges the sets of `a` and `b`; the root of `a` becomes the root of both.
    pub fn union(&mut self, a: &T, b: &T) -> Result<(), CollectionError> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;
        if root_a != root_b {
            self.parents.save(root_b, root_a);
        }
        Ok(())
    }

    pub fn connected(&mut self, a: &T, b: &T) -> Result<bool, CollectionError> {
        Ok(self.find(a)? == self.find(b)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_are_their_own_roots() {
        let mut sets = UnionFind::new(1..=5);
        for i in 1..=5 {
            assert_eq!(sets.find(&i), Ok(i));
        }
        assert_eq!(sets.find(&6), Err(CollectionError::KeyNotFound));
    }

    #[test]
    fn chained_unions_share_a_root() {
        let mut sets = UnionFind::new(1..=5);
        sets.union(&1, &2).unwrap();
        sets.union(&3, &4).unwrap();
        sets.union(&1, &3).unwrap();
        let root = sets.find(&1).unwrap();
        assert_eq!(sets.find(&2), Ok(root));
        assert_eq!(sets.find(&3), Ok(root));
        assert_eq!(sets.find(&4), Ok(root));
        assert_eq!(sets.find(&5), Ok(5));
    }

    #[test]
    fn find_compresses_the_whole_path() {
        let mut sets = UnionFind::new(0..4);
        sets.union(&2, &3).unwrap();
        sets.union(&1, &2).unwrap();
        sets.union(&0, &1).unwrap();
        // 3 -> 2 -> 1 -> 0
        assert_eq!(sets.parents.get(&3), Ok(&2));
        assert_eq!(sets.find(&3), Ok(0));
        assert_eq!(sets.parents.get(&3), Ok(&0));
        assert_eq!(sets.parents.get(&2), Ok(&0));
        assert_eq!(sets.parents.get(&1), Ok(&0));
    }

    #[test]
    fn union_with_unknown_element_is_a_no_op() {
        let mut sets = UnionFind::new(["a", "b"]);
        assert_eq!(sets.union(&"a", &"z"), Err(CollectionError::KeyNotFound));
        assert_eq!(sets.connected(&"a", &"b"), Ok(false));
    }
}
