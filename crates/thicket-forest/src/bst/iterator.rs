use thicket_collections::{CollectionError, DynamicStack};

use super::OrderedDict;

/// External in-order iterator over an [`OrderedDict`], optionally bounded.
///
/// The stack holds the ancestors still to be visited; its top is always the
/// next in-bounds key in ascending order. Subtrees wholly below `from` or
/// above `to` are never pushed.
pub struct RangeIter<'a, K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    tree: &'a OrderedDict<K, V, C>,
    stack: DynamicStack<u32>,
    from: Option<&'a K>,
    to: Option<&'a K>,
}

impl<'a, K, V, C> RangeIter<'a, K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub(crate) fn new(tree: &'a OrderedDict<K, V, C>, from: Option<&'a K>, to: Option<&'a K>) -> Self {
        let mut iter = Self {
            tree,
            stack: DynamicStack::new(),
            from,
            to,
        };
        iter.push_left(tree.root_index());
        iter
    }

    fn below_from(&self, key: &K) -> bool {
        self.from.is_some_and(|from| self.tree.compare(from, key) > 0)
    }

    fn above_to(&self, key: &K) -> bool {
        self.to.is_some_and(|to| self.tree.compare(key, to) > 0)
    }

    /// Pushes the in-bounds nodes on the leftmost path below `curr`.
    fn push_left(&mut self, mut curr: Option<u32>) {
        let tree = self.tree;
        while let Some(i) = curr {
            let node = tree.node(i);
            if self.below_from(&node.k) {
                curr = node.r;
            } else if self.above_to(&node.k) {
                curr = node.l;
            } else {
                self.stack.push(i);
                curr = node.l;
            }
        }
    }

    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    pub fn current(&self) -> Result<(&'a K, &'a V), CollectionError> {
        let top = self
            .stack
            .top()
            .map_err(|_| CollectionError::IteratorExhausted)?;
        let tree = self.tree;
        let node = tree.node(*top);
        Ok((&node.k, &node.v))
    }

    /// Returns the current key and advances past it.
    pub fn try_next(&mut self) -> Result<&'a K, CollectionError> {
        let top = self
            .stack
            .pop()
            .map_err(|_| CollectionError::IteratorExhausted)?;
        let tree = self.tree;
        let node = tree.node(top);
        self.push_left(node.r);
        Ok(&node.k)
    }
}

impl<'a, K, V, C> Iterator for RangeIter<'a, K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.current().ok()?;
        self.try_next().ok()?;
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_only_in_bounds_ancestors() {
        //        10
        //      /    \
        //     3      20
        //      \
        //       7
        let mut tree = OrderedDict::new();
        for k in [10, 3, 20, 7] {
            tree.save(k, ());
        }
        let iter = tree.range_iter(Some(&5), Some(&15));
        assert_eq!(iter.stack.len(), 2);
        assert_eq!(iter.current().map(|(k, _)| *k), Ok(7));
        let keys: Vec<_> = iter.map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![7, 10]);
    }

    #[test]
    fn exhausted_iterator_errors() {
        let tree = OrderedDict::<i32, i32>::new();
        let mut iter = tree.iter();
        assert!(!iter.has_next());
        assert_eq!(iter.current(), Err(CollectionError::IteratorExhausted));
        assert_eq!(iter.try_next(), Err(CollectionError::IteratorExhausted));
    }
}
