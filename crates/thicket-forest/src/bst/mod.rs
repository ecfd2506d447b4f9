//! Unbalanced binary search tree dictionary.
//!
//! Nodes live in a dense `Vec` arena addressed by `u32`. A removed node is
//! taken out with `swap_remove`, and the single link that pointed at the
//! moved tail node is rewritten, so every index held by the tree is live.

pub mod iterator;
pub mod node;

use thicket_collections::CollectionError;

use crate::types::default_comparator;

pub use iterator::RangeIter;
pub use node::{BstNode, Slot};

pub struct OrderedDict<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    root: Option<u32>,
    nodes: Vec<BstNode<K, V>>,
    comparator: C,
}

impl<K, V> OrderedDict<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K, V> Default for OrderedDict<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> OrderedDict<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            nodes: Vec::new(),
            comparator,
        }
    }

    #[inline]
    pub(crate) fn compare(&self, a: &K, b: &K) -> i32 {
        (self.comparator)(a, b)
    }

    #[inline]
    pub(crate) fn node(&self, idx: u32) -> &BstNode<K, V> {
        &self.nodes[idx as usize]
    }

    pub(crate) fn root_index(&self) -> Option<u32> {
        self.root
    }

    /// Descends towards `key`. Returns the slot where `key` lives or would be
    /// inserted, and the node occupying it if any.
    fn locate(&self, key: &K) -> (Slot, Option<u32>) {
        let mut slot = Slot::Root;
        let mut curr = self.root;
        while let Some(i) = curr {
            let node = self.node(i);
            let cmp = self.compare(key, &node.k);
            if cmp == 0 {
                return (slot, Some(i));
            }
            if cmp < 0 {
                slot = Slot::Left(i);
                curr = node.l;
            } else {
                slot = Slot::Right(i);
                curr = node.r;
            }
        }
        (slot, None)
    }

    fn set_link(&mut self, slot: Slot, target: Option<u32>) {
        match slot {
            Slot::Root => self.root = target,
            Slot::Left(p) => self.nodes[p as usize].l = target,
            Slot::Right(p) => self.nodes[p as usize].r = target,
        }
    }

    /// Inserts `key`, or replaces the value of an existing equal key.
    ///
    /// The stored key is kept when the value is replaced.
    pub fn save(&mut self, key: K, value: V) {
        match self.locate(&key) {
            (_, Some(i)) => self.nodes[i as usize].v = value,
            (slot, None) => {
                let idx = self.nodes.len() as u32;
                self.nodes.push(BstNode::new(key, value));
                self.set_link(slot, Some(idx));
            }
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.locate(key).1.is_some()
    }

    pub fn get(&self, key: &K) -> Result<&V, CollectionError> {
        match self.locate(key) {
            (_, Some(i)) => Ok(&self.node(i).v),
            (_, None) => Err(CollectionError::KeyNotFound),
        }
    }

    pub fn get_mut(&mut self, key: &K) -> Result<&mut V, CollectionError> {
        match self.locate(key) {
            (_, Some(i)) => Ok(&mut self.nodes[i as usize].v),
            (_, None) => Err(CollectionError::KeyNotFound),
        }
    }

    /// Removes `key` and returns its value.
    ///
    /// A node with two children takes the entry of its in-order predecessor,
    /// and the predecessor node (which has no right child) is spliced out.
    pub fn delete(&mut self, key: &K) -> Result<V, CollectionError> {
        let (slot, Some(target)) = self.locate(key) else {
            return Err(CollectionError::KeyNotFound);
        };
        let node = self.node(target);
        let removed = match (node.l, node.r) {
            (None, None) => {
                self.set_link(slot, None);
                target
            }
            (Some(child), None) | (None, Some(child)) => {
                self.set_link(slot, Some(child));
                target
            }
            (Some(left), Some(_)) => {
                let mut pred_slot = Slot::Left(target);
                let mut pred = left;
                while let Some(r) = self.node(pred).r {
                    pred_slot = Slot::Right(pred);
                    pred = r;
                }
                let pred_left = self.node(pred).l;
                self.set_link(pred_slot, pred_left);
                self.swap_entries(target, pred);
                pred
            }
        };
        Ok(self.release(removed).v)
    }

    fn swap_entries(&mut self, a: u32, b: u32) {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.nodes.split_at_mut(hi as usize);
        let x = &mut head[lo as usize];
        let y = &mut tail[0];
        std::mem::swap(&mut x.k, &mut y.k);
        std::mem::swap(&mut x.v, &mut y.v);
    }

    /// Drops an already unlinked node from the arena.
    fn release(&mut self, idx: u32) -> BstNode<K, V> {
        let last = (self.nodes.len() - 1) as u32;
        if idx != last {
            let (slot, _) = self.locate(&self.node(last).k);
            self.set_link(slot, Some(idx));
        }
        self.nodes.swap_remove(idx as usize)
    }

    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut pending: Vec<(u32, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((i, depth)) = pending.pop() {
            max = max.max(depth);
            let node = self.node(i);
            pending.extend(node.l.map(|l| (l, depth + 1)));
            pending.extend(node.r.map(|r| (r, depth + 1)));
        }
        max
    }

    /// Visits every entry in ascending key order until `visitor` returns
    /// `false`.
    pub fn iterate<F>(&self, visitor: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.iterate_range(None, None, visitor)
    }

    /// Visits entries with `from <= key <= to` in ascending order. A missing
    /// bound is open. Returning `false` from `visitor` ends the whole walk.
    pub fn iterate_range<F>(&self, from: Option<&K>, to: Option<&K>, mut visitor: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        for (k, v) in self.range_iter(from, to) {
            if !visitor(k, v) {
                return;
            }
        }
    }

    pub fn iter(&self) -> RangeIter<'_, K, V, C> {
        RangeIter::new(self, None, None)
    }

    pub fn range_iter<'a>(&'a self, from: Option<&'a K>, to: Option<&'a K>) -> RangeIter<'a, K, V, C> {
        RangeIter::new(self, from, to)
    }
}

impl<'a, K, V, C> IntoIterator for &'a OrderedDict<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = (&'a K, &'a V);
    type IntoIter = RangeIter<'a, K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
