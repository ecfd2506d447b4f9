use crate::error::CollectionError;

use super::Slot;

/// External iterator over a [`HashDictionary`](super::HashDictionary).
///
/// Walks slots in physical order, so the sequence depends on capacity and
/// hashing, not on insertion order.
pub struct Iter<'a, K, V> {
    slots: &'a [Slot<K, V>],
    pos: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(super) fn new(slots: &'a [Slot<K, V>]) -> Self {
        let mut iter = Self { slots, pos: 0 };
        iter.pos = iter.seek(0);
        iter
    }

    fn seek(&self, from: usize) -> usize {
        (from..self.slots.len())
            .find(|&i| matches!(self.slots[i], Slot::Occupied(..)))
            .unwrap_or(self.slots.len())
    }

    pub fn has_next(&self) -> bool {
        self.pos < self.slots.len()
    }

    pub fn current(&self) -> Result<(&'a K, &'a V), CollectionError> {
        match self.slots.get(self.pos) {
            Some(Slot::Occupied(k, v)) => Ok((k, v)),
            _ => Err(CollectionError::IteratorExhausted),
        }
    }

    /// Returns the current key and moves past it.
    pub fn try_next(&mut self) -> Result<&'a K, CollectionError> {
        let (k, _) = self.current()?;
        self.pos = self.seek(self.pos + 1);
        Ok(k)
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.current().ok()?;
        self.pos = self.seek(self.pos + 1);
        Some(item)
    }
}
