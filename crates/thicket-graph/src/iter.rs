use thicket_collections::hash::Iter;
use thicket_collections::{CollectionError, HashDictionary};

/// Iterator over the vertices of a [`Graph`](crate::Graph), in the storage
/// order of its adjacency table.
pub struct VertexIter<'a, T> {
    inner: Iter<'a, T, HashDictionary<T, i64>>,
}

impl<'a, T> VertexIter<'a, T> {
    pub(crate) fn new(inner: Iter<'a, T, HashDictionary<T, i64>>) -> Self {
        Self { inner }
    }

    pub fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    pub fn current(&self) -> Result<&'a T, CollectionError> {
        self.inner.current().map(|(v, _)| v)
    }

    pub fn try_next(&mut self) -> Result<&'a T, CollectionError> {
        self.inner.try_next()
    }
}

impl<'a, T> Iterator for VertexIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(v, _)| v)
    }
}
