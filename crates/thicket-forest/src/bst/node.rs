/// Arena entry of an [`OrderedDict`](super::OrderedDict).
///
/// Children are indices into the owning tree's node vector.
#[derive(Clone, Debug)]
pub struct BstNode<K, V> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub v: V,
}

impl<K, V> BstNode<K, V> {
    pub fn new(k: K, v: V) -> Self {
        Self { l: None, r: None, k, v }
    }
}

/// The link that holds a node: the tree root, or one side of a parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Root,
    Left(u32),
    Right(u32),
}
