//! Building-block containers for `thicket`.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`hash`] | [`HashDictionary`], open addressing with linear probing and tombstones |
//! | [`heap`] | [`Heap`] binary heap behind the [`PriorityQueue`] trait, plus [`heap_sort`] |
//! | [`stack`] | [`DynamicStack`] |
//! | [`queue`] | [`Queue`] |
//! | [`union_find`] | [`UnionFind`] disjoint sets over a [`HashDictionary`] |
//! | [`config`] | [`HashConfig`] and [`GrowthPolicy`] sizing options |
//!
//! Every fallible operation reports a [`CollectionError`].

pub mod config;
pub mod error;
pub mod hash;
pub mod heap;
pub mod queue;
pub mod stack;
pub mod union_find;

pub use config::{GrowthPolicy, HashConfig};
pub use error::CollectionError;
pub use hash::{FnvBuildHasher, HashDictionary};
pub use heap::{heap_sort, Heap, PriorityQueue};
pub use queue::Queue;
pub use stack::DynamicStack;
pub use union_find::UnionFind;
