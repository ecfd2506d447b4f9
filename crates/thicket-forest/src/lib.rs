//! Ordered dictionary backed by an unbalanced binary search tree.
//!
//! Nodes are kept in a `Vec` arena and linked through `Option<u32>` child
//! indices. The tree is never rebalanced, so its shape follows insertion
//! order.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | comparator contract and [`default_comparator`] |
//! | [`bst`] | [`OrderedDict`], its [`BstNode`] arena entries and [`RangeIter`] |
//!
//! ```
//! use thicket_forest::OrderedDict;
//!
//! let mut dict = OrderedDict::new();
//! for k in [8, 4, 12, 2, 6] {
//!     dict.save(k, k * 10);
//! }
//! let keys: Vec<_> = dict.range_iter(Some(&4), Some(&8)).map(|(k, _)| *k).collect();
//! assert_eq!(keys, vec![4, 6, 8]);
//! ```

pub mod bst;
pub mod types;

pub use bst::{BstNode, OrderedDict, RangeIter, Slot};
pub use thicket_collections::CollectionError;
pub use types::{default_comparator, Comparator};
