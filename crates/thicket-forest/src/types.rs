//! Comparator contract shared by the tree types.
//!
//! A comparator answers `< 0`, `0` or `> 0` for `a` before, equal to, or
//! after `b`. It must define a strict total order that stays the same for
//! the lifetime of the tree it is given to.

pub type Comparator<K> = dyn Fn(&K, &K) -> i32;

pub fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}
