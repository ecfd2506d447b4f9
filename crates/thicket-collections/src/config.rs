//! Sizing knobs for the array-backed containers.
//!
//! Defaults carry the constants the containers were tuned with; callers only
//! need these when they want a different floor or growth rate.

use serde::{Deserialize, Serialize};

/// Resize thresholds for [`HashDictionary`](crate::HashDictionary).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashConfig {
    /// Starting table size and the floor the table never shrinks below.
    pub initial_capacity: usize,
    /// Grow when `(occupied + tombstones) * 100 / capacity` exceeds this.
    pub max_load_percent: usize,
    /// Shrink when `occupied * 100 / capacity` falls below this.
    pub min_load_percent: usize,
    pub resize_factor: usize,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 32,
            max_load_percent: 75,
            min_load_percent: 20,
            resize_factor: 2,
        }
    }
}

impl HashConfig {
    pub(crate) fn normalized(mut self) -> Self {
        self.initial_capacity = self.initial_capacity.max(1);
        self.resize_factor = self.resize_factor.max(2);
        self.max_load_percent = self.max_load_percent.clamp(1, 99);
        // A shrink by `resize_factor` must land strictly under the high-water mark.
        self.min_load_percent = self
            .min_load_percent
            .min(self.max_load_percent / 2)
            .min((self.max_load_percent - 1) / self.resize_factor);
        self
    }
}

/// Capacity policy shared by [`DynamicStack`](crate::DynamicStack) and
/// [`Heap`](crate::Heap).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthPolicy {
    pub initial_capacity: usize,
    pub grow_factor: usize,
    pub shrink_factor: usize,
    /// Shrink once `len <= capacity / shrink_threshold`.
    pub shrink_threshold: usize,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            initial_capacity: 10,
            grow_factor: 2,
            shrink_factor: 2,
            shrink_threshold: 4,
        }
    }
}

impl GrowthPolicy {
    pub(crate) fn normalized(mut self) -> Self {
        self.initial_capacity = self.initial_capacity.max(1);
        self.grow_factor = self.grow_factor.max(2);
        self.shrink_factor = self.shrink_factor.max(2);
        self.shrink_threshold = self.shrink_threshold.max(self.shrink_factor * 2);
        self
    }

    /// Capacity after growing a full buffer of `capacity` slots.
    pub(crate) fn grown(&self, capacity: usize) -> usize {
        capacity.max(1) * self.grow_factor
    }

    /// Capacity to shrink to before removing from a buffer holding `len`
    /// elements, or `None` when no shrink is due.
    pub(crate) fn shrunk(&self, len: usize, capacity: usize) -> Option<usize> {
        if capacity > self.initial_capacity && len <= capacity / self.shrink_threshold {
            Some((capacity / self.shrink_factor).max(self.initial_capacity))
        } else {
            None
        }
    }
}
