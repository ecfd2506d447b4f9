use tracing::debug;

use crate::config::GrowthPolicy;
use crate::error::CollectionError;

/// Array-backed LIFO stack with amortised doubling and quarter-full halving.
#[derive(Clone, Debug)]
pub struct DynamicStack<T> {
    data: Vec<T>,
    capacity: usize,
    policy: GrowthPolicy,
}

impl<T> Default for DynamicStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DynamicStack<T> {
    pub fn new() -> Self {
        Self::with_policy(GrowthPolicy::default())
    }

    pub fn with_policy(policy: GrowthPolicy) -> Self {
        let policy = policy.normalized();
        Self {
            data: Vec::with_capacity(policy.initial_capacity),
            capacity: policy.initial_capacity,
            policy,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn top(&self) -> Result<&T, CollectionError> {
        self.data.last().ok_or(CollectionError::EmptyQueue)
    }

    pub fn push(&mut self, value: T) {
        if self.data.len() == self.capacity {
            self.resize(self.policy.grown(self.capacity));
        }
        self.data.push(value);
    }

    pub fn pop(&mut self) -> Result<T, CollectionError> {
        if self.data.is_empty() {
            return Err(CollectionError::EmptyQueue);
        }
        if let Some(capacity) = self.policy.shrunk(self.data.len(), self.capacity) {
            self.resize(capacity);
        }
        self.data.pop().ok_or(CollectionError::EmptyQueue)
    }

    fn resize(&mut self, capacity: usize) {
        debug!(from = self.capacity, to = capacity, "resizing stack");
        if capacity > self.data.capacity() {
            self.data.reserve_exact(capacity - self.data.len());
        } else {
            self.data.shrink_to(capacity);
        }
        self.capacity = capacity;
    }
}
