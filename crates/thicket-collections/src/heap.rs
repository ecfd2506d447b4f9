//! Array-backed binary heap.
//!
//! The heap is a max-heap under the supplied comparator: the element for
//! which `cmp` answers "greater" is served first. Callers wanting min-heap
//! behaviour invert the comparator.

use tracing::debug;

use crate::config::GrowthPolicy;
use crate::error::CollectionError;

pub trait PriorityQueue<T> {
    fn is_empty(&self) -> bool;

    fn enqueue(&mut self, value: T);

    /// Highest-priority element, without removing it.
    fn peek(&self) -> Result<&T, CollectionError>;

    fn dequeue(&mut self) -> Result<T, CollectionError>;

    fn size(&self) -> usize;
}

pub struct Heap<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    data: Vec<T>,
    capacity: usize,
    policy: GrowthPolicy,
    comparator: C,
}

impl<T, C> Heap<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    pub fn new(comparator: C) -> Self {
        Self::with_policy(comparator, GrowthPolicy::default())
    }

    pub fn with_policy(comparator: C, policy: GrowthPolicy) -> Self {
        let policy = policy.normalized();
        Self {
            data: Vec::with_capacity(policy.initial_capacity),
            capacity: policy.initial_capacity,
            policy,
            comparator,
        }
    }

    /// Builds a heap from `items` in linear time.
    pub fn from_vec(items: Vec<T>, comparator: C) -> Self {
        Self::from_vec_with_policy(items, comparator, GrowthPolicy::default())
    }

    pub fn from_vec_with_policy(items: Vec<T>, comparator: C, policy: GrowthPolicy) -> Self {
        let policy = policy.normalized();
        let mut data = items;
        heapify(&mut data, &comparator);
        Self {
            capacity: data.len().max(policy.initial_capacity),
            data,
            policy,
            comparator,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn resize(&mut self, capacity: usize) {
        debug!(from = self.capacity, to = capacity, "resizing heap");
        if capacity > self.data.capacity() {
            self.data.reserve_exact(capacity - self.data.len());
        } else {
            self.data.shrink_to(capacity);
        }
        self.capacity = capacity;
    }
}

impl<T, C> PriorityQueue<T> for Heap<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn enqueue(&mut self, value: T) {
        if self.data.len() == self.capacity {
            self.resize(self.policy.grown(self.capacity));
        }
        self.data.push(value);
        let last = self.data.len() - 1;
        sift_up(&mut self.data, last, &self.comparator);
    }

    fn peek(&self) -> Result<&T, CollectionError> {
        self.data.first().ok_or(CollectionError::EmptyQueue)
    }

    fn dequeue(&mut self) -> Result<T, CollectionError> {
        if self.data.is_empty() {
            return Err(CollectionError::EmptyQueue);
        }
        if let Some(capacity) = self.policy.shrunk(self.data.len(), self.capacity) {
            self.resize(capacity);
        }
        let top = self.data.swap_remove(0);
        let count = self.data.len();
        sift_down(&mut self.data, 0, count, &self.comparator);
        Ok(top)
    }

    fn size(&self) -> usize {
        self.data.len()
    }
}

/// Sorts `elements` in place, ascending under `comparator`.
///
/// Not stable: elements that compare equal may come out in any relative
/// order.
pub fn heap_sort<T, C>(elements: &mut [T], comparator: C)
where
    C: Fn(&T, &T) -> i32,
{
    heapify(elements, &comparator);
    for end in (1..elements.len()).rev() {
        elements.swap(0, end);
        sift_down(elements, 0, end, &comparator);
    }
}

fn heapify<T, C>(data: &mut [T], comparator: &C)
where
    C: Fn(&T, &T) -> i32,
{
    let count = data.len();
    for parent in (0..count / 2).rev() {
        sift_down(data, parent, count, comparator);
    }
}

fn sift_up<T, C>(data: &mut [T], mut child: usize, comparator: &C)
where
    C: Fn(&T, &T) -> i32,
{
    while child > 0 {
        let parent = (child - 1) / 2;
        if comparator(&data[parent], &data[child]) >= 0 {
            return;
        }
        data.swap(parent, child);
        child = parent;
    }
}

/// Restores heap order below `parent`, considering only `data[..count]`.
fn sift_down<T, C>(data: &mut [T], mut parent: usize, count: usize, comparator: &C)
where
    C: Fn(&T, &T) -> i32,
{
    loop {
        let left = 2 * parent + 1;
        if left >= count {
            return;
        }
        let right = left + 1;
        let mut best = parent;
        if comparator(&data[left], &data[best]) > 0 {
            best = left;
        }
        if right < count && comparator(&data[right], &data[best]) > 0 {
            best = right;
        }
        if best == parent {
            return;
        }
        data.swap(parent, best);
        parent = best;
    }
}
