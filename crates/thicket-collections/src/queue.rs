use std::collections::VecDeque;

use crate::error::CollectionError;

/// FIFO queue used by the breadth-first graph algorithms.
#[derive(Clone, Debug, Default)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn peek(&self) -> Result<&T, CollectionError> {
        self.items.front().ok_or(CollectionError::EmptyQueue)
    }

    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    pub fn dequeue(&mut self) -> Result<T, CollectionError> {
        self.items.pop_front().ok_or(CollectionError::EmptyQueue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order_and_empty_errors() {
        let mut q = Queue::new();
        assert_eq!(q.peek(), Err(CollectionError::EmptyQueue));
        q.enqueue("a");
        q.enqueue("b");
        assert_eq!(q.peek(), Ok(&"a"));
        assert_eq!(q.dequeue(), Ok("a"));
        assert_eq!(q.dequeue(), Ok("b"));
        assert!(q.is_empty());
        assert_eq!(q.dequeue(), Err(CollectionError::EmptyQueue));
    }

    #[test]
    fn refills_after_draining() {
        let mut q = Queue::new();
        for i in 0..3 {
            q.enqueue(i);
        }
        while q.dequeue().is_ok() {}
        q.enqueue(9);
        assert_eq!(q.len(), 1);
        assert_eq!(q.peek(), Ok(&9));
    }
}
