//! Fixed-capacity circular queue
//!
//! Logical position `i` (counted from the front) lives in physical slot
//! `(head + i) % capacity`. The slots are exposed so the presentation layer can
//! draw empty cells and the head/tail captions where they physically sit.

use crate::engine::errors::EngineError;

/// Circular FIFO buffer with a fixed capacity
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    slots: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> BoundedQueue<T> {
    /// Create an empty queue. A zero capacity is raised to one slot.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        BoundedQueue {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            head: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Physical slot of logical position `index`
    pub fn slot_of(&self, index: usize) -> usize {
        (self.head + index) % self.capacity()
    }

    /// Physical slot of the front item (where the next dequeue reads)
    pub fn head_slot(&self) -> usize {
        self.head
    }

    /// Physical slot of the most recently enqueued item
    pub fn tail_slot(&self) -> Option<usize> {
        self.len.checked_sub(1).map(|last| self.slot_of(last))
    }

    /// Physical slot the next enqueue will write
    pub fn next_slot(&self) -> Option<usize> {
        (!self.is_full()).then(|| self.slot_of(self.len))
    }

    pub fn enqueue(&mut self, item: T) -> Result<(), EngineError> {
        if self.is_full() {
            return Err(EngineError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        let slot = self.slot_of(self.len);
        self.slots[slot] = Some(item);
        self.len += 1;
        Ok(())
    }

    pub fn dequeue(&mut self) -> Result<T, EngineError> {
        if self.is_empty() {
            return Err(EngineError::EmptyQueue);
        }
        let item = self.slots[self.head].take().ok_or(EngineError::EmptyQueue)?;
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        Ok(item)
    }

    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    /// Logical item at `index` from the front
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[self.slot_of(index)].as_ref()
    }

    /// Empty the queue, keeping its capacity
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.head = 0;
        self.len = 0;
    }

    /// Physical slots in storage order
    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Items from front to back
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |i| self.slots[self.slot_of(i)].as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = BoundedQueue::new(3);
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        assert_eq!(queue.peek(), Some(&1));
        assert_eq!(queue.dequeue().unwrap(), 1);
        assert_eq!(queue.dequeue().unwrap(), 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_overflow_and_underflow() {
        let mut queue = BoundedQueue::new(2);
        assert_eq!(queue.dequeue(), Err(EngineError::EmptyQueue));
        queue.enqueue('a').unwrap();
        queue.enqueue('b').unwrap();
        assert_eq!(
            queue.enqueue('c'),
            Err(EngineError::CapacityExceeded { capacity: 2 })
        );
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_wraps_around() {
        let mut queue = BoundedQueue::new(3);
        for i in 0..3 {
            queue.enqueue(i).unwrap();
        }
        queue.dequeue().unwrap();
        queue.dequeue().unwrap();
        queue.enqueue(3).unwrap();
        assert_eq!(queue.head_slot(), 2);
        assert_eq!(queue.tail_slot(), Some(0));
        assert_eq!(queue.slot_of(1), 0);
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_clear_restores_capacity() {
        let mut queue = BoundedQueue::new(6);
        for i in 0..6 {
            queue.enqueue(i).unwrap();
        }
        queue.clear();
        assert_eq!(queue.capacity(), 6);
        assert_eq!(queue.tail_slot(), None);
        for i in 0..6 {
            queue.enqueue(i).unwrap();
        }
        assert!(queue.enqueue(6).is_err());
    }

    #[test]
    fn test_zero_capacity_holds_one_item() {
        let mut queue = BoundedQueue::new(0);
        assert_eq!(queue.capacity(), 1);
        queue.enqueue('a').unwrap();
        assert_eq!(
            queue.enqueue('b'),
            Err(EngineError::CapacityExceeded { capacity: 1 })
        );
    }

    #[test]
    fn test_next_slot_follows_tail() {
        let mut queue = BoundedQueue::new(2);
        assert_eq!(queue.next_slot(), Some(0));
        queue.enqueue(1).unwrap();
        queue.dequeue().unwrap();
        assert_eq!(queue.next_slot(), Some(1));
        queue.enqueue(2).unwrap();
        assert_eq!(queue.next_slot(), Some(0));
        queue.enqueue(3).unwrap();
        assert_eq!(queue.next_slot(), None);
    }
}
