//! Unbounded LIFO stack
//!
//! Popping or peeking an empty stack yields `None` and leaves the stack untouched,
//! unlike [`BoundedQueue::dequeue`](super::queue::BoundedQueue::dequeue), which
//! reports underflow as an error.

/// Last-in first-out sequence
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove the top item; no-op on an empty stack
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items from bottom to top
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.peek(), Some(&2));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
    }

    #[test]
    fn test_pop_empty_is_noop() {
        let mut stack: Stack<u8> = Stack::new();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_peek_does_not_mutate() {
        let mut stack = Stack::new();
        stack.push("a");
        let _ = stack.peek();
        let _ = stack.peek();
        assert_eq!(stack.len(), 1);
        stack.clear();
        assert!(stack.is_empty());
    }
}
