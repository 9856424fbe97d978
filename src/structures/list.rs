//! Doubly-linked list backed by an index arena
//!
//! Nodes live in a `Vec` slot arena and link to each other by slot index, so the
//! list owns every node outright and needs no reference counting. Freed slots are
//! recycled through a free list.
//!
//! # Invariants
//!
//! - `len == 0` exactly when both `head` and `tail` are `None`
//! - Walking `next` from `head` visits `len` nodes and ends at `tail`
//! - Walking `prev` from `tail` visits the same nodes in reverse

use crate::engine::errors::EngineError;
use std::iter::FusedIterator;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Doubly-linked list with head/tail tracking
#[derive(Debug, Clone)]
pub struct LinkedList<T> {
    nodes: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn node(&self, slot: usize) -> Option<&Node<T>> {
        self.nodes.get(slot).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, slot: usize) -> Option<&mut Node<T>> {
        self.nodes.get_mut(slot).and_then(Option::as_mut)
    }

    fn allocate(&mut self, node: Node<T>) -> usize {
        if let Some(slot) = self.free.pop() {
            self.nodes[slot] = Some(node);
            slot
        } else {
            self.nodes.push(Some(node));
            self.nodes.len() - 1
        }
    }

    /// Arena slot of the node at a list position
    fn slot_at(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        // Walk from whichever end is closer
        if index <= self.len / 2 {
            let mut slot = self.head?;
            for _ in 0..index {
                slot = self.node(slot)?.next?;
            }
            Some(slot)
        } else {
            let mut slot = self.tail?;
            for _ in 0..(self.len - 1 - index) {
                slot = self.node(slot)?.prev?;
            }
            Some(slot)
        }
    }

    /// Append at the tail
    pub fn push(&mut self, value: T) {
        let old_tail = self.tail;
        let slot = self.allocate(Node {
            value,
            prev: old_tail,
            next: None,
        });
        match old_tail.and_then(|t| self.node_mut(t)) {
            Some(node) => node.next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    /// Prepend at the head
    pub fn unshift(&mut self, value: T) {
        let old_head = self.head;
        let slot = self.allocate(Node {
            value,
            prev: None,
            next: old_head,
        });
        match old_head.and_then(|h| self.node_mut(h)) {
            Some(node) => node.prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
        self.len += 1;
    }

    /// Insert so the new value ends up at `index` (`0..=len`)
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), EngineError> {
        if index > self.len {
            return Err(EngineError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            self.unshift(value);
            return Ok(());
        }
        if index == self.len {
            self.push(value);
            return Ok(());
        }

        let next = self.slot_at(index).ok_or(EngineError::IndexOutOfRange {
            index,
            len: self.len,
        })?;
        let prev = self.node(next).and_then(|n| n.prev);
        let slot = self.allocate(Node {
            value,
            prev,
            next: Some(next),
        });
        if let Some(node) = prev.and_then(|p| self.node_mut(p)) {
            node.next = Some(slot);
        }
        if let Some(node) = self.node_mut(next) {
            node.prev = Some(slot);
        }
        self.len += 1;
        Ok(())
    }

    /// Detach the node in `slot`, repairing its neighbours and head/tail
    fn unlink(&mut self, slot: usize) -> Option<T> {
        let node = self.nodes.get_mut(slot)?.take()?;
        match node.prev.and_then(|p| self.node_mut(p)) {
            Some(prev) => prev.next = node.next,
            None => self.head = node.next,
        }
        match node.next.and_then(|n| self.node_mut(n)) {
            Some(next) => next.prev = node.prev,
            None => self.tail = node.prev,
        }
        self.free.push(slot);
        self.len -= 1;
        Some(node.value)
    }

    /// Remove from the tail
    pub fn pop(&mut self) -> Option<T> {
        let slot = self.tail?;
        self.unlink(slot)
    }

    /// Remove from the head
    pub fn shift(&mut self) -> Option<T> {
        let slot = self.head?;
        self.unlink(slot)
    }

    /// Remove the value at `index` (`0..len`)
    pub fn remove_at(&mut self, index: usize) -> Result<T, EngineError> {
        let out_of_range = EngineError::IndexOutOfRange {
            index,
            len: self.len,
        };
        let slot = self.slot_at(index).ok_or(out_of_range.clone())?;
        self.unlink(slot).ok_or(out_of_range)
    }

    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|h| self.node(h)).map(|n| &n.value)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|t| self.node(t)).map(|n| &n.value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        let slot = self.head?;
        self.node_mut(slot).map(|n| &mut n.value)
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        let slot = self.tail?;
        self.node_mut(slot).map(|n| &mut n.value)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slot_at(index)
            .and_then(|slot| self.node(slot))
            .map(|n| &n.value)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let slot = self.slot_at(index)?;
        self.node_mut(slot).map(|n| &mut n.value)
    }

    /// Mutable access to every value in arena order (not list order)
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.nodes.iter_mut().flatten().map(|n| &mut n.value)
    }

    /// Iterate head to tail; `.rev()` walks tail to head over the `prev` links
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }
}

impl<T: Clone> LinkedList<T> {
    /// Owned copy of the values, head to tail
    pub fn traverse(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for value in iter {
            list.push(value);
        }
        list
    }
}

/// Borrowing iterator over a [`LinkedList`]
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
