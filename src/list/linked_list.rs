//! Singly linked list stored in an index arena.
//!
//! Nodes live in a `Vec` of slots and link to each other by slot index.
//! `first` owns the chain transitively; `last` is an alias of the tail slot
//! kept so appends stay O(1). Vacated slots are recycled through a free list.

use std::fmt;

use log::debug;

use crate::types::{LgResult, ListGraphError};

use super::iter::Iter;

/// A single link in the chain.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Option<usize>,
}

/// Singly linked list, integer-valued unless told otherwise.
pub struct LinkedList<T = i32> {
    /// Node storage, addressed by index. `None` marks a vacated slot.
    slots: Vec<Option<Node<T>>>,
    /// Vacated slot indices available for reuse.
    free: Vec<usize>,
    /// Head slot.
    first: Option<usize>,
    /// Tail slot. Its node's `next` is always `None`.
    last: Option<usize>,
    /// Number of linked nodes.
    len: usize,
}

impl<T> LinkedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            first: None,
            last: None,
            len: 0,
        }
    }

    /// Create a two-element list `[a, b]`.
    pub fn from_pair(a: T, b: T) -> Self {
        let mut list = Self::new();
        list.add_last(a);
        list.add_last(b);
        list
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True iff the list has neither a head nor a tail.
    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.last.is_none()
    }

    /// Peek at the head value.
    pub fn first(&self) -> Option<&T> {
        self.first.and_then(|idx| self.node(idx)).map(|n| &n.value)
    }

    /// Peek at the tail value.
    pub fn last(&self) -> Option<&T> {
        self.last.and_then(|idx| self.node(idx)).map(|n| &n.value)
    }

    /// Iterate values from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self, self.first, self.len)
    }

    /// Prepend a value. O(1).
    pub fn add_first(&mut self, value: T) {
        let idx = self.alloc(value, self.first);
        self.first = Some(idx);
        if self.last.is_none() {
            self.last = Some(idx);
        }
        self.len += 1;
    }

    /// Append a value. O(1).
    pub fn add_last(&mut self, value: T) {
        let idx = self.alloc(value, None);
        match self.last.and_then(|tail| self.node_mut(tail)) {
            Some(tail) => tail.next = Some(idx),
            None => self.first = Some(idx),
        }
        self.last = Some(idx);
        self.len += 1;
    }

    /// Remove the head and return its value.
    ///
    /// Fails with `EmptyCollection` on an empty list and with `OutOfRange`
    /// on a single-element list: the head may only be dropped while a
    /// successor exists to take its place.
    pub fn delete_first(&mut self) -> LgResult<T> {
        self.require_successor()?;
        let head = self.first.ok_or(ListGraphError::EmptyCollection)?;
        self.first = self.node(head).and_then(|n| n.next);
        let value = self.release(head).ok_or(ListGraphError::EmptyCollection)?;
        self.len -= 1;
        debug!("Deleted list head, {} element(s) remain", self.len);
        Ok(value)
    }

    /// Remove the tail and return its value.
    ///
    /// Same failure rules as [`delete_first`](Self::delete_first). The
    /// penultimate node becomes the new tail, found by an O(n) walk.
    pub fn delete_last(&mut self) -> LgResult<T> {
        self.require_successor()?;
        let penultimate = self.penultimate().ok_or(ListGraphError::OutOfRange {
            requested: 2,
            len: self.len,
        })?;
        let tail = self.last.ok_or(ListGraphError::EmptyCollection)?;
        if let Some(node) = self.node_mut(penultimate) {
            node.next = None;
        }
        self.last = Some(penultimate);
        let value = self.release(tail).ok_or(ListGraphError::EmptyCollection)?;
        self.len -= 1;
        debug!("Deleted list tail, {} element(s) remain", self.len);
        Ok(value)
    }

    /// Rebuild the chain in reverse order. No-op for 0 or 1 elements.
    ///
    /// Every value is moved into a freshly allocated node; the old arena
    /// is discarded.
    pub fn reverse(&mut self) {
        if self.is_empty() || self.first == self.last {
            return;
        }

        let mut old_slots = std::mem::take(&mut self.slots);
        let mut cursor = self.first.take();
        self.free.clear();
        self.last = None;
        self.len = 0;

        while let Some(idx) = cursor {
            let Some(node) = old_slots.get_mut(idx).and_then(Option::take) else {
                break;
            };
            cursor = node.next;
            self.add_first(node.value);
        }
        debug!("Reversed list of {} element(s)", self.len);
    }

    /// Value `k` positions from the tail, where `k = 1` is the tail itself.
    ///
    /// A lead cursor starts `k - 1` links ahead of a trailing cursor; both
    /// then advance together until the lead sits on the tail.
    pub fn kth_from_end(&self, k: usize) -> LgResult<&T> {
        let out_of_range = || ListGraphError::OutOfRange {
            requested: k,
            len: self.len,
        };
        if k == 0 {
            return Err(out_of_range());
        }

        let mut trail = self.first.ok_or_else(out_of_range)?;
        let mut lead = trail;
        for _ in 1..k {
            lead = self.next_of(lead).ok_or_else(out_of_range)?;
        }
        while let Some(next) = self.next_of(lead) {
            lead = next;
            trail = self.next_of(trail).ok_or_else(out_of_range)?;
        }

        self.node(trail).map(|n| &n.value).ok_or_else(out_of_range)
    }

    /// Drop every element.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.first = None;
        self.last = None;
        self.len = 0;
    }

    pub(crate) fn node(&self, idx: usize) -> Option<&Node<T>> {
        self.slots.get(idx).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, idx: usize) -> Option<&mut Node<T>> {
        self.slots.get_mut(idx).and_then(Option::as_mut)
    }

    fn next_of(&self, idx: usize) -> Option<usize> {
        self.node(idx).and_then(|n| n.next)
    }

    fn alloc(&mut self, value: T, next: Option<usize>) -> usize {
        let node = Some(Node { value, next });
        match self.free.pop() {
            Some(idx) => {
                if let Some(slot) = self.slots.get_mut(idx) {
                    *slot = node;
                    return idx;
                }
                self.slots.push(node);
                self.slots.len() - 1
            }
            None => {
                self.slots.push(node);
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) -> Option<T> {
        let node = self.slots.get_mut(idx).and_then(Option::take)?;
        self.free.push(idx);
        Some(node.value)
    }

    /// Slot whose successor is the tail. `None` when the list has fewer
    /// than two elements.
    fn penultimate(&self) -> Option<usize> {
        let tail = self.last?;
        let mut cursor = self.first?;
        loop {
            let next = self.next_of(cursor)?;
            if next == tail {
                return Some(cursor);
            }
            cursor = next;
        }
    }

    fn require_successor(&self) -> LgResult<()> {
        if self.is_empty() {
            return Err(ListGraphError::EmptyCollection);
        }
        if self.first == self.last {
            return Err(ListGraphError::OutOfRange {
                requested: 2,
                len: self.len,
            });
        }
        Ok(())
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Zero-based position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    /// Linear search for `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Unlink the first element equal to `value`. Returns whether one was found.
    pub fn remove(&mut self, value: &T) -> bool {
        self.unlink_matching(value, 1) == 1
    }

    /// Unlink every element equal to `value`, returning how many went.
    pub fn remove_all(&mut self, value: &T) -> usize {
        self.unlink_matching(value, usize::MAX)
    }

    fn unlink_matching(&mut self, value: &T, limit: usize) -> usize {
        let mut removed = 0;
        let mut prev: Option<usize> = None;
        let mut cursor = self.first;

        while let Some(idx) = cursor {
            if removed == limit {
                break;
            }
            let Some(node) = self.node(idx) else {
                break;
            };
            let next = node.next;

            if node.value == *value {
                match prev.and_then(|p| self.node_mut(p)) {
                    Some(prev_node) => prev_node.next = next,
                    None => self.first = next,
                }
                if self.last == Some(idx) {
                    self.last = prev;
                }
                self.release(idx);
                self.len -= 1;
                removed += 1;
            } else {
                prev = Some(idx);
            }
            cursor = next;
        }

        removed
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_last(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}
