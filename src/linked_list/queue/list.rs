use alloc::string::String;
use core::{fmt, marker::PhantomData, ptr::NonNull};

use tracing::trace;

use super::{
    error::QueueError,
    iter::Iter,
    node::QueueNode,
    order::cmp_ignore_ascii_case,
    relink,
    traits::{Link, NodeWithValue},
};

/// A queue of owned strings backed by a singly linked list.
///
/// Values can be inserted at either end and are removed from the head, so the
/// queue serves both as a FIFO (`insert_tail` + `remove_head`) and as a LIFO
/// (`insert_head` + `remove_head`). Every value is copied on insertion.
pub struct Queue {
    head: Option<NonNull<QueueNode>>,
    tail: Option<NonNull<QueueNode>>,
    size: usize,
    _marker: PhantomData<QueueNode>,
}

impl Queue {
    /// Creates a new, empty queue.
    pub const fn new() -> Self {
        Queue {
            head: None,
            tail: None,
            size: 0,
            _marker: PhantomData,
        }
    }

    /// Inserts a copy of `value` at the head of the queue.
    pub fn insert_head(&mut self, value: &str) -> Result<(), QueueError> {
        let node = QueueNode::try_alloc(value)?;
        unsafe { (*node.as_ptr()).set_next(self.head) };
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.size += 1;
        Ok(())
    }

    /// Inserts a copy of `value` at the tail of the queue.
    pub fn insert_tail(&mut self, value: &str) -> Result<(), QueueError> {
        let node = QueueNode::try_alloc(value)?;
        match self.tail {
            Some(tail) => unsafe { (*tail.as_ptr()).set_next(Some(node)) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.size += 1;
        Ok(())
    }

    /// Removes the head of the queue and returns its value.
    pub fn pop_head(&mut self) -> Option<String> {
        let head = self.head?;
        // SAFETY: `head` is owned by this queue and is unlinked before release.
        unsafe {
            self.head = (*head.as_ptr()).take_next();
            if self.head.is_none() {
                self.tail = None;
            }
            self.size -= 1;
            Some(QueueNode::release(head))
        }
    }

    /// Removes the head of the queue.
    ///
    /// When `buf` is given it is zero-filled over its whole length, then
    /// receives at most `buf.len() - 1` bytes of the removed value, so the
    /// copied bytes are always followed by at least one zero byte. The copy
    /// is byte-wise and may cut a multi-byte character. An empty buffer
    /// receives nothing.
    ///
    /// Fails with [`QueueError::Empty`] without touching `buf` when there is
    /// nothing to remove.
    pub fn remove_head(&mut self, buf: Option<&mut [u8]>) -> Result<(), QueueError> {
        let value = self.pop_head().ok_or(QueueError::Empty)?;
        if let Some(buf) = buf {
            buf.fill(0);
            let len = value.len().min(buf.len().saturating_sub(1));
            buf[..len].copy_from_slice(&value.as_bytes()[..len]);
        }
        Ok(())
    }

    /// Returns the number of values in the queue.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the value at the head of the queue.
    pub fn head(&self) -> Option<&str> {
        self.head.map(|node| unsafe { node.as_ref() }.value())
    }

    /// Returns the value at the tail of the queue.
    pub fn tail(&self) -> Option<&str> {
        self.tail.map(|node| unsafe { node.as_ref() }.value())
    }

    /// Reverses the order of the queue in place.
    ///
    /// Nodes are relinked, never reallocated: the old tail becomes the head
    /// and the old head becomes the tail.
    pub fn reverse(&mut self) {
        let Some(first) = self.head else {
            return;
        };
        trace!(size = self.size, "reversing queue");
        // SAFETY: the chain from `head` is exclusively owned by this queue.
        let last = unsafe { relink::reverse(first) };
        self.tail = Some(first);
        self.head = Some(last);
    }

    /// Sorts the queue in ascending order, ignoring ASCII case.
    ///
    /// The sort is a stable merge sort that relinks the existing nodes.
    /// Values that compare equal keep their relative order.
    pub fn sort(&mut self) {
        if self.size < 2 {
            return;
        }
        trace!(size = self.size, "sorting queue");
        let mut le =
            |a: &QueueNode, b: &QueueNode| cmp_ignore_ascii_case(a.value(), b.value()).is_le();
        // SAFETY: the chain from `head` is exclusively owned by this queue.
        unsafe {
            self.head = relink::merge_sort(self.head, &mut le);
            self.tail = relink::last(self.head);
        }
    }

    /// Removes and frees every value in the queue.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        self.tail = None;
        self.size = 0;
        while let Some(node) = current {
            // SAFETY: each node is detached before it is released.
            unsafe {
                current = (*node.as_ptr()).take_next();
                QueueNode::release(node);
            }
        }
    }

    /// Returns an iterator over the values, from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.head, self.size)
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Queue {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

unsafe impl Send for Queue {}
unsafe impl Sync for Queue {}
