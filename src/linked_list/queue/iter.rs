use core::{iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use super::{
    node::QueueNode,
    traits::{Link, NodeWithValue},
};

/// An iterator over the values of a [`Queue`](super::list::Queue).
pub struct Iter<'a> {
    current: Option<NonNull<QueueNode>>,
    remaining: usize,
    _queue: PhantomData<&'a QueueNode>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(head: Option<NonNull<QueueNode>>, size: usize) -> Self {
        Self {
            current: head,
            remaining: size,
            _queue: PhantomData,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|current| {
            // SAFETY: the queue is borrowed for `'a`, so its nodes stay alive
            // and unmodified.
            let node: &'a QueueNode = unsafe { current.as_ref() };
            self.current = node.next();
            self.remaining -= 1;
            node.value()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

unsafe impl Send for Iter<'_> {}
unsafe impl Sync for Iter<'_> {}
