use alloc::{alloc::Layout, boxed::Box, string::String};
use core::ptr::NonNull;

use tracing::warn;

use super::{
    error::QueueError,
    traits::{Link, NodeWithValue},
};

/// A node in a string queue.
///
/// The node owns its value, a private copy of the text handed to the queue.
/// Nodes only ever live on the heap, behind the `NonNull` links of the chain
/// that owns them.
pub struct QueueNode {
    next: Option<NonNull<QueueNode>>,
    value: String,
}

impl QueueNode {
    /// Allocates a detached node holding a copy of `value`.
    ///
    /// Both the value copy and the node itself are allocated fallibly. If
    /// either allocation fails nothing stays allocated.
    pub(crate) fn try_alloc(value: &str) -> Result<NonNull<Self>, QueueError> {
        let value = copy_value(value)?;
        let node = try_box(QueueNode { next: None, value }).map_err(|_| {
            warn!(size = Layout::new::<Self>().size(), "failed to allocate queue node");
            QueueError::NodeAlloc
        })?;
        Ok(NonNull::from(Box::leak(node)))
    }

    /// Frees the node and hands its value back.
    ///
    /// # Safety
    ///
    /// `node` must come from [`QueueNode::try_alloc`], must not be reachable
    /// from any chain anymore, and must not be used after this call.
    pub(crate) unsafe fn release(node: NonNull<Self>) -> String {
        let node = unsafe { Box::from_raw(node.as_ptr()) };
        node.value
    }
}

impl Link for QueueNode {
    type Target = Self;

    #[inline]
    fn next(&self) -> Option<NonNull<Self>> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<Self>>) {
        self.next = next;
    }
}

impl NodeWithValue for QueueNode {
    #[inline]
    fn value(&self) -> &str {
        &self.value
    }
}

/// Moves `value` into a fresh heap allocation, handing it back on failure
/// instead of aborting.
pub(crate) fn try_box<T>(value: T) -> Result<Box<T>, T> {
    let layout = Layout::new::<T>();
    if layout.size() == 0 {
        return Ok(Box::new(value));
    }
    // SAFETY: the layout has a non-zero size.
    let raw = unsafe { alloc::alloc::alloc(layout) }.cast::<T>();
    match NonNull::new(raw) {
        Some(ptr) => unsafe {
            ptr.as_ptr().write(value);
            // SAFETY: allocated by the global allocator with `Layout::new::<T>()`
            // and initialised above.
            Ok(Box::from_raw(ptr.as_ptr()))
        },
        None => Err(value),
    }
}

fn copy_value(source: &str) -> Result<String, QueueError> {
    let len = source.len();
    let mut value = String::new();
    value.try_reserve_exact(len).map_err(|_| {
        warn!(len, "failed to allocate queue value");
        QueueError::ValueAlloc { len }
    })?;
    value.push_str(source);
    Ok(value)
}
