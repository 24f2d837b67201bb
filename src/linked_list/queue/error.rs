use thiserror::Error;

/// Errors reported by fallible [`Queue`](super::list::Queue) operations.
///
/// Every failing operation leaves the queue exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("queue is empty")]
    Empty,

    #[error("failed to allocate a queue node")]
    NodeAlloc,

    #[error("failed to allocate {len} bytes for a queue value")]
    ValueAlloc { len: usize },

    #[error("failed to allocate a queue handle")]
    HandleAlloc,
}
