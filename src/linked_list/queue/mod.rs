//! # String Queue
//!
//! A queue of owned strings on top of a singly linked list.
//!
//! ## Core Components
//!
//! - [`list::Queue`]: the queue itself, tracking head, tail and size.
//! - [`node::QueueNode`]: a heap node owning one copied value.
//! - [`traits`]: the `Link` seam shared by the relinking algorithms.
//! - [`relink`]: in-place reversal and stable merge sort over a chain.
//! - [`handle`]: the same operations behind an optional handle with `bool` results.
//!
//! ## Allocation
//!
//! Nodes, values and heap handles are allocated fallibly. An allocation
//! failure is reported as a [`error::QueueError`] (or `false`/`None` through
//! [`handle`]) and leaves the queue unchanged, the process never aborts.

pub mod error;
pub mod handle;
pub mod iter;
pub mod list;
pub mod node;
pub mod order;
pub mod relink;
pub mod traits;

pub use error::QueueError;
pub use list::Queue;

#[cfg(test)]
mod tests;
