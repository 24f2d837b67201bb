//! Linked list based collections.
//!
//! The [`queue`] module provides a string queue built on a singly linked
//! list. Values are copied in on insertion, taken from the head, and the
//! whole chain can be reversed or sorted in place by relinking its nodes.
//!
//! # Examples
//!
//! ```
//! use mola_queue::linked_list::queue::Queue;
//!
//! let mut queue = Queue::new();
//! queue.insert_tail("banana").unwrap();
//! queue.insert_tail("Apple").unwrap();
//! queue.insert_head("cherry").unwrap();
//! assert_eq!(queue.size(), 3);
//!
//! queue.sort();
//! assert_eq!(queue.iter().collect::<Vec<_>>(), vec!["Apple", "banana", "cherry"]);
//!
//! queue.reverse();
//! assert_eq!(queue.head(), Some("cherry"));
//! assert_eq!(queue.tail(), Some("Apple"));
//!
//! let mut buf = [0xffu8; 4];
//! queue.remove_head(Some(&mut buf[..])).unwrap();
//! assert_eq!(&buf, b"che\0");
//! assert_eq!(queue.size(), 2);
//! ```
pub mod queue;
