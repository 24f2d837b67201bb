//! Relinking algorithms over singly linked chains.
//!
//! A chain is given by its first node; it ends at the first node whose
//! `next` is `None`. None of these functions allocates or frees a node, they
//! only rewrite `next` pointers.
//!
//! # Safety
//!
//! All functions here share the same contract: every node reachable from the
//! given pointers must be live, must belong to an acyclic chain, and must not
//! be referenced elsewhere for the duration of the call.

use core::ptr::NonNull;

use super::traits::Link;

/// Reverses the chain starting at `first` in a single forward pass.
///
/// Returns the new first node (the old last one). `first` becomes the last
/// node of the reversed chain.
///
/// # Safety
///
/// See the module documentation.
pub unsafe fn reverse<T>(first: NonNull<T>) -> NonNull<T>
where
    T: Link<Target = T>,
{
    unsafe {
        let mut prev = first;
        let mut current = (*first.as_ptr()).next();
        while let Some(node) = current {
            let node_ref = &mut *node.as_ptr();
            current = node_ref.next();
            node_ref.set_next(Some(prev));
            prev = node;
        }
        (*first.as_ptr()).set_next(None);
        prev
    }
}

/// Walks the chain and returns its last node.
///
/// # Safety
///
/// See the module documentation.
pub unsafe fn last<T>(first: Option<NonNull<T>>) -> Option<NonNull<T>>
where
    T: Link<Target = T>,
{
    let mut current = first?;
    while let Some(next) = unsafe { current.as_ref() }.next() {
        current = next;
    }
    Some(current)
}

/// Cuts the chain in two and returns the first node of the second half.
///
/// The midpoint is found with a slow/fast walk, so for a chain of `n` nodes
/// the first half keeps `⌈n/2⌉` nodes and the returned half has `⌊n/2⌋`.
///
/// # Safety
///
/// See the module documentation.
pub unsafe fn split<T>(first: NonNull<T>) -> Option<NonNull<T>>
where
    T: Link<Target = T>,
{
    unsafe {
        let mut slow = first;
        let mut fast = first.as_ref().next();
        while let Some(step) = fast.and_then(|f| f.as_ref().next()) {
            let Some(next) = slow.as_ref().next() else {
                break;
            };
            slow = next;
            fast = step.as_ref().next();
        }
        (*slow.as_ptr()).take_next()
    }
}

/// Merges two chains that are each sorted under `le` into one sorted chain.
///
/// `le(a, b)` must return true when `a` may be placed before `b`. On ties the
/// node from `left` is taken first, so merging preserves the relative order
/// of equal nodes. Once one side runs out, the rest of the other is linked in
/// as a whole.
///
/// # Safety
///
/// See the module documentation. The two chains must be disjoint.
pub unsafe fn merge<T, F>(
    mut left: Option<NonNull<T>>,
    mut right: Option<NonNull<T>>,
    le: &mut F,
) -> Option<NonNull<T>>
where
    T: Link<Target = T>,
    F: FnMut(&T, &T) -> bool,
{
    let mut head: Option<NonNull<T>> = None;
    let mut tail: Option<NonNull<T>> = None;

    loop {
        let (l, r) = match (left, right) {
            (Some(l), Some(r)) => (l, r),
            (rest, None) | (None, rest) => {
                unsafe { append(&mut head, &mut tail, rest) };
                return head;
            }
        };

        let taken = unsafe {
            if le(l.as_ref(), r.as_ref()) {
                left = l.as_ref().next();
                l
            } else {
                right = r.as_ref().next();
                r
            }
        };
        unsafe { append(&mut head, &mut tail, Some(taken)) };
    }
}

unsafe fn append<T>(
    head: &mut Option<NonNull<T>>,
    tail: &mut Option<NonNull<T>>,
    node: Option<NonNull<T>>,
) where
    T: Link<Target = T>,
{
    match *tail {
        Some(t) => unsafe { (*t.as_ptr()).set_next(node) },
        None => *head = node,
    }
    if node.is_some() {
        *tail = node;
    }
}

/// Sorts the chain starting at `first` with a top-down merge sort and
/// returns the new first node.
///
/// The sort is stable under `le`. Recursion depth is `O(log n)`.
///
/// # Safety
///
/// See the module documentation.
pub unsafe fn merge_sort<T, F>(first: Option<NonNull<T>>, le: &mut F) -> Option<NonNull<T>>
where
    T: Link<Target = T>,
    F: FnMut(&T, &T) -> bool,
{
    let head = first?;
    unsafe {
        if head.as_ref().next().is_none() {
            return first;
        }
        let second = split(head);
        let left = merge_sort(Some(head), le);
        let right = merge_sort(second, le);
        merge(left, right, le)
    }
}
