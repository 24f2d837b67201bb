use core::ptr::NonNull;

/// A trait for a forward link in a singly linked chain.
pub trait Link: Sized {
    /// The target type of the link.
    type Target;

    /// Get the next pointer in the chain
    fn next(&self) -> Option<NonNull<Self::Target>>;

    /// Set the next pointer in the chain
    fn set_next(&mut self, next: Option<NonNull<Self::Target>>);

    /// Detach and return the next pointer, leaving this link terminal
    #[inline]
    fn take_next(&mut self) -> Option<NonNull<Self::Target>> {
        let next = self.next();
        self.set_next(None);
        next
    }
}

/// A trait for a node that carries a text value.
pub trait NodeWithValue: Link<Target = Self> {
    /// Get the value stored in the node
    fn value(&self) -> &str;
}
