use core::ptr::NonNull;
use std::alloc::{self, Layout};

use crate::error::AllocationError;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// Allocates a node holding `value` with no successor.
    ///
    /// Unlike `Box::new` this reports allocator failure to the caller instead
    /// of aborting the process.
    pub(crate) fn try_boxed(value: T) -> Result<Box<Self>, AllocationError> {
        let layout = Layout::new::<Self>();
        // SAFETY: a node always carries a link, so `layout` is never zero sized
        let ptr = NonNull::new(unsafe { alloc::alloc(layout) }.cast::<Self>()).ok_or_else(|| {
            log::debug!("node allocation of {} bytes failed", layout.size());
            AllocationError { layout }
        })?;
        // SAFETY: `ptr` was just allocated by the global allocator with the
        // layout of `Self`, which is exactly what `Box::from_raw` expects
        unsafe {
            ptr.as_ptr().write(Self { value, next: None });
            Ok(Box::from_raw(ptr.as_ptr()))
        }
    }
}
