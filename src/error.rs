use std::{alloc::Layout, io};

use thiserror::Error;

/// Storage for a new list node could not be obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("failed to allocate a list node ({} bytes)", .layout.size())]
pub struct AllocationError {
    pub layout: Layout,
}

/// An [`Alias`](crate::Alias) was read after it stopped referring to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("dereferenced an alias that no longer refers to a value")]
pub struct NullDereferenceError;

/// Anything that stops [`scenario::run`](crate::scenario::run) half way.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Allocation(#[from] AllocationError),
    #[error(transparent)]
    NullDereference(#[from] NullDereferenceError),
    #[error("failed to write the report")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = AllocationError {
            layout: Layout::new::<[u64; 2]>(),
        };
        assert_eq!(e.to_string(), "failed to allocate a list node (16 bytes)");
        assert_eq!(
            NullDereferenceError.to_string(),
            "dereferenced an alias that no longer refers to a value"
        );
    }
}
