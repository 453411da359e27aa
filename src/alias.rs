//! Checked aliasing.
//!
//! An [`Alias`] is a mutable reference that can be let go of. Once released
//! it refers to nothing, and every read or write through it is refused with a
//! [`NullDereferenceError`] instead of touching whatever memory the old
//! address happens to hold.
//!
//! The borrow checker covers the rest: while an alias is alive its target
//! cannot be used directly.
//!
//! ```compile_fail
//! use owned_list::Alias;
//!
//! let mut a = 200;
//! let alias = Alias::new(&mut a);
//! a = 5;
//! let _ = alias.get();
//! ```
//!
//! A plain `Option<&i32>` cannot be read without checking it first.
//!
//! ```compile_fail
//! let a = 200;
//! let mut b = Some(&a);
//! b = None;
//! let c: i32 = *b;
//! ```

use crate::error::NullDereferenceError;

/// A mutable reference to a `T` that may have been released.
#[derive(Debug)]
pub struct Alias<'a, T> {
    target: Option<&'a mut T>,
}

impl<'a, T> Alias<'a, T> {
    pub fn new(target: &'a mut T) -> Self {
        Self {
            target: Some(target),
        }
    }

    /// An alias that refers to nothing.
    pub fn absent() -> Self {
        Self { target: None }
    }

    /// Stops referring to the target. The target itself is left untouched.
    pub fn release(&mut self) {
        self.target = None;
    }

    pub fn is_present(&self) -> bool {
        self.target.is_some()
    }

    pub fn get(&self) -> Result<&T, NullDereferenceError> {
        self.target.as_deref().ok_or_else(refused)
    }

    pub fn get_mut(&mut self) -> Result<&mut T, NullDereferenceError> {
        self.target.as_deref_mut().ok_or_else(refused)
    }
}

impl<T> Default for Alias<'_, T> {
    fn default() -> Self {
        Self::absent()
    }
}

impl<'a, T> From<&'a mut T> for Alias<'a, T> {
    fn from(target: &'a mut T) -> Self {
        Self::new(target)
    }
}

fn refused() -> NullDereferenceError {
    log::warn!("refused to dereference a released alias");
    NullDereferenceError
}

/// Resets the aliased value and reports which branch was taken.
///
/// Values above 100 become 1 and yield 100; anything else becomes 2 and
/// yields 101. Nothing is written when the alias has been released.
pub fn adjust(alias: &mut Alias<'_, i32>) -> Result<i32, NullDereferenceError> {
    let value = alias.get_mut()?;
    if *value > 100 {
        *value = 1;
        Ok(100)
    } else {
        *value = 2;
        Ok(101)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjust_through_live_alias() {
        let mut a = 200;
        let mut b = Alias::new(&mut a);
        assert_eq!(adjust(&mut b), Ok(100));
        assert_eq!(b.get(), Ok(&1));
        assert_eq!(adjust(&mut b), Ok(101));
        assert_eq!(b.get(), Ok(&2));
        drop(b);
        assert_eq!(a, 2);
    }

    #[test]
    fn boundary_is_exclusive() {
        let mut a = 100;
        assert_eq!(adjust(&mut Alias::new(&mut a)), Ok(101));
        assert_eq!(a, 2);

        let mut a = 101;
        assert_eq!(adjust(&mut Alias::from(&mut a)), Ok(100));
        assert_eq!(a, 1);
    }

    #[test]
    fn released_alias_is_refused() {
        let mut a = 200;
        let mut b = Alias::new(&mut a);
        assert!(b.is_present());
        assert_eq!(adjust(&mut b), Ok(100));

        b.release();
        assert!(!b.is_present());
        assert_eq!(b.get(), Err(NullDereferenceError));
        assert_eq!(b.get_mut(), Err(NullDereferenceError));
        assert_eq!(adjust(&mut b), Err(NullDereferenceError));
        drop(b);

        // the refused call must not have written anything
        assert_eq!(a, 1);
    }

    #[test]
    fn absent_alias_never_yields_a_value() {
        let b: Alias<'_, i32> = Alias::absent();
        assert!(b.get().is_err());
        let d: Alias<'_, String> = Alias::default();
        assert!(!d.is_present());
    }

    #[test]
    fn release_is_idempotent() {
        let mut s = String::from("live");
        let mut b = Alias::new(&mut s);
        b.get_mut().expect("present").push('!');
        b.release();
        b.release();
        assert!(b.get().is_err());
        drop(b);
        assert_eq!(s, "live!");
    }
}
