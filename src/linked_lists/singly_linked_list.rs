use core::{
    fmt::{self, Debug, Display, Formatter},
    iter::{Extend, FusedIterator},
};
use std::alloc::handle_alloc_error;

use crate::error::AllocationError;

mod node;

use node::{Link, Node};

/// An ordered sequence that exclusively owns every one of its nodes.
///
/// Elements are appended at the tail. Dropping, [`destroy`](Self::destroy)ing
/// or [`clear`](Self::clear)ing the list releases the nodes one at a time, so
/// long lists never recurse through their destructors.
///
/// Once elements are in, the only way back to an empty list is releasing all
/// of them at once:
///
/// ```
/// use owned_list::SinglyLinkedList;
///
/// let mut lst = SinglyLinkedList::new();
/// lst.append(10).unwrap();
/// lst.append(20).unwrap();
/// assert_eq!(lst.to_string(), "[10, 20]");
/// lst.clear();
/// assert!(lst.is_empty());
/// ```
///
/// ```compile_fail
/// use owned_list::SinglyLinkedList;
///
/// let mut lst = SinglyLinkedList::new();
/// lst.append(10).unwrap();
/// let _ = lst.pop_front();
/// ```
pub struct SinglyLinkedList<T> {
    head: Link<T>,
}

impl<T> SinglyLinkedList<T> {
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Inserts an element at the end of the list.
    ///
    /// Finding the tail walks the whole chain, use
    /// [`try_extend`](Self::try_extend) to append many elements in one pass.
    pub fn append(&mut self, item: T) -> Result<(), AllocationError> {
        let node = Node::try_boxed(item)?;
        *self.tail_link() = Some(node);
        Ok(())
    }

    /// Appends every item of `iter`, walking to the tail only once.
    ///
    /// On failure the items appended before the failing one stay in the list.
    pub fn try_extend<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), AllocationError> {
        let mut tail = self.tail_link();
        for item in iter {
            tail = &mut tail.insert(Node::try_boxed(item)?).next;
        }
        Ok(())
    }

    /// Releases every node, leaving the list empty and reusable.
    pub fn clear(&mut self) {
        let mut released = 0usize;
        let mut head = self.head.take();
        while let Some(mut node) = head {
            head = node.next.take();
            released += 1;
        }
        if released != 0 {
            log::trace!("released {released} list nodes");
        }
    }

    /// Consumes the list and releases all of its nodes.
    pub fn destroy(mut self) {
        self.clear();
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn first(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    pub fn last(&self) -> Option<&T> {
        self.iter().last()
    }

    pub fn contains<Q: PartialEq<T>>(&self, item: &Q) -> bool {
        self.iter().any(|s| item.eq(s))
    }

    /// A fresh read-only walk from the head. Every call starts over.
    pub fn traverse(&self) -> Iter<'_, T> {
        self.iter()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { node: &self.head }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            node: Some(&mut self.head),
        }
    }

    fn tail_link(&mut self) -> &mut Link<T> {
        let mut current = &mut self.head;
        while let Some(node) = current {
            current = &mut node.next;
        }
        current
    }

    fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            value
        })
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let len = self.len();
        write!(f, "SinglyLinkedList {{ length: {len}, items: [")?;
        let mut iter = self.iter();
        if let Some(elem) = iter.next() {
            write!(f, "{elem:?}")?
        }
        for elem in iter {
            write!(f, ", {elem:?}")?;
        }
        write!(f, "] }}")
    }
}

impl<T: Display> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut iter = self.iter();
        if let Some(elem) = iter.next() {
            write!(f, "{elem}")?
        }
        for elem in iter {
            write!(f, ", {elem}")?;
        }
        write!(f, "]")
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut lst = SinglyLinkedList::new();
        lst.extend(iter);
        lst
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        if let Err(e) = self.try_extend(iter) {
            handle_alloc_error(e.layout)
        }
    }
}

pub use iters::*;
mod iters {
    use super::*;

    impl<T> IntoIterator for SinglyLinkedList<T> {
        type Item = T;
        type IntoIter = IntoIter<T>;
        fn into_iter(self) -> Self::IntoIter {
            IntoIter { list: self }
        }
    }

    impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
        type Item = &'a T;
        type IntoIter = Iter<'a, T>;
        fn into_iter(self) -> Self::IntoIter {
            self.iter()
        }
    }

    impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
        type Item = &'a mut T;
        type IntoIter = IterMut<'a, T>;
        fn into_iter(self) -> Self::IntoIter {
            self.iter_mut()
        }
    }

    /// Owning iterator. Whatever is left when it is dropped is released by
    /// the wrapped list.
    pub struct IntoIter<T> {
        pub(crate) list: SinglyLinkedList<T>,
    }

    impl<T> Iterator for IntoIter<T> {
        type Item = T;
        fn next(&mut self) -> Option<Self::Item> {
            self.list.pop_front()
        }
    }

    impl<T> FusedIterator for IntoIter<T> {}

    pub struct Iter<'a, T> {
        pub(crate) node: &'a Link<T>,
    }

    impl<T> Clone for Iter<'_, T> {
        fn clone(&self) -> Self {
            Iter { node: self.node }
        }
    }

    impl<'a, T> Iterator for Iter<'a, T> {
        type Item = &'a T;
        fn next(&mut self) -> Option<Self::Item> {
            if let Some(s) = self.node {
                self.node = &s.next;
                Some(&s.value)
            } else {
                None
            }
        }
    }

    impl<T> FusedIterator for Iter<'_, T> {}

    pub struct IterMut<'a, T> {
        pub(crate) node: Option<&'a mut Link<T>>,
    }

    impl<'a, T> Iterator for IterMut<'a, T> {
        type Item = &'a mut T;
        fn next(&mut self) -> Option<Self::Item> {
            match self.node.take() {
                Some(Some(s)) => {
                    let Node { value, next } = &mut **s;
                    self.node = Some(next);
                    Some(value)
                }
                Some(None) => None,
                None => None,
            }
        }
    }

    impl<T> FusedIterator for IterMut<'_, T> {}

}
