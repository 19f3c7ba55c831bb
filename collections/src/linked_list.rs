//! A doubly-linked list addressed by position.
//!
//! Nodes are owned by a [`SparseVec`] and refer to their neighbours by slot
//! index instead of by pointer. Relinking a node only rewrites indices, and a
//! removed node leaves the arena together with its value and links, so no
//! stale node can stay reachable.
//!
//! Appending computes in O(1) time. Positional access walks the chain from
//! whichever end is closer to the requested position and computes in O(n)
//! time, visiting at most half of the nodes.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use crate::error::ListError;
use crate::index::{check_index, check_range};
use crate::sequence::{fmt_elements, Sequence};
use crate::sparse_vec::SparseVec;

#[derive(Clone, Debug)]
struct Node<T> {
    element: T,
    previous: Option<usize>,
    next: Option<usize>,
}

/// A doubly-linked list with owned nodes.
///
/// # Examples
///
/// ```
/// use seqlist_collections::{LinkedList, Sequence};
///
/// let mut list = LinkedList::new();
/// list.add("A");
/// list.add("B");
/// list.add("C");
///
/// assert_eq!(list.remove(1), Ok("B"));
/// assert_eq!(list.front(), Some(&"A"));
/// assert_eq!(list.back(), Some(&"C"));
/// assert_eq!(list.to_string(), "{A, C}");
/// ```
#[derive(Clone)]
pub struct LinkedList<T> {
    nodes: SparseVec<Node<T>>,
    first: Option<usize>,
    last: Option<usize>,
    size: usize,
}

/// Where a walk to a position starts, and how many links it follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Route {
    Forward(usize),
    Backward(usize),
}

/// Follows the `next` links starting at a given slot.
struct Elements<'a, T> {
    nodes: &'a SparseVec<Node<T>>,
    next: Option<usize>,
}

impl<'a, T> Iterator for Elements<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.nodes.get(self.next?)?;
        self.next = node.next;
        Some(&node.element)
    }
}

impl<T> LinkedList<T> {
    /// Creates an empty `LinkedList`.
    pub fn new() -> Self {
        LinkedList {
            nodes: SparseVec::new(),
            first: None,
            last: None,
            size: 0,
        }
    }

    /// Returns the first element, or `None` if the list is empty.
    pub fn front(&self) -> Option<&T> {
        self.element_at(self.first)
    }

    /// Returns the last element, or `None` if the list is empty.
    pub fn back(&self) -> Option<&T> {
        self.element_at(self.last)
    }

    fn element_at(&self, slot: Option<usize>) -> Option<&T> {
        self.nodes.get(slot?).map(|node| &node.element)
    }

    fn elements_from(&self, slot: Option<usize>) -> Elements<'_, T> {
        Elements {
            nodes: &self.nodes,
            next: slot,
        }
    }

    fn elements(&self) -> Elements<'_, T> {
        self.elements_from(self.first)
    }

    fn out_of_bounds(&self, index: usize) -> ListError {
        ListError::IndexOutOfBounds {
            index,
            size: self.size,
        }
    }

    /// Chooses the end to start from when walking to position `index`:
    /// forward from the first node if `index <= size / 2`, backward from the
    /// last node otherwise.
    fn route(&self, index: usize) -> Route {
        if index <= self.size / 2 {
            Route::Forward(index)
        } else {
            Route::Backward(self.size - 1 - index)
        }
    }

    /// Returns the slot of the node at position `index`.
    fn locate(&self, index: usize) -> Result<usize, ListError> {
        check_index(index, self.size)?;

        let (mut slot, steps, forward) = match self.route(index) {
            Route::Forward(steps) => (self.first, steps, true),
            Route::Backward(steps) => (self.last, steps, false),
        };
        for _ in 0..steps {
            slot = slot
                .and_then(|slot| self.nodes.get(slot))
                .and_then(|node| if forward { node.next } else { node.previous });
        }

        slot.ok_or_else(|| self.out_of_bounds(index))
    }

    /// Makes `previous` and `next` neighbours. A missing side stands for the
    /// respective end of the chain, so `first` or `last` is updated instead.
    fn link(&mut self, previous: Option<usize>, next: Option<usize>) {
        match previous.and_then(|slot| self.nodes.get_mut(slot)) {
            Some(node) => node.next = next,
            None => self.first = next,
        }
        match next.and_then(|slot| self.nodes.get_mut(slot)) {
            Some(node) => node.previous = previous,
            None => self.last = previous,
        }
    }

    /// Stores `element` in a new node spliced between `previous` and `next`.
    fn splice(&mut self, element: T, previous: Option<usize>, next: Option<usize>) {
        let slot = self.nodes.insert(Node {
            element,
            previous,
            next,
        });
        self.link(previous, Some(slot));
        self.link(Some(slot), next);
        self.size += 1;
    }
}

impl<T> Sequence<T> for LinkedList<T> {
    fn add(&mut self, element: T) {
        self.splice(element, self.last, None);
    }

    fn insert(&mut self, index: usize, element: T) -> Result<(), ListError> {
        let next = self.locate(index)?;
        let previous = self.nodes.get(next).and_then(|node| node.previous);
        self.splice(element, previous, Some(next));
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        let slot = self.locate(index)?;
        let node = self
            .nodes
            .remove(slot)
            .ok_or_else(|| self.out_of_bounds(index))?;

        self.link(node.previous, node.next);
        self.size -= 1;
        Ok(node.element)
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        let slot = self.locate(index)?;
        self.element_at(Some(slot))
            .ok_or_else(|| self.out_of_bounds(index))
    }

    fn set(&mut self, index: usize, element: T) -> Result<T, ListError> {
        let slot = self.locate(index)?;
        let out_of_bounds = self.out_of_bounds(index);
        let node = self.nodes.get_mut(slot).ok_or(out_of_bounds)?;
        Ok(mem::replace(&mut node.element, element))
    }

    #[inline]
    fn size(&self) -> usize {
        self.size
    }

    fn sublist(&self, from: usize, to: usize) -> Result<Self, ListError>
    where
        T: Clone,
    {
        check_range(from, to, self.size)?;

        let start = self.locate(from)?;
        let mut sublist = LinkedList::new();
        for element in self.elements_from(Some(start)).take(to - from + 1) {
            sublist.add(element.clone());
        }
        Ok(sublist)
    }
}

impl<T> Default for LinkedList<T> {
    /// Creates an empty `LinkedList<T>`.
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Two lists are equal if they hold equal elements in the same order,
/// regardless of where their nodes are stored.
impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.elements().eq(other.elements())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

/// Only the size and the two boundary elements are hashed. Lists that differ
/// in their interior elements alone collide.
impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        self.front().hash(state);
        self.back().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.elements()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_elements(f, self.elements())
    }
}

#[cfg(feature = "serde-derive")]
mod serde_derive {
    use std::fmt;
    use std::marker::PhantomData;

    use serde::{
        de::{Deserialize, Deserializer, SeqAccess, Visitor},
        ser::{Serialize, SerializeSeq, Serializer},
    };

    use super::{LinkedList, Route};
    use crate::sequence::Sequence;

    impl<T: Serialize> Serialize for LinkedList<T> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut seq = serializer.serialize_seq(Some(self.size))?;

            for element in self.elements() {
                seq.serialize_element(element)?;
            }

            seq.end()
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for LinkedList<T> {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_seq(LinkedListVisitor(PhantomData))
        }
    }

    struct LinkedListVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for LinkedListVisitor<T> {
        type Value = LinkedList<T>;

        fn expecting(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
            write!(f, "a sequence of list elements")
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<LinkedList<T>, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut list = LinkedList::new();

            while let Some(element) = seq.next_element()? {
                list.add(element);
            }

            Ok(list)
        }
    }
}
