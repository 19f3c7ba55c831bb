//! A list backed by a single contiguous storage block.
//!
//! The block is sized by an explicit growth policy rather than left to the
//! allocator: once the number of elements reaches three quarters of the
//! capacity, the capacity grows to one and a half times its old value plus
//! one before the next element is placed. Appending therefore computes in
//! amortized O(1) time, while positional inserts and removals shift the tail of
//! the block and compute in O(n) time.
//!
//! The capacity never shrinks.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use log::trace;

use crate::error::ListError;
use crate::index::{check_index, check_range};
use crate::sequence::{fmt_elements, Sequence};

/// Capacity of a list created by [`ArrayList::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// Number of elements at which a block of `capacity` slots has to grow
/// before it accepts another element (a load factor of 0.75).
#[inline]
fn growth_threshold(capacity: usize) -> usize {
    capacity / 4 * 3 + capacity % 4 * 3 / 4
}

/// `floor(capacity * 1.5) + 1`, saturating at `usize::MAX`.
#[inline]
fn grown_capacity(capacity: usize) -> usize {
    capacity.saturating_add(capacity / 2).saturating_add(1)
}

/// A resizable list storing its elements in one contiguous block.
///
/// # Examples
///
/// ```
/// use seqlist_collections::{ArrayList, Sequence};
///
/// let mut list = ArrayList::new();
/// list.add("A");
/// list.add("C");
/// list.insert(1, "B").unwrap();
///
/// assert_eq!(list.size(), 3);
/// assert_eq!(list.get(1), Ok(&"B"));
/// assert_eq!(list.to_string(), "{A, B, C}");
/// ```
pub struct ArrayList<T> {
    elements: Vec<T>,
    capacity: usize,
}

impl<T> ArrayList<T> {
    /// Creates an empty list with room for [`DEFAULT_CAPACITY`] elements.
    pub fn new() -> Self {
        ArrayList {
            elements: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Creates an empty list with room for `capacity` elements.
    ///
    /// A capacity of zero is allowed and allocates nothing until the first
    /// element arrives. A negative capacity is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqlist_collections::{ArrayList, ListError};
    ///
    /// let list = ArrayList::<u32>::with_capacity(0).unwrap();
    /// assert_eq!(list.capacity(), 0);
    ///
    /// let err = ArrayList::<u32>::with_capacity(-5).unwrap_err();
    /// assert_eq!(err, ListError::IllegalCapacity(-5));
    /// assert_eq!(err.to_string(), "Illegal Capacity: -5");
    /// ```
    pub fn with_capacity(capacity: isize) -> Result<Self, ListError> {
        let capacity =
            usize::try_from(capacity).map_err(|_| ListError::IllegalCapacity(capacity))?;
        Ok(ArrayList {
            elements: Vec::with_capacity(capacity),
            capacity,
        })
    }

    /// Returns the number of elements the storage block can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Grows the storage block if the next element would push it past its
    /// load factor.
    fn ensure_capacity(&mut self) {
        if self.elements.len() < growth_threshold(self.capacity) {
            return;
        }

        let capacity = grown_capacity(self.capacity);
        trace!(
            size = self.elements.len(),
            from = self.capacity,
            to = capacity,
            "Growing storage block"
        );
        self.elements
            .reserve_exact(capacity - self.elements.len());
        self.capacity = capacity;
    }
}

impl<T> Sequence<T> for ArrayList<T> {
    fn add(&mut self, element: T) {
        self.ensure_capacity();
        self.elements.push(element);
    }

    fn insert(&mut self, index: usize, element: T) -> Result<(), ListError> {
        check_index(index, self.elements.len())?;
        self.ensure_capacity();
        self.elements.insert(index, element);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        check_index(index, self.elements.len())?;
        Ok(self.elements.remove(index))
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        check_index(index, self.elements.len())?;
        Ok(&self.elements[index])
    }

    fn set(&mut self, index: usize, element: T) -> Result<T, ListError> {
        check_index(index, self.elements.len())?;
        Ok(mem::replace(&mut self.elements[index], element))
    }

    #[inline]
    fn size(&self) -> usize {
        self.elements.len()
    }

    fn sublist(&self, from: usize, to: usize) -> Result<Self, ListError>
    where
        T: Clone,
    {
        check_range(from, to, self.elements.len())?;

        let mut sublist = ArrayList::new();
        for element in &self.elements[from..=to] {
            sublist.add(element.clone());
        }
        Ok(sublist)
    }
}

/// The copy gets a storage block of the same capacity as the original.
impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let mut elements = Vec::with_capacity(self.capacity);
        elements.extend_from_slice(&self.elements);
        ArrayList {
            elements,
            capacity: self.capacity,
        }
    }
}

impl<T> Default for ArrayList<T> {
    /// Creates an empty `ArrayList<T>` with the default capacity.
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Two lists are equal if they hold equal elements in the same order. Spare
/// capacity is not compared.
impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: Hash> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for element in &self.elements {
            element.hash(state);
        }
        self.size().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(&self.elements).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_elements(f, &self.elements)
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

    use super::ArrayList;
    use crate::sequence::Sequence;

    impl<T: Serialize> Serialize for ArrayList<T> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut seq = serializer.serialize_seq(Some(self.size()))?;

            for element in &self.elements {
                seq.serialize_element(element)?;
            }

            seq.end()
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for ArrayList<T> {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_seq(ArrayListVisitor(PhantomData))
        }
    }

    struct ArrayListVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for ArrayListVisitor<T> {
        type Value = ArrayList<T>;

        fn expecting(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
            write!(f, "a sequence of list elements")
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<ArrayList<T>, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut list = ArrayList::new();

            while let Some(element) = seq.next_element()? {
                list.add(element);
            }

            Ok(list)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use seqlist_test_log::test;

    use super::{grown_capacity, growth_threshold, ArrayList, DEFAULT_CAPACITY};
    use crate::error::ListError;
    use crate::sequence::Sequence;

    fn list_from<T: Clone>(v: &[T]) -> ArrayList<T> {
        let mut list = ArrayList::new();
        for element in v {
            list.add(element.clone());
        }
        list
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn it_follows_the_growth_policy() {
        let mut list = ArrayList::new();
        assert_eq!(list.capacity(), DEFAULT_CAPACITY);

        // Seven elements fit, the eighth triggers growth.
        for i in 0..7 {
            list.add(i);
        }
        assert_eq!(list.capacity(), 10);
        list.add(7);
        assert_eq!(list.capacity(), 16);

        for i in 8..13 {
            list.add(i);
        }
        assert_eq!(list.capacity(), 25);

        for i in 13..19 {
            list.add(i);
        }
        assert_eq!(list.capacity(), 38);

        for i in 0..19 {
            assert_eq!(list.get(i), Ok(&i));
        }
    }

    #[test]
    fn it_computes_grown_capacities() {
        assert_eq!(grown_capacity(0), 1);
        assert_eq!(grown_capacity(1), 2);
        assert_eq!(grown_capacity(2), 4);
        assert_eq!(grown_capacity(10), 16);
        assert_eq!(grown_capacity(25), 38);
    }

    #[test]
    fn it_computes_growth_thresholds() {
        assert_eq!(growth_threshold(0), 0);
        assert_eq!(growth_threshold(1), 0);
        assert_eq!(growth_threshold(2), 1);
        assert_eq!(growth_threshold(4), 3);
        assert_eq!(growth_threshold(10), 7);
        assert_eq!(growth_threshold(16), 12);
        assert_eq!(growth_threshold(25), 18);
        assert_eq!(growth_threshold(usize::MAX), usize::MAX / 4 * 3 + 2);
    }

    #[test]
    fn it_does_not_overflow_on_huge_capacities() {
        assert_eq!(grown_capacity(usize::MAX), usize::MAX);
        assert_eq!(grown_capacity(usize::MAX - 1), usize::MAX);

        // Zero-sized elements never allocate, so any capacity is accepted.
        let mut list = ArrayList::<()>::with_capacity(isize::MAX).unwrap();
        list.add(());
        list.insert(0, ()).unwrap();
        assert_eq!(list.size(), 2);
        assert_eq!(list.capacity(), isize::MAX as usize);
    }

    #[test]
    fn it_clones_the_storage_block() {
        let mut list = ArrayList::new();
        list.add(1);
        list.add(2);
        list.add(3);

        let mut copy = list.clone();
        assert_eq!(copy, list);
        assert_eq!(copy.capacity(), list.capacity());
        assert!(copy.elements.capacity() >= copy.capacity());

        // The copy keeps growing by the list policy.
        for i in 4..9 {
            copy.add(i);
        }
        assert_eq!(copy.capacity(), 16);
        assert!(copy.elements.capacity() >= copy.capacity());
        assert_eq!(list.size(), 3);
    }

    #[test]
    fn it_grows_from_zero_capacity() {
        let mut list = ArrayList::with_capacity(0).unwrap();
        assert_eq!(list.capacity(), 0);
        assert!(list.is_empty());

        list.add('a');
        assert_eq!(list.capacity(), 1);
        list.add('b');
        assert_eq!(list.capacity(), 2);
        list.add('c');
        assert_eq!(list.capacity(), 4);

        assert_eq!(list.to_string(), "{a, b, c}");
        assert!(list.capacity() >= list.size());
    }

    #[test]
    fn it_rejects_negative_capacities() {
        let err = ArrayList::<String>::with_capacity(-5).unwrap_err();
        assert_eq!(err, ListError::IllegalCapacity(-5));
        assert_eq!(err.to_string(), "Illegal Capacity: -5");

        assert!(ArrayList::<String>::with_capacity(-1).is_err());
        assert_eq!(ArrayList::<String>::with_capacity(3).unwrap().capacity(), 3);
    }

    #[test]
    fn it_grows_before_positional_inserts() {
        let mut list = ArrayList::with_capacity(4).unwrap();
        list.add(1);
        list.add(2);
        list.add(3);
        assert_eq!(list.capacity(), 4);

        list.insert(0, 0).unwrap();
        assert_eq!(list.capacity(), 7);
        assert_eq!(list, list_from(&[0, 1, 2, 3]));
    }

    #[test]
    fn it_shifts_elements_on_insert_and_remove() {
        let mut list = list_from(&[1, 2, 3, 4, 5]);

        list.insert(0, 0).unwrap();
        assert_eq!(list, list_from(&[0, 1, 2, 3, 4, 5]));
        list.insert(5, 9).unwrap();
        assert_eq!(list, list_from(&[0, 1, 2, 3, 4, 9, 5]));

        assert_eq!(list.remove(6), Ok(5));
        assert_eq!(list.remove(0), Ok(0));
        assert_eq!(list, list_from(&[1, 2, 3, 4, 9]));
    }

    #[test]
    fn it_never_shrinks() {
        let mut list = ArrayList::new();
        for i in 0..20 {
            list.add(i);
        }
        let capacity = list.capacity();
        while !list.is_empty() {
            list.remove(0).unwrap();
        }
        assert_eq!(list.capacity(), capacity);
    }

    #[test]
    fn it_leaves_the_list_untouched_on_errors() {
        let mut list = list_from(&["a", "b"]);
        let capacity = list.capacity();

        let err = ListError::IndexOutOfBounds { index: 2, size: 2 };
        assert_eq!(list.insert(2, "c"), Err(err.clone()));
        assert_eq!(list.remove(2), Err(err.clone()));
        assert_eq!(list.set(2, "c"), Err(err.clone()));
        assert_eq!(list.get(2), Err(err));

        assert_eq!(list, list_from(&["a", "b"]));
        assert_eq!(list.capacity(), capacity);
    }

    #[test]
    fn it_compares_only_the_logical_elements() {
        let mut small = ArrayList::with_capacity(2).unwrap();
        small.add(1);
        small.add(2);
        let mut large = ArrayList::with_capacity(100).unwrap();
        large.add(1);
        large.add(2);

        assert_ne!(small.capacity(), large.capacity());
        assert_eq!(small, large);
        assert_eq!(hash_of(&small), hash_of(&large));

        large.add(3);
        assert_ne!(small, large);
        assert_eq!(large.remove(2), Ok(3));
        assert_eq!(small, large);
    }

    #[test]
    fn it_renders_elements() {
        assert_eq!(ArrayList::<u8>::new().to_string(), "{}");
        assert_eq!(list_from(&[7]).to_string(), "{7}");
        assert_eq!(list_from(&[1, 2, 3]).to_string(), "{1, 2, 3}");
        assert_eq!(format!("{:?}", list_from(&["x", "y"])), r#"["x", "y"]"#);
        // Width and alignment are not applied to the elements.
        assert_eq!(format!("{:>3}", list_from(&[1, 2])), "{1, 2}");
    }

    #[cfg(feature = "serde-derive")]
    #[test]
    fn it_can_be_serialized() {
        let list = list_from(&["A".to_string(), "B".to_string()]);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"["A","B"]"#);

        let decoded: ArrayList<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, list);
        assert_eq!(decoded.capacity(), DEFAULT_CAPACITY);
    }
}
