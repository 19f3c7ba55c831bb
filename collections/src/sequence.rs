use std::fmt;

use crate::error::ListError;

/// The index-addressable contract shared by [`ArrayList`] and [`LinkedList`].
///
/// Every index-accepting operation validates `index < size()` before touching
/// the list and returns [`ListError::IndexOutOfBounds`] otherwise, leaving the
/// list unmodified.
///
/// # Examples
///
/// ```
/// use seqlist_collections::{ArrayList, LinkedList, Sequence};
///
/// fn fill<S: Sequence<char>>(list: &mut S) {
///     list.add('a');
///     list.add('c');
///     list.insert(1, 'b').unwrap();
/// }
///
/// let mut array = ArrayList::new();
/// let mut linked = LinkedList::new();
/// fill(&mut array);
/// fill(&mut linked);
///
/// assert_eq!(array.to_string(), "{a, b, c}");
/// assert_eq!(linked.to_string(), "{a, b, c}");
/// ```
///
/// [`ArrayList`]: crate::ArrayList
/// [`LinkedList`]: crate::LinkedList
pub trait Sequence<T> {
    /// Appends `element` to the end of the list.
    fn add(&mut self, element: T);

    /// Inserts `element` at `index`, shifting the element currently at
    /// `index` and everything after it one position towards the end.
    ///
    /// Only existing positions are accepted; use [`add`](Sequence::add) to
    /// append.
    fn insert(&mut self, index: usize, element: T) -> Result<(), ListError>;

    /// Removes and returns the element at `index`, shifting everything after
    /// it one position towards the front.
    fn remove(&mut self, index: usize) -> Result<T, ListError>;

    /// Returns a reference to the element at `index`.
    fn get(&self, index: usize) -> Result<&T, ListError>;

    /// Replaces the element at `index` and returns the previous one.
    fn set(&mut self, index: usize, element: T) -> Result<T, ListError>;

    /// Returns the number of elements in the list.
    fn size(&self) -> usize;

    /// Returns `true` if the list contains no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns a new list holding copies of the elements at `from..=to`.
    ///
    /// Note that `to` is inclusive: `sublist(0, 1)` yields two elements. The
    /// range must satisfy `from < to && to <= size()`; with `to == size()` the
    /// inclusive bound addresses a missing element and
    /// [`ListError::IndexOutOfBounds`] is returned.
    fn sublist(&self, from: usize, to: usize) -> Result<Self, ListError>
    where
        Self: Sized,
        T: Clone;
}

/// Writes `elements` as `{e0, e1, ..., en-1}`, or `{}` when there are none.
///
/// Formatting flags such as width or alignment are not passed on to the
/// elements.
pub(crate) fn fmt_elements<'a, T, I>(f: &mut fmt::Formatter, elements: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    f.write_str("{")?;
    for (i, element) in elements.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{element}")?;
    }
    f.write_str("}")
}
