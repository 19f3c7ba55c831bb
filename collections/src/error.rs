use thiserror::Error;

/// Errors returned by the list containers.
///
/// Every error is raised before the container is touched, so a failed call
/// leaves the list exactly as it was.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ListError {
    /// A negative initial capacity was requested.
    #[error("Illegal Capacity: {0}")]
    IllegalCapacity(isize),
    /// An index did not satisfy `index < size`.
    #[error("Index {index} out of bounds for length {size}")]
    IndexOutOfBounds { index: usize, size: usize },
    /// A sublist range did not satisfy `from < to && to <= size`.
    #[error("Range [{from}, {to}] out of bounds for length {size}")]
    RangeOutOfBounds { from: usize, to: usize, size: usize },
}
