use log::debug;

use crate::error::ListError;

/// Checks that `index` addresses an existing element of a list of length `size`.
#[inline]
pub(crate) fn check_index(index: usize, size: usize) -> Result<usize, ListError> {
    if index < size {
        Ok(index)
    } else {
        debug!(index, size, "Index out of bounds");
        Err(ListError::IndexOutOfBounds { index, size })
    }
}

/// Checks an inclusive sublist range `[from, to]` against a list of length `size`.
///
/// The range must satisfy `from < to && to <= size`. Since `to` is inclusive,
/// `to == size` passes that check but still points one past the last element,
/// which is reported as an out-of-bounds index.
pub(crate) fn check_range(from: usize, to: usize, size: usize) -> Result<(), ListError> {
    if from >= to || to > size {
        debug!(from, to, size, "Sublist range out of bounds");
        return Err(ListError::RangeOutOfBounds { from, to, size });
    }
    check_index(to, size)?;
    Ok(())
}
