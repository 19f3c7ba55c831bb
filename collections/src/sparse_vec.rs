/// A vector of slots with an O(1) remove function.
///
/// Values are addressed by the slot index returned from [`insert`]. Removing a
/// value frees its slot without moving any other value, so the indices of the
/// remaining values stay valid. Freed slots are reused by later insertions and
/// the vector never shrinks in size.
///
/// [`insert`]: SparseVec::insert
#[derive(Clone, Debug)]
pub struct SparseVec<T> {
    slots: Vec<Option<T>>,
    free_indices: Vec<usize>,
}

impl<T> SparseVec<T> {
    pub fn new() -> Self {
        SparseVec {
            slots: Vec::new(),
            free_indices: Vec::new(),
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)?.as_ref()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)?.as_mut()
    }

    /// Takes the value out of slot `index`, freeing the slot.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let value = self.slots.get_mut(index)?.take();
        if value.is_some() {
            self.free_indices.push(index);
        }
        value
    }

    /// Stores `value` in a free slot, or in a new one at the end, and returns
    /// the slot index.
    pub fn insert(&mut self, value: T) -> usize {
        if let Some(index) = self.free_indices.pop() {
            self.slots[index] = Some(value);
            index
        } else {
            self.slots.push(Some(value));
            self.slots.len() - 1
        }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for SparseVec<T> {
    fn default() -> Self {
        Self::new()
    }
}
