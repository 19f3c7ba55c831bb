//! Index-addressable list containers.
//!
//! [`ArrayList`] keeps its elements in one contiguous block that grows by a
//! fixed policy, [`LinkedList`] chains individually stored nodes. Both
//! implement the [`Sequence`] contract, so callers can use them
//! interchangeably.
//!
//! Neither container synchronizes access; wrap it in a lock to share it
//! between threads.

pub mod array_list;
pub mod error;
mod index;
pub mod linked_list;
pub mod sequence;
pub mod sparse_vec;

pub use self::array_list::ArrayList;
pub use self::error::ListError;
pub use self::linked_list::LinkedList;
pub use self::sequence::Sequence;
pub use self::sparse_vec::SparseVec;
