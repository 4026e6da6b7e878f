//! Error kinds for the arena (§7).
//!
//! Each construction/allocation/deallocation failure is its own small enum
//! rather than one grab-bag error type, so that a caller matching on
//! `allocate`'s error can't accidentally also have to handle a
//! construction-only variant.

use thiserror::Error;

/// Raised by [`Arena::new`](crate::arena::Arena::new) when the requested
/// capacity or element type can't host a valid arena.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
  /// `N` is too small to hold even one block of the minimum legal payload.
  #[error("capacity {n} is smaller than the minimum of {min} bytes (size_of::<T>() + 8)")]
  CapacityTooSmall {
    /// The capacity that was requested.
    n: usize,
    /// The minimum capacity that would have been accepted.
    min: usize,
  },

  /// `N` is not a multiple of 4.
  #[error("capacity {n} is not a multiple of 4")]
  CapacityMisaligned {
    /// The capacity that was requested.
    n: usize,
  },

  /// `size_of::<T>()` is zero or not a multiple of 4.
  #[error("size_of::<T>() == {size} is not a positive multiple of 4")]
  ElementSizeInvalid {
    /// `size_of::<T>()` at the point of construction.
    size: usize,
  },
}

/// Raised by [`Arena::allocate`](crate::arena::Arena::allocate).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
  /// No free block large enough for the request was found. The arena is
  /// left unchanged.
  #[error("out of memory: no free block of at least {requested} bytes")]
  OutOfMemory {
    /// The payload size in bytes that was requested.
    requested: usize,
  },
}

/// Raised by [`Arena::deallocate`](crate::arena::Arena::deallocate).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DeallocError {
  /// The pointer was null, didn't land on a block boundary of this arena,
  /// or pointed into a block that is already free.
  #[error("invalid pointer passed to deallocate: {reason}")]
  InvalidArgument {
    /// Human-readable detail of what was wrong with the pointer.
    reason: &'static str,
  },
}
