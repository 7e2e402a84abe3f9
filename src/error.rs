//! Errors raised by the containers of this crate.
//!
//! Lookups that simply find nothing are not errors: they return `None`, `false`
//! or the end [`Position`](crate::generic::Position).
//! Only bounds-checked accessors and invalid constructions fail.
use thiserror::Error;

/// Errors returned by bounds-checked container operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
	/// An index is past the end of a sequence.
	#[error("index {index} is out of range for length {len}")]
	IndexOutOfRange { index: usize, len: usize },

	/// The requested key is not in the map.
	#[error("no entry found for key")]
	KeyNotFound,

	/// The position is the end sentinel, or refers to an element that is gone.
	#[error("position does not refer to an element")]
	InvalidPosition,

	/// The container has no element to access.
	#[error("container is empty")]
	Empty,

	/// A fixed-size container was built from more items than it can hold.
	#[error("invalid amount of items: capacity is {capacity}, got {len}")]
	InvalidLength { capacity: usize, len: usize },
}

impl Error {
	/// Checks if this error belongs to the out-of-range family.
	///
	/// Every error except [`Error::InvalidLength`] is an out-of-range error.
	#[inline]
	pub fn is_out_of_range(&self) -> bool {
		!matches!(self, Error::InvalidLength { .. })
	}
}

pub type Result<T> = std::result::Result<T, Error>;
