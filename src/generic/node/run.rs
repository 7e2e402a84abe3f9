use super::{Keyed, Payload};
use crate::Buffer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Non-empty sequence of equal elements, stored in multiset nodes.
///
/// The first occurrence acts as the key of the node.
/// The number of occurrences is the weight of the run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Run<T> {
	occurrences: Buffer<T>,
}

impl<T> Run<T> {
	/// Creates a run with a single occurrence.
	#[inline]
	pub fn new(value: T) -> Run<T> {
		let mut occurrences = Buffer::new();
		occurrences.push_back(value);
		Run { occurrences }
	}

	/// Number of occurrences.
	#[inline]
	pub fn len(&self) -> usize {
		self.occurrences.len()
	}

	#[inline]
	pub fn occurrence(&self, index: usize) -> Option<&T> {
		self.occurrences.get(index)
	}

	#[inline]
	pub fn occurrences(&self) -> &[T] {
		self.occurrences.as_slice()
	}

	/// Adds an occurrence at the end of the run.
	///
	/// The value must be equal to the other occurrences.
	#[inline]
	pub fn push(&mut self, value: T) {
		self.occurrences.push_back(value)
	}

	/// Removes the last occurrence, unless it is the only one.
	#[inline]
	pub fn pop_duplicate(&mut self) -> Option<T> {
		if self.occurrences.len() > 1 {
			self.occurrences.pop_back()
		} else {
			None
		}
	}

	/// Consumes the run and returns its first occurrence.
	#[inline]
	pub fn into_first(self) -> Option<T> {
		self.occurrences.into_iter().next()
	}

	#[inline]
	pub fn into_occurrences(self) -> Buffer<T> {
		self.occurrences
	}
}

impl<T> Keyed for Run<T> {
	type Key = T;

	/// The first occurrence.
	#[inline]
	fn key(&self) -> &T {
		&self.occurrences[0]
	}
}

impl<T> Payload for Run<T> {
	#[inline]
	fn weight(&self) -> usize {
		self.occurrences.len()
	}
}
