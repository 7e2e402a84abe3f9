use crate::error::{Error, Result};
use std::{mem, ops::Deref, ops::DerefMut};

/// Array of exactly `N` elements.
///
/// ```
/// use bst_slab::{Error, FixedArray};
///
/// let array = FixedArray::<i32, 4>::try_from_items(vec![1, 2]).unwrap();
/// assert_eq!(array.as_slice(), &[1, 2, 0, 0]);
///
/// assert_eq!(
///     FixedArray::<i32, 2>::try_from_items(vec![1, 2, 3]),
///     Err(Error::InvalidLength { capacity: 2, len: 3 })
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FixedArray<T, const N: usize> {
	items: [T; N],
}

impl<T: Default, const N: usize> FixedArray<T, N> {
	/// Array of default values.
	#[inline]
	pub fn new() -> Self {
		FixedArray {
			items: std::array::from_fn(|_| T::default()),
		}
	}

	/// Fills the array with the given items, in order.
	///
	/// Missing items are replaced by default values.
	/// Fails if there are more than `N` items.
	pub fn try_from_items<I: IntoIterator<Item = T>>(items: I) -> Result<Self> {
		let mut array = FixedArray::new();
		let mut len = 0;
		for item in items {
			if len < N {
				array.items[len] = item;
			}
			len += 1;
		}

		if len > N {
			Err(Error::InvalidLength { capacity: N, len })
		} else {
			Ok(array)
		}
	}
}

impl<T, const N: usize> FixedArray<T, N> {
	#[inline]
	pub fn from_array(items: [T; N]) -> Self {
		FixedArray { items }
	}

	#[inline]
	pub fn len(&self) -> usize {
		N
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		N == 0
	}

	#[inline]
	pub fn max_size(&self) -> usize {
		N
	}

	#[inline]
	pub fn at(&self, index: usize) -> Result<&T> {
		self.items
			.get(index)
			.ok_or(Error::IndexOutOfRange { index, len: N })
	}

	#[inline]
	pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
		self.items
			.get_mut(index)
			.ok_or(Error::IndexOutOfRange { index, len: N })
	}

	#[inline]
	pub fn front(&self) -> Result<&T> {
		self.items.first().ok_or(Error::Empty)
	}

	#[inline]
	pub fn back(&self) -> Result<&T> {
		self.items.last().ok_or(Error::Empty)
	}

	#[inline]
	pub fn as_slice(&self) -> &[T] {
		&self.items
	}

	#[inline]
	pub fn as_mut_slice(&mut self) -> &mut [T] {
		&mut self.items
	}

	#[inline]
	pub fn fill(&mut self, value: T)
	where
		T: Clone,
	{
		self.items.fill(value)
	}

	#[inline]
	pub fn swap(&mut self, other: &mut Self) {
		mem::swap(&mut self.items, &mut other.items)
	}

	#[inline]
	pub fn into_inner(self) -> [T; N] {
		self.items
	}
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {
	#[inline]
	fn default() -> Self {
		FixedArray::new()
	}
}

impl<T, const N: usize> Deref for FixedArray<T, N> {
	type Target = [T];

	#[inline]
	fn deref(&self) -> &[T] {
		&self.items
	}
}

impl<T, const N: usize> DerefMut for FixedArray<T, N> {
	#[inline]
	fn deref_mut(&mut self) -> &mut [T] {
		&mut self.items
	}
}

impl<T, const N: usize> IntoIterator for FixedArray<T, N> {
	type Item = T;
	type IntoIter = std::array::IntoIter<T, N>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		IntoIterator::into_iter(self.items)
	}
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedArray<T, N> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_array_has_no_front() {
		let array: FixedArray<i32, 0> = FixedArray::new();
		assert!(array.is_empty());
		assert_eq!(array.front(), Err(Error::Empty));
		assert!(array.at(0).unwrap_err().is_out_of_range());
	}

	#[test]
	fn too_many_items_is_not_out_of_range() {
		let err = FixedArray::<u8, 1>::try_from_items(vec![1, 2]).unwrap_err();
		assert!(!err.is_out_of_range());
		assert_eq!(err.to_string(), "invalid amount of items: capacity is 1, got 2");
	}
}
