use crate::error::{Error, Result};
use smallvec::SmallVec;
use std::{
	fmt,
	hash::{Hash, Hasher},
	iter::FromIterator,
	mem,
	ops::{Deref, DerefMut},
};

/// Contiguous growable array.
///
/// The capacity doubles each time the buffer is full, which makes
/// [`push_back`](Buffer::push_back) amortized O(1).
/// A buffer holding a single element keeps it inline without allocating,
/// which is what the multiset relies on for its duplicate runs.
///
/// # Example
///
/// ```
/// use bst_slab::Buffer;
///
/// let mut buffer = Buffer::new();
/// buffer.push_back(1);
/// buffer.push_back(2);
/// buffer.push_back(3);
/// assert_eq!(buffer.capacity(), 4);
/// assert_eq!(buffer.at(1), Ok(&2));
/// assert!(buffer.at(3).is_err());
/// ```
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(transparent)
)]
pub struct Buffer<T> {
	items: SmallVec<[T; 1]>,
}

impl<T> Buffer<T> {
	#[inline]
	pub fn new() -> Self {
		Buffer {
			items: SmallVec::new(),
		}
	}

	/// Creates a buffer of `len` default values.
	pub fn with_len(len: usize) -> Self
	where
		T: Default,
	{
		let mut items = SmallVec::with_capacity(len);
		items.extend((0..len).map(|_| T::default()));
		Buffer { items }
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	#[inline]
	pub fn capacity(&self) -> usize {
		self.items.capacity()
	}

	/// Theoretical maximum number of elements.
	#[inline]
	pub fn max_size(&self) -> usize {
		usize::MAX / mem::size_of::<T>().max(1)
	}

	/// Makes sure the buffer can hold at least `capacity` elements without reallocating.
	///
	/// Does nothing if the current capacity is already large enough.
	#[inline]
	pub fn reserve(&mut self, capacity: usize) {
		if capacity > self.items.capacity() {
			self.items.reserve_exact(capacity - self.items.len())
		}
	}

	#[inline]
	pub fn shrink_to_fit(&mut self) {
		self.items.shrink_to_fit()
	}

	/// Bounds-checked access.
	#[inline]
	pub fn at(&self, index: usize) -> Result<&T> {
		let len = self.len();
		self.items.get(index).ok_or(Error::IndexOutOfRange { index, len })
	}

	/// Bounds-checked mutable access.
	#[inline]
	pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
		let len = self.len();
		self.items
			.get_mut(index)
			.ok_or(Error::IndexOutOfRange { index, len })
	}

	#[inline]
	pub fn front(&self) -> Option<&T> {
		self.items.first()
	}

	#[inline]
	pub fn back(&self) -> Option<&T> {
		self.items.last()
	}

	#[inline]
	pub fn as_slice(&self) -> &[T] {
		self.items.as_slice()
	}

	#[inline]
	pub fn as_mut_slice(&mut self) -> &mut [T] {
		self.items.as_mut_slice()
	}

	/// Appends an element, doubling the capacity when the buffer is full.
	#[inline]
	pub fn push_back(&mut self, value: T) {
		self.grow_for(1);
		self.items.push(value)
	}

	#[inline]
	pub fn pop_back(&mut self) -> Option<T> {
		self.items.pop()
	}

	/// Inserts `value` before the element at `index`.
	///
	/// `index` may be equal to the length, in which case the value is appended.
	/// Fails without modifying the buffer if `index` is past the end.
	pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
		let len = self.len();
		if index > len {
			return Err(Error::IndexOutOfRange { index, len });
		}

		self.grow_for(1);
		self.items.insert(index, value);
		Ok(())
	}

	/// Removes and returns the element at `index`.
	pub fn remove(&mut self, index: usize) -> Result<T> {
		let len = self.len();
		if index >= len {
			return Err(Error::IndexOutOfRange { index, len });
		}

		Ok(self.items.remove(index))
	}

	/// Inserts all the given values before the element at `index`, preserving their order.
	pub fn insert_many<I>(&mut self, index: usize, values: I) -> Result<()>
	where
		I: IntoIterator<Item = T>,
	{
		let len = self.len();
		if index > len {
			return Err(Error::IndexOutOfRange { index, len });
		}

		let mut offset = index;
		for value in values {
			self.grow_for(1);
			self.items.insert(offset, value);
			offset += 1;
		}

		Ok(())
	}

	pub fn insert_many_back<I>(&mut self, values: I)
	where
		I: IntoIterator<Item = T>,
	{
		for value in values {
			self.push_back(value)
		}
	}

	#[inline]
	pub fn clear(&mut self) {
		self.items.clear()
	}

	#[inline]
	pub fn swap(&mut self, other: &mut Self) {
		mem::swap(self, other)
	}

	/// Doubles the capacity until `additional` more elements fit.
	#[inline]
	fn grow_for(&mut self, additional: usize) {
		let len = self.items.len();
		let mut capacity = self.items.capacity();
		if len + additional > capacity {
			while len + additional > capacity {
				capacity = (capacity * 2).max(1);
			}

			self.items.reserve_exact(capacity - len)
		}
	}
}

impl<T> Default for Buffer<T> {
	#[inline]
	fn default() -> Self {
		Buffer::new()
	}
}

impl<T: Clone> Clone for Buffer<T> {
	fn clone(&self) -> Self {
		let mut items = SmallVec::with_capacity(self.capacity());
		items.extend(self.items.iter().cloned());
		Buffer { items }
	}
}

impl<T> Deref for Buffer<T> {
	type Target = [T];

	#[inline]
	fn deref(&self) -> &[T] {
		self.items.as_slice()
	}
}

impl<T> DerefMut for Buffer<T> {
	#[inline]
	fn deref_mut(&mut self) -> &mut [T] {
		self.items.as_mut_slice()
	}
}

impl<T: fmt::Debug> fmt::Debug for Buffer<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_list().entries(self.items.iter()).finish()
	}
}

impl<T: PartialEq> PartialEq for Buffer<T> {
	#[inline]
	fn eq(&self, other: &Self) -> bool {
		self.as_slice() == other.as_slice()
	}
}

impl<T: Eq> Eq for Buffer<T> {}

impl<T: Hash> Hash for Buffer<T> {
	#[inline]
	fn hash<H: Hasher>(&self, h: &mut H) {
		self.as_slice().hash(h)
	}
}

impl<T> FromIterator<T> for Buffer<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut buffer = Buffer::new();
		buffer.insert_many_back(iter);
		buffer
	}
}

impl<T> Extend<T> for Buffer<T> {
	#[inline]
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		self.insert_many_back(iter)
	}
}

impl<T> IntoIterator for Buffer<T> {
	type Item = T;
	type IntoIter = smallvec::IntoIter<[T; 1]>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}

impl<'a, T> IntoIterator for &'a Buffer<T> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

impl<'a, T> IntoIterator for &'a mut Buffer<T> {
	type Item = &'a mut T;
	type IntoIter = std::slice::IterMut<'a, T>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.items.iter_mut()
	}
}
