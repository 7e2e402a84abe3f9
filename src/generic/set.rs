use crate::{
	error::Result,
	generic::{
		map::{self, Map},
		node::{Item, Node},
		tree::{Position, Tree},
	},
};
use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, Slab, SlabMut};
use std::{
	borrow::Borrow,
	cmp::Ordering,
	fmt,
	hash::{Hash, Hasher},
	iter::{DoubleEndedIterator, ExactSizeIterator, FromIterator, FusedIterator},
};

/// An ordered set based on an unbalanced binary search tree.
///
/// See [`Map`]'s documentation for a description of positions and of the
/// underlying slab.
///
/// It is a logic error for an item to be modified in such a way that the item's ordering relative
/// to any other item, as determined by the [`Ord`] trait, changes while it is in the set. This is
/// normally only possible through [`Cell`], [`RefCell`], global state, I/O, or unsafe code.
///
/// [`Ord`]: core::cmp::Ord
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
pub struct Set<T, C> {
	map: Map<T, (), C>,
}

impl<T, C> Set<T, C> {
	/// Makes a new, empty `Set`.
	///
	/// # Example
	///
	/// ```
	/// # #![allow(unused_mut)]
	/// use bst_slab::Set;
	///
	/// let mut set: Set<i32> = Set::new();
	/// ```
	#[inline]
	pub fn new() -> Self
	where
		C: Default,
	{
		Self::default()
	}

	/// Returns the number of elements in the set.
	///
	/// # Example
	///
	/// ```
	/// use bst_slab::Set;
	///
	/// let mut v = Set::new();
	/// assert_eq!(v.len(), 0);
	/// v.insert(1);
	/// assert_eq!(v.len(), 1);
	/// ```
	#[inline]
	pub fn len(&self) -> usize {
		self.map.len()
	}

	/// Returns `true` if the set contains no elements.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.map.is_empty()
	}

	#[inline]
	pub fn max_size(&self) -> usize {
		self.map.max_size()
	}

	#[inline]
	pub fn swap(&mut self, other: &mut Self) {
		self.map.swap(&mut other.map)
	}

	/// Underlying search tree.
	#[inline]
	pub fn as_tree(&self) -> &Tree<Item<T, ()>, C> {
		self.map.as_tree()
	}

	#[inline]
	pub fn end(&self) -> Position {
		Position::end()
	}
}

impl<T, C: Default> Default for Set<T, C> {
	fn default() -> Self {
		Set {
			map: Map::default(),
		}
	}
}

impl<T, C: Slab<Node<Item<T, ()>>>> Set<T, C>
where
	C: SimpleCollectionRef,
{
	/// Gets an iterator that visits the values in the `Set` in ascending order.
	///
	/// # Examples
	///
	/// ```
	/// use bst_slab::Set;
	///
	/// let set: Set<usize> = [3, 1, 2].iter().cloned().collect();
	/// let mut set_iter = set.iter();
	/// assert_eq!(set_iter.next(), Some(&1));
	/// assert_eq!(set_iter.next(), Some(&2));
	/// assert_eq!(set_iter.next(), Some(&3));
	/// assert_eq!(set_iter.next(), None);
	/// ```
	#[inline]
	pub fn iter(&self) -> Iter<T, C> {
		Iter {
			inner: self.map.keys(),
		}
	}

	/// Returns `true` if the set contains a value.
	///
	/// The value may be any borrowed form of the set's value type,
	/// but the ordering on the borrowed form *must* match the
	/// ordering on the value type.
	///
	/// # Example
	///
	/// ```
	/// use bst_slab::Set;
	///
	/// let set: Set<_> = [1, 2, 3].iter().cloned().collect();
	/// assert_eq!(set.contains(&1), true);
	/// assert_eq!(set.contains(&4), false);
	/// ```
	#[inline]
	pub fn contains<Q: ?Sized>(&self, value: &Q) -> bool
	where
		T: Borrow<Q>,
		Q: Ord,
	{
		self.map.contains_key(value)
	}

	/// Returns a reference to the value in the set, if any, that is equal to the given value.
	#[inline]
	pub fn get<Q: ?Sized>(&self, value: &Q) -> Option<&T>
	where
		T: Borrow<Q>,
		Q: Ord,
	{
		self.map.get_key_value(value).map(|(k, _)| k)
	}

	/// Position of the given value, or the end position if it is not in the set.
	#[inline]
	pub fn find<Q: ?Sized>(&self, value: &Q) -> Position
	where
		T: Borrow<Q>,
		Q: Ord,
	{
		self.map.find(value)
	}

	#[inline]
	pub fn begin(&self) -> Position {
		self.map.begin()
	}

	#[inline]
	pub fn next_position(&self, pos: Position) -> Position {
		self.map.next_position(pos)
	}

	#[inline]
	pub fn previous_position(&self, pos: Position) -> Position {
		self.map.previous_position(pos)
	}

	/// Value at the given position.
	#[inline]
	pub fn get_at(&self, pos: Position) -> Result<&T> {
		self.map.get_at(pos).map(|(k, _)| k)
	}

	/// Returns a reference to the first value in the set, if any.
	/// This value is always the minimum of all values in the set.
	///
	/// # Example
	///
	/// ```
	/// use bst_slab::Set;
	///
	/// let mut map = Set::new();
	/// assert_eq!(map.first(), None);
	/// map.insert(1);
	/// assert_eq!(map.first(), Some(&1));
	/// map.insert(2);
	/// assert_eq!(map.first(), Some(&1));
	/// ```
	#[inline]
	pub fn first(&self) -> Option<&T> {
		self.map.first_key_value().map(|(k, _)| k)
	}

	/// Returns a reference to the last value in the set, if any.
	/// This value is always the maximum of all values in the set.
	#[inline]
	pub fn last(&self) -> Option<&T> {
		self.map.last_key_value().map(|(k, _)| k)
	}

	/// Checks the invariants of the underlying tree.
	#[inline]
	pub fn validate(&self)
	where
		T: Ord,
	{
		self.map.validate()
	}

	/// Write the set in the DOT graph description language.
	///
	/// Requires the `dot` feature.
	#[cfg(feature = "dot")]
	#[inline]
	pub fn dot_write<W: std::io::Write>(&self, f: &mut W) -> std::io::Result<()>
	where
		T: std::fmt::Display,
	{
		self.map.dot_write(f)
	}
}

impl<T, C: SlabMut<Node<Item<T, ()>>>> Set<T, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	/// Clears the set, removing all values.
	#[inline]
	pub fn clear(&mut self)
	where
		C: cc_traits::Clear,
	{
		self.map.clear()
	}

	/// Adds a value to the set, unless it is already present.
	///
	/// Returns the position of the value in the set, and whether it was inserted.
	///
	/// # Example
	///
	/// ```
	/// use bst_slab::Set;
	///
	/// let mut set = Set::new();
	///
	/// assert_eq!(set.insert(2).1, true);
	/// assert_eq!(set.insert(2).1, false);
	/// assert_eq!(set.len(), 1);
	/// ```
	#[inline]
	pub fn insert(&mut self, value: T) -> (Position, bool)
	where
		T: Ord,
	{
		self.map.insert(value, ())
	}

	/// Inserts every given value, in order.
	#[inline]
	pub fn insert_many<I>(&mut self, values: I) -> Vec<(Position, bool)>
	where
		T: Ord,
		I: IntoIterator<Item = T>,
	{
		self.map.insert_many(values.into_iter().map(|value| (value, ())))
	}

	/// Removes a value from the set. Returns whether the value was
	/// present in the set.
	///
	/// # Example
	///
	/// ```
	/// use bst_slab::Set;
	///
	/// let mut set = Set::new();
	///
	/// set.insert(2);
	/// assert_eq!(set.remove(&2), true);
	/// assert_eq!(set.remove(&2), false);
	/// ```
	#[inline]
	pub fn remove<Q: ?Sized>(&mut self, value: &Q) -> bool
	where
		T: Borrow<Q>,
		Q: Ord,
	{
		self.take(value).is_some()
	}

	/// Removes and returns the value in the set, if any, that is equal to the given one.
	#[inline]
	pub fn take<Q: ?Sized>(&mut self, value: &Q) -> Option<T>
	where
		T: Borrow<Q>,
		Q: Ord,
	{
		self.map.remove_entry(value).map(|(t, _)| t)
	}

	/// Removes the value at the given position.
	///
	/// Fails without modifying the set on the end position and on stale positions.
	#[inline]
	pub fn erase(&mut self, pos: Position) -> Result<T> {
		self.map.erase(pos).map(|(t, _)| t)
	}

	/// Removes the first value from the set and returns it, if any.
	#[inline]
	pub fn pop_first(&mut self) -> Option<T> {
		self.map.pop_first().map(|kv| kv.0)
	}

	/// Removes the last value from the set and returns it, if any.
	#[inline]
	pub fn pop_last(&mut self) -> Option<T> {
		self.map.pop_last().map(|kv| kv.0)
	}

	/// Inserts a copy of every value of `other` not already in the set.
	///
	/// `other` is left unchanged.
	#[inline]
	pub fn merge<D: Slab<Node<Item<T, ()>>>>(&mut self, other: &Set<T, D>)
	where
		T: Ord + Clone,
		D: SimpleCollectionRef,
	{
		self.map.merge(&other.map)
	}
}

impl<T: Clone + Ord, C: SlabMut<Node<Item<T, ()>>>> Clone for Set<T, C>
where
	C: Default + SimpleCollectionRef + SimpleCollectionMut,
{
	#[inline]
	fn clone(&self) -> Self {
		Set {
			map: self.map.clone(),
		}
	}
}

impl<T: fmt::Debug, C: Slab<Node<Item<T, ()>>>> fmt::Debug for Set<T, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_set().entries(self.iter()).finish()
	}
}

impl<T, L: PartialEq<T>, C: Slab<Node<Item<T, ()>>>, D: Slab<Node<Item<L, ()>>>> PartialEq<Set<L, D>>
	for Set<T, C>
where
	C: SimpleCollectionRef,
	D: SimpleCollectionRef,
{
	#[inline]
	fn eq(&self, other: &Set<L, D>) -> bool {
		self.map.eq(&other.map)
	}
}

impl<T: Eq, C: Slab<Node<Item<T, ()>>>> Eq for Set<T, C> where C: SimpleCollectionRef {}

impl<T: PartialOrd, C: Slab<Node<Item<T, ()>>>> PartialOrd for Set<T, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		self.iter().partial_cmp(other.iter())
	}
}

impl<T: Ord, C: Slab<Node<Item<T, ()>>>> Ord for Set<T, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn cmp(&self, other: &Self) -> Ordering {
		self.iter().cmp(other.iter())
	}
}

impl<T: Hash, C: Slab<Node<Item<T, ()>>>> Hash for Set<T, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn hash<H: Hasher>(&self, h: &mut H) {
		for t in self {
			t.hash(h);
		}
	}
}

impl<T: Ord, C: SlabMut<Node<Item<T, ()>>> + Default> FromIterator<T> for Set<T, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut set = Set::new();
		set.extend(iter);
		set
	}
}

impl<T: Ord, C: SlabMut<Node<Item<T, ()>>>> Extend<T> for Set<T, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		for t in iter {
			self.insert(t);
		}
	}
}

pub struct Iter<'a, T, C> {
	inner: map::Keys<'a, T, (), C>,
}

impl<'a, T, C: Slab<Node<Item<T, ()>>>> Iterator for Iter<'a, T, C>
where
	C: SimpleCollectionRef,
{
	type Item = &'a T;

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}

	#[inline]
	fn next(&mut self) -> Option<&'a T> {
		self.inner.next()
	}
}

impl<'a, T, C: Slab<Node<Item<T, ()>>>> DoubleEndedIterator for Iter<'a, T, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn next_back(&mut self) -> Option<&'a T> {
		self.inner.next_back()
	}
}

impl<'a, T, C: Slab<Node<Item<T, ()>>>> FusedIterator for Iter<'a, T, C> where C: SimpleCollectionRef {}
impl<'a, T, C: Slab<Node<Item<T, ()>>>> ExactSizeIterator for Iter<'a, T, C> where C: SimpleCollectionRef {}

impl<'a, T, C: Slab<Node<Item<T, ()>>>> IntoIterator for &'a Set<T, C>
where
	C: SimpleCollectionRef,
{
	type Item = &'a T;
	type IntoIter = Iter<'a, T, C>;

	#[inline]
	fn into_iter(self) -> Iter<'a, T, C> {
		self.iter()
	}
}

pub struct IntoIter<T, C> {
	inner: map::IntoIter<T, (), C>,
}

impl<T, C: SlabMut<Node<Item<T, ()>>>> Iterator for IntoIter<T, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	type Item = T;

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}

	#[inline]
	fn next(&mut self) -> Option<T> {
		self.inner.next().map(|(t, _)| t)
	}
}

impl<T, C: SlabMut<Node<Item<T, ()>>>> DoubleEndedIterator for IntoIter<T, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn next_back(&mut self) -> Option<T> {
		self.inner.next_back().map(|(t, _)| t)
	}
}

impl<T, C: SlabMut<Node<Item<T, ()>>>> FusedIterator for IntoIter<T, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
}

impl<T, C: SlabMut<Node<Item<T, ()>>>> ExactSizeIterator for IntoIter<T, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
}

impl<T, C: SlabMut<Node<Item<T, ()>>>> IntoIterator for Set<T, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	type Item = T;
	type IntoIter = IntoIter<T, C>;

	#[inline]
	fn into_iter(self) -> IntoIter<T, C> {
		IntoIter {
			inner: self.map.into_iter(),
		}
	}
}
