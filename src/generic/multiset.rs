use crate::{
	error::{Error, Result},
	generic::{
		node::{Keyed, Node, Run},
		tree::{self, Position, Tree},
	},
	Buffer,
};
use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, Slab, SlabMut};
use std::{
	borrow::Borrow,
	fmt,
	iter::{DoubleEndedIterator, ExactSizeIterator, FromIterator, FusedIterator},
};

/// An ordered multiset based on an unbalanced binary search tree.
///
/// Equal values share a single tree node holding the run of their occurrences,
/// in insertion order. Iteration visits every occurrence.
///
/// ```
/// use bst_slab::Multiset;
///
/// let mut set: Multiset<_> = vec![5, 1, 7, 3, 1].into_iter().collect();
/// assert_eq!(set.len(), 5);
/// assert_eq!(set.count(&1), 2);
///
/// let pos = set.find(&1);
/// assert_eq!(set.erase(pos), Ok(1));
/// assert_eq!(set.count(&1), 1);
/// assert_eq!(set.len(), 4);
///
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 3, 5, 7]);
/// ```
pub struct Multiset<T, C> {
	tree: Tree<Run<T>, C>,
}

impl<T, C> Multiset<T, C> {
	#[inline]
	pub fn new() -> Self
	where
		C: Default,
	{
		Multiset { tree: Tree::new() }
	}

	/// Number of elements, counting every occurrence.
	#[inline]
	pub fn len(&self) -> usize {
		self.tree.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.tree.is_empty()
	}

	#[inline]
	pub fn max_size(&self) -> usize {
		self.tree.max_size()
	}

	#[inline]
	pub fn swap(&mut self, other: &mut Self) {
		self.tree.swap(&mut other.tree)
	}

	/// Underlying search tree.
	#[inline]
	pub fn as_tree(&self) -> &Tree<Run<T>, C> {
		&self.tree
	}

	#[inline]
	pub fn end(&self) -> Position {
		Position::end()
	}
}

impl<T, C: Default> Default for Multiset<T, C> {
	#[inline]
	fn default() -> Self {
		Multiset::new()
	}
}

impl<T, C: Slab<Node<Run<T>>>> Multiset<T, C>
where
	C: SimpleCollectionRef,
{
	/// Number of occurrences of `value`.
	#[inline]
	pub fn count<Q: ?Sized>(&self, value: &Q) -> usize
	where
		T: Borrow<Q>,
		Q: Ord,
	{
		self.tree
			.find(value)
			.and_then(|id| self.tree.item(id))
			.map(Run::len)
			.unwrap_or(0)
	}

	#[inline]
	pub fn contains<Q: ?Sized>(&self, value: &Q) -> bool
	where
		T: Borrow<Q>,
		Q: Ord,
	{
		self.tree.find(value).is_some()
	}

	/// Position of the first occurrence of `value`,
	/// or the end position if there is none.
	#[inline]
	pub fn find<Q: ?Sized>(&self, value: &Q) -> Position
	where
		T: Borrow<Q>,
		Q: Ord,
	{
		match self.tree.find(value) {
			Some(id) => self.tree.position_of(id),
			None => Position::end(),
		}
	}

	/// Position of the first element not less than `value`.
	///
	/// ```
	/// use bst_slab::Multiset;
	///
	/// let set: Multiset<_> = vec![1, 2, 2, 4].into_iter().collect();
	/// assert_eq!(set.get_at(set.lower_bound(&2)), Ok(&2));
	/// assert_eq!(set.get_at(set.lower_bound(&3)), Ok(&4));
	/// assert!(set.lower_bound(&5).is_end());
	/// ```
	#[inline]
	pub fn lower_bound<Q: ?Sized>(&self, value: &Q) -> Position
	where
		T: Borrow<Q>,
		Q: Ord,
	{
		self.tree.lower_bound(value)
	}

	/// Position of the first element greater than `value`.
	#[inline]
	pub fn upper_bound<Q: ?Sized>(&self, value: &Q) -> Position
	where
		T: Borrow<Q>,
		Q: Ord,
	{
		self.tree.upper_bound(value)
	}

	/// Range of the occurrences of `value`, as the pair of
	/// [`lower_bound`](Multiset::lower_bound) and [`upper_bound`](Multiset::upper_bound).
	#[inline]
	pub fn equal_range<Q: ?Sized>(&self, value: &Q) -> (Position, Position)
	where
		T: Borrow<Q>,
		Q: Ord,
	{
		(self.lower_bound(value), self.upper_bound(value))
	}

	#[inline]
	pub fn begin(&self) -> Position {
		self.tree.first_position()
	}

	#[inline]
	pub fn next_position(&self, pos: Position) -> Position {
		self.tree.next_position(pos)
	}

	#[inline]
	pub fn previous_position(&self, pos: Position) -> Position {
		self.tree.previous_position(pos)
	}

	/// Occurrence at the given position.
	#[inline]
	pub fn get_at(&self, pos: Position) -> Result<&T> {
		self.tree
			.item_at(pos)
			.and_then(|(run, index)| run.occurrence(index))
			.ok_or(Error::InvalidPosition)
	}

	/// Smallest element.
	#[inline]
	pub fn first(&self) -> Option<&T> {
		let id = self.tree.first_id()?;
		self.tree.item(id).map(Keyed::key)
	}

	/// Greatest element, in its most recent occurrence.
	#[inline]
	pub fn last(&self) -> Option<&T> {
		let id = self.tree.last_id()?;
		self.tree.item(id).and_then(|run| run.occurrences().last())
	}

	/// Iterates over every occurrence, in order.
	/// Equal elements are visited in insertion order.
	#[inline]
	pub fn iter(&self) -> Iter<T, C> {
		Iter {
			inner: self.tree.iter(),
		}
	}

	/// Checks the invariants of the underlying tree, and that every
	/// occurrence of a run is equal to its key.
	pub fn validate(&self)
	where
		T: Ord,
	{
		self.tree.validate();
		for (run, index) in self.tree.iter() {
			assert!(
				run.occurrences()[index] == *run.key(),
				"run holds different values"
			);
		}
	}

	/// Write the multiset in the DOT graph description language.
	///
	/// Requires the `dot` feature.
	#[cfg(feature = "dot")]
	#[inline]
	pub fn dot_write<W: std::io::Write>(&self, f: &mut W) -> std::io::Result<()>
	where
		T: std::fmt::Display,
	{
		self.tree.dot_write(f)
	}
}

impl<T, C: SlabMut<Node<Run<T>>>> Multiset<T, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	pub fn clear(&mut self)
	where
		C: cc_traits::Clear,
	{
		self.tree.clear()
	}

	/// Inserts an occurrence of `value`.
	///
	/// Returns the position of the new occurrence.
	pub fn insert(&mut self, value: T) -> Position
	where
		T: Ord,
	{
		let id = match self.tree.locate(&value) {
			Ok(id) => {
				self.tree.update(id, |run| run.push(value));
				id
			}
			Err(parent) => self.tree.attach(parent, Run::new(value)),
		};

		// The new occurrence is the last of its run.
		Position::single(id)
	}

	/// Inserts every given value, in order.
	pub fn insert_many<I>(&mut self, values: I) -> Vec<Position>
	where
		T: Ord,
		I: IntoIterator<Item = T>,
	{
		values.into_iter().map(|value| self.insert(value)).collect()
	}

	/// Removes one occurrence from the node `id`, or the node itself if it
	/// holds a single occurrence.
	fn remove_occurrence(&mut self, id: usize) -> Option<T> {
		match self.tree.update(id, Run::pop_duplicate)? {
			Some(value) => Some(value),
			None => self.tree.remove_node(id).and_then(Run::into_first),
		}
	}

	/// Removes one occurrence of the value at the given position.
	///
	/// The node is only removed with its last occurrence.
	/// Fails without modifying the multiset on the end position and on stale positions.
	pub fn erase(&mut self, pos: Position) -> Result<T> {
		match pos.id() {
			Some(id) if self.tree.is_valid(pos) => {
				self.remove_occurrence(id).ok_or(Error::InvalidPosition)
			}
			_ => Err(Error::InvalidPosition),
		}
	}

	/// Removes one occurrence of `value`. Returns whether there was one.
	#[inline]
	pub fn remove<Q: ?Sized>(&mut self, value: &Q) -> bool
	where
		T: Borrow<Q>,
		Q: Ord,
	{
		match self.tree.find(value) {
			Some(id) => self.remove_occurrence(id).is_some(),
			None => false,
		}
	}

	/// Moves every element of `other` into this multiset.
	///
	/// `other` is left empty.
	///
	/// ```
	/// use bst_slab::Multiset;
	///
	/// let mut a: Multiset<_> = vec![1, 2].into_iter().collect();
	/// let mut b: Multiset<_> = vec![2, 3].into_iter().collect();
	/// a.merge(&mut b);
	/// assert_eq!(a.iter().copied().collect::<Vec<_>>(), [1, 2, 2, 3]);
	/// assert!(b.is_empty());
	/// ```
	pub fn merge<D: SlabMut<Node<Run<T>>>>(&mut self, other: &mut Multiset<T, D>)
	where
		T: Ord,
		D: SimpleCollectionRef,
		D: SimpleCollectionMut,
	{
		tracing::debug!(len = other.len(), "merging multiset");
		while let Some(run) = other.tree.pop_first() {
			for value in run.into_occurrences() {
				self.insert(value);
			}
		}
	}
}

impl<T: Clone + Ord, C: SlabMut<Node<Run<T>>>> Clone for Multiset<T, C>
where
	C: Default + SimpleCollectionRef + SimpleCollectionMut,
{
	#[inline]
	fn clone(&self) -> Self {
		Multiset {
			tree: self.tree.clone(),
		}
	}
}

impl<T: fmt::Debug, C: Slab<Node<Run<T>>>> fmt::Debug for Multiset<T, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_list().entries(self.iter()).finish()
	}
}

impl<T, U: PartialEq<T>, C: Slab<Node<Run<T>>>, D: Slab<Node<Run<U>>>> PartialEq<Multiset<U, D>>
	for Multiset<T, C>
where
	C: SimpleCollectionRef,
	D: SimpleCollectionRef,
{
	fn eq(&self, other: &Multiset<U, D>) -> bool {
		self.len() == other.len() && self.iter().zip(other.iter()).all(|(t, u)| u == t)
	}
}

impl<T: Eq, C: Slab<Node<Run<T>>>> Eq for Multiset<T, C> where C: SimpleCollectionRef {}

impl<T: Ord, C: SlabMut<Node<Run<T>>> + Default> FromIterator<T> for Multiset<T, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut set = Multiset::new();
		set.extend(iter);
		set
	}
}

impl<T: Ord, C: SlabMut<Node<Run<T>>>> Extend<T> for Multiset<T, C>
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
	inner: tree::Iter<'a, Run<T>, C>,
}

impl<'a, T, C: Slab<Node<Run<T>>>> Iterator for Iter<'a, T, C>
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
		self.inner.next().map(|(run, index)| &run.occurrences()[index])
	}
}

impl<'a, T, C: Slab<Node<Run<T>>>> DoubleEndedIterator for Iter<'a, T, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn next_back(&mut self) -> Option<&'a T> {
		self.inner.next_back().map(|(run, index)| &run.occurrences()[index])
	}
}

impl<'a, T, C: Slab<Node<Run<T>>>> FusedIterator for Iter<'a, T, C> where C: SimpleCollectionRef {}
impl<'a, T, C: Slab<Node<Run<T>>>> ExactSizeIterator for Iter<'a, T, C> where C: SimpleCollectionRef {}

impl<'a, T, C: Slab<Node<Run<T>>>> IntoIterator for &'a Multiset<T, C>
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

/// An owning iterator over the elements of a [`Multiset`].
///
/// Runs are removed from the tree one at a time.
pub struct IntoIter<T, C> {
	tree: Tree<Run<T>, C>,

	/// Occurrences of the current run.
	run: Option<<Buffer<T> as IntoIterator>::IntoIter>,

	len: usize,
}

impl<T, C: SlabMut<Node<Run<T>>>> Iterator for IntoIter<T, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	type Item = T;

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.len, Some(self.len))
	}

	fn next(&mut self) -> Option<T> {
		loop {
			if let Some(value) = self.run.as_mut().and_then(|run| run.next()) {
				self.len -= 1;
				return Some(value);
			}

			self.run = Some(self.tree.pop_first()?.into_occurrences().into_iter());
		}
	}
}

impl<T, C: SlabMut<Node<Run<T>>>> FusedIterator for IntoIter<T, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
}

impl<T, C: SlabMut<Node<Run<T>>>> ExactSizeIterator for IntoIter<T, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
}

impl<T, C: SlabMut<Node<Run<T>>>> IntoIterator for Multiset<T, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	type Item = T;
	type IntoIter = IntoIter<T, C>;

	#[inline]
	fn into_iter(self) -> IntoIter<T, C> {
		IntoIter {
			len: self.tree.len(),
			tree: self.tree,
			run: None,
		}
	}
}
