use crate::{
	error::{Error, Result},
	Position,
};
use slab::Slab;
use std::{
	fmt,
	iter::{DoubleEndedIterator, ExactSizeIterator, FromIterator, FusedIterator},
	mem,
};

const NONE: usize = usize::MAX;

#[inline]
fn from_id(id: usize) -> Option<usize> {
	if id == NONE {
		None
	} else {
		Some(id)
	}
}

/// List cell.
struct Link<T> {
	prev: usize,
	next: usize,
	value: T,
}

/// Doubly linked list.
///
/// Cells are allocated in a slab and linked together by slab id.
/// Positions in the list are given by [`Position`] values holding the id of
/// a cell, the end position following the last element.
///
/// # Example
///
/// ```
/// use bst_slab::List;
///
/// let mut list: List<i32> = vec![3, 1, 2].into_iter().collect();
/// list.push_front(4);
/// list.sort();
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
///
/// let pos = list.next_position(list.begin());
/// list.insert(pos, 0).unwrap();
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 0, 2, 3, 4]);
/// ```
pub struct List<T> {
	links: Slab<Link<T>>,
	head: usize,
	tail: usize,
}

impl<T> List<T> {
	#[inline]
	pub fn new() -> List<T> {
		List {
			links: Slab::new(),
			head: NONE,
			tail: NONE,
		}
	}

	/// Creates a list of `len` default values.
	pub fn with_len(len: usize) -> List<T>
	where
		T: Default,
	{
		let mut list = List::new();
		list.insert_many_back((0..len).map(|_| T::default()));
		list
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.links.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.head == NONE
	}

	/// Theoretical maximum number of elements.
	#[inline]
	pub fn max_size(&self) -> usize {
		usize::MAX / mem::size_of::<Link<T>>().max(1)
	}

	#[inline]
	pub fn front(&self) -> Result<&T> {
		self.links.get(self.head).map(|l| &l.value).ok_or(Error::Empty)
	}

	#[inline]
	pub fn back(&self) -> Result<&T> {
		self.links.get(self.tail).map(|l| &l.value).ok_or(Error::Empty)
	}

	#[inline]
	pub fn front_mut(&mut self) -> Result<&mut T> {
		self.links
			.get_mut(self.head)
			.map(|l| &mut l.value)
			.ok_or(Error::Empty)
	}

	#[inline]
	pub fn back_mut(&mut self) -> Result<&mut T> {
		self.links
			.get_mut(self.tail)
			.map(|l| &mut l.value)
			.ok_or(Error::Empty)
	}

	/// Position of the first element, or the end position if the list is empty.
	#[inline]
	pub fn begin(&self) -> Position {
		self.position(self.head)
	}

	#[inline]
	pub fn end(&self) -> Position {
		Position::end()
	}

	#[inline]
	fn position(&self, id: usize) -> Position {
		match from_id(id) {
			Some(id) => Position::single(id),
			None => Position::end(),
		}
	}

	/// Id of the cell at `pos`, or `None` for the end position.
	///
	/// Fails if the position is stale.
	#[inline]
	fn cell(&self, pos: Position) -> Result<Option<usize>> {
		match pos.id() {
			Some(id) if self.links.contains(id) => Ok(Some(id)),
			Some(_) => Err(Error::InvalidPosition),
			None => Ok(None),
		}
	}

	/// Position following `pos`.
	///
	/// The end position is followed by itself.
	#[inline]
	pub fn next_position(&self, pos: Position) -> Position {
		match pos.id().and_then(|id| self.links.get(id)) {
			Some(link) => self.position(link.next),
			None => Position::end(),
		}
	}

	/// Position preceding `pos`.
	///
	/// The end position is preceded by the last element.
	/// Stepping back from the first element gives the end position.
	#[inline]
	pub fn previous_position(&self, pos: Position) -> Position {
		match pos.id() {
			Some(id) => match self.links.get(id) {
				Some(link) => self.position(link.prev),
				None => Position::end(),
			},
			None => self.position(self.tail),
		}
	}

	#[inline]
	pub fn get_at(&self, pos: Position) -> Result<&T> {
		pos.id()
			.and_then(|id| self.links.get(id))
			.map(|l| &l.value)
			.ok_or(Error::InvalidPosition)
	}

	#[inline]
	pub fn get_at_mut(&mut self, pos: Position) -> Result<&mut T> {
		pos.id()
			.and_then(|id| self.links.get_mut(id))
			.map(|l| &mut l.value)
			.ok_or(Error::InvalidPosition)
	}

	/// Links a new cell between `prev` and `next`, which must be adjacent.
	fn link(&mut self, prev: usize, next: usize, value: T) -> usize {
		let id = self.links.insert(Link { prev, next, value });

		match from_id(prev) {
			Some(prev) => self.links[prev].next = id,
			None => self.head = id,
		}

		match from_id(next) {
			Some(next) => self.links[next].prev = id,
			None => self.tail = id,
		}

		id
	}

	/// Unlinks and releases the cell `id`.
	fn unlink(&mut self, id: usize) -> T {
		let link = self.links.remove(id);

		match from_id(link.prev) {
			Some(prev) => self.links[prev].next = link.next,
			None => self.head = link.next,
		}

		match from_id(link.next) {
			Some(next) => self.links[next].prev = link.prev,
			None => self.tail = link.prev,
		}

		link.value
	}

	#[inline]
	pub fn push_front(&mut self, value: T) {
		self.link(NONE, self.head, value);
	}

	#[inline]
	pub fn push_back(&mut self, value: T) {
		self.link(self.tail, NONE, value);
	}

	#[inline]
	pub fn pop_front(&mut self) -> Option<T> {
		from_id(self.head).map(|id| self.unlink(id))
	}

	#[inline]
	pub fn pop_back(&mut self) -> Option<T> {
		from_id(self.tail).map(|id| self.unlink(id))
	}

	/// Inserts `value` before the element at `pos`, or at the back for the
	/// end position.
	///
	/// Returns the position of the inserted element.
	pub fn insert(&mut self, pos: Position, value: T) -> Result<Position> {
		let id = match self.cell(pos)? {
			Some(next) => self.link(self.links[next].prev, next, value),
			None => self.link(self.tail, NONE, value),
		};

		Ok(Position::single(id))
	}

	/// Removes the element at `pos`.
	///
	/// Fails on the end position.
	pub fn erase(&mut self, pos: Position) -> Result<T> {
		match self.cell(pos)? {
			Some(id) => Ok(self.unlink(id)),
			None => Err(Error::InvalidPosition),
		}
	}

	/// Inserts the given values before the element at `pos`, preserving their order.
	///
	/// Returns the position of the element following the inserted ones.
	pub fn insert_many<I>(&mut self, pos: Position, values: I) -> Result<Position>
	where
		I: IntoIterator<Item = T>,
	{
		let next = self.cell(pos)?.unwrap_or(NONE);
		for value in values {
			let prev = match from_id(next) {
				Some(next) => self.links[next].prev,
				None => self.tail,
			};
			self.link(prev, next, value);
		}

		Ok(pos)
	}

	pub fn insert_many_back<I>(&mut self, values: I)
	where
		I: IntoIterator<Item = T>,
	{
		for value in values {
			self.push_back(value)
		}
	}

	/// Inserts the given values at the front, preserving their order.
	pub fn insert_many_front<I>(&mut self, values: I)
	where
		I: IntoIterator<Item = T>,
	{
		let head = self.head;
		for value in values {
			let prev = match from_id(head) {
				Some(head) => self.links[head].prev,
				None => self.tail,
			};
			self.link(prev, head, value);
		}
	}

	#[inline]
	pub fn clear(&mut self) {
		self.links.clear();
		self.head = NONE;
		self.tail = NONE;
	}

	#[inline]
	pub fn swap(&mut self, other: &mut Self) {
		mem::swap(self, other)
	}

	/// Moves every element of `other` before the element at `pos`.
	///
	/// `other` is left empty.
	pub fn splice(&mut self, pos: Position, other: &mut List<T>) -> Result<()> {
		self.cell(pos)?;
		tracing::debug!(len = other.len(), %pos, "splicing list");
		if self.is_empty() {
			self.swap(other);
			return Ok(());
		}

		let taken = mem::take(other);
		self.insert_many(pos, taken).map(|_| ())
	}

	/// Moves every element of `other` into this list, then sorts it.
	///
	/// `other` is left empty.
	pub fn merge(&mut self, other: &mut List<T>)
	where
		T: Ord,
	{
		tracing::debug!(len = other.len(), "merging list");
		let taken = mem::take(other);
		if self.is_empty() {
			*self = taken
		} else {
			self.insert_many_back(taken)
		}

		self.sort()
	}

	/// Sorts the list.
	///
	/// This sort is stable: equal elements keep their relative order.
	/// Cells are relinked, values are not moved.
	pub fn sort(&mut self)
	where
		T: Ord,
	{
		let mut ids = Vec::with_capacity(self.len());
		let mut id = self.head;
		while let Some(current) = from_id(id) {
			ids.push(current);
			id = self.links[current].next;
		}

		let links = &self.links;
		ids.sort_by(|a, b| links[*a].value.cmp(&links[*b].value));

		let mut prev = NONE;
		for &id in &ids {
			let link = &mut self.links[id];
			link.prev = prev;
			link.next = NONE;
			if let Some(prev) = from_id(prev) {
				self.links[prev].next = id;
			}
			prev = id;
		}

		self.head = ids.first().copied().unwrap_or(NONE);
		self.tail = prev;
	}

	/// Sorts the list and removes consecutive equal elements.
	pub fn unique(&mut self)
	where
		T: Ord,
	{
		self.sort();

		let mut id = self.head;
		while let Some(current) = from_id(id) {
			let next = self.links[current].next;
			match from_id(next) {
				Some(next) if self.links[next].value == self.links[current].value => {
					self.unlink(next);
				}
				_ => id = next,
			}
		}
	}

	/// Reverses the order of the elements.
	pub fn reverse(&mut self) {
		let mut id = self.head;
		while let Some(current) = from_id(id) {
			let link = &mut self.links[current];
			mem::swap(&mut link.prev, &mut link.next);
			id = link.prev;
		}

		mem::swap(&mut self.head, &mut self.tail)
	}

	#[inline]
	pub fn iter(&self) -> Iter<T> {
		Iter {
			list: self,
			front: self.head,
			back: self.tail,
			len: self.len(),
		}
	}
}

impl<T> Default for List<T> {
	#[inline]
	fn default() -> Self {
		List::new()
	}
}

impl<T: Clone> Clone for List<T> {
	fn clone(&self) -> Self {
		self.iter().cloned().collect()
	}
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_list().entries(self.iter()).finish()
	}
}

impl<T: PartialEq> PartialEq for List<T> {
	fn eq(&self, other: &Self) -> bool {
		self.len() == other.len() && self.iter().eq(other.iter())
	}
}

impl<T: Eq> Eq for List<T> {}

impl<T> FromIterator<T> for List<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut list = List::new();
		list.insert_many_back(iter);
		list
	}
}

impl<T> Extend<T> for List<T> {
	#[inline]
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		self.insert_many_back(iter)
	}
}

pub struct Iter<'a, T> {
	list: &'a List<T>,
	front: usize,
	back: usize,
	len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
	type Item = &'a T;

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.len, Some(self.len))
	}

	#[inline]
	fn next(&mut self) -> Option<&'a T> {
		if self.len == 0 {
			return None;
		}

		let link = self.list.links.get(self.front)?;
		self.front = link.next;
		self.len -= 1;
		Some(&link.value)
	}
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
	#[inline]
	fn next_back(&mut self) -> Option<&'a T> {
		if self.len == 0 {
			return None;
		}

		let link = self.list.links.get(self.back)?;
		self.back = link.prev;
		self.len -= 1;
		Some(&link.value)
	}
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a List<T> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T>;

	#[inline]
	fn into_iter(self) -> Iter<'a, T> {
		self.iter()
	}
}

pub struct IntoIter<T> {
	list: List<T>,
}

impl<T> Iterator for IntoIter<T> {
	type Item = T;

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.list.len();
		(len, Some(len))
	}

	#[inline]
	fn next(&mut self) -> Option<T> {
		self.list.pop_front()
	}
}

impl<T> DoubleEndedIterator for IntoIter<T> {
	#[inline]
	fn next_back(&mut self) -> Option<T> {
		self.list.pop_back()
	}
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
	type Item = T;
	type IntoIter = IntoIter<T>;

	#[inline]
	fn into_iter(self) -> IntoIter<T> {
		IntoIter { list: self }
	}
}
