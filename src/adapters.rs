//! Restricted interfaces over [`List`].
use crate::{error::Result, List};
use std::iter::FromIterator;

/// First-in first-out queue.
///
/// ```
/// use bst_slab::Queue;
///
/// let mut queue = Queue::new();
/// queue.push(1);
/// queue.push(2);
/// assert_eq!(queue.front(), Ok(&1));
/// assert_eq!(queue.pop(), Some(1));
/// assert_eq!(queue.pop(), Some(2));
/// assert!(queue.front().is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Queue<T> {
	list: List<T>,
}

impl<T> Queue<T> {
	#[inline]
	pub fn new() -> Queue<T> {
		Queue { list: List::new() }
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.list.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.list.is_empty()
	}

	#[inline]
	pub fn max_size(&self) -> usize {
		self.list.max_size()
	}

	/// Oldest element.
	#[inline]
	pub fn front(&self) -> Result<&T> {
		self.list.front()
	}

	/// Newest element.
	#[inline]
	pub fn back(&self) -> Result<&T> {
		self.list.back()
	}

	#[inline]
	pub fn push(&mut self, value: T) {
		self.list.push_back(value)
	}

	#[inline]
	pub fn pop(&mut self) -> Option<T> {
		self.list.pop_front()
	}

	#[inline]
	pub fn swap(&mut self, other: &mut Self) {
		self.list.swap(&mut other.list)
	}

	#[inline]
	pub fn insert_many_back<I: IntoIterator<Item = T>>(&mut self, values: I) {
		self.list.insert_many_back(values)
	}

	/// Iterates from the oldest to the newest element.
	#[inline]
	pub fn iter(&self) -> crate::list::Iter<T> {
		self.list.iter()
	}
}

impl<T> Default for Queue<T> {
	#[inline]
	fn default() -> Self {
		Queue::new()
	}
}

impl<T> FromIterator<T> for Queue<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Queue {
			list: iter.into_iter().collect(),
		}
	}
}

/// Last-in first-out stack.
///
/// ```
/// use bst_slab::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.top(), Ok(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert!(stack.top().is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Stack<T> {
	/// The top of the stack is the front of the list.
	list: List<T>,
}

impl<T> Stack<T> {
	#[inline]
	pub fn new() -> Stack<T> {
		Stack { list: List::new() }
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.list.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.list.is_empty()
	}

	#[inline]
	pub fn max_size(&self) -> usize {
		self.list.max_size()
	}

	#[inline]
	pub fn top(&self) -> Result<&T> {
		self.list.front()
	}

	#[inline]
	pub fn push(&mut self, value: T) {
		self.list.push_front(value)
	}

	#[inline]
	pub fn pop(&mut self) -> Option<T> {
		self.list.pop_front()
	}

	#[inline]
	pub fn swap(&mut self, other: &mut Self) {
		self.list.swap(&mut other.list)
	}

	/// Pushes every value in order: the last one ends on top.
	#[inline]
	pub fn insert_many_front<I: IntoIterator<Item = T>>(&mut self, values: I) {
		for value in values {
			self.push(value)
		}
	}

	/// Iterates from the top to the bottom of the stack.
	#[inline]
	pub fn iter(&self) -> crate::list::Iter<T> {
		self.list.iter()
	}
}

impl<T> Default for Stack<T> {
	#[inline]
	fn default() -> Self {
		Stack::new()
	}
}

impl<T> FromIterator<T> for Stack<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut stack = Stack::new();
		stack.insert_many_front(iter);
		stack
	}
}
