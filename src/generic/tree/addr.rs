use std::fmt;

/// Element position in a tree or list.
///
/// A position is identified by the id of a node in the container's slab,
/// and by the number of occurrences `remaining` in this node, current one included.
/// Nodes of maps and sets hold a single element, so their positions always have
/// `remaining == 1`.
/// A multiset node holding a run of `n` equal elements is visited `n` times,
/// from `remaining == n` down to `remaining == 1`.
/// We write `@id:remaining` the position of an occurrence.
///
/// ```text
///                 ┌────────────┐
///                 │ node 0     │
///                 │ 5 5 5      │ <── @0:3, then @0:2, then @0:1
///                 └────────────┘
///                  │          │
///          ┌────────────┐  ┌────────────┐
///          │ node 1     │  │ node 2     │
///          │ 3          │  │ 8 8        │ <── @2:2, then @2:1
///          └────────────┘  └────────────┘
///                 ^
///                 └── @1:1
/// ```
///
/// The *end* position does not refer to any node. It is the position following
/// the last element, and it is never dereferenced.
///
/// ## Validity
///
/// A position is only valid until the next mutation of its container.
/// Node ids are recycled by the slab, so an outdated position may refer to a
/// different element, but it is never unsafe to use one.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
	/// Identifier of the node.
	id: usize,

	/// Number of occurrences left in the node, current one included.
	remaining: usize,
}

impl Position {
	#[inline]
	pub fn new(id: usize, remaining: usize) -> Position {
		Position { id, remaining }
	}

	/// Position of the single element held by the node `id`.
	#[inline]
	pub fn single(id: usize) -> Position {
		Position { id, remaining: 1 }
	}

	#[inline]
	pub fn end() -> Position {
		Position {
			id: usize::MAX,
			remaining: 0,
		}
	}

	#[inline]
	pub fn is_end(&self) -> bool {
		self.id == usize::MAX
	}

	/// Returns the node id, or `None` for the end position.
	#[inline]
	pub fn id(&self) -> Option<usize> {
		if self.is_end() {
			None
		} else {
			Some(self.id)
		}
	}

	#[inline]
	pub fn remaining(&self) -> usize {
		self.remaining
	}
}

impl Default for Position {
	#[inline]
	fn default() -> Self {
		Position::end()
	}
}

impl fmt::Display for Position {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		if self.is_end() {
			write!(f, "@end")
		} else {
			write!(f, "@{}:{}", self.id, self.remaining)
		}
	}
}

impl fmt::Debug for Position {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Display::fmt(self, f)
	}
}
