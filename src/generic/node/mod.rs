#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod item;
mod run;

pub use item::Item;
pub use run::Run;

/// Type identified by a key.
///
/// This is implemented by [`Item`] and [`Run`].
pub trait Keyed {
	type Key;

	fn key(&self) -> &Self::Key;
}

/// Content of a tree node.
///
/// A payload stands for `weight` logical elements of the container,
/// all sharing the same key.
pub trait Payload: Keyed {
	/// Number of elements represented by the payload.
	///
	/// Must never be zero.
	#[inline]
	fn weight(&self) -> usize {
		1
	}
}

/// Child slot of a node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
	Left,
	Right,
}

const NONE: usize = usize::MAX;

/// Binary search tree node.
///
/// Nodes live in a slab and refer to each other by slab id.
/// The `left` and `right` links define the tree (a node is owned by the slot
/// pointing to it), while the `parent` link only serves navigation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Node<T> {
	parent: usize,
	left: usize,
	right: usize,
	item: T,
}

#[inline]
fn from_id(id: usize) -> Option<usize> {
	if id == NONE {
		None
	} else {
		Some(id)
	}
}

impl<T> Node<T> {
	/// Creates a new childless node.
	#[inline]
	pub fn new(parent: Option<usize>, item: T) -> Node<T> {
		Node {
			parent: parent.unwrap_or(NONE),
			left: NONE,
			right: NONE,
			item,
		}
	}

	#[inline]
	pub fn parent(&self) -> Option<usize> {
		from_id(self.parent)
	}

	#[inline]
	pub fn set_parent(&mut self, p: Option<usize>) {
		self.parent = p.unwrap_or(NONE)
	}

	#[inline]
	pub fn left(&self) -> Option<usize> {
		from_id(self.left)
	}

	#[inline]
	pub fn right(&self) -> Option<usize> {
		from_id(self.right)
	}

	#[inline]
	pub fn child(&self, side: Side) -> Option<usize> {
		match side {
			Side::Left => self.left(),
			Side::Right => self.right(),
		}
	}

	#[inline]
	pub fn set_child(&mut self, side: Side, id: Option<usize>) {
		let id = id.unwrap_or(NONE);
		match side {
			Side::Left => self.left = id,
			Side::Right => self.right = id,
		}
	}

	/// Finds which slot of this node holds the child `id`.
	#[inline]
	pub fn side_of(&self, id: usize) -> Option<Side> {
		if self.left == id {
			Some(Side::Left)
		} else if self.right == id {
			Some(Side::Right)
		} else {
			None
		}
	}

	#[inline]
	pub fn item(&self) -> &T {
		&self.item
	}

	/// Modifying the key of the item in such a way that its order with regard to
	/// other keys changes is a logical error.
	#[inline]
	pub fn item_mut(&mut self) -> &mut T {
		&mut self.item
	}

	#[inline]
	pub fn into_item(self) -> T {
		self.item
	}

	/// Write the label of the node in the DOT language.
	///
	/// Requires the `dot` feature.
	#[cfg(feature = "dot")]
	#[inline]
	pub fn dot_write_label<W: std::io::Write>(&self, f: &mut W) -> std::io::Result<()>
	where
		T: Payload,
		T::Key: std::fmt::Display,
	{
		if self.item.weight() > 1 {
			write!(f, "{} x{}", self.item.key(), self.item.weight())
		} else {
			write!(f, "{}", self.item.key())
		}
	}
}
