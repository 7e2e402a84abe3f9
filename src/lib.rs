//! Ordered containers built on an unbalanced binary search tree whose nodes
//! live in a slab, along with the sequences they use.
//!
//! - [`Map`], [`Set`] and [`Multiset`] share the search tree engine of
//!   [`generic::Tree`]. Elements are reached by iterators or by [`Position`]s.
//! - [`Buffer`] is a growable array, [`List`] a doubly linked list and
//!   [`FixedArray`] an array of constant length.
//! - [`Queue`] and [`Stack`] restrict a [`List`] to one end.
//!
//! Bounds-checked operations return an [`Error`].
use slab::Slab;

mod adapters;
mod array;
mod buffer;
pub mod error;
pub mod generic;
pub mod list;

#[cfg(feature = "serde")]
mod serialization;

pub use adapters::{Queue, Stack};
pub use array::FixedArray;
pub use buffer::Buffer;
pub use error::{Error, Result};
pub use generic::Position;
pub use list::List;

/// Ordered map based on `Slab`.
pub type Map<K, V> = generic::Map<K, V, Slab<generic::Node<generic::Item<K, V>>>>;

/// Ordered set based on `Slab`.
pub type Set<T> = generic::Set<T, Slab<generic::Node<generic::Item<T, ()>>>>;

/// Ordered multiset based on `Slab`.
pub type Multiset<T> = generic::Multiset<T, Slab<generic::Node<generic::Run<T>>>>;
