use crate::generic::{
	map::Map,
	node::{Item, Node},
	tree::Position,
};
use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, Slab, SlabMut};
use std::fmt;

/// A view into a single entry in a map, which may either be vacant or occupied.
///
/// This enum is constructed from the [`entry`](`Map#entry`) method on [`Map`].
pub enum Entry<'a, K, V, C = slab::Slab<Node<Item<K, V>>>> {
	Vacant(VacantEntry<'a, K, V, C>),
	Occupied(OccupiedEntry<'a, K, V, C>),
}

use Entry::*;

impl<'a, K, V, C: Slab<Node<Item<K, V>>>> Entry<'a, K, V, C>
where
	C: SimpleCollectionRef,
{
	/// Returns a reference to this entry's key.
	///
	/// # Examples
	///
	/// ```
	/// use bst_slab::Map;
	///
	/// let mut map: Map<&str, usize> = Map::new();
	/// assert_eq!(map.entry("poneyland").key(), &"poneyland");
	/// ```
	#[inline]
	pub fn key(&self) -> &K {
		match *self {
			Occupied(ref entry) => entry.key(),
			Vacant(ref entry) => entry.key(),
		}
	}
}

impl<'a, K: Ord, V, C: SlabMut<Node<Item<K, V>>>> Entry<'a, K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	/// Ensures a value is in the entry by inserting the default if empty, and returns
	/// a mutable reference to the value in the entry.
	///
	/// # Examples
	///
	/// ```
	/// use bst_slab::Map;
	///
	/// let mut map: Map<&str, usize> = Map::new();
	/// map.entry("poneyland").or_insert(12);
	///
	/// assert_eq!(map["poneyland"], 12);
	/// ```
	#[inline]
	pub fn or_insert(self, default: V) -> &'a mut V {
		match self {
			Occupied(entry) => entry.into_mut(),
			Vacant(entry) => entry.insert(default),
		}
	}

	/// Ensures a value is in the entry by inserting the result of the default function if empty,
	/// and returns a mutable reference to the value in the entry.
	#[inline]
	pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> &'a mut V {
		match self {
			Occupied(entry) => entry.into_mut(),
			Vacant(entry) => entry.insert(default()),
		}
	}

	/// Ensures a value is in the entry by inserting, if empty, the result of the default function,
	/// which takes the key as its argument, and returns a mutable reference to the value in the
	/// entry.
	///
	/// # Examples
	///
	/// ```
	/// use bst_slab::Map;
	///
	/// let mut map: Map<&str, usize> = Map::new();
	///
	/// map.entry("poneyland").or_insert_with_key(|key| key.chars().count());
	///
	/// assert_eq!(map["poneyland"], 9);
	/// ```
	#[inline]
	pub fn or_insert_with_key<F: FnOnce(&K) -> V>(self, default: F) -> &'a mut V {
		match self {
			Occupied(entry) => entry.into_mut(),
			Vacant(entry) => {
				let value = default(entry.key());
				entry.insert(value)
			}
		}
	}

	/// Provides in-place mutable access to an occupied entry before any
	/// potential inserts into the map.
	///
	/// # Examples
	///
	/// ```
	/// use bst_slab::Map;
	///
	/// let mut map: Map<&str, usize> = Map::new();
	///
	/// map.entry("poneyland")
	///    .and_modify(|e| { *e += 1 })
	///    .or_insert(42);
	/// assert_eq!(map["poneyland"], 42);
	///
	/// map.entry("poneyland")
	///    .and_modify(|e| { *e += 1 })
	///    .or_insert(42);
	/// assert_eq!(map["poneyland"], 43);
	/// ```
	#[inline]
	pub fn and_modify<F>(self, f: F) -> Self
	where
		F: FnOnce(&mut V),
	{
		match self {
			Occupied(mut entry) => {
				f(entry.get_mut());
				Occupied(entry)
			}
			Vacant(entry) => Vacant(entry),
		}
	}

	/// Ensures a value is in the entry by inserting the default value if empty,
	/// and returns a mutable reference to the value in the entry.
	#[inline]
	pub fn or_default(self) -> &'a mut V
	where
		V: Default,
	{
		match self {
			Occupied(entry) => entry.into_mut(),
			Vacant(entry) => entry.insert(Default::default()),
		}
	}
}

impl<'a, K: fmt::Debug, V: fmt::Debug, C: Slab<Node<Item<K, V>>>> fmt::Debug for Entry<'a, K, V, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Occupied(entry) => fmt::Debug::fmt(entry, f),
			Vacant(entry) => fmt::Debug::fmt(entry, f),
		}
	}
}

/// A view into a vacant entry in a [`Map`].
/// It is part of the [`Entry`] enum.
pub struct VacantEntry<'a, K, V, C = slab::Slab<Node<Item<K, V>>>> {
	pub(crate) map: &'a mut Map<K, V, C>,
	pub(crate) key: K,

	/// Node under which the key would be attached.
	pub(crate) parent: Option<usize>,
}

impl<'a, K, V, C> VacantEntry<'a, K, V, C> {
	/// Gets a reference to the keys that would be used when inserting a value through the `VacantEntry`.
	#[inline]
	pub fn key(&self) -> &K {
		&self.key
	}

	/// Take ownership of the key.
	///
	/// ## Example
	/// ```
	/// use bst_slab::Map;
	/// use bst_slab::generic::map::Entry;
	///
	/// let mut map: Map<&str, usize> = Map::new();
	///
	/// if let Entry::Vacant(v) = map.entry("poneyland") {
	///     assert_eq!(v.into_key(), "poneyland");
	/// }
	/// ```
	#[inline]
	pub fn into_key(self) -> K {
		self.key
	}
}

impl<'a, K: Ord, V, C: SlabMut<Node<Item<K, V>>>> VacantEntry<'a, K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	/// Sets the value of the entry with the `VacantEntry`'s key,
	/// and returns a mutable reference to it.
	///
	/// ## Example
	/// ```
	/// use bst_slab::Map;
	/// use bst_slab::generic::map::Entry;
	///
	/// let mut map: Map<&str, u32> = Map::new();
	///
	/// if let Entry::Vacant(o) = map.entry("poneyland") {
	///     o.insert(37);
	/// }
	/// assert_eq!(map["poneyland"], 37);
	/// ```
	#[inline]
	pub fn insert(self, value: V) -> &'a mut V {
		let tree = &mut self.map.tree;
		let id = tree.attach(self.parent, Item::new(self.key, value));
		tree.item_mut(id).unwrap().value_mut()
	}
}

impl<'a, K: fmt::Debug, V, C> fmt::Debug for VacantEntry<'a, K, V, C> {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_tuple("VacantEntry").field(self.key()).finish()
	}
}

/// A view into an occupied entry in a [`Map`].
/// It is part of the [`Entry`] enum.
pub struct OccupiedEntry<'a, K, V, C = slab::Slab<Node<Item<K, V>>>> {
	pub(crate) map: &'a mut Map<K, V, C>,

	/// Id of the node holding the binding.
	pub(crate) id: usize,
}

impl<'a, K, V, C: Slab<Node<Item<K, V>>>> OccupiedEntry<'a, K, V, C>
where
	C: SimpleCollectionRef,
{
	/// Gets the position of the occupied entry in the map.
	#[inline]
	pub fn position(&self) -> Position {
		Position::single(self.id)
	}

	/// Gets a reference to the value in the entry.
	///
	/// # Example
	/// ```
	/// use bst_slab::Map;
	/// use bst_slab::generic::map::Entry;
	///
	/// let mut map: Map<&str, usize> = Map::new();
	/// map.entry("poneyland").or_insert(12);
	///
	/// if let Entry::Occupied(o) = map.entry("poneyland") {
	///     assert_eq!(o.get(), &12);
	/// }
	/// ```
	#[inline]
	pub fn get(&self) -> &V {
		self.map.tree.item(self.id).unwrap().value()
	}

	/// Gets a reference to the key in the entry.
	#[inline]
	pub fn key(&self) -> &K {
		self.map.tree.item(self.id).unwrap().key()
	}
}

impl<'a, K, V, C: SlabMut<Node<Item<K, V>>>> OccupiedEntry<'a, K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	/// Gets a mutable reference to the value in the entry.
	///
	/// If you need a reference to the OccupiedEntry that may outlive
	/// the destruction of the Entry value, see into_mut.
	///
	/// # Example
	/// ```
	/// use bst_slab::Map;
	/// use bst_slab::generic::map::Entry;
	///
	/// let mut map: Map<&str, usize> = Map::new();
	/// map.entry("poneyland").or_insert(12);
	///
	/// assert_eq!(map["poneyland"], 12);
	/// if let Entry::Occupied(mut o) = map.entry("poneyland") {
	///     *o.get_mut() += 10;
	///     assert_eq!(*o.get(), 22);
	///
	///     // We can use the same Entry multiple times.
	///     *o.get_mut() += 2;
	/// }
	/// assert_eq!(map["poneyland"], 24);
	/// ```
	#[inline]
	pub fn get_mut(&mut self) -> &mut V {
		self.map.tree.item_mut(self.id).unwrap().value_mut()
	}

	/// Sets the value of the entry with the OccupiedEntry's key,
	/// and returns the entry's old value.
	#[inline]
	pub fn insert(&mut self, value: V) -> V {
		self.map.tree.item_mut(self.id).unwrap().set_value(value)
	}

	/// Converts the entry into a mutable reference to its value.
	///
	/// If you need multiple references to the `OccupiedEntry`, see [`get_mut`].
	///
	/// [`get_mut`]: #method.get_mut
	#[inline]
	pub fn into_mut(self) -> &'a mut V {
		self.map.tree.item_mut(self.id).unwrap().value_mut()
	}

	/// Takes the value of the entry out of the map, and returns it.
	///
	/// # Examples
	///
	/// ```
	/// use bst_slab::Map;
	/// use bst_slab::generic::map::Entry;
	///
	/// let mut map: Map<&str, usize> = Map::new();
	/// map.entry("poneyland").or_insert(12);
	///
	/// if let Entry::Occupied(o) = map.entry("poneyland") {
	///     assert_eq!(o.remove(), 12);
	/// }
	/// assert!(!map.contains_key("poneyland"));
	/// ```
	#[inline]
	pub fn remove(self) -> V {
		self.remove_entry().1
	}

	/// Take ownership of the key and value from the map.
	#[inline]
	pub fn remove_entry(self) -> (K, V) {
		self.map.tree.remove_node(self.id).unwrap().into_pair()
	}
}

impl<'a, K: fmt::Debug, V: fmt::Debug, C: Slab<Node<Item<K, V>>>> fmt::Debug
	for OccupiedEntry<'a, K, V, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("OccupiedEntry")
			.field("key", self.key())
			.field("value", self.get())
			.finish()
	}
}
