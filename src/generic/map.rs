use crate::{
	error::{Error, Result},
	generic::{
		node::{Item, Node},
		tree::{self, Position, Tree},
	},
};
use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, Slab, SlabMut};
use std::{
	borrow::Borrow,
	cmp::Ordering,
	fmt,
	hash::{Hash, Hasher},
	iter::{DoubleEndedIterator, ExactSizeIterator, FromIterator, FusedIterator},
	ops::Index,
};

mod entry;

pub use entry::*;

/// An ordered map based on an unbalanced binary search tree.
///
/// Nodes are allocated in a slab data structure `C`,
/// and every node holds a single key-value binding.
/// The slab implementation is taken as parameter: any container implementing
/// "slab-like" functionalities can be used. The [`slab::Slab`] implementation
/// is used by default by reexporting `Map<K, V, slab::Slab<_>>` at the root of the crate.
///
/// # Basic usage
///
/// ```
/// use bst_slab::Map;
///
/// let mut movie_reviews = Map::new();
///
/// movie_reviews.insert("Office Space",       "Deals with real issues in the workplace.");
/// movie_reviews.insert("Pulp Fiction",       "Masterpiece.");
/// movie_reviews.insert("The Godfather",      "Very enjoyable.");
/// movie_reviews.insert("The Blues Brothers", "Eye lyked it a lot.");
///
/// if !movie_reviews.contains_key("Les Misérables") {
///     println!("We've got {} reviews, but Les Misérables ain't one.",
///              movie_reviews.len());
/// }
///
/// movie_reviews.remove("The Blues Brothers");
///
/// // `at` fails on missing keys instead of panicking.
/// assert!(movie_reviews.at("Up!").is_err());
/// assert_eq!(movie_reviews.at("Pulp Fiction"), Ok(&"Masterpiece."));
///
/// for (movie, review) in &movie_reviews {
///     println!("{}: \"{}\"", movie, review);
/// }
/// ```
///
/// # Insertion policy
///
/// [`insert`](Map::insert) never replaces the value of an existing key.
/// Use [`insert_or_assign`](Map::insert_or_assign) or the [`entry`](Map::entry) API
/// to overwrite values.
///
/// ```
/// use bst_slab::Map;
///
/// let mut map = Map::new();
/// assert_eq!(map.insert(1, 'a').1, true);
/// assert_eq!(map.insert(1, 'b').1, false);
/// assert_eq!(map[&1], 'a');
///
/// map.insert_or_assign(1, 'b');
/// assert_eq!(map[&1], 'b');
/// ```
///
/// # Positions
///
/// In addition to the standard iterators, the elements of the map can be
/// reached through [`Position`]s, stepping from [`begin`](Map::begin)
/// to [`end`](Map::end).
///
/// ```
/// use bst_slab::Map;
///
/// let map: Map<_, _> = vec![(1, 'f'), (2, 't'), (3, 'o')].into_iter().collect();
/// let mut pos = map.begin();
/// assert_eq!(map.get_at(pos), Ok((&1, &'f')));
/// pos = map.next_position(pos);
/// pos = map.next_position(pos);
/// pos = map.next_position(pos);
/// assert_eq!(pos, map.end());
/// ```
///
/// # Correctness
///
/// It is a logic error for a key to be modified in such a way that the key's ordering relative
/// to any other key, as determined by the [`Ord`] trait, changes while it is in the map.
pub struct Map<K, V, C> {
	tree: Tree<Item<K, V>, C>,
}

impl<K, V, C> Map<K, V, C> {
	/// Create a new empty map.
	#[inline]
	pub fn new() -> Map<K, V, C>
	where
		C: Default,
	{
		Map { tree: Tree::new() }
	}

	/// Returns `true` if the map contains no elements.
	///
	/// # Example
	///
	/// ```
	/// use bst_slab::Map;
	///
	/// let mut a = Map::new();
	/// assert!(a.is_empty());
	/// a.insert(1, "a");
	/// assert!(!a.is_empty());
	/// ```
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.tree.is_empty()
	}

	/// Returns the number of elements in the map.
	#[inline]
	pub fn len(&self) -> usize {
		self.tree.len()
	}

	/// Theoretical maximum number of elements.
	#[inline]
	pub fn max_size(&self) -> usize {
		self.tree.max_size()
	}

	/// Exchanges the content of two maps.
	#[inline]
	pub fn swap(&mut self, other: &mut Self) {
		self.tree.swap(&mut other.tree)
	}

	/// Underlying search tree.
	#[inline]
	pub fn as_tree(&self) -> &Tree<Item<K, V>, C> {
		&self.tree
	}

	/// The end position, following the last element.
	#[inline]
	pub fn end(&self) -> Position {
		Position::end()
	}
}

impl<K, V, C: Slab<Node<Item<K, V>>>> Map<K, V, C>
where
	C: SimpleCollectionRef,
{
	/// Returns a reference to the value corresponding to the key.
	///
	/// The key may be any borrowed form of the map's key type, but the ordering
	/// on the borrowed form *must* match the ordering on the key type.
	///
	/// # Example
	///
	/// ```
	/// use bst_slab::Map;
	///
	/// let mut map = Map::new();
	/// map.insert(1, "a");
	/// assert_eq!(map.get(&1), Some(&"a"));
	/// assert_eq!(map.get(&2), None);
	/// ```
	#[inline]
	pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V>
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		self.get_key_value(key).map(|(_, v)| v)
	}

	/// Returns the key-value pair corresponding to the supplied key.
	#[inline]
	pub fn get_key_value<Q: ?Sized>(&self, key: &Q) -> Option<(&K, &V)>
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		let id = self.tree.find(key)?;
		self.tree.item(id).map(Item::as_pair)
	}

	/// Returns `true` if the map contains a value for the specified key.
	#[inline]
	pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		self.tree.find(key).is_some()
	}

	/// Bounds-checked access to the value corresponding to the key.
	///
	/// Fails with [`Error::KeyNotFound`] if the key is not in the map.
	///
	/// # Example
	///
	/// ```
	/// use bst_slab::{Error, Map};
	///
	/// let map: Map<_, _> = vec![(5, 'a'), (6, 'b'), (3, 'c')].into_iter().collect();
	/// assert_eq!(map.at(&1), Err(Error::KeyNotFound));
	/// assert_eq!(map.at(&6), Ok(&'b'));
	/// ```
	#[inline]
	pub fn at<Q: ?Sized>(&self, key: &Q) -> Result<&V>
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		self.get(key).ok_or(Error::KeyNotFound)
	}

	/// Position of the given key, or the end position if it is not in the map.
	#[inline]
	pub fn find<Q: ?Sized>(&self, key: &Q) -> Position
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		match self.tree.find(key) {
			Some(id) => Position::single(id),
			None => Position::end(),
		}
	}

	/// Position of the first element.
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

	/// Key-value pair at the given position.
	///
	/// Fails on the end position and on stale positions.
	#[inline]
	pub fn get_at(&self, pos: Position) -> Result<(&K, &V)> {
		self.tree
			.item_at(pos)
			.map(|(item, _)| item.as_pair())
			.ok_or(Error::InvalidPosition)
	}

	/// Returns the first key-value pair in the map.
	/// The key in this pair is the minimum key in the map.
	///
	/// # Example
	///
	/// ```
	/// use bst_slab::Map;
	///
	/// let mut map = Map::new();
	/// assert_eq!(map.first_key_value(), None);
	/// map.insert(1, "b");
	/// map.insert(2, "a");
	/// assert_eq!(map.first_key_value(), Some((&1, &"b")));
	/// ```
	#[inline]
	pub fn first_key_value(&self) -> Option<(&K, &V)> {
		let id = self.tree.first_id()?;
		self.tree.item(id).map(Item::as_pair)
	}

	/// Returns the last key-value pair in the map.
	#[inline]
	pub fn last_key_value(&self) -> Option<(&K, &V)> {
		let id = self.tree.last_id()?;
		self.tree.item(id).map(Item::as_pair)
	}

	/// Gets an iterator over the entries of the map, sorted by key.
	#[inline]
	pub fn iter(&self) -> Iter<K, V, C> {
		Iter {
			inner: self.tree.iter(),
		}
	}

	/// Gets an iterator over the keys of the map, in sorted order.
	#[inline]
	pub fn keys(&self) -> Keys<K, V, C> {
		Keys { inner: self.iter() }
	}

	/// Gets an iterator over the values of the map, in order by key.
	#[inline]
	pub fn values(&self) -> Values<K, V, C> {
		Values { inner: self.iter() }
	}

	/// Checks the invariants of the underlying tree.
	///
	/// Panics if an invariant is broken.
	#[inline]
	pub fn validate(&self)
	where
		K: Ord,
	{
		self.tree.validate()
	}

	/// Write the map in the DOT graph description language.
	///
	/// Requires the `dot` feature.
	#[cfg(feature = "dot")]
	#[inline]
	pub fn dot_write<W: std::io::Write>(&self, f: &mut W) -> std::io::Result<()>
	where
		K: std::fmt::Display,
	{
		self.tree.dot_write(f)
	}
}

impl<K, V, C: SlabMut<Node<Item<K, V>>>> Map<K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	/// Clears the map, removing all elements.
	///
	/// # Example
	///
	/// ```
	/// use bst_slab::Map;
	///
	/// let mut a = Map::new();
	/// a.insert(1, "a");
	/// a.clear();
	/// assert!(a.is_empty());
	/// ```
	#[inline]
	pub fn clear(&mut self)
	where
		C: cc_traits::Clear,
	{
		self.tree.clear()
	}

	/// Returns a mutable reference to the value corresponding to the key.
	///
	/// # Example
	///
	/// ```
	/// use bst_slab::Map;
	///
	/// let mut map = Map::new();
	/// map.insert(1, "a");
	/// if let Some(x) = map.get_mut(&1) {
	///     *x = "b";
	/// }
	/// assert_eq!(map[&1], "b");
	/// ```
	#[inline]
	pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V>
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		let id = self.tree.find(key)?;
		self.tree.item_mut(id).map(Item::value_mut)
	}

	/// Bounds-checked mutable access to the value corresponding to the key.
	#[inline]
	pub fn at_mut<Q: ?Sized>(&mut self, key: &Q) -> Result<&mut V>
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		self.get_mut(key).ok_or(Error::KeyNotFound)
	}

	/// Returns the value corresponding to the key, inserting the default
	/// value first if the key is not in the map.
	///
	/// # Example
	///
	/// ```
	/// use bst_slab::Map;
	///
	/// let mut letters: Map<char, usize> = Map::new();
	/// for c in "hello".chars() {
	///     *letters.get_or_insert_default(c) += 1;
	/// }
	/// assert_eq!(letters[&'l'], 2);
	/// assert_eq!(letters.len(), 4);
	/// ```
	#[inline]
	pub fn get_or_insert_default(&mut self, key: K) -> &mut V
	where
		K: Ord,
		V: Default,
	{
		self.entry(key).or_default()
	}

	/// Gets the given key's corresponding entry in the map for in-place manipulation.
	///
	/// # Example
	///
	/// ```
	/// use bst_slab::Map;
	///
	/// let mut count: Map<&str, usize> = Map::new();
	///
	/// // count the number of occurrences of letters in the vec
	/// for x in vec!["a", "b", "a", "c", "a", "b"] {
	///     *count.entry(x).or_insert(0) += 1;
	/// }
	///
	/// assert_eq!(count["a"], 3);
	/// assert_eq!(count["b"], 2);
	/// assert_eq!(count["c"], 1);
	/// ```
	#[inline]
	pub fn entry(&mut self, key: K) -> Entry<K, V, C>
	where
		K: Ord,
	{
		match self.tree.locate(&key) {
			Ok(id) => Entry::Occupied(OccupiedEntry { map: self, id }),
			Err(parent) => Entry::Vacant(VacantEntry {
				map: self,
				key,
				parent,
			}),
		}
	}

	/// Inserts a key-value pair into the map, unless the key is already present.
	///
	/// Returns the position of the binding with this key, and `true` if the
	/// pair was inserted. An existing value is never replaced.
	#[inline]
	pub fn insert(&mut self, key: K, value: V) -> (Position, bool)
	where
		K: Ord,
	{
		match self.tree.insert_unique(Item::new(key, value)) {
			Ok(id) => (Position::single(id), true),
			Err((id, _)) => (Position::single(id), false),
		}
	}

	/// Inserts a key-value pair into the map, replacing the value of an
	/// existing binding with the same key.
	///
	/// Returns the position of the binding, and `true`.
	#[inline]
	pub fn insert_or_assign(&mut self, key: K, value: V) -> (Position, bool)
	where
		K: Ord,
	{
		match self.tree.locate(&key) {
			Ok(id) => {
				if let Some(item) = self.tree.item_mut(id) {
					item.set_value(value);
				}
				(Position::single(id), true)
			}
			Err(parent) => {
				let id = self.tree.attach(parent, Item::new(key, value));
				(Position::single(id), true)
			}
		}
	}

	/// Inserts every given pair with [`insert`](Map::insert), in order.
	///
	/// Returns the result of each insertion.
	/// Note that later insertions may invalidate earlier positions.
	pub fn insert_many<I>(&mut self, items: I) -> Vec<(Position, bool)>
	where
		K: Ord,
		I: IntoIterator<Item = (K, V)>,
	{
		items
			.into_iter()
			.map(|(key, value)| self.insert(key, value))
			.collect()
	}

	/// Removes a key from the map, returning the value at the key if the key
	/// was previously in the map.
	///
	/// # Example
	///
	/// ```
	/// use bst_slab::Map;
	///
	/// let mut map = Map::new();
	/// map.insert(1, "a");
	/// assert_eq!(map.remove(&1), Some("a"));
	/// assert_eq!(map.remove(&1), None);
	/// ```
	#[inline]
	pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<V>
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		self.remove_entry(key).map(|(_, v)| v)
	}

	/// Removes a key from the map, returning the stored key and value if the key
	/// was previously in the map.
	#[inline]
	pub fn remove_entry<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)>
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		let id = self.tree.find(key)?;
		self.tree.remove_node(id).map(Item::into_pair)
	}

	/// Removes the binding at the given position.
	///
	/// Fails without modifying the map on the end position and on stale positions.
	pub fn erase(&mut self, pos: Position) -> Result<(K, V)> {
		match pos.id() {
			Some(id) if self.tree.is_valid(pos) => self
				.tree
				.remove_node(id)
				.map(Item::into_pair)
				.ok_or(Error::InvalidPosition),
			_ => Err(Error::InvalidPosition),
		}
	}

	/// Key and mutable value at the given position.
	#[inline]
	pub fn get_at_mut(&mut self, pos: Position) -> Result<(&K, &mut V)> {
		match pos.id() {
			Some(id) if self.tree.is_valid(pos) => self
				.tree
				.item_mut(id)
				.map(Item::as_pair_mut)
				.ok_or(Error::InvalidPosition),
			_ => Err(Error::InvalidPosition),
		}
	}

	/// Removes and returns the first element in the map.
	/// The key of this element is the minimum key that was in the map.
	#[inline]
	pub fn pop_first(&mut self) -> Option<(K, V)> {
		self.tree.pop_first().map(Item::into_pair)
	}

	/// Removes and returns the last element in the map.
	/// The key of this element is the maximum key that was in the map.
	#[inline]
	pub fn pop_last(&mut self) -> Option<(K, V)> {
		self.tree.pop_last().map(Item::into_pair)
	}

	/// Inserts a copy of every binding of `other` whose key is not already in the map.
	///
	/// `other` is left unchanged.
	///
	/// # Example
	///
	/// ```
	/// use bst_slab::Map;
	///
	/// let mut a: Map<_, _> = vec![(1, 'a'), (2, 'b')].into_iter().collect();
	/// let b: Map<_, _> = vec![(2, 'x'), (3, 'c')].into_iter().collect();
	/// a.merge(&b);
	/// assert_eq!(a.iter().collect::<Vec<_>>(), [(&1, &'a'), (&2, &'b'), (&3, &'c')]);
	/// assert_eq!(b.len(), 2);
	/// ```
	pub fn merge<D: Slab<Node<Item<K, V>>>>(&mut self, other: &Map<K, V, D>)
	where
		K: Ord + Clone,
		V: Clone,
		D: SimpleCollectionRef,
	{
		let before = self.len();
		for (key, value) in other {
			self.insert(key.clone(), value.clone());
		}

		tracing::debug!(
			inserted = self.len() - before,
			skipped = other.len() + before - self.len(),
			"merged map"
		);
	}

	/// Gets a mutable iterator over the entries of the map, sorted by key.
	///
	/// # Example
	///
	/// ```
	/// use bst_slab::Map;
	///
	/// let mut map = Map::new();
	/// map.insert("a", 1);
	/// map.insert("b", 2);
	/// map.insert("c", 3);
	///
	/// // add 10 to the value if the key isn't "a"
	/// for (key, value) in map.iter_mut() {
	///     if key != &"a" {
	///         *value += 10;
	///     }
	/// }
	/// assert_eq!(map[&"c"], 13);
	/// ```
	#[inline]
	pub fn iter_mut(&mut self) -> IterMut<K, V, C> {
		IterMut {
			front: self.tree.first_position(),
			back: self.tree.last_position(),
			len: self.tree.len(),
			tree: &mut self.tree,
		}
	}

	/// Gets a mutable iterator over the values of the map, in order by key.
	#[inline]
	pub fn values_mut(&mut self) -> ValuesMut<K, V, C> {
		ValuesMut {
			inner: self.iter_mut(),
		}
	}
}

impl<K, V, C: Default> Default for Map<K, V, C> {
	#[inline]
	fn default() -> Self {
		Map::new()
	}
}

impl<K: Clone + Ord, V: Clone, C: SlabMut<Node<Item<K, V>>>> Clone for Map<K, V, C>
where
	C: Default + SimpleCollectionRef + SimpleCollectionMut,
{
	#[inline]
	fn clone(&self) -> Self {
		Map {
			tree: self.tree.clone(),
		}
	}
}

impl<K: fmt::Debug, V: fmt::Debug, C: Slab<Node<Item<K, V>>>> fmt::Debug for Map<K, V, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

impl<K: Ord, Q: ?Sized, V, C: Slab<Node<Item<K, V>>>> Index<&Q> for Map<K, V, C>
where
	K: Borrow<Q>,
	Q: Ord,
	C: SimpleCollectionRef,
{
	type Output = V;

	/// Returns a reference to the value corresponding to the supplied key.
	///
	/// # Panics
	///
	/// Panics if the key is not present in the `Map`.
	#[inline]
	fn index(&self, key: &Q) -> &V {
		self.get(key).expect("no entry found for key")
	}
}

impl<K, L: PartialEq<K>, V, W: PartialEq<V>, C: Slab<Node<Item<K, V>>>, D: Slab<Node<Item<L, W>>>>
	PartialEq<Map<L, W, D>> for Map<K, V, C>
where
	C: SimpleCollectionRef,
	D: SimpleCollectionRef,
{
	fn eq(&self, other: &Map<L, W, D>) -> bool {
		self.len() == other.len()
			&& self
				.iter()
				.zip(other.iter())
				.all(|((k, v), (l, w))| l == k && w == v)
	}
}

impl<K: Eq, V: Eq, C: Slab<Node<Item<K, V>>>> Eq for Map<K, V, C> where C: SimpleCollectionRef {}

impl<K: PartialOrd, V: PartialOrd, C: Slab<Node<Item<K, V>>>> PartialOrd for Map<K, V, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		self.iter().partial_cmp(other.iter())
	}
}

impl<K: Ord, V: Ord, C: Slab<Node<Item<K, V>>>> Ord for Map<K, V, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn cmp(&self, other: &Self) -> Ordering {
		self.iter().cmp(other.iter())
	}
}

impl<K: Hash, V: Hash, C: Slab<Node<Item<K, V>>>> Hash for Map<K, V, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn hash<H: Hasher>(&self, h: &mut H) {
		for (k, v) in self {
			k.hash(h);
			v.hash(h);
		}
	}
}

/// Pairs are inserted in order with [`Map::insert`]:
/// the first value given for a key is kept.
impl<K: Ord, V, C: SlabMut<Node<Item<K, V>>> + Default> FromIterator<(K, V)> for Map<K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn from_iter<T>(iter: T) -> Map<K, V, C>
	where
		T: IntoIterator<Item = (K, V)>,
	{
		let mut map = Map::new();
		map.extend(iter);
		map
	}
}

impl<K: Ord, V, C: SlabMut<Node<Item<K, V>>>> Extend<(K, V)> for Map<K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn extend<T>(&mut self, iter: T)
	where
		T: IntoIterator<Item = (K, V)>,
	{
		for (key, value) in iter {
			self.insert(key, value);
		}
	}
}

pub struct Iter<'a, K, V, C> {
	inner: tree::Iter<'a, Item<K, V>, C>,
}

impl<'a, K, V, C: Slab<Node<Item<K, V>>>> Iterator for Iter<'a, K, V, C>
where
	C: SimpleCollectionRef,
{
	type Item = (&'a K, &'a V);

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}

	#[inline]
	fn next(&mut self) -> Option<(&'a K, &'a V)> {
		self.inner.next().map(|(item, _)| item.as_pair())
	}
}

impl<'a, K, V, C: Slab<Node<Item<K, V>>>> DoubleEndedIterator for Iter<'a, K, V, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
		self.inner.next_back().map(|(item, _)| item.as_pair())
	}
}

impl<'a, K, V, C: Slab<Node<Item<K, V>>>> FusedIterator for Iter<'a, K, V, C> where C: SimpleCollectionRef {}
impl<'a, K, V, C: Slab<Node<Item<K, V>>>> ExactSizeIterator for Iter<'a, K, V, C> where C: SimpleCollectionRef {}

impl<'a, K, V, C: Slab<Node<Item<K, V>>>> IntoIterator for &'a Map<K, V, C>
where
	C: SimpleCollectionRef,
{
	type IntoIter = Iter<'a, K, V, C>;
	type Item = (&'a K, &'a V);

	#[inline]
	fn into_iter(self) -> Iter<'a, K, V, C> {
		self.iter()
	}
}

pub struct IterMut<'a, K, V, C> {
	/// The tree reference.
	tree: &'a mut Tree<Item<K, V>, C>,

	/// Position of the next item.
	front: Position,

	/// Position of the last item not yet yielded.
	back: Position,

	len: usize,
}

impl<'a, K, V, C: SlabMut<Node<Item<K, V>>>> IterMut<'a, K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn item_mut(&mut self, pos: Position) -> Option<&'a mut Item<K, V>> {
		let item: *mut Item<K, V> = self.tree.item_mut(pos.id()?)?;
		// Each position is yielded once, so no two references to the same item are emitted.
		Some(unsafe { &mut *item })
	}
}

impl<'a, K, V, C: SlabMut<Node<Item<K, V>>>> Iterator for IterMut<'a, K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	type Item = (&'a K, &'a mut V);

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.len, Some(self.len))
	}

	#[inline]
	fn next(&mut self) -> Option<(&'a K, &'a mut V)> {
		if self.len == 0 {
			return None;
		}

		let pos = self.front;
		self.front = self.tree.next_position(pos);
		self.len -= 1;
		self.item_mut(pos).map(Item::as_pair_mut)
	}
}

impl<'a, K, V, C: SlabMut<Node<Item<K, V>>>> DoubleEndedIterator for IterMut<'a, K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn next_back(&mut self) -> Option<(&'a K, &'a mut V)> {
		if self.len == 0 {
			return None;
		}

		let pos = self.back;
		self.back = self.tree.previous_position(pos);
		self.len -= 1;
		self.item_mut(pos).map(Item::as_pair_mut)
	}
}

impl<'a, K, V, C: SlabMut<Node<Item<K, V>>>> FusedIterator for IterMut<'a, K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
}

impl<'a, K, V, C: SlabMut<Node<Item<K, V>>>> ExactSizeIterator for IterMut<'a, K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
}

impl<'a, K, V, C: SlabMut<Node<Item<K, V>>>> IntoIterator for &'a mut Map<K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	type IntoIter = IterMut<'a, K, V, C>;
	type Item = (&'a K, &'a mut V);

	#[inline]
	fn into_iter(self) -> IterMut<'a, K, V, C> {
		self.iter_mut()
	}
}

/// An owning iterator over the entries of a [`Map`].
///
/// Entries are removed from the tree as they are yielded.
pub struct IntoIter<K, V, C> {
	tree: Tree<Item<K, V>, C>,
}

impl<K, V, C: SlabMut<Node<Item<K, V>>>> Iterator for IntoIter<K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	type Item = (K, V);

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.tree.len();
		(len, Some(len))
	}

	#[inline]
	fn next(&mut self) -> Option<(K, V)> {
		self.tree.pop_first().map(Item::into_pair)
	}
}

impl<K, V, C: SlabMut<Node<Item<K, V>>>> DoubleEndedIterator for IntoIter<K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn next_back(&mut self) -> Option<(K, V)> {
		self.tree.pop_last().map(Item::into_pair)
	}
}

impl<K, V, C: SlabMut<Node<Item<K, V>>>> FusedIterator for IntoIter<K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
}

impl<K, V, C: SlabMut<Node<Item<K, V>>>> ExactSizeIterator for IntoIter<K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
}

impl<K, V, C: SlabMut<Node<Item<K, V>>>> IntoIterator for Map<K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	type IntoIter = IntoIter<K, V, C>;
	type Item = (K, V);

	#[inline]
	fn into_iter(self) -> IntoIter<K, V, C> {
		IntoIter { tree: self.tree }
	}
}

pub struct Keys<'a, K, V, C> {
	inner: Iter<'a, K, V, C>,
}

impl<'a, K, V, C: Slab<Node<Item<K, V>>>> Iterator for Keys<'a, K, V, C>
where
	C: SimpleCollectionRef,
{
	type Item = &'a K;

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}

	#[inline]
	fn next(&mut self) -> Option<&'a K> {
		self.inner.next().map(|(k, _)| k)
	}
}

impl<'a, K, V, C: Slab<Node<Item<K, V>>>> DoubleEndedIterator for Keys<'a, K, V, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn next_back(&mut self) -> Option<&'a K> {
		self.inner.next_back().map(|(k, _)| k)
	}
}

impl<'a, K, V, C: Slab<Node<Item<K, V>>>> FusedIterator for Keys<'a, K, V, C> where C: SimpleCollectionRef {}
impl<'a, K, V, C: Slab<Node<Item<K, V>>>> ExactSizeIterator for Keys<'a, K, V, C> where C: SimpleCollectionRef {}

pub struct Values<'a, K, V, C> {
	inner: Iter<'a, K, V, C>,
}

impl<'a, K, V, C: Slab<Node<Item<K, V>>>> Iterator for Values<'a, K, V, C>
where
	C: SimpleCollectionRef,
{
	type Item = &'a V;

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}

	#[inline]
	fn next(&mut self) -> Option<&'a V> {
		self.inner.next().map(|(_, v)| v)
	}
}

impl<'a, K, V, C: Slab<Node<Item<K, V>>>> DoubleEndedIterator for Values<'a, K, V, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn next_back(&mut self) -> Option<&'a V> {
		self.inner.next_back().map(|(_, v)| v)
	}
}

impl<'a, K, V, C: Slab<Node<Item<K, V>>>> FusedIterator for Values<'a, K, V, C> where C: SimpleCollectionRef {}
impl<'a, K, V, C: Slab<Node<Item<K, V>>>> ExactSizeIterator for Values<'a, K, V, C> where C: SimpleCollectionRef {}

pub struct ValuesMut<'a, K, V, C> {
	inner: IterMut<'a, K, V, C>,
}

impl<'a, K, V, C: SlabMut<Node<Item<K, V>>>> Iterator for ValuesMut<'a, K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	type Item = &'a mut V;

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}

	#[inline]
	fn next(&mut self) -> Option<&'a mut V> {
		self.inner.next().map(|(_, v)| v)
	}
}

impl<'a, K, V, C: SlabMut<Node<Item<K, V>>>> DoubleEndedIterator for ValuesMut<'a, K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn next_back(&mut self) -> Option<&'a mut V> {
		self.inner.next_back().map(|(_, v)| v)
	}
}

impl<'a, K, V, C: SlabMut<Node<Item<K, V>>>> FusedIterator for ValuesMut<'a, K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
}

impl<'a, K, V, C: SlabMut<Node<Item<K, V>>>> ExactSizeIterator for ValuesMut<'a, K, V, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
}
