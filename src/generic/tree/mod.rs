use crate::{
	generic::node::{Node, Payload, Side},
	Queue,
};
use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, Slab, SlabMut};
use std::{
	borrow::Borrow,
	cmp::Ordering,
	iter::{DoubleEndedIterator, ExactSizeIterator, FusedIterator},
	marker::PhantomData,
	mem,
};

mod addr;

pub use addr::Position;

/// Unbalanced binary search tree.
///
/// This is the engine shared by [`Map`](crate::generic::Map),
/// [`Set`](crate::generic::Set) and [`Multiset`](crate::generic::Multiset).
/// Each node holds a payload `T` standing for [`Payload::weight`] elements
/// of the container. Payload keys are unique in the tree.
///
/// Nodes are allocated in a slab `C` and refer to each other by id.
/// Every node knows its parent, so the tree can be traversed in order
/// without any auxiliary stack.
///
/// No rebalancing is ever performed: the depth of the tree depends on the
/// insertion order and can degrade to the number of nodes.
pub struct Tree<T, C> {
	/// Allocated and free nodes.
	nodes: C,

	/// Root node id.
	root: Option<usize>,

	/// Sum of the weights of every payload in the tree.
	len: usize,

	t: PhantomData<T>,
}

impl<T, C> Tree<T, C> {
	/// Create a new empty tree.
	#[inline]
	pub fn new() -> Tree<T, C>
	where
		C: Default,
	{
		Tree {
			nodes: Default::default(),
			root: None,
			len: 0,
			t: PhantomData,
		}
	}

	/// Number of elements in the tree.
	///
	/// This is the sum of the payload weights, not the number of nodes.
	#[inline]
	pub fn len(&self) -> usize {
		self.len
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.root.is_none()
	}

	/// Get the root node id.
	///
	/// Returns `None` if the tree is empty.
	#[inline]
	pub fn root_id(&self) -> Option<usize> {
		self.root
	}

	/// Theoretical maximum number of nodes.
	#[inline]
	pub fn max_size(&self) -> usize {
		usize::MAX / mem::size_of::<Node<T>>().max(1)
	}

	#[inline]
	pub fn swap(&mut self, other: &mut Self) {
		mem::swap(self, other)
	}
}

impl<T: Payload, C: Slab<Node<T>>> Tree<T, C>
where
	C: SimpleCollectionRef,
{
	/// Get the node associated to the given `id`.
	///
	/// Returns `None` if no node is allocated under this id.
	#[inline]
	pub fn node(&self, id: usize) -> Option<&Node<T>> {
		self.nodes.get(id).map(|n| C::into_ref(n))
	}

	/// Get a node linked to the tree.
	///
	/// Panics if the node is missing, which would be a broken invariant.
	#[inline]
	fn linked(&self, id: usize) -> &Node<T> {
		self.node(id).expect("dangling node id")
	}

	#[inline]
	pub fn item(&self, id: usize) -> Option<&T> {
		self.node(id).map(Node::item)
	}

	/// Id of the leftmost node of the subtree rooted in `id`.
	#[inline]
	pub fn leftmost(&self, mut id: usize) -> usize {
		while let Some(left) = self.linked(id).left() {
			id = left
		}

		id
	}

	/// Id of the rightmost node of the subtree rooted in `id`.
	#[inline]
	pub fn rightmost(&self, mut id: usize) -> usize {
		while let Some(right) = self.linked(id).right() {
			id = right
		}

		id
	}

	#[inline]
	pub fn first_id(&self) -> Option<usize> {
		self.root.map(|root| self.leftmost(root))
	}

	#[inline]
	pub fn last_id(&self) -> Option<usize> {
		self.root.map(|root| self.rightmost(root))
	}

	/// In-order successor of the node `id`.
	pub fn next_node(&self, id: usize) -> Option<usize> {
		let node = self.linked(id);
		match node.right() {
			Some(right) => Some(self.leftmost(right)),
			None => {
				let mut child = id;
				let mut parent = node.parent();
				while let Some(p) = parent {
					let parent_node = self.linked(p);
					if parent_node.left() == Some(child) {
						return Some(p);
					}

					child = p;
					parent = parent_node.parent();
				}

				None
			}
		}
	}

	/// In-order predecessor of the node `id`.
	pub fn previous_node(&self, id: usize) -> Option<usize> {
		let node = self.linked(id);
		match node.left() {
			Some(left) => Some(self.rightmost(left)),
			None => {
				let mut child = id;
				let mut parent = node.parent();
				while let Some(p) = parent {
					let parent_node = self.linked(p);
					if parent_node.right() == Some(child) {
						return Some(p);
					}

					child = p;
					parent = parent_node.parent();
				}

				None
			}
		}
	}

	/// Position of the first occurrence held by the node `id`.
	#[inline]
	pub fn position_of(&self, id: usize) -> Position {
		Position::new(id, self.linked(id).item().weight())
	}

	/// Position of the first element, or the end position if the tree is empty.
	#[inline]
	pub fn first_position(&self) -> Position {
		match self.first_id() {
			Some(id) => self.position_of(id),
			None => Position::end(),
		}
	}

	/// Position of the last element, or the end position if the tree is empty.
	#[inline]
	pub fn last_position(&self) -> Position {
		match self.last_id() {
			Some(id) => Position::single(id),
			None => Position::end(),
		}
	}

	/// Checks that the position refers to an element of the tree.
	#[inline]
	pub fn is_valid(&self, pos: Position) -> bool {
		self.item_at(pos).is_some()
	}

	/// Position following `pos`.
	///
	/// The position following the last element is the end position,
	/// and the end position is followed by itself.
	pub fn next_position(&self, pos: Position) -> Position {
		let id = match pos.id() {
			Some(id) if self.is_valid(pos) => id,
			_ => return Position::end(),
		};

		if pos.remaining() > 1 {
			Position::new(id, pos.remaining() - 1)
		} else {
			match self.next_node(id) {
				Some(next) => self.position_of(next),
				None => Position::end(),
			}
		}
	}

	/// Position preceding `pos`.
	///
	/// The end position is preceded by the last element.
	/// Stepping back from the first element gives the end position.
	pub fn previous_position(&self, pos: Position) -> Position {
		let id = match pos.id() {
			None => return self.last_position(),
			Some(id) if self.is_valid(pos) => id,
			Some(_) => return Position::end(),
		};

		if pos.remaining() < self.linked(id).item().weight() {
			Position::new(id, pos.remaining() + 1)
		} else {
			match self.previous_node(id) {
				Some(previous) => Position::single(previous),
				None => Position::end(),
			}
		}
	}

	/// Payload at the given position, with the index of the designated
	/// occurrence in the payload.
	///
	/// Returns `None` for the end position and for stale positions.
	#[inline]
	pub fn item_at(&self, pos: Position) -> Option<(&T, usize)> {
		let item = self.item(pos.id()?)?;
		let weight = item.weight();
		if pos.remaining() >= 1 && pos.remaining() <= weight {
			Some((item, weight - pos.remaining()))
		} else {
			None
		}
	}

	/// Search for a key.
	///
	/// Returns `Ok(id)` with the id of the node holding the key if any,
	/// or `Err(parent)` with the id of the last visited node,
	/// which is where a node with this key would be attached.
	/// The parent is `None` only if the tree is empty.
	pub fn locate<Q: ?Sized>(&self, key: &Q) -> Result<usize, Option<usize>>
	where
		T::Key: Borrow<Q>,
		Q: Ord,
	{
		let mut current = self.root;
		let mut parent = None;
		while let Some(id) = current {
			let node = self.linked(id);
			current = match key.cmp(node.item().key().borrow()) {
				Ordering::Equal => return Ok(id),
				Ordering::Less => node.left(),
				Ordering::Greater => node.right(),
			};
			parent = Some(id);
		}

		Err(parent)
	}

	/// Id of the node holding `key`, if any.
	#[inline]
	pub fn find<Q: ?Sized>(&self, key: &Q) -> Option<usize>
	where
		T::Key: Borrow<Q>,
		Q: Ord,
	{
		self.locate(key).ok()
	}

	/// Position of the first element not less than `key`.
	pub fn lower_bound<Q: ?Sized>(&self, key: &Q) -> Position
	where
		T::Key: Borrow<Q>,
		Q: Ord,
	{
		let mut current = self.root;
		let mut bound = None;
		while let Some(id) = current {
			let node = self.linked(id);
			current = match key.cmp(node.item().key().borrow()) {
				Ordering::Greater => node.right(),
				_ => {
					bound = Some(id);
					node.left()
				}
			}
		}

		bound.map(|id| self.position_of(id)).unwrap_or_default()
	}

	/// Position of the first element greater than `key`.
	pub fn upper_bound<Q: ?Sized>(&self, key: &Q) -> Position
	where
		T::Key: Borrow<Q>,
		Q: Ord,
	{
		let mut current = self.root;
		let mut bound = None;
		while let Some(id) = current {
			let node = self.linked(id);
			current = match key.cmp(node.item().key().borrow()) {
				Ordering::Less => {
					bound = Some(id);
					node.left()
				}
				_ => node.right(),
			}
		}

		bound.map(|id| self.position_of(id)).unwrap_or_default()
	}

	/// Iterates over every element, yielding each payload once per occurrence
	/// along with the occurrence index.
	#[inline]
	pub fn iter(&self) -> Iter<T, C> {
		Iter {
			tree: self,
			front: self.first_position(),
			back: self.last_position(),
			len: self.len,
		}
	}

	/// Checks the structural invariants of the tree.
	///
	/// Panics if the keys are not ordered, if a parent link is inconsistent,
	/// or if the length does not match the payload weights.
	pub fn validate(&self)
	where
		T::Key: Ord,
	{
		let mut count = 0;

		if let Some(root) = self.root {
			assert!(self.linked(root).parent().is_none(), "root has a parent");

			let mut stack: Vec<(usize, Option<&T::Key>, Option<&T::Key>)> = vec![(root, None, None)];
			while let Some((id, min, max)) = stack.pop() {
				let node = self.linked(id);
				let key = node.item().key();

				if let Some(min) = min {
					assert!(min < key, "node {} is not ordered after its left ancestors", id);
				}

				if let Some(max) = max {
					assert!(key < max, "node {} is not ordered before its right ancestors", id);
				}

				let weight = node.item().weight();
				assert!(weight > 0, "node {} is empty", id);
				count += weight;
				assert!(count <= self.len, "tree is longer than its length");

				if let Some(left) = node.left() {
					assert_eq!(self.linked(left).parent(), Some(id), "broken parent link");
					stack.push((left, min, Some(key)))
				}

				if let Some(right) = node.right() {
					assert_eq!(self.linked(right).parent(), Some(id), "broken parent link");
					stack.push((right, Some(key), max))
				}
			}
		}

		assert_eq!(count, self.len, "tree is shorter than its length");
	}

	/// Write the tree in the DOT graph description language.
	///
	/// Requires the `dot` feature.
	#[cfg(feature = "dot")]
	#[inline]
	pub fn dot_write<W: std::io::Write>(&self, f: &mut W) -> std::io::Result<()>
	where
		T::Key: std::fmt::Display,
	{
		write!(f, "digraph tree {{\n\tnode [shape=record];\n")?;
		if let Some(id) = self.root {
			self.dot_write_node(f, id)?
		}
		write!(f, "}}")
	}

	/// Write the given node in the DOT graph description language.
	///
	/// Requires the `dot` feature.
	#[cfg(feature = "dot")]
	fn dot_write_node<W: std::io::Write>(&self, f: &mut W, id: usize) -> std::io::Result<()>
	where
		T::Key: std::fmt::Display,
	{
		let name = format!("n{}", id);
		let node = self.linked(id);

		write!(f, "\t{} [label=\"", name)?;
		if let Some(parent) = node.parent() {
			write!(f, "({})|", parent)?;
		}

		node.dot_write_label(f)?;
		writeln!(f, "({})\"];", id)?;

		for child_id in node.left().into_iter().chain(node.right()) {
			self.dot_write_node(f, child_id)?;
			writeln!(f, "\t{} -> n{}", name, child_id)?;
		}

		Ok(())
	}
}

impl<T: Payload, C: SlabMut<Node<T>>> Tree<T, C>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	/// Removes every node.
	#[inline]
	pub fn clear(&mut self)
	where
		C: cc_traits::Clear,
	{
		self.root = None;
		self.len = 0;
		self.nodes.clear()
	}

	#[inline]
	pub fn node_mut(&mut self, id: usize) -> Option<&mut Node<T>> {
		self.nodes.get_mut(id).map(|n| C::into_mut(n))
	}

	#[inline]
	fn linked_mut(&mut self, id: usize) -> &mut Node<T> {
		self.node_mut(id).expect("dangling node id")
	}

	/// Mutable access to a payload.
	///
	/// It is a logic error to change the key or the weight of the payload.
	/// Use [`update`](Tree::update) to change the weight.
	#[inline]
	pub fn item_mut(&mut self, id: usize) -> Option<&mut T> {
		self.node_mut(id).map(Node::item_mut)
	}

	/// Modifies a payload in place, keeping the tree length in sync with
	/// its weight.
	///
	/// Panics if the payload is left empty.
	pub fn update<F, R>(&mut self, id: usize, f: F) -> Option<R>
	where
		F: FnOnce(&mut T) -> R,
	{
		let item = self.item_mut(id)?;
		let old_weight = item.weight();
		let result = f(item);
		let new_weight = item.weight();
		assert!(new_weight > 0, "empty payload");
		self.len = self.len - old_weight + new_weight;
		Some(result)
	}

	#[inline]
	fn allocate_node(&mut self, node: Node<T>) -> usize {
		self.nodes.insert(node)
	}

	#[inline]
	fn release_node(&mut self, id: usize) -> Node<T> {
		self.nodes.remove(id).expect("dangling node id")
	}

	/// Attaches a new node holding `item` under `parent`.
	///
	/// The node becomes the left child of `parent` if its key is lower,
	/// the right child otherwise. The parent slot must be free, as returned by
	/// [`locate`](Tree::locate). With no parent, the node becomes the root of
	/// the empty tree.
	pub fn attach(&mut self, parent: Option<usize>, item: T) -> usize
	where
		T::Key: Ord,
	{
		let weight = item.weight();
		let side = parent.map(|p| {
			if item.key() < self.linked(p).item().key() {
				Side::Left
			} else {
				Side::Right
			}
		});

		let id = self.allocate_node(Node::new(parent, item));
		match (parent, side) {
			(Some(p), Some(side)) => {
				let parent_node = self.linked_mut(p);
				assert!(parent_node.child(side).is_none(), "occupied child slot");
				parent_node.set_child(side, Some(id))
			}
			_ => {
				assert!(self.root.is_none(), "tree already has a root");
				self.root = Some(id)
			}
		}

		self.len += weight;
		tracing::trace!(id, ?parent, ?side, "attached node");
		id
	}

	/// Inserts a payload whose key is not yet in the tree.
	///
	/// Returns the id of the new node, or gives back the payload along with
	/// the id of the node already holding its key.
	#[inline]
	pub fn insert_unique(&mut self, item: T) -> Result<usize, (usize, T)>
	where
		T::Key: Ord,
	{
		match self.locate(item.key()) {
			Ok(id) => Err((id, item)),
			Err(parent) => Ok(self.attach(parent, item)),
		}
	}

	/// Replaces the node `id` by `child` in its parent's slot.
	fn splice(&mut self, id: usize, child: Option<usize>) {
		let parent = self.linked(id).parent();
		match parent {
			Some(p) => {
				let side = self.linked(p).side_of(id).expect("broken parent link");
				self.linked_mut(p).set_child(side, child)
			}
			None => self.root = child,
		}

		if let Some(child) = child {
			self.linked_mut(child).set_parent(parent)
		}
	}

	/// Removes the node `id` and returns its payload.
	///
	/// A node with two children takes the payload of its in-order predecessor,
	/// and it is the predecessor slot that is released.
	///
	/// Returns `None` if no node is allocated under this id.
	pub fn remove_node(&mut self, id: usize) -> Option<T> {
		let node = self.node(id)?;
		let item = match (node.left(), node.right()) {
			(None, None) => {
				tracing::trace!(id, "removing leaf");
				self.splice(id, None);
				self.release_node(id).into_item()
			}
			(Some(child), None) | (None, Some(child)) => {
				tracing::trace!(id, child, "removing node with a single child");
				self.splice(id, Some(child));
				self.release_node(id).into_item()
			}
			(Some(left), Some(_)) => {
				let predecessor = self.rightmost(left);
				tracing::trace!(id, predecessor, "removing node with two children");
				let predecessor_left = self.linked(predecessor).left();
				self.splice(predecessor, predecessor_left);
				let mut item = self.release_node(predecessor).into_item();
				mem::swap(self.linked_mut(id).item_mut(), &mut item);
				item
			}
		};

		self.len -= item.weight();
		Some(item)
	}

	/// Removes the first node.
	#[inline]
	pub fn pop_first(&mut self) -> Option<T> {
		let id = self.first_id()?;
		self.remove_node(id)
	}

	/// Removes the last node.
	#[inline]
	pub fn pop_last(&mut self) -> Option<T> {
		let id = self.last_id()?;
		self.remove_node(id)
	}
}

impl<T, C: Default> Default for Tree<T, C> {
	#[inline]
	fn default() -> Self {
		Tree::new()
	}
}

/// Deep copy.
///
/// The nodes are copied breadth-first and re-inserted in the new tree,
/// which then has the same shape as the source tree.
impl<T: Payload + Clone, C: SlabMut<Node<T>>> Clone for Tree<T, C>
where
	T::Key: Ord,
	C: Default + SimpleCollectionRef + SimpleCollectionMut,
{
	fn clone(&self) -> Self {
		let mut copy = Tree::new();

		let mut queue = Queue::new();
		queue.insert_many_back(self.root);
		while let Some(id) = queue.pop() {
			let node = self.linked(id);
			let item = node.item().clone();
			if let Err(parent) = copy.locate(item.key()) {
				copy.attach(parent, item);
			}

			queue.insert_many_back(node.left().into_iter().chain(node.right()));
		}

		tracing::trace!(len = copy.len, "copied tree");
		copy
	}
}

/// Iterator over the elements of a tree.
///
/// Each payload is yielded once per occurrence, along with the index of the
/// occurrence.
pub struct Iter<'a, T, C> {
	tree: &'a Tree<T, C>,

	/// Position of the next element.
	front: Position,

	/// Position of the last element not yet yielded.
	back: Position,

	/// Remaining elements.
	len: usize,
}

impl<'a, T: Payload, C: Slab<Node<T>>> Iterator for Iter<'a, T, C>
where
	C: SimpleCollectionRef,
{
	type Item = (&'a T, usize);

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.len, Some(self.len))
	}

	#[inline]
	fn next(&mut self) -> Option<(&'a T, usize)> {
		if self.len == 0 {
			return None;
		}

		let tree = self.tree;
		let result = tree.item_at(self.front)?;
		self.front = tree.next_position(self.front);
		self.len -= 1;
		Some(result)
	}
}

impl<'a, T: Payload, C: Slab<Node<T>>> DoubleEndedIterator for Iter<'a, T, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn next_back(&mut self) -> Option<(&'a T, usize)> {
		if self.len == 0 {
			return None;
		}

		let tree = self.tree;
		let result = tree.item_at(self.back)?;
		self.back = tree.previous_position(self.back);
		self.len -= 1;
		Some(result)
	}
}

impl<'a, T: Payload, C: Slab<Node<T>>> ExactSizeIterator for Iter<'a, T, C> where C: SimpleCollectionRef {}

impl<'a, T: Payload, C: Slab<Node<T>>> FusedIterator for Iter<'a, T, C> where C: SimpleCollectionRef {}

impl<'a, T, C> Clone for Iter<'a, T, C> {
	#[inline]
	fn clone(&self) -> Self {
		Iter {
			tree: self.tree,
			front: self.front,
			back: self.back,
			len: self.len,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::generic::node::{Item, Keyed, Run};

	type SetTree = Tree<Item<i32, ()>, slab::Slab<Node<Item<i32, ()>>>>;
	type RunTree = Tree<Run<i32>, slab::Slab<Node<Run<i32>>>>;

	fn set_tree(keys: &[i32]) -> SetTree {
		let mut tree = SetTree::new();
		for &key in keys {
			tree.insert_unique(Item::new(key, ())).unwrap();
		}
		tree.validate();
		tree
	}

	fn keys(tree: &SetTree) -> Vec<i32> {
		tree.iter().map(|(item, _)| *item.key()).collect()
	}

	/// Checks that every key is found again by descending from the root.
	fn check_reachable(tree: &SetTree) {
		for key in keys(tree) {
			let id = tree.find(&key).unwrap();
			assert_eq!(*tree.item(id).unwrap().key(), key);
		}
	}

	#[test]
	fn attach_side() {
		let tree = set_tree(&[8, 3, 10]);
		let root = tree.root_id().unwrap();
		let node = tree.node(root).unwrap();
		assert_eq!(*tree.item(node.left().unwrap()).unwrap().key(), 3);
		assert_eq!(*tree.item(node.right().unwrap()).unwrap().key(), 10);
	}

	#[test]
	fn locate_returns_parent() {
		let tree = set_tree(&[8, 3, 10]);
		let three = tree.find(&3).unwrap();
		assert_eq!(tree.locate(&1), Err(Some(three)));
		assert_eq!(SetTree::new().locate(&1), Err(None));
	}

	#[test]
	fn remove_leaf() {
		let mut tree = set_tree(&[8, 3, 10, 6, 1, 4]);
		let id = tree.find(&4).unwrap();
		assert_eq!(*tree.remove_node(id).unwrap().key(), 4);
		tree.validate();
		assert_eq!(keys(&tree), [1, 3, 6, 8, 10]);
		check_reachable(&tree);
	}

	#[test]
	fn remove_left_only() {
		let mut tree = set_tree(&[8, 3, 10, 6, 1, 4]);
		let id = tree.find(&6).unwrap();
		tree.remove_node(id);
		tree.validate();
		assert_eq!(keys(&tree), [1, 3, 4, 8, 10]);
		check_reachable(&tree);
	}

	#[test]
	fn remove_right_only() {
		let mut tree = set_tree(&[8, 3, 10, 14, 13]);
		let id = tree.find(&10).unwrap();
		tree.remove_node(id);
		tree.validate();
		assert_eq!(keys(&tree), [3, 8, 13, 14]);
		check_reachable(&tree);
	}

	#[test]
	fn remove_two_children() {
		let mut tree = set_tree(&[8, 3, 10, 6, 1, 4]);
		let id = tree.find(&3).unwrap();
		assert_eq!(*tree.remove_node(id).unwrap().key(), 3);
		tree.validate();
		assert_eq!(keys(&tree), [1, 4, 6, 8, 10]);
		assert_eq!(tree.len(), 5);
		check_reachable(&tree);

		// The predecessor payload moved into the node.
		assert_eq!(*tree.item(id).unwrap().key(), 1);
	}

	#[test]
	fn remove_two_children_with_left_predecessor() {
		let mut tree = set_tree(&[8, 3, 10, 1, 6, 4, 5]);
		let six = tree.find(&6).unwrap();
		assert!(tree.node(six).unwrap().right().is_none());
		let four = tree.node(six).unwrap().left().unwrap();

		let id = tree.find(&8).unwrap();
		assert_eq!(*tree.remove_node(id).unwrap().key(), 8);
		tree.validate();
		assert_eq!(keys(&tree), [1, 3, 4, 5, 6, 10]);
		assert_eq!(tree.len(), 6);
		check_reachable(&tree);

		// 6 moved into the root and its left child took its place under 3.
		assert_eq!(*tree.item(id).unwrap().key(), 6);
		let three = tree.find(&3).unwrap();
		assert_eq!(tree.node(three).unwrap().right(), Some(four));
		assert!(tree.node(six).is_none());
	}

	#[test]
	fn remove_root() {
		let mut tree = set_tree(&[8]);
		let id = tree.root_id().unwrap();
		tree.remove_node(id);
		tree.validate();
		assert!(tree.is_empty());
		assert_eq!(tree.len(), 0);
		assert!(tree.remove_node(id).is_none());
	}

	#[test]
	fn step_through_runs() {
		let mut tree = RunTree::new();
		for value in [5, 1, 7, 5, 5] {
			match tree.locate(&value) {
				Ok(id) => {
					tree.update(id, |run| run.push(value));
				}
				Err(parent) => {
					tree.attach(parent, Run::new(value));
				}
			}
		}
		tree.validate();
		assert_eq!(tree.len(), 5);

		let mut forward = Vec::new();
		let mut pos = tree.first_position();
		while !pos.is_end() {
			let (run, index) = tree.item_at(pos).unwrap();
			forward.push((*run.key(), index));
			pos = tree.next_position(pos);
		}
		assert_eq!(forward, [(1, 0), (5, 0), (5, 1), (5, 2), (7, 0)]);

		let mut backward = Vec::new();
		let mut pos = tree.previous_position(Position::end());
		while !pos.is_end() {
			let (run, index) = tree.item_at(pos).unwrap();
			backward.push((*run.key(), index));
			pos = tree.previous_position(pos);
		}
		forward.reverse();
		assert_eq!(backward, forward);
	}

	#[test]
	fn bounds() {
		let tree = set_tree(&[8, 3, 10, 6, 1, 4]);
		let key_at = |pos: Position| tree.item_at(pos).map(|(item, _)| *item.key());
		assert_eq!(key_at(tree.lower_bound(&4)), Some(4));
		assert_eq!(key_at(tree.upper_bound(&4)), Some(6));
		assert_eq!(key_at(tree.lower_bound(&5)), Some(6));
		assert_eq!(key_at(tree.lower_bound(&0)), Some(1));
		assert!(tree.upper_bound(&10).is_end());
	}

	#[test]
	fn stale_position() {
		let mut tree = set_tree(&[8, 3]);
		let pos = tree.position_of(tree.find(&3).unwrap());
		tree.remove_node(pos.id().unwrap());
		assert!(tree.item_at(pos).is_none());
		assert!(tree.next_position(pos).is_end());
	}

	#[test]
	fn clone_keeps_shape() {
		let tree = set_tree(&[8, 3, 10, 6, 1, 4]);
		let copy = tree.clone();
		copy.validate();
		assert_eq!(keys(&copy), keys(&tree));

		let root = copy.root_id().unwrap();
		assert_eq!(*copy.item(root).unwrap().key(), 8);
	}
}
