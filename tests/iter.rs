use bst_slab::{Map, Multiset, Set};
use std::{cell::Cell, rc::Rc};

#[test]
pub fn iter() {
	let mut map = Map::new();
	for i in [5, 2, 8, 0, 3, 9, 1, 7, 4, 6] {
		map.insert(i, i * 10);
	}

	let mut i = 0;
	for (key, value) in &map {
		assert_eq!(*key, i);
		assert_eq!(*value, i * 10);
		i += 1;
	}

	assert_eq!(i, 10)
}

#[test]
pub fn iter_rev() {
	let set: Set<_> = [5, 2, 8, 0, 3].into_iter().collect();
	assert_eq!(set.iter().rev().copied().collect::<Vec<_>>(), [8, 5, 3, 2, 0]);

	let mut iter = set.iter();
	assert_eq!(iter.len(), 5);
	assert_eq!(iter.next(), Some(&0));
	assert_eq!(iter.next_back(), Some(&8));
	assert_eq!(iter.len(), 3);
	assert_eq!(iter.collect::<Vec<_>>(), [&2, &3, &5]);
}

#[test]
pub fn iter_mut() {
	let mut map: Map<i32, i32> = (0..10).map(|i| (i, i)).collect();

	for (key, value) in &mut map {
		*value += key;
	}

	for value in map.values_mut().rev().take(2) {
		*value = -1;
	}

	assert_eq!(
		map.values().copied().collect::<Vec<_>>(),
		[0, 2, 4, 6, 8, 10, 12, 14, -1, -1]
	);
}

#[test]
pub fn keys_and_values() {
	let map: Map<char, usize> = "hello".chars().zip(0..).collect();

	// The first binding of a key is kept.
	assert_eq!(map.keys().copied().collect::<String>(), "ehlo");
	assert_eq!(map.values().copied().collect::<Vec<_>>(), [1, 0, 2, 4]);
}

#[test]
pub fn multiset_iter() {
	let set: Multiset<_> = [3, 1, 3, 2, 1, 3].into_iter().collect();
	assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 1, 2, 3, 3, 3]);
	assert_eq!(set.iter().rev().copied().collect::<Vec<_>>(), [3, 3, 3, 2, 1, 1]);
	assert_eq!(set.iter().len(), 6);
	assert_eq!(set.into_iter().collect::<Vec<_>>(), [1, 1, 2, 3, 3, 3]);
}

#[test]
pub fn multiset_equal_occurrences_keep_insertion_order() {
	/// Ordered on the number only.
	#[derive(Debug)]
	struct Tagged(i32, char);

	impl PartialEq for Tagged {
		fn eq(&self, other: &Tagged) -> bool {
			self.0 == other.0
		}
	}

	impl Eq for Tagged {}

	impl PartialOrd for Tagged {
		fn partial_cmp(&self, other: &Tagged) -> Option<std::cmp::Ordering> {
			Some(self.cmp(other))
		}
	}

	impl Ord for Tagged {
		fn cmp(&self, other: &Tagged) -> std::cmp::Ordering {
			self.0.cmp(&other.0)
		}
	}

	let mut set = Multiset::new();
	for (n, tag) in [(2, 'a'), (1, 'b'), (2, 'c'), (2, 'd')] {
		set.insert(Tagged(n, tag));
	}

	assert_eq!(set.iter().map(|t| t.1).collect::<String>(), "bacd");
	assert_eq!(set.last().map(|t| t.1), Some('d'));
}

struct Element {
	/// Drop counter.
	counter: Rc<Cell<usize>>,
	value: i32,
}

impl Element {
	pub fn new(counter: &Rc<Cell<usize>>, value: i32) -> Self {
		Element {
			counter: counter.clone(),
			value,
		}
	}

	pub fn inner(&self) -> i32 {
		self.value
	}
}

impl Drop for Element {
	fn drop(&mut self) {
		let c = self.counter.get();
		self.counter.set(c + 1);
	}
}

#[test]
pub fn into_iter() {
	let counter = Rc::new(Cell::new(0));
	let mut map = Map::new();
	for i in 0..100 {
		map.insert(i, Element::new(&counter, i));
	}

	for (key, value) in map {
		assert_eq!(key, value.inner());
	}

	assert_eq!(counter.get(), 100);
}

#[test]
pub fn into_iter_rev() {
	let counter = Rc::new(Cell::new(0));
	let mut map = Map::new();
	for i in 0..100 {
		map.insert(i, Element::new(&counter, i));
	}

	for (key, value) in map.into_iter().rev() {
		assert_eq!(key, value.inner());
	}

	assert_eq!(counter.get(), 100);
}

#[test]
pub fn into_iter_drop() {
	let counter = Rc::new(Cell::new(0));
	let mut map = Map::new();
	for i in 0..100 {
		map.insert(i, Element::new(&counter, i));
	}

	let mut i = 0;
	for (key, value) in map {
		assert_eq!(key, value.inner());
		i += 1;
		if i == 50 {
			break;
		}
	}

	assert_eq!(counter.get(), 100);
}

#[test]
pub fn erase_drops_once() {
	let counter = Rc::new(Cell::new(0));
	let mut map = Map::new();
	for i in [4, 2, 6, 1, 3, 5, 7] {
		map.insert(i, Element::new(&counter, i));
	}

	// 4 is the root, with two children.
	let pos = map.find(&4);
	let (key, value) = map.erase(pos).unwrap();
	assert_eq!(key, value.inner());
	drop(value);
	assert_eq!(counter.get(), 1);

	map.validate();
	drop(map);
	assert_eq!(counter.get(), 7);
}
