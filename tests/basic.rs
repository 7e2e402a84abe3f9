use bst_slab::{Error, Map, Set};
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

const SEED: &[u8; 32] = b"testseedtestseedtestseedtestseed";

/// 100 distinct keys in scrambled order, bound to their insertion rank.
fn items() -> Vec<(usize, usize)> {
	(0..100).map(|i| (i * 7919 % 10007, i)).collect()
}

#[test]
pub fn insert() {
	let mut map: Map<usize, usize> = Map::new();

	for (key, value) in items() {
		let (_, inserted) = map.insert(key, value);
		assert!(inserted);
		map.validate();
	}

	assert_eq!(map.len(), 100);
}

#[test]
pub fn remove() {
	let mut map: Map<usize, usize> = Map::new();

	let mut items = items();
	for (key, value) in &items {
		map.insert(*key, *value);
	}

	let mut rng = SmallRng::from_seed(*SEED);
	items.shuffle(&mut rng);

	for (key, value) in &items {
		assert_eq!(map.remove(key), Some(*value));
		map.validate();
	}

	assert!(map.is_empty());
	assert!(map.as_tree().root_id().is_none());
	assert!(map.begin().is_end());
}

#[test]
pub fn positions() {
	let mut map: Map<usize, usize> = Map::new();
	for (key, value) in items() {
		map.insert(key, value);
	}

	for (key, _) in items() {
		let pos = map.find(&key);
		assert_eq!(map.get_at(pos).unwrap().0, &key);

		let before = map.previous_position(pos);
		if !before.is_end() {
			assert!(before != pos);
			assert!(map.get_at(before).unwrap().0 < &key);
			assert_eq!(map.next_position(before), pos)
		}

		let after = map.next_position(pos);
		if !after.is_end() {
			assert!(after != pos);
			assert!(map.get_at(after).unwrap().0 > &key);
			assert_eq!(map.previous_position(after), pos)
		}
	}
}

#[test]
pub fn erase_positions() {
	let mut rng = SmallRng::from_seed(*SEED);

	for k in 1..20 {
		let mut items = items();
		items.truncate(k);

		let mut map: Map<usize, usize> = items.iter().copied().collect();
		items.shuffle(&mut rng);

		for (key, value) in &items {
			let pos = map.find(key);
			assert_eq!(map.erase(pos), Ok((*key, *value)));
			map.validate();
			assert!(map.find(key).is_end());
		}

		assert!(map.is_empty());
		assert_eq!(map.erase(map.begin()), Err(Error::InvalidPosition));
	}
}

#[test]
pub fn in_order_walk_is_increasing() {
	let mut rng = SmallRng::from_seed(*SEED);
	let mut items = items();
	items.shuffle(&mut rng);

	let mut set = Set::new();
	for (key, _) in &items {
		set.insert(*key);
	}

	let keys: Vec<_> = set.iter().copied().collect();
	assert!(keys.windows(2).all(|w| w[0] < w[1]));
	assert_eq!(keys.len(), set.len());
}

#[test]
pub fn len_matches_traversal() {
	let mut rng = SmallRng::from_seed(*SEED);
	let mut set = Set::new();

	for (key, _) in items() {
		set.insert(key % 40);
		assert_eq!(set.iter().count(), set.len());
	}

	let mut keys: Vec<usize> = (0..60).collect();
	keys.shuffle(&mut rng);
	for key in keys {
		set.remove(&key);
		set.validate();
		assert_eq!(set.iter().count(), set.len());
	}

	assert!(set.is_empty());
}

#[test]
pub fn duplicate_insert_keeps_value() {
	let mut map = Map::new();
	map.insert(1, 'a');

	let (pos, inserted) = map.insert(1, 'b');
	assert!(!inserted);
	assert_eq!(map.len(), 1);
	assert_eq!(map.get_at(pos), Ok((&1, &'a')));

	let (pos, assigned) = map.insert_or_assign(1, 'c');
	assert!(assigned);
	assert_eq!(map.len(), 1);
	assert_eq!(map.get_at(pos), Ok((&1, &'c')));

	let mut set = Set::new();
	assert!(set.insert(1).1);
	assert!(!set.insert(1).1);
	assert_eq!(set.len(), 1);
}

#[test]
pub fn erase_node_with_two_children() {
	let mut set: Set<i32> = vec![8, 3, 10, 6, 1, 4].into_iter().collect();

	let pos = set.find(&3);
	assert_eq!(set.erase(pos), Ok(3));
	set.validate();

	assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 4, 6, 8, 10]);
	for key in [1, 4, 6, 8, 10] {
		assert_eq!(set.get(&key), Some(&key));
	}
	assert!(!set.contains(&3));
}

#[test]
pub fn at_missing_key() {
	let map: Map<i32, char> = vec![(5, 'a'), (6, 'b'), (3, 'c')].into_iter().collect();
	let before = map.clone();

	let err = map.at(&1).unwrap_err();
	assert_eq!(err, Error::KeyNotFound);
	assert!(err.is_out_of_range());

	assert_eq!(map, before);
	assert_eq!(map.at(&6), Ok(&'b'));
}

#[test]
pub fn step_to_end() {
	let map: Map<i32, char> = vec![(1, 'f'), (2, 't'), (3, 'o')].into_iter().collect();

	let mut pos = map.begin();
	assert_eq!(map.get_at(pos), Ok((&1, &'f')));

	for _ in 0..3 {
		assert!(!pos.is_end());
		pos = map.next_position(pos);
	}

	assert_eq!(pos, map.end());
	assert_eq!(map.get_at(pos), Err(Error::InvalidPosition));
	assert_eq!(map.get_at(map.previous_position(pos)), Ok((&3, &'o')));
}

#[test]
pub fn entry() {
	let mut map: Map<&str, usize> = Map::new();

	for word in "a rose is a rose is a rose".split(' ') {
		*map.entry(word).or_default() += 1;
	}

	assert_eq!(map["a"], 3);
	assert_eq!(map["rose"], 3);
	assert_eq!(map["is"], 2);
	map.validate();
}

#[test]
pub fn merge_copies_in() {
	let mut a: Map<i32, char> = vec![(1, 'a'), (2, 'b')].into_iter().collect();
	let b: Map<i32, char> = vec![(2, 'x'), (3, 'c')].into_iter().collect();

	a.merge(&b);
	a.validate();

	assert_eq!(
		a.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(),
		[(1, 'a'), (2, 'b'), (3, 'c')]
	);
	assert_eq!(b.len(), 2);
	assert_eq!(b[&2], 'x');

	let mut s: Set<i32> = vec![1, 2].into_iter().collect();
	let t: Set<i32> = vec![2, 3].into_iter().collect();
	s.merge(&t);
	assert_eq!(s.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
	assert_eq!(t.len(), 2);
}

#[test]
pub fn clone_is_deep() {
	let mut rng = SmallRng::from_seed(*SEED);
	let mut items = items();
	items.shuffle(&mut rng);

	let map: Map<usize, usize> = items.into_iter().collect();
	let mut copy = map.clone();
	copy.validate();
	assert_eq!(copy, map);

	copy.pop_first();
	*copy.values_mut().next().unwrap() = 0;
	assert_eq!(map.len(), 100);
	assert_ne!(copy, map);
}

#[test]
pub fn swap_and_clear() {
	let mut a: Set<i32> = vec![1, 2, 3].into_iter().collect();
	let mut b: Set<i32> = Set::new();

	a.swap(&mut b);
	assert!(a.is_empty());
	assert_eq!(b.len(), 3);

	b.clear();
	assert!(b.is_empty());
	assert!(b.first().is_none());
	assert!(b.max_size() > 0);
}
