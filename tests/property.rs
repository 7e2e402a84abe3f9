//! Randomized comparison of the search tree containers against the standard
//! library collections.

use bst_slab::{Map, Multiset, Set};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

/// Operations that can be performed on a container.
#[derive(Debug, Clone)]
enum Op {
	Insert(i16, i16),
	Assign(i16, i16),
	Remove(i16),
	EraseFirst,
	Lookup(i16),
}

/// Keys are drawn from a small range so that operations often collide.
fn operations(max_ops: usize) -> impl Strategy<Value = Vec<Op>> {
	let key = -64i16..64;
	prop::collection::vec(
		prop_oneof![
			(key.clone(), any::<i16>()).prop_map(|(k, v)| Op::Insert(k, v)),
			(key.clone(), any::<i16>()).prop_map(|(k, v)| Op::Assign(k, v)),
			key.clone().prop_map(Op::Remove),
			Just(Op::EraseFirst),
			key.prop_map(Op::Lookup),
		],
		0..max_ops,
	)
}

proptest! {
	/// Every operation behaves as on a `BTreeMap` that never overwrites on insert.
	#[test]
	fn map_matches_oracle(ops in operations(300)) {
		let mut map: Map<i16, i16> = Map::new();
		let mut expected: BTreeMap<i16, i16> = BTreeMap::new();

		for op in ops {
			match op {
				Op::Insert(k, v) => {
					let inserted = !expected.contains_key(&k);
					expected.entry(k).or_insert(v);
					let (pos, result) = map.insert(k, v);
					prop_assert_eq!(result, inserted);
					prop_assert_eq!(map.get_at(pos).map(|(k, v)| (*k, *v)), Ok((k, expected[&k])));
				}
				Op::Assign(k, v) => {
					expected.insert(k, v);
					map.insert_or_assign(k, v);
				}
				Op::Remove(k) => {
					prop_assert_eq!(map.remove(&k), expected.remove(&k));
				}
				Op::EraseFirst => {
					let first = expected.keys().next().copied();
					let first = first.map(|k| (k, expected.remove(&k).unwrap()));
					prop_assert_eq!(map.erase(map.begin()).ok(), first);
				}
				Op::Lookup(k) => {
					prop_assert_eq!(map.get(&k), expected.get(&k));
				}
			}

			map.validate();
			prop_assert_eq!(map.len(), expected.len());
		}

		let entries: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
		let oracle: Vec<_> = expected.iter().map(|(k, v)| (*k, *v)).collect();
		prop_assert_eq!(&entries, &oracle);

		let reversed: Vec<_> = map.iter().rev().map(|(k, v)| (*k, *v)).collect();
		let oracle_reversed: Vec<_> = expected.iter().rev().map(|(k, v)| (*k, *v)).collect();
		prop_assert_eq!(reversed, oracle_reversed);
	}

	/// Inserting then erasing every key in any order leaves the tree empty.
	#[test]
	fn set_round_trip(
		(keys, order) in prop::collection::vec(any::<i32>(), 0..200).prop_flat_map(|keys| {
			let distinct: Vec<i32> = keys.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
			(Just(keys), Just(distinct).prop_shuffle())
		})
	) {
		let mut set: Set<i32> = keys.iter().copied().collect();
		let expected: BTreeSet<i32> = keys.iter().copied().collect();
		set.validate();
		prop_assert_eq!(set.len(), expected.len());
		prop_assert!(set.iter().eq(expected.iter()));
		prop_assert_eq!(order.len(), expected.len());

		for key in order {
			prop_assert!(set.remove(&key));
			set.validate();
		}

		prop_assert!(set.is_empty());
		prop_assert!(set.as_tree().root_id().is_none());
	}

	/// Multiset counts match a multiplicity map.
	#[test]
	fn multiset_counts(values in prop::collection::vec(0u8..16, 0..200), removed in prop::collection::vec(0u8..16, 0..100)) {
		let mut set: Multiset<u8> = values.iter().copied().collect();
		let mut expected: BTreeMap<u8, usize> = BTreeMap::new();
		for value in &values {
			*expected.entry(*value).or_default() += 1;
		}

		for value in removed {
			let present = expected.get(&value).map_or(false, |n| *n > 0);
			prop_assert_eq!(set.remove(&value), present);
			if present {
				*expected.get_mut(&value).unwrap() -= 1;
			}
			set.validate();
		}

		for value in 0u8..16 {
			prop_assert_eq!(set.count(&value), expected.get(&value).copied().unwrap_or(0));
		}

		let total: usize = expected.values().sum();
		prop_assert_eq!(set.len(), total);
		prop_assert_eq!(set.iter().count(), total);

		let walk: Vec<u8> = set.iter().copied().collect();
		prop_assert!(walk.windows(2).all(|w| w[0] <= w[1]));
	}
}
