use super::{Keyed, Payload};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Key-value binding stored in map and set nodes.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Item<K, V> {
	key: K,
	value: V,
}

impl<K, V> Item<K, V> {
	#[inline]
	pub fn new(key: K, value: V) -> Item<K, V> {
		Item { key, value }
	}

	#[inline]
	pub fn key(&self) -> &K {
		&self.key
	}

	#[inline]
	pub fn value(&self) -> &V {
		&self.value
	}

	#[inline]
	pub fn value_mut(&mut self) -> &mut V {
		&mut self.value
	}

	#[inline]
	pub fn set_value(&mut self, value: V) -> V {
		std::mem::replace(&mut self.value, value)
	}

	#[inline]
	pub fn as_pair(&self) -> (&K, &V) {
		(&self.key, &self.value)
	}

	/// Borrows the key immutably and the value mutably at the same time.
	#[inline]
	pub fn as_pair_mut(&mut self) -> (&K, &mut V) {
		(&self.key, &mut self.value)
	}

	#[inline]
	pub fn into_pair(self) -> (K, V) {
		(self.key, self.value)
	}
}

impl<K, V> Keyed for Item<K, V> {
	type Key = K;

	#[inline]
	fn key(&self) -> &K {
		&self.key
	}
}

impl<K, V> Payload for Item<K, V> {}
