//! Serde support, enabled by the `serde` feature.
//!
//! Maps are serialized as maps, every other container as a sequence of its
//! elements in iteration order.
use crate::{
	generic::{Item, Map, Multiset, Node, Run, Set},
	List,
};
use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, Slab, SlabMut};
use serde::{
	de::{MapAccess, Visitor},
	ser::SerializeMap,
	Deserialize, Deserializer, Serialize, Serializer,
};
use std::{fmt, marker::PhantomData};

impl<K: Serialize, V: Serialize, C: Slab<Node<Item<K, V>>>> Serialize for Map<K, V, C>
where
	C: SimpleCollectionRef,
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut map = serializer.serialize_map(Some(self.len()))?;
		for (key, value) in self {
			map.serialize_entry(key, value)?;
		}
		map.end()
	}
}

struct MapVisitor<K, V, C> {
	marker: PhantomData<fn() -> Map<K, V, C>>,
}

impl<'de, K, V, C: SlabMut<Node<Item<K, V>>> + Default> Visitor<'de> for MapVisitor<K, V, C>
where
	K: Deserialize<'de> + Ord,
	V: Deserialize<'de>,
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	type Value = Map<K, V, C>;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str("a map")
	}

	/// Later bindings of a duplicate key replace the earlier ones.
	fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
	where
		A: MapAccess<'de>,
	{
		let mut map = Map::new();
		while let Some((key, value)) = access.next_entry()? {
			map.insert_or_assign(key, value);
		}
		Ok(map)
	}
}

impl<'de, K, V, C: SlabMut<Node<Item<K, V>>> + Default> Deserialize<'de> for Map<K, V, C>
where
	K: Deserialize<'de> + Ord,
	V: Deserialize<'de>,
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_map(MapVisitor {
			marker: PhantomData,
		})
	}
}

impl<T: Serialize, C: Slab<Node<Item<T, ()>>>> Serialize for Set<T, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.collect_seq(self)
	}
}

impl<'de, T, C: SlabMut<Node<Item<T, ()>>> + Default> Deserialize<'de> for Set<T, C>
where
	T: Deserialize<'de> + Ord,
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let items: Vec<T> = Vec::deserialize(deserializer)?;
		Ok(items.into_iter().collect())
	}
}

impl<T: Serialize, C: Slab<Node<Run<T>>>> Serialize for Multiset<T, C>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.collect_seq(self)
	}
}

impl<'de, T, C: SlabMut<Node<Run<T>>> + Default> Deserialize<'de> for Multiset<T, C>
where
	T: Deserialize<'de> + Ord,
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let items: Vec<T> = Vec::deserialize(deserializer)?;
		Ok(items.into_iter().collect())
	}
}

impl<T: Serialize> Serialize for List<T> {
	#[inline]
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.collect_seq(self)
	}
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for List<T> {
	#[inline]
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let items: Vec<T> = Vec::deserialize(deserializer)?;
		Ok(items.into_iter().collect())
	}
}
