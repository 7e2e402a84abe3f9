#![cfg(feature = "serde")]
use bst_slab::{Buffer, List, Map, Multiset, Set};

#[test]
pub fn map_as_json_object() {
	let map: Map<String, i32> = vec![("b".to_string(), 2), ("a".to_string(), 1)]
		.into_iter()
		.collect();

	let json = serde_json::to_string(&map).unwrap();
	assert_eq!(json, r#"{"a":1,"b":2}"#);

	let restored: Map<String, i32> = serde_json::from_str(&json).unwrap();
	restored.validate();
	assert_eq!(restored, map);
}

#[test]
pub fn map_duplicate_keys() {
	let map: Map<String, i32> = serde_json::from_str(r#"{"a":1,"a":2}"#).unwrap();
	assert_eq!(map.len(), 1);
	assert_eq!(map["a"], 2);
}

#[test]
pub fn sets_as_json_arrays() {
	let set: Set<i32> = serde_json::from_str("[3, 1, 2, 1]").unwrap();
	assert_eq!(serde_json::to_string(&set).unwrap(), "[1,2,3]");

	let multiset: Multiset<i32> = serde_json::from_str("[3, 1, 2, 1]").unwrap();
	multiset.validate();
	assert_eq!(multiset.count(&1), 2);
	assert_eq!(serde_json::to_string(&multiset).unwrap(), "[1,1,2,3]");
}

#[test]
pub fn sequences_as_json_arrays() {
	let list: List<i32> = serde_json::from_str("[3, 1, 2]").unwrap();
	assert_eq!(list.iter().copied().collect::<Vec<_>>(), [3, 1, 2]);
	assert_eq!(serde_json::to_string(&list).unwrap(), "[3,1,2]");

	let buffer: Buffer<i32> = serde_json::from_str("[4, 5]").unwrap();
	assert_eq!(buffer.as_slice(), &[4, 5]);
}
