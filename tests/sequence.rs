use bst_slab::{Buffer, Error, FixedArray, List, Queue, Stack};

fn values<T: Copy>(list: &List<T>) -> Vec<T> {
	list.iter().copied().collect()
}

#[test]
pub fn buffer_growth() {
	let mut buffer = Buffer::new();
	assert_eq!(buffer.capacity(), 1);

	let mut capacities = Vec::new();
	for i in 0..9 {
		buffer.push_back(i);
		capacities.push(buffer.capacity());
	}

	assert_eq!(capacities, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
	assert_eq!(buffer.len(), 9);
	assert_eq!(buffer.front(), Some(&0));
	assert_eq!(buffer.back(), Some(&8));

	buffer.shrink_to_fit();
	assert_eq!(buffer.capacity(), 9);
}

#[test]
pub fn buffer_bounds() {
	let mut buffer: Buffer<i32> = Buffer::with_len(3);
	assert_eq!(buffer.as_slice(), &[0, 0, 0]);

	assert_eq!(buffer.at(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
	assert_eq!(buffer.insert(4, 1), Err(Error::IndexOutOfRange { index: 4, len: 3 }));
	assert_eq!(buffer.remove(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
	assert_eq!(buffer.len(), 3);

	buffer.insert(3, 7).unwrap();
	buffer.insert(0, 5).unwrap();
	*buffer.at_mut(1).unwrap() = 6;
	assert_eq!(buffer.as_slice(), &[5, 6, 0, 0, 7]);

	assert_eq!(buffer.remove(2), Ok(0));
	buffer.insert_many(1, vec![1, 2]).unwrap();
	assert_eq!(buffer.as_slice(), &[5, 1, 2, 6, 0, 7]);

	assert_eq!(buffer.pop_back(), Some(7));
	buffer.clear();
	assert!(buffer.is_empty());
	assert_eq!(buffer.pop_back(), None);
}

#[test]
pub fn buffer_reserve() {
	let mut buffer: Buffer<u8> = Buffer::new();
	buffer.reserve(10);
	assert!(buffer.capacity() >= 10);
	let capacity = buffer.capacity();

	buffer.reserve(2);
	assert_eq!(buffer.capacity(), capacity);
	assert!(buffer.max_size() >= buffer.capacity());
}

#[test]
pub fn list_positions() {
	let mut list: List<i32> = List::new();
	assert_eq!(list.front(), Err(Error::Empty));
	assert_eq!(list.back(), Err(Error::Empty));
	assert!(list.front().unwrap_err().is_out_of_range());
	assert_eq!(list.begin(), list.end());

	list.insert_many_back(vec![1, 2, 4]);
	let four = list.previous_position(list.end());
	let three = list.insert(four, 3).unwrap();
	assert_eq!(values(&list), [1, 2, 3, 4]);
	assert_eq!(list.get_at(three), Ok(&3));

	list.insert(list.end(), 5).unwrap();
	assert_eq!(list.back(), Ok(&5));

	assert_eq!(list.erase(three), Ok(3));
	assert_eq!(list.get_at(three), Err(Error::InvalidPosition));
	assert_eq!(list.erase(list.end()), Err(Error::InvalidPosition));
	assert_eq!(values(&list), [1, 2, 4, 5]);

	*list.get_at_mut(list.begin()).unwrap() = 0;
	*list.back_mut().unwrap() += 1;
	assert_eq!(values(&list), [0, 2, 4, 6]);
	assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [6, 4, 2, 0]);
}

#[test]
pub fn list_push_pop() {
	let mut list = List::new();
	list.push_back(2);
	list.push_front(1);
	list.push_back(3);
	assert_eq!(list.len(), 3);

	assert_eq!(list.pop_front(), Some(1));
	assert_eq!(list.pop_back(), Some(3));
	assert_eq!(list.pop_back(), Some(2));
	assert_eq!(list.pop_back(), None);
	assert!(list.is_empty());
}

#[test]
pub fn list_insert_many() {
	let mut list: List<i32> = vec![1, 5].into_iter().collect();
	let pos = list.next_position(list.begin());

	let after = list.insert_many(pos, vec![2, 3, 4]).unwrap();
	assert_eq!(list.get_at(after), Ok(&5));
	assert_eq!(values(&list), [1, 2, 3, 4, 5]);

	list.insert_many_front(vec![-1, 0]);
	assert_eq!(values(&list), [-1, 0, 1, 2, 3, 4, 5]);
}

#[test]
pub fn list_splice() {
	let mut a: List<i32> = vec![1, 4].into_iter().collect();
	let mut b: List<i32> = vec![2, 3].into_iter().collect();

	let pos = a.previous_position(a.end());
	a.splice(pos, &mut b).unwrap();
	assert_eq!(values(&a), [1, 2, 3, 4]);
	assert!(b.is_empty());

	let mut empty = List::new();
	empty.splice(List::<i32>::new().end(), &mut a).unwrap();
	assert_eq!(values(&empty), [1, 2, 3, 4]);
	assert!(a.is_empty());
}

#[test]
pub fn list_merge_sort_unique() {
	let mut a: List<i32> = vec![5, 1, 3].into_iter().collect();
	let mut b: List<i32> = vec![4, 1, 2].into_iter().collect();

	a.merge(&mut b);
	assert_eq!(values(&a), [1, 1, 2, 3, 4, 5]);
	assert!(b.is_empty());

	a.unique();
	assert_eq!(values(&a), [1, 2, 3, 4, 5]);

	a.reverse();
	assert_eq!(values(&a), [5, 4, 3, 2, 1]);
	assert_eq!(a.front(), Ok(&5));
	assert_eq!(a.back(), Ok(&1));

	let mut c: List<i32> = vec![3, 3, 1, 3].into_iter().collect();
	c.unique();
	assert_eq!(values(&c), [1, 3]);
}

#[test]
pub fn list_clone_and_swap() {
	let mut a: List<i32> = List::with_len(2);
	let mut b: List<i32> = vec![7].into_iter().collect();
	let copy = b.clone();

	a.swap(&mut b);
	assert_eq!(values(&a), [7]);
	assert_eq!(values(&b), [0, 0]);
	assert_eq!(a, copy);

	b.clear();
	assert!(b.is_empty());
	assert_eq!(b.len(), 0);
	assert_eq!(a.into_iter().collect::<Vec<_>>(), [7]);
}

#[test]
pub fn queue() {
	let mut queue: Queue<i32> = (1..4).collect();
	assert_eq!(queue.front(), Ok(&1));
	assert_eq!(queue.back(), Ok(&3));

	queue.insert_many_back(vec![4, 5]);
	assert_eq!(queue.len(), 5);
	assert_eq!(queue.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);

	let mut popped = Vec::new();
	while let Some(value) = queue.pop() {
		popped.push(value);
	}
	assert_eq!(popped, [1, 2, 3, 4, 5]);
	assert_eq!(queue.front(), Err(Error::Empty));
	assert_eq!(queue.back(), Err(Error::Empty));

	let mut other = Queue::new();
	other.push(9);
	queue.swap(&mut other);
	assert_eq!(queue.len(), 1);
	assert!(other.is_empty());
}

#[test]
pub fn stack() {
	let mut stack: Stack<i32> = (1..4).collect();
	assert_eq!(stack.top(), Ok(&3));

	stack.insert_many_front(vec![4, 5]);
	assert_eq!(stack.iter().copied().collect::<Vec<_>>(), [5, 4, 3, 2, 1]);

	let mut popped = Vec::new();
	while let Some(value) = stack.pop() {
		popped.push(value);
	}
	assert_eq!(popped, [5, 4, 3, 2, 1]);
	assert_eq!(stack.top(), Err(Error::Empty));
	assert!(stack.is_empty());
	assert!(stack.max_size() > 0);
}

#[test]
pub fn fixed_array() {
	let mut array: FixedArray<i32, 3> = FixedArray::try_from_items(vec![4, 5]).unwrap();
	assert_eq!(array.as_slice(), &[4, 5, 0]);
	assert_eq!(array.len(), 3);
	assert_eq!(array.max_size(), 3);
	assert_eq!(array.front(), Ok(&4));
	assert_eq!(array.back(), Ok(&0));

	*array.at_mut(2).unwrap() = 6;
	assert_eq!(array.at(2), Ok(&6));
	assert_eq!(array.at(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));

	let mut other = FixedArray::from_array([1, 1, 1]);
	array.swap(&mut other);
	assert_eq!(array.as_slice(), &[1, 1, 1]);
	assert_eq!(other.as_slice(), &[4, 5, 6]);

	array.fill(2);
	assert_eq!(array.iter().sum::<i32>(), 6);
	array.as_mut_slice()[0] = 0;
	assert_eq!(array.into_inner(), [0, 2, 2]);

	let err = FixedArray::<i32, 3>::try_from_items(0..4).unwrap_err();
	assert_eq!(err, Error::InvalidLength { capacity: 3, len: 4 });
	assert!(!err.is_out_of_range());
}
