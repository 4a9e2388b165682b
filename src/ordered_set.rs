//! A module containing [`OrderedSet`].

use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use parking_lot::RwLock;
use smallvec::SmallVec;
use tracing::debug;

use crate::ElementType;

/// A concurrent, deduplicating set which remembers the order its elements
/// were inserted in.
///
/// Every stored element is assigned a position, the first element pushed
/// gets position `0`, the next new element position `1` and so on. Pushing
/// an element that is already stored does nothing, so the positions of the
/// stored elements always cover `0..len()` exactly once. [`value()`]
/// returns the elements laid out by position, and [`sort_by_key()`]
/// rewrites the positions.
///
/// Insertion and membership queries take `&self` and can be used from many
/// threads at once. Operations which rewrite the whole set
/// ([`clear()`], [`sort_by_key()`], [`load_json()`]) take `&mut self` so
/// they can never overlap with concurrent writers.
///
/// There is no removal operation, removing an element would leave a gap in
/// the positions.
///
/// `T` is the generic type parameter for the elements stored in the set,
/// usually an integer or a [`String`].
///
/// # Examples
/// ```
/// use ranger::OrderedSet;
///
/// let set = OrderedSet::new();
///
/// set.push(3);
/// set.push(1);
/// set.push(3);
/// set.push(2);
///
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.value(), [3, 1, 2]);
/// assert_eq!(set.position(&1), Some(1));
/// ```
///
/// [`value()`]: OrderedSet::value
/// [`sort_by_key()`]: OrderedSet::sort_by_key
/// [`clear()`]: OrderedSet::clear
/// [`load_json()`]: OrderedSet::load_json
pub struct OrderedSet<T> {
	entries: RwLock<HashMap<T, usize>>,
	//only ever incremented while holding the write lock on `entries`
	count: AtomicUsize,
}

impl<T> OrderedSet<T>
where
	T: ElementType,
{
	/// Pushes `value` to the back of the set if it is not already stored.
	///
	/// Returns `true` if the value was newly stored and `false` if it was
	/// already present, in which case the set is left unchanged.
	///
	/// Safe to call from many threads at once, when several threads push
	/// the same new value exactly one of them stores it.
	///
	/// # Examples
	/// ```
	/// use ranger::OrderedSet;
	///
	/// let set = OrderedSet::new();
	///
	/// assert!(set.push("b"));
	/// assert!(set.push("a"));
	/// assert!(!set.push("b"));
	///
	/// assert_eq!(set.value(), ["b", "a"]);
	/// ```
	pub fn push(&self, value: T) -> bool {
		if self.entries.read().contains_key(&value) {
			return false;
		}

		let mut entries = self.entries.write();
		insert_absent(&mut *entries, &self.count, value)
	}
	/// Pushes every value of `values` in order, skipping those already
	/// stored. Returns how many values were newly stored.
	///
	/// `values` is drained before the set is locked, so the iterator may
	/// itself query this set. The whole batch is then inserted under a
	/// single write lock and the newly stored values receive consecutive
	/// positions.
	///
	/// # Examples
	/// ```
	/// use ranger::OrderedSet;
	///
	/// let set = OrderedSet::from_slice([1, 2]);
	///
	/// assert_eq!(set.push_many([2, 5, 5, 4]), 2);
	/// assert_eq!(set.value(), [1, 2, 5, 4]);
	/// ```
	pub fn push_many(&self, values: impl IntoIterator<Item = T>) -> usize {
		let values: Vec<T> = values.into_iter().collect();

		let mut entries = self.entries.write();
		values
			.into_iter()
			.map(|value| insert_absent(&mut *entries, &self.count, value))
			.filter(|stored| *stored)
			.count()
	}
	/// Returns `true` if `value` is stored in the set.
	///
	/// # Examples
	/// ```
	/// use ranger::OrderedSet;
	///
	/// let set = OrderedSet::from_slice([String::from("a")]);
	///
	/// assert!(set.contains("a"));
	/// assert!(!set.contains("b"));
	/// assert!(!OrderedSet::<i64>::default().contains(&1));
	/// ```
	pub fn contains<Q>(&self, value: &Q) -> bool
	where
		T: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.entries.read().contains_key(value)
	}
	/// Returns `true` if every one of `values` is stored in the set.
	///
	/// Returns `true` for an empty `values`.
	///
	/// # Examples
	/// ```
	/// use ranger::OrderedSet;
	///
	/// let set = OrderedSet::from_slice([1, 2, 3]);
	///
	/// assert!(set.contains_all(&[3, 1]));
	/// assert!(!set.contains_all(&[3, 4]));
	/// ```
	pub fn contains_all<'a, Q>(
		&self,
		values: impl IntoIterator<Item = &'a Q>,
	) -> bool
	where
		T: Borrow<Q>,
		Q: Hash + Eq + ?Sized + 'a,
	{
		let values: SmallVec<[&Q; 8]> = values.into_iter().collect();

		let entries = self.entries.read();
		values.into_iter().all(|value| entries.contains_key(value))
	}
	/// Returns `true` if every one of `values` is stored in the set.
	///
	/// Despite its name this behaves exactly like
	/// [`contains_all()`](OrderedSet::contains_all), existing callers
	/// depend on that. Use [`contains_some()`](OrderedSet::contains_some) to
	/// check whether at least one value is stored.
	///
	/// # Examples
	/// ```
	/// use ranger::OrderedSet;
	///
	/// let set = OrderedSet::from_slice([1, 2, 3]);
	///
	/// assert!(set.contains_any(&[1, 2]));
	/// assert!(!set.contains_any(&[1, 9]));
	/// ```
	pub fn contains_any<'a, Q>(
		&self,
		values: impl IntoIterator<Item = &'a Q>,
	) -> bool
	where
		T: Borrow<Q>,
		Q: Hash + Eq + ?Sized + 'a,
	{
		self.contains_all(values)
	}
	/// Returns `true` if at least one of `values` is stored in the set.
	///
	/// Returns `false` for an empty `values`.
	///
	/// # Examples
	/// ```
	/// use ranger::OrderedSet;
	///
	/// let set = OrderedSet::from_slice([1, 2, 3]);
	///
	/// assert!(set.contains_some(&[1, 9]));
	/// assert!(!set.contains_some(&[8, 9]));
	/// ```
	pub fn contains_some<'a, Q>(
		&self,
		values: impl IntoIterator<Item = &'a Q>,
	) -> bool
	where
		T: Borrow<Q>,
		Q: Hash + Eq + ?Sized + 'a,
	{
		let values: SmallVec<[&Q; 8]> = values.into_iter().collect();

		let entries = self.entries.read();
		values.into_iter().any(|value| entries.contains_key(value))
	}
	/// Returns the position of `value` if it is stored in the set.
	pub fn position<Q>(&self, value: &Q) -> Option<usize>
	where
		T: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.entries.read().get(value).copied()
	}
	/// Returns a freshly allocated snapshot of the set with every element
	/// placed at its position.
	///
	/// This walks the whole set, so prefer
	/// [`for_each_unordered()`](OrderedSet::for_each_unordered) when order
	/// does not matter.
	///
	/// # Examples
	/// ```
	/// use ranger::OrderedSet;
	///
	/// let set = OrderedSet::from_slice([7, 1, 4, 1]);
	///
	/// assert_eq!(set.value(), [7, 1, 4]);
	/// ```
	pub fn value(&self) -> Vec<T> {
		let entries = self.entries.read();

		let mut slots = vec![None; entries.len()];
		for (value, position) in entries.iter() {
			if let Some(slot) = slots.get_mut(*position) {
				*slot = Some(value.clone());
			}
		}

		slots.into_iter().flatten().collect()
	}
	/// Calls `f` once for every element in the set, in no particular order.
	///
	/// `f` runs over a snapshot of the elements taken before the first call,
	/// so it may query or push into this same set. Elements pushed while `f`
	/// runs are not visited.
	///
	/// # Examples
	/// ```
	/// use ranger::OrderedSet;
	///
	/// let set = OrderedSet::from_slice([1, 2, 3]);
	///
	/// let mut total = 0;
	/// set.for_each_unordered(|value| total += value);
	///
	/// assert_eq!(total, 6);
	/// ```
	pub fn for_each_unordered<F>(&self, mut f: F)
	where
		F: FnMut(&T),
	{
		let values: Vec<T> = self.entries.read().keys().cloned().collect();
		for value in values.iter() {
			f(value);
		}
	}
	/// Sorts the set in ascending order of the key returned by `f`,
	/// rewriting every element's position to its index in the sorted order.
	///
	/// The sort is stable, elements with equal keys keep their relative
	/// order. The elements stored in the set do not change.
	///
	/// # Examples
	/// ```
	/// use ranger::OrderedSet;
	///
	/// let mut set = OrderedSet::from_slice(["ccc", "a", "bb", "d"]);
	///
	/// set.sort_by_key(|value| value.len());
	///
	/// assert_eq!(set.value(), ["a", "d", "bb", "ccc"]);
	/// assert_eq!(set.position("bb"), Some(2));
	/// ```
	pub fn sort_by_key<K, F>(&mut self, f: F)
	where
		K: Ord,
		F: FnMut(&T) -> K,
	{
		let sorted = self.value().into_iter().sorted_by_key(f);

		let entries = self.entries.get_mut();
		for (position, value) in sorted.enumerate() {
			if let Some(slot) = entries.get_mut(&value) {
				*slot = position;
			}
		}

		debug!(len = entries.len(), "rewrote ordered set positions after sort");
	}
	/// Returns a new set containing the elements of `other` which are also
	/// stored in `self`, in the order they appear in `other`.
	///
	/// # Examples
	/// ```
	/// use ranger::OrderedSet;
	///
	/// let set = OrderedSet::from_slice([1, 2, 3]);
	///
	/// assert_eq!(set.intersection([3, 4, 1]).value(), [3, 1]);
	/// ```
	pub fn intersection(&self, other: impl IntoIterator<Item = T>) -> OrderedSet<T> {
		let other: Vec<T> = other.into_iter().collect();

		let entries = self.entries.read();
		let shared = other
			.into_iter()
			.filter(|value| entries.contains_key(value))
			.collect::<Vec<_>>();
		drop(entries);

		shared.into_iter().collect()
	}
	/// Returns a new set containing the elements of `self` which do not
	/// appear in `other`.
	///
	/// The order of the returned set is not part of the contract, currently
	/// it follows the order of `self`.
	///
	/// # Examples
	/// ```
	/// use ranger::OrderedSet;
	///
	/// let set = OrderedSet::from_slice([1, 2, 3]);
	/// let rest = set.subtract([2]);
	///
	/// assert_eq!(rest.len(), 2);
	/// assert!(rest.contains_all(&[1, 3]));
	/// ```
	pub fn subtract(&self, other: impl IntoIterator<Item = T>) -> OrderedSet<T> {
		let excluded: HashSet<T> = other.into_iter().collect();
		self.value()
			.into_iter()
			.filter(|value| !excluded.contains(value))
			.collect()
	}
	/// Makes a new set containing `values`, skipping duplicates.
	///
	/// # Examples
	/// ```
	/// use ranger::OrderedSet;
	///
	/// let set = OrderedSet::from_slice([2, 2, 1]);
	///
	/// assert_eq!(set.value(), [2, 1]);
	/// ```
	pub fn from_slice<const N: usize>(values: [T; N]) -> OrderedSet<T> {
		let set = OrderedSet::new();
		set.push_many(values);
		return set;
	}
}

impl<T> OrderedSet<T> {
	/// Makes a new, empty `OrderedSet`.
	///
	/// # Examples
	/// ```
	/// use ranger::OrderedSet;
	///
	/// let set: OrderedSet<i64> = OrderedSet::new();
	///
	/// assert!(set.is_empty());
	/// ```
	pub fn new() -> Self {
		OrderedSet {
			entries: RwLock::new(HashMap::new()),
			count: AtomicUsize::new(0),
		}
	}
	/// Returns the number of elements in the set.
	pub fn len(&self) -> usize {
		self.count.load(Ordering::Relaxed)
	}
	/// Returns `true` if the set contains no elements.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
	/// Removes every element from the set and resets positions back to `0`.
	///
	/// # Examples
	/// ```
	/// use ranger::OrderedSet;
	///
	/// let mut set = OrderedSet::from_slice([1, 2]);
	///
	/// set.clear();
	/// set.push(9);
	///
	/// assert_eq!(set.value(), [9]);
	/// assert_eq!(set.position(&9), Some(0));
	/// ```
	pub fn clear(&mut self) {
		*self.entries.get_mut() = HashMap::new();
		*self.count.get_mut() = 0;
	}
}

// Helper Functions ==========================

fn insert_absent<T>(
	entries: &mut HashMap<T, usize>,
	count: &AtomicUsize,
	value: T,
) -> bool
where
	T: ElementType,
{
	match entries.entry(value) {
		Entry::Occupied(_) => false,
		Entry::Vacant(slot) => {
			//the position is only claimed once the value is known to be
			//absent so positions stay dense
			slot.insert(count.fetch_add(1, Ordering::Relaxed));
			true
		}
	}
}

// Trait Impls ==========================

impl<T> Default for OrderedSet<T> {
	fn default() -> Self {
		OrderedSet::new()
	}
}

impl<T> Clone for OrderedSet<T>
where
	T: ElementType,
{
	fn clone(&self) -> Self {
		self.value().into_iter().collect()
	}
}

impl<T> fmt::Debug for OrderedSet<T>
where
	T: ElementType + fmt::Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.value()).finish()
	}
}

impl<T> PartialEq for OrderedSet<T>
where
	T: ElementType,
{
	fn eq(&self, other: &Self) -> bool {
		self.value() == other.value()
	}
}
impl<T> Eq for OrderedSet<T> where T: ElementType {}

impl<T> FromIterator<T> for OrderedSet<T>
where
	T: ElementType,
{
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let set = OrderedSet::new();
		set.push_many(iter);
		return set;
	}
}

impl<T> Extend<T> for OrderedSet<T>
where
	T: ElementType,
{
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		self.push_many(iter);
	}
}

impl<T> IntoIterator for OrderedSet<T>
where
	T: ElementType,
{
	type Item = T;
	type IntoIter = IntoIter<T>;
	fn into_iter(self) -> Self::IntoIter {
		return IntoIter {
			inner: self.value().into_iter(),
		};
	}
}
/// An owning iterator over the elements of an [`OrderedSet`] in position
/// order.
///
/// This `struct` is created by the [`into_iter`] method on
/// [`OrderedSet`] (provided by the [`IntoIterator`] trait). See
/// its documentation for more.
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
pub struct IntoIter<T> {
	inner: std::vec::IntoIter<T>,
}
impl<T> Iterator for IntoIter<T> {
	type Item = T;
	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next()
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}
impl<T> ExactSizeIterator for IntoIter<T> {}

#[cfg(feature = "serde")]
mod serde {
	use core::marker::PhantomData;

	use serde::de::{DeserializeOwned, SeqAccess, Visitor};
	use serde::ser::SerializeSeq;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};
	use tracing::debug;

	use crate::{ElementType, OrderedSet, ParseError};

	impl<T> OrderedSet<T>
	where
		T: ElementType,
	{
		/// Encodes the set as a JSON array in position order.
		///
		/// # Examples
		/// ```
		/// use ranger::OrderedSet;
		///
		/// let set = OrderedSet::from_slice(["b", "a"]);
		///
		/// assert_eq!(set.to_json().unwrap(), r#"["b","a"]"#);
		/// ```
		pub fn to_json(&self) -> serde_json::Result<String>
		where
			T: Serialize,
		{
			serde_json::to_string(self)
		}
		/// Decodes a set from a JSON array, elements are pushed in array
		/// order so their positions mirror the array.
		///
		/// # Examples
		/// ```
		/// use ranger::OrderedSet;
		///
		/// let set = OrderedSet::<i64>::from_json(b"[3, 1, 3, 2]").unwrap();
		///
		/// assert_eq!(set.value(), [3, 1, 2]);
		/// ```
		pub fn from_json(bytes: &[u8]) -> Result<OrderedSet<T>, ParseError>
		where
			T: DeserializeOwned,
		{
			Ok(serde_json::from_slice(bytes)?)
		}
		/// Replaces the contents of the set with the elements of a JSON
		/// array, pushed in array order.
		///
		/// The array is fully parsed before the set is touched, so if an
		/// error is returned the set is left unchanged.
		///
		/// # Examples
		/// ```
		/// use ranger::OrderedSet;
		///
		/// let mut set = OrderedSet::from_slice([1_i64, 2]);
		///
		/// assert!(set.load_json(b"[1, oops]").is_err());
		/// assert_eq!(set.value(), [1, 2]);
		///
		/// set.load_json(b"[5, 4]").unwrap();
		/// assert_eq!(set.value(), [5, 4]);
		/// ```
		pub fn load_json(&mut self, bytes: &[u8]) -> Result<(), ParseError>
		where
			T: DeserializeOwned,
		{
			let values: Vec<T> = serde_json::from_slice(bytes)?;

			self.clear();
			self.push_many(values);

			debug!(len = self.len(), "reloaded ordered set from json");
			Ok(())
		}
	}

	impl<T> Serialize for OrderedSet<T>
	where
		T: ElementType + Serialize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			let values = self.value();
			let mut seq = serializer.serialize_seq(Some(values.len()))?;
			for value in values.iter() {
				seq.serialize_element(value)?;
			}
			seq.end()
		}
	}

	impl<'de, T> Deserialize<'de> for OrderedSet<T>
	where
		T: ElementType + Deserialize<'de>,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			deserializer.deserialize_seq(OrderedSetVisitor { t: PhantomData })
		}
	}

	struct OrderedSetVisitor<T> {
		t: PhantomData<T>,
	}

	impl<'de, T> Visitor<'de> for OrderedSetVisitor<T>
	where
		T: ElementType + Deserialize<'de>,
	{
		type Value = OrderedSet<T>;

		fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
			formatter.write_str("an array of OrderedSet elements")
		}

		fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
		where
			A: SeqAccess<'de>,
		{
			let set = OrderedSet::new();
			while let Some(value) = access.next_element()? {
				set.push(value);
			}
			Ok(set)
		}
	}
}
