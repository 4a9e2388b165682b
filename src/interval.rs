//! A module containing [`InclusiveInterval`] and its iterator.

use core::iter::FusedIterator;

use crate::Discrete;

/// An interval over a discrete type where both ends are included.
///
/// This is the span type produced for every `low-high` term of a range
/// expression, see [`parse_number_range()`](crate::parse_number_range).
///
/// An interval whose `start` is greater than its `end` is empty, it contains
/// no points and iterating it yields nothing.
///
/// # Examples
/// ```
/// use ranger::InclusiveInterval;
///
/// let interval = InclusiveInterval::new(3_i64, 6);
///
/// assert!(interval.contains(4));
/// assert_eq!(interval.iter().collect::<Vec<_>>(), [3, 4, 5, 6]);
///
/// assert!(InclusiveInterval::new(7_i64, 6).is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InclusiveInterval<I> {
	/// The start of the interval, inclusive.
	pub start: I,
	/// The end of the interval, inclusive.
	pub end: I,
}

impl<I> InclusiveInterval<I>
where
	I: Ord + Copy + Discrete,
{
	/// Makes a new interval from `start` to `end`, both inclusive.
	pub fn new(start: I, end: I) -> Self {
		InclusiveInterval { start, end }
	}
	/// Returns `true` if the interval contains no points.
	pub fn is_empty(&self) -> bool {
		self.start > self.end
	}
	/// Returns `true` if `point` lies inside the interval.
	pub fn contains(&self, point: I) -> bool {
		point >= self.start && point <= self.end
	}
	/// Returns an iterator over every point in the interval in ascending
	/// order.
	pub fn iter(&self) -> Iter<I> {
		Iter {
			next: Some(self.start),
			end: self.end,
		}
	}
}

impl<I> IntoIterator for InclusiveInterval<I>
where
	I: Ord + Copy + Discrete,
{
	type Item = I;
	type IntoIter = Iter<I>;
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// An iterator over the points of an [`InclusiveInterval`].
///
/// This `struct` is created by the [`iter`] method on
/// [`InclusiveInterval`]. See its documentation for more.
///
/// [`iter`]: InclusiveInterval::iter
#[derive(Debug, Clone)]
pub struct Iter<I> {
	next: Option<I>,
	end: I,
}

impl<I> Iterator for Iter<I>
where
	I: Ord + Copy + Discrete,
{
	type Item = I;
	fn next(&mut self) -> Option<Self::Item> {
		let current = self.next.filter(|point| *point <= self.end)?;
		//None once we step past the end of the type
		self.next = current.successor();
		Some(current)
	}
}

impl<I> FusedIterator for Iter<I> where I: Ord + Copy + Discrete {}
