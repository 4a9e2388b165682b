//! A module containing [`parse_number_range()`], the parser for compact
//! numeric range expressions.
//!
//! A range expression is a comma separated list of terms where each term is
//! either a single integer or an inclusive `low-high` span:
//!
//! ```text
//! expr    := term (',' term)*
//! term    := INTEGER | INTEGER '-' INTEGER
//! ```
//!
//! Parsing never fails, terms which don't match the grammar are dropped.

use smallvec::SmallVec;
use tracing::trace;

use crate::{InclusiveInterval, OrderedSet};

/// A single well-formed term of a range expression.
#[derive(Debug, PartialEq)]
enum Term {
	Point(i64),
	Span(InclusiveInterval<i64>),
}

/// Parses a range expression such as `"1-5,8,10-12"` into an
/// [`OrderedSet`] of every integer it mentions, in order of first
/// appearance.
///
/// Malformed terms contribute nothing: terms that aren't integers, terms
/// with more than one `-`, and spans whose low end is greater than their
/// high end. Integers are read with [`str::parse`], so whitespace around a
/// term is not allowed and a leading `-` counts as a span separator, which
/// makes negative numbers inexpressible.
///
/// If strict validation is needed it must be done separately, a malformed
/// expression simply yields a smaller (possibly empty) set.
///
/// # Examples
/// ```
/// use ranger::parse_number_range;
///
/// let set = parse_number_range("1-3,5,7-6,x,10");
///
/// assert_eq!(set.value(), [1, 2, 3, 5, 10]);
///
/// // overlapping terms are deduplicated
/// assert_eq!(parse_number_range("4-6,1-5").value(), [4, 5, 6, 1, 2, 3]);
/// ```
pub fn parse_number_range(expression: &str) -> OrderedSet<i64> {
	let set = OrderedSet::new();

	for term in expression.split(',') {
		match parse_term(term) {
			Some(Term::Point(point)) => {
				set.push(point);
			}
			Some(Term::Span(interval)) => {
				set.push_many(interval);
			}
			None => trace!(term = %term, "dropped malformed range term"),
		}
	}

	return set;
}

fn parse_term(term: &str) -> Option<Term> {
	let parts: SmallVec<[&str; 2]> = term.split('-').collect();

	match parts.as_slice() {
		[point] => point.parse().ok().map(Term::Point),
		[start, end] => Some(Term::Span(InclusiveInterval::new(
			start.parse().ok()?,
			end.parse().ok()?,
		))),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn assert_parse(expression: &str, expected: &[i64]) {
		assert_eq!(parse_number_range(expression).value(), expected);
	}

	#[test]
	fn parse_term_tests() {
		assert_eq!(parse_term("7"), Some(Term::Point(7)));
		assert_eq!(
			parse_term("2-9"),
			Some(Term::Span(InclusiveInterval::new(2, 9)))
		);
		assert_eq!(
			parse_term("9-2"),
			Some(Term::Span(InclusiveInterval::new(9, 2)))
		);
		assert_eq!(parse_term(""), None);
		assert_eq!(parse_term("x"), None);
		assert_eq!(parse_term("1-x"), None);
		assert_eq!(parse_term("1-2-3"), None);
		assert_eq!(parse_term("-4"), None);
		assert_eq!(parse_term(" 4"), None);
	}

	#[test]
	fn parse_number_range_tests() {
		assert_parse("1-3,5,7-6,x,10", &[1, 2, 3, 5, 10]);
		assert_parse("1-5,8,10-12", &[1, 2, 3, 4, 5, 8, 10, 11, 12]);
		assert_parse("3,3,2-4,1", &[3, 2, 4, 1]);
		assert_parse("5-5", &[5]);
		assert_parse("+7", &[7]);
	}

	#[test]
	fn malformed_input_degrades_to_omission() {
		assert_parse("", &[]);
		assert_parse(",,,", &[]);
		assert_parse("1-2-3,a-b,-1", &[]);
		assert_parse("1 , 2", &[]);
		assert_parse("1-2-3,4", &[4]);
	}

	#[test]
	fn span_at_type_max() {
		let expression = format!("{}-{}", i64::MAX - 1, i64::MAX);
		assert_parse(&expression, &[i64::MAX - 1, i64::MAX]);
	}
}
