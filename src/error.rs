//! A module containing [`ParseError`].

use thiserror::Error;

/// The error returned when the textual array form of an
/// [`OrderedSet`](crate::OrderedSet) could not be parsed.
///
/// This is the only fallible operation on the set, everything else either
/// succeeds or silently does nothing.
///
/// # Examples
/// ```
/// use ranger::OrderedSet;
///
/// let err = OrderedSet::<i64>::from_json(b"[1, 2,").unwrap_err();
///
/// assert_eq!(err.line(), 1);
/// ```
#[derive(Debug, Error)]
#[error("malformed ordered set array: {source}")]
pub struct ParseError {
	#[from]
	source: serde_json::Error,
}

impl ParseError {
	/// The one-based line number at which parsing failed.
	pub fn line(&self) -> usize {
		self.source.line()
	}
	/// The one-based column number at which parsing failed.
	pub fn column(&self) -> usize {
		self.source.column()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use crate::OrderedSet;

	#[test]
	fn reports_position_of_failure() {
		let err = OrderedSet::<String>::from_json(b"[\"a\",\n 7]").unwrap_err();

		assert_eq!(err.line(), 2);
		assert!(err.column() > 0);
		assert!(err.to_string().starts_with("malformed ordered set array"));
	}
}
