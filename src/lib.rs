//! This crate provides [`OrderedSet`], a concurrent, deduplicating set
//! which remembers the order elements were inserted in, along with
//! [`parse_number_range()`] for turning compact range expressions like
//! `"1-5,8,10-12"` into such a set.
//!
//! ## Example
//!
//! ```rust
//! use ranger::{parse_number_range, OrderedSet};
//!
//! let set = OrderedSet::from_slice([3, 1, 3, 2]);
//!
//! assert_eq!(set.value(), [3, 1, 2]);
//! assert_eq!(set.intersection([2, 9, 3]).value(), [2, 3]);
//!
//! let pages = parse_number_range("1-3,5,7-6,x,10");
//!
//! assert_eq!(pages.value(), [1, 2, 3, 5, 10]);
//! assert!(pages.contains_all(&[1, 10]));
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Positions
//!
//! Every element stored in an [`OrderedSet`] has a position, its index in
//! insertion order (or in sorted order after
//! [`sort_by_key()`](OrderedSet::sort_by_key)). Positions are always dense:
//! the positions of a set with `n` elements are exactly `0..n`. This is
//! also why the set has no removal operation, removing an element would
//! leave a hole.
//!
//! ### Concurrency
//!
//! Pushing and membership queries take `&self`, so an [`OrderedSet`] can be
//! shared between threads (behind an `Arc` or a scoped borrow) and pushed
//! into from all of them. A position is only claimed once a value is known
//! to be absent, so concurrent pushes never leave gaps or hand out the same
//! position twice. Operations that rewrite the whole set take `&mut self`.
//!
//! ### Serialization
//!
//! With the `serde` feature (enabled by default) a set serializes as a plain
//! sequence in position order, e.g. `[3,1,2]`, and deserializing pushes the
//! elements back in sequence order.

#![allow(clippy::tabs_in_doc_comments)]
#![allow(clippy::needless_return)]

pub mod discrete;
pub mod element;
#[cfg(feature = "serde")]
pub mod error;
pub mod interval;
pub mod number_range;
pub mod ordered_set;

pub use crate::discrete::Discrete;
pub use crate::element::ElementType;
#[cfg(feature = "serde")]
pub use crate::error::ParseError;
pub use crate::interval::InclusiveInterval;
pub use crate::number_range::parse_number_range;
pub use crate::ordered_set::OrderedSet;
