//! A module containing the [`ElementType`] marker trait.

use core::hash::Hash;

/// The marker trait for valid element types, a blanket implementation is provided for all types
/// which implement this traits' super-traits so you shouldn't need to implement this yourself.
///
/// In practice the elements stored in an [`OrderedSet`](crate::OrderedSet) are integers or
/// [`String`]s, but anything hashable and cloneable works.
pub trait ElementType: Eq + Hash + Clone {}
impl<T> ElementType for T where T: Eq + Hash + Clone {}
