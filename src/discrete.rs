//! A module containing the [`Discrete`] trait and trait impls for the
//! primitive integer datatypes.

/// A trait for discrete datatypes, that is, types where every value has a
/// well-defined next value (unless it is the maximum of the type).
pub trait Discrete {
	/// The smallest value greater than `self` if one exists.
	fn successor(self) -> Option<Self>
	where
		Self: Sized;
}

macro_rules! discrete {
	() => {};
	($ident:ident, $($t:tt)*) => {
		impl Discrete for $ident {
			fn successor(self) -> Option<Self> {
				self.checked_add(1)
			}
		}

		discrete!($($t)*);
	};
}

discrete!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize,);
