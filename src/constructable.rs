//! Input shapes accepted by the integer constructors.



//		Modules

#[cfg(test)]
#[path = "tests/constructable.rs"]
mod tests;



//		Packages

use core::fmt::{Display, Formatter, self};
use num_bigint::BigInt;



//		Enums

//		Native																	
/// A native fixed-precision number.
/// 
/// Integers are widened to the largest primitive of the same signedness, so
/// that no information is lost before the value reaches the arbitrary-precision
/// stage. Floats are kept as-is and checked for integrality.
/// 
#[derive(Clone, Copy, Debug, PartialEq)]
#[expect(clippy::exhaustive_enums, reason = "Closed set of native shapes")]
pub enum Native {
	/// Any signed primitive integer.
	Signed(i128),

	/// Any unsigned primitive integer.
	Unsigned(u128),

	/// A floating-point number.
	Float(f64),
}

//󰭅		Display																	
impl Display for Native {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match *self {
			Self::Signed(v)   => write!(f, "{v}"),
			Self::Unsigned(v) => write!(f, "{v}"),
			Self::Float(v)    => write!(f, "{v}"),
		}
	}
}

//		Constructable															
/// A value that an integer can be constructed from.
/// 
/// Only these three shapes are accepted. [`From`] is implemented for strings,
/// every primitive number type, and [`BigInt`], so the constructors can be
/// called with any of them directly:
/// 
/// ```
/// use safewords::{uint8, int16};
/// use num_bigint::BigInt;
/// 
/// assert!(uint8("255").is_ok());
/// assert!(uint8(255_u32).is_ok());
/// assert!(int16(BigInt::from(-32_768)).is_ok());
/// ```
/// 
#[derive(Clone, Debug, PartialEq)]
#[expect(clippy::exhaustive_enums, reason = "Closed set of input shapes")]
pub enum Constructable {
	/// A base-10 string, optionally signed.
	Decimal(String),

	/// A native fixed-precision number.
	Native(Native),

	/// An already-constructed arbitrary-precision integer.
	Big(BigInt),
}

//󰭅		Display																	
impl Display for Constructable {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match *self {
			Self::Decimal(ref s) => write!(f, "{s}"),
			Self::Native(ref n)  => write!(f, "{n}"),
			Self::Big(ref b)     => write!(f, "{b}"),
		}
	}
}

//󰭅		From: &str -> Constructable												
impl From<&str> for Constructable {
	//		from																
	fn from(v: &str) -> Self {
		Self::Decimal(v.to_owned())
	}
}

//󰭅		From: String -> Constructable											
impl From<String> for Constructable {
	//		from																
	fn from(v: String) -> Self {
		Self::Decimal(v)
	}
}

//󰭅		From: &String -> Constructable											
impl From<&String> for Constructable {
	//		from																
	fn from(v: &String) -> Self {
		Self::Decimal(v.clone())
	}
}

//󰭅		From: BigInt -> Constructable											
impl From<BigInt> for Constructable {
	//		from																
	fn from(v: BigInt) -> Self {
		Self::Big(v)
	}
}

//󰭅		From: &BigInt -> Constructable											
impl From<&BigInt> for Constructable {
	//		from																
	fn from(v: &BigInt) -> Self {
		Self::Big(v.clone())
	}
}

//󰭅		From: Native -> Constructable											
impl From<Native> for Constructable {
	//		from																
	fn from(v: Native) -> Self {
		Self::Native(v)
	}
}

//󰭅		From: f32 -> Constructable												
impl From<f32> for Constructable {
	//		from																
	fn from(v: f32) -> Self {
		Self::Native(Native::Float(f64::from(v)))
	}
}

//󰭅		From: f64 -> Constructable												
impl From<f64> for Constructable {
	//		from																
	fn from(v: f64) -> Self {
		Self::Native(Native::Float(v))
	}
}

/// Implements [`From`] for primitive integers that widen losslessly into one
/// of the [`Native`] integer shapes.
macro_rules! from_primitive {
	($variant:ident, $wide:ty => $($t:ty),+) => {
		$(
			impl From<$t> for Constructable {
				//		from													
				fn from(v: $t) -> Self {
					Self::Native(Native::$variant(<$wide>::from(v)))
				}
			}
		)+
	};
}

from_primitive!(Signed,   i128 => i8, i16, i32, i64, i128);
from_primitive!(Unsigned, u128 => u8, u16, u32, u64, u128);

//󰭅		From: isize -> Constructable											
impl From<isize> for Constructable {
	//		from																
	fn from(v: isize) -> Self {
		Self::Native(Native::Signed(v as i128))
	}
}

//󰭅		From: usize -> Constructable											
impl From<usize> for Constructable {
	//		from																
	fn from(v: usize) -> Self {
		Self::Native(Native::Unsigned(v as u128))
	}
}
