//! Adapter over the arbitrary-precision integer library.
//!
//! This is the only place that talks to [`num_bigint`] directly. Everything
//! else in the crate goes through [`parse_decimal`], [`bit_length`],
//! [`is_negative`], and [`to_decimal_string`], so any other arbitrary-precision
//! implementation offering the same four operations could be substituted.



//		Modules

#[cfg(test)]
#[path = "tests/big.rs"]
mod tests;



//		Packages

use crate::{
	constructable::{Constructable, Native},
	errors::IntegerError,
};
use num_bigint::{BigInt, Sign};
use num_traits::FromPrimitive;



//		Functions

//		parse_decimal															
/// Parses a base-10 string into a [`BigInt`].
/// 
/// Surrounding whitespace is ignored, and a single leading `+` or `-` is
/// accepted. Everything else must be ASCII digits.
/// 
/// # Errors
/// 
/// Returns [`IntegerError::MalformedDecimal`] if the string is empty or
/// contains anything other than an optional sign followed by digits.
/// 
pub fn parse_decimal(s: &str) -> Result<BigInt, IntegerError> {
	let trimmed = s.trim();
	let digits  = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
	if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
		return Err(IntegerError::MalformedDecimal(s.to_owned()));
	}
	BigInt::parse_bytes(trimmed.as_bytes(), 10).ok_or_else(|| IntegerError::MalformedDecimal(s.to_owned()))
}

//		to_arbitrary_precision													
/// Converts any [`Constructable`] into a [`BigInt`].
/// 
/// Strings are parsed as base-10, native numbers are converted losslessly, and
/// an existing [`BigInt`] is passed through unchanged. Floats are expected to
/// have already passed the integrality check, so they convert exactly.
/// 
/// # Errors
/// 
/// Returns [`IntegerError::MalformedDecimal`] for a string that is not a base-10
/// integer, and [`IntegerError::FloatingPointNotSupported`] for a float that
/// has no integral representation (NaN or infinite).
/// 
pub fn to_arbitrary_precision(value: Constructable) -> Result<BigInt, IntegerError> {
	match value {
		Constructable::Decimal(s)                => parse_decimal(&s),
		Constructable::Native(Native::Signed(v))   => Ok(BigInt::from(v)),
		Constructable::Native(Native::Unsigned(v)) => Ok(BigInt::from(v)),
		Constructable::Native(Native::Float(v))    => BigInt::from_f64(v).ok_or(IntegerError::FloatingPointNotSupported),
		Constructable::Big(b)                    => Ok(b),
	}
}

//		bit_length																
/// The minimal number of bits needed to represent the magnitude of a value.
/// 
/// The sign is not counted, and zero has a bit length of zero.
/// 
#[must_use]
pub fn bit_length(value: &BigInt) -> u64 {
	value.bits()
}

//		is_negative																
/// Whether the value is strictly less than zero.
#[must_use]
pub fn is_negative(value: &BigInt) -> bool {
	value.sign() == Sign::Minus
}

//		to_decimal_string														
/// Renders the value in base 10.
#[must_use]
pub fn to_decimal_string(value: &BigInt) -> String {
	value.to_str_radix(10)
}

//		is_power_of_two															
/// Whether the magnitude of the value is exactly `2^exp`.
/// 
/// Used to recognise the most negative two's-complement value, whose magnitude
/// is one bit longer than the positive limit.
/// 
#[must_use]
pub fn is_power_of_two(value: &BigInt, exp: u64) -> bool {
	value.trailing_zeros() == Some(exp) && bit_length(value) == exp.saturating_add(1)
}
