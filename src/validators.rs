//! Independent validation stages.
//!
//! Each validator is a pure function which either passes its input through
//! unchanged or rejects it with a single [`IntegerError`]. They know nothing
//! about each other; the ordering is decided by the constructors that chain
//! them together.



//		Modules

#[cfg(test)]
#[path = "tests/validators.rs"]
mod tests;



//		Packages

use crate::{
	big::{bit_length, is_negative, is_power_of_two, to_decimal_string},
	constructable::{Constructable, Native},
	errors::IntegerError,
};
use num_bigint::BigInt;



//		Functions

//		integrality_check														
/// Rejects inputs that could carry a fractional part.
/// 
/// A float must be finite and have no fractional part, and a string must not
/// contain a decimal point. Native integers and [`BigInt`]s are integral by
/// construction and pass through unchecked.
/// 
/// # Errors
/// 
/// Returns [`IntegerError::FloatingPointNotSupported`] if the input is not
/// integral.
/// 
pub fn integrality_check(input: Constructable) -> Result<Constructable, IntegerError> {
	let integral = match input {
		Constructable::Native(Native::Float(v)) => v.is_finite() && v.fract() == 0.0,
		Constructable::Decimal(ref s)           => !s.contains('.'),
		Constructable::Native(_) |
		Constructable::Big(_)                   => true,
	};
	if integral { Ok(input) } else { Err(IntegerError::FloatingPointNotSupported) }
}

//		bit_length_check														
/// Creates a stage that rejects values whose magnitude needs more than `width`
/// bits.
/// 
/// A value whose bit length is exactly `width` is accepted, so `255` passes for
/// a width of 8 but `256` does not.
/// 
/// # Parameters
/// 
/// * `width` - The maximum number of bits allowed.
/// 
/// # Errors
/// 
/// The returned function returns [`IntegerError::InvalidSize`] if the value is
/// too long.
/// 
pub fn bit_length_check(width: u16) -> impl Fn(BigInt) -> Result<BigInt, IntegerError> + Copy {
	move |value| {
		let actual = bit_length(&value);
		if actual > u64::from(width) {
			Err(IntegerError::InvalidSize { expected: width, actual })
		} else {
			Ok(value)
		}
	}
}

//		negative_check															
/// Rejects negative values. Zero is allowed.
/// 
/// # Errors
/// 
/// Returns [`IntegerError::NegativeUnsigned`] if the value is below zero.
/// 
pub fn negative_check(value: BigInt) -> Result<BigInt, IntegerError> {
	if is_negative(&value) { Err(IntegerError::NegativeUnsigned) } else { Ok(value) }
}

//		signed_range_check														
/// Creates a stage that rejects values outside the two's-complement range of
/// `width` bits, i.e. below `-2^(width - 1)` or above `2^(width - 1) - 1`.
/// 
/// # Parameters
/// 
/// * `width` - The width of the signed integer, in bits.
/// 
/// # Errors
/// 
/// The returned function returns [`IntegerError::Overflow`] if the value is
/// too large, and [`IntegerError::Underflow`] if it is too small.
/// 
pub fn signed_range_check(width: u16) -> impl Fn(BigInt) -> Result<BigInt, IntegerError> + Copy {
	move |value| {
		let required = twos_complement_bits(&value);
		if required <= u64::from(width) {
			return Ok(value);
		}
		let capacity = width;
		let number   = to_decimal_string(&value);
		if is_negative(&value) {
			Err(IntegerError::Underflow { capacity, value: number, required })
		} else {
			Err(IntegerError::Overflow  { capacity, value: number, required })
		}
	}
}

//		twos_complement_bits													
/// The number of bits needed to hold a value in two's complement, including the
/// sign bit.
fn twos_complement_bits(value: &BigInt) -> u64 {
	let magnitude = bit_length(value);
	//	-2^n is the one magnitude that needs no extra bit
	if is_negative(value) && is_power_of_two(value, magnitude.saturating_sub(1)) {
		magnitude
	} else {
		magnitude.saturating_add(1)
	}
}
