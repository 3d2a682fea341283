//! Contains error types used throughout the library.



//		Modules

#[cfg(test)]
#[path = "tests/errors.rs"]
mod tests;



//		Packages

use thiserror::Error as ThisError;



//		Enums

//		IntegerError															
/// Represents all possible errors that can occur when constructing an integer.
/// 
/// The set is closed. The arithmetic-related variants are not produced by the
/// construction pipeline itself, but are part of the shared taxonomy so that
/// consumers performing arithmetic on [`Integer`](crate::Integer)s can report
/// failures with the same type. [`Overflow`](IntegerError::Overflow) and
/// [`Underflow`](IntegerError::Underflow) are also produced by the
/// [`TwosComplement`](crate::SignedRange::TwosComplement) range policy.
/// 
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[expect(clippy::exhaustive_enums, reason = "Closed taxonomy")]
pub enum IntegerError {
	/// The type of the incoming value cannot be handled.
	#[error("Handling this type is not supported.")]
	TypeNotSupported,

	/// The bit length of the incoming value exceeds the requested width.
	#[error("Invalid size, expected size: {expected}, actual size: {actual}")]
	InvalidSize {
		/// The requested width, in bits.
		expected: u16,

		/// The bit length of the incoming value.
		actual:   u64,
	},

	/// A negative value was supplied to an unsigned constructor.
	#[error("Cannot construct negative unsigned integers")]
	NegativeUnsigned,

	/// The value is too large for the capacity of the destination.
	#[error("Overflow error: capacity {capacity}, number: {value}, required size: {required}")]
	Overflow {
		/// The capacity of the destination, in bits.
		capacity: u16,

		/// The offending value, as a decimal string.
		value:    String,

		/// The number of bits needed to hold the value.
		required: u64,
	},

	/// The value is too small for the capacity of the destination.
	#[error("Underflow error: capacity {capacity}, number: {value}, required size: {required}")]
	Underflow {
		/// The capacity of the destination, in bits.
		capacity: u16,

		/// The offending value, as a decimal string.
		value:    String,

		/// The number of bits needed to hold the value.
		required: u64,
	},

	/// Two operands of different widths were combined.
	#[error("Cannot perform operations on different sized numbers. required size: {required}, input size: {actual}")]
	InconsistentSize {
		/// The width required by the operation.
		required: u16,

		/// The width of the offending operand.
		actual:   u16,
	},

	/// The incoming value is a non-integral number, or a string containing a
	/// decimal point.
	#[error("This library does not support decimals.")]
	FloatingPointNotSupported,

	/// Division by zero was attempted.
	#[error("Division by zero.")]
	DivisionByZero,

	/// The requested width and signedness do not correspond to any supported
	/// integer variant.
	#[error("Could not construct Integer of size: {width}, signed: {signed}, value: {value}")]
	UnconstructableInteger {
		/// The requested width, in bits.
		width:  u16,

		/// The requested signedness.
		signed: bool,

		/// The value, as a decimal string.
		value:  String,
	},

	/// The incoming string is not a base-10 integer.
	#[error("Malformed decimal integer: {0:?}")]
	MalformedDecimal(String),
}
