//! The Safewords crate constructs validated fixed-width integers, signed and
//! unsigned, from 8 to 256 bits.
//!
//! Values can be constructed from decimal strings, native numbers, or
//! [`BigInt`](num_bigint::BigInt)s. Every construction returns a [`Result`],
//! and the value is only tagged with its width and signedness once it has
//! passed every check.
//!
//! ```
//! use safewords::{IntegerError, Uint8, extract, int16, uint8};
//! use num_bigint::BigInt;
//!
//! let byte = uint8("255").unwrap();
//! assert_eq!(*byte.value(), BigInt::from(255));
//!
//! let described = extract(|e: IntegerError| e.to_string(), |v: Uint8| v.to_string())(uint8("256"));
//! assert_eq!(described, "Invalid size, expected size: 8, actual size: 9");
//!
//! assert!(int16(BigInt::from(-32_768)).is_ok());
//! ```



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cast_lossless,
	clippy::cast_precision_loss,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::exhaustive_enums,
	clippy::exhaustive_structs,
	clippy::expect_used,
	clippy::float_cmp,
	clippy::indexing_slicing,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::print_stdout,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

pub mod big;
mod config;
mod constructable;
mod constructors;
mod errors;
mod integer;
pub mod pipeline;
pub mod validators;



//		Packages

pub use config::{ConstructorConfig, SignedRange};
pub use constructable::{Constructable, Native};
pub use constructors::{
	Constructor,
	int8,
	int16,
	int32,
	int64,
	int128,
	int256,
	safe_int_constructor,
	safe_int_constructor_with,
	safe_uint_constructor,
	uint8,
	uint16,
	uint32,
	uint64,
	uint128,
	uint256,
};
pub use errors::IntegerError;
pub use integer::{
	Int8,
	Int16,
	Int32,
	Int64,
	Int128,
	Int256,
	Integer,
	Uint8,
	Uint16,
	Uint32,
	Uint64,
	Uint128,
	Uint256,
	Width,
	Word,
	integer_to_big,
	safe_integer_to_big,
	specialize,
};
pub use pipeline::{bind, extract, loudly_extract, map};
