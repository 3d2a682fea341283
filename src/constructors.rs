//! The construction pipeline, and the public constructors built from it.
//!
//! Every constructor runs the same ordered chain of stages, joined with
//! [`bind()`] so that the first failure wins:
//!
//!   1. [`integrality_check()`]
//!   2. [`to_arbitrary_precision()`]
//!   3. [`bit_length_check()`]
//!   4. [`negative_check()`] for unsigned integers, or [`signed_range_check()`]
//!      for signed integers when the [`TwosComplement`](SignedRange::TwosComplement)
//!      policy is selected
//!   5. [`specialize()`]
//!
//! ```
//! use safewords::{IntegerError, uint8};
//!
//! assert_eq!(uint8("255").unwrap().to_string(), "255");
//! assert_eq!(uint8("256"), Err(IntegerError::InvalidSize { expected: 8, actual: 9 }));
//! assert_eq!(uint8(-1),    Err(IntegerError::NegativeUnsigned));
//! assert_eq!(uint8("6.4"), Err(IntegerError::FloatingPointNotSupported));
//! ```



//		Modules

#[cfg(test)]
#[path = "tests/constructors.rs"]
mod tests;



//		Packages

use crate::{
	big::to_arbitrary_precision,
	config::{ConstructorConfig, SignedRange},
	constructable::Constructable,
	errors::IntegerError,
	integer::{Int8, Int16, Int32, Int64, Int128, Int256, Integer, specialize},
	integer::{Uint8, Uint16, Uint32, Uint64, Uint128, Uint256},
	pipeline::bind,
	validators::{bit_length_check, integrality_check, negative_check, signed_range_check},
};
use num_bigint::BigInt;
use tracing::{debug, trace};



//		Structs

//		Constructor																
/// A configured construction pipeline for one width and signedness.
/// 
/// The free functions such as [`safe_uint_constructor()`] and [`uint8()`] are
/// built on this, and are the usual way to construct integers. Use a
/// [`Constructor`] directly when the width is only known at runtime, or when a
/// non-default [`ConstructorConfig`] is needed.
/// 
/// ```
/// use safewords::{Constructor, ConstructorConfig, IntegerError, SignedRange};
/// 
/// let lenient = Constructor::signed(8);
/// let strict  = lenient.with_config(ConstructorConfig::new(SignedRange::TwosComplement));
/// 
/// assert!(lenient.construct(200).is_ok());
/// assert!(matches!(strict.construct(200), Err(IntegerError::Overflow { .. })));
/// ```
/// 
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Constructor {
	/// The requested width, in bits.
	width:  u16,

	/// Whether the integer is signed.
	signed: bool,

	/// The construction policy.
	config: ConstructorConfig,
}

//󰭅		Constructor																
impl Constructor {
	//		Constructors														

	//		new																	
	/// Creates a constructor with the default configuration.
	/// 
	/// The width is not checked here. A width without a matching [`Integer`]
	/// variant runs the pipeline as normal, and is then rejected by
	/// [`specialize()`].
	/// 
	/// # Parameters
	/// 
	/// * `width`  - The width, in bits.
	/// * `signed` - Whether the integer is signed.
	/// 
	#[must_use]
	pub const fn new(width: u16, signed: bool) -> Self {
		Self { width, signed, config: ConstructorConfig::new(SignedRange::BitLength) }
	}

	//		signed																
	/// Creates a signed constructor with the default configuration.
	#[must_use]
	pub const fn signed(width: u16) -> Self {
		Self::new(width, true)
	}

	//		unsigned															
	/// Creates an unsigned constructor with the default configuration.
	#[must_use]
	pub const fn unsigned(width: u16) -> Self {
		Self::new(width, false)
	}

	//		with_config															
	/// Replaces the configuration.
	#[must_use]
	pub const fn with_config(mut self, config: ConstructorConfig) -> Self {
		self.config = config;
		self
	}

	//		Public methods														

	//		config																
	/// The configuration in use.
	#[must_use]
	pub const fn config(&self) -> ConstructorConfig {
		self.config
	}

	//		construct															
	/// Runs the pipeline on a value.
	/// 
	/// # Parameters
	/// 
	/// * `input` - The value to construct the integer from.
	/// 
	/// # Errors
	/// 
	/// Returns the error raised by the first stage that fails. No later stage is
	/// run once one has failed.
	/// 
	pub fn construct(&self, input: impl Into<Constructable>) -> Result<Integer, IntegerError> {
		let (width, signed) = (self.width, self.signed);
		let input           = input.into();
		trace!(width, signed, %input, "Constructing integer");

		let checked = bind(integrality_check)(Ok(input));
		let parsed  = bind(to_arbitrary_precision)(checked);
		let sized   = bind(bit_length_check(width))(parsed);
		let ranged  = match (signed, self.config.signed_range) {
			(false, _)                           => bind(negative_check)(sized),
			(true,  SignedRange::BitLength)      => sized,
			(true,  SignedRange::TwosComplement) => bind(signed_range_check(width))(sized),
		};
		bind(|value: BigInt| specialize(width, signed, value))(ranged)
			.inspect_err(|err| debug!(width, signed, %err, "Rejected integer"))
	}

	//		is_signed															
	/// Whether the constructor produces signed integers.
	#[must_use]
	pub const fn is_signed(&self) -> bool {
		self.signed
	}

	//		width																
	/// The requested width, in bits.
	#[must_use]
	pub const fn width(&self) -> u16 {
		self.width
	}
}



//		Functions

//		safe_uint_constructor													
/// Creates the unsigned construction pipeline for a width.
/// 
/// # Parameters
/// 
/// * `width` - The width, in bits.
/// 
pub fn safe_uint_constructor(width: u16) -> impl Fn(Constructable) -> Result<Integer, IntegerError> + Copy {
	let constructor = Constructor::unsigned(width);
	move |input| constructor.construct(input)
}

//		safe_int_constructor													
/// Creates the signed construction pipeline for a width, using the default
/// [`SignedRange::BitLength`] policy.
/// 
/// # Parameters
/// 
/// * `width` - The width, in bits.
/// 
pub fn safe_int_constructor(width: u16) -> impl Fn(Constructable) -> Result<Integer, IntegerError> + Copy {
	safe_int_constructor_with(width, SignedRange::default())
}

//		safe_int_constructor_with												
/// Creates the signed construction pipeline for a width, using the given range
/// policy.
/// 
/// # Parameters
/// 
/// * `width`        - The width, in bits.
/// * `signed_range` - How strictly to check the range of the value.
/// 
pub fn safe_int_constructor_with(
	width:        u16,
	signed_range: SignedRange,
) -> impl Fn(Constructable) -> Result<Integer, IntegerError> + Copy {
	let constructor = Constructor::signed(width).with_config(ConstructorConfig::new(signed_range));
	move |input| constructor.construct(input)
}

/// Generates a per-width constructor by fixing the width and signedness, and
/// narrowing the resulting [`Integer`] to the matching typed word.
macro_rules! fixed_constructor {
	($($name:ident => $word:ident, $pipeline:ident, $bits:literal, $kind:literal;)+) => {
		$(
			#[doc = concat!("Constructs ", $kind, " ", stringify!($bits), "-bit integer.")]
			/// 
			/// # Errors
			/// 
			/// Returns the error raised by the first stage of the pipeline that
			/// fails.
			/// 
			pub fn $name(input: impl Into<Constructable>) -> Result<$word, IntegerError> {
				bind(<$word as TryFrom<Integer>>::try_from)($pipeline($bits)(input.into()))
			}
		)+
	};
}

fixed_constructor! {
	uint8   => Uint8,   safe_uint_constructor, 8,   "an unsigned";
	uint16  => Uint16,  safe_uint_constructor, 16,  "an unsigned";
	uint32  => Uint32,  safe_uint_constructor, 32,  "an unsigned";
	uint64  => Uint64,  safe_uint_constructor, 64,  "an unsigned";
	uint128 => Uint128, safe_uint_constructor, 128, "an unsigned";
	uint256 => Uint256, safe_uint_constructor, 256, "an unsigned";
	int8    => Int8,    safe_int_constructor,  8,   "a signed";
	int16   => Int16,   safe_int_constructor,  16,  "a signed";
	int32   => Int32,   safe_int_constructor,  32,  "a signed";
	int64   => Int64,   safe_int_constructor,  64,  "a signed";
	int128  => Int128,  safe_int_constructor,  128, "a signed";
	int256  => Int256,  safe_int_constructor,  256, "a signed";
}
