//! Tagged fixed-width integer types, and the specializer that creates them.



//		Modules

#[cfg(test)]
#[path = "tests/integer.rs"]
mod tests;



//		Packages

use crate::{
	big::to_decimal_string,
	constructable::{Constructable, Native},
	constructors::Constructor,
	errors::IntegerError,
	pipeline::{bind, map},
};
use core::{
	fmt::{Display, Formatter, self},
	str::FromStr,
};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, Visitor},
	ser::SerializeStruct,
};
use serde_json::Error as JsonError;



//		Constants

/// The largest float magnitude below which every integer is exact, i.e.
/// `2^53 - 1`.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_991.0;



//		Type aliases

/// An unsigned 8-bit integer.
pub type Uint8   = Word<8,   false>;

/// An unsigned 16-bit integer.
pub type Uint16  = Word<16,  false>;

/// An unsigned 32-bit integer.
pub type Uint32  = Word<32,  false>;

/// An unsigned 64-bit integer.
pub type Uint64  = Word<64,  false>;

/// An unsigned 128-bit integer.
pub type Uint128 = Word<128, false>;

/// An unsigned 256-bit integer.
pub type Uint256 = Word<256, false>;

/// A signed 8-bit integer.
pub type Int8    = Word<8,   true>;

/// A signed 16-bit integer.
pub type Int16   = Word<16,  true>;

/// A signed 32-bit integer.
pub type Int32   = Word<32,  true>;

/// A signed 64-bit integer.
pub type Int64   = Word<64,  true>;

/// A signed 128-bit integer.
pub type Int128  = Word<128, true>;

/// A signed 256-bit integer.
pub type Int256  = Word<256, true>;



//		Enums

//		Width																	
/// The supported integer widths, in bits.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[expect(clippy::exhaustive_enums, reason = "Closed set of widths")]
pub enum Width {
	/// 8 bits.
	W8,

	/// 16 bits.
	W16,

	/// 32 bits.
	W32,

	/// 64 bits.
	W64,

	/// 128 bits.
	W128,

	/// 256 bits.
	W256,
}

//󰭅		Width																	
impl Width {
	/// All supported widths, narrowest first.
	pub const ALL: [Self; 6] = [Self::W8, Self::W16, Self::W32, Self::W64, Self::W128, Self::W256];

	//		bits																
	/// The number of bits.
	#[must_use]
	pub const fn bits(self) -> u16 {
		match self {
			Self::W8   => 8,
			Self::W16  => 16,
			Self::W32  => 32,
			Self::W64  => 64,
			Self::W128 => 128,
			Self::W256 => 256,
		}
	}

	//		from_bits															
	/// Looks up the width for a number of bits, if it is supported.
	#[must_use]
	pub const fn from_bits(bits: u16) -> Option<Self> {
		match bits {
			8   => Some(Self::W8),
			16  => Some(Self::W16),
			32  => Some(Self::W32),
			64  => Some(Self::W64),
			128 => Some(Self::W128),
			256 => Some(Self::W256),
			_   => None,
		}
	}
}

//󰭅		Display																	
impl Display for Width {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.bits())
	}
}

//		Integer																	
/// A fixed-width integer tagged with its width and signedness.
/// 
/// There is one variant per supported combination of width and signedness, and
/// the pair is the only discriminant. Values are created by
/// [`specialize()`], at the end of a successful construction pipeline, and are
/// never mutated afterwards.
/// 
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[expect(clippy::exhaustive_enums, reason = "Closed set of variants")]
pub enum Integer {
	/// An unsigned 8-bit integer.
	Uint8(Uint8),

	/// An unsigned 16-bit integer.
	Uint16(Uint16),

	/// An unsigned 32-bit integer.
	Uint32(Uint32),

	/// An unsigned 64-bit integer.
	Uint64(Uint64),

	/// An unsigned 128-bit integer.
	Uint128(Uint128),

	/// An unsigned 256-bit integer.
	Uint256(Uint256),

	/// A signed 8-bit integer.
	Int8(Int8),

	/// A signed 16-bit integer.
	Int16(Int16),

	/// A signed 32-bit integer.
	Int32(Int32),

	/// A signed 64-bit integer.
	Int64(Int64),

	/// A signed 128-bit integer.
	Int128(Int128),

	/// A signed 256-bit integer.
	Int256(Int256),
}

//󰭅		Integer																	
impl Integer {
	//		width																
	/// The width of the integer.
	#[must_use]
	pub const fn width(&self) -> Width {
		match *self {
			Self::Uint8(_)   | Self::Int8(_)   => Width::W8,
			Self::Uint16(_)  | Self::Int16(_)  => Width::W16,
			Self::Uint32(_)  | Self::Int32(_)  => Width::W32,
			Self::Uint64(_)  | Self::Int64(_)  => Width::W64,
			Self::Uint128(_) | Self::Int128(_) => Width::W128,
			Self::Uint256(_) | Self::Int256(_) => Width::W256,
		}
	}

	//		is_signed															
	/// Whether the integer is signed.
	#[must_use]
	pub const fn is_signed(&self) -> bool {
		matches!(
			*self,
			Self::Int8(_) | Self::Int16(_) | Self::Int32(_) | Self::Int64(_) | Self::Int128(_) | Self::Int256(_)
		)
	}

	//		value																
	/// The numeric value.
	#[must_use]
	pub const fn value(&self) -> &BigInt {
		match *self {
			Self::Uint8(ref w)   => &w.0,
			Self::Uint16(ref w)  => &w.0,
			Self::Uint32(ref w)  => &w.0,
			Self::Uint64(ref w)  => &w.0,
			Self::Uint128(ref w) => &w.0,
			Self::Uint256(ref w) => &w.0,
			Self::Int8(ref w)    => &w.0,
			Self::Int16(ref w)   => &w.0,
			Self::Int32(ref w)   => &w.0,
			Self::Int64(ref w)   => &w.0,
			Self::Int128(ref w)  => &w.0,
			Self::Int256(ref w)  => &w.0,
		}
	}

	//		into_value															
	/// Consumes the integer, returning the numeric value.
	#[must_use]
	pub fn into_value(self) -> BigInt {
		match self {
			Self::Uint8(w)   => w.0,
			Self::Uint16(w)  => w.0,
			Self::Uint32(w)  => w.0,
			Self::Uint64(w)  => w.0,
			Self::Uint128(w) => w.0,
			Self::Uint256(w) => w.0,
			Self::Int8(w)    => w.0,
			Self::Int16(w)   => w.0,
			Self::Int32(w)   => w.0,
			Self::Int64(w)   => w.0,
			Self::Int128(w)  => w.0,
			Self::Int256(w)  => w.0,
		}
	}

	//		to_json																
	/// Serialises the integer to a JSON string.
	/// 
	/// # Errors
	/// 
	/// Returns an error if serialisation fails.
	/// 
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}

	//		from_json															
	/// Deserialises an integer from a JSON string.
	/// 
	/// The value is validated in the same way as by the constructors.
	/// 
	/// # Errors
	/// 
	/// Returns an error if the JSON is invalid, or the value does not pass
	/// validation.
	/// 
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}
}

//󰭅		Deserialize																
impl<'de> Deserialize<'de> for Integer {
	//		deserialize															
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let raw         = RawInteger::deserialize(deserializer)?;
		let constructor = Constructor::new(raw.width, raw.signed);
		bind(|value: Constructable| constructor.construct(value))(Constructable::try_from(raw.value))
			.map_err(D::Error::custom)
	}
}

//󰭅		Display																	
impl Display for Integer {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.value())
	}
}

//󰭅		Serialize																
impl Serialize for Integer {
	//		serialize															
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut state = serializer.serialize_struct("Integer", 3)?;
		state.serialize_field("width",  &self.width().bits())?;
		state.serialize_field("signed", &self.is_signed())?;
		state.serialize_field("value",  &to_decimal_string(self.value()))?;
		state.end()
	}
}

//		RawValue																
/// The value of a serialised [`Integer`], before validation.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
	/// A non-negative JSON number.
	Unsigned(u64),

	/// A negative JSON number.
	Signed(i64),

	/// A float, which will be rejected unless integral and exact.
	Float(f64),

	/// A decimal string.
	Text(String),
}

//󰭅		TryFrom: RawValue -> Constructable										
impl TryFrom<RawValue> for Constructable {
	type Error = IntegerError;

	//		try_from															
	fn try_from(v: RawValue) -> Result<Self, Self::Error> {
		match v {
			RawValue::Unsigned(n) => Ok(Self::Native(Native::Unsigned(u128::from(n)))),
			RawValue::Signed(n)   => Ok(Self::Native(Native::Signed(i128::from(n)))),
			RawValue::Float(n)    => map(|float| Self::Native(Native::Float(float)))(exact_float(n)),
			RawValue::Text(s)     => Ok(Self::Decimal(s)),
		}
	}
}



//		Structs

//		Word																	
/// A validated integer of a fixed width and signedness.
/// 
/// The width and signedness are part of the type, so a function accepting a
/// [`Uint8`] can only ever receive a value between 0 and 255. The only ways to
/// obtain one are the constructors (such as [`uint8()`](crate::uint8())),
/// [`Word::new()`], parsing, deserialisation, or narrowing an [`Integer`] with
/// [`TryFrom`], and all of them run the full validation pipeline.
/// 
/// # Type parameters
/// 
/// * `BITS`   - The width in bits. Only the widths in [`Width`] can actually
///              be constructed.
/// * `SIGNED` - Whether the integer is signed (`true`) or unsigned (`false`).
/// 
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Word<const BITS: u16, const SIGNED: bool>(BigInt);

//󰭅		Word																	
impl<const BITS: u16, const SIGNED: bool> Word<BITS, SIGNED> {
	//		Public constants													
	/// Number of bits.
	pub const BITS:   u16  = BITS;

	/// Whether the integer is signed.
	pub const SIGNED: bool = SIGNED;

	//		Constructors														

	//		new																	
	/// Creates a new [`Word`] from anything [`Constructable`].
	/// 
	/// # Parameters
	/// 
	/// * `value` - The value to create the [`Word`] from.
	/// 
	/// # Errors
	/// 
	/// Returns the first error raised by the validation pipeline. Signed words
	/// use the default [`SignedRange`](crate::SignedRange) policy.
	/// 
	pub fn new(value: impl Into<Constructable>) -> Result<Self, IntegerError> {
		bind(<Self as TryFrom<Integer>>::try_from)(Constructor::new(BITS, SIGNED).construct(value))
	}

	//		Public methods														

	//		into_value															
	/// Consumes the word, returning the numeric value.
	#[must_use]
	pub fn into_value(self) -> BigInt {
		self.0
	}

	//		to_json																
	/// Serialises the word to a JSON string.
	/// 
	/// # Errors
	/// 
	/// Returns an error if serialisation fails.
	/// 
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}

	//		from_json															
	/// Deserialises a word from a JSON number or string.
	/// 
	/// # Errors
	/// 
	/// Returns an error if the JSON is invalid, or the value does not pass
	/// validation.
	/// 
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}

	//		value																
	/// The numeric value.
	#[must_use]
	pub const fn value(&self) -> &BigInt {
		&self.0
	}
}

//󰭅		Deserialize																
impl<'de, const BITS: u16, const SIGNED: bool> Deserialize<'de> for Word<BITS, SIGNED> {
	//		deserialize															
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_any(WordVisitor::<BITS, SIGNED>)
	}
}

//󰭅		Display																	
impl<const BITS: u16, const SIGNED: bool> Display for Word<BITS, SIGNED> {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

//󰭅		FromStr																	
impl<const BITS: u16, const SIGNED: bool> FromStr for Word<BITS, SIGNED> {
	type Err = IntegerError;

	//		from_str															
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

//󰭅		Serialize																
impl<const BITS: u16, const SIGNED: bool> Serialize for Word<BITS, SIGNED> {
	//		serialize															
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		//	Serialise as a number if it fits in i64/u64
		if BITS <= 64 {
			if SIGNED {
				if let Some(v) = self.0.to_i64() {
					return serializer.serialize_i64(v);
				}
			} else if let Some(v) = self.0.to_u64() {
				return serializer.serialize_u64(v);
			}
		}
		//	Fall back to string for larger numbers
		serializer.serialize_str(&to_decimal_string(&self.0))
	}
}

//󰭅		TryFrom: Integer -> Word												
impl<const BITS: u16, const SIGNED: bool> TryFrom<Integer> for Word<BITS, SIGNED> {
	type Error = IntegerError;

	//		try_from															
	fn try_from(v: Integer) -> Result<Self, Self::Error> {
		if v.width().bits() == BITS && v.is_signed() == SIGNED {
			Ok(Self(v.into_value()))
		} else {
			Err(IntegerError::UnconstructableInteger {
				width:  BITS,
				signed: SIGNED,
				value:  to_decimal_string(v.value()),
			})
		}
	}
}

/// Implements [`From`] for each concrete [`Word`], wrapping it in the matching
/// [`Integer`] variant.
macro_rules! word_into_integer {
	($($alias:ident),+) => {
		$(
			impl From<$alias> for Integer {
				//		from													
				fn from(v: $alias) -> Self {
					Self::$alias(v)
				}
			}
		)+
	};
}

word_into_integer!(Uint8, Uint16, Uint32, Uint64, Uint128, Uint256, Int8, Int16, Int32, Int64, Int128, Int256);

//		RawInteger																
/// A serialised [`Integer`], before validation.
#[derive(Deserialize)]
struct RawInteger {
	/// The width, in bits.
	width:  u16,

	/// Whether the integer is signed.
	signed: bool,

	/// The value.
	value:  RawValue,
}

//		WordVisitor																
/// A visitor for parsing words from numbers and strings.
struct WordVisitor<const BITS: u16, const SIGNED: bool>;

//󰭅		Visitor																	
impl<const BITS: u16, const SIGNED: bool> Visitor<'_> for WordVisitor<BITS, SIGNED> {
	type Value = Word<BITS, SIGNED>;

	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "a {}-bit {} integer", BITS, if SIGNED { "signed" } else { "unsigned" })
	}

	//		visit_i64															
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Word::new(v).map_err(E::custom)
	}

	//		visit_i128															
	fn visit_i128<E>(self, v: i128) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Word::new(v).map_err(E::custom)
	}

	//		visit_u64															
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Word::new(v).map_err(E::custom)
	}

	//		visit_u128															
	fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Word::new(v).map_err(E::custom)
	}

	//		visit_f64															
	fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		bind(Word::new)(exact_float(v)).map_err(E::custom)
	}

	//		visit_str															
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Word::new(v).map_err(E::custom)
	}
}



//		Functions

//		exact_float																
/// Accepts a deserialised float only if it cannot have been rounded.
/// 
/// JSON numbers too large for 64 bits arrive as [`f64`], and above 2^53 the
/// float may no longer be the number that was written. Such values must be
/// sent as decimal strings instead.
/// 
/// # Errors
/// 
/// Returns [`IntegerError::FloatingPointNotSupported`] if the magnitude exceeds
/// [`MAX_EXACT_FLOAT`], or the value is NaN.
/// 
fn exact_float(value: f64) -> Result<f64, IntegerError> {
	if value.abs() <= MAX_EXACT_FLOAT {
		Ok(value)
	} else {
		Err(IntegerError::FloatingPointNotSupported)
	}
}

//		specialize																
/// Tags a validated value with its width and signedness.
/// 
/// This is the single place where the twelve supported combinations are
/// enumerated. Any other combination, such as a width of 24, is rejected.
/// 
/// # Parameters
/// 
/// * `width`  - The width, in bits.
/// * `signed` - Whether the integer is signed.
/// * `value`  - The value, which must already have passed validation.
/// 
/// # Errors
/// 
/// Returns [`IntegerError::UnconstructableInteger`] if the combination of width
/// and signedness is not supported.
/// 
pub fn specialize(width: u16, signed: bool, value: BigInt) -> Result<Integer, IntegerError> {
	match (width, signed) {
		(8,   false) => Ok(Integer::Uint8(Word(value))),
		(16,  false) => Ok(Integer::Uint16(Word(value))),
		(32,  false) => Ok(Integer::Uint32(Word(value))),
		(64,  false) => Ok(Integer::Uint64(Word(value))),
		(128, false) => Ok(Integer::Uint128(Word(value))),
		(256, false) => Ok(Integer::Uint256(Word(value))),
		(8,   true)  => Ok(Integer::Int8(Word(value))),
		(16,  true)  => Ok(Integer::Int16(Word(value))),
		(32,  true)  => Ok(Integer::Int32(Word(value))),
		(64,  true)  => Ok(Integer::Int64(Word(value))),
		(128, true)  => Ok(Integer::Int128(Word(value))),
		(256, true)  => Ok(Integer::Int256(Word(value))),
		_            => Err(IntegerError::UnconstructableInteger {
			width,
			signed,
			value: to_decimal_string(&value),
		}),
	}
}

//		integer_to_big															
/// Consumes an [`Integer`], returning its arbitrary-precision value.
#[must_use]
pub fn integer_to_big(integer: Integer) -> BigInt {
	integer.into_value()
}

//		safe_integer_to_big														
/// Lifts [`integer_to_big()`] over the outcome of a construction.
/// 
/// # Errors
/// 
/// Passes through the construction error unchanged.
/// 
pub fn safe_integer_to_big(result: Result<Integer, IntegerError>) -> Result<BigInt, IntegerError> {
	map(integer_to_big)(result)
}
