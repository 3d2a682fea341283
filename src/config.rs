//! Construction policy configuration.



//		Modules

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;



//		Packages

use serde::{Deserialize, Serialize};



//		Enums

//		SignedRange																
/// How strictly signed constructors check the range of a value.
/// 
/// Unsigned constructors are unaffected: they always require a non-negative
/// value whose bit length fits the width, which is exactly the unsigned range.
/// 
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[expect(clippy::exhaustive_enums, reason = "Closed set of policies")]
pub enum SignedRange {
	/// Only the bit length of the magnitude is checked against the width. For
	/// an 8-bit signed integer this accepts anything from `-255` to `255`.
	#[default]
	BitLength,

	/// The value must also lie within the two's-complement range of the width,
	/// i.e. `-2^(width - 1)` to `2^(width - 1) - 1`. For an 8-bit signed
	/// integer this accepts `-128` to `127`.
	TwosComplement,
}



//		Structs

//		ConstructorConfig														
/// Configuration for a [`Constructor`](crate::Constructor).
/// 
/// Every field has a default, so an empty document deserialises to the default
/// configuration:
/// 
/// ```
/// use safewords::{ConstructorConfig, SignedRange};
/// 
/// let config: ConstructorConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(config.signed_range, SignedRange::BitLength);
/// 
/// let config: ConstructorConfig = serde_json::from_str(r#"{"signed_range":"twos_complement"}"#).unwrap();
/// assert_eq!(config.signed_range, SignedRange::TwosComplement);
/// ```
/// 
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ConstructorConfig {
	/// The range policy applied by signed constructors.
	pub signed_range: SignedRange,
}

//󰭅		ConstructorConfig														
impl ConstructorConfig {
	//		new																	
	/// Creates a configuration with the given signed range policy.
	#[must_use]
	pub const fn new(signed_range: SignedRange) -> Self {
		Self { signed_range }
	}
}
