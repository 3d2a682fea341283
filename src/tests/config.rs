//		Packages

use super::*;
use claims::{assert_err, assert_ok_eq};
use rubedo::sugar::s;



//		Tests

mod defaults {
	use super::*;

	//		default																
	#[test]
	fn default__bit_length() {
		assert_eq!(SignedRange::default(),                    SignedRange::BitLength);
		assert_eq!(ConstructorConfig::default().signed_range, SignedRange::BitLength);
	}

	//		new																	
	#[test]
	fn new__sets_policy() {
		assert_eq!(ConstructorConfig::new(SignedRange::TwosComplement).signed_range, SignedRange::TwosComplement);
	}
}

mod serialization {
	use super::*;

	//		serialize															
	#[test]
	fn serialize__config() {
		let json = serde_json::to_string(&ConstructorConfig::new(SignedRange::TwosComplement)).unwrap();
		assert_eq!(json, s!(r#"{"signed_range":"twos_complement"}"#));
	}

	//		deserialize															
	#[test]
	fn deserialize__empty() {
		assert_ok_eq!(serde_json::from_str::<ConstructorConfig>("{}"), ConstructorConfig::default());
	}
	#[test]
	fn deserialize__bit_length() {
		assert_ok_eq!(
			serde_json::from_str::<ConstructorConfig>(r#"{"signed_range":"bit_length"}"#),
			ConstructorConfig::new(SignedRange::BitLength),
		);
	}
	#[test]
	fn deserialize__unknown_policy() {
		assert_err!(serde_json::from_str::<ConstructorConfig>(r#"{"signed_range":"saturating"}"#));
	}
}
