//		Packages

use super::*;
use rubedo::sugar::s;



//		Tests

mod display {
	use super::*;

	//		fmt																	
	#[test]
	fn fmt__invalid_size() {
		let err = IntegerError::InvalidSize { expected: 8, actual: 9 };
		assert_eq!(err.to_string(), s!("Invalid size, expected size: 8, actual size: 9"));
	}
	#[test]
	fn fmt__negative_unsigned() {
		assert_eq!(IntegerError::NegativeUnsigned.to_string(), s!("Cannot construct negative unsigned integers"));
	}
	#[test]
	fn fmt__floating_point() {
		assert_eq!(IntegerError::FloatingPointNotSupported.to_string(), s!("This library does not support decimals."));
	}
	#[test]
	fn fmt__unconstructable() {
		let err = IntegerError::UnconstructableInteger { width: 24, signed: false, value: s!("42") };
		assert_eq!(err.to_string(), s!("Could not construct Integer of size: 24, signed: false, value: 42"));
	}
	#[test]
	fn fmt__overflow() {
		let err = IntegerError::Overflow { capacity: 8, value: s!("128"), required: 9 };
		assert_eq!(err.to_string(), s!("Overflow error: capacity 8, number: 128, required size: 9"));
	}
	#[test]
	fn fmt__underflow() {
		let err = IntegerError::Underflow { capacity: 8, value: s!("-129"), required: 9 };
		assert_eq!(err.to_string(), s!("Underflow error: capacity 8, number: -129, required size: 9"));
	}
	#[test]
	fn fmt__inconsistent_size() {
		let err = IntegerError::InconsistentSize { required: 16, actual: 8 };
		assert_eq!(err.to_string(), s!("Cannot perform operations on different sized numbers. required size: 16, input size: 8"));
	}
	#[test]
	fn fmt__reserved() {
		assert_eq!(IntegerError::TypeNotSupported.to_string(), s!("Handling this type is not supported."));
		assert_eq!(IntegerError::DivisionByZero.to_string(),   s!("Division by zero."));
	}
	#[test]
	fn fmt__malformed_decimal() {
		assert_eq!(IntegerError::MalformedDecimal(s!("12a")).to_string(), s!(r#"Malformed decimal integer: "12a""#));
	}
}
