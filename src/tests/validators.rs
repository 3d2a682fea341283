//		Packages

use super::*;
use claims::{assert_err_eq, assert_ok_eq};
use rubedo::sugar::s;



//		Tests

mod integrality {
	use super::*;

	//		integrality_check													
	#[test]
	fn integrality_check__non_decimal_string() {
		assert_ok_eq!(integrality_check(Constructable::from("64")), Constructable::from("64"));
	}
	#[test]
	fn integrality_check__non_decimal_number() {
		assert_ok_eq!(integrality_check(Constructable::from(288)),       Constructable::from(288));
		assert_ok_eq!(integrality_check(Constructable::from(288.0_f64)), Constructable::from(288.0_f64));
		assert_ok_eq!(integrality_check(Constructable::from(-0.0_f64)),  Constructable::from(-0.0_f64));
	}
	#[test]
	fn integrality_check__big() {
		let big = BigInt::from(288);
		assert_ok_eq!(integrality_check(Constructable::from(&big)), Constructable::from(big));
	}
	#[test]
	fn integrality_check__decimal_string() {
		assert_err_eq!(integrality_check(Constructable::from("6.4")),  IntegerError::FloatingPointNotSupported);
		assert_err_eq!(integrality_check(Constructable::from("6.")),   IntegerError::FloatingPointNotSupported);
		assert_err_eq!(integrality_check(Constructable::from(".5")),   IntegerError::FloatingPointNotSupported);
		assert_err_eq!(integrality_check(Constructable::from("6.0")),  IntegerError::FloatingPointNotSupported);
	}
	#[test]
	fn integrality_check__decimal_number() {
		assert_err_eq!(integrality_check(Constructable::from(28.8_f64)), IntegerError::FloatingPointNotSupported);
		assert_err_eq!(integrality_check(Constructable::from(0.5_f32)),  IntegerError::FloatingPointNotSupported);
	}
	#[test]
	fn integrality_check__non_finite() {
		assert_err_eq!(integrality_check(Constructable::from(f64::NAN)),          IntegerError::FloatingPointNotSupported);
		assert_err_eq!(integrality_check(Constructable::from(f64::INFINITY)),     IntegerError::FloatingPointNotSupported);
		assert_err_eq!(integrality_check(Constructable::from(f64::NEG_INFINITY)), IntegerError::FloatingPointNotSupported);
	}
	#[test]
	fn integrality_check__malformed_left_for_parser() {
		assert_ok_eq!(integrality_check(Constructable::from("abc")), Constructable::from("abc"));
	}
}

mod bit_length {
	use super::*;

	//		bit_length_check													
	#[test]
	fn bit_length_check__at_limit() {
		for width in 1_u16..=256 {
			let max: BigInt = (BigInt::from(1) << width) - 1;
			assert_ok_eq!(bit_length_check(width)(max.clone()), max);
		}
	}
	#[test]
	fn bit_length_check__over_limit() {
		for width in 1_u16..=256 {
			let over = BigInt::from(1) << width;
			assert_err_eq!(
				bit_length_check(width)(over),
				IntegerError::InvalidSize { expected: width, actual: u64::from(width) + 1 },
			);
		}
	}
	#[test]
	fn bit_length_check__eight_bits() {
		assert_ok_eq!(bit_length_check(8)(BigInt::from(255)),   BigInt::from(255));
		assert_ok_eq!(bit_length_check(8)(BigInt::from(-255)),  BigInt::from(-255));
		assert_err_eq!(bit_length_check(8)(BigInt::from(256)),  IntegerError::InvalidSize { expected: 8, actual: 9 });
		assert_err_eq!(bit_length_check(8)(BigInt::from(-256)), IntegerError::InvalidSize { expected: 8, actual: 9 });
	}
	#[test]
	fn bit_length_check__zero() {
		assert_ok_eq!(bit_length_check(0)(BigInt::from(0)), BigInt::from(0));
		assert_ok_eq!(bit_length_check(8)(BigInt::from(0)), BigInt::from(0));
	}
}

mod sign {
	use super::*;

	//		negative_check														
	#[test]
	fn negative_check__positive() {
		assert_ok_eq!(negative_check(BigInt::from(1)), BigInt::from(1));
	}
	#[test]
	fn negative_check__zero() {
		assert_ok_eq!(negative_check(BigInt::from(0)), BigInt::from(0));
	}
	#[test]
	fn negative_check__negative() {
		assert_err_eq!(negative_check(BigInt::from(-1)), IntegerError::NegativeUnsigned);
	}
}

mod signed_range {
	use super::*;

	//		signed_range_check													
	#[test]
	fn signed_range_check__within() {
		let check = signed_range_check(8);
		assert_ok_eq!(check(BigInt::from(127)),  BigInt::from(127));
		assert_ok_eq!(check(BigInt::from(-128)), BigInt::from(-128));
		assert_ok_eq!(check(BigInt::from(0)),    BigInt::from(0));
		assert_ok_eq!(check(BigInt::from(-1)),   BigInt::from(-1));
	}
	#[test]
	fn signed_range_check__overflow() {
		assert_err_eq!(
			signed_range_check(8)(BigInt::from(128)),
			IntegerError::Overflow { capacity: 8, value: s!("128"), required: 9 },
		);
		assert_err_eq!(
			signed_range_check(8)(BigInt::from(255)),
			IntegerError::Overflow { capacity: 8, value: s!("255"), required: 9 },
		);
	}
	#[test]
	fn signed_range_check__underflow() {
		assert_err_eq!(
			signed_range_check(8)(BigInt::from(-129)),
			IntegerError::Underflow { capacity: 8, value: s!("-129"), required: 9 },
		);
		assert_err_eq!(
			signed_range_check(8)(BigInt::from(-256)),
			IntegerError::Underflow { capacity: 8, value: s!("-256"), required: 9 },
		);
	}
	#[test]
	fn signed_range_check__all_widths() {
		for width in [8_u16, 16, 32, 64, 128, 256] {
			let check = signed_range_check(width);
			let half  = BigInt::from(1) << (width - 1);
			assert_ok_eq!(check(&half - 1),         &half - 1);
			assert_ok_eq!(check(-half.clone()),     -half.clone());
			assert!(check(half.clone()).is_err());
			assert!(check(-half - 1).is_err());
		}
	}
}
