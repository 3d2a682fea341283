//		Packages

use super::*;
use rubedo::sugar::s;



//		Tests

mod conversions {
	use super::*;

	//		from																
	#[test]
	fn from__strings() {
		assert_eq!(Constructable::from("42"),       Constructable::Decimal(s!("42")));
		assert_eq!(Constructable::from(s!("42")),   Constructable::Decimal(s!("42")));
		assert_eq!(Constructable::from(&s!("42")),  Constructable::Decimal(s!("42")));
	}
	#[test]
	fn from__signed() {
		assert_eq!(Constructable::from(-1_i8),      Constructable::Native(Native::Signed(-1)));
		assert_eq!(Constructable::from(i16::MIN),   Constructable::Native(Native::Signed(-32_768)));
		assert_eq!(Constructable::from(-7_i32),     Constructable::Native(Native::Signed(-7)));
		assert_eq!(Constructable::from(i64::MAX),   Constructable::Native(Native::Signed(i128::from(i64::MAX))));
		assert_eq!(Constructable::from(i128::MIN),  Constructable::Native(Native::Signed(i128::MIN)));
		assert_eq!(Constructable::from(-3_isize),   Constructable::Native(Native::Signed(-3)));
	}
	#[test]
	fn from__unsigned() {
		assert_eq!(Constructable::from(255_u8),     Constructable::Native(Native::Unsigned(255)));
		assert_eq!(Constructable::from(u16::MAX),   Constructable::Native(Native::Unsigned(65_535)));
		assert_eq!(Constructable::from(7_u32),      Constructable::Native(Native::Unsigned(7)));
		assert_eq!(Constructable::from(u64::MAX),   Constructable::Native(Native::Unsigned(u128::from(u64::MAX))));
		assert_eq!(Constructable::from(u128::MAX),  Constructable::Native(Native::Unsigned(u128::MAX)));
		assert_eq!(Constructable::from(3_usize),    Constructable::Native(Native::Unsigned(3)));
	}
	#[test]
	fn from__floats() {
		assert_eq!(Constructable::from(1.5_f32),    Constructable::Native(Native::Float(1.5)));
		assert_eq!(Constructable::from(-2.0_f64),   Constructable::Native(Native::Float(-2.0)));
	}
	#[test]
	fn from__big() {
		let big = BigInt::from(-99);
		assert_eq!(Constructable::from(&big),       Constructable::Big(BigInt::from(-99)));
		assert_eq!(Constructable::from(big),        Constructable::Big(BigInt::from(-99)));
	}
}

mod display {
	use super::*;

	//		fmt																	
	#[test]
	fn fmt__all_shapes() {
		assert_eq!(Constructable::from("6.4").to_string(),             s!("6.4"));
		assert_eq!(Constructable::from(-12_i32).to_string(),           s!("-12"));
		assert_eq!(Constructable::from(12_u8).to_string(),             s!("12"));
		assert_eq!(Constructable::from(28.8_f64).to_string(),          s!("28.8"));
		assert_eq!(Constructable::from(BigInt::from(766)).to_string(), s!("766"));
	}
}
