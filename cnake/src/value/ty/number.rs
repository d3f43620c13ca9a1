use crate::value::{scratch, Arithmetic, Convertible, Object, Operator, ScratchRef};
use crate::{ErrorKind, Result};
use num_traits::{AsPrimitive, ToPrimitive};
use std::fmt::{self, Debug, Display, Formatter};

/// The numeric variant: a single `f64`.
#[derive(Clone, Copy, Default, PartialEq, PartialOrd, NamedType)]
pub struct Number(f64);

sa::assert_eq_size!(Number, f64);
sa::assert_eq_align!(Number, f64);

impl Number {
	pub const ZERO: Self = Self(0.0);
	pub const ONE: Self = Self(1.0);

	#[must_use]
	pub const fn new(value: f64) -> Self {
		Self(value)
	}

	/// Gets the underlying `f64`.
	#[must_use]
	pub const fn get(self) -> f64 {
		self.0
	}

	/// Truncates `self` towards zero, failing for NaN, infinities, and anything outside of `i64`.
	pub fn to_integer(self) -> Result<i64> {
		self
			.0
			.to_i64()
			.ok_or_else(|| ErrorKind::ConversionFailed { object: self.into(), into: "i64" }.into())
	}

	/// Reads the payload of `object`, substituting zero when it isn't a [`Number`].
	///
	/// This is the one rule every operator uses for its right-hand side.
	#[must_use]
	pub fn extract(object: &Object) -> f64 {
		if let Object::Number(number) = object {
			return number.0;
		}

		trace!(target: "number", given=%object.typename(), "non-number operand read as zero");
		0.0
	}

	/// Computes `self <op> rhs` into this thread's scratch slot.
	pub fn operate_scratch(&self, op: Operator, rhs: &Object) -> ScratchRef {
		scratch::store(<Self as Arithmetic<Object>>::operate(self, op, rhs))
	}
}

impl_scratch_operators!(Number);

impl Convertible for Number {
	fn downcast(object: &Object) -> Option<&Self> {
		match object {
			Object::Number(number) => Some(number),
			_ => None,
		}
	}

	fn downcast_mut(object: &mut Object) -> Option<&mut Self> {
		match object {
			Object::Number(number) => Some(number),
			_ => None,
		}
	}
}

macro_rules! impl_from_primitive {
	($($prim:ty),*) => {
		$(
			impl From<$prim> for Number {
				#[inline]
				fn from(value: $prim) -> Self {
					Self(value.as_())
				}
			}
		)*
	};
}

impl_from_primitive!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<bool> for Number {
	#[inline]
	fn from(value: bool) -> Self {
		Self(u8::from(value).as_())
	}
}

impl From<&Object> for Number {
	fn from(object: &Object) -> Self {
		Self(Self::extract(object))
	}
}

impl From<Number> for f64 {
	fn from(number: Number) -> Self {
		number.0
	}
}

impl Arithmetic<f64> for Number {
	type Output = Self;

	#[inline]
	fn operate(&self, op: Operator, rhs: &f64) -> Self {
		Self(op.apply(self.0, *rhs))
	}

	#[inline]
	fn operate_in_place(&mut self, op: Operator, rhs: &f64) {
		self.0 = op.apply(self.0, *rhs);
	}
}

impl Arithmetic for Number {
	type Output = Self;

	#[inline]
	fn operate(&self, op: Operator, rhs: &Self) -> Self {
		<Self as Arithmetic<f64>>::operate(self, op, &rhs.0)
	}

	#[inline]
	fn operate_in_place(&mut self, op: Operator, rhs: &Self) {
		<Self as Arithmetic<f64>>::operate_in_place(self, op, &rhs.0);
	}
}

impl Arithmetic<Object> for Number {
	type Output = Self;

	#[inline]
	fn operate(&self, op: Operator, rhs: &Object) -> Self {
		<Self as Arithmetic<f64>>::operate(self, op, &Self::extract(rhs))
	}

	#[inline]
	fn operate_in_place(&mut self, op: Operator, rhs: &Object) {
		<Self as Arithmetic<f64>>::operate_in_place(self, op, &Self::extract(rhs));
	}
}

impl_operators!(Number, f64 => Number);
impl_operators!(Number, Number => Number);
impl_operators!(Number, Object => Number);

impl Debug for Number {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		if f.alternate() {
			write!(f, "Number({:?})", self.0)
		} else {
			Debug::fmt(&self.0, f)
		}
	}
}

// Fixed notation with six decimals, the same as C's `std::to_string(double)`.
impl Display for Number {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		let value = self.0;

		if value.is_nan() {
			f.write_str(if value.is_sign_negative() { "-nan" } else { "nan" })
		} else if value.is_infinite() {
			f.write_str(if value.is_sign_negative() { "-inf" } else { "inf" })
		} else {
			write!(f, "{value:.6}")
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::{HasTypeTag, NamedType, Type};
	use crate::NoneType;

	#[test]
	fn test_named_type() {
		assert_eq!("Number", Number::TYPENAME);
		assert_eq!(Type::Number, Number::TYPE_TAG);
		assert_eq!(Number::TYPE_TAG.name(), Number::TYPENAME);
	}

	#[test]
	fn test_from_primitives() {
		assert_eq!(5.0, Number::from(5).get());
		assert_eq!(-2.0, Number::from(-2i64).get());
		assert_eq!(255.0, Number::from(255u8).get());
		assert_eq!(f64::from(7.0546_f32), Number::from(7.0546_f32).get());
		assert_eq!(1.0, Number::from(true).get());
		assert_eq!(0.0, Number::from(false).get());
	}

	#[test]
	fn test_from_object() {
		assert_eq!(4.5, Number::from(&Object::from(4.5)).get());
		assert_eq!(0.0, Number::from(&Object::NONE).get());
	}

	#[test]
	fn test_display() {
		assert_eq!("0.000000", Number::ZERO.to_string());
		assert_eq!("5.000000", Number::new(5.0).to_string());
		assert_eq!("-0.500000", Number::new(-0.5).to_string());
		assert_eq!("7.054600", Number::new(7.0546).to_string());
		assert_eq!("1234567.125000", Number::new(1_234_567.125).to_string());
		assert_eq!("inf", Number::new(f64::INFINITY).to_string());
		assert_eq!("-inf", Number::new(f64::NEG_INFINITY).to_string());
		assert!(Number::new(f64::NAN).to_string().ends_with("nan"));
	}

	#[test]
	fn test_display_is_never_scientific() {
		assert_eq!("100000000000000000000.000000", Number::new(1e20).to_string());
		assert_eq!("0.000000", Number::new(1e-20).to_string());
	}

	#[test]
	fn test_debug() {
		assert_eq!("4.5", format!("{:?}", Number::new(4.5)));
		assert_eq!("Number(4.5)", format!("{:#?}", Number::new(4.5)));
	}

	#[test]
	fn test_binary_operators() {
		let a = Number::new(6.0);
		let b = Number::new(4.0);

		assert_eq!(10.0, (a + b).get());
		assert_eq!(2.0, (a - b).get());
		assert_eq!(24.0, (a * b).get());
		assert_eq!(1.5, (a / b).get());

		assert_eq!(8.0, (a + 2.0).get());
		assert_eq!(3.0, (&a / &2.0).get());
	}

	#[test]
	fn test_binary_operators_leave_operands_alone() {
		let a = Number::new(6.0);
		let b = Object::from(4.0);
		let _ = &a * &b;

		assert_eq!("6.000000", a.to_string());
		assert_eq!("4.000000", b.to_string());
	}

	#[test]
	fn test_non_number_operand_is_zero() {
		let a = Number::new(6.0);
		let none = Object::from(NoneType);

		assert_eq!(6.0, (&a + &none).get());
		assert_eq!(6.0, (&a - &none).get());
		assert_eq!(0.0, (&a * &none).get());
		assert_eq!(f64::INFINITY, (&a / &none).get());
	}

	#[test]
	fn test_compound_operators() {
		let mut n = Number::new(1.0);
		n += Number::new(5.0);
		assert_eq!("6.000000", n.to_string());

		n -= 2.0;
		n *= &Object::from(3.0);
		n /= Number::new(4.0);
		assert_eq!(3.0, n.get());

		n += &Object::NONE;
		assert_eq!(3.0, n.get());
		n *= Object::NONE;
		assert_eq!(0.0, n.get());
	}

	#[test]
	fn test_in_place_returns_self() {
		let mut n = Number::new(1.0);
		let returned: *const Number = n.add_in_place(&Number::new(5.0));

		assert!(std::ptr::eq(returned, &n));
		assert_eq!(6.0, n.get());

		n.sub_in_place(&1.0).mul_in_place(&2.0).div_in_place(&Object::from(5.0));
		assert_eq!(2.0, n.get());
	}

	#[test]
	fn test_divide_by_zero() {
		assert_eq!(f64::INFINITY, (Number::ONE / Number::ZERO).get());
		assert_eq!(f64::NEG_INFINITY, (Number::new(-1.0) / 0.0).get());
		assert!((Number::ZERO / Number::ZERO).get().is_nan());
	}

	#[test]
	fn test_to_integer() {
		assert_eq!(7, Number::new(7.9).to_integer().unwrap());
		assert_eq!(-7, Number::new(-7.9).to_integer().unwrap());

		assert_matches!(
			Number::new(f64::NAN).to_integer(),
			Err(crate::Error { kind: ErrorKind::ConversionFailed { into: "i64", .. } })
		);
		assert!(Number::new(f64::INFINITY).to_integer().is_err());
		assert!(Number::new(1e300).to_integer().is_err());
	}

	#[test]
	fn test_downcast() {
		let mut object = Object::from(3.0);
		assert_eq!(Some(&Number::new(3.0)), Number::downcast(&object));
		assert!(Number::is_a(&object));

		*Number::downcast_mut(&mut object).unwrap() += 1.0;
		assert_eq!("4.000000", object.to_string());

		assert!(Number::downcast(&Object::NONE).is_none());
		assert!(!Number::is_a(&Object::NONE));
	}
}
