use crate::value::ty::{NoneType, Number};
use crate::value::{scratch, Arithmetic, Convertible, Operator, ScratchRef, Type, Typename};
use crate::{ErrorKind, Result};
use std::fmt::{self, Debug, Display, Formatter};

/// Any value cnake knows about.
///
/// The variant set is closed, so operators dispatch with a `match` instead of through a vtable.
#[derive(Clone, PartialEq)]
pub enum Object {
	None(NoneType),
	Number(Number),
}

sa::assert_impl_all!(Object: Send, Sync);

impl Default for Object {
	fn default() -> Self {
		Self::NONE
	}
}

impl Object {
	/// The shared `None` value that `None <op> None` evaluates to.
	pub const NONE: Self = Self::None(NoneType);

	/// Gets the runtime type of `self`.
	#[must_use]
	pub const fn type_tag(&self) -> Type {
		match self {
			Self::None(_) => Type::None,
			Self::Number(_) => Type::Number,
		}
	}

	/// Gets the name of `self`'s type.
	#[must_use]
	pub const fn typename(&self) -> Typename {
		self.type_tag().name()
	}

	/// Checks to see if `self` is a `T`.
	#[must_use]
	pub fn is_a<T: Convertible>(&self) -> bool {
		T::is_a(self)
	}

	/// Gets `self` as a `T`, if it is one.
	#[must_use]
	pub fn downcast<T: Convertible>(&self) -> Option<&T> {
		T::downcast(self)
	}

	/// Gets `self` mutably as a `T`, if it is one.
	#[must_use]
	pub fn downcast_mut<T: Convertible>(&mut self) -> Option<&mut T> {
		T::downcast_mut(self)
	}

	/// Attempts to [`downcast`](Self::downcast) `self` to a `T`, returning an `Err` if it cant.
	pub fn try_downcast<T: Convertible>(&self) -> Result<&T> {
		self.downcast::<T>().ok_or_else(|| {
			ErrorKind::InvalidTypeGiven { expected: T::TYPENAME, given: self.typename() }.into()
		})
	}

	/// Computes `self <op> rhs` into this thread's scratch slot.
	///
	/// `None <op> None` doesn't touch the slot; it returns the failsafe [`ScratchRef`] instead.
	pub fn operate_scratch(&self, op: Operator, rhs: &Self) -> ScratchRef {
		match self.operate(op, rhs) {
			Self::None(_) => ScratchRef::FAILSAFE,
			Self::Number(number) => scratch::store(number),
		}
	}
}

impl_scratch_operators!(Object);

impl Arithmetic for Object {
	type Output = Self;

	fn operate(&self, op: Operator, rhs: &Self) -> Self {
		match self {
			Self::None(none) => none.operate(op, rhs),
			Self::Number(number) => Self::Number(<Number as Arithmetic<Self>>::operate(number, op, rhs)),
		}
	}

	fn operate_in_place(&mut self, op: Operator, rhs: &Self) {
		match self {
			Self::None(none) => none.operate_in_place(op, rhs),
			Self::Number(number) => <Number as Arithmetic<Self>>::operate_in_place(number, op, rhs),
		}
	}
}

impl_operators!(Object, Object => Object);

impl From<NoneType> for Object {
	fn from(none: NoneType) -> Self {
		Self::None(none)
	}
}

impl From<Number> for Object {
	fn from(number: Number) -> Self {
		Self::Number(number)
	}
}

macro_rules! impl_from_via_number {
	($($prim:ty),*) => {
		$(
			impl From<$prim> for Object {
				#[inline]
				fn from(value: $prim) -> Self {
					Self::Number(Number::from(value))
				}
			}
		)*
	};
}

impl_from_via_number!(i32, i64, f32, f64, bool);

impl Display for Object {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Self::None(none) => Display::fmt(none, f),
			Self::Number(number) => Display::fmt(number, f),
		}
	}
}

impl Debug for Object {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Self::None(_) if f.alternate() => write!(f, "None(None)"),
			Self::None(_) => f.write_str("None"),
			Self::Number(number) if f.alternate() => write!(f, "{}({:?})", self.typename(), number.get()),
			Self::Number(number) => Debug::fmt(number, f),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Error;

	#[test]
	fn test_type_tag_matches_name_table() {
		for object in [Object::NONE, Object::from(1.5)] {
			assert_eq!(object.type_tag().name(), object.typename());
		}

		assert_eq!(Type::None, Object::default().type_tag());
		assert_eq!("Number", Object::from(1).typename());
	}

	#[test]
	fn test_clone_is_independent() {
		let original = Object::from(2.0);
		let mut copy = original.clone();
		copy += Object::from(1.0);

		assert_eq!("2.000000", original.to_string());
		assert_eq!("3.000000", copy.to_string());
	}

	#[test]
	fn test_downcasting() {
		let object = Object::from(2.5);

		assert!(object.is_a::<Number>());
		assert!(!object.is_a::<NoneType>());
		assert_eq!(Some(&Number::new(2.5)), object.downcast::<Number>());
		assert_eq!(None, object.downcast::<NoneType>());

		assert_matches!(
			object.try_downcast::<NoneType>(),
			Err(Error { kind: ErrorKind::InvalidTypeGiven { expected: "None", given: "Number" } })
		);
		assert_matches!(Object::NONE.try_downcast::<NoneType>(), Ok(NoneType));
	}

	#[test]
	fn test_number_arithmetic() {
		let a = Object::from(6.0);
		let b = Object::from(4.0);

		assert_eq!(Object::from(10.0), &a + &b);
		assert_eq!(Object::from(2.0), &a - &b);
		assert_eq!(Object::from(24.0), &a * &b);
		assert_eq!(Object::from(1.5), a / b);
	}

	#[test]
	fn test_none_arithmetic() {
		let sum = Object::NONE + Object::NONE;
		assert_eq!(Type::None, sum.type_tag());
		assert_eq!("", sum.to_string());

		assert_eq!(
			(Object::from(0.0) + Object::from(3.0)).to_string(),
			(Object::NONE + Object::from(3.0)).to_string()
		);
		assert_eq!(Object::from(3.0), Object::from(3.0) + Object::NONE);
	}

	#[test]
	fn test_compound() {
		let mut n = Object::from(1.0);
		let returned: *const Object = n.add_in_place(&Object::from(5.0));
		assert!(std::ptr::eq(returned, &n));
		assert_eq!("6.000000", n.to_string());

		n /= &Object::NONE;
		assert_eq!("inf", n.to_string());

		let mut none = Object::NONE;
		none += Object::from(5.0);
		none *= Object::from(5.0);
		assert_eq!(Object::NONE, none);
	}

	#[test]
	fn test_debug() {
		assert_eq!("None", format!("{:?}", Object::NONE));
		assert_eq!("None(None)", format!("{:#?}", Object::NONE));
		assert_eq!("1.5", format!("{:?}", Object::from(1.5)));
		assert_eq!("Number(1.5)", format!("{:#?}", Object::from(1.5)));
	}
}
