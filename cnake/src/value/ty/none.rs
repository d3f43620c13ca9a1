use crate::value::ty::Number;
use crate::value::{Arithmetic, Convertible, Object, Operator};
use std::fmt::{self, Display, Formatter};

/// The "no value" variant. It's what a default [`Var`](crate::Var) holds.
///
/// `None` isn't a zero: on its own it absorbs arithmetic, and against a number it's read as zero
/// with the operands swapped (`None - 3` is `3 - 0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, NamedType)]
#[type_tag(None)]
pub struct NoneType;

impl Convertible for NoneType {
	fn downcast(object: &Object) -> Option<&Self> {
		match object {
			Object::None(none) => Some(none),
			_ => None,
		}
	}

	fn downcast_mut(object: &mut Object) -> Option<&mut Self> {
		match object {
			Object::None(none) => Some(none),
			_ => None,
		}
	}
}

impl Arithmetic<Object> for NoneType {
	type Output = Object;

	fn operate(&self, op: Operator, rhs: &Object) -> Object {
		match rhs {
			Object::None(_) => Object::NONE,
			Object::Number(number) => {
				Object::Number(<Number as Arithmetic<Object>>::operate(number, op, &Object::from(*self)))
			}
		}
	}

	fn operate_in_place(&mut self, _: Operator, _: &Object) {}
}

impl Display for NoneType {
	fn fmt(&self, _: &mut Formatter) -> fmt::Result {
		Ok(())
	}
}
