use crate::value::ty::{NoneType, Number};
use crate::value::{Arithmetic, Object, Operator, Type, Typename};
use std::fmt::{self, Debug, Display, Formatter};
use std::rc::Rc;

/// A handle that can hold any [`Object`] and forwards arithmetic to it.
///
/// `Var`s have value semantics. Cloning one is cheap, as the two handles share the same
/// allocation, but the compound operators copy the object out before modifying it if it's shared.
/// So mutating one `Var` is never visible through another.
#[derive(Clone, Default, PartialEq)]
pub struct Var(Rc<Object>);

sa::assert_not_impl_any!(Var: Send, Sync);

impl Var {
	/// Creates a `Var` holding `None`.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces what `self` holds with a copy of `object`.
	pub fn assign(&mut self, object: &Object) -> &mut Self {
		self.0 = Rc::new(object.clone());
		self
	}

	#[must_use]
	pub fn object(&self) -> &Object {
		&self.0
	}

	#[must_use]
	pub fn into_object(self) -> Object {
		Rc::try_unwrap(self.0).unwrap_or_else(|shared| (*shared).clone())
	}

	#[must_use]
	pub fn type_tag(&self) -> Type {
		self.0.type_tag()
	}

	#[must_use]
	pub fn typename(&self) -> Typename {
		self.0.typename()
	}

	/// Checks to see whether `self` and `rhs` currently share the same allocation.
	#[must_use]
	pub fn shares_storage_with(&self, rhs: &Self) -> bool {
		Rc::ptr_eq(&self.0, &rhs.0)
	}

	fn object_mut(&mut self) -> &mut Object {
		Rc::make_mut(&mut self.0)
	}
}

impl AsRef<Object> for Var {
	fn as_ref(&self) -> &Object {
		&self.0
	}
}

impl From<Object> for Var {
	fn from(object: Object) -> Self {
		Self(Rc::new(object))
	}
}

impl From<&Object> for Var {
	fn from(object: &Object) -> Self {
		Self::from(object.clone())
	}
}

macro_rules! impl_from_via_object {
	($($from:ty),*) => {
		$(
			impl From<$from> for Var {
				#[inline]
				fn from(value: $from) -> Self {
					Self::from(Object::from(value))
				}
			}
		)*
	};
}

impl_from_via_object!(NoneType, Number, i32, i64, f32, f64, bool);

impl Arithmetic for Var {
	type Output = Self;

	fn operate(&self, op: Operator, rhs: &Self) -> Self {
		Self::from(self.0.operate(op, &*rhs.0))
	}

	fn operate_in_place(&mut self, op: Operator, rhs: &Self) {
		self.object_mut().operate_in_place(op, &*rhs.0);
	}
}

impl Arithmetic<Object> for Var {
	type Output = Self;

	fn operate(&self, op: Operator, rhs: &Object) -> Self {
		Self::from(self.0.operate(op, rhs))
	}

	fn operate_in_place(&mut self, op: Operator, rhs: &Object) {
		self.object_mut().operate_in_place(op, rhs);
	}
}

impl Arithmetic<f64> for Var {
	type Output = Self;

	fn operate(&self, op: Operator, rhs: &f64) -> Self {
		<Self as Arithmetic<Object>>::operate(self, op, &Object::from(*rhs))
	}

	fn operate_in_place(&mut self, op: Operator, rhs: &f64) {
		<Self as Arithmetic<Object>>::operate_in_place(self, op, &Object::from(*rhs));
	}
}

impl_operators!(Var, Var => Var);
impl_operators!(Var, Object => Var);
impl_operators!(Var, f64 => Var);

impl Display for Var {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		Display::fmt(&*self.0, f)
	}
}

impl Debug for Var {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.debug_tuple("Var").field(&*self.0).finish()
	}
}
