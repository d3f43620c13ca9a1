#[macro_use]
mod macros;

pub mod ty;

mod arithmetic;
mod object;
pub mod scratch;
mod tag;
mod var;

pub use arithmetic::{Arithmetic, Operator};
pub use object::Object;
pub use scratch::ScratchRef;
pub use tag::Type;
pub use var::Var;

pub type Typename = &'static str;

/// A type with a human-readable name, as reported by [`Object::typename`].
pub trait NamedType {
	const TYPENAME: Typename;
}

/// Indicates a type is one of the [`Object`] variants, identified by `TYPE_TAG`.
pub trait HasTypeTag {
	const TYPE_TAG: Type;
}

/// A variant that can be pulled back out of an [`Object`].
pub trait Convertible: NamedType + HasTypeTag + Sized {
	fn downcast(object: &Object) -> Option<&Self>;

	fn downcast_mut(object: &mut Object) -> Option<&mut Self>;

	#[must_use]
	fn is_a(object: &Object) -> bool {
		object.type_tag() == Self::TYPE_TAG
	}
}
