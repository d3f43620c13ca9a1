use crate::value::Typename;
use std::fmt::{self, Display, Formatter};

/// The runtime type of an [`Object`](crate::value::Object).
///
/// The set is closed: adding a variant means extending both this enum and `TYPE_NAMES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Type {
	None,
	Number,
}

// Indexed by the `Type` discriminant.
const TYPE_NAMES: [Typename; Type::COUNT] = ["None", "Number"];

sa::const_assert_eq!(Type::Number as usize + 1, Type::COUNT);

impl Type {
	/// How many types there are.
	pub const COUNT: usize = 2;

	/// Every type, in discriminant order.
	pub const ALL: [Self; Self::COUNT] = [Self::None, Self::Number];

	/// Gets the human-readable name of `self`.
	#[must_use]
	pub const fn name(self) -> Typename {
		TYPE_NAMES[self as usize]
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str(self.name())
	}
}
