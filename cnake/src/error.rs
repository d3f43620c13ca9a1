use crate::value::{Object, Typename};
use std::fmt::{self, Display, Formatter};

/// An error that was raised while inspecting or converting a value.
#[derive(Debug)]
#[must_use]
pub struct Error {
	pub kind: ErrorKind,
}

/// Type alias for [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Possible errors that can occur within cnake.
///
/// Arithmetic never produces one of these: mismatched operands are read as zero instead.
#[derive(Debug)]
#[must_use]
#[non_exhaustive]
pub enum ErrorKind {
	/// An `expected` type was required but a `given` was given.
	InvalidTypeGiven { expected: Typename, given: Typename },

	/// `object` can't be represented as an `into`.
	ConversionFailed { object: Object, into: &'static str },
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		if f.alternate() {
			write!(f, "error: {}\nkind: {:?}", self.kind, self.kind)
		} else {
			Display::fmt(&self.kind, f)
		}
	}
}

impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Self::InvalidTypeGiven { expected, given } => {
				write!(f, "invalid type {given:?}, expected {expected:?}")
			}
			Self::ConversionFailed { object, into } => {
				write!(f, "conversion {object:?} failed for {into:?}")
			}
		}
	}
}

impl From<ErrorKind> for Error {
	fn from(kind: ErrorKind) -> Self {
		Self { kind }
	}
}

impl std::error::Error for Error {}
