#![allow(
	// TODOS:
	clippy::missing_errors_doc,

	// Simply my coding style, bite me clippy
	clippy::module_name_repetitions,
)]

extern crate static_assertions as sa;

#[macro_use]
extern crate tracing;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[macro_use]
extern crate cnake_macros;

mod error;

pub mod value;


pub use error::{Error, ErrorKind, Result};
pub use value::ty::{NoneType, Number};
pub use value::{Arithmetic, Object, Operator, ScratchRef, Type, Var};
