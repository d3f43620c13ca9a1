//! The per-thread scratch slot that scratch arithmetic writes its results into.
//!
//! A [`ScratchRef`] doesn't hold a copy of its result: it reads the slot whenever it's looked at.
//! So the next scratch operation on the same thread overwrites every outstanding `ScratchRef`:
//!
//! ```
//! # use cnake::Object;
//! let x = Object::from(1.0).add_scratch(&Object::from(2.0));
//! let y = Object::from(10.0).add_scratch(&Object::from(20.0));
//!
//! assert_eq!("30.000000", x.to_string()); // not `3.000000`!
//! assert_eq!("30.000000", y.to_string());
//! ```
//!
//! Nothing detects a stale read. Use the plain operators, which return owned values, to avoid this.
use crate::value::ty::Number;
use crate::value::{Object, Type, Typename};
use std::cell::Cell;
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;

thread_local! {
	static SLOT: Cell<Number> = const { Cell::new(Number::ZERO) };
}

/// A handle to the result of a scratch operation.
///
/// It's tied to the thread that created it, as each thread has its own slot.
#[derive(Clone, Copy)]
#[must_use]
pub struct ScratchRef {
	kind: Kind,
	_thread: PhantomData<*const ()>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
	Failsafe,
	Slot,
}

sa::assert_not_impl_any!(ScratchRef: Send, Sync);

/// Overwrites the current thread's slot with `number`.
pub(crate) fn store(number: Number) -> ScratchRef {
	SLOT.with(|slot| slot.set(number));
	trace!(target: "scratch", %number, "wrote scratch slot");

	ScratchRef::IN_SLOT
}

/// Gets what's currently in this thread's slot.
#[must_use]
pub fn current() -> Number {
	SLOT.with(Cell::get)
}

impl ScratchRef {
	/// The result of `None <op> None`. It always reads as `None`.
	pub const FAILSAFE: Self = Self { kind: Kind::Failsafe, _thread: PhantomData };

	const IN_SLOT: Self = Self { kind: Kind::Slot, _thread: PhantomData };

	/// Reads the value this refers to, as it is right now.
	#[must_use]
	pub fn get(self) -> Object {
		match self.kind {
			Kind::Failsafe => Object::NONE,
			Kind::Slot => Object::Number(current()),
		}
	}

	/// Whether this is [`ScratchRef::FAILSAFE`].
	#[must_use]
	pub fn is_failsafe(self) -> bool {
		self.kind == Kind::Failsafe
	}

	#[must_use]
	pub fn type_tag(self) -> Type {
		match self.kind {
			Kind::Failsafe => Type::None,
			Kind::Slot => Type::Number,
		}
	}

	#[must_use]
	pub fn typename(self) -> Typename {
		self.type_tag().name()
	}
}

impl From<ScratchRef> for Object {
	fn from(scratch: ScratchRef) -> Self {
		scratch.get()
	}
}

impl Display for ScratchRef {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		Display::fmt(&self.get(), f)
	}
}

impl Debug for ScratchRef {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.debug_struct("ScratchRef").field("kind", &self.kind).field("value", &self.get()).finish()
	}
}
