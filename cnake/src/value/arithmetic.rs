use std::fmt::{self, Display, Formatter};

/// One of the four arithmetic operators every value supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
	Add,
	Sub,
	Mul,
	Div,
}

impl Operator {
	/// Applies `self` to two raw numbers. Division by zero yields infinity or NaN.
	#[inline]
	#[must_use]
	pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
		match self {
			Self::Add => lhs + rhs,
			Self::Sub => lhs - rhs,
			Self::Mul => lhs * rhs,
			Self::Div => lhs / rhs,
		}
	}

	#[must_use]
	pub const fn symbol(self) -> &'static str {
		match self {
			Self::Add => "+",
			Self::Sub => "-",
			Self::Mul => "*",
			Self::Div => "/",
		}
	}
}

impl Display for Operator {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str(self.symbol())
	}
}

/// Arithmetic between a value and a right-hand side of type `Rhs`.
///
/// The `std::ops` operators on values are all defined in terms of this trait. The `*_in_place`
/// methods are the compound operators, but they hand back `self` so they can be chained.
pub trait Arithmetic<Rhs: ?Sized = Self> {
	type Output;

	/// Computes `self <op> rhs` without modifying either side.
	fn operate(&self, op: Operator, rhs: &Rhs) -> Self::Output;

	/// Computes `self <op>= rhs`.
	fn operate_in_place(&mut self, op: Operator, rhs: &Rhs);

	fn add_in_place(&mut self, rhs: &Rhs) -> &mut Self {
		self.operate_in_place(Operator::Add, rhs);
		self
	}

	fn sub_in_place(&mut self, rhs: &Rhs) -> &mut Self {
		self.operate_in_place(Operator::Sub, rhs);
		self
	}

	fn mul_in_place(&mut self, rhs: &Rhs) -> &mut Self {
		self.operate_in_place(Operator::Mul, rhs);
		self
	}

	fn div_in_place(&mut self, rhs: &Rhs) -> &mut Self {
		self.operate_in_place(Operator::Div, rhs);
		self
	}
}
