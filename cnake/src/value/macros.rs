// Implements the `std::ops` operators for `$lhs <op> $rhs` in terms of `Arithmetic`.
macro_rules! impl_operators {
	(@op $lhs:ty, $rhs:ty => $out:ty;
		$trait:ident $method:ident $assign_trait:ident $assign_method:ident $op:ident
	) => {
		impl std::ops::$trait<&$rhs> for &$lhs {
			type Output = $out;

			#[inline]
			fn $method(self, rhs: &$rhs) -> $out {
				<$lhs as $crate::value::Arithmetic<$rhs>>::operate(self, $crate::value::Operator::$op, rhs)
			}
		}

		impl std::ops::$trait<&$rhs> for $lhs {
			type Output = $out;

			#[inline]
			fn $method(self, rhs: &$rhs) -> $out {
				<$lhs as $crate::value::Arithmetic<$rhs>>::operate(&self, $crate::value::Operator::$op, rhs)
			}
		}

		impl std::ops::$trait<$rhs> for &$lhs {
			type Output = $out;

			#[inline]
			fn $method(self, rhs: $rhs) -> $out {
				<$lhs as $crate::value::Arithmetic<$rhs>>::operate(self, $crate::value::Operator::$op, &rhs)
			}
		}

		impl std::ops::$trait<$rhs> for $lhs {
			type Output = $out;

			#[inline]
			fn $method(self, rhs: $rhs) -> $out {
				<$lhs as $crate::value::Arithmetic<$rhs>>::operate(&self, $crate::value::Operator::$op, &rhs)
			}
		}

		impl std::ops::$assign_trait<&$rhs> for $lhs {
			#[inline]
			fn $assign_method(&mut self, rhs: &$rhs) {
				<$lhs as $crate::value::Arithmetic<$rhs>>::operate_in_place(
					self,
					$crate::value::Operator::$op,
					rhs,
				);
			}
		}

		impl std::ops::$assign_trait<$rhs> for $lhs {
			#[inline]
			fn $assign_method(&mut self, rhs: $rhs) {
				<$lhs as $crate::value::Arithmetic<$rhs>>::operate_in_place(
					self,
					$crate::value::Operator::$op,
					&rhs,
				);
			}
		}
	};
	($lhs:ty, $rhs:ty => $out:ty) => {
		impl_operators!(@op $lhs, $rhs => $out; Add add AddAssign add_assign Add);
		impl_operators!(@op $lhs, $rhs => $out; Sub sub SubAssign sub_assign Sub);
		impl_operators!(@op $lhs, $rhs => $out; Mul mul MulAssign mul_assign Mul);
		impl_operators!(@op $lhs, $rhs => $out; Div div DivAssign div_assign Div);
	};
}

// Adds `{add,sub,mul,div}_scratch` to a type with an `operate_scratch` method.
macro_rules! impl_scratch_operators {
	($ty:ty) => {
		impl $ty {
			/// Computes `self + rhs` into this thread's scratch slot.
			pub fn add_scratch(&self, rhs: &$crate::value::Object) -> $crate::value::ScratchRef {
				self.operate_scratch($crate::value::Operator::Add, rhs)
			}

			/// Computes `self - rhs` into this thread's scratch slot.
			pub fn sub_scratch(&self, rhs: &$crate::value::Object) -> $crate::value::ScratchRef {
				self.operate_scratch($crate::value::Operator::Sub, rhs)
			}

			/// Computes `self * rhs` into this thread's scratch slot.
			pub fn mul_scratch(&self, rhs: &$crate::value::Object) -> $crate::value::ScratchRef {
				self.operate_scratch($crate::value::Operator::Mul, rhs)
			}

			/// Computes `self / rhs` into this thread's scratch slot.
			pub fn div_scratch(&self, rhs: &$crate::value::Object) -> $crate::value::ScratchRef {
				self.operate_scratch($crate::value::Operator::Div, rhs)
			}
		}
	};
}
