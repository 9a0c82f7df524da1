//! `assert*` macros that return errors instead of panicking.
//!
//! Every operand is evaluated exactly once, so moving expressions and `.await`s are fine.

#![allow(unused_macros, unused_macro_rules)]

macro_rules! assert {
	($cond:expr $(,)?) => {
		if !($cond) {
			$crate::testing::bail!(
				"assertion failed: `{}`",
				std::stringify!($cond),
			);
		}
	};
	($cond:expr, $msg:literal $(, $($fmt:tt)*)?) => {
		if !($cond) {
			$crate::testing::bail!(
				"assertion failed: `{}` ({})",
				std::stringify!($cond),
				std::format_args!($msg $(, $($fmt)*)?),
			);
		}
	};
}

macro_rules! assert_eq {
	($lhs:expr, $rhs:expr $(,)?) => {
		match (&$lhs, &$rhs) {
			(lhs, rhs) => {
				if !(*lhs == *rhs) {
					$crate::testing::bail!(
						"assertion failed: `{}` == `{}`\n  left: {:?}\n right: {:?}",
						std::stringify!($lhs),
						std::stringify!($rhs),
						lhs,
						rhs,
					);
				}
			},
		}
	};
	($lhs:expr, $rhs:expr, $msg:literal $(, $($fmt:tt)*)?) => {
		match (&$lhs, &$rhs) {
			(lhs, rhs) => {
				if !(*lhs == *rhs) {
					$crate::testing::bail!(
						"assertion failed: `{}` == `{}` ({})\n  left: {:?}\n right: {:?}",
						std::stringify!($lhs),
						std::stringify!($rhs),
						std::format_args!($msg $(, $($fmt)*)?),
						lhs,
						rhs,
					);
				}
			},
		}
	};
}

macro_rules! assert_ne {
	($lhs:expr, $rhs:expr $(,)?) => {
		match (&$lhs, &$rhs) {
			(lhs, rhs) => {
				if *lhs == *rhs {
					$crate::testing::bail!(
						"assertion failed: `{}` != `{}`\n  left: {:?}\n right: {:?}",
						std::stringify!($lhs),
						std::stringify!($rhs),
						lhs,
						rhs,
					);
				}
			},
		}
	};
	($lhs:expr, $rhs:expr, $msg:literal $(, $($fmt:tt)*)?) => {
		match (&$lhs, &$rhs) {
			(lhs, rhs) => {
				if *lhs == *rhs {
					$crate::testing::bail!(
						"assertion failed: `{}` != `{}` ({})\n  left: {:?}\n right: {:?}",
						std::stringify!($lhs),
						std::stringify!($rhs),
						std::format_args!($msg $(, $($fmt)*)?),
						lhs,
						rhs,
					);
				}
			},
		}
	};
}

macro_rules! assert_matches {
	($expr:expr, $pat:pat $(if $guard:expr)? $(,)?) => {
		match $expr {
			$pat $(if $guard)? => {},
			ref value => {
				$crate::testing::bail!(
					"assertion failed: `{}` does not match `{}`\n value: {:?}",
					std::stringify!($expr),
					std::stringify!($pat),
					value,
				);
			},
		}
	};
	($expr:expr, $pat:pat $(if $guard:expr)?, $msg:literal $(, $($fmt:tt)*)?) => {
		match $expr {
			$pat $(if $guard)? => {},
			ref value => {
				$crate::testing::bail!(
					"assertion failed: `{}` does not match `{}` ({})\n value: {:?}",
					std::stringify!($expr),
					std::stringify!($pat),
					std::format_args!($msg $(, $($fmt)*)?),
					value,
				);
			},
		}
	};
}

#[allow(unused_imports)]
pub(crate) use {assert, assert_eq, assert_matches, assert_ne};

#[cfg(test)]
mod tests
{
	use std::cell::Cell;

	use crate::testing;

	fn eq_trailing_comma(lhs: i32, rhs: i32) -> testing::Result
	{
		testing::assert_eq!(lhs, rhs,);
		testing::assert!(lhs == rhs,);

		Ok(())
	}

	#[test]
	fn accepts_trailing_commas()
	{
		std::assert!(eq_trailing_comma(1, 1).is_ok());
		std::assert!(eq_trailing_comma(1, 2).is_err());
	}

	#[test]
	fn operands_are_evaluated_once() -> testing::Result
	{
		let calls = Cell::new(0);
		let next = || {
			calls.set(calls.get() + 1);
			calls.get()
		};

		let failed = (|| -> testing::Result {
			testing::assert_eq!(next(), 0);
			Ok(())
		})();

		testing::assert!(failed.is_err());
		testing::assert_eq!(calls.get(), 1);

		testing::assert_ne!(next(), 0);
		testing::assert_eq!(calls.get(), 2);

		Ok(())
	}

	#[test]
	fn operands_may_be_moved() -> testing::Result
	{
		let owned = String::from("moved");

		testing::assert_eq!(Some(owned), Some(String::from("moved")));

		Ok(())
	}

	#[test]
	fn matches_with_guard()
	{
		let check = |value: Option<&str>| -> testing::Result {
			testing::assert_matches!(value, Some(text) if text.ends_with("-found"));
			Ok(())
		};

		std::assert!(check(Some("resource-not-found")).is_ok());
		std::assert!(check(Some("internal")).is_err());
		std::assert!(check(None).is_err());
	}
}
