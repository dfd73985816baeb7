use std::{fmt::Display, rc::Rc};

use Value::*;

use crate::{error::interpreter::RuntimeErrorType, interpreter::callable::CallableValue, scanner::TokenType};

/// Value represents a runtime value in Grafilang.
#[derive(Debug, Clone)]
pub(crate) enum Value {
	Null,
	Bool(bool),
	Number(f64),
	Str(String),
	Array(Rc<[Value]>),
	Callable(Rc<CallableValue>),
	/// What a function without `retourner` gives back.
	Void,
}

impl Display for Value {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Null => write!(f, "null"),
			Bool(b) => write!(f, "{b}"),
			Number(n) if n.is_infinite() => write!(f, "{}Infinity", if *n < 0.0 { "-" } else { "" }),
			// `-0` prints as `0`
			Number(n) if *n == 0.0 => write!(f, "0"),
			Number(n) => write!(f, "{n}"),
			Str(s) => write!(f, "{s}"),
			Array(elements) => {
				let elements: Vec<String> = elements.iter().map(ToString::to_string).collect();
				write!(f, "{}", elements.join(","))
			}
			Callable(callable) => write!(f, "<fonction {}>", callable.name),
			Void => write!(f, "vide"),
		}
	}
}

/// Strict equality: no coercion between types, functions by identity.
///
/// Arrays compare element by element, not by reference: `[1] == [1]` is
/// `vrai` even though the two literals build distinct arrays.
impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Null, Null) | (Void, Void) => true,
			(Bool(l), Bool(r)) => l == r,
			(Number(l), Number(r)) => l == r,
			(Str(l), Str(r)) => l == r,
			(Array(l), Array(r)) => l == r,
			(Callable(l), Callable(r)) => Rc::ptr_eq(l, r),
			_ => false,
		}
	}
}

impl Value {
	/// Name of the value's type, as shown in error messages.
	pub fn type_name(&self) -> &'static str {
		match self {
			Null => "nul",
			Bool(_) => "booléen",
			Number(_) => "nombre",
			Str(_) => "chaîne",
			Array(_) => "tableau",
			Callable(_) => "fonction",
			Void => "vide",
		}
	}

	/// Performs a binary operation between two values.
	pub fn binary_op(&self, op: &TokenType, right: &Self) -> Result<Value, RuntimeErrorType> {
		Ok(match op {
			TokenType::Plus => self.plus(right)?,
			TokenType::Minus => self.numbers(right, "soustraits", |l, r| Number(l - r))?,
			TokenType::Star => self.numbers(right, "multipliés", |l, r| Number(l * r))?,
			TokenType::Slash => self.numbers(right, "divisés", |l, r| Number(l / r))?,
			TokenType::Greater => self.numbers(right, "comparés", |l, r| Bool(l > r))?,
			TokenType::GreaterEqual => self.numbers(right, "comparés", |l, r| Bool(l >= r))?,
			TokenType::Less => self.numbers(right, "comparés", |l, r| Bool(l < r))?,
			TokenType::LessEqual => self.numbers(right, "comparés", |l, r| Bool(l <= r))?,
			TokenType::EqualEqual => Bool(self == right),
			TokenType::BangEqual => Bool(self != right),
			_ => unreachable!("{op:?} is not a binary operator"),
		})
	}

	/// `+` follows the left operand: numbers add, strings concatenate.
	fn plus(&self, other: &Self) -> Result<Value, RuntimeErrorType> {
		match (self, other) {
			(Number(l), Number(r)) => Ok(Number(l + r)),
			(Number(_), r) => Err(RuntimeErrorType::AddToNumber(r.type_name())),
			(Str(l), Str(r)) => Ok(Str(format!("{l}{r}"))),
			(Str(_), r) => Err(RuntimeErrorType::AddToString(r.type_name())),
			(l, _) => Err(RuntimeErrorType::AddUnsupported(l.type_name())),
		}
	}

	/// Apply `op` when both sides are numbers, `operation` names it otherwise.
	fn numbers(
		&self,
		other: &Self,
		operation: &'static str,
		op: impl FnOnce(f64, f64) -> Value,
	) -> Result<Value, RuntimeErrorType> {
		match (self, other) {
			(Number(l), Number(r)) => Ok(op(*l, *r)),
			(Number(_), r) | (r, _) => Err(RuntimeErrorType::NumbersRequired { operation, found: r.type_name() }),
		}
	}
}
