use std::{fmt::Debug, rc::Rc};

use crate::{
	environment::Scope, error::interpreter::NativeError, interpreter::value::Value, output::Output, scanner::Token,
	statement::Statement,
};

type NativeFunction = Box<dyn Fn(&mut dyn Output, &[Value]) -> Result<Value, NativeError>>;

/// A function value, library or user defined. The call site only looks at
/// `arity`.
#[derive(Debug)]
pub(crate) struct CallableValue {
	pub name:  String,
	pub arity: usize,
	pub body:  CallableType,
}

pub(crate) enum CallableType {
	Native(NativeFunction),
	/// Declared with `fonction`, keeps the scope it was declared in.
	User { parameters: Rc<Vec<Token>>, body: Rc<Vec<Statement>>, closure: Scope },
}

impl Debug for CallableType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Native(_) => f.debug_tuple("Native").field(&"Function Pointer").finish(),
			Self::User { parameters, body, .. } => {
				f.debug_struct("User").field("parameters", parameters).field("body", body).finish_non_exhaustive()
			}
		}
	}
}

impl CallableValue {
	pub fn new_user(name: &str, parameters: Rc<Vec<Token>>, body: Rc<Vec<Statement>>, closure: Scope) -> Self {
		Self { name: name.to_string(), arity: parameters.len(), body: CallableType::User { parameters, body, closure } }
	}

	pub fn new_native(name: &str, arity: usize, body: NativeFunction) -> Self {
		Self { name: name.to_string(), arity, body: CallableType::Native(body) }
	}
}
