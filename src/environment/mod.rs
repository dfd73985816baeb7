use std::{
	cell::{Ref, RefCell, RefMut},
	collections::HashMap,
	rc::{Rc, Weak},
};

use crate::{error::interpreter::{RuntimeError, RuntimeErrorType}, interpreter::value::Value, scanner::Token};

/// Shared handle on a [`Memory`]. Clone it, it's shallow copy: closures and
/// the interpreter see the same bindings.
#[derive(Debug, Default, Clone)]
pub(crate) struct Scope(Rc<RefCell<Memory>>);

impl Scope {
	pub fn new(memory: Memory) -> Self { Self(Rc::new(RefCell::new(memory))) }

	/// A fresh, empty scope enclosed by `self`.
	pub fn child(&self) -> Self { Self::new(Memory::new(Some(self.clone()))) }

	pub fn borrow(&self) -> Ref<'_, Memory> { self.0.borrow() }

	pub fn borrow_mut(&self) -> RefMut<'_, Memory> { self.0.borrow_mut() }

	pub fn downgrade(&self) -> Weak<RefCell<Memory>> { Rc::downgrade(&self.0) }
}

/// Scopes captured by user functions.
///
/// A function bound in the scope it captures keeps that scope alive, and the
/// scope keeps the function alive. [`Captures::release`] empties every scope
/// still reachable, which frees such pairs.
#[derive(Debug, Default)]
pub(crate) struct Captures(Vec<Weak<RefCell<Memory>>>);

impl Captures {
	pub fn record(&mut self, scope: &Scope) {
		if self.0.len() == self.0.capacity() {
			self.0.retain(|scope| scope.strong_count() > 0);
		}
		self.0.push(scope.downgrade());
	}

	pub fn release(&mut self) {
		let scopes: Vec<_> = self.0.drain(..).filter_map(|scope| scope.upgrade()).collect();
		log::debug!("releasing {} captured scopes", scopes.len());
		for scope in &scopes {
			let values = std::mem::take(&mut scope.borrow_mut().values);
			drop(values);
		}
	}
}

/// One scope of the chain: names bound here plus the enclosing scope.
#[derive(Default, Debug)]
pub(crate) struct Memory {
	values: HashMap<String, Value>,
	parent: Option<Scope>,
	/// Bindings can be read but not assigned.
	sealed: bool,
}

impl Memory {
	pub fn new(parent: Option<Scope>) -> Self { Self { values: HashMap::new(), parent, sealed: false } }

	/// Bind `token` in this scope only. A name can be declared once per scope,
	/// shadowing an outer binding is fine.
	pub fn define(&mut self, token: &Token, value: Value) -> Result<(), RuntimeError> {
		if self.values.contains_key(&token.lexeme) {
			return Err(RuntimeError::new(token.position, RuntimeErrorType::Redeclaration(token.lexeme.clone())));
		}
		self.values.insert(token.lexeme.clone(), value);
		Ok(())
	}

	pub fn define_native(&mut self, name: &'static str, value: Value) { self.values.insert(name.to_string(), value); }

	/// Refuse assignments from now on.
	pub fn seal(&mut self) { self.sealed = true }

	/// Read the nearest binding of `token`.
	pub fn get(&self, token: &Token) -> Result<Value, RuntimeError> {
		if let Some(value) = self.values.get(&token.lexeme) {
			return Ok(value.clone());
		}
		match &self.parent {
			Some(parent) => parent.borrow().get(token),
			None => Err(undefined(token)),
		}
	}

	/// Overwrite the nearest existing binding of `token`.
	pub fn assign(&mut self, token: &Token, value: Value) -> Result<(), RuntimeError> {
		if let Some(slot) = self.values.get_mut(&token.lexeme) {
			if self.sealed {
				return Err(RuntimeError::new(token.position, RuntimeErrorType::ReadOnly(token.lexeme.clone())));
			}
			*slot = value;
			return Ok(());
		}
		match &self.parent {
			Some(parent) => parent.borrow_mut().assign(token, value),
			None => Err(undefined(token)),
		}
	}

	/// Forget every binding of this scope, outer scopes are untouched.
	pub fn clear(&mut self) { self.values.clear() }
}

fn undefined(token: &Token) -> RuntimeError {
	RuntimeError::new(token.position, RuntimeErrorType::UndefinedVariable(token.lexeme.clone()))
}
