//! Grafilang tree-walking interpreter.
//!
//! The interpreter walks the [`Program`] produced by the parser, executing
//! statements for their effects and evaluating expressions to [`Value`]s.
//!
//! # Scopes
//!
//! `environment` is the innermost scope. Blocks, loop iterations and calls
//! swap in a child scope and put the previous one back on every exit, errors
//! included. A function keeps the scope it was declared in and its calls chain
//! onto that scope, not onto the caller's.
//!
//! # Control flow
//!
//! `retourner` is not an error: executing a statement yields a [`Flow`] which
//! every block and loop hands up unchanged until a function call takes the
//! value out of it.
//!
//! # Typing
//!
//! - **Arithmetic, comparison**: numbers only
//! - **`+`**: numbers when the left side is a number, strings when it is a string
//! - **`==`, `!=`**: any values, never equal across types
//! - **Conditions, `et`, `ou`, `!`**: booleans only

pub(crate) mod callable;
pub(crate) mod stdlib;
pub(crate) mod value;

use std::rc::Rc;

use ExpressionKind::*;
use callable::{CallableType, CallableValue};
use value::Value;

use crate::{
	environment::{Captures, Scope},
	error::interpreter::{Bound, NativeError, RuntimeError, RuntimeErrorType},
	output::Output,
	parser::expression::{Expression, ExpressionKind, LiteralValue},
	scanner::{Position, Token, TokenType},
	session::Limits,
	stack,
	statement::{Block, Program, Statement},
};

/// A `tantque` loop may run its body this many times.
pub(crate) const MAX_ITERATIONS: usize = 10_000;

/// How a statement finished.
#[derive(Debug, PartialEq)]
pub(crate) enum Flow {
	Normal,
	/// A `retourner` is unwinding to the enclosing call.
	Return(Value),
}

/// Interpreter that executes Grafilang programs.
pub(crate) struct Interpreter<'a> {
	/// The innermost scope.
	environment: Scope,
	output:      &'a mut dyn Output,
	/// Every scope a declared function closes over.
	captures:    &'a mut Captures,
	limits:      Limits,
	/// Nested user function calls in progress.
	depth:       usize,
}

impl<'a> Interpreter<'a> {
	pub fn new(environment: Scope, output: &'a mut dyn Output, captures: &'a mut Captures, limits: Limits) -> Self {
		Self { environment, output, captures, limits, depth: 0 }
	}

	/// Execute `program` top to bottom, stopping at the first error.
	pub fn interpret(&mut self, program: &Program) -> Result<(), RuntimeError> {
		self.execute_all(&program.statements)?;
		Ok(())
	}

	fn execute_all(&mut self, statements: &[Statement]) -> Result<Flow, RuntimeError> {
		for statement in statements {
			if let Flow::Return(value) = self.execute(statement)? {
				return Ok(Flow::Return(value));
			}
		}
		Ok(Flow::Normal)
	}

	/// Run `statements` in `scope`, then restore the current scope.
	fn execute_block(&mut self, statements: &[Statement], scope: Scope) -> Result<Flow, RuntimeError> {
		let previous = std::mem::replace(&mut self.environment, scope);
		let result = self.execute_all(statements);
		self.environment = previous;
		result
	}

	fn execute_child(&mut self, block: &Block) -> Result<Flow, RuntimeError> {
		let scope = self.environment.child();
		self.execute_block(&block.statements, scope)
	}

	fn execute(&mut self, statement: &Statement) -> Result<Flow, RuntimeError> {
		stack::grow(|| self.execute_statement(statement))
	}

	fn execute_statement(&mut self, statement: &Statement) -> Result<Flow, RuntimeError> {
		log::trace!("execute statement at {}", statement.position());
		match statement {
			Statement::Expression(expression) => {
				self.evaluate(expression)?;
			}
			Statement::Print { expression, .. } => {
				let value = self.evaluate(expression)?;
				self.output.push(value.to_string());
			}
			Statement::VarDeclaration { name_token, initializer, .. } => {
				let value = self.evaluate(initializer)?;
				self.environment.borrow_mut().define(name_token, value)?;
			}
			Statement::Block(block) => return self.execute_child(block),
			Statement::If { condition, then_branch, else_branch, .. } => {
				if self.condition(condition)? {
					return self.execute_child(then_branch);
				} else if let Some(else_branch) = else_branch {
					return self.execute_child(else_branch);
				}
			}
			Statement::While { condition, body, .. } => {
				let mut iterations = 0;
				while self.condition(condition)? {
					iterations += 1;
					if iterations > MAX_ITERATIONS {
						log::warn!("while loop at {} stopped after {MAX_ITERATIONS} iterations", condition.position);
						return Err(RuntimeError::new(condition.position, RuntimeErrorType::InfiniteLoop));
					}
					if let Flow::Return(value) = self.execute_child(body)? {
						return Ok(Flow::Return(value));
					}
				}
			}
			Statement::For { variable, start, end, body, .. } => {
				let start = self.bound(start, Bound::Start)?;
				let end = self.bound(end, Bound::End)?;
				let step = if start <= end { 1.0 } else { -1.0 };
				let mut current = start;
				while (step > 0.0 && current <= end) || (step < 0.0 && current >= end) {
					let scope = self.environment.child();
					scope.borrow_mut().define(variable, Value::Number(current))?;
					if let Flow::Return(value) = self.execute_block(&body.statements, scope)? {
						return Ok(Flow::Return(value));
					}
					current += step;
				}
			}
			Statement::FunDecl(function) => {
				let callable = CallableValue::new_user(
					&function.name_token.lexeme,
					function.parameters.clone(),
					function.body.clone(),
					self.environment.clone(),
				);
				self.captures.record(&self.environment);
				self.environment.borrow_mut().define(&function.name_token, Value::Callable(Rc::new(callable)))?;
			}
			Statement::Return { value, .. } => return Ok(Flow::Return(self.evaluate(value)?)),
		}
		Ok(Flow::Normal)
	}

	/// Evaluate an `si` or `tantque` condition.
	fn condition(&mut self, condition: &Expression) -> Result<bool, RuntimeError> {
		match self.evaluate(condition)? {
			Value::Bool(b) => Ok(b),
			other => {
				Err(RuntimeError::new(condition.position, RuntimeErrorType::ConditionNotBoolean(other.type_name())))
			}
		}
	}

	/// Evaluate a `pour` bound.
	fn bound(&mut self, expression: &Expression, bound: Bound) -> Result<f64, RuntimeError> {
		match self.evaluate(expression)? {
			Value::Number(n) => Ok(n),
			other => Err(RuntimeError::new(
				expression.position,
				RuntimeErrorType::LoopBoundNotNumber { bound, found: other.type_name() },
			)),
		}
	}

	/// Evaluate the given expression and return its value.
	fn evaluate(&mut self, expression: &Expression) -> Result<Value, RuntimeError> {
		stack::grow(|| self.evaluate_expression(expression))
	}

	fn evaluate_expression(&mut self, expression: &Expression) -> Result<Value, RuntimeError> {
		let error = |kind: RuntimeErrorType| RuntimeError::new(expression.position, kind);
		Ok(match &expression.kind {
			Literal(literal) => match literal {
				LiteralValue::Number(n) => Value::Number(*n),
				LiteralValue::String(s) => Value::Str(s.clone()),
				LiteralValue::Boolean(b) => Value::Bool(*b),
				LiteralValue::Null => Value::Null,
			},
			Variable(token) => self.environment.borrow().get(token)?,
			Assign { target, value } => {
				let value = self.evaluate(value)?;
				self.environment.borrow_mut().assign(target, value.clone())?;
				value
			}
			Unary { operator, right } => match (&operator.r#type, self.evaluate(right)?) {
				(TokenType::Minus, Value::Number(n)) => Value::Number(-n),
				(TokenType::Minus, other) => return Err(error(RuntimeErrorType::NegateNonNumber(other.type_name()))),
				(_, Value::Bool(b)) => Value::Bool(!b),
				(_, other) => return Err(error(RuntimeErrorType::NotNonBoolean(other.type_name()))),
			},
			Binary { left, operator, right } => {
				let left = self.evaluate(left)?;
				let right = self.evaluate(right)?;
				left.binary_op(&operator.r#type, &right).map_err(error)?
			}
			Logical { left, operator, right } => self.logical(left, operator, right)?,
			Call { callee, arguments, arguments_position } => {
				self.call_site(callee, arguments, *arguments_position, expression.position)?
			}
			Array(elements) => {
				let elements = elements.iter().map(|element| self.evaluate(element)).collect::<Result<Vec<_>, _>>()?;
				Value::Array(elements.into())
			}
			Index { source, index } => self.index(source, index)?,
		})
	}

	/// `et` / `ou`: both operands must be booleans, the right one is skipped
	/// once the left one decides.
	fn logical(&mut self, left: &Expression, operator: &Token, right: &Expression) -> Result<Value, RuntimeError> {
		let left_value = match self.evaluate(left)? {
			Value::Bool(b) => b,
			other => {
				return Err(RuntimeError::new(left.position, RuntimeErrorType::LogicalLeftNotBoolean {
					operator: operator.lexeme.clone(),
					found:    other.type_name(),
				}));
			}
		};
		// `faux et ...` and `vrai ou ...` are already decided.
		if (operator.r#type == TokenType::And) != left_value {
			return Ok(Value::Bool(left_value));
		}
		match self.evaluate(right)? {
			Value::Bool(b) => Ok(Value::Bool(b)),
			other => Err(RuntimeError::new(right.position, RuntimeErrorType::LogicalRightNotBoolean {
				operator: operator.lexeme.clone(),
				found:    other.type_name(),
			})),
		}
	}

	fn call_site(
		&mut self,
		callee: &Expression,
		arguments: &[Expression],
		arguments_position: Position,
		position: Position,
	) -> Result<Value, RuntimeError> {
		let callable = match self.evaluate(callee)? {
			Value::Callable(callable) => callable,
			other => return Err(RuntimeError::new(position, RuntimeErrorType::NotCallable(other.type_name()))),
		};
		if callable.arity != arguments.len() {
			return Err(RuntimeError::new(arguments_position, RuntimeErrorType::ArityMismatch {
				expected: callable.arity,
				received: arguments.len(),
			}));
		}
		let arguments = arguments.iter().map(|argument| self.evaluate(argument)).collect::<Result<Vec<_>, _>>()?;
		self.call(&callable, arguments, position)
	}

	/// `source[index]`, every index error points at `index`.
	fn index(&mut self, source: &Expression, index: &Expression) -> Result<Value, RuntimeError> {
		let elements = match self.evaluate(source)? {
			Value::Array(elements) => elements,
			other => return Err(RuntimeError::new(source.position, RuntimeErrorType::NotAnArray(other.type_name()))),
		};
		let error = |kind: RuntimeErrorType| RuntimeError::new(index.position, kind);
		let i = match self.evaluate(index)? {
			Value::Number(i) => i,
			other => return Err(error(RuntimeErrorType::IndexNotNumber(other.type_name()))),
		};
		if i.fract() != 0.0 || i.is_nan() {
			return Err(error(RuntimeErrorType::IndexNotInteger(i)));
		}
		if i < 0.0 {
			return Err(error(RuntimeErrorType::NegativeIndex(i)));
		}
		elements
			.get(i as usize)
			.cloned()
			.ok_or_else(|| error(RuntimeErrorType::IndexOutOfBounds { index: i, length: elements.len() }))
	}

	/// Invoke `callable` with already evaluated arguments.
	fn call(
		&mut self,
		callable: &CallableValue,
		arguments: Vec<Value>,
		position: Position,
	) -> Result<Value, RuntimeError> {
		log::trace!("call {} with {} argument(s)", callable.name, arguments.len());
		match &callable.body {
			CallableType::Native(function) => function(&mut *self.output, &arguments).map_err(|NativeError(message)| {
				RuntimeError::new(position, RuntimeErrorType::Native { function: callable.name.clone(), message })
			}),
			CallableType::User { parameters, body, closure } => {
				if self.depth >= self.limits.max_call_depth {
					log::warn!("call to {} at {position} exceeds the depth limit", callable.name);
					let limit = self.limits.max_call_depth;
					return Err(RuntimeError::new(position, RuntimeErrorType::CallDepthExceeded(limit)));
				}
				let scope = closure.child();
				for (parameter, argument) in parameters.iter().zip(arguments) {
					scope.borrow_mut().define(parameter, argument)?;
				}
				self.depth += 1;
				let flow = self.execute_block(body, scope);
				self.depth -= 1;
				Ok(match flow? {
					Flow::Return(value) => value,
					Flow::Normal => Value::Void,
				})
			}
		}
	}
}
