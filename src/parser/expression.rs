//! Expressions of the syntax tree.
//!
//! Every node carries the span it was parsed from. Runtime errors use it to
//! point at the exact sub-expression, e.g. the index of `T[5]` rather than the
//! whole access.

use ExpressionKind::*;

use crate::scanner::{Position, Token};

/// Expression AST node with its source span.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Expression {
	pub kind:     ExpressionKind,
	pub position: Position,
}

#[allow(clippy::enum_variant_names)]
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ExpressionKind {
	Literal(LiteralValue),
	Variable(Token),
	Assign { target: Token, value: Box<Expression> },
	Unary { operator: Token, right: Box<Expression> },
	Binary { left: Box<Expression>, operator: Token, right: Box<Expression> },
	Logical { left: Box<Expression>, operator: Token, right: Box<Expression> },
	/// `arguments_position` spans the parentheses, for arity errors.
	Call { callee: Box<Expression>, arguments: Vec<Expression>, arguments_position: Position },
	Array(Vec<Expression>),
	Index { source: Box<Expression>, index: Box<Expression> },
}

impl Expression {
	fn new(kind: ExpressionKind, position: Position) -> Self { Self { kind, position } }

	pub fn literal(value: LiteralValue, token: &Token) -> Self { Self::new(Literal(value), token.position) }

	pub fn variable(name: Token) -> Self {
		let position = name.position;
		Self::new(Variable(name), position)
	}

	pub fn assign(target: Token, value: Self) -> Self {
		let position = target.position.to(value.position);
		Self::new(Assign { target, value: Box::new(value) }, position)
	}

	pub fn unary(operator: Token, right: Self) -> Self {
		let position = operator.position.to(right.position);
		Self::new(Unary { operator, right: Box::new(right) }, position)
	}

	pub fn binary(left: Self, operator: Token, right: Self) -> Self {
		let position = left.position.to(right.position);
		Self::new(Binary { left: Box::new(left), operator, right: Box::new(right) }, position)
	}

	pub fn logical(left: Self, operator: Token, right: Self) -> Self {
		let position = left.position.to(right.position);
		Self::new(Logical { left: Box::new(left), operator, right: Box::new(right) }, position)
	}

	pub fn call(callee: Self, arguments: Vec<Self>, arguments_position: Position) -> Self {
		let position = callee.position;
		Self::new(Call { callee: Box::new(callee), arguments, arguments_position }, position)
	}

	pub fn array(elements: Vec<Self>, position: Position) -> Self { Self::new(Array(elements), position) }

	pub fn index(source: Self, index: Self, close: &Token) -> Self {
		let position = source.position.to(close.position);
		Self::new(Index { source: Box::new(source), index: Box::new(index) }, position)
	}

	/// Same node, spanning `position` instead (used for parentheses).
	pub fn widen(self, position: Position) -> Self { Self { position, ..self } }
}

/// Constants written in the source.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum LiteralValue {
	Number(f64),
	String(String),
	Boolean(bool),
	Null,
}

impl std::fmt::Display for Expression {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match &self.kind {
			Literal(lit) => write!(f, "{lit}"),
			Variable(token) => write!(f, "{}", token.lexeme),
			Assign { target, value } => write!(f, "(= {} {value})", target.lexeme),
			Unary { operator, right } => write!(f, "({} {right})", operator.lexeme),
			Binary { left, operator, right } => write!(f, "({} {left} {right})", operator.lexeme),
			Logical { left, operator, right } => write!(f, "({} {left} {right})", operator.lexeme.to_lowercase()),
			Call { callee, arguments, .. } => write!(f, "(call {callee}{})", spaced(arguments)),
			Array(elements) => write!(f, "(array{})", spaced(elements)),
			Index { source, index } => write!(f, "(index {source} {index})"),
		}
	}
}

fn spaced(expressions: &[Expression]) -> String { expressions.iter().map(|e| format!(" {e}")).collect() }

impl std::fmt::Display for LiteralValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			LiteralValue::Number(n) => write!(f, "{n}"),
			LiteralValue::String(s) => write!(f, "\"{s}\""),
			LiteralValue::Boolean(b) => write!(f, "{b}"),
			LiteralValue::Null => write!(f, "null"),
		}
	}
}
