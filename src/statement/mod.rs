//! Statement AST nodes.
//!
//! Statements are executed for their effect and never produce a value. The
//! bodies of `si`, `tantque`, `pour` and `fonction` are lists of statements
//! closed by `fin`, while `{ ... }` gives an explicit [`Block`].

use std::{fmt::Display, rc::Rc};

use crate::{parser::expression::Expression, scanner::{Position, Token}};

/// A whole parsed source text.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct Program {
	pub statements: Vec<Statement>,
}

/// A statement in the programming language.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Statement {
	/// An expression used as a statement, its value is discarded.
	Expression(Expression),
	/// `afficher <expression>`.
	Print { expression: Expression, position: Position },
	/// `var <name> = <initializer>`.
	VarDeclaration { name_token: Token, initializer: Expression, position: Position },
	/// A block of statements with its own scope.
	Block(Block),
	If { condition: Expression, then_branch: Block, else_branch: Option<Block>, position: Position },
	While { condition: Expression, body: Block, position: Position },
	/// `pour <variable> entre <start> et <end> ... fin`, bounds inclusive.
	For { variable: Token, start: Expression, end: Expression, body: Block, position: Position },
	FunDecl(Function),
	/// `retourner <value>`.
	Return { value: Expression, position: Position },
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Block {
	pub statements: Vec<Statement>,
	pub position:   Position,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Function {
	pub name_token: Token,
	pub parameters: Rc<Vec<Token>>,
	pub body:       Rc<Vec<Statement>>,
	pub position:   Position,
}

impl Statement {
	pub fn position(&self) -> Position {
		match self {
			Statement::Expression(expression) => expression.position,
			Statement::Block(block) => block.position,
			Statement::FunDecl(function) => function.position,
			Statement::Print { position, .. }
			| Statement::VarDeclaration { position, .. }
			| Statement::If { position, .. }
			| Statement::While { position, .. }
			| Statement::For { position, .. }
			| Statement::Return { position, .. } => *position,
		}
	}
}

impl Display for Program {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let lines: Vec<String> = self.statements.iter().map(ToString::to_string).collect();
		write!(f, "{}", lines.join("\n"))
	}
}

impl Display for Block {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "(block{})", spaced(&self.statements))
	}
}

impl Display for Statement {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Statement::Expression(expression) => write!(f, "{expression}"),
			Statement::Print { expression, .. } => write!(f, "(print {expression})"),
			Statement::VarDeclaration { name_token, initializer, .. } => {
				write!(f, "(var {} {initializer})", name_token.lexeme)
			}
			Statement::Block(block) => write!(f, "{block}"),
			Statement::If { condition, then_branch, else_branch: Some(else_branch), .. } => {
				write!(f, "(if {condition} {then_branch} {else_branch})")
			}
			Statement::If { condition, then_branch, else_branch: None, .. } => {
				write!(f, "(if {condition} {then_branch})")
			}
			Statement::While { condition, body, .. } => write!(f, "(while {condition} {body})"),
			Statement::For { variable, start, end, body, .. } => {
				write!(f, "(for {} {start} {end} {body})", variable.lexeme)
			}
			Statement::FunDecl(Function { name_token, parameters, body, .. }) => {
				let parameters: Vec<&str> = parameters.iter().map(|p| p.lexeme.as_str()).collect();
				write!(f, "(function {} ({}){})", name_token.lexeme, parameters.join(" "), spaced(body))
			}
			Statement::Return { value, .. } => write!(f, "(return {value})"),
		}
	}
}

fn spaced(statements: &[Statement]) -> String { statements.iter().map(|s| format!(" {s}")).collect() }
