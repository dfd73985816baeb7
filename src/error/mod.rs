//! Positioned diagnostics.
//!
//! Every failure of the pipeline carries a [`Position`]. A [`Diagnostic`] can
//! be rendered as a caret block for terminals, or turned into a [`Marker`] for
//! editors that draw squiggly lines.

pub mod interpreter;
pub mod parser;
pub mod scanner;

use self::{interpreter::RuntimeError, parser::SyntaxError, scanner::ScanError};
use crate::scanner::Position;

/// Any error the pipeline can stop on.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Diagnostic {
	/// Lexical error: bad character, unterminated string.
	#[error(transparent)]
	Scan(#[from] ScanError),
	/// Grammar violation at a specific token.
	#[error(transparent)]
	Syntax(#[from] SyntaxError),
	/// Type, name, arity, index and resource-guard errors.
	#[error(transparent)]
	Runtime(#[from] RuntimeError),
}

/// Editor marker, all fields 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
	pub message:      String,
	pub start_line:   usize,
	pub start_column: usize,
	pub end_line:     usize,
	pub end_column:   usize,
}

impl Diagnostic {
	pub fn title(&self) -> &'static str {
		match self {
			Diagnostic::Scan(_) | Diagnostic::Syntax(_) => "Erreur de syntaxe",
			Diagnostic::Runtime(_) => "Erreur à l'exécution",
		}
	}

	/// The message without location.
	pub fn message(&self) -> String {
		match self {
			Diagnostic::Scan(e) => e.kind.to_string(),
			Diagnostic::Syntax(e) => format!("{} inattendu, {}", e.found, e.expected),
			Diagnostic::Runtime(e) => e.kind.to_string(),
		}
	}

	pub fn position(&self) -> Position {
		match self {
			Diagnostic::Scan(e) => e.position,
			Diagnostic::Syntax(e) => e.position,
			Diagnostic::Runtime(e) => e.position,
		}
	}

	/// Caret block pointing at the offending code:
	///
	/// ``` text
	/// Erreur à l'exécution: ligne 1, colonne 9
	///
	/// afficher("a" + 1)
	///          ^^^^^^^
	///          Une chaîne de caractères doit être ajoutée à une autre chaîne (nombre)
	/// ```
	pub fn render(&self, source: &str) -> String {
		let position = self.position();
		let span = Span::locate(source, position);
		let padding = " ".repeat(span.column);
		format!(
			"{}: ligne {}, colonne {}\n\n{}\n{padding}{}\n{padding}{}",
			self.title(),
			position.line,
			span.column,
			span.line_text,
			"^".repeat(span.underline.max(1)),
			self.message()
		)
	}

	pub fn marker(&self, source: &str) -> Marker {
		let position = self.position();
		let span = Span::locate(source, position);
		let (end_line, end_column) = match span.text.rfind('\n') {
			Some(last) => (position.line + span.text.matches('\n').count(), span.text[last + 1..].chars().count() + 1),
			None => (position.line, span.column + span.text.chars().count() + 1),
		};
		Marker {
			message: self.message(),
			start_line: position.line,
			start_column: span.column + 1,
			end_line,
			end_column,
		}
	}
}

/// A position resolved against the source text.
struct Span<'a> {
	/// 0-based column, in characters.
	column:    usize,
	/// The whole source line holding the start of the span.
	line_text: &'a str,
	/// The spanned text.
	text:      &'a str,
	/// Characters of the span that sit on the first line.
	underline: usize,
}

impl<'a> Span<'a> {
	fn locate(source: &'a str, position: Position) -> Self {
		let start = char_boundary(source, position.start);
		let end = char_boundary(source, position.end).max(start);
		let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);
		let line_end = source[start..].find('\n').map_or(source.len(), |i| start + i);
		Self {
			column:    source[line_start..start].chars().count(),
			line_text: source[line_start..line_end].trim_end_matches('\r'),
			text:      &source[start..end],
			underline: source[start..end.min(line_end)].chars().count(),
		}
	}
}

fn char_boundary(source: &str, index: usize) -> usize {
	let mut index = index.min(source.len());
	while !source.is_char_boundary(index) {
		index -= 1;
	}
	index
}

/// GrafiError is the top-level error type of the file and prompt runners.
#[derive(thiserror::Error, Debug)]
pub enum GrafiError {
	/// Failures outside the program itself, like an unreadable file.
	#[error("Erreur interne: {0:#}")]
	InternalError(#[from] anyhow::Error),
	/// The program failed; displays as the caret block.
	#[error("{}", render_diagnostic(.diagnostic, .code))]
	Diagnostic { diagnostic: Diagnostic, code: String },
}

fn render_diagnostic(diagnostic: &Diagnostic, code: &str) -> String { diagnostic.render(code) }
