//! # Grafilang
//!
//! A small teaching language whose keywords can be written in French or in
//! English, in any case:
//!
//! ``` text
//! VAR A = 4
//! SI A > 2 ALORS
//!     afficher "grand"
//! SINON
//!     afficher "petit"
//! FIN
//! ```

//! ## Scanning
//!
//! The scanner turns characters into tokens. Whitespace and `//` comments are
//! dropped, words are looked up in the keyword table so that `si`, `SI` and
//! `if` become the same token. Every token remembers its byte span and line.

//! ## Parsing
//!
//! A recursive descent parser builds the syntax tree, one function per
//! precedence level. It stops at the first unexpected token.
//!
//! ``` markdown
//! A (Statement::VarDeclaration)
//! └── + (Expression::Binary)
//!     ├── 3 (Expression::Literal)
//!     └── 2 (Expression::Literal)
//! ```
//!
//! [`dump_ast`] prints that tree as S-expressions: `(var A (+ 3 2))`.

//! ## Evaluation
//!
//! A tree walker executes the statements in a chain of scopes. The outermost
//! scope holds the library (`ecrire`, `arrondir`, `taille`) and is shared by
//! every [`Session`] of a thread; each session chains its own user scope onto
//! it. There is no implicit conversion: conditions must be booleans, `+` adds
//! two numbers or joins two strings and nothing else.

//! ## Diagnostics
//!
//! Whatever the stage, a failure is a [`Diagnostic`] holding a [`Position`].
//! [`Diagnostic::render`] draws the offending line with carets under it,
//! [`Diagnostic::marker`] gives editors 1-based line and column ranges.

pub mod cli;
mod environment;
mod error;
mod interpreter;
mod output;
mod parser;
mod scanner;
mod session;
mod stack;
mod statement;

pub use error::{
	Diagnostic, GrafiError, Marker,
	interpreter::{Bound, RuntimeError, RuntimeErrorType},
	parser::{Expected, SyntaxError},
	scanner::{ScanError, ScanErrorType},
};
pub use output::{Output, Stdout};
pub use scanner::Position;
pub use session::{Limits, Session, dump_ast, interpret};
