use crate::scanner::Position;

/// A lexical error: the scanner met something it cannot turn into a token.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("ligne {}: {kind}", .position.line)]
pub struct ScanError {
	/// Where the offending characters are.
	pub position: Position,
	/// The type of scanning error.
	pub kind:     ScanErrorType,
}

impl ScanError {
	pub fn new(position: Position, kind: ScanErrorType) -> Self { Self { position, kind } }
}

/// Types of scanning errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanErrorType {
	/// A character that starts no token.
	UnexpectedCharacter(char),
	/// A string literal reaching the end of input, with its opening delimiter.
	UnterminatedString(char),
}

impl std::fmt::Display for ScanErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ScanErrorType::*;
		match self {
			UnexpectedCharacter(c) => {
				write!(f, "{c} inattendu")
			}
			UnterminatedString(delimiter) => {
				write!(f, "Chaîne de caractères non fermée, {delimiter} attendu")
			}
		}
	}
}
