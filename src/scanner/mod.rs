//! Turns Grafilang source text into tokens.
//!
//! The scanner walks the characters once, left to right. `start` marks the
//! beginning of the current lexeme and `end` the byte right after the last
//! character consumed; every token remembers the `[start, end)` byte range and
//! the line it starts on, which is all the diagnostics need to point back at
//! the source.
//!
//! Identifier-shaped lexemes are checked against the keyword table only once
//! the whole word is read (`maximal munch`), so `sinon` is a keyword while
//! `sinon2` is an identifier. Keywords are case-insensitive and bilingual:
//! `SI`, `si` and `if` are the same token.
mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenType::*;
pub use token::Position;
pub(crate) use token::*;

use crate::error::scanner::{ScanError, ScanErrorType};

pub(crate) struct Scanner<'a> {
	source: &'a str,
	chars:  Peekable<CharIndices<'a>>,
	/// Byte offset of the lexeme being read.
	start:  usize,
	/// Byte offset past the last consumed character.
	end:    usize,
	/// Line of the next character.
	line:   usize,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self {
		Self { source, chars: source.char_indices().peekable(), start: 0, end: 0, line: 1 }
	}

	/// Every token of the source followed by [`TokenType::Eof`].
	pub fn scan_tokens(mut self) -> Result<Vec<Token>, ScanError> {
		let mut tokens = Vec::new();
		while let Some(token) = self.next_token()? {
			tokens.push(token);
		}
		let eof = self.source.len();
		tokens.push(Token::new(Eof, "", Position::new(eof, eof, self.line)));
		log::trace!("scanned {} tokens", tokens.len());
		Ok(tokens)
	}

	/// Skip blanks and comments, then read one token. `None` once the source
	/// is exhausted.
	fn next_token(&mut self) -> Result<Option<Token>, ScanError> {
		self.skip_trivia();
		self.start = self.end;
		let line = self.line;
		let Some(c) = self.bump() else { return Ok(None) };
		#[rustfmt::skip]
		let r#type = match c {
			'(' => LeftParen,
			')' => RightParen,
			'{' => LeftBrace,
			'}' => RightBrace,
			'[' => LeftBracket,
			']' => RightBracket,
			',' => Comma,
			'.' => Dot,
			';' => Semicolon,
			'-' => Minus,
			'+' => Plus,
			'*' => Star,
			'/' => Slash,
			'!' => self.either('=', BangEqual, Bang),
			'=' => self.either('=', EqualEqual, Equal),
			'<' => self.either('=', LessEqual, Less),
			'>' => self.either('=', GreaterEqual, Greater),
			'"' | '\'' => self.string(c, line)?,
			'0'..='9' => self.number(),
			c if c.is_ascii_alphabetic() || c == '_' => self.word(),
			c => return Err(ScanError::new(self.position(line), ScanErrorType::UnexpectedCharacter(c))),
		};
		Ok(Some(Token::new(r#type, &self.source[self.start..self.end], self.position(line))))
	}

	/// Whitespace, line breaks and `//` comments.
	fn skip_trivia(&mut self) {
		loop {
			match self.peek() {
				Some(' ' | '\t' | '\r' | '\n') => {
					self.bump();
				}
				Some('/') if self.peek_second() == Some('/') => self.eat_while(|c| c != '\n'),
				_ => return,
			}
		}
	}

	/// Consume one character, counting lines.
	fn bump(&mut self) -> Option<char> {
		let (offset, c) = self.chars.next()?;
		self.end = offset + c.len_utf8();
		if c == '\n' {
			self.line += 1;
		}
		Some(c)
	}

	fn peek(&mut self) -> Option<char> { self.chars.peek().map(|&(_, c)| c) }

	fn peek_second(&self) -> Option<char> { self.chars.clone().nth(1).map(|(_, c)| c) }

	fn eat_while(&mut self, predicate: impl Fn(char) -> bool) {
		while self.peek().is_some_and(&predicate) {
			self.bump();
		}
	}

	/// `double` when the next character is `next`, which is then consumed.
	fn either(&mut self, next: char, double: TokenType, single: TokenType) -> TokenType {
		if self.peek() == Some(next) {
			self.bump();
			double
		} else {
			single
		}
	}

	fn position(&self, line: usize) -> Position { Position::new(self.start, self.end, line) }

	/// A string runs to the next `quote`, line breaks included. The other quote
	/// character is plain text inside it.
	fn string(&mut self, quote: char, line: usize) -> Result<TokenType, ScanError> {
		self.eat_while(|c| c != quote);
		if self.bump().is_none() {
			return Err(ScanError::new(self.position(line), ScanErrorType::UnterminatedString(quote)));
		}
		Ok(String(self.source[self.start + 1..self.end - 1].to_string()))
	}

	/// Digits with an optional fractional part. A dot not followed by a digit
	/// is left for the next token. Literals too large for a `f64` become
	/// infinite.
	fn number(&mut self) -> TokenType {
		self.eat_while(|c| c.is_ascii_digit());
		if self.peek() == Some('.') && self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
			self.bump();
			self.eat_while(|c| c.is_ascii_digit());
		}
		// `digits[.digits]` is always valid `f64` syntax.
		Number(self.source[self.start..self.end].parse().unwrap_or(f64::INFINITY))
	}

	fn word(&mut self) -> TokenType {
		self.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');
		TokenType::keyword_or_identifier(&self.source[self.start..self.end])
	}
}

/// Scan `source` into tokens ending with [`TokenType::Eof`].
pub(crate) fn scan(source: &str) -> Result<Vec<Token>, ScanError> { Scanner::new(source).scan_tokens() }
