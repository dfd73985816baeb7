use std::fmt::Display;

/// Location of a token, node or diagnostic inside the source text.
///
/// `start` and `end` are byte offsets, `line` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
	pub start: usize,
	pub end:   usize,
	pub line:  usize,
}

impl Position {
	pub fn new(start: usize, end: usize, line: usize) -> Self { Self { start, end, line } }

	/// Span from the start of `self` to the end of `other`, on the line of `self`.
	pub fn to(self, other: Position) -> Self {
		Self { start: self.start, end: other.end.max(self.start), line: self.line }
	}
}

impl Display for Position {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}..{}@{}", self.start, self.end, self.line)
	}
}

/// A token produced by the scanner
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
	pub r#type:   TokenType,
	pub lexeme:   String,
	pub position: Position,
}

impl Token {
	pub fn new(r#type: TokenType, lexeme: &str, position: Position) -> Self {
		Self { r#type, lexeme: lexeme.to_string(), position }
	}
}

/// The different types of tokens in Grafilang.
///
/// Keywords have one variant per logical keyword, whatever the spelling
/// (`si`, `SI` and `if` all become [`TokenType::If`]).
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenType {
	/// Left parenthesis `(`.
	LeftParen,
	/// Right parenthesis `)`.
	RightParen,
	/// Left brace `{`.
	LeftBrace,
	/// Right brace `}`.
	RightBrace,
	/// Left bracket `[`.
	LeftBracket,
	/// Right bracket `]`.
	RightBracket,
	/// Comma `,`.
	Comma,
	/// Dot `.`.
	Dot,
	/// Minus `-`.
	Minus,
	/// Plus `+`.
	Plus,
	/// Semicolon `;`.
	Semicolon,
	/// Slash `/`.
	Slash,
	/// Asterisk `*`.
	Star,
	/// Bang `!`.
	Bang,
	/// Bang equal `!=`.
	BangEqual,
	/// Equal `=`.
	Equal,
	/// Equal equal `==`.
	EqualEqual,
	/// Greater than `>`.
	Greater,
	/// Greater than or equal `>=`.
	GreaterEqual,
	/// Less than `<`.
	Less,
	/// Less than or equal `<=`.
	LessEqual,
	/// Identifier, e.g. variable or function name.
	Identifier(String),
	/// String literal without its quotes, e.g. `"hello"`.
	String(String),
	/// Number literal, e.g. `123.45`.
	Number(f64),
	/// `et` / `and`.
	And,
	/// `ou` / `or`.
	Or,
	/// `si` / `if`.
	If,
	/// `alors` / `then` / `faire` / `do`.
	Then,
	/// `sinon` / `else`.
	Else,
	/// `fin` / `end`.
	End,
	/// `tantque` / `while`.
	While,
	/// `pour` / `for`.
	For,
	/// `entre` / `between` / `from`.
	From,
	/// `fonction` / `function`.
	Function,
	/// `retourner` / `return`.
	Return,
	/// `afficher` / `print`.
	Print,
	/// `var`.
	Var,
	/// `vrai` / `true`.
	True,
	/// `faux` / `false`.
	False,
	/// `nul` / `null`.
	Null,
	/// End of file/input.
	Eof,
}

impl TokenType {
	/// Keywords are case-insensitive, identifiers keep their exact spelling.
	pub fn keyword_or_identifier(value: &str) -> Self {
		match value.to_ascii_lowercase().as_str() {
			"et" | "and" => TokenType::And,
			"ou" | "or" => TokenType::Or,
			"si" | "if" => TokenType::If,
			"alors" | "then" | "faire" | "do" => TokenType::Then,
			"sinon" | "else" => TokenType::Else,
			"fin" | "end" => TokenType::End,
			"tantque" | "while" => TokenType::While,
			"pour" | "for" => TokenType::For,
			"entre" | "between" | "from" => TokenType::From,
			"fonction" | "function" => TokenType::Function,
			"retourner" | "return" => TokenType::Return,
			"afficher" | "print" => TokenType::Print,
			"var" => TokenType::Var,
			"vrai" | "true" => TokenType::True,
			"faux" | "false" => TokenType::False,
			"nul" | "null" => TokenType::Null,
			_ => TokenType::Identifier(value.to_string()),
		}
	}
}
