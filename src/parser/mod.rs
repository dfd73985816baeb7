//! Where the scanner reads characters, the parser reads tokens and produces
//! a [`Program`] of [`Statement`]s.
//!
//! Statements need no separator: an expression ends where the next token can
//! not continue it, so `VAR A = 1 afficher(A)` is two statements.
//!
//! |Name|Operators|Associates
//! --|--|--
//! Assignment|=|Right
//! Or|ou|Left
//! And|et|Left
//! Equality|== !=|Left
//! Comparison|< > <= >=|Left
//! Term|+ -|Left
//! Factor|* /|Left
//! Unary|! -|Right
//! Postfix|() []|Left
//!
//! Grammar:
//!
//! ``` BNF
//! program        → statement* EOF ;
//! statement      → function | return | var | if | while | for | print | block | expression ;
//! function       → "fonction" IDENTIFIER "(" ( IDENTIFIER ( "," IDENTIFIER )* )? ")" statement* "fin" ;
//! return         → "retourner" expression ;
//! var            → "var" IDENTIFIER "=" expression ;
//! if             → "si" expression "alors" statement* ( "sinon" statement* )? "fin" ;
//! while          → "tantque" expression "faire" statement* "fin" ;
//! for            → "pour" IDENTIFIER "entre" term "et" term "faire"? statement* "fin" ;
//! print          → "afficher" expression ;
//! block          → "{" statement* "}" ;
//! expression     → assignment ;
//! assignment     → IDENTIFIER "=" assignment | or ;
//! or             → and ( "ou" and )* ;
//! and            → equality ( "et" equality )* ;
//! equality       → comparison ( ( "!=" | "==" ) comparison )* ;
//! comparison     → term ( ( ">" | ">=" | "<" | "<=" ) term )* ;
//! term           → factor ( ( "-" | "+" ) factor )* ;
//! factor         → unary ( ( "/" | "*" ) unary )* ;
//! unary          → ( "!" | "-" ) unary | call ;
//! call           → array ( "(" arguments? ")" | "[" expression "]" )* ;
//! array          → "[" ( expression ( "," expression )* ","? )? "]" | primary ;
//! primary        → NUMBER | STRING | "vrai" | "faux" | "nul" | IDENTIFIER | "(" expression ")" ;
//! ```

pub(crate) mod expression;

use std::{iter::Peekable, rc::Rc, vec::IntoIter};

use TokenType::*;

use crate::{
	error::parser::{Expected, SyntaxError},
	parser::expression::{Expression, ExpressionKind, LiteralValue},
	scanner::{Position, Token, TokenType},
	stack,
	statement::{Block, Function as FunctionDecl, Program, Statement},
};

/// Builds a [`Program`] from tokens, stopping at the first syntax error.
pub(crate) struct Parser {
	/// The tokens to parse.
	tokens:         Peekable<IntoIter<Token>>,
	/// Handed out once the tokens run out.
	eof:            Token,
	/// How many function bodies enclose the current token.
	function_depth: usize,
	/// Depth of the syntax tree being built at the current token.
	nesting:        usize,
	max_nesting:    usize,
}

impl Parser {
	pub fn new(tokens: Vec<Token>, max_nesting: usize) -> Self {
		let eof = match tokens.last() {
			Some(token) if token.r#type == Eof => token.clone(),
			_ => Token::new(Eof, "", Position::default()),
		};
		Self { tokens: tokens.into_iter().peekable(), eof, function_depth: 0, nesting: 0, max_nesting }
	}

	pub fn parse(mut self) -> Result<Program, SyntaxError> {
		let mut statements = Vec::new();
		while !self.is_at_end() {
			statements.push(self.statement()?);
		}
		log::trace!("parsed {} top-level statements", statements.len());
		Ok(Program { statements })
	}

	fn statement(&mut self) -> Result<Statement, SyntaxError> {
		match self.peek().r#type {
			Function => {
				let keyword = self.advance();
				self.function_declaration(keyword)
			}
			Return => {
				let keyword = self.advance();
				self.return_statement(keyword)
			}
			Var => {
				let keyword = self.advance();
				self.var_declaration(keyword)
			}
			If => {
				let keyword = self.advance();
				self.if_statement(keyword)
			}
			While => {
				let keyword = self.advance();
				self.while_statement(keyword)
			}
			For => {
				let keyword = self.advance();
				self.for_statement(keyword)
			}
			Print => {
				let keyword = self.advance();
				let expression = self.expression()?;
				let position = keyword.position.to(expression.position);
				Ok(Statement::Print { expression, position })
			}
			LeftBrace => {
				let open = self.advance();
				let (block, close) = self.block(&[RightBrace], Expected::BlockEnd)?;
				Ok(Statement::Block(Block { position: open.position.to(close.position), ..block }))
			}
			_ => Ok(Statement::Expression(self.expression()?)),
		}
	}

	fn function_declaration(&mut self, keyword: Token) -> Result<Statement, SyntaxError> {
		let name_token = self.consume_identifier(Expected::FunctionName)?;
		self.consume(LeftParen, Expected::ParametersStart)?;
		let mut parameters = Vec::new();
		if !matches!(self.peek().r#type, RightParen) {
			loop {
				parameters.push(self.consume_identifier(Expected::ParameterName)?);
				if !self.match_token(Comma) {
					break;
				}
			}
		}
		self.consume(RightParen, Expected::ParametersEnd)?;

		self.function_depth += 1;
		let body = self.block(&[End], Expected::FunctionEnd);
		self.function_depth -= 1;
		let (body, end) = body?;

		Ok(Statement::FunDecl(FunctionDecl {
			name_token,
			parameters: Rc::new(parameters),
			body: Rc::new(body.statements),
			position: keyword.position.to(end.position),
		}))
	}

	fn return_statement(&mut self, keyword: Token) -> Result<Statement, SyntaxError> {
		if self.function_depth == 0 {
			return Err(SyntaxError::new(&keyword.lexeme, Expected::ReturnInFunction, keyword.position));
		}
		let value = self.expression()?;
		let position = keyword.position.to(value.position);
		Ok(Statement::Return { value, position })
	}

	fn var_declaration(&mut self, keyword: Token) -> Result<Statement, SyntaxError> {
		let name_token = self.consume_identifier(Expected::VariableName)?;
		self.consume(Equal, Expected::DeclarationEqual)?;
		let initializer = self.expression()?;
		let position = keyword.position.to(initializer.position);
		Ok(Statement::VarDeclaration { name_token, initializer, position })
	}

	fn if_statement(&mut self, keyword: Token) -> Result<Statement, SyntaxError> {
		let condition = self.expression()?;
		self.consume(Then, Expected::ConditionThen)?;
		let (then_branch, delimiter) = self.block(&[End, Else], Expected::ConditionEnd)?;
		let (else_branch, end) = if delimiter.r#type == Else {
			let (else_branch, end) = self.block(&[End], Expected::ConditionEnd)?;
			(Some(else_branch), end)
		} else {
			(None, delimiter)
		};
		let position = keyword.position.to(end.position);
		Ok(Statement::If { condition, then_branch, else_branch, position })
	}

	fn while_statement(&mut self, keyword: Token) -> Result<Statement, SyntaxError> {
		let condition = self.expression()?;
		self.consume(Then, Expected::LoopDo)?;
		let (body, end) = self.block(&[End], Expected::LoopEnd)?;
		let position = keyword.position.to(end.position);
		Ok(Statement::While { condition, body, position })
	}

	/// Bounds are parsed as terms so that `et` separates them instead of
	/// starting a logical expression.
	fn for_statement(&mut self, keyword: Token) -> Result<Statement, SyntaxError> {
		let variable = self.consume_identifier(Expected::LoopVariable)?;
		self.consume(From, Expected::LoopFrom)?;
		let start = self.term()?;
		self.consume(And, Expected::LoopAnd)?;
		let end = self.term()?;
		self.match_token(Then);
		let (body, last) = self.block(&[End], Expected::LoopEnd)?;
		let position = keyword.position.to(last.position);
		Ok(Statement::For { variable, start, end, body, position })
	}

	/// Statements up to one of `delimiters`, which is consumed and returned.
	fn block(&mut self, delimiters: &[TokenType], expected: Expected) -> Result<(Block, Token), SyntaxError> {
		let first = self.peek().position;
		let statements = self.nested(|parser| {
			let mut statements = Vec::new();
			while !delimiters.contains(&parser.peek().r#type) && !parser.is_at_end() {
				statements.push(parser.statement()?);
			}
			Ok(statements)
		})?;
		if !delimiters.contains(&self.peek().r#type) {
			return Err(self.error(expected));
		}
		let delimiter = self.advance();
		Ok((Block { statements, position: first.to(delimiter.position) }, delimiter))
	}

	fn expression(&mut self) -> Result<Expression, SyntaxError> { self.nested(Self::assignment) }

	/// Parse assignment expressions, only a variable can be assigned.
	fn assignment(&mut self) -> Result<Expression, SyntaxError> {
		let expression = self.or()?;
		if !matches!(self.peek().r#type, Equal) {
			return Ok(expression);
		}
		let equals = self.advance();
		let value = self.nested(Self::assignment)?;
		match expression.kind {
			ExpressionKind::Variable(target) => Ok(Expression::assign(target, value)),
			_ => Err(SyntaxError::new(&equals.lexeme, Expected::AssignmentTarget, equals.position)),
		}
	}

	fn or(&mut self) -> Result<Expression, SyntaxError> {
		let nesting = self.nesting;
		let mut expression = self.and()?;
		while matches!(self.peek().r#type, Or) {
			self.deepen()?;
			let operator = self.advance();
			expression = Expression::logical(expression, operator, self.and()?)
		}
		self.nesting = nesting;
		Ok(expression)
	}

	fn and(&mut self) -> Result<Expression, SyntaxError> {
		let nesting = self.nesting;
		let mut expression = self.equality()?;
		while matches!(self.peek().r#type, And) {
			self.deepen()?;
			let operator = self.advance();
			expression = Expression::logical(expression, operator, self.equality()?)
		}
		self.nesting = nesting;
		Ok(expression)
	}

	/// Parse equality expressions.
	fn equality(&mut self) -> Result<Expression, SyntaxError> {
		let nesting = self.nesting;
		let mut expression = self.comparison()?;
		while matches!(self.peek().r#type, BangEqual | EqualEqual) {
			self.deepen()?;
			let operator = self.advance();
			expression = Expression::binary(expression, operator, self.comparison()?)
		}
		self.nesting = nesting;
		Ok(expression)
	}

	/// Parse comparison expressions.
	fn comparison(&mut self) -> Result<Expression, SyntaxError> {
		let nesting = self.nesting;
		let mut expression = self.term()?;
		while matches!(self.peek().r#type, Greater | GreaterEqual | Less | LessEqual) {
			self.deepen()?;
			let operator = self.advance();
			expression = Expression::binary(expression, operator, self.term()?)
		}
		self.nesting = nesting;
		Ok(expression)
	}

	/// Parse term expressions.
	fn term(&mut self) -> Result<Expression, SyntaxError> {
		let nesting = self.nesting;
		let mut expression = self.factor()?;
		while matches!(self.peek().r#type, Minus | Plus) {
			self.deepen()?;
			let operator = self.advance();
			expression = Expression::binary(expression, operator, self.factor()?)
		}
		self.nesting = nesting;
		Ok(expression)
	}

	/// Parse factor expressions.
	fn factor(&mut self) -> Result<Expression, SyntaxError> {
		let nesting = self.nesting;
		let mut expression = self.unary()?;
		while matches!(self.peek().r#type, Slash | Star) {
			self.deepen()?;
			let operator = self.advance();
			expression = Expression::binary(expression, operator, self.unary()?)
		}
		self.nesting = nesting;
		Ok(expression)
	}

	/// Parse unary expressions.
	fn unary(&mut self) -> Result<Expression, SyntaxError> {
		if matches!(self.peek().r#type, Bang | Minus) {
			let operator = self.advance();
			return Ok(Expression::unary(operator, self.nested(Self::unary)?));
		}
		self.call()
	}

	/// Parse calls and array accesses, both postfix and chainable.
	fn call(&mut self) -> Result<Expression, SyntaxError> {
		let nesting = self.nesting;
		let mut expression = self.array()?;
		loop {
			if matches!(self.peek().r#type, LeftParen | LeftBracket) {
				self.deepen()?;
			}
			match self.peek().r#type {
				LeftParen => {
					let open = self.advance();
					let mut arguments = Vec::new();
					if !matches!(self.peek().r#type, RightParen) {
						loop {
							arguments.push(self.expression()?);
							if !self.match_token(Comma) {
								break;
							}
						}
					}
					let close = self.consume(RightParen, Expected::ArgumentsEnd)?;
					expression = Expression::call(expression, arguments, open.position.to(close.position));
				}
				LeftBracket => {
					self.advance();
					let index = self.expression()?;
					let close = self.consume(RightBracket, Expected::IndexEnd)?;
					expression = Expression::index(expression, index, &close);
				}
				_ => break,
			}
		}
		self.nesting = nesting;
		Ok(expression)
	}

	/// Parse array literals, a trailing comma is allowed.
	fn array(&mut self) -> Result<Expression, SyntaxError> {
		if !matches!(self.peek().r#type, LeftBracket) {
			return self.primary();
		}
		let open = self.advance();
		let mut elements = Vec::new();
		let close = loop {
			if matches!(self.peek().r#type, RightBracket) {
				break self.advance();
			}
			elements.push(self.expression()?);
			if matches!(self.peek().r#type, RightBracket) {
				break self.advance();
			}
			self.consume(Comma, Expected::ArrayComma)?;
		};
		Ok(Expression::array(elements, open.position.to(close.position)))
	}

	/// Parse primary expressions.
	fn primary(&mut self) -> Result<Expression, SyntaxError> {
		let value = match self.peek().r#type.clone() {
			False => LiteralValue::Boolean(false),
			True => LiteralValue::Boolean(true),
			Null => LiteralValue::Null,
			Number(n) => LiteralValue::Number(n),
			String(s) => LiteralValue::String(s),
			Identifier(_) => return Ok(Expression::variable(self.advance())),
			LeftParen => {
				let open = self.advance();
				let expression = self.expression()?;
				let close = self.consume(RightParen, Expected::ClosingParenthesis)?;
				return Ok(expression.widen(open.position.to(close.position)));
			}
			_ => return Err(self.error(Expected::Expression)),
		};
		let token = self.advance();
		Ok(Expression::literal(value, &token))
	}

	/// Parse one level deeper in the tree, on a stack that grows as needed.
	fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Result<T, SyntaxError>) -> Result<T, SyntaxError> {
		self.deepen()?;
		let result = stack::grow(|| parse(self));
		self.nesting -= 1;
		result
	}

	fn deepen(&mut self) -> Result<(), SyntaxError> {
		self.nesting += 1;
		if self.nesting > self.max_nesting {
			let limit = self.max_nesting;
			let error = self.error(Expected::TooDeep(limit));
			log::warn!("nesting limit of {limit} reached at {}", error.position);
			return Err(error);
		}
		Ok(())
	}

	/// Consume the next token if it has the given type.
	fn match_token(&mut self, r#type: TokenType) -> bool {
		if self.peek().r#type == r#type {
			self.advance();
			true
		} else {
			false
		}
	}

	fn consume(&mut self, r#type: TokenType, expected: Expected) -> Result<Token, SyntaxError> {
		if self.peek().r#type == r#type { Ok(self.advance()) } else { Err(self.error(expected)) }
	}

	fn consume_identifier(&mut self, expected: Expected) -> Result<Token, SyntaxError> {
		if matches!(self.peek().r#type, Identifier(_)) { Ok(self.advance()) } else { Err(self.error(expected)) }
	}

	/// Error pointing at the current token.
	fn error(&mut self, expected: Expected) -> SyntaxError {
		let token = self.peek();
		SyntaxError::new(&token.lexeme, expected, token.position)
	}

	/// Advance to the next token, staying on `Eof` once reached.
	fn advance(&mut self) -> Token { self.tokens.next().unwrap_or_else(|| self.eof.clone()) }

	/// Peek at the current token.
	fn peek(&mut self) -> &Token { self.tokens.peek().unwrap_or(&self.eof) }

	fn is_at_end(&mut self) -> bool { self.peek().r#type == Eof }
}

/// Parse `tokens` into a [`Program`] at most `max_nesting` levels deep.
pub(crate) fn parse(tokens: Vec<Token>, max_nesting: usize) -> Result<Program, SyntaxError> {
	Parser::new(tokens, max_nesting).parse()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{scanner::scan, session::Limits};

	const MAX_NESTING: usize = Limits::DEFAULT_MAX_NESTING;

	fn program(input: &str) -> Program { parse(scan(input).unwrap(), MAX_NESTING).unwrap() }

	fn parse_to(input: &str, equals: &str) { assert_eq!(program(input).to_string(), equals, "{input}"); }

	fn error(input: &str) -> SyntaxError { parse(scan(input).unwrap(), MAX_NESTING).unwrap_err() }

	fn first_expression(input: &str) -> Expression {
		match program(input).statements.into_iter().next() {
			Some(Statement::Expression(expression)) => expression,
			other => panic!("expected an expression statement, got {other:?}"),
		}
	}

	#[test]
	fn parse_expressions() {
		parse_to("1 + 2 * 3", "(+ 1 (* 2 3))");
		parse_to("(1 + 2) * 3", "(* (+ 1 2) 3)");
		parse_to("1 + 2 * 3 / 4 - 5", "(- (+ 1 (/ (* 2 3) 4)) 5)");
		parse_to("1 - 2 - 3", "(- (- 1 2) 3)");
		parse_to("8 + 800.3 * 123", "(+ 8 (* 800.3 123))");
	}

	#[test]
	fn parse_comparison_and_equality() {
		parse_to("1 < 2", "(< 1 2)");
		parse_to("1 >= 2", "(>= 1 2)");
		parse_to("1 < 2 == vrai", "(== (< 1 2) true)");
		parse_to("1 == 2 != 3", "(!= (== 1 2) 3)");
	}

	#[test]
	fn parse_unary() {
		parse_to("-123", "(- 123)");
		parse_to("!!vrai", "(! (! true))");
		parse_to("-1 + 2", "(+ (- 1) 2)");
		parse_to("-(1 + 2)", "(- (+ 1 2))");
	}

	#[test]
	fn parse_literals() {
		parse_to("42", "42");
		parse_to("3.5", "3.5");
		parse_to("'bonjour'", "\"bonjour\"");
		parse_to("VRAI", "true");
		parse_to("faux", "false");
		parse_to("nul", "null");
	}

	#[test]
	fn parse_logical() {
		parse_to("vrai ou faux et faux", "(ou true (et false false))");
		parse_to("TRUE OR FALSE AND FALSE", "(or true (and false false))");
		parse_to("(vrai ou faux) et faux", "(et (ou true false) false)");
		parse_to("a et b et c", "(et (et a b) c)");
	}

	#[test]
	fn parse_assignment() {
		parse_to("a = 1", "(= a 1)");
		parse_to("a = b = 3", "(= a (= b 3))");
		parse_to("a = 1 + 2", "(= a (+ 1 2))");
	}

	#[test]
	fn parse_calls_and_arrays() {
		parse_to("f()", "(call f)");
		parse_to("f(1, 2)(3)", "(call (call f 1 2) 3)");
		parse_to("[1, 2, [3]]", "(array 1 2 (array 3))");
		parse_to("[]", "(array)");
		parse_to("[1,]", "(array 1)");
		parse_to("t[0][1]", "(index (index t 0) 1)");
		parse_to("t[0](1)", "(call (index t 0) 1)");
		parse_to("f(1)[0]", "(index (call f 1) 0)");
		parse_to("[1, 2][0]", "(index (array 1 2) 0)");
	}

	#[test]
	fn parse_statements() {
		parse_to("VAR A = 1", "(var A 1)");
		parse_to("afficher(A)", "(print A)");
		parse_to("print 1 + 1", "(print (+ 1 1))");
		parse_to("{ VAR A = 1 }", "(block (var A 1))");
		parse_to("VAR A = 1 afficher(A)", "(var A 1)\n(print A)");
		parse_to("VAR A = 3 + 2\nafficher(A)\n", "(var A (+ 3 2))\n(print A)");
	}

	#[test]
	fn parse_control_flow() {
		parse_to("SI A > 2 ALORS afficher 1 SINON afficher 2 FIN", "(if (> A 2) (block (print 1)) (block (print 2)))");
		parse_to("si a alors fin", "(if a (block))");
		parse_to("tantque A < 3 faire A = A + 1 fin", "(while (< A 3) (block (= A (+ A 1))))");
		parse_to("pour K entre 1 et 3 faire afficher K fin", "(for K 1 3 (block (print K)))");
		parse_to("for k from 3 and 1 print k end", "(for k 3 1 (block (print k)))");
		parse_to("pour k entre 0 et n - 1 afficher k fin", "(for k 0 (- n 1) (block (print k)))");
	}

	#[test]
	fn parse_functions() {
		parse_to("fonction f(a, b) retourner a + b fin", "(function f (a b) (return (+ a b)))");
		parse_to("function noop() end", "(function noop ())");
		parse_to(
			"fonction count(n) si n > 1 alors count(n - 1) fin afficher(n) fin count(3)",
			"(function count (n) (if (> n 1) (block (call count (- n 1)))) (print n))\n(call count 3)",
		);
	}

	#[test]
	fn expression_positions() {
		assert_eq!(first_expression("1 + 2 * 3").position, Position::new(0, 9, 1));
		assert_eq!(first_expression("(1 + 2)").position, Position::new(0, 7, 1));
		assert_eq!(first_expression("-5").position, Position::new(0, 2, 1));
		assert_eq!(first_expression("t[10]").position, Position::new(0, 5, 1));
		assert_eq!(first_expression("[1, 2]").position, Position::new(0, 6, 1));
		assert_eq!(first_expression("a = 10").position, Position::new(0, 6, 1));

		let call = first_expression("f(1, 2)");
		assert_eq!(call.position, Position::new(0, 1, 1));
		match call.kind {
			ExpressionKind::Call { arguments_position, .. } => assert_eq!(arguments_position, Position::new(1, 7, 1)),
			other => panic!("expected a call, got {other:?}"),
		}
	}

	#[test]
	fn statement_positions() {
		let statements = program("SI vrai ALORS\n  afficher 1\nFIN").statements;
		assert_eq!(statements[0].position(), Position::new(0, 30, 1));
		let statements = program("VAR A = 12").statements;
		assert_eq!(statements[0].position(), Position::new(0, 10, 1));
	}

	#[test]
	fn syntax_errors() {
		let e = error("VAR = 1");
		assert_eq!((e.found.as_str(), e.expected), ("=", Expected::VariableName));
		assert_eq!(e.position, Position::new(4, 5, 1));

		let e = error("1 = 2");
		assert_eq!((e.found.as_str(), e.expected), ("=", Expected::AssignmentTarget));

		let e = error("SI vrai afficher 1 FIN");
		assert_eq!((e.found.as_str(), e.expected), ("afficher", Expected::ConditionThen));

		let e = error("SI vrai ALORS afficher 1");
		assert_eq!((e.found.as_str(), e.expected), ("fin du programme", Expected::ConditionEnd));

		let e = error("tantque vrai afficher 1 fin");
		assert_eq!(e.expected, Expected::LoopDo);

		let e = error("(1 + 2");
		assert_eq!(e.expected, Expected::ClosingParenthesis);

		let e = error("f(1");
		assert_eq!(e.expected, Expected::ArgumentsEnd);

		let e = error("t[1");
		assert_eq!(e.expected, Expected::IndexEnd);

		let e = error("[1 2]");
		assert_eq!((e.found.as_str(), e.expected), ("2", Expected::ArrayComma));

		let e = error("1 +");
		assert_eq!(e.expected, Expected::Expression);

		let e = error(";");
		assert_eq!((e.found.as_str(), e.expected), (";", Expected::Expression));

		let e = error("{ VAR A = 1");
		assert_eq!(e.expected, Expected::BlockEnd);

		let e = error("pour 1 entre 1 et 2 fin");
		assert_eq!(e.expected, Expected::LoopVariable);

		let e = error("pour k 1 et 2 fin");
		assert_eq!(e.expected, Expected::LoopFrom);

		let e = error("fonction (a) fin");
		assert_eq!(e.expected, Expected::FunctionName);

		let e = error("fonction f(a, 1) fin");
		assert_eq!(e.expected, Expected::ParameterName);

		let e = error("fonction f(a) afficher a");
		assert_eq!(e.expected, Expected::FunctionEnd);
	}

	#[test]
	fn return_only_inside_functions() {
		let e = error("retourner 1");
		assert_eq!((e.found.as_str(), e.expected), ("retourner", Expected::ReturnInFunction));
		assert_eq!(e.position, Position::new(0, 9, 1));

		parse_to(
			"fonction f() si vrai alors retourner 1 fin retourner 2 fin",
			"(function f () (if true (block (return 1))) (return 2))",
		);
		let e = error("fonction f() fin retourner 1");
		assert_eq!(e.expected, Expected::ReturnInFunction);
	}

	#[test]
	fn nesting_is_bounded() {
		let parenthesized = |n: usize| format!("{}1{}", "(".repeat(n), ")".repeat(n));
		parse_to(&parenthesized(200), "1");
		let e = error(&parenthesized(100_000));
		assert_eq!((e.found.as_str(), e.expected), ("(", Expected::TooDeep(MAX_NESTING)));

		let e = error(&format!("{}1", "-".repeat(100_000)));
		assert_eq!(e.expected, Expected::TooDeep(MAX_NESTING));
		let e = error(&format!("{}{}", "{".repeat(100_000), "}".repeat(100_000)));
		assert_eq!(e.expected, Expected::TooDeep(MAX_NESTING));
		let e = error(&format!("VAR T = {}{}", "[".repeat(100_000), "]".repeat(100_000)));
		assert_eq!(e.expected, Expected::TooDeep(MAX_NESTING));
	}

	#[test]
	fn operator_chains_count_as_nesting() {
		let sum = |terms: usize| vec!["1"; terms].join(" + ");
		assert!(parse(scan(&sum(200)).unwrap(), MAX_NESTING).is_ok());
		let e = error(&sum(100_000));
		assert_eq!((e.found.as_str(), e.expected), ("+", Expected::TooDeep(MAX_NESTING)));
		let e = error(&format!("f{}", "()".repeat(100_000)));
		assert_eq!(e.expected, Expected::TooDeep(MAX_NESTING));
	}
}
