use std::{fs::read_to_string, io::Write, path::Path};

use anyhow::Context;

use crate::{
	GrafiError,
	environment::{Captures, Scope},
	error::Diagnostic,
	interpreter::{Interpreter, stdlib},
	output::{Output, Stdout},
	parser::parse,
	scanner::scan,
};

thread_local! {
	/// Library functions, built once per thread and shared by every session.
	static LIBRARY: Scope = Scope::new(stdlib::library());
}

/// Resource guards of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
	/// Nested user function calls allowed before the run fails.
	pub max_call_depth: usize,
	/// Levels of nested expressions and blocks allowed before parsing fails.
	pub max_nesting:    usize,
}

impl Limits {
	pub const DEFAULT_MAX_CALL_DEPTH: usize = 128;
	pub const DEFAULT_MAX_NESTING: usize = 256;
}

impl Default for Limits {
	fn default() -> Self {
		Self { max_call_depth: Self::DEFAULT_MAX_CALL_DEPTH, max_nesting: Self::DEFAULT_MAX_NESTING }
	}
}

/// One interpreter: a user scope chained onto the shared library.
pub struct Session {
	scope:    Scope,
	/// Scopes closed over by the functions declared so far.
	captures: Captures,
	limits:   Limits,
}

impl Default for Session {
	fn default() -> Self { Self::new() }
}

impl Session {
	pub fn new() -> Self { Self::with_limits(Limits::default()) }

	pub fn with_limits(limits: Limits) -> Self {
		Self { scope: LIBRARY.with(Scope::child), captures: Captures::default(), limits }
	}

	/// Run `source` from a clean user scope, sending printed lines to `output`.
	pub fn interpret(&mut self, source: &str, output: &mut dyn Output) -> Result<(), Diagnostic> {
		self.reset();
		self.run(source, output)
	}

	/// Run a source file, printing to the standard output.
	pub fn run_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), GrafiError> {
		let path = path.as_ref();
		let source = read_to_string(path).with_context(|| format!("Failed open source file {}", path.display()))?;
		self.interpret(&source, &mut Stdout).map_err(|diagnostic| GrafiError::Diagnostic { diagnostic, code: source })
	}

	/// Run the REPL prompt. Bindings live until the prompt is closed.
	pub fn run_prompt(&mut self) {
		self.reset();
		let mut input = String::new();
		let stdin = std::io::stdin();
		loop {
			input.clear();
			print!("> ");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => {
					println!("\nAu revoir !");
					break;
				}
				Ok(_) => {}
				Err(e) => {
					eprintln!("Failed read line: {e}");
					continue;
				}
			}
			let line = input.trim();
			if let Err(diagnostic) = self.run(line, &mut Stdout) {
				eprintln!("{}", diagnostic.render(line));
			}
		}
	}

	fn run(&mut self, source: &str, output: &mut dyn Output) -> Result<(), Diagnostic> {
		let program = parse(scan(source)?, self.limits.max_nesting)?;
		log::debug!("AST:\n{program}");
		Interpreter::new(self.scope.clone(), output, &mut self.captures, self.limits).interpret(&program)?;
		Ok(())
	}

	/// Forget every user binding, including those of scopes kept alive by
	/// the functions declared in them.
	fn reset(&mut self) {
		self.captures.release();
		self.scope.borrow_mut().clear();
	}
}

/// User functions hold their scope, which holds them: emptying it frees both.
impl Drop for Session {
	fn drop(&mut self) { self.reset() }
}

/// Run `source` in a fresh [`Session`].
///
/// ```
/// let mut lines: Vec<String> = Vec::new();
/// grafilang::interpret("afficher 1 + 2 * 3", &mut lines).unwrap();
/// assert_eq!(lines, ["7"]);
/// ```
pub fn interpret(source: &str, output: &mut dyn Output) -> Result<(), Diagnostic> {
	Session::new().interpret(source, output)
}

/// The parsed program as S-expressions, one line per top-level statement.
///
/// ```
/// assert_eq!(grafilang::dump_ast("VAR A = 1 + 2").unwrap(), "(var A (+ 1 2))");
/// ```
pub fn dump_ast(source: &str) -> Result<String, Diagnostic> {
	Ok(parse(scan(source)?, Limits::DEFAULT_MAX_NESTING)?.to_string())
}
