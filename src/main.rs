use std::{fs::read_to_string, process::ExitCode};

use anyhow::Context;
use grafilang::{GrafiError, Limits, Session, cli::*};
use palc::Parser;

fn main() -> ExitCode {
	env_logger::init();
	let cli = Cli::parse();
	let defaults = Limits::default();
	let limits = Limits {
		max_call_depth: cli.max_depth.unwrap_or(defaults.max_call_depth),
		max_nesting:    cli.max_nesting.unwrap_or(defaults.max_nesting),
	};
	let mut session = Session::with_limits(limits);

	let result = match cli.mode {
		Mode::File { path } => session.run_file(&path),
		Mode::Repl => {
			session.run_prompt();
			Ok(())
		}
		Mode::Ast { path } => dump(&path),
	};
	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("{e}");
			ExitCode::FAILURE
		}
	}
}

fn dump(path: &std::path::Path) -> Result<(), GrafiError> {
	let source = read_to_string(path).with_context(|| format!("Failed open source file {}", path.display()))?;
	match grafilang::dump_ast(&source) {
		Ok(ast) => {
			println!("{ast}");
			Ok(())
		}
		Err(diagnostic) => Err(GrafiError::Diagnostic { diagnostic, code: source }),
	}
}
