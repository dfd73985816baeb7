use std::path::PathBuf;

use palc::{Parser, Subcommand};

#[derive(Parser)]
#[command(
	name = "grafilang",
	after_long_help = "Interpréteur du langage Grafilang (mots-clés en français ou en anglais)."
)]
pub struct Cli {
	/// Nested function calls allowed before a run fails
	#[arg(long)]
	pub max_depth:   Option<usize>,
	/// Levels of nested expressions and blocks allowed in a program
	#[arg(long)]
	pub max_nesting: Option<usize>,
	#[command(subcommand)]
	pub mode:        Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Run a source file
	File { path: PathBuf },
	/// Interactive prompt
	Repl,
	/// Print the parsed program of a source file
	Ast { path: PathBuf },
}
