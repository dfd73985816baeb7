//! Where `afficher` and `ecrire` send their lines.

use std::io::Write;

/// Line sink of a run.
pub trait Output {
	/// Append one line.
	fn push(&mut self, line: String);

	/// Drop every line pushed so far, when the sink can.
	fn clear(&mut self);
}

impl Output for Vec<String> {
	fn push(&mut self, line: String) { Vec::push(self, line) }

	fn clear(&mut self) { Vec::clear(self) }
}

/// Writes every line to the standard output as soon as it is pushed.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Output for Stdout {
	fn push(&mut self, line: String) {
		let mut stdout = std::io::stdout().lock();
		if let Err(e) = writeln!(stdout, "{line}") {
			log::error!("Failed write line: {e}");
		}
	}

	/// Printed lines can't be taken back.
	fn clear(&mut self) {}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn vec_collects_lines() {
		let mut lines: Vec<String> = Vec::new();
		let output: &mut dyn Output = &mut lines;
		output.push("a".into());
		output.push("b".into());
		assert_eq!(lines, ["a", "b"]);
		Output::clear(&mut lines);
		assert!(lines.is_empty());
	}
}
