#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use grafilang::{Diagnostic, Expected, Limits, Position, RuntimeErrorType, ScanErrorType, Session, interpret};

	fn run(source: &str) -> Vec<String> {
		let mut lines: Vec<String> = Vec::new();
		if let Err(e) = interpret(source, &mut lines) {
			panic!("{}", e.render(source));
		}
		lines
	}

	fn fail(source: &str) -> Diagnostic {
		let mut lines: Vec<String> = Vec::new();
		interpret(source, &mut lines).unwrap_err()
	}

	fn runtime(source: &str) -> RuntimeErrorType {
		match fail(source) {
			Diagnostic::Runtime(e) => e.kind,
			other => panic!("expected a runtime error, got {other:?}"),
		}
	}

	fn scripts() -> PathBuf { PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("scripts") }

	#[test]
	fn simple_expressions() {
		for (code, expected) in [
			("1+2", "3"),
			("\"Bonjour \" + \"John\"", "Bonjour John"),
			("'Bonjour ' + 'John'", "Bonjour John"),
			("1 + 2 * 3", "7"),
			("(1 + 2) * 3", "9"),
		] {
			assert_eq!(run(&format!("afficher({code})")), [expected], "{code}");
		}
	}

	#[test]
	fn string_number_typing() {
		assert_eq!(runtime("afficher(\"a\" + 1)"), RuntimeErrorType::AddToString("nombre"));
		assert_eq!(runtime("afficher(1 + \"a\")"), RuntimeErrorType::AddToNumber("chaîne"));
	}

	#[test]
	fn unterminated_string() {
		let e = fail("\n            afficher(\"Bonjour \" + \" John)\n        ");
		assert!(matches!(e, Diagnostic::Scan(ref e) if e.kind == ScanErrorType::UnterminatedString('"')));
		assert_eq!(e.title(), "Erreur de syntaxe");
	}

	#[test]
	fn variables() {
		assert_eq!(run("VAR A = 3 + 2\nafficher(A)"), ["5"]);
		assert_eq!(runtime("VAR A = 3 + 2\nVAR A = 2\nafficher(A)"), RuntimeErrorType::Redeclaration("A".into()));
		assert_eq!(run("VAR A = 3 + 2\nA = 1\nafficher(A)"), ["1"]);
		assert_eq!(runtime("A = 2\nafficher(A)"), RuntimeErrorType::UndefinedVariable("A".into()));
		assert_eq!(run("VAR A = 2\n{\n    VAR A = 3\n}\nafficher(A)"), ["2"]);
	}

	#[test]
	fn conditions() {
		for (value, expected) in [(4, "plus de 2"), (1, "moins de 2")] {
			let source = format!(
				"VAR A = {value}\nSI A > 2 ALORS\n    afficher(\"plus de 2\")\nSINON\n    afficher(\"moins de 2\")\nFIN"
			);
			assert_eq!(run(&source), [expected]);
		}
	}

	#[test]
	fn logical_operators() {
		for (code, expected) in [
			("TRUE ET TRUE", "true"),
			("FALSE ET TRUE", "false"),
			("TRUE OR TRUE", "true"),
			("FALSE OR TRUE", "true"),
			("FALSE OR FALSE", "false"),
			("TRUE OR FALSE AND FALSE", "true"),
			("(TRUE OR FALSE) AND FALSE", "false"),
		] {
			assert_eq!(run(&format!("afficher({code})")), [expected], "{code}");
		}
	}

	#[test]
	fn short_circuit_skips_the_right_side() {
		assert_eq!(run("afficher(FAUX ET inconnu(1 + \"a\"))"), ["false"]);
		assert_eq!(run("afficher(VRAI OU 1 / [])"), ["true"]);
	}

	#[test]
	fn while_loops() {
		assert_eq!(run("VAR A = 1\nTANTQUE A <= 3 FAIRE\n    afficher(A)\n    A = A + 1\nFIN"), ["1", "2", "3"]);
	}

	#[test]
	fn while_cap() {
		let source = "VAR N = 0\nTANTQUE VRAI FAIRE\n    N = N + 1\nFIN";
		let e = fail(source);
		assert!(matches!(e, Diagnostic::Runtime(ref e) if e.kind == RuntimeErrorType::InfiniteLoop));
		assert_eq!(e.position(), Position::new(18, 22, 2));
		let rendered = e.render(source);
		assert_eq!(rendered.lines().nth(3), Some("        ^^^^"));
	}

	#[test]
	fn while_runs_exactly_ten_thousand_times() {
		let source = "VAR N = 0\nTANTQUE N < 10000 FAIRE N = N + 1 FIN\nafficher(N)";
		assert_eq!(run(source), ["10000"]);
		let source = "VAR N = 0\nTANTQUE N < 10001 FAIRE N = N + 1 FIN\nafficher(N)";
		assert!(matches!(fail(source), Diagnostic::Runtime(_)));
	}

	#[test]
	fn for_loops() {
		assert_eq!(run("POUR K ENTRE 1 ET 3 FAIRE\n    afficher(K)\nFIN"), ["1", "2", "3"]);
		assert_eq!(run("FOR K FROM 3 AND 1 DO\n    print(K)\nEND"), ["3", "2", "1"]);
	}

	#[test]
	fn functions() {
		let source = "
fonction count(n)
  si n > 1 alors
        count(n - 1)
  fin
  afficher(n)
fin

count(3)";
		assert_eq!(run(source), ["1", "2", "3"]);
		assert_eq!(run("fonction double(n)\n    retourner n * 2\nfin\n\nafficher(double(3))"), ["6"]);
	}

	#[test]
	fn arity() {
		let source = "fonction f(a) retourner a fin\nf()";
		let e = fail(source);
		assert_eq!(e.message(), "La fonction attend 1 paramètre(s) (0 obtenu(s))");
		assert_eq!(e.position(), Position::new(31, 33, 2));
		assert_eq!(runtime("fonction f(a) retourner a fin\nf(1, 2)"), RuntimeErrorType::ArityMismatch {
			expected: 1,
			received: 2,
		});
	}

	#[test]
	fn array_bounds() {
		assert_eq!(run("VAR t = [10, 20, 30]\nafficher(t[2])"), ["30"]);
		assert_eq!(runtime("VAR t = [10, 20, 30]\nafficher(t[-1])"), RuntimeErrorType::NegativeIndex(-1.0));
		assert_eq!(runtime("VAR t = [10, 20, 30]\nafficher(t[3])"), RuntimeErrorType::IndexOutOfBounds {
			index:  3.0,
			length: 3,
		});
	}

	#[test]
	fn return_outside_function() {
		let e = fail("retourner 1");
		assert!(matches!(e, Diagnostic::Syntax(ref e) if e.expected == Expected::ReturnInFunction));
	}

	#[test]
	fn determinism() {
		let source = "VAR A = 1\nfonction f(x) retourner x + A fin\nafficher(f(1))\nafficher(A / 0)\nafficher(B)";
		let mut first: Vec<String> = Vec::new();
		let mut second: Vec<String> = Vec::new();
		let first_error = interpret(source, &mut first).unwrap_err();
		let second_error = interpret(source, &mut second).unwrap_err();
		assert_eq!(first, ["2", "Infinity"]);
		assert_eq!(first, second);
		assert_eq!(first_error, second_error);

		let mut session = Session::new();
		let mut third: Vec<String> = Vec::new();
		assert_eq!(session.interpret(source, &mut third).unwrap_err(), first_error);
		assert_eq!(session.interpret(source, &mut third).unwrap_err(), first_error);
		assert_eq!(third, ["2", "Infinity", "2", "Infinity"]);
	}

	#[test]
	fn call_depth_limit() {
		let mut session = Session::with_limits(Limits { max_call_depth: 16, ..Limits::default() });
		let mut lines: Vec<String> = Vec::new();
		let e = session.interpret("fonction boucle() boucle() fin\nboucle()", &mut lines).unwrap_err();
		assert!(matches!(e, Diagnostic::Runtime(ref e) if e.kind == RuntimeErrorType::CallDepthExceeded(16)));
		assert_eq!(e.position(), Position::new(18, 24, 1));
	}

	/// Run `source` on a thread with a 2 MiB stack.
	fn on_small_stack(source: String) -> (Vec<String>, Result<(), Diagnostic>) {
		std::thread::Builder::new()
			.stack_size(2 << 20)
			.spawn(move || {
				let mut lines: Vec<String> = Vec::new();
				let result = interpret(&source, &mut lines);
				(lines, result)
			})
			.unwrap()
			.join()
			.unwrap()
	}

	#[test]
	fn default_call_depth_fits_a_small_stack() {
		let count = "fonction f(n) si n > 0 alors retourner f(n - 1) + 1 fin retourner 0 fin";
		let deepest = Limits::DEFAULT_MAX_CALL_DEPTH - 1;
		let (lines, result) = on_small_stack(format!("{count} afficher f({deepest})"));
		assert_eq!(result, Ok(()));
		assert_eq!(lines, [deepest.to_string()]);

		let (_, result) = on_small_stack(format!("{count} afficher f({})", deepest + 1));
		let limit = Limits::DEFAULT_MAX_CALL_DEPTH;
		assert!(matches!(result, Err(Diagnostic::Runtime(e)) if e.kind == RuntimeErrorType::CallDepthExceeded(limit)));
	}

	#[test]
	fn deep_nesting_fails_with_a_diagnostic() {
		let parenthesized = |n: usize| format!("afficher {}1{}", "(".repeat(n), ")".repeat(n));
		let (_, result) = on_small_stack(parenthesized(100_000));
		match result {
			Err(Diagnostic::Syntax(e)) => assert_eq!(e.expected, Expected::TooDeep(Limits::DEFAULT_MAX_NESTING)),
			other => panic!("expected a syntax error, got {other:?}"),
		}

		let (lines, result) = on_small_stack(parenthesized(Limits::DEFAULT_MAX_NESTING - 1));
		assert_eq!((lines, result), (vec!["1".to_string()], Ok(())));

		let sum = format!("afficher {}1{}", "1 + (".repeat(100), ")".repeat(100));
		let (lines, result) = on_small_stack(sum);
		assert_eq!((lines, result), (vec!["101".to_string()], Ok(())));
	}

	#[test]
	fn marker_for_editors() {
		let source = "VAR A = 1\nafficher(A + \"x\")";
		let marker = fail(source).marker(source);
		assert_eq!((marker.start_line, marker.start_column), (2, 9));
		assert_eq!((marker.end_line, marker.end_column), (2, 18));
		assert!(marker.message.starts_with("Un nombre doit être ajouté"));
	}

	#[test]
	fn render_native_errors() {
		let source = "VAR t = arrondir(\"2\")";
		let rendered = fail(source).render(source);
		assert_eq!(rendered, format!(
			"Erreur à l'exécution: ligne 1, colonne 8\n\n{source}\n{pad}^^^^^^^^\n{pad}arrondir: un nombre est attendu (chaîne)",
			pad = " ".repeat(8)
		));
	}

	#[test]
	fn script_files() {
		for name in ["fizzbuzz", "tri", "compteur"] {
			let source = std::fs::read_to_string(scripts().join(format!("{name}.glang"))).unwrap();
			let expected = std::fs::read_to_string(scripts().join(format!("{name}.out"))).unwrap();
			assert_eq!(run(&source).join("\n"), expected.trim_end(), "{name}");
		}
	}

	#[test]
	fn run_file() {
		let result = Session::new().run_file(scripts().join("compteur.glang"));
		assert!(result.is_ok());
	}
}
