use crate::scanner::Position;

/// A grammar violation at a specific token.
///
/// Rendered as "`<token>` inattendu, `<what was expected>`".
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("ligne {}: {found} inattendu, {expected}", .position.line)]
pub struct SyntaxError {
	/// The lexeme of the offending token.
	pub found:    String,
	/// The construct the parser was looking for.
	pub expected: Expected,
	/// Position of the offending token.
	pub position: Position,
}

impl SyntaxError {
	pub fn new(found: &str, expected: Expected, position: Position) -> Self {
		let found = if found.is_empty() { "fin du programme".to_string() } else { found.to_string() };
		Self { found, expected, position }
	}
}

/// What the parser expected when it met an unexpected token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
	Expression,
	ClosingParenthesis,
	BlockEnd,
	FunctionName,
	ParametersStart,
	ParameterName,
	ParametersEnd,
	FunctionEnd,
	ConditionThen,
	ConditionEnd,
	LoopDo,
	LoopEnd,
	LoopVariable,
	LoopFrom,
	LoopAnd,
	VariableName,
	DeclarationEqual,
	AssignmentTarget,
	ArgumentsEnd,
	IndexEnd,
	ArrayComma,
	ReturnInFunction,
	/// The syntax tree would be deeper than the given number of levels.
	TooDeep(usize),
}

impl std::fmt::Display for Expected {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use Expected::*;
		let description = match self {
			Expression => "expression attendue (nombre, chaîne, variable...)",
			ClosingParenthesis => "')' attendu pour fermer la parenthèse ouvrante",
			BlockEnd => "'}' attendu à la fin d'un bloc",
			FunctionName => "nom de la fonction attendu",
			ParametersStart => "'(' attendu pour définir les paramètres de la fonction",
			ParameterName => "nom de paramètre attendu",
			ParametersEnd => "')' attendu à la fin de la liste des paramètres",
			FunctionEnd => "'FIN' attendu à la fin de la fonction",
			ConditionThen => "'ALORS' est attendu à la fin d'une condition",
			ConditionEnd => "'FIN' attendu à la fin d'une condition",
			LoopDo => "'FAIRE' est attendu après la condition d'une boucle",
			LoopEnd => "'FIN' attendu à la fin d'une boucle",
			LoopVariable => "nom de variable attendu",
			LoopFrom => "'ENTRE' attendu ici",
			LoopAnd => "mot clef 'ET' attendu",
			VariableName => "un nom de variable est attendu après VAR",
			DeclarationEqual => "'=' attendu pour déclarer une variable",
			AssignmentTarget => "l'expression à gauche d'un '=' doit être une variable",
			ArgumentsEnd => "')' attendu à la fin de la liste des arguments",
			IndexEnd => "']' attendu après l'index d'un tableau",
			ArrayComma => "',' attendu entre les éléments d'un tableau",
			ReturnInFunction => "'RETOURNER' n'est possible qu'à l'intérieur d'une fonction",
			TooDeep(limit) => return write!(f, "le programme est imbriqué sur plus de {limit} niveaux"),
		};
		f.write_str(description)
	}
}
