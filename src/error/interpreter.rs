use crate::scanner::Position;

/// Errors that can occur during interpretation
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("ligne {}: {kind}", .position.line)]
pub struct RuntimeError {
	/// The node the interpreter was evaluating.
	pub position: Position,
	pub kind:     RuntimeErrorType,
}

impl RuntimeError {
	pub fn new(position: Position, kind: RuntimeErrorType) -> Self { Self { position, kind } }
}

/// Which loop bound was not a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
	Start,
	End,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeErrorType {
	/// Unary `-` on something else than a number.
	NegateNonNumber(&'static str),
	/// Unary `!` on something else than a boolean.
	NotNonBoolean(&'static str),
	/// Arithmetic or comparison on non numbers; holds the verb ("soustraits", ...).
	NumbersRequired { operation: &'static str, found: &'static str },
	/// `+` with a number on the left and something else on the right.
	AddToNumber(&'static str),
	/// `+` with a string on the left and something else on the right.
	AddToString(&'static str),
	/// `+` with neither a number nor a string on the left.
	AddUnsupported(&'static str),
	/// `si` or `tantque` condition that is not a boolean.
	ConditionNotBoolean(&'static str),
	/// Left operand of `et` / `ou` is not a boolean.
	LogicalLeftNotBoolean { operator: String, found: &'static str },
	/// Right operand of `et` / `ou` is not a boolean.
	LogicalRightNotBoolean { operator: String, found: &'static str },
	/// A `pour` bound that is not a number.
	LoopBoundNotNumber { bound: Bound, found: &'static str },
	UndefinedVariable(String),
	Redeclaration(String),
	/// Assignment to a library binding.
	ReadOnly(String),
	NotCallable(&'static str),
	ArityMismatch { expected: usize, received: usize },
	NotAnArray(&'static str),
	IndexNotNumber(&'static str),
	IndexNotInteger(f64),
	NegativeIndex(f64),
	IndexOutOfBounds { index: f64, length: usize },
	/// The `tantque` iteration cap was exceeded.
	InfiniteLoop,
	/// Too many nested function calls.
	CallDepthExceeded(usize),
	/// A library function rejected its arguments.
	Native { function: String, message: String },
}

impl std::fmt::Display for RuntimeErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use RuntimeErrorType::*;
		match self {
			NegateNonNumber(found) => {
				write!(f, "Impossible d'utiliser l'opérateur \"-\" sur une valeur qui n'est pas un nombre ({found})")
			}
			NotNonBoolean(found) => write!(
				f,
				"Impossible d'utiliser l'opérateur \"!\" sur une valeur qui n'est pas un booléen (vrai / faux) ({found})"
			),
			NumbersRequired { operation, found } => write!(f, "Seuls des nombres peuvent être {operation} ({found})"),
			AddToNumber(found) => write!(f, "Un nombre doit être ajouté à un autre nombre ({found})"),
			AddToString(found) => {
				write!(f, "Une chaîne de caractères doit être ajoutée à une autre chaîne ({found})")
			}
			AddUnsupported(found) => write!(f, "Impossible d'additionner ces types ensemble ({found})"),
			ConditionNotBoolean(found) => write!(f, "Un booléen doit être utilisé pour une condition ({found})"),
			LogicalLeftNotBoolean { operator, found } => {
				write!(f, "L'expression à gauche d'un {operator} doit être un booléen ({found})")
			}
			LogicalRightNotBoolean { operator, found } => {
				write!(f, "L'expression à droite d'un {operator} doit être un booléen ({found})")
			}
			LoopBoundNotNumber { bound: Bound::Start, found } => {
				write!(f, "La valeur de départ de la boucle doit être un nombre ({found})")
			}
			LoopBoundNotNumber { bound: Bound::End, found } => {
				write!(f, "La valeur de fin de la boucle doit être un nombre ({found})")
			}
			UndefinedVariable(name) => write!(f, "La variable {name} n'existe pas"),
			Redeclaration(name) => write!(f, "Impossible de redéclarer la variable {name}"),
			ReadOnly(name) => write!(f, "{name} fait partie de la bibliothèque et ne peut pas être modifié"),
			NotCallable(found) => write!(f, "La valeur n'est pas une fonction ({found})"),
			ArityMismatch { expected, received } => {
				write!(f, "La fonction attend {expected} paramètre(s) ({received} obtenu(s))")
			}
			NotAnArray(found) => write!(f, "Impossible d'utiliser cet élément comme un tableau ({found})"),
			IndexNotNumber(found) => write!(f, "L'index d'un tableau doit être un nombre ({found})"),
			IndexNotInteger(index) => {
				write!(f, "L'index d'un tableau doit être un nombre entier (valeur obtenue: {index})")
			}
			NegativeIndex(index) => {
				write!(f, "L'index d'un tableau ne peut pas être négatif (valeur obtenue: {index})")
			}
			IndexOutOfBounds { index, length } => {
				write!(f, "L'index est supérieur à la taille du tableau (index: {index}, taille: {length})")
			}
			InfiniteLoop => write!(f, "Boucle infinie, la condition de cette boucle ne devient jamais fausse"),
			CallDepthExceeded(limit) => {
				write!(f, "Trop d'appels de fonction imbriqués (limite: {limit}), la récursion ne s'arrête jamais ?")
			}
			Native { function, message } => write!(f, "{function}: {message}"),
		}
	}
}

/// Failure raised by a library function, positioned later by the caller.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct NativeError(pub String);
