//! Library functions, bound under their French and English names.

use std::rc::Rc;

use crate::{
	environment::Memory,
	error::interpreter::NativeError,
	interpreter::{callable::CallableValue, value::Value},
	output::Output,
};

/// The scope every session chains its user scope onto.
pub(crate) fn library() -> Memory {
	let mut memory = Memory::new(None);
	define(&mut memory, &["ecrire", "write"], 1, Box::new(write));
	define(&mut memory, &["arrondir", "round"], 1, Box::new(round));
	define(&mut memory, &["taille", "length"], 1, Box::new(length));
	memory.seal();
	memory
}

/// One function value shared by all its `names`, the first one is displayed.
fn define(
	memory: &mut Memory,
	names: &[&'static str],
	arity: usize,
	body: Box<dyn Fn(&mut dyn Output, &[Value]) -> Result<Value, NativeError>>,
) {
	let callable = Rc::new(CallableValue::new_native(names[0], arity, body));
	for name in names {
		memory.define_native(name, Value::Callable(callable.clone()));
	}
}

fn write(output: &mut dyn Output, arguments: &[Value]) -> Result<Value, NativeError> {
	let line = arguments.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
	output.push(line);
	Ok(Value::Void)
}

fn round(_: &mut dyn Output, arguments: &[Value]) -> Result<Value, NativeError> {
	match arguments {
		[Value::Number(n)] => Ok(Value::Number(n.round())),
		[other] => Err(NativeError(format!("un nombre est attendu ({})", other.type_name()))),
		_ => Err(NativeError(format!("1 paramètre attendu ({} obtenu(s))", arguments.len()))),
	}
}

fn length(_: &mut dyn Output, arguments: &[Value]) -> Result<Value, NativeError> {
	match arguments {
		[Value::Array(elements)] => Ok(Value::Number(elements.len() as f64)),
		[Value::Str(s)] => Ok(Value::Number(s.chars().count() as f64)),
		[other] => Err(NativeError(format!("un tableau ou une chaîne est attendu ({})", other.type_name()))),
		_ => Err(NativeError(format!("1 paramètre attendu ({} obtenu(s))", arguments.len()))),
	}
}
