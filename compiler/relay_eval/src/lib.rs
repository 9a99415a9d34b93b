//! Relay Eval - interpreter for Relay behaviour scripts.
//!
//! Scripts are interpreted straight from their token stream; no syntax
//! tree is built. The pieces:
//!
//! - [`Environment`]: nested variable scopes, addressed by [`ScopeId`]
//! - [`condition::evaluate`]: `==`/`<`/`>` comparisons folded with `&&`/`||`
//! - [`Interpreter`]: the instruction-pointer dispatch loop
//! - [`FunctionRegistry`]: host closures that scripts call by name
//!
//! [`execute`] runs a script from source text in one call.

pub mod condition;
mod environment;
pub mod errors;
mod functions;
pub mod interpreter;
pub mod operators;
mod stack;
mod value;

use relay_lexer::{remove_comments, tokenize};

pub use environment::{Environment, ScopeId};
pub use errors::{ErrorKind, EvalError, EvalResult};
pub use functions::FunctionRegistry;
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use value::Value;

/// Strip comments from `source`, tokenize it and run it in a fresh
/// environment.
///
/// Returns the final environment so the host can inspect top-level
/// variables.
pub fn execute(source: &str, functions: &mut FunctionRegistry<'_>) -> Result<Environment, EvalError> {
    let script = remove_comments(source);
    let tokens = tokenize(&script)?;
    tracing::debug!(tokens = tokens.len(), "script tokenized");

    let mut interpreter = Interpreter::new(functions);
    interpreter.execute(&tokens)?;
    Ok(interpreter.into_environment())
}
