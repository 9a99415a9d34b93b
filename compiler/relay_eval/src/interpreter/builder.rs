//! `InterpreterBuilder` for configuring an [`Interpreter`] before a run.

use super::Interpreter;
use crate::environment::Environment;
use crate::functions::FunctionRegistry;

/// Builder for [`Interpreter`] instances.
///
/// The host functions are required; everything else has a default.
pub struct InterpreterBuilder<'r, 'f> {
    functions: &'r mut FunctionRegistry<'f>,
    env: Option<Environment>,
    loop_limit: Option<u64>,
}

impl<'r, 'f> InterpreterBuilder<'r, 'f> {
    pub fn new(functions: &'r mut FunctionRegistry<'f>) -> Self {
        Self {
            functions,
            env: None,
            loop_limit: None,
        }
    }

    /// Start from an existing environment instead of an empty one.
    ///
    /// Lets a host keep variables across several scripts.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Fail any single `while` or `for` loop that runs more than `limit`
    /// iterations.
    #[must_use]
    pub fn loop_limit(mut self, limit: u64) -> Self {
        self.loop_limit = Some(limit);
        self
    }

    pub fn build(self) -> Interpreter<'r, 'f> {
        Interpreter {
            env: self.env.unwrap_or_default(),
            functions: self.functions,
            loop_limit: self.loop_limit,
        }
    }
}
