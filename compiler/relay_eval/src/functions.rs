//! Host functions callable from scripts.
//!
//! Scripts have no way to define functions. Every call (`name()` or
//! `name(args)`) is dispatched by name to a closure the host registered
//! here. Return values are not observable from scripts.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::errors::EvalError;
use crate::value::Value;

type HostFunction<'f> = Box<dyn FnMut(&[Value]) + 'f>;

/// Name to closure table consulted by the interpreter on every call.
#[derive(Default)]
pub struct FunctionRegistry<'f> {
    functions: FxHashMap<String, HostFunction<'f>>,
}

impl<'f> FunctionRegistry<'f> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `function` callable as `name`, replacing any earlier entry.
    pub fn register(&mut self, name: impl Into<String>, function: impl FnMut(&[Value]) + 'f) {
        self.functions.insert(name.into(), Box::new(function));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Invoke `name` with `args` in call order.
    pub fn call(&mut self, name: &str, args: &[Value]) -> Result<(), EvalError> {
        let function = self
            .functions
            .get_mut(name)
            .ok_or_else(|| EvalError::UnknownFunction {
                name: name.to_owned(),
            })?;
        function(args);
        Ok(())
    }
}

impl fmt::Debug for FunctionRegistry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("FunctionRegistry")
            .field("functions", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn calls_reach_the_registered_closure() {
        let mut calls = Vec::new();
        {
            let mut registry = FunctionRegistry::new();
            registry.register("move", |args: &[Value]| calls.push(args.to_vec()));
            assert!(registry.contains("move"));

            assert_eq!(registry.call("move", &[Value::Int(1), Value::from("left")]), Ok(()));
            assert_eq!(registry.call("move", &[]), Ok(()));
        }
        assert_eq!(calls, [vec![Value::Int(1), Value::from("left")], vec![]]);
    }

    #[test]
    fn unknown_function() {
        let mut registry = FunctionRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(
            registry.call("launch", &[]),
            Err(EvalError::UnknownFunction {
                name: "launch".to_string()
            })
        );
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let mut hits = (0, 0);
        {
            let mut registry = FunctionRegistry::new();
            registry.register("tick", |_: &[Value]| hits.0 += 1);
            registry.register("tick", |_: &[Value]| hits.1 += 1);
            assert_eq!(registry.len(), 1);
            assert_eq!(registry.call("tick", &[]), Ok(()));
        }
        assert_eq!(hits, (0, 1));
    }

    #[test]
    fn debug_lists_names() {
        let mut registry = FunctionRegistry::new();
        registry.register("stop", |_: &[Value]| {});
        registry.register("go", |_: &[Value]| {});
        assert_eq!(
            format!("{registry:?}"),
            r#"FunctionRegistry { functions: ["go", "stop"] }"#
        );
    }
}
