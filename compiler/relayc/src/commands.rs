//! CLI command implementations.

mod builtins;
mod options;

use relay_eval::{Environment, EvalError, FunctionRegistry, InterpreterBuilder};
use relay_lexer::{remove_comments, tokenize};

pub use builtins::{format_print, register_builtins};
pub use options::{parse_run_args, RunArgs, RunOptions};

/// Read a script file, exiting with a readable message on failure.
pub fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// `relay run`: execute a script with the built-in host functions.
pub fn run_file(path: &str, options: &RunOptions) {
    let source = read_file(path);
    let mut functions = FunctionRegistry::new();
    register_builtins(&mut functions, std::io::stdout());

    if let Err(e) = run_script(&source, options, &mut functions) {
        eprintln!("error: {path}: {e}");
        std::process::exit(1);
    }
}

/// Run `source` against `functions`, applying `options`.
///
/// `--set` bindings land in the root scope before the first statement.
pub fn run_script(
    source: &str,
    options: &RunOptions,
    functions: &mut FunctionRegistry<'_>,
) -> Result<Environment, EvalError> {
    let script = remove_comments(source);
    let tokens = tokenize(&script)?;

    let mut builder = InterpreterBuilder::new(functions);
    if let Some(limit) = options.max_iterations {
        builder = builder.loop_limit(limit);
    }
    let mut interpreter = builder.build();
    for (name, value) in &options.defines {
        interpreter.define(name.as_str(), value.clone());
    }

    interpreter.execute(&tokens)?;
    Ok(interpreter.into_environment())
}

/// `relay lex`: print the token stream of a script.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    match tokenize(&remove_comments(&content)) {
        Ok(tokens) => {
            println!("Tokens for '{}' ({} tokens):", path, tokens.len());
            for token in &tokens {
                println!("  {:<20} {token}", token.describe());
            }
        }
        Err(e) => {
            eprintln!("error: {path}: {e}");
            std::process::exit(1);
        }
    }
}
