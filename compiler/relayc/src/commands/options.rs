//! Options for `relay run`.

use relay_eval::Value;

/// Interpreter settings taken from the command line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunOptions {
    /// Per-loop iteration budget (`--max-iterations=N`).
    pub max_iterations: Option<u64>,
    /// Variables bound before the script starts (`--set name=literal`).
    pub defines: Vec<(String, Value)>,
}

/// A parsed `relay run` invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct RunArgs {
    pub path: String,
    pub options: RunOptions,
}

/// Parse the arguments following `relay run`.
pub fn parse_run_args(args: &[String]) -> Result<RunArgs, String> {
    let mut path = None;
    let mut options = RunOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(n) = arg.strip_prefix("--max-iterations=") {
            let limit = n
                .parse()
                .map_err(|_| format!("invalid iteration limit '{n}'"))?;
            options.max_iterations = Some(limit);
        } else if arg == "--set" {
            let binding = iter
                .next()
                .ok_or_else(|| "--set requires name=literal".to_string())?;
            options.defines.push(parse_binding(binding)?);
        } else if let Some(binding) = arg.strip_prefix("--set=") {
            options.defines.push(parse_binding(binding)?);
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }

    let path = path.ok_or_else(|| "missing file path".to_string())?;
    Ok(RunArgs { path, options })
}

/// `name=literal`, where the literal uses script syntax (`14`, `2.5`,
/// `'on'`, `true`).
fn parse_binding(binding: &str) -> Result<(String, Value), String> {
    let (name, literal) = binding
        .split_once('=')
        .ok_or_else(|| format!("expected name=literal, found '{binding}'"))?;

    let valid_name = name.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid_name {
        return Err(format!("invalid variable name '{name}'"));
    }

    let value = Value::parse_literal(literal)
        .ok_or_else(|| format!("'{literal}' is not a single literal"))?;
    Ok((name.to_string(), value))
}
