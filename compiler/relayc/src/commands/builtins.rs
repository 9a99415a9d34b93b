//! Host functions available to every script run from the command line.

use std::io::Write;
use std::time::Duration;

use relay_eval::{FunctionRegistry, Value};

/// Register `print` and `sleep`.
///
/// `print(args...)` writes its arguments space-separated on one line to
/// `output`. `sleep(ms)` blocks the script for `ms` milliseconds.
pub fn register_builtins<'f>(functions: &mut FunctionRegistry<'f>, mut output: impl Write + 'f) {
    functions.register("print", move |args: &[Value]| {
        if let Err(e) = writeln!(output, "{}", format_print(args)) {
            tracing::warn!(error = %e, "print failed");
        }
    });

    functions.register("sleep", |args: &[Value]| match args {
        [Value::Int(ms)] if *ms >= 0 => {
            std::thread::sleep(Duration::from_millis(ms.unsigned_abs()));
        }
        _ => tracing::warn!(
            args = args.len(),
            "sleep expects one non-negative integer, ignoring call"
        ),
    });
}

/// The line `print` writes for `args`.
pub fn format_print(args: &[Value]) -> String {
    let parts: Vec<String> = args.iter().map(ToString::to_string).collect();
    parts.join(" ")
}
