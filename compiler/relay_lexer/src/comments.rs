//! Block comment removal.
//!
//! Runs before tokenizing. Each `/* ... */` block collapses to a single
//! space so tokens on either side stay separated; everything else is
//! copied through untouched.

use memchr::memmem;

const OPEN: &str = "/*";
const CLOSE: &str = "*/";

/// Strip every `/* ... */` comment from `script`.
///
/// An unterminated `/*` is not a comment and is left in place, so the
/// tokenizer reports it.
pub fn remove_comments(script: &str) -> String {
    let bytes = script.as_bytes();
    let mut out = String::with_capacity(script.len());
    let mut pos = 0;

    while let Some(start) = memmem::find(&bytes[pos..], OPEN.as_bytes()) {
        let start = pos + start;
        let body = start + OPEN.len();
        let Some(end) = memmem::find(&bytes[body..], CLOSE.as_bytes()) else {
            break;
        };
        out.push_str(&script[pos..start]);
        out.push(' ');
        pos = body + end + CLOSE.len();
    }

    out.push_str(&script[pos..]);
    out
}

#[cfg(test)]
mod tests;
