//! Relay Parse - construct extraction over flat token streams.
//!
//! There is no syntax tree. [`BlockParser`] finds the condition, body and
//! `else` slices of one construct at a time, and reports how many tokens
//! the construct spans so the interpreter can step past it.

mod blocks;
mod error;

pub use blocks::{split_arguments, split_for_clauses, Block, BlockParser, ForClauses, Region};
pub use error::{Construct, ParseError};
