//! scriptline parser - turns newline-delimited source into actions.
//!
//! Each non-blank line becomes an [`Action`]: the leading identifier is the
//! action name and the rest of the line is classified into argument tokens.

pub mod action;
pub mod parser;

pub use action::Action;
pub use parser::{parse, ParseError, Parser, DEFAULT_PARSER};
