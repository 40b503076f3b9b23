//! scriptline - a line-oriented lexer for a minimal action notation.
//!
//! Every non-blank line of a script is an action name followed by typed
//! argument tokens. There is no grammar beyond that: interpreting the actions
//! is left to the caller.
//!
//! # Example
//!
//! ```
//! use scriptline::{parse, Token};
//!
//! let actions = parse("let a = 1\nprint a").unwrap();
//! assert_eq!(actions[0].name(), "let");
//! assert_eq!(actions[0].args()[2], Token::number(1.0));
//! assert_eq!(actions[1].to_string(), "print <i a>");
//! ```

pub use scriptline_lexer as lexer;
pub use scriptline_parser as parser;

// Re-export commonly used types
pub use scriptline_lexer::{Lexer, LexerError, Token, TokenError, TokenKind, Value};
pub use scriptline_parser::{parse, Action, ParseError, Parser, DEFAULT_PARSER};
