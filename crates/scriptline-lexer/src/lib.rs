//! scriptline lexer - tokens and recognizers for the scriptline notation.
//!
//! This crate provides the [`Token`] type and the [`Lexer`] that classifies
//! the argument text of a single line.
//!
//! # Example
//!
//! ```
//! use scriptline_lexer::{Lexer, Token};
//!
//! let mut lexer = Lexer::new("a =-1");
//! assert_eq!(lexer.next_token().unwrap(), Some(Token::identifier("a")));
//! assert_eq!(lexer.next_token().unwrap(), Some(Token::operator("=-")));
//! assert_eq!(lexer.next_token().unwrap(), Some(Token::number(1.0)));
//! assert_eq!(lexer.next_token().unwrap(), None);
//! ```

pub mod lexer;
pub mod token;

pub use lexer::{Lexer, LexerError};
pub use token::{Token, TokenError, TokenKind, Value};
