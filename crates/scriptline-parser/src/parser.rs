//! Line-driven parser for scriptline.

use crate::action::Action;
use scriptline_lexer::{Lexer, LexerError};
use thiserror::Error;

/// Errors that can occur during parsing. Every variant carries the 1-indexed
/// line number and the text that could not be handled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Cannot find action in line {line}: '{text}'")]
    MissingAction { line: usize, text: String },

    #[error("Invalid number '{literal}' in line {line}: '{text}'")]
    InvalidNumber {
        literal: String,
        line: usize,
        text: String,
    },

    #[error("Invalid escape sequence \\{ch} in line {line}: '{text}'")]
    InvalidEscape { ch: char, line: usize, text: String },

    #[error("Unterminated string literal in line {line}: '{text}'")]
    UnterminatedString { line: usize, text: String },

    #[error("Unknown token in line {line}: '{text}'")]
    UnrecognizedToken { line: usize, text: String },
}

impl ParseError {
    /// Attach line context to a recognizer error.
    pub fn from_lexer(err: LexerError, line: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        match err {
            LexerError::InvalidNumber { literal } => Self::InvalidNumber {
                literal,
                line,
                text,
            },
            LexerError::InvalidEscape { ch } => Self::InvalidEscape { ch, line, text },
            LexerError::UnterminatedString => Self::UnterminatedString { line, text },
        }
    }

    /// Returns the 1-indexed line number the error occurred on.
    pub fn line_number(&self) -> usize {
        match self {
            Self::MissingAction { line, .. }
            | Self::InvalidNumber { line, .. }
            | Self::InvalidEscape { line, .. }
            | Self::UnterminatedString { line, .. }
            | Self::UnrecognizedToken { line, .. } => *line,
        }
    }

    /// The offending line text, or the remainder of it for token errors.
    pub fn text(&self) -> &str {
        match self {
            Self::MissingAction { text, .. }
            | Self::InvalidNumber { text, .. }
            | Self::InvalidEscape { text, .. }
            | Self::UnterminatedString { text, .. }
            | Self::UnrecognizedToken { text, .. } => text,
        }
    }
}

/// Stateless scriptline parser.
///
/// Holds no per-call state, so a single instance (see [`DEFAULT_PARSER`])
/// can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parser;

/// The default parser instance.
pub const DEFAULT_PARSER: Parser = Parser::new();

impl Parser {
    pub const fn new() -> Self {
        Parser
    }

    /// Parse newline-delimited source into one [`Action`] per non-blank line.
    ///
    /// The first error aborts the whole parse.
    pub fn parse(&self, input: &str) -> Result<Vec<Action>, ParseError> {
        let mut actions = Vec::new();
        for (idx, raw_line) in input.split('\n').enumerate() {
            let line = idx + 1;
            match self.parse_line(raw_line, line) {
                Ok(Some(action)) => actions.push(action),
                Ok(None) => {}
                Err(err) => {
                    tracing::debug!(line, error = %err, "aborting parse");
                    return Err(err);
                }
            }
        }
        Ok(actions)
    }

    /// Parse a single raw line. Blank lines yield `Ok(None)`.
    fn parse_line(&self, raw_line: &str, line: usize) -> Result<Option<Action>, ParseError> {
        let mut lexer = Lexer::new(raw_line);
        lexer.skip_whitespace();
        if lexer.is_at_end() {
            return Ok(None);
        }

        let name = lexer
            .read_identifier()
            .ok_or_else(|| ParseError::MissingAction {
                line,
                text: raw_line.to_string(),
            })?;

        let mut args = Vec::new();
        loop {
            lexer.skip_whitespace();
            if lexer.is_at_end() {
                break;
            }
            let rest = lexer.remaining();
            match lexer.next_token() {
                Ok(Some(tok)) => args.push(tok),
                Ok(None) => {
                    return Err(ParseError::UnrecognizedToken {
                        line,
                        text: rest.to_string(),
                    });
                }
                Err(err) => {
                    if let LexerError::InvalidNumber { literal } = &err {
                        tracing::debug!(line, literal = %literal, "error parsing number");
                    }
                    return Err(ParseError::from_lexer(err, line, rest));
                }
            }
        }

        tracing::trace!(line, action = name, args = args.len(), "parsed action");
        Ok(Some(Action::new(name, args, line)))
    }
}

/// Parse source with the [`DEFAULT_PARSER`].
pub fn parse(input: &str) -> Result<Vec<Action>, ParseError> {
    DEFAULT_PARSER.parse(input)
}
