//! Character-class recognizers for a single scriptline line.
//!
//! A [`Lexer`] walks the remainder of one line. Each `read_*` recognizer
//! either consumes a non-empty prefix and yields its result, or declines and
//! leaves the position untouched. [`Lexer::next_token`] tries them in a fixed
//! priority order; the first to consume anything wins.

use crate::token::Token;
use thiserror::Error;

/// Errors that can occur while recognizing a token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("Invalid number literal: {literal}")]
    InvalidNumber { literal: String },

    #[error("Invalid escape sequence: \\{ch}")]
    InvalidEscape { ch: char },

    #[error("Unterminated string literal")]
    UnterminatedString,
}

/// Cursor over the remaining text of one line.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    /// Byte offset into `input`. Every recognized character set is ASCII,
    /// so this always lands on a char boundary.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer over a single line of input.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// The unconsumed part of the line.
    pub fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Skip whitespace (spaces and tabs only).
    pub fn skip_whitespace(&mut self) {
        self.position += self.run_length(is_whitespace);
    }

    /// Length in bytes of the maximal run of `pred` at the current position.
    fn run_length(&self, pred: fn(u8) -> bool) -> usize {
        self.remaining().bytes().take_while(|b| pred(*b)).count()
    }

    /// Consume `len` bytes and return them.
    fn take(&mut self, len: usize) -> &'a str {
        let s = &self.input[self.position..self.position + len];
        self.position += len;
        s
    }

    /// Read a maximal run of identifier characters.
    pub fn read_identifier(&mut self) -> Option<&'a str> {
        let len = self.run_length(is_identifier_char);
        if len == 0 {
            return None;
        }
        Some(self.take(len))
    }

    /// Read `true` or `false`. The whole identifier run has to match, so
    /// `falsey` is declined.
    pub fn read_boolean(&mut self) -> Option<Token> {
        let len = self.run_length(is_identifier_char);
        let b = match &self.remaining()[..len] {
            "true" => true,
            "false" => false,
            _ => return None,
        };
        self.position += len;
        Some(Token::boolean(b))
    }

    /// Read a number from a maximal run of digits, `.` and `-`.
    ///
    /// A non-empty run that is not a valid finite `f32` is an error rather
    /// than a decline.
    pub fn read_number(&mut self) -> Result<Option<Token>, LexerError> {
        let len = self.run_length(is_number_char);
        if len == 0 {
            return Ok(None);
        }
        let literal = &self.remaining()[..len];
        match literal.parse::<f32>() {
            Ok(n) if n.is_finite() => {
                self.position += len;
                Ok(Some(Token::number(n)))
            }
            _ => Err(LexerError::InvalidNumber {
                literal: literal.to_string(),
            }),
        }
    }

    /// Read a quoted string literal, resolving `\<quote>`, `\n` and `\t`.
    pub fn read_string(&mut self) -> Result<Option<Token>, LexerError> {
        let mut chars = self.remaining().char_indices();
        let quote = match chars.next() {
            Some((_, ch)) if is_quote(ch) => ch,
            _ => return Ok(None),
        };

        let mut buf = String::new();
        while let Some((i, ch)) = chars.next() {
            if ch == quote {
                self.position += i + ch.len_utf8();
                return Ok(Some(Token::string(buf)));
            }
            if ch != '\\' {
                buf.push(ch);
                continue;
            }
            match chars.next() {
                Some((_, esc)) if esc == quote => buf.push(esc),
                Some((_, 'n')) => buf.push('\n'),
                Some((_, 't')) => buf.push('\t'),
                Some((_, esc)) => return Err(LexerError::InvalidEscape { ch: esc }),
                None => break,
            }
        }

        Err(LexerError::UnterminatedString)
    }

    /// Read a maximal run of operator characters, kept verbatim.
    pub fn read_operator(&mut self) -> Option<Token> {
        let len = self.run_length(is_operator_char);
        if len == 0 {
            return None;
        }
        Some(Token::operator(self.take(len)))
    }

    /// Get the next argument token.
    ///
    /// Returns `Ok(None)` at the end of the line, or when no recognizer
    /// accepts the remaining text; [`Lexer::is_at_end`] tells the two apart.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexerError> {
        self.skip_whitespace();
        if self.is_at_end() {
            return Ok(None);
        }

        if let Some(tok) = self.read_boolean() {
            return Ok(Some(tok));
        }
        if let Some(tok) = self.read_number()? {
            return Ok(Some(tok));
        }
        if let Some(ident) = self.read_identifier() {
            return Ok(Some(Token::identifier(ident)));
        }
        if let Some(tok) = self.read_string()? {
            return Ok(Some(tok));
        }
        Ok(self.read_operator())
    }
}

fn is_whitespace(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

fn is_identifier_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_number_char(b: u8) -> bool {
    b.is_ascii_digit() || b == b'.' || b == b'-'
}

fn is_operator_char(b: u8) -> bool {
    matches!(b, b'=' | b'+' | b'-' | b'*' | b'/')
}

fn is_quote(ch: char) -> bool {
    ch == '"' || ch == '\''
}
