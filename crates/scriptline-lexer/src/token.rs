//! Token types for the scriptline lexer.

use std::fmt;
use thiserror::Error;

/// The five kinds of argument token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    Identifier,
    String,
    Boolean,
    Number,
    Operator,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::Boolean => "boolean",
            TokenKind::Number => "number",
            TokenKind::Operator => "operator",
        };
        write!(f, "{}", s)
    }
}

/// Errors raised by the checked token accessors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("Not a {expected}: token is a {actual}")]
    TypeMismatch {
        expected: TokenKind,
        actual: TokenKind,
    },
}

/// Kind-erased view of a token's payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Str(&'a str),
    Bool(bool),
    Number(f32),
}

/// A single classified argument token.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Identifier(String),
    /// Decoded string contents, with escapes already resolved.
    String(String),
    Boolean(bool),
    Number(f32),
    /// Raw operator run, e.g. `=` or `=-`.
    Operator(String),
}

impl Token {
    pub fn boolean(b: bool) -> Self {
        Token::Boolean(b)
    }

    pub fn identifier(s: impl Into<String>) -> Self {
        Token::Identifier(s.into())
    }

    pub fn number(n: f32) -> Self {
        Token::Number(n)
    }

    pub fn operator(s: impl Into<String>) -> Self {
        Token::Operator(s.into())
    }

    pub fn string(s: impl Into<String>) -> Self {
        Token::String(s.into())
    }

    /// The kind of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Identifier(_) => TokenKind::Identifier,
            Token::String(_) => TokenKind::String,
            Token::Boolean(_) => TokenKind::Boolean,
            Token::Number(_) => TokenKind::Number,
            Token::Operator(_) => TokenKind::Operator,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Token::String(_))
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self, Token::Identifier(_))
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Token::Boolean(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }

    fn mismatch(&self, expected: TokenKind) -> TokenError {
        TokenError::TypeMismatch {
            expected,
            actual: self.kind(),
        }
    }

    /// Returns the string contents, or an error if this is not a string token.
    pub fn get_string(&self) -> Result<&str, TokenError> {
        match self {
            Token::String(s) => Ok(s),
            _ => Err(self.mismatch(TokenKind::String)),
        }
    }

    /// Returns the string contents, or `""` if this is not a string token.
    pub fn must_get_string(&self) -> &str {
        self.get_string().unwrap_or_default()
    }

    pub fn get_identifier(&self) -> Result<&str, TokenError> {
        match self {
            Token::Identifier(s) => Ok(s),
            _ => Err(self.mismatch(TokenKind::Identifier)),
        }
    }

    pub fn must_get_identifier(&self) -> &str {
        self.get_identifier().unwrap_or_default()
    }

    pub fn get_boolean(&self) -> Result<bool, TokenError> {
        match self {
            Token::Boolean(b) => Ok(*b),
            _ => Err(self.mismatch(TokenKind::Boolean)),
        }
    }

    pub fn must_get_boolean(&self) -> bool {
        self.get_boolean().unwrap_or_default()
    }

    pub fn get_number(&self) -> Result<f32, TokenError> {
        match self {
            Token::Number(n) => Ok(*n),
            _ => Err(self.mismatch(TokenKind::Number)),
        }
    }

    pub fn must_get_number(&self) -> f32 {
        self.get_number().unwrap_or_default()
    }

    pub fn get_operator(&self) -> Result<&str, TokenError> {
        match self {
            Token::Operator(s) => Ok(s),
            _ => Err(self.mismatch(TokenKind::Operator)),
        }
    }

    pub fn must_get_operator(&self) -> &str {
        self.get_operator().unwrap_or_default()
    }

    /// Returns the payload without its kind, for consumers that dispatch
    /// on the `is_*` predicates themselves.
    pub fn value(&self) -> Value<'_> {
        match self {
            Token::Identifier(s) | Token::String(s) | Token::Operator(s) => Value::Str(s),
            Token::Boolean(b) => Value::Bool(*b),
            Token::Number(n) => Value::Number(*n),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier(s) => write!(f, "<i {}>", s),
            Token::String(s) => write!(f, "<s {}>", s),
            Token::Boolean(b) => write!(f, "<f {}>", b),
            Token::Number(n) => write!(f, "<n {:.6}>", n),
            Token::Operator(s) => write!(f, "<o {}>", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_predicates() {
        let tok = Token::identifier("foo");
        assert!(tok.is_identifier());
        assert!(!tok.is_string());
        assert!(!tok.is_boolean());
        assert!(!tok.is_number());
        assert!(!tok.is_operator());
        assert_eq!(tok.kind(), TokenKind::Identifier);

        assert!(Token::string("x").is_string());
        assert!(Token::boolean(true).is_boolean());
        assert!(Token::number(1.0).is_number());
        assert!(Token::operator("+").is_operator());
    }

    #[test]
    fn test_checked_accessors() {
        assert_eq!(Token::string("hello").get_string(), Ok("hello"));
        assert_eq!(Token::identifier("a").get_identifier(), Ok("a"));
        assert_eq!(Token::boolean(true).get_boolean(), Ok(true));
        assert_eq!(Token::number(2.5).get_number(), Ok(2.5));
        assert_eq!(Token::operator("=-").get_operator(), Ok("=-"));
    }

    #[test]
    fn test_type_mismatch() {
        let err = Token::number(1.0).get_string().unwrap_err();
        assert_eq!(
            err,
            TokenError::TypeMismatch {
                expected: TokenKind::String,
                actual: TokenKind::Number,
            }
        );
        assert_eq!(err.to_string(), "Not a string: token is a number");

        assert!(Token::string("true").get_boolean().is_err());
        assert!(Token::identifier("x").get_operator().is_err());
    }

    #[test]
    fn test_must_accessors_zero_values() {
        let tok = Token::operator("*");
        assert_eq!(tok.must_get_string(), "");
        assert_eq!(tok.must_get_identifier(), "");
        assert!(!tok.must_get_boolean());
        assert_eq!(tok.must_get_number(), 0.0);
        assert_eq!(tok.must_get_operator(), "*");

        assert!(Token::boolean(true).must_get_boolean());
        assert_eq!(Token::number(-3.0).must_get_number(), -3.0);
    }

    #[test]
    fn test_value() {
        assert_eq!(Token::identifier("a").value(), Value::Str("a"));
        assert_eq!(Token::operator("=").value(), Value::Str("="));
        assert_eq!(Token::string("s").value(), Value::Str("s"));
        assert_eq!(Token::boolean(false).value(), Value::Bool(false));
        assert_eq!(Token::number(3.5).value(), Value::Number(3.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::identifier("a").to_string(), "<i a>");
        assert_eq!(Token::string("World").to_string(), "<s World>");
        assert_eq!(Token::boolean(true).to_string(), "<f true>");
        assert_eq!(Token::boolean(false).to_string(), "<f false>");
        assert_eq!(Token::number(1.0).to_string(), "<n 1.000000>");
        assert_eq!(Token::operator("=-").to_string(), "<o =->");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TokenKind::Identifier.to_string(), "identifier");
        assert_eq!(TokenKind::Operator.to_string(), "operator");
    }
}
