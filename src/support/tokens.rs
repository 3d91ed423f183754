//! Reading values from the plain-text thermo format.
//!
//! The text format is a flat, whitespace-separated sequence of numeric fields
//! in a fixed order. Each type that can be read from it implements
//! [`FromTokens`], consuming exactly the fields it owns from a shared token
//! iterator so that composite types can read their parts in sequence.
//!
//! Writing is the inverse and goes through [`std::fmt::Display`].

use thiserror::Error;

/// Errors that occur while reading fields from a token stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The stream ended before the field was read.
    #[error("missing field `{field}`")]
    Missing { field: &'static str },

    /// The token for the field is not a finite number.
    #[error("field `{field}` is not a finite number: {token:?}")]
    NotANumber { field: &'static str, token: String },

    /// Tokens remain after a complete value was read.
    #[error("unexpected trailing token: {token:?}")]
    Trailing { token: String },
}

/// Types that can be read from a whitespace token stream.
pub trait FromTokens: Sized {
    type Error: From<TokenError>;

    /// Reads `Self` from the front of `tokens`, leaving the rest unread.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if a field is missing or malformed.
    fn from_tokens<'a, I>(tokens: &mut I) -> Result<Self, Self::Error>
    where
        I: Iterator<Item = &'a str>;
}

/// Reads the next token as a finite `f64`.
///
/// # Errors
///
/// Returns [`TokenError::Missing`] if the stream is exhausted and
/// [`TokenError::NotANumber`] if the token does not parse to a finite value.
pub fn next_scalar<'a, I>(tokens: &mut I, field: &'static str) -> Result<f64, TokenError>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens.next().ok_or(TokenError::Missing { field })?;
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(TokenError::NotANumber {
            field,
            token: token.to_owned(),
        }),
    }
}

/// Reads a complete `T` from `text`, rejecting any leftover tokens.
///
/// # Errors
///
/// Returns `T::Error` if reading fails or trailing tokens remain.
pub fn parse_all<T: FromTokens>(text: &str) -> Result<T, T::Error> {
    let mut tokens = text.split_whitespace();
    let value = T::from_tokens(&mut tokens)?;

    match tokens.next() {
        Some(token) => Err(TokenError::Trailing {
            token: token.to_owned(),
        }
        .into()),
        None => Ok(value),
    }
}
