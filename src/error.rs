//! Error types for escaping and query formatting.
//!
//! Every invalid input is a hard failure. Nothing in this crate falls back
//! to a "best effort" rendering, because a partially escaped fragment is
//! exactly what an injection needs.
//!
//! ## Error Categories
//!
//! - **Argument errors**: a value was missing, or null where null is forbidden
//! - **Type errors**: the value's variant is not accepted by the operation
//! - **Template errors**: unknown `%` directive, non-text template, or an
//!   argument count that does not match the template
//! - **Ambient errors**: I/O while loading a keyword list, JSON conversion
//!
//! ## Examples
//!
//! ```rust
//! use pg_escape::{format, Error, Value};
//!
//! let err = format("%s %s", &[Value::from("only one")]).unwrap_err();
//! assert!(matches!(err, Error::ArgumentCountMismatch { expected: 2, supplied: 1 }));
//! ```

use std::fmt;
use thiserror::Error;

/// All the ways escaping or formatting can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A value was required but not supplied
    #[error("A parameter is undefined")]
    MissingArgument,

    /// Null was supplied to an operation that forbids it
    #[error("A parameter is null but should not be")]
    NullNotAllowed,

    /// The value cannot be coerced to text
    #[error("Cannot safely coerce value of type {0} to string")]
    UnsupportedType(String),

    /// The value has the wrong type for this operation
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Unknown `%` directive in a template
    #[error("Invalid query format specifier: {0}")]
    InvalidSpecifier(Specifier),

    /// The template is not text
    #[error("Format string is invalid: expected string, found {0}")]
    InvalidTemplate(String),

    /// The template consumes a different number of arguments than supplied
    #[error("Query format expects {expected} parameter(s) but {supplied} were supplied")]
    ArgumentCountMismatch { expected: usize, supplied: usize },

    /// IO error while loading a keyword list
    #[error("IO error: {0}")]
    Io(String),

    /// JSON conversion failed
    #[error("JSON error: {0}")]
    Json(String),
}

/// The offending character of an [`Error::InvalidSpecifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specifier {
    /// `%` followed by this character
    Char(char),
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Specifier::Char(c) => write!(f, "'{}'", c.escape_debug()),
        }
    }
}

impl Error {
    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pg_escape::Error;
    ///
    /// let err = Error::type_mismatch("string", "number");
    /// assert!(err.to_string().contains("expected string"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an unsupported type error naming the rejected type.
    pub fn unsupported_type(found: &str) -> Self {
        Error::UnsupportedType(found.to_string())
    }

    /// Creates an I/O error for keyword list loading failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a JSON conversion error.
    pub fn json<T: fmt::Display>(msg: T) -> Self {
        Error::Json(msg.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::json(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
