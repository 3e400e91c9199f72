//! # pg_escape
//!
//! Injection-safe escaping of SQL identifiers and literals, plus a
//! `printf`-style formatter that assembles statements from escaped
//! fragments.
//!
//! ## Quoting Conventions
//!
//! - **Identifiers** are double-quoted when they are not plain
//!   `[A-Za-z_][A-Za-z0-9_$]*` words or when they spell a reserved keyword.
//!   Embedded `"` is doubled.
//! - **String literals** are single-quoted with `'` and `\` doubled. A
//!   literal containing a backslash gets the `E` prefix.
//! - **Long strings** (1000 characters or more by default) are
//!   dollar-quoted with a random tag that does not occur in the text.
//! - **Arrays** become `ARRAY[...]` constructors and **objects** are
//!   stringified to JSON and quoted as text.
//!
//! ## Quick Start
//!
//! ```rust
//! use pg_escape::{format, Value};
//!
//! let sql = format(
//!     "INSERT INTO %I (name, tags) VALUES (%L, %L)",
//!     &[
//!         Value::from("users"),
//!         Value::from("O'Reilly"),
//!         Value::from(vec!["a", "b"]),
//!     ],
//! )
//! .unwrap();
//! assert_eq!(sql, "INSERT INTO users (name, tags) VALUES ('O''Reilly', ARRAY['a', 'b'])");
//! ```
//!
//! ### The sql_format! Macro
//!
//! ```rust
//! use pg_escape::sql_format;
//!
//! let sql = sql_format!("DROP TABLE %I", "my table").unwrap();
//! assert_eq!(sql, "DROP TABLE \"my table\"");
//! ```
//!
//! ### Directives
//!
//! | directive | argument rendered as                              |
//! |-----------|---------------------------------------------------|
//! | `%s`      | plain text (numbers, booleans, strings)           |
//! | `%I`      | identifier                                        |
//! | `%L`      | literal                                           |
//! | `%Q`      | dollar-quoted string                              |
//! | `%J`      | JSON text as a literal                            |
//! | `%%`      | a `%` sign                                        |
//!
//! ## Keyword Tables
//!
//! The crate-level functions use [`ReservedWords::global`], built once
//! from an embedded PostgreSQL keyword list. A [`Formatter`] can be given
//! any other table, e.g. one loaded with [`ReservedWords::from_path`].
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code
//! - Every invalid input is an error, never a silently degraded rendering
//! - No panics in the public API

pub mod coerce;
pub mod error;
pub mod formatter;
mod literal;
pub mod macros;
pub mod map;
pub mod options;
pub mod quote;
pub mod reserved;
pub mod template;
pub mod value;

pub use coerce::coerce;
pub use error::{Error, Result, Specifier};
pub use formatter::Formatter;
pub use map::ValueMap;
pub use options::{FormatOptions, DEFAULT_DOLLAR_QUOTE_THRESHOLD};
pub use reserved::ReservedWords;
pub use value::{Number, Value};

use serde::Serialize;

/// Substitutes `args` into a query template.
///
/// # Examples
///
/// ```rust
/// use pg_escape::{format, Value};
///
/// assert_eq!(format("just %% a %s", &[Value::from("test")]).unwrap(), "just % a test");
/// assert_eq!(format("some %I", &[Value::from("foo/bar/baz")]).unwrap(), "some \"foo/bar/baz\"");
/// ```
///
/// # Errors
///
/// See [`Formatter::format`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format(template: &str, args: &[Value]) -> Result<String> {
    Formatter::new().format(template, args)
}

/// Formats with a template supplied as a value.
///
/// # Errors
///
/// See [`Formatter::format_value`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_value<'v>(template: impl Into<Option<&'v Value>>, args: &[Value]) -> Result<String> {
    Formatter::new().format_value(template, args)
}

/// Returns the unquoted text form of a scalar.
///
/// # Examples
///
/// ```rust
/// use pg_escape::{string, Value};
///
/// assert_eq!(string(&Value::from(0)).unwrap(), "0");
/// assert_eq!(string(&Value::from("something")).unwrap(), "something");
/// assert!(string(None).is_err());
/// ```
///
/// # Errors
///
/// See [`Formatter::string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn string<'v>(value: impl Into<Option<&'v Value>>) -> Result<String> {
    Formatter::new().string(value)
}

/// Renders an identifier, quoting only when needed.
///
/// # Examples
///
/// ```rust
/// use pg_escape::{ident, Value};
///
/// assert_eq!(ident(&Value::from("foo")).unwrap(), "foo");
/// assert_eq!(ident(&Value::from("join")).unwrap(), "\"join\"");
/// ```
///
/// # Errors
///
/// See [`Formatter::ident`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn ident<'v>(value: impl Into<Option<&'v Value>>) -> Result<String> {
    Formatter::new().ident(value)
}

/// Renders any value as a literal.
///
/// # Examples
///
/// ```rust
/// use pg_escape::{literal, Value};
///
/// assert_eq!(literal(&Value::Null).unwrap(), "NULL");
/// assert_eq!(literal(&Value::from(r"\whoop\")).unwrap(), r"E'\\whoop\\'");
/// ```
///
/// # Errors
///
/// See [`Formatter::literal`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn literal<'v>(value: impl Into<Option<&'v Value>>) -> Result<String> {
    Formatter::new().literal(value)
}

/// Renders a string as a single-quoted literal.
///
/// # Errors
///
/// See [`Formatter::quote_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn quote_string<'v>(value: impl Into<Option<&'v Value>>) -> Result<String> {
    Formatter::new().quote_string(value)
}

/// Renders a string as a dollar-quoted literal.
///
/// # Errors
///
/// See [`Formatter::dollar_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn dollar_string<'v>(value: impl Into<Option<&'v Value>>) -> Result<String> {
    Formatter::new().dollar_string(value)
}

/// Converts any `T: Serialize` into a [`Value`].
///
/// # Examples
///
/// ```rust
/// use pg_escape::{literal, to_value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Filter { name: String, limit: u32 }
///
/// let value = to_value(&Filter { name: "x".to_string(), limit: 10 }).unwrap();
/// assert_eq!(literal(&value).unwrap(), r#"'{"name":"x","limit":10}'"#);
/// ```
///
/// # Errors
///
/// Returns [`Error::Json`] if the value cannot be represented as JSON
/// (for instance a map with non-string keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    let json = serde_json::to_value(value)?;
    Ok(serde_json::from_value(json)?)
}
