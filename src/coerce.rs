//! Scalar to text coercion.
//!
//! Coercion yields the text form of a scalar together with a flag telling
//! the caller whether that text still has to be quoted. Only strings need
//! quoting; `NULL`, numbers and booleans are valid SQL as they are.

use crate::{Error, Number, Result, Value};
use std::borrow::Cow;

/// Converts a scalar into `(text, needs_quoting)`.
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] for arrays, objects and non-finite
/// numbers.
///
/// # Examples
///
/// ```rust
/// use pg_escape::{coerce, Value};
/// use std::borrow::Cow;
///
/// assert_eq!(coerce(&Value::Null).unwrap(), (Cow::from("NULL"), false));
/// assert_eq!(coerce(&Value::from("x")).unwrap(), (Cow::from("x"), true));
/// assert_eq!(coerce(&Value::from(15)).unwrap(), (Cow::from("15"), false));
/// assert_eq!(coerce(&Value::from(true)).unwrap(), (Cow::from("TRUE"), false));
/// assert!(coerce(&Value::Array(vec![])).is_err());
/// ```
pub fn coerce(value: &Value) -> Result<(Cow<'_, str>, bool)> {
    match value {
        Value::Null => Ok((Cow::Borrowed("NULL"), false)),
        Value::String(s) => Ok((Cow::Borrowed(s.as_str()), true)),
        Value::Number(n) => Ok((Cow::Owned(number_text(n)?), false)),
        Value::Bool(true) => Ok((Cow::Borrowed("TRUE"), false)),
        Value::Bool(false) => Ok((Cow::Borrowed("FALSE"), false)),
        Value::Array(_) | Value::Object(_) => Err(Error::unsupported_type(value.type_name())),
    }
}

fn number_text(n: &Number) -> Result<String> {
    if !n.is_finite() {
        return Err(Error::unsupported_type("non-finite number"));
    }
    // -0 prints as plain 0
    if !n.is_integer() && n.as_f64() == 0.0 {
        return Ok("0".to_string());
    }
    Ok(n.to_string())
}
