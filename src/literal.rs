//! Literal rendering.
//!
//! Dispatches over the value variants:
//!
//! - `Null` renders as `NULL`
//! - numbers and booleans render as their coerced text, unquoted
//! - strings are single-quoted, or dollar-quoted once they reach the
//!   configured length
//! - objects are stringified to JSON and rendered as a string
//! - arrays render as a PostgreSQL array constructor. The outermost level
//!   is `ARRAY[...]` and nested arrays are bare `[...]` groups, so depth is
//!   preserved: `ARRAY[['a', 'b'], ['c', 'd']]`

use crate::coerce::coerce;
use crate::quote::{dollar_quote, quote_literal};
use crate::{FormatOptions, Result, Value};
use rand::Rng;

const ARRAY_DELIMITER: &str = ", ";

pub(crate) fn render<R: Rng + ?Sized>(
    value: &Value,
    options: &FormatOptions,
    rng: &mut R,
) -> Result<String> {
    match value {
        Value::Array(items) => {
            let mut out = String::from("ARRAY");
            write_array(&mut out, items, options, rng)?;
            Ok(out)
        }
        _ => render_element(value, options, rng),
    }
}

/// Renders a string as a quoted literal, picking single or dollar quotes
/// by length.
pub(crate) fn render_text<R: Rng + ?Sized>(
    text: &str,
    options: &FormatOptions,
    rng: &mut R,
) -> String {
    let len = text.chars().count();
    if options.prefers_dollar_quote(len) {
        tracing::trace!(len, "dollar-quoting long literal");
        dollar_quote(text, rng)
    } else {
        quote_literal(text)
    }
}

fn render_element<R: Rng + ?Sized>(
    value: &Value,
    options: &FormatOptions,
    rng: &mut R,
) -> Result<String> {
    match value {
        Value::Null => Ok("NULL".to_string()),
        Value::Array(items) => {
            let mut out = String::new();
            write_array(&mut out, items, options, rng)?;
            Ok(out)
        }
        Value::Object(_) => {
            let json = value.to_json()?;
            Ok(render_text(&json, options, rng))
        }
        Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            let (text, needs_quoting) = coerce(value)?;
            if needs_quoting {
                Ok(render_text(&text, options, rng))
            } else {
                Ok(text.into_owned())
            }
        }
    }
}

fn write_array<R: Rng + ?Sized>(
    out: &mut String,
    items: &[Value],
    options: &FormatOptions,
    rng: &mut R,
) -> Result<()> {
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(ARRAY_DELIMITER);
        }
        out.push_str(&render_element(item, options, rng)?);
    }
    out.push(']');
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql_value;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn lit(value: &Value) -> String {
        let mut rng = StdRng::seed_from_u64(3);
        render(value, &FormatOptions::default(), &mut rng).unwrap()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(lit(&Value::Null), "NULL");
        assert_eq!(lit(&Value::from(42)), "42");
        assert_eq!(lit(&Value::from(false)), "FALSE");
        assert_eq!(lit(&Value::from("hello world")), "'hello world'");
    }

    #[test]
    fn test_arrays() {
        let value = sql_value!(["foo", "bar", "baz' DROP TABLE foo;"]);
        assert_eq!(lit(&value), "ARRAY['foo', 'bar', 'baz'' DROP TABLE foo;']");

        let value = sql_value!([["foo", "bar"], ["baz' DROP TABLE foo;", "potato"]]);
        assert_eq!(
            lit(&value),
            "ARRAY[['foo', 'bar'], ['baz'' DROP TABLE foo;', 'potato']]"
        );
    }

    #[test]
    fn test_mixed_array() {
        let value = sql_value!([1, null, true, { "k": "v" }]);
        assert_eq!(lit(&value), r#"ARRAY[1, NULL, TRUE, '{"k":"v"}']"#);
        assert_eq!(lit(&sql_value!([])), "ARRAY[]");
    }

    #[test]
    fn test_object_stringified() {
        let value = sql_value!({ "name": "O'Reilly", "n": 2 });
        assert_eq!(lit(&value), r#"'{"name":"O''Reilly","n":2}'"#);
    }

    #[test]
    fn test_length_threshold() {
        let short = "x".repeat(999);
        assert_eq!(lit(&Value::from(short.as_str())), format!("'{}'", short));

        let long = "x".repeat(1000);
        let rendered = lit(&Value::from(long.as_str()));
        assert!(rendered.starts_with('$'));
        assert!(rendered.contains(&long));
        assert!(!rendered.contains('\''));
    }

    #[test]
    fn test_threshold_counts_characters() {
        // 999 characters, 1998 bytes
        let text = "é".repeat(999);
        assert!(lit(&Value::from(text.as_str())).starts_with('\''));
    }

    #[test]
    fn test_non_finite_number_fails() {
        let mut rng = StdRng::seed_from_u64(0);
        let value = Value::Array(vec![Value::from(f64::NAN)]);
        assert!(render(&value, &FormatOptions::default(), &mut rng).is_err());
    }
}
