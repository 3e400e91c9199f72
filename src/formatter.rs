//! The formatting context.
//!
//! [`Formatter`] bundles the reserved keyword table and the
//! [`FormatOptions`] that every escaping operation reads. It holds no
//! mutable state and is `Copy`, so one instance can serve any number of
//! threads.
//!
//! ```rust
//! use pg_escape::{Formatter, ReservedWords, Value};
//!
//! // Nothing is reserved for this formatter
//! let reserved = ReservedWords::new();
//! let formatter = Formatter::with_reserved_words(&reserved);
//! assert_eq!(formatter.ident(&Value::from("desc")).unwrap(), "desc");
//!
//! // The default table quotes keywords
//! assert_eq!(Formatter::new().ident(&Value::from("desc")).unwrap(), "\"desc\"");
//! ```
//!
//! ## Randomness
//!
//! Dollar-quoting draws its tag from the thread-local generator. The
//! `*_with_rng` variants take any [`rand::Rng`] instead, which makes the
//! generated tags reproducible:
//!
//! ```rust
//! use pg_escape::{Formatter, Value};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let formatter = Formatter::new();
//! let value = Value::from("text");
//! let a = formatter.dollar_string_with_rng(&value, &mut StdRng::seed_from_u64(9)).unwrap();
//! let b = formatter.dollar_string_with_rng(&value, &mut StdRng::seed_from_u64(9)).unwrap();
//! assert_eq!(a, b);
//! ```

use crate::coerce::coerce;
use crate::literal::{render, render_text};
use crate::quote::{dollar_quote, ident, quote_literal};
use crate::template::{Directive, Segment, Template};
use crate::{Error, FormatOptions, ReservedWords, Result, Value};
use rand::Rng;

/// Escaping operations bound to a keyword table and options.
#[derive(Clone, Copy, Debug)]
pub struct Formatter<'r> {
    reserved: &'r ReservedWords,
    options: FormatOptions,
}

impl Formatter<'static> {
    /// Creates a formatter over [`ReservedWords::global`] with default options.
    #[must_use]
    pub fn new() -> Self {
        Formatter {
            reserved: ReservedWords::global(),
            options: FormatOptions::default(),
        }
    }
}

impl Default for Formatter<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> Formatter<'r> {
    /// Creates a formatter over a caller-supplied keyword table.
    #[must_use]
    pub fn with_reserved_words(reserved: &'r ReservedWords) -> Self {
        Formatter {
            reserved,
            options: FormatOptions::default(),
        }
    }

    /// Replaces the options.
    #[must_use]
    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    /// The options this formatter renders with.
    #[must_use]
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// The keyword table identifiers are checked against.
    #[must_use]
    pub fn reserved_words(&self) -> &'r ReservedWords {
        self.reserved
    }

    /// Returns the coerced text of a scalar, without any quoting.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingArgument`] if `value` is `None`
    /// - [`Error::NullNotAllowed`] for `Null`
    /// - [`Error::UnsupportedType`] for arrays, objects and non-finite numbers
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pg_escape::{Formatter, Value};
    ///
    /// let formatter = Formatter::new();
    /// assert_eq!(formatter.string(&Value::from(15)).unwrap(), "15");
    /// assert!(formatter.string(None).is_err());
    /// ```
    pub fn string<'v>(&self, value: impl Into<Option<&'v Value>>) -> Result<String> {
        let value = required(value.into())?;
        let (text, _) = coerce(value)?;
        Ok(text.into_owned())
    }

    /// Renders an identifier, double-quoting it only when necessary.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingArgument`] if `value` is `None`
    /// - [`Error::NullNotAllowed`] for `Null`
    /// - [`Error::TypeMismatch`] for anything but a string
    pub fn ident<'v>(&self, value: impl Into<Option<&'v Value>>) -> Result<String> {
        let value = required(value.into())?;
        let id = expect_str(value)?;
        Ok(ident(id, self.reserved).into_owned())
    }

    /// Renders any value as a literal using the thread-local generator.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingArgument`] if `value` is `None`
    /// - [`Error::UnsupportedType`] for non-finite numbers, at any depth
    /// - [`Error::Json`] if an object cannot be stringified
    pub fn literal<'v>(&self, value: impl Into<Option<&'v Value>>) -> Result<String> {
        self.literal_with_rng(value, &mut rand::rng())
    }

    /// Same as [`Formatter::literal`] with an explicit generator.
    ///
    /// # Errors
    ///
    /// See [`Formatter::literal`].
    pub fn literal_with_rng<'v, R: Rng + ?Sized>(
        &self,
        value: impl Into<Option<&'v Value>>,
        rng: &mut R,
    ) -> Result<String> {
        let value = value.into().ok_or(Error::MissingArgument)?;
        render(value, &self.options, rng)
    }

    /// Renders a string as a single-quoted literal. `Null` renders as `NULL`.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingArgument`] if `value` is `None`
    /// - [`Error::TypeMismatch`] for anything but a string or null
    pub fn quote_string<'v>(&self, value: impl Into<Option<&'v Value>>) -> Result<String> {
        match value.into().ok_or(Error::MissingArgument)? {
            Value::Null => Ok("NULL".to_string()),
            other => Ok(quote_literal(expect_str(other)?)),
        }
    }

    /// Renders a string as a dollar-quoted literal. `Null` renders as `NULL`.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingArgument`] if `value` is `None`
    /// - [`Error::TypeMismatch`] for anything but a string or null
    pub fn dollar_string<'v>(&self, value: impl Into<Option<&'v Value>>) -> Result<String> {
        self.dollar_string_with_rng(value, &mut rand::rng())
    }

    /// Same as [`Formatter::dollar_string`] with an explicit generator.
    ///
    /// # Errors
    ///
    /// See [`Formatter::dollar_string`].
    pub fn dollar_string_with_rng<'v, R: Rng + ?Sized>(
        &self,
        value: impl Into<Option<&'v Value>>,
        rng: &mut R,
    ) -> Result<String> {
        match value.into().ok_or(Error::MissingArgument)? {
            Value::Null => Ok("NULL".to_string()),
            other => Ok(dollar_quote(expect_str(other)?, rng)),
        }
    }

    /// Substitutes `args` into `template`.
    ///
    /// The template is parsed first, then the number of consuming
    /// directives is checked against `args.len()`, then each directive is
    /// rendered in order.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidSpecifier`] for an unknown directive
    /// - [`Error::ArgumentCountMismatch`] when the template consumes more or
    ///   fewer arguments than supplied
    /// - any error of the operation a directive delegates to
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pg_escape::{Formatter, Value};
    ///
    /// let sql = Formatter::new()
    ///     .format(
    ///         "SELECT * FROM %I WHERE name = %L",
    ///         &[Value::from("user"), Value::from("Tobi's")],
    ///     )
    ///     .unwrap();
    /// assert_eq!(sql, "SELECT * FROM \"user\" WHERE name = 'Tobi''s'");
    /// ```
    pub fn format(&self, template: &str, args: &[Value]) -> Result<String> {
        self.format_with_rng(template, args, &mut rand::rng())
    }

    /// Same as [`Formatter::format`] with an explicit generator.
    ///
    /// # Errors
    ///
    /// See [`Formatter::format`].
    pub fn format_with_rng<R: Rng + ?Sized>(
        &self,
        template: &str,
        args: &[Value],
        rng: &mut R,
    ) -> Result<String> {
        let template = Template::parse(template)?;
        if template.arg_count() != args.len() {
            return Err(Error::ArgumentCountMismatch {
                expected: template.arg_count(),
                supplied: args.len(),
            });
        }

        let mut out = String::new();
        for segment in template.segments() {
            match *segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Percent => out.push('%'),
                Segment::Directive(directive, index) => {
                    let arg = args.get(index);
                    let rendered = match directive {
                        Directive::String => self.string(arg)?,
                        Directive::Ident => self.ident(arg)?,
                        Directive::Literal => self.literal_with_rng(arg, rng)?,
                        Directive::DollarQuote => self.dollar_string_with_rng(arg, rng)?,
                        Directive::Json => self.json_literal(arg, rng)?,
                    };
                    out.push_str(&rendered);
                }
            }
        }
        Ok(out)
    }

    /// Formats with a template that is itself a value, e.g. one read from
    /// a JSON document.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingArgument`] if `template` is `None`
    /// - [`Error::InvalidTemplate`] if `template` is not a string
    /// - anything [`Formatter::format`] returns
    pub fn format_value<'v>(
        &self,
        template: impl Into<Option<&'v Value>>,
        args: &[Value],
    ) -> Result<String> {
        match template.into().ok_or(Error::MissingArgument)? {
            Value::String(template) => self.format(template, args),
            other => Err(Error::InvalidTemplate(other.type_name().to_string())),
        }
    }

    fn json_literal<R: Rng + ?Sized>(&self, value: Option<&Value>, rng: &mut R) -> Result<String> {
        let json = value.ok_or(Error::MissingArgument)?.to_json()?;
        Ok(render_text(&json, &self.options, rng))
    }
}

fn required(value: Option<&Value>) -> Result<&Value> {
    match value {
        None => Err(Error::MissingArgument),
        Some(Value::Null) => Err(Error::NullNotAllowed),
        Some(value) => Ok(value),
    }
}

fn expect_str(value: &Value) -> Result<&str> {
    value
        .as_str()
        .ok_or_else(|| Error::type_mismatch("string", value.type_name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql_value;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_string_rejects_null_and_containers() {
        let formatter = Formatter::new();
        assert_eq!(formatter.string(&Value::Null), Err(Error::NullNotAllowed));
        assert_eq!(
            formatter.string(&sql_value!([1])),
            Err(Error::UnsupportedType("array".to_string()))
        );
        assert_eq!(formatter.string(&Value::from(true)).unwrap(), "TRUE");
    }

    #[test]
    fn test_ident_errors() {
        let formatter = Formatter::new();
        assert_eq!(formatter.ident(None), Err(Error::MissingArgument));
        assert_eq!(formatter.ident(&Value::Null), Err(Error::NullNotAllowed));
        assert_eq!(
            formatter.ident(&Value::from(5)),
            Err(Error::type_mismatch("string", "number"))
        );
    }

    #[test]
    fn test_accessors() {
        let reserved = ReservedWords::from_list("widget\n");
        let options = FormatOptions::new().with_dollar_quote_threshold(10);
        let formatter = Formatter::with_reserved_words(&reserved).with_options(options);
        assert_eq!(formatter.options(), &options);
        assert!(std::ptr::eq(formatter.reserved_words(), &reserved));

        let copy = formatter;
        assert_eq!(copy.options(), formatter.options());
        assert!(std::ptr::eq(
            Formatter::new().reserved_words(),
            ReservedWords::global()
        ));
    }

    #[test]
    fn test_custom_reserved_words() {
        let reserved = ReservedWords::from_list("widget\n");
        let formatter = Formatter::with_reserved_words(&reserved);
        assert_eq!(formatter.ident(&Value::from("Widget")).unwrap(), "\"Widget\"");
        assert_eq!(formatter.ident(&Value::from("select")).unwrap(), "select");
    }

    #[test]
    fn test_quote_string_null_and_type() {
        let formatter = Formatter::new();
        assert_eq!(formatter.quote_string(&Value::Null).unwrap(), "NULL");
        assert_eq!(formatter.dollar_string(&Value::Null).unwrap(), "NULL");
        assert!(matches!(
            formatter.quote_string(&Value::from(1)),
            Err(Error::TypeMismatch { .. })
        ));
        assert!(matches!(
            formatter.dollar_string(&Value::from(1)),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_format_checks_template_before_count() {
        let formatter = Formatter::new();
        assert_eq!(
            formatter.format("%s %z", &[]),
            Err(Error::InvalidSpecifier(crate::error::Specifier::Char('z')))
        );
    }

    #[test]
    fn test_format_json_directive() {
        let formatter = Formatter::new();
        let args = [sql_value!({ "a": [1, 2] }), Value::Null, Value::from("s")];
        assert_eq!(
            formatter.format("%J %J %J", &args).unwrap(),
            r#"'{"a":[1,2]}' 'null' '"s"'"#
        );
    }

    #[test]
    fn test_format_dollar_directive_deterministic() {
        let formatter = Formatter::new();
        let args = [Value::from("Tobi's")];
        let a = formatter
            .format_with_rng("%Q", &args, &mut StdRng::seed_from_u64(5))
            .unwrap();
        let b = formatter
            .dollar_string_with_rng(&args[0], &mut StdRng::seed_from_u64(5))
            .unwrap();
        assert_eq!(a, b);
        assert!(a.contains("$Tobi's$"));
    }

    #[test]
    fn test_format_value_template() {
        let formatter = Formatter::new();
        let args = [Value::from("x")];
        assert_eq!(
            formatter.format_value(&Value::from("%I"), &args).unwrap(),
            "x"
        );
        assert_eq!(
            formatter.format_value(&Value::from(1), &args),
            Err(Error::InvalidTemplate("number".to_string()))
        );
        assert_eq!(
            formatter.format_value(None, &args),
            Err(Error::MissingArgument)
        );
    }

    #[test]
    fn test_threshold_applies_to_format() {
        let formatter =
            Formatter::new().with_options(FormatOptions::new().with_dollar_quote_threshold(3));
        let out = formatter.format("%L", &[Value::from("abc")]).unwrap();
        assert!(out.starts_with('$') && out.ends_with('$'));
    }
}
