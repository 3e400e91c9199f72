//! Query template parsing.
//!
//! A template is plain text with `%` directives:
//!
//! | directive | renders the next argument as                      |
//! |-----------|---------------------------------------------------|
//! | `%s`      | its coerced text, unquoted                        |
//! | `%I`      | an identifier                                     |
//! | `%L`      | a literal                                         |
//! | `%Q`      | a dollar-quoted string, regardless of length      |
//! | `%J`      | its JSON text, rendered as a literal              |
//! | `%%`      | a literal `%`, consuming no argument              |
//!
//! Parsing happens before any argument is looked at, so an unknown
//! directive is reported even when the arguments are also wrong.

use crate::error::Specifier;
use crate::{Error, Result};

/// A directive that consumes one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// `%s`
    String,
    /// `%I`
    Ident,
    /// `%L`
    Literal,
    /// `%Q`
    DollarQuote,
    /// `%J`
    Json,
}

impl Directive {
    fn from_char(c: char) -> Option<Self> {
        match c {
            's' => Some(Directive::String),
            'I' => Some(Directive::Ident),
            'L' => Some(Directive::Literal),
            'Q' => Some(Directive::DollarQuote),
            'J' => Some(Directive::Json),
            _ => None,
        }
    }
}

/// One piece of a parsed template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied through unchanged
    Text(&'a str),
    /// `%%`
    Percent,
    /// A directive and the index of the argument it consumes
    Directive(Directive, usize),
}

/// A parsed template.
///
/// # Examples
///
/// ```rust
/// use pg_escape::template::{Directive, Segment, Template};
///
/// let template = Template::parse("SELECT %I FROM t WHERE x = %L -- 100%%").unwrap();
/// assert_eq!(template.arg_count(), 2);
/// assert_eq!(template.segments()[1], Segment::Directive(Directive::Ident, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'a> {
    segments: Vec<Segment<'a>>,
    arg_count: usize,
}

impl<'a> Template<'a> {
    /// Splits `template` into text and directives.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSpecifier`] for a `%` followed by an unknown
    /// character, including a line break. A `%` that ends the template is
    /// copied through as text.
    pub fn parse(template: &'a str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut arg_count = 0;
        let mut text_start = 0;
        let mut chars = template.char_indices();

        while let Some((pos, c)) = chars.next() {
            if c != '%' {
                continue;
            }
            // A lone `%` at the end stays in the trailing text.
            let Some((spec_pos, spec)) = chars.next() else {
                break;
            };
            if pos > text_start {
                segments.push(Segment::Text(&template[text_start..pos]));
            }

            if spec == '%' {
                segments.push(Segment::Percent);
            } else {
                let directive = Directive::from_char(spec)
                    .ok_or(Error::InvalidSpecifier(Specifier::Char(spec)))?;
                segments.push(Segment::Directive(directive, arg_count));
                arg_count += 1;
            }
            text_start = spec_pos + spec.len_utf8();
        }

        if text_start < template.len() {
            segments.push(Segment::Text(&template[text_start..]));
        }

        tracing::trace!(segments = segments.len(), arg_count, "parsed query template");
        Ok(Template {
            segments,
            arg_count,
        })
    }

    /// Number of arguments the template consumes.
    #[must_use]
    pub fn arg_count(&self) -> usize {
        self.arg_count
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        let template = Template::parse("SELECT 1").unwrap();
        assert_eq!(template.segments(), &[Segment::Text("SELECT 1")]);
        assert_eq!(template.arg_count(), 0);
    }

    #[test]
    fn test_empty() {
        let template = Template::parse("").unwrap();
        assert!(template.segments().is_empty());
    }

    #[test]
    fn test_percent_consumes_nothing() {
        let template = Template::parse("just %% a %s").unwrap();
        assert_eq!(
            template.segments(),
            &[
                Segment::Text("just "),
                Segment::Percent,
                Segment::Text(" a "),
                Segment::Directive(Directive::String, 0),
            ]
        );
        assert_eq!(template.arg_count(), 1);
    }

    #[test]
    fn test_adjacent_directives() {
        let template = Template::parse("%I%L%Q%J").unwrap();
        assert_eq!(
            template.segments(),
            &[
                Segment::Directive(Directive::Ident, 0),
                Segment::Directive(Directive::Literal, 1),
                Segment::Directive(Directive::DollarQuote, 2),
                Segment::Directive(Directive::Json, 3),
            ]
        );
    }

    #[test]
    fn test_multibyte_text() {
        let template = Template::parse("ünï %s çødé").unwrap();
        assert_eq!(
            template.segments(),
            &[
                Segment::Text("ünï "),
                Segment::Directive(Directive::String, 0),
                Segment::Text(" çødé"),
            ]
        );
    }

    #[test]
    fn test_invalid_specifier() {
        assert_eq!(
            Template::parse("%x").unwrap_err(),
            Error::InvalidSpecifier(Specifier::Char('x'))
        );
        assert_eq!(
            Template::parse("lowercase %l").unwrap_err(),
            Error::InvalidSpecifier(Specifier::Char('l'))
        );
        assert_eq!(
            Template::parse("%é").unwrap_err(),
            Error::InvalidSpecifier(Specifier::Char('é'))
        );
    }

    #[test]
    fn test_trailing_percent() {
        let template = Template::parse("100%").unwrap();
        assert_eq!(template.segments(), &[Segment::Text("100%")]);
        assert_eq!(template.arg_count(), 0);

        let template = Template::parse("%s 100%").unwrap();
        assert_eq!(
            template.segments(),
            &[
                Segment::Directive(Directive::String, 0),
                Segment::Text(" 100%"),
            ]
        );

        let template = Template::parse("%").unwrap();
        assert_eq!(template.segments(), &[Segment::Text("%")]);
    }

    #[test]
    fn test_percent_before_newline() {
        assert_eq!(
            Template::parse("50%\nmore").unwrap_err(),
            Error::InvalidSpecifier(Specifier::Char('\n'))
        );
    }
}
