//! Identifier and string quoting primitives.
//!
//! These work on plain `&str`. Argument checks (missing values, nulls,
//! wrong variants) live in [`Formatter`](crate::Formatter).
//!
//! - [`ident`] double-quotes an identifier only when it has to
//! - [`quote_literal`] produces a single-quoted literal, switching to
//!   escape-string syntax (`E'...'`) when the text contains a backslash
//! - [`dollar_quote`] wraps text in a random `$tag$` that does not occur
//!   inside it
//!
//! ```rust
//! use pg_escape::{quote, ReservedWords};
//!
//! let reserved = ReservedWords::postgres();
//! assert_eq!(quote::ident("users", &reserved), "users");
//! assert_eq!(quote::ident("order", &reserved), "\"order\"");
//! assert_eq!(quote::quote_literal("O'Reilly"), "'O''Reilly'");
//! ```

use crate::ReservedWords;
use rand::Rng;
use std::borrow::Cow;

const TAG_HEAD: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const TAG_TAIL: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Returns `true` if `id` can appear in SQL without double quotes.
///
/// That requires the shape `[A-Za-z_][A-Za-z0-9_$]*` and that the word is
/// not reserved.
#[must_use]
pub fn is_bare_identifier(id: &str, reserved: &ReservedWords) -> bool {
    let mut chars = id.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        return false;
    }

    !reserved.contains(id)
}

/// Wraps `id` in double quotes, doubling embedded double quotes.
#[must_use]
pub fn quote_ident(id: &str) -> String {
    let mut out = String::with_capacity(id.len() + 2);
    out.push('"');
    for c in id.chars() {
        if c == '"' {
            out.push_str("\"\"");
        } else {
            out.push(c);
        }
    }
    out.push('"');
    out
}

/// Returns `id` unchanged when it is a bare identifier, else its quoted form.
#[must_use]
pub fn ident<'a>(id: &'a str, reserved: &ReservedWords) -> Cow<'a, str> {
    if is_bare_identifier(id, reserved) {
        Cow::Borrowed(id)
    } else {
        Cow::Owned(quote_ident(id))
    }
}

/// Produces a single-quoted string literal.
///
/// Single quotes and backslashes are doubled. If the text contained a
/// backslash the literal gets the `E` prefix so the doubled backslashes
/// are read back as one.
///
/// # Examples
///
/// ```rust
/// use pg_escape::quote::quote_literal;
///
/// assert_eq!(quote_literal("plain"), "'plain'");
/// assert_eq!(quote_literal(r"\whoop\"), r"E'\\whoop\\'");
/// ```
#[must_use]
pub fn quote_literal(value: &str) -> String {
    let has_backslash = value.contains('\\');
    let mut out = String::with_capacity(value.len() + 3);
    if has_backslash {
        out.push('E');
    }
    out.push('\'');
    for c in value.chars() {
        match c {
            '\'' => out.push_str("''"),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Produces a dollar-quoted literal `$tag$value$tag$`.
///
/// The tag body starts at one character and grows by one every time the
/// candidate tag is found inside `value`. The first character is a letter
/// and the rest are letters or digits, so the tag is always a valid
/// unquoted identifier.
///
/// # Examples
///
/// ```rust
/// use pg_escape::quote::dollar_quote;
///
/// let quoted = dollar_quote("it's $1", &mut rand::rng());
/// let tag_end = quoted[1..].find('$').unwrap() + 2;
/// let tag = &quoted[..tag_end];
/// assert!(quoted.ends_with(tag));
/// assert_eq!(&quoted[tag.len()..quoted.len() - tag.len()], "it's $1");
/// ```
pub fn dollar_quote<R: Rng + ?Sized>(value: &str, rng: &mut R) -> String {
    let mut len = 1;
    // A tag longer than the value cannot occur in it, so at most
    // `value.len()` candidates are rejected.
    loop {
        let tag = random_tag(len, rng);
        if !value.contains(tag.as_str()) {
            let mut out = String::with_capacity(value.len() + 2 * tag.len());
            out.push_str(&tag);
            out.push_str(value);
            out.push_str(&tag);
            return out;
        }
        tracing::trace!(tag_len = len, "dollar-quote tag occurs in value, retrying");
        len += 1;
    }
}

fn random_tag<R: Rng + ?Sized>(len: usize, rng: &mut R) -> String {
    let mut tag = String::with_capacity(len + 2);
    tag.push('$');
    for i in 0..len {
        let alphabet = if i == 0 { TAG_HEAD } else { TAG_TAIL };
        tag.push(char::from(alphabet[rng.random_range(0..alphabet.len())]));
    }
    tag.push('$');
    tag
}
