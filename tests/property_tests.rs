//! Property-based tests for the quoting invariants.

use pg_escape::{dollar_string, ident, literal, quote_string, ReservedWords, Value};
use proptest::prelude::*;

fn split_dollar(quoted: &str) -> Option<(&str, &str)> {
    let end = quoted.get(1..)?.find('$')? + 2;
    let tag = &quoted[..end];
    if quoted.len() < 2 * tag.len() || !quoted.ends_with(tag) {
        return None;
    }
    Some((tag, &quoted[tag.len()..quoted.len() - tag.len()]))
}

/// Reverses single-quote doubling, returning `None` for malformed input.
fn unquote_literal(quoted: &str) -> Option<String> {
    let (escaped, inner) = match quoted.strip_prefix('E') {
        Some(rest) => (true, rest),
        None => (false, quoted),
    };
    let inner = inner.strip_prefix('\'')?.strip_suffix('\'')?;
    let mut out = String::new();
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                if chars.next()? != '\'' {
                    return None;
                }
                out.push('\'');
            }
            '\\' if escaped => {
                if chars.next()? != '\\' {
                    return None;
                }
                out.push('\\');
            }
            '\\' => return None,
            _ => out.push(c),
        }
    }
    Some(out)
}

proptest! {
    #[test]
    fn prop_bare_identifiers_unchanged(id in "[A-Za-z_][A-Za-z0-9_$]{0,20}") {
        prop_assume!(!ReservedWords::global().contains(&id));
        prop_assert_eq!(ident(&Value::from(id.as_str())).unwrap(), id);
    }

    #[test]
    fn prop_quoted_identifiers_double_quotes(s in ".*\".*") {
        let out = ident(&Value::from(s.as_str())).unwrap();
        prop_assert!(out.starts_with('"') && out.ends_with('"'));
        let inner = &out[1..out.len() - 1];
        prop_assert_eq!(inner.replace("\"\"", "\""), s.clone());
        prop_assert_eq!(inner.matches('"').count(), 2 * s.matches('"').count());
    }

    #[test]
    fn prop_reserved_words_always_quoted(upper in any::<bool>(), idx in 0usize..100) {
        let words = ["desc", "join", "cross", "select", "table", "user", "order", "where"];
        let word = words[idx % words.len()];
        let word = if upper { word.to_uppercase() } else { word.to_string() };
        prop_assert_eq!(ident(&Value::from(word.as_str())).unwrap(), format!("\"{}\"", word));
    }

    #[test]
    fn prop_dollar_tag_absent_from_value(s in "(\\$[a-zA-Z0-9]{0,2}\\$|[^$]){0,40}") {
        let out = dollar_string(&Value::from(s.as_str())).unwrap();
        let (tag, body) = split_dollar(&out).expect("well-formed dollar quote");
        prop_assert_eq!(body, s.as_str());
        prop_assert!(!s.contains(tag));
        let tag_body = &tag[1..tag.len() - 1];
        prop_assert!(tag_body.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn prop_quote_string_roundtrips_through_sql_rules(s in any::<String>()) {
        let out = quote_string(&Value::from(s.as_str())).unwrap();
        prop_assert_eq!(out.starts_with('E'), s.contains('\\'));
        prop_assert_eq!(unquote_literal(&out), Some(s));
    }

    #[test]
    fn prop_short_literals_single_quoted(s in any::<String>()) {
        prop_assume!(s.chars().count() < 1000);
        let out = literal(&Value::from(s.as_str())).unwrap();
        prop_assert_eq!(out, quote_string(&Value::from(s.as_str())).unwrap());
    }

    #[test]
    fn prop_integers_bypass_quoting(n in any::<i64>()) {
        prop_assert_eq!(literal(&Value::from(n)).unwrap(), n.to_string());
    }
}
