//! Named placeholder substitution
//!
//! Replaces every `{key}` in a template with the value bound to `key`.
//! Keys are case-sensitive. Placeholders without a bound value are left
//! verbatim, so a file-name template containing only `{date}` can be rendered
//! without a full value map. There is no escaping: substituted values are
//! never rescanned for placeholders.

use std::collections::HashMap;
use std::fmt::Display;

/// Render `template` with the given `(key, value)` pairs.
///
/// # Examples
///
/// ```
/// use rust_routed_logger::core::template::render;
///
/// assert_eq!(render("{a}-{b}", [("a", "x"), ("b", "y")]), "x-y");
/// assert_eq!(render("{a}{z}", [("a", "x")]), "x{z}");
/// assert_eq!(render("{n}/{n}", [("n", 7)]), "7/7");
/// ```
pub fn render<'a, I, V>(template: &str, values: I) -> String
where
    I: IntoIterator<Item = (&'a str, V)>,
    V: Display,
{
    let values: HashMap<&str, String> = values
        .into_iter()
        .map(|(key, value)| (key, value.to_string()))
        .collect();

    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let substituted = after_open.find('}').and_then(|close| {
            values
                .get(&after_open[..close])
                .map(|value| (value, close))
        });

        match substituted {
            Some((value, close)) => {
                output.push_str(value);
                rest = &after_open[close + 1..];
            }
            None => {
                output.push('{');
                rest = after_open;
            }
        }
    }
    output.push_str(rest);

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_all_keys() {
        assert_eq!(render("{a}-{b}", [("a", "x"), ("b", "y")]), "x-y");
    }

    #[test]
    fn test_unknown_placeholder_is_kept() {
        assert_eq!(render("{a}{z}", [("a", "x")]), "x{z}");
        assert_eq!(render("{date}_error", std::iter::empty::<(&str, &str)>()), "{date}_error");
    }

    #[test]
    fn test_repeated_placeholder() {
        assert_eq!(render("{d}/{d}_{d}", [("d", "2025-01-08")]), "2025-01-08/2025-01-08_2025-01-08");
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        assert_eq!(render("{Date}", [("date", "x")]), "{Date}");
    }

    #[test]
    fn test_numeric_values() {
        assert_eq!(render("{code}", [("code", 500)]), "500");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        assert_eq!(render("{a}{b}", [("a", "{b}"), ("b", "y")]), "{b}y");
    }

    #[test]
    fn test_unbalanced_braces() {
        assert_eq!(render("{{a}", [("a", "x")]), "{x");
        assert_eq!(render("a}{", [("a", "x")]), "a}{");
        assert_eq!(render("{}", [("a", "x")]), "{}");
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(render("ログ {message} ✓", [("message", "été")]), "ログ été ✓");
    }
}
