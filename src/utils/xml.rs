//! XML text escaping for generated SVG documents.

use std::borrow::Cow;

/// Characters that are reserved in XML text and attribute values.
const RESERVED: [char; 5] = ['&', '<', '>', '"', '\''];

/// Get the named entity for a reserved character.
#[inline]
fn entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&apos;"),
        _ => None,
    }
}

/// Escape the five XML-reserved characters to named entities.
///
/// Each source character is replaced at most once, so `&` produced by an
/// entity is never escaped again. Borrows when nothing needs escaping.
///
/// # Example
/// ```ignore
/// assert_eq!(escape("A & \"B\" <C>"), "A &amp; &quot;B&quot; &lt;C&gt;");
/// ```
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(RESERVED) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match entity(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_borrows() {
        assert!(matches!(escape("RECURSOS HUMANOS"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_mixed() {
        assert_eq!(escape("A & \"B\" <C>"), "A &amp; &quot;B&quot; &lt;C&gt;");
    }

    #[test]
    fn test_escape_apostrophe() {
        assert_eq!(escape("Rock'n'Roll"), "Rock&apos;n&apos;Roll");
    }

    #[test]
    fn test_escape_existing_entity_is_escaped_once() {
        assert_eq!(escape("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_escape_empty() {
        assert_eq!(escape(""), "");
    }
}
