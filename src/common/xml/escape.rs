use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use std::borrow::Cow;

const SPECIAL: [&str; 5] = ["&", "<", ">", "\"", "'"];
const ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"];

// Built once; the pattern set is fixed so construction cannot fail in practice
static XML_ESCAPER: Lazy<Option<AhoCorasick>> = Lazy::new(|| AhoCorasick::new(SPECIAL).ok());

/// Whether `ch` is allowed in an XML 1.0 document.
///
/// C0 controls other than tab, line feed and carriage return are not, nor
/// are the noncharacters U+FFFE and U+FFFF.
#[inline]
fn is_xml_char(ch: char) -> bool {
    match ch {
        '\t' | '\n' | '\r' => true,
        '\u{0}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}' => false,
        _ => true,
    }
}

/// Escape XML special characters for use in text nodes and attribute values.
///
/// Characters XML 1.0 cannot carry are dropped. Strings that need neither
/// are returned borrowed.
///
/// # Examples
///
/// ```
/// use deckwright::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<b>\"hi\"</b>"), "&lt;b&gt;&quot;hi&quot;&lt;/b&gt;");
/// assert_eq!(escape_xml("x\u{1}y"), "xy");
/// assert_eq!(escape_xml("plain"), "plain");
/// ```
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    let s: Cow<'_, str> = if s.chars().all(is_xml_char) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.chars().filter(|&ch| is_xml_char(ch)).collect())
    };

    if !s.bytes().any(|b| matches!(b, b'&' | b'<' | b'>' | b'"' | b'\'')) {
        return s;
    }

    match XML_ESCAPER.as_ref() {
        Some(escaper) => Cow::Owned(escaper.replace_all(&s, &ENTITIES)),
        None => {
            let mut out = String::with_capacity(s.len() + 16);
            for ch in s.chars() {
                match ch {
                    '&' => out.push_str("&amp;"),
                    '<' => out.push_str("&lt;"),
                    '>' => out.push_str("&gt;"),
                    '"' => out.push_str("&quot;"),
                    '\'' => out.push_str("&apos;"),
                    _ => out.push(ch),
                }
            }
            Cow::Owned(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_entities() {
        assert_eq!(escape_xml("&<>\"'"), "&amp;&lt;&gt;&quot;&apos;");
    }

    #[test]
    fn test_escape_borrows_plain_text() {
        assert!(matches!(escape_xml("Click to edit text"), Cow::Borrowed(_)));
        assert!(matches!(escape_xml("line\tone\r\nline two"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_drops_control_characters() {
        assert_eq!(escape_xml("x\u{1}y\u{1F}z"), "xyz");
        assert_eq!(escape_xml("a\u{0}<b\u{FFFF}"), "a&lt;b");
        assert_eq!(escape_xml("\u{8}"), "");
    }
}
