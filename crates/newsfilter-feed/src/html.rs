//! Plain-text cleanup for feed titles and descriptions.

use html_escape::decode_html_entities;

/// Strips tags, decodes HTML entities, and collapses whitespace.
pub(crate) fn clean_text(html: &str) -> String {
    let mut stripped = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                stripped.push(' ');
            }
            _ if !in_tag => stripped.push(c),
            _ => {}
        }
    }

    // Entities are decoded after stripping so an escaped `&lt;` stays text.
    decode_html_entities(&stripped)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags() {
        assert_eq!(clean_text("<p>Hello <b>world</b></p>"), "Hello world");
    }

    #[test]
    fn test_tags_separate_words() {
        assert_eq!(clean_text("one<br/>two"), "one two");
    }

    #[test]
    fn test_decodes_named_entities() {
        assert_eq!(
            clean_text("Tom &amp; Jerry &quot;live&quot; &lt;3"),
            "Tom & Jerry \"live\" <3"
        );
        assert_eq!(clean_text("it&apos;s&nbsp;here"), "it's here");
    }

    #[test]
    fn test_decodes_full_named_entity_set() {
        assert_eq!(
            clean_text("Caf&eacute; &euro;5 &copy; Pe&ntilde;a &times;"),
            "Café €5 © Peña ×"
        );
    }

    #[test]
    fn test_decodes_numeric_entities() {
        assert_eq!(clean_text("it&#39;s &#x2019;ok&#8217;"), "it's \u{2019}ok\u{2019}");
    }

    #[test]
    fn test_escaped_markup_is_kept_as_text() {
        assert_eq!(clean_text("&lt;b&gt;bold&lt;/b&gt;"), "<b>bold</b>");
    }

    #[test]
    fn test_bare_ampersand_survives() {
        assert_eq!(clean_text("AT&T & friends"), "AT&T & friends");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(clean_text("  a \n\t b  "), "a b");
    }
}
