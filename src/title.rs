use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// A wiki page title, normalized for use in requests and URL comparisons:
/// surrounding whitespace trimmed, internal spaces replaced with underscores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTitle(String);

impl PageTitle {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().replace(' ', "_"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// What `encodeURI` escapes. Alphanumerics and the URI structure characters
// (`/:@&=+$,;?#` plus `-_.!~*'()`) pass through untouched.
const ENCODE_URI: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// The token a page title contributes to the expected chapter-link prefix:
/// parentheses swapped out, then percent-encoded for URL embedding.
pub fn search_token(title: &PageTitle) -> String {
    utf8_percent_encode(&escape_parens(title.as_str()), ENCODE_URI).to_string()
}

/// Parentheses corrupt substring search against encoded hrefs, so both the
/// search token and every candidate href swap them for placeholder text
/// before matching.
pub fn escape_parens(input: &str) -> String {
    input.replace('(', "op").replace(')', "cl")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_and_underscores() {
        assert_eq!(PageTitle::new("  The Time Machine ").as_str(), "The_Time_Machine");
        assert_eq!(PageTitle::new("Walden").as_str(), "Walden");
    }

    #[test]
    fn search_token_escapes_parentheses() {
        let title = PageTitle::new("Frankenstein (1818)");
        assert_eq!(title.as_str(), "Frankenstein_(1818)");
        assert_eq!(search_token(&title), "Frankenstein_op1818cl");
    }

    #[test]
    fn search_token_percent_encodes_like_encode_uri() {
        let title = PageTitle::new("Poems \"collected\"");
        assert_eq!(search_token(&title), "Poems_%22collected%22");

        // Slashes separate sub-pages and must survive encoding.
        let title = PageTitle::new("A Book/Volume 1");
        assert_eq!(search_token(&title), "A_Book/Volume_1");
    }
}
