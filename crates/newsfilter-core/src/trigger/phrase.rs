//! Word-sequence phrase matching.

/// A phrase normalized into lower-case, punctuation-free words.
///
/// The phrase is tokenized once when the trigger is built; matching then only
/// tokenizes the text being searched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    text: String,
    words: Vec<String>,
}

impl Phrase {
    /// Creates a phrase from configuration text.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            words: normalize(text),
        }
    }

    /// Returns the phrase as written in the configuration.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the normalized words of the phrase.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns true if the phrase has no words.
    ///
    /// An empty phrase matches every text.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns true if the phrase occurs as a contiguous run of whole words in `text`.
    pub fn is_in(&self, text: &str) -> bool {
        if self.words.is_empty() {
            return true;
        }

        let haystack = normalize(text);
        haystack
            .windows(self.words.len())
            .any(|window| window == self.words.as_slice())
    }
}

/// Returns true if `phrase` occurs in `haystack`, ignoring case and punctuation.
///
/// Both strings are lower-cased, ASCII punctuation becomes whitespace, and the
/// phrase must then appear as a contiguous sequence of whole words.
///
/// # Example
///
/// ```
/// use newsfilter_core::contains_phrase;
///
/// assert!(contains_phrase("Cats, DOGS!", "cats dogs"));
/// assert!(!contains_phrase("Clintonesque", "clinton"));
/// ```
pub fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    Phrase::new(phrase).is_in(haystack)
}

/// Lower-cases `text`, blanks out ASCII punctuation, and splits on whitespace.
fn normalize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation_and_case() {
        assert_eq!(normalize("Hello, World!"), vec!["hello", "world"]);
        assert_eq!(normalize("  a--b  "), vec!["a", "b"]);
        assert!(normalize("!?.").is_empty());
    }

    #[test]
    fn test_case_and_punctuation_insensitive() {
        assert!(contains_phrase("Cats, DOGS!", "cats dogs"));
        assert!(contains_phrase("purple@#$%cow", "PURPLE COW"));
        assert!(contains_phrase("Did you see a purple cow?", "purple cow"));
    }

    #[test]
    fn test_words_must_be_contiguous() {
        assert!(!contains_phrase("purple is a cow", "purple cow"));
        assert!(!contains_phrase("cow purple", "purple cow"));
    }

    #[test]
    fn test_whole_words_only() {
        assert!(!contains_phrase("purples cows", "purple cow"));
        assert!(!contains_phrase("Clintonesque", "clinton"));
        assert!(contains_phrase("Clinton-era policy", "clinton"));
    }

    #[test]
    fn test_phrase_longer_than_text() {
        assert!(!contains_phrase("purple", "purple cow"));
        assert!(!contains_phrase("", "anything"));
    }

    #[test]
    fn test_empty_phrase_is_vacuously_true() {
        assert!(contains_phrase("anything at all", ""));
        assert!(contains_phrase("", ""));
        assert!(Phrase::new(" , ").is_empty());
    }

    #[test]
    fn test_phrase_with_punctuation_is_normalized() {
        let phrase = Phrase::new("New York!");
        assert_eq!(phrase.as_str(), "New York!");
        assert_eq!(phrase.words(), ["new", "york"]);
        assert!(phrase.is_in("Snow in new york today"));
    }

    #[test]
    fn test_extra_whitespace_between_words() {
        assert!(contains_phrase("purple \t\n cow", "purple   cow"));
    }
}
