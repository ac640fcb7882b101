//! # Token Classifier
//!
//! BPE vocabularies (CLIP's `bpe_simple_vocab`, and friends) mark tokens which
//! close a word with a trailing [`END_OF_WORD_MARKER`]. Everything else is a
//! subword fragment.

/// The literal end-of-word marker carried by full-word tokens.
pub const END_OF_WORD_MARKER: &str = "</w>";

/// A token split into its full-word flag and surface form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedToken<'a> {
    /// True if the raw token ended with [`END_OF_WORD_MARKER`].
    pub is_full_word: bool,

    /// The token with the marker stripped (if present).
    pub surface: &'a str,
}

/// Is this raw token a full word?
pub fn is_full_word(token: &str) -> bool {
    token.ends_with(END_OF_WORD_MARKER)
}

/// Strip a single trailing [`END_OF_WORD_MARKER`], if present.
pub fn strip_marker(token: &str) -> &str {
    token.strip_suffix(END_OF_WORD_MARKER).unwrap_or(token)
}

/// Classify a raw token.
pub fn classify(token: &str) -> ClassifiedToken<'_> {
    match token.strip_suffix(END_OF_WORD_MARKER) {
        Some(surface) => ClassifiedToken {
            is_full_word: true,
            surface,
        },
        None => ClassifiedToken {
            is_full_word: false,
            surface: token,
        },
    }
}

/// Split a token sequence into (stripped full words, subwords).
///
/// Both outputs preserve vocabulary order.
pub fn split_full_words<'a, I, S>(tokens: I) -> (Vec<&'a str>, Vec<&'a str>)
where
    I: IntoIterator<Item = &'a S>,
    S: AsRef<str> + 'a + ?Sized,
{
    let mut full_words = Vec::new();
    let mut subwords = Vec::new();
    for token in tokens {
        let classified = classify(token.as_ref());
        if classified.is_full_word {
            full_words.push(classified.surface);
        } else {
            subwords.push(classified.surface);
        }
    }
    (full_words, subwords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(
            classify("hello</w>"),
            ClassifiedToken {
                is_full_word: true,
                surface: "hello",
            }
        );
        assert_eq!(
            classify("hel"),
            ClassifiedToken {
                is_full_word: false,
                surface: "hel",
            }
        );

        // The marker alone is a full word with an empty surface.
        assert_eq!(
            classify("</w>"),
            ClassifiedToken {
                is_full_word: true,
                surface: "",
            }
        );

        // Only a trailing marker counts.
        assert!(!is_full_word("</w>abc"));
        assert!(!is_full_word("abc</w "));
    }

    #[test]
    fn test_strip_marker_is_idempotent() {
        for token in ["abc</w>", "abc", "", "</w>", "日本</w>"] {
            let once = strip_marker(token);
            assert_eq!(strip_marker(once), once, "{token:?}");
        }
    }

    #[test]
    fn test_strip_only_one_marker() {
        assert_eq!(strip_marker("a</w></w>"), "a</w>");
    }

    #[test]
    fn test_non_ascii_surface() {
        let c = classify("привет</w>");
        assert!(c.is_full_word);
        assert_eq!(c.surface, "привет");
    }

    #[test]
    fn test_split_full_words() {
        let vocab = vec!["i".to_string(), "the</w>".to_string(), "ng</w>".to_string()];
        let (full, sub) = split_full_words(&vocab);
        assert_eq!(full, vec!["the", "ng"]);
        assert_eq!(sub, vec!["i"]);
        assert_eq!(full.len() + sub.len(), vocab.len());
    }
}
