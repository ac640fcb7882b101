//! # Vocabulary

/// An ordered, read-only sequence of raw BPE tokens.
///
/// The index of a token is its BPE rank: lower ranks were merged earlier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    tokens: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary from raw tokens, in rank order.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The token at `rank`.
    pub fn get(
        &self,
        rank: usize,
    ) -> Option<&str> {
        self.tokens.get(rank).map(String::as_str)
    }

    /// The raw tokens, in rank order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Iterate the raw tokens, in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + Clone {
        self.tokens.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}
