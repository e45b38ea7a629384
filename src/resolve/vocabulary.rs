//! Word vocabulary and segmentation of concatenated word IDs.
//!
//! Redgifs IDs are several lowercase dictionary words glued together
//! (`happyredcatfish`), while the content host expects them capitalized
//! (`HappyRedCatFish`). Segmentation takes the *shortest* prefix found in
//! the vocabulary at every step: `catfish` splits as `Cat` + `Fish`, never
//! as `Catfish`.

use std::collections::HashSet;

use once_cell::sync::Lazy;

static BUNDLED_WORDS: &str = include_str!("../../assets/vocabulary.txt");

static BUNDLED: Lazy<Vocabulary> = Lazy::new(|| Vocabulary::from_words(BUNDLED_WORDS.lines()));

/// A set of lowercase words.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: HashSet<String>,
}

impl Vocabulary {
    /// The bundled animal/adjective/color vocabulary.
    pub fn bundled() -> &'static Vocabulary {
        &BUNDLED
    }

    /// Build a vocabulary from words. Blank lines are ignored.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Split `token` into vocabulary words, shortest prefix first.
    ///
    /// Stops at the first position where no prefix of the remainder is a
    /// word; that remainder is dropped. A token with no match yields an
    /// empty list.
    pub fn segment<'a>(&self, token: &'a str) -> Vec<&'a str> {
        let mut words = Vec::new();
        let mut rest = token;

        while !rest.is_empty() {
            let matched = rest
                .char_indices()
                .map(|(i, c)| i + c.len_utf8())
                .find(|&end| self.contains(&rest[..end]));

            match matched {
                Some(end) => {
                    words.push(&rest[..end]);
                    rest = &rest[end..];
                }
                None => {
                    tracing::debug!("No vocabulary word at '{}', dropping it", rest);
                    break;
                }
            }
        }

        words
    }
}

/// Join words with each first letter uppercased: `["red", "tiger"]` -> `RedTiger`.
pub fn capitalize_words(words: &[&str]) -> String {
    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
