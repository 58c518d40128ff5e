//! Profanity masking for chirp text.
//!
//! # Tokenization
//!
//! Text is split on runs of whitespace. Repeated, leading and trailing
//! whitespace collapse away and the cleaned text joins tokens with single
//! spaces. A token is masked only when the whole token matches a banned
//! word, ignoring case; `kerfuffle!` and `kerfuffles` are left as-is.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::domain::entities::{ChirpBody, CleanedChirp};

/// Replacement for every banned token.
pub const MASK: &str = "****";

/// Words masked in every chirp.
const DEFAULT_BANNED_WORDS: &[&str] = &["kerfuffle", "sharbert", "fornax"];

static BANNED_WORDS: LazyLock<BannedWords> =
    LazyLock::new(|| BannedWords::new(DEFAULT_BANNED_WORDS.iter().copied()));

/// Immutable set of lowercase banned words.
#[derive(Debug, Clone)]
pub struct BannedWords {
    words: HashSet<String>,
}

impl BannedWords {
    /// Builds a set from the given words, lowercasing each one.
    pub fn new<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            words: words.into_iter().map(str::to_lowercase).collect(),
        }
    }

    /// The process-wide default set, built on first use.
    pub fn global() -> &'static BannedWords {
        &BANNED_WORDS
    }

    /// Returns true if `token` is banned in any casing.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(&token.to_lowercase())
    }
}

/// Masks every banned whole-word token in `body`.
///
/// `body` has already passed the length check; see [`ChirpBody::parse`].
///
/// # Examples
///
/// ```
/// use chirpy::domain::entities::ChirpBody;
/// use chirpy::utils::profanity_filter::{BannedWords, sanitize};
///
/// let body = ChirpBody::parse("What a Kerfuffle").unwrap();
/// let cleaned = sanitize(&body, BannedWords::global());
/// assert_eq!(cleaned.as_str(), "What a ****");
/// ```
pub fn sanitize(body: &ChirpBody, banned: &BannedWords) -> CleanedChirp {
    let cleaned = body
        .as_str()
        .split_whitespace()
        .map(|token| if banned.contains(token) { MASK } else { token })
        .collect::<Vec<_>>()
        .join(" ");

    CleanedChirp::new(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(raw: &str) -> String {
        let body = ChirpBody::parse(raw).unwrap();
        sanitize(&body, BannedWords::global()).into_inner()
    }

    #[test]
    fn test_masks_banned_word() {
        assert_eq!(
            clean("This is a kerfuffle opinion I need to share with the world"),
            "This is a **** opinion I need to share with the world"
        );
    }

    #[test]
    fn test_masks_any_casing() {
        assert_eq!(
            clean("I hear Mastodon is better than Chirpy. sharbert I need to migrate"),
            "I hear Mastodon is better than Chirpy. **** I need to migrate"
        );
        assert_eq!(clean("KERFUFFLE FoRnAx ShArBeRt"), "**** **** ****");
    }

    #[test]
    fn test_masks_every_occurrence() {
        assert_eq!(
            clean("fornax and fornax and Fornax"),
            "**** and **** and ****"
        );
    }

    #[test]
    fn test_keeps_partial_matches() {
        assert_eq!(clean("Sharbert! kerfuffles fornaxes"), "Sharbert! kerfuffles fornaxes");
    }

    #[test]
    fn test_clean_text_unchanged() {
        let raw = "I had something interesting for breakfast";
        assert_eq!(clean(raw), raw);
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(clean("  hello world \n"), "hello world");
    }

    #[test]
    fn test_collapses_repeated_whitespace() {
        assert_eq!(clean("a  kerfuffle\t\tb"), "a **** b");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("     "), "");
    }

    #[test]
    fn test_custom_set_is_lowercased() {
        let banned = BannedWords::new(["Frick"]);
        let body = ChirpBody::parse("oh FRICK").unwrap();

        assert_eq!(sanitize(&body, &banned).as_str(), "oh ****");
        assert!(banned.contains("frick"));
    }

    #[test]
    fn test_global_set() {
        let banned = BannedWords::global();
        assert!(banned.contains("kerfuffle"));
        assert!(banned.contains("Sharbert"));
        assert!(banned.contains("FORNAX"));
        assert!(!banned.contains("fluffy"));
    }
}
