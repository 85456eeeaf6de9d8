//! Normalization applied to the word-cloud corpus. Scoring never sees it.

use regex::Regex;
use std::sync::LazyLock;

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+").expect("url pattern is valid"));
static MENTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\w+").expect("mention pattern is valid"));
static HASHTAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("hashtag pattern is valid"));
static PUNCTUATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("punctuation pattern is valid"));

/// Strips URLs, mentions, hashtags and then punctuation, in that order.
/// Mentions and hashtags have to go before punctuation or their markers
/// would already be gone.
pub fn clean(text: &str) -> String {
    let text = URL_REGEX.replace_all(text, "");
    let text = MENTION_REGEX.replace_all(&text, "");
    let text = HASHTAG_REGEX.replace_all(&text, "");
    let text = PUNCTUATION_REGEX.replace_all(&text, "");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_urls_mentions_and_hashtags() {
        let cleaned = clean("Thanks @support! See https://example.com/help?id=3 #blessed");
        assert_eq!(cleaned, "Thanks  See");
    }

    #[test]
    fn removes_punctuation_but_keeps_words() {
        assert_eq!(clean("  Great, product... 10/10!  "), "Great product 1010");
    }

    #[test]
    fn keeps_accented_letters() {
        assert_eq!(clean("Très bien, merci!"), "Très bien merci");
    }

    #[test]
    fn hashtag_words_are_removed_whole() {
        // Stripping punctuation first would leave "sale" behind.
        assert_eq!(clean("#sale today"), "today");
        assert_eq!(clean("@bob hi"), "hi");
    }

    #[test]
    fn only_noise_yields_empty() {
        assert_eq!(clean("http://a.b @x #y !!!"), "");
    }

    #[test]
    fn is_idempotent() {
        let samples = [
            "I love this product! It is amazing.",
            "@a #b http://c d, e; f",
            "plain words only",
            "",
        ];
        for sample in samples {
            let once = clean(sample);
            assert_eq!(clean(&once), once);
        }
    }
}
