//! Tag and keyword generation
//!
//! Tags are the first distinct content words of a text: lower-cased, stripped of
//! punctuation, with short tokens and common English function words removed.
//! Keywords are always the tags joined by single spaces.

use std::collections::HashSet;

/// Maximum number of tags kept per text
pub const MAX_TAGS: usize = 8;

/// Tokens with this many characters or fewer are dropped
const MIN_TOKEN_CHARS: usize = 3;

/// Common English function words that never become tags
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "from",
    "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does", "did",
    "will", "would", "could", "should", "may", "might", "can", "this", "that", "these", "those",
    "it", "its", "his", "her", "their",
];

/// Generates up to eight unique tags from free text
///
/// # Algorithm
///
/// 1. Lower-case the text
/// 2. Replace every character that is not a letter, digit, `_`, `-` or whitespace with a space
/// 3. Split on whitespace
/// 4. Drop tokens of three characters or fewer and stop words
/// 5. Keep the first occurrence of each token, up to eight
///
/// # Examples
///
/// ```
/// use museum_indexer::tags::generate_tags;
///
/// let tags = generate_tags("The Founding of the McLean County Historical Society, 1892");
/// assert_eq!(tags, vec!["founding", "mclean", "county", "historical", "society", "1892"]);
/// ```
pub fn generate_tags(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if is_token_char(c) { c } else { ' ' })
        .collect();

    let mut seen = HashSet::new();
    cleaned
        .split_whitespace()
        .filter(|word| word.chars().count() > MIN_TOKEN_CHARS)
        .filter(|word| !STOP_WORDS.contains(word))
        .filter(|word| seen.insert(*word))
        .take(MAX_TAGS)
        .map(str::to_string)
        .collect()
}

/// Generates the keyword string for a text: its tags joined by single spaces
pub fn generate_keywords(text: &str) -> String {
    keywords_from_tags(&generate_tags(text))
}

/// Joins already generated tags into a keyword string
pub fn keywords_from_tags(tags: &[String]) -> String {
    tags.join(" ")
}

fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-' || c.is_whitespace()
}
