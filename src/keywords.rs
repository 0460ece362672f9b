use crate::types::{Column, KeywordCount, View};
use std::collections::HashMap;

/// Keywords fed into a recommendation.
pub const RECOMMENDATION_TOP_K: usize = 5;
/// Vocabulary cap for the word-cloud table.
pub const WORDCLOUD_MAX_WORDS: usize = 150;
/// Shown instead of a keyword list when a category has no text.
pub const NO_KEYWORDS: &str = "tidak ada data spesifik";

/// Space-joined non-null text of `column`.
pub fn joined_text(view: &View<'_>, column: Column) -> String {
    view.values(column).collect::<Vec<_>>().join(" ")
}

/// Whitespace tokens ranked by frequency, ties in first-seen order.
/// `top_k = None` returns the whole vocabulary.
pub fn top_keywords(view: &View<'_>, column: Column, top_k: Option<usize>) -> Vec<KeywordCount> {
    let text = joined_text(view, column);
    rank_tokens(&text, top_k)
}

pub fn rank_tokens(text: &str, top_k: Option<usize>) -> Vec<KeywordCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for token in text.split_whitespace() {
        match index.get(token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token, counts.len());
                counts.push((token, 1));
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(top_k.unwrap_or(usize::MAX))
        .map(|(word, count)| KeywordCount {
            word: word.to_string(),
            count,
        })
        .collect()
}

/// Comma-joined keyword list for advisory text.
pub fn keyword_summary(keywords: &[String]) -> String {
    if keywords.is_empty() {
        NO_KEYWORDS.to_string()
    } else {
        keywords.join(", ")
    }
}
