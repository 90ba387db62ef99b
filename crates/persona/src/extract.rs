//! Content-point extraction heuristic
//!
//! Picks the first couple of substantial lines of a post as a
//! pipe-separated label for the few-shot compiler. A convenience, not a
//! summarizer; the thresholds are arbitrary tunables.

/// Minimum line length to count as substantial
const MIN_LINE_CHARS: usize = 20;

/// How many lines to keep
const MAX_POINTS: usize = 2;

/// Truncation length per point
const MAX_POINT_CHARS: usize = 80;

/// Extract a pipe-delimited content-point string from normalized post text
///
/// Falls back to a templated string built from topic and post_type when
/// the post has no qualifying lines.
pub fn extract_content_points(post_text: &str, topic: &str, post_type: &str) -> String {
    let mut key_sentences = Vec::new();

    for line in post_text.lines() {
        let line = line.trim();
        if !line.is_empty() && line.chars().count() > MIN_LINE_CHARS {
            key_sentences.push(truncate_chars(line, MAX_POINT_CHARS));
            if key_sentences.len() >= MAX_POINTS {
                break;
            }
        }
    }

    if key_sentences.is_empty() {
        format!("{} insights | {} perspective | key learnings", topic, post_type)
    } else {
        key_sentences.join(" | ")
    }
}

/// Truncate to a character count without splitting a code point
fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
