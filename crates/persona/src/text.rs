//! Markdown stripping and final output cleanup

use regex::Regex;

/// Strip markdown punctuation from raw post text
///
/// Removes emphasis markers, rewrites links to their visible text, and
/// drops leading heading/quote/bullet markers per line. Idempotent.
pub fn remove_markdown(text: &str) -> String {
    let emphasis = Regex::new(r"(\*\*|\*|__|`)").unwrap();
    let link = Regex::new(r"\[([^\]]+)\]\([^\)]+\)").unwrap();
    let heading = Regex::new(r"(?m)^#{1,6}\s+").unwrap();
    let quote = Regex::new(r"(?m)^>\s+").unwrap();
    let bullet = Regex::new(r"(?m)^[\-\+\*]\s+").unwrap();

    // Links before emphasis, so `[*text*](url)` loses its URL first
    let text = link.replace_all(text, "$1");
    let text = emphasis.replace_all(&text, "");
    let text = heading.replace_all(&text, "");
    let text = quote.replace_all(&text, "");
    let text = bullet.replace_all(&text, "");
    text.trim().to_string()
}

/// Clean a final generated post for printing
///
/// Drops stray emphasis characters and straight quotes the model tends to
/// leave in, then trims.
pub fn clean_text(text: &str) -> String {
    let leftovers = Regex::new(r#"[*_`'"]+"#).unwrap();
    leftovers.replace_all(text.trim(), "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_emphasis_markers() {
        let input = "This is **bold**, *italic*, __underlined__ and `code`.";
        let output = remove_markdown(input);
        assert_eq!(output, "This is bold, italic, underlined and code.");
        assert!(!output.contains('*'));
        assert!(!output.contains('`'));
    }

    #[test]
    fn test_rewrites_links_to_visible_text() {
        let input = "Read [my article](https://example.com/a?b=c) today.";
        assert_eq!(remove_markdown(input), "Read my article today.");
    }

    #[test]
    fn test_strips_line_prefixes() {
        let input = "## Heading\n> quoted wisdom\n- first item\n+ second item\n* third item";
        let output = remove_markdown(input);
        assert_eq!(
            output,
            "Heading\nquoted wisdom\nfirst item\nsecond item\nthird item"
        );
    }

    #[test]
    fn test_idempotent() {
        let input = "# Title\nSome **bold** text with [a link](http://x.y) and *emphasis*.\n> quote";
        let once = remove_markdown(input);
        let twice = remove_markdown(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(remove_markdown(""), "");
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_clean_text_drops_quotes_and_emphasis() {
        let input = "  It's a **bold** _italic_ \"post\" with `code`.  ";
        let output = clean_text(input);
        for forbidden in ['*', '_', '`', '\'', '"'] {
            assert!(!output.contains(forbidden), "found {:?}", forbidden);
        }
        assert_eq!(output, "Its a bold italic post with code.");
    }
}
