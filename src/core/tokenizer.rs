/// Tokenizer — splits raw corpus text into word tokens.

/// Characters removed from every token.
const STRIPPED: &[char] = &['(', ')'];

/// Byte order mark, which separates tokens even though Unicode does not
/// class it as whitespace.
const BYTE_ORDER_MARK: char = '\u{feff}';

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == BYTE_ORDER_MARK
}

/// Split text on whitespace and strip parentheses from each fragment.
///
/// Punctuation other than parentheses stays attached to its word, since the
/// renderer relies on it to find sentence ends. A fragment made only of
/// parentheses becomes an empty token and is kept.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(is_separator)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| fragment.replace(STRIPPED, ""))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_basic() {
        let tokens = tokenize("the cat sat. the dog ran.");
        assert_eq!(tokens, vec!["the", "cat", "sat.", "the", "dog", "ran."]);
    }

    #[test]
    fn tokenize_mixed_whitespace() {
        let tokens = tokenize("one\ttwo\r\nthree   four\n");
        assert_eq!(tokens, vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn tokenize_strips_parentheses() {
        let tokens = tokenize("(hello) wor(l)d fine)");
        assert_eq!(tokens, vec!["hello", "world", "fine"]);
    }

    #[test]
    fn tokenize_keeps_punctuation() {
        let tokens = tokenize("Wait, what?! \"Yes.\"");
        assert_eq!(tokens, vec!["Wait,", "what?!", "\"Yes.\""]);
    }

    #[test]
    fn tokenize_keeps_emptied_fragments() {
        let tokens = tokenize("a () b");
        assert_eq!(tokens, vec!["a", "", "b"]);
    }

    #[test]
    fn tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\t\r ").is_empty());
    }

    #[test]
    fn tokenize_splits_on_unicode_whitespace() {
        assert_eq!(tokenize("a\u{a0}b c"), vec!["a", "b", "c"]);
        assert_eq!(tokenize("one\u{2028}two\u{3000}three"), vec!["one", "two", "three"]);
    }

    #[test]
    fn tokenize_splits_on_form_feed_and_vertical_tab() {
        assert_eq!(tokenize("page\u{0C}break"), vec!["page", "break"]);
        assert_eq!(tokenize("up\u{0B}down"), vec!["up", "down"]);
    }

    #[test]
    fn tokenize_splits_on_byte_order_mark() {
        assert_eq!(tokenize("\u{feff}first word"), vec!["first", "word"]);
        assert_eq!(tokenize("end\u{feff}start"), vec!["end", "start"]);
    }
}
