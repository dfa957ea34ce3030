/// Rendering — sentence capitalization, terminal punctuation, and joining.

/// Token endings after which the next token starts a sentence.
///
/// The last entry is how a UTF-8 closing curly quote reads when decoded as
/// Windows-1252 and then truncated; training texts carry it verbatim.
const SENTENCE_BREAKS: &[&str] = &[".", "!", "?", "\"", "\u{e2}\u{20ac}"];

/// Endings that already close the text.
const TERMINATORS: &[char] = &['.', '!', '?'];

/// Appended when the text stops mid-sentence.
const TRAILING_ELLIPSIS: &str = "...";

/// Capitalize sentence starts, close the final sentence, and join the tokens
/// with single spaces.
pub fn render(mut tokens: Vec<String>) -> String {
    for i in 0..tokens.len() {
        if i == 0 || ends_sentence(&tokens[i - 1]) {
            tokens[i] = capitalize_first(&tokens[i]);
        }
    }

    if let Some(last) = tokens.last_mut() {
        if !last.ends_with(TERMINATORS) {
            last.push_str(TRAILING_ELLIPSIS);
        }
    }

    tokens.join(" ")
}

/// Whether the token closes a sentence (or a quotation).
pub fn ends_sentence(token: &str) -> bool {
    SENTENCE_BREAKS.iter().any(|end| token.ends_with(end))
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
