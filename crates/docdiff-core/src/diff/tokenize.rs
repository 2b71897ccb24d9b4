//! Word-boundary tokenizer for the word differ.
//!
//! A token is a maximal run of alphanumeric characters, a maximal run of
//! whitespace, or a single punctuation/symbol character. Concatenating the
//! tokens always yields the input.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Word,
    Space,
    Other,
}

fn classify(c: char) -> CharClass {
    if c.is_alphanumeric() {
        CharClass::Word
    } else if c.is_whitespace() {
        CharClass::Space
    } else {
        CharClass::Other
    }
}

/// Split `text` into word, whitespace and punctuation tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<CharClass> = None;

    for (offset, c) in text.char_indices() {
        let class = classify(c);
        match current {
            Some(prev) if prev == class && class != CharClass::Other => {}
            Some(_) => {
                tokens.push(&text[start..offset]);
                start = offset;
            }
            None => {}
        }
        current = Some(class);
    }
    if start < text.len() {
        tokens.push(&text[start..]);
    }

    tokens
}
