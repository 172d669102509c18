//! Text manipulation utilities for working with script source.

/// Check if a character is considered part of a word (identifier).
///
/// Uses Unicode Standard Annex #31 rules for identifier characters.
#[inline]
pub fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Check if `text` is a non-empty run of word characters.
pub fn is_identifier(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_word_character)
}

/// Byte index where the run of word characters ending `text` starts.
///
/// Returns `text.len()` when `text` does not end in a word character.
pub fn trailing_word_start(text: &str) -> usize {
    text.char_indices()
        .rev()
        .take_while(|(_, c)| is_word_character(*c))
        .last()
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

/// The identifier being typed at the end of `text` (possibly empty).
///
/// # Example
/// ```
/// use kagscript::base::text_utils::trailing_word;
///
/// assert_eq!(trailing_word("blob.getPos"), "getPos");
/// assert_eq!(trailing_word("blob."), "");
/// ```
pub fn trailing_word(text: &str) -> &str {
    &text[trailing_word_start(text)..]
}
