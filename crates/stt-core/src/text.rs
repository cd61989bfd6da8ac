//! Whitespace tokenization shared by learning and both query paths.
//!
//! A token is a maximal run of non-whitespace characters. Runs of whitespace
//! collapse into one separator and leading/trailing whitespace is dropped.

/// A token together with its byte offset in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
}

impl Token<'_> {
    /// Byte offset one past the last character of the token.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.text[self.pos..];
        let start = self.pos + rest.find(|c: char| !c.is_whitespace())?;
        let len = self.text[start..]
            .find(char::is_whitespace)
            .unwrap_or(self.text.len() - start);
        self.pos = start + len;
        Some(Token {
            text: &self.text[start..self.pos],
            start,
        })
    }
}

pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens { text, pos: 0 }
}

/// Split a partially typed comment into its complete tokens and the trailing
/// filter token.
///
/// Without trailing whitespace the last token may still be incomplete and
/// becomes the filter. With trailing whitespace (or empty input) every token
/// is complete and the filter is `""`.
pub fn split_partial(partial: &str) -> (Vec<Token<'_>>, &str) {
    let mut complete: Vec<Token<'_>> = tokens(partial).collect();
    let open_ended = partial
        .chars()
        .next_back()
        .is_some_and(|c| !c.is_whitespace());
    let filter = if open_ended {
        complete.pop().map_or("", |t| t.text)
    } else {
        ""
    };
    (complete, filter)
}
