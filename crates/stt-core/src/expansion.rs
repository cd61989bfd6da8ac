//! Autocomplete plumbing shared by all expansion sources.

/// Suggests continuations for a partially typed comment.
pub trait ExpansionProvider {
    /// Strings that may be appended to `partial`. Order is not significant.
    fn possible_expansions(&self, partial: &str) -> Vec<String>;
}

/// Query every provider in turn and concatenate their suggestions.
pub fn collect_expansions(providers: &[&dyn ExpansionProvider], partial: &str) -> Vec<String> {
    providers
        .iter()
        .flat_map(|p| p.possible_expansions(partial))
        .collect()
}

/// Longest common prefix of all expansions, cut on a char boundary.
///
/// This is the text that can be inserted without choosing between
/// suggestions. Returns `None` when there is nothing to insert.
pub fn common_expansion<S: AsRef<str>>(expansions: &[S]) -> Option<String> {
    let (first, rest) = expansions.split_first()?;
    let mut common = first.as_ref();
    for other in rest {
        let len = common
            .char_indices()
            .zip(other.as_ref().chars())
            .take_while(|((_, a), b)| a == b)
            .last()
            .map_or(0, |((i, c), _)| i + c.len_utf8());
        common = &common[..len];
        if common.is_empty() {
            return None;
        }
    }
    (!common.is_empty()).then(|| common.to_string())
}
