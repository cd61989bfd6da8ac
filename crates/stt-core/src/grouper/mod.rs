//! Common-prefix comment grouper.
//!
//! Learns activity comments into a [`TokenTrie`] and answers two read-only
//! queries against it: splitting a comment into breadcrumb groups, and
//! suggesting continuations for a partially typed comment.

#[cfg(test)]
mod proptests;

use tracing::{debug, debug_span};

use crate::expansion::ExpansionProvider;
use crate::group::{Group, GroupKind, ItemGrouper};
use crate::settings::Settings;
use crate::text::{split_partial, tokens, Token};
use crate::trie::{NodeId, TokenTrie};

#[derive(Debug, Default, Clone)]
pub struct CommonPrefixGrouper {
    trie: TokenTrie,
}

impl CommonPrefixGrouper {
    pub fn new() -> Self {
        Self::default()
    }

    /// A grouper that already knows the given baseline comments.
    pub fn with_baseline<S: AsRef<str>>(baseline: &[S]) -> Self {
        let mut grouper = Self::new();
        grouper.learn_all(baseline);
        grouper
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_baseline(&settings.grouper.baseline)
    }

    /// Learn one comment. Blank comments are ignored and learning the same
    /// comment twice has no further effect.
    pub fn learn_line(&mut self, comment: &str) {
        self.trie.insert(comment);
    }

    /// Learn a stream of comments, returning how many were non-blank.
    pub fn learn_all<I>(&mut self, comments: I) -> usize
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let _span = debug_span!("learn_all").entered();
        let mut learned = 0;
        for comment in comments {
            if self.trie.insert(comment.as_ref()) {
                learned += 1;
            }
        }
        debug!(learned, node_count = self.trie.node_count());
        learned
    }

    /// Split `text` into groups.
    ///
    /// Tokens are consumed along the trie; a group ends at every node where a
    /// learned comment ended or where learned comments branch. Once the text
    /// leaves the trie, everything left becomes one [`GroupKind::Remainder`].
    /// Text without tokens comes back verbatim as a single remainder.
    pub fn groups_of(&self, text: &str) -> Vec<Group> {
        let _span = debug_span!("groups_of", len = text.len()).entered();
        let all: Vec<Token<'_>> = tokens(text).collect();
        if all.is_empty() {
            return vec![Group::new(GroupKind::Remainder, text, 0..text.len())];
        }
        let mut groups = Vec::new();
        let mut node = NodeId::ROOT;
        let mut pending = 0;

        for (i, token) in all.iter().enumerate() {
            let Some(next) = self.trie.child(node, token.text) else {
                groups.extend(Group::from_tokens(GroupKind::Match, &all[pending..i]));
                groups.extend(Group::from_tokens(GroupKind::Remainder, &all[i..]));
                debug!(group_count = groups.len(), diverged_at = i);
                return groups;
            };
            node = next;
            if self.trie.is_cut_point(node) {
                groups.extend(Group::from_tokens(GroupKind::Match, &all[pending..=i]));
                pending = i + 1;
            }
        }
        groups.extend(Group::from_tokens(GroupKind::Match, &all[pending..]));
        debug!(group_count = groups.len());
        groups
    }

    /// Group contents of `text`, in order.
    pub fn get_groups_of(&self, text: &str) -> Vec<String> {
        self.group_strings(text)
    }

    /// Continuations for `partial`, one per learned token that starts with
    /// the partial last word, each extended up to the next cut point.
    pub fn get_possible_expansions(&self, partial: &str) -> Vec<String> {
        let _span = debug_span!("possible_expansions", len = partial.len()).entered();
        let (complete, filter) = split_partial(partial);

        let mut node = NodeId::ROOT;
        for token in &complete {
            match self.trie.child(node, token.text) {
                Some(next) => node = next,
                None => {
                    debug!(unknown = token.text, "no expansions");
                    return Vec::new();
                }
            }
        }

        let expansions: Vec<String> = self
            .trie
            .children_with_prefix(node, filter)
            .map(|(candidate, child)| {
                let mut expansion = candidate[filter.len()..].to_string();
                for (token, _) in self.trie.unambiguous_run(child) {
                    expansion.push(' ');
                    expansion.push_str(token);
                }
                expansion
            })
            .collect();
        debug!(expansion_count = expansions.len());
        expansions
    }

    pub fn trie(&self) -> &TokenTrie {
        &self.trie
    }

    pub fn node_count(&self) -> usize {
        self.trie.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}

impl ItemGrouper for CommonPrefixGrouper {
    fn groups_of(&self, text: &str) -> Vec<Group> {
        CommonPrefixGrouper::groups_of(self, text)
    }
}

impl ExpansionProvider for CommonPrefixGrouper {
    fn possible_expansions(&self, partial: &str) -> Vec<String> {
        self.get_possible_expansions(partial)
    }
}
