//! Breadcrumb groups produced by an [`ItemGrouper`].

use std::ops::Range;

use serde::Serialize;

use crate::text::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    /// Text that followed learned structure up to a cut point.
    Match,
    /// Trailing text that was taken verbatim.
    Remainder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub kind: GroupKind,
    /// Tokens of the group joined by single spaces.
    pub content: String,
    /// Byte range of the group in the text it was extracted from.
    pub range: Range<usize>,
}

impl Group {
    pub fn new(kind: GroupKind, content: impl Into<String>, range: Range<usize>) -> Self {
        Self {
            kind,
            content: content.into(),
            range,
        }
    }

    /// Build a group spanning a contiguous run of tokens. `None` for an empty run.
    pub(crate) fn from_tokens(kind: GroupKind, run: &[Token<'_>]) -> Option<Self> {
        let (first, last) = (run.first()?, run.last()?);
        let content = run
            .iter()
            .map(|t| t.text)
            .collect::<Vec<_>>()
            .join(" ");
        Some(Self::new(kind, content, first.start..last.end()))
    }
}

/// Splits an activity comment into display groups.
pub trait ItemGrouper {
    fn groups_of(&self, text: &str) -> Vec<Group>;

    /// Group contents only, in order.
    fn group_strings(&self, text: &str) -> Vec<String> {
        self.groups_of(text).into_iter().map(|g| g.content).collect()
    }
}
