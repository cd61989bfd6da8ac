pub mod expansion;
pub mod group;
pub mod grouper;
pub mod quoted;
pub mod settings;
pub mod text;
pub mod trie;

pub use expansion::{collect_expansions, common_expansion, ExpansionProvider};
pub use group::{Group, GroupKind, ItemGrouper};
pub use grouper::CommonPrefixGrouper;
pub use quoted::QuotedGrouper;
