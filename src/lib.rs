// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

pub mod ffi;
mod shared;
pub mod trace_init;

pub use shared::{EngineError, SharedGrouper};
pub use stt_core::{
    collect_expansions, common_expansion, settings, CommonPrefixGrouper, ExpansionProvider,
    Group, GroupKind, ItemGrouper, QuotedGrouper,
};
