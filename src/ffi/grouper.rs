use std::ffi::c_char;

use stt_core::settings::settings;

use super::{ffi_close, ffi_guard, owned_new, SttStringList, STT_ERR_INVALID_ARGUMENT, STT_OK};
use crate::SharedGrouper;

// --- Grouper FFI ---

#[no_mangle]
pub extern "C" fn stt_grouper_new() -> *mut SharedGrouper {
    owned_new(SharedGrouper::new())
}

/// A grouper seeded with the configured baseline comments.
#[no_mangle]
pub extern "C" fn stt_grouper_with_settings() -> *mut SharedGrouper {
    owned_new(SharedGrouper::from_settings(settings()))
}

ffi_close!(stt_grouper_close, SharedGrouper);

#[no_mangle]
pub extern "C" fn stt_grouper_learn_line(grouper: *const SharedGrouper, line: *const c_char) -> i32 {
    ffi_guard!(STT_ERR_INVALID_ARGUMENT;
        ref: shared = grouper,
        str: line   = line,
    );
    match shared.learn_line(line) {
        Ok(()) => STT_OK,
        Err(e) => e.status(),
    }
}

/// Fill `out` with the groups of `text`. `out` is always written (empty on
/// error) unless it is null.
#[no_mangle]
pub extern "C" fn stt_grouper_groups_of(
    grouper: *const SharedGrouper,
    text: *const c_char,
    out: *mut SttStringList,
) -> i32 {
    ffi_guard!(STT_ERR_INVALID_ARGUMENT; nonnull: out,);
    unsafe { out.write(SttStringList::empty()) };
    ffi_guard!(STT_ERR_INVALID_ARGUMENT;
        ref: shared = grouper,
        str: text   = text,
    );
    match shared.get_groups_of(text) {
        Ok(groups) => {
            unsafe { out.write(SttStringList::pack(groups)) };
            STT_OK
        }
        Err(e) => e.status(),
    }
}

/// Fill `out` with at most `expansion.max_results` continuations of `partial`.
/// No match is `STT_OK` with an empty list.
#[no_mangle]
pub extern "C" fn stt_grouper_expansions(
    grouper: *const SharedGrouper,
    partial: *const c_char,
    out: *mut SttStringList,
) -> i32 {
    ffi_guard!(STT_ERR_INVALID_ARGUMENT; nonnull: out,);
    unsafe { out.write(SttStringList::empty()) };
    ffi_guard!(STT_ERR_INVALID_ARGUMENT;
        ref: shared  = grouper,
        str: partial = partial,
    );
    match shared.get_possible_expansions(partial) {
        Ok(mut expansions) => {
            expansions.truncate(settings().expansion.max_results);
            unsafe { out.write(SttStringList::pack(expansions)) };
            STT_OK
        }
        Err(e) => e.status(),
    }
}
