//! C API of the grouping engine.
//!
//! Every function returns an `STT_*` status; lists come back through an
//! out-parameter that the caller releases with [`stt_string_list_free`].

use std::ffi::{c_char, CStr, CString};
use std::path::Path;
use std::ptr;

use tracing::warn;

pub mod grouper;


pub use grouper::*;

// --- Status codes ---

pub const STT_OK: i32 = 0;
/// A required pointer was null or a string was not valid UTF-8.
pub const STT_ERR_INVALID_ARGUMENT: i32 = -1;
/// The grouper lock was poisoned.
pub const STT_ERR_INTERNAL: i32 = -2;
pub const STT_ERR_SETTINGS: i32 = -3;

impl crate::EngineError {
    /// Status code reported across the C boundary.
    pub fn status(&self) -> i32 {
        match self {
            crate::EngineError::Settings(_) => STT_ERR_SETTINGS,
            crate::EngineError::Internal(_) => STT_ERR_INTERNAL,
        }
    }
}

// --- Handle helpers ---

/// Box `value` and hand ownership to the C caller as a handle.
pub(crate) fn owned_new<T>(value: T) -> *mut T {
    Box::into_raw(Box::new(value))
}

/// Reclaim a handle from [`owned_new`]. Null is ignored.
///
/// # Safety
/// `ptr` is null or an unfreed handle from [`owned_new`].
pub(crate) unsafe fn owned_drop<T>(ptr: *mut T) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Borrow a NUL-terminated UTF-8 argument. `None` for null or non-UTF-8.
pub(crate) unsafe fn cptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

// --- Argument guards ---

/// Check the pointer arguments of an `extern "C"` function, binding each one
/// as a safe value. The first failing check returns `$on_err` from the caller.
///
/// - `str: name = ptr` binds a `&str` (null or non-UTF-8 fails)
/// - `ref: name = ptr` binds a `&T` (null fails)
/// - `nonnull: ptr` only checks for null
///
/// ```ignore
/// ffi_guard!(STT_ERR_INVALID_ARGUMENT;
///     ref: shared = grouper,
///     str: text   = text,
/// );
/// ```
macro_rules! ffi_guard {
    ($on_err:expr ; ) => {};

    ($on_err:expr ; str: $name:ident = $ptr:expr , $($rest:tt)*) => {
        let Some($name) = (unsafe { $crate::ffi::cptr_to_str($ptr) }) else {
            return $on_err;
        };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };

    ($on_err:expr ; ref: $name:ident = $ptr:expr , $($rest:tt)*) => {
        if $ptr.is_null() {
            return $on_err;
        }
        let $name = unsafe { &*$ptr };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };

    ($on_err:expr ; nonnull: $ptr:expr , $($rest:tt)*) => {
        if $ptr.is_null() {
            return $on_err;
        }
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };
}

/// `extern "C" fn $fn_name(handle)` releasing a handle of type `$T`.
macro_rules! ffi_close {
    ($fn_name:ident, $T:ty) => {
        #[no_mangle]
        pub extern "C" fn $fn_name(ptr: *mut $T) {
            unsafe { $crate::ffi::owned_drop(ptr) };
        }
    };
}

pub(crate) use ffi_close;
pub(crate) use ffi_guard;

// --- String lists ---

/// Backing storage of an [`SttStringList`]: the pointer array plus the
/// `CString`s it points into.
pub(crate) struct OwnedVec<T> {
    pub(crate) items: Vec<T>,
    pub(crate) _strings: Vec<CString>,
}

impl<T> OwnedVec<T> {
    /// Returns `(items, len, owner)`; all null for an empty list.
    pub(crate) fn pack(items: Vec<T>, strings: Vec<CString>) -> (*const T, u32, *mut Self) {
        if items.is_empty() {
            return (ptr::null(), 0, ptr::null_mut());
        }
        let owner = Box::into_raw(Box::new(Self {
            items,
            _strings: strings,
        }));
        // the Vec's heap buffer does not move with the box
        let items = unsafe { &(*owner).items };
        (items.as_ptr(), items.len() as u32, owner)
    }
}

/// A list of NUL-terminated UTF-8 strings owned by the library.
/// Release with [`stt_string_list_free`].
#[repr(C)]
pub struct SttStringList {
    pub items: *const *const c_char,
    pub len: u32,
    _owned: *mut OwnedVec<*const c_char>,
}

impl SttStringList {
    pub(crate) fn empty() -> Self {
        Self {
            items: ptr::null(),
            len: 0,
            _owned: ptr::null_mut(),
        }
    }

    /// Strings containing an interior NUL cannot cross the boundary and are skipped.
    pub(crate) fn pack(strings: Vec<String>) -> Self {
        let mut owned_strings = Vec::with_capacity(strings.len());
        let mut ptrs = Vec::with_capacity(strings.len());
        for s in strings {
            let Ok(cs) = CString::new(s) else {
                continue;
            };
            ptrs.push(cs.as_ptr());
            owned_strings.push(cs);
        }
        let (items, len, owned) = OwnedVec::pack(ptrs, owned_strings);
        Self {
            items,
            len,
            _owned: owned,
        }
    }
}

#[no_mangle]
pub extern "C" fn stt_string_list_free(list: SttStringList) {
    unsafe { owned_drop(list._owned) };
}

// --- Top-level FFI functions ---

#[no_mangle]
pub extern "C" fn stt_engine_version() -> *const c_char {
    c"0.1.0".as_ptr()
}

#[no_mangle]
#[allow(clippy::unused_unit)]
pub extern "C" fn stt_trace_init(log_dir: *const c_char) {
    ffi_guard!(();
        str: dir_str = log_dir,
    );
    crate::trace_init::init_tracing(Path::new(dir_str));
}

/// Install a custom settings TOML. Must run before the first grouper is
/// created from settings.
#[no_mangle]
pub extern "C" fn stt_settings_init(toml_content: *const c_char) -> i32 {
    ffi_guard!(STT_ERR_INVALID_ARGUMENT;
        str: content = toml_content,
    );
    match stt_core::settings::init_custom(content.to_string()) {
        Ok(()) => STT_OK,
        Err(e) => {
            warn!("custom settings rejected: {e}");
            crate::EngineError::from(e).status()
        }
    }
}
