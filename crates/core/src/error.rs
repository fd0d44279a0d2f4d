//! Runtime Error Handling
//!
//! Two layers:
//!
//! - [`PreludeError`]: the typed error returned by every fallible support-table
//!   operation on the Rust side.
//! - A thread-local error slot so the `extern "C"` exports can report failures
//!   without unwinding across the FFI boundary.
//!
//! # Usage
//!
//! FFI functions record an error instead of panicking:
//! ```ignore
//! match div_i(a, b) {
//!     Ok(q) => q,
//!     Err(e) => {
//!         set_runtime_error(e.to_string());
//!         0
//!     }
//! }
//! ```
//!
//! Callers can check for errors:
//! ```ignore
//! if skol_has_error() {
//!     let error = skol_take_error();
//!     // Handle error...
//! }
//! ```

use std::cell::RefCell;
use std::ffi::{CString, c_char};
use std::fmt;
use std::ptr;

/// Result alias used throughout the support table
pub type Result<T> = std::result::Result<T, PreludeError>;

/// Failure of a support-table operation.
///
/// Each variant corresponds to an error the underlying native operation
/// raises; the table adds no recovery of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreludeError {
    /// Integer division/modulo or complex division by zero
    DivisionByZero { op: &'static str },
    /// Index normalization over an empty text cannot terminate
    EmptyText { op: &'static str },
    /// Text is not a decimal integer literal that fits in an `i64`
    InvalidInteger { text: String },
    /// Text is neither `true` nor `false`
    InvalidBool { text: String },
    /// Byte 128-255 is not a standalone UTF-8 sequence
    InvalidUtf8Byte { byte: u8 },
    /// Character code received over FFI is outside 0-255
    ByteOutOfRange { value: i64 },
    /// Ordering requested on an unordered kind (complex numbers)
    Unordered { op: &'static str },
    /// Modulo requested on complex numbers
    NoModulo { op: &'static str },
    /// Integer power with a negative exponent
    NegativeExponent { exponent: i64 },
    /// Null text pointer received over FFI
    NullPointer { op: &'static str },
    /// Text received over FFI is not valid UTF-8
    InvalidText { op: &'static str },
    /// Text result contains a NUL byte and cannot cross the FFI boundary
    InteriorNul { op: &'static str },
}

impl fmt::Display for PreludeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreludeError::DivisionByZero { op } => write!(f, "{}: division by zero", op),
            PreludeError::EmptyText { op } => {
                write!(f, "{}: cannot normalize an index into an empty string", op)
            }
            PreludeError::InvalidInteger { text } => {
                write!(f, "ctoi: invalid integer literal {:?}", text)
            }
            PreludeError::InvalidBool { text } => {
                write!(f, "parse_bool: invalid boolean literal {:?}", text)
            }
            PreludeError::InvalidUtf8Byte { byte } => write!(
                f,
                "char_append: byte {} is not a standalone UTF-8 character",
                byte
            ),
            PreludeError::ByteOutOfRange { value } => write!(
                f,
                "char_append: character code {} is outside the byte range 0-255",
                value
            ),
            PreludeError::Unordered { op } => {
                write!(f, "{}: complex numbers have no ordering", op)
            }
            PreludeError::NoModulo { op } => {
                write!(f, "{}: complex numbers have no modulo", op)
            }
            PreludeError::NegativeExponent { exponent } => {
                write!(f, "pow_i: negative exponent {}", exponent)
            }
            PreludeError::NullPointer { op } => write!(f, "{}: null string pointer", op),
            PreludeError::InvalidText { op } => write!(f, "{}: string is not valid UTF-8", op),
            PreludeError::InteriorNul { op } => {
                write!(f, "{}: result contains a NUL byte", op)
            }
        }
    }
}

impl std::error::Error for PreludeError {}

thread_local! {
    /// Thread-local storage for the last runtime error message
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };

    /// Cached C string for FFI access (avoids allocation on every get)
    static ERROR_CSTRING: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Set the last runtime error message
///
/// Note: This clears any cached CString to prevent stale pointer access.
pub fn set_runtime_error(msg: impl Into<String>) {
    ERROR_CSTRING.with(|cs| *cs.borrow_mut() = None);
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = Some(msg.into());
    });
}

/// Take (and clear) the last runtime error message
pub fn take_runtime_error() -> Option<String> {
    LAST_ERROR.with(|e| e.borrow_mut().take())
}

/// Check if there's a pending runtime error
pub fn has_runtime_error() -> bool {
    LAST_ERROR.with(|e| e.borrow().is_some())
}

/// Clear any pending runtime error
pub fn clear_runtime_error() {
    LAST_ERROR.with(|e| *e.borrow_mut() = None);
    ERROR_CSTRING.with(|e| *e.borrow_mut() = None);
}

/// Cache `msg` as a C string and hand out a pointer into the cache
fn cache_cstring(msg: &str) -> *const c_char {
    ERROR_CSTRING.with(|cs| {
        // Interior NULs would truncate the message; replace them instead
        let safe_msg: String = msg
            .chars()
            .map(|c| if c == '\0' { '?' } else { c })
            .collect();
        match CString::new(safe_msg) {
            Ok(cstring) => {
                let ptr = cstring.as_ptr();
                *cs.borrow_mut() = Some(cstring);
                ptr
            }
            Err(_) => ptr::null(),
        }
    })
}

// FFI-safe error access functions

/// Check if there's a pending runtime error (FFI-safe)
#[unsafe(no_mangle)]
pub extern "C" fn skol_has_error() -> bool {
    has_runtime_error()
}

/// Get the last error message as a C string pointer (FFI-safe)
///
/// Returns null if no error is pending.
///
/// # WARNING: Pointer Lifetime
/// The returned pointer is only valid until the next call to `set_runtime_error`,
/// `get_error`, `take_error`, or `clear_error`. Callers must copy the string
/// immediately if they need to retain it.
#[unsafe(no_mangle)]
pub extern "C" fn skol_get_error() -> *const c_char {
    LAST_ERROR.with(|e| match &*e.borrow() {
        Some(msg) => cache_cstring(msg),
        None => ptr::null(),
    })
}

/// Take (and clear) the last error, returning it as a C string (FFI-safe)
///
/// Returns null if no error is pending. Same pointer lifetime rules as
/// [`skol_get_error`].
#[unsafe(no_mangle)]
pub extern "C" fn skol_take_error() -> *const c_char {
    match take_runtime_error() {
        Some(msg) => cache_cstring(&msg),
        None => ptr::null(),
    }
}

/// Clear any pending error (FFI-safe)
#[unsafe(no_mangle)]
pub extern "C" fn skol_clear_error() {
    clear_runtime_error();
}
