//! String operations for Skol
//!
//! # Design Decision: bytes vs code points
//!
//! `char_at` (and `byte_len`) work on the UTF-8 *bytes* of a string, while
//! `substr` and `str_len` work on *code points*. Generated code depends on
//! both views, so they are kept apart:
//!
//! - `char_at("héllo", 1)` → 0xC3, the first byte of `é`
//! - `substr("héllo", 1, 2)` → "é"
//! - `str_len("héllo")` → 5, `byte_len("héllo")` → 6
//!
//! Indices wrap around (see [`crate::index`]); an empty string has nothing to
//! wrap into and fails with `EmptyText`.

use crate::fault::{settle, settle_text, text_arg};
use crate::index::{wrap_bound, wrap_index};
use libc::c_char;
use skol_core::{PreludeError, Result};

/// Concatenate two strings
pub fn concat(a: &str, b: &str) -> String {
    let mut result = String::with_capacity(a.len() + b.len());
    result.push_str(a);
    result.push_str(b);
    result
}

/// Byte of the UTF-8 encoding of `s` at wrapped index `i`
///
/// # Errors
/// `EmptyText` when `s` is empty
pub fn char_at(s: &str, i: i64) -> Result<u8> {
    let bytes = s.as_bytes();
    let idx = wrap_index(i, bytes.len(), "char_at")?;
    Ok(bytes[idx])
}

/// Code-point slice `[a, b)` after wrapping each bound independently
///
/// Returns an empty string when the normalized `a >= b`.
///
/// # Errors
/// `EmptyText` when `s` is empty and a bound is non-zero
pub fn substr(s: &str, a: i64, b: i64) -> Result<String> {
    let len = s.chars().count();
    let start = wrap_bound(a, len, "substr")?;
    let end = wrap_bound(b, len, "substr")?;
    if start >= end {
        return Ok(String::new());
    }
    Ok(s.chars().skip(start).take(end - start).collect())
}

/// Append the single-byte character `c` to `s`
///
/// # Errors
/// `InvalidUtf8Byte` for `c` in 128-255, which is not a standalone UTF-8 sequence
pub fn char_append(s: &str, c: u8) -> Result<String> {
    if !c.is_ascii() {
        return Err(PreludeError::InvalidUtf8Byte { byte: c });
    }
    let mut result = String::with_capacity(s.len() + 1);
    result.push_str(s);
    result.push(c as char);
    Ok(result)
}

/// Length in Unicode code points
///
/// Note: This returns character count, not byte count.
/// For the UTF-8 byte length (the period of `char_at`), use [`byte_len`].
pub fn str_len(s: &str) -> i64 {
    s.chars().count() as i64
}

/// Length of the UTF-8 encoding in bytes
pub fn byte_len(s: &str) -> i64 {
    s.len() as i64
}

/// Parse a decimal integer literal: optional surrounding whitespace,
/// optional `+`/`-` sign, decimal digits
///
/// # Errors
/// `InvalidInteger` for anything else, or a value outside `i64`
pub fn ctoi(s: &str) -> Result<i64> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| PreludeError::InvalidInteger {
            text: s.to_string(),
        })
}

/// Parse `true` / `false` (surrounding whitespace ignored)
///
/// # Errors
/// `InvalidBool` for anything else
pub fn parse_bool(s: &str) -> Result<bool> {
    match s.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(PreludeError::InvalidBool {
            text: s.to_string(),
        }),
    }
}

// =============================================================================
// C ABI exports
//
// Text arguments are NUL-terminated UTF-8. Text results are owned by the
// caller and released with `skol_string_free`; they are null on fault.
// =============================================================================

/// # Safety
/// `a` and `b` must be null or valid NUL-terminated strings
#[unsafe(no_mangle)]
pub unsafe extern "C" fn skol_concat(a: *const c_char, b: *const c_char) -> *mut c_char {
    let result = unsafe { text_arg(a, "concat") }
        .and_then(|a| unsafe { text_arg(b, "concat") }.map(|b| concat(a, b)));
    settle_text(result, "concat")
}

/// Returns the byte value, or -1 on fault
///
/// # Safety
/// `s` must be null or a valid NUL-terminated string
#[unsafe(no_mangle)]
pub unsafe extern "C" fn skol_char_at(s: *const c_char, i: i64) -> i64 {
    let result = unsafe { text_arg(s, "char_at") }.and_then(|s| char_at(s, i));
    settle(result.map(i64::from), -1)
}

/// # Safety
/// `s` must be null or a valid NUL-terminated string
#[unsafe(no_mangle)]
pub unsafe extern "C" fn skol_substr(s: *const c_char, a: i64, b: i64) -> *mut c_char {
    let result = unsafe { text_arg(s, "substr") }.and_then(|s| substr(s, a, b));
    settle_text(result, "substr")
}

/// `c` arrives as a C int; values outside 0-255 fault with `ByteOutOfRange`
///
/// # Safety
/// `s` must be null or a valid NUL-terminated string
#[unsafe(no_mangle)]
pub unsafe extern "C" fn skol_char_append(s: *const c_char, c: i64) -> *mut c_char {
    let result = unsafe { text_arg(s, "char_append") }.and_then(|s| {
        let byte = u8::try_from(c).map_err(|_| PreludeError::ByteOutOfRange { value: c })?;
        char_append(s, byte)
    });
    settle_text(result, "char_append")
}

/// Returns the code-point count, or 0 on fault
///
/// # Safety
/// `s` must be null or a valid NUL-terminated string
#[unsafe(no_mangle)]
pub unsafe extern "C" fn skol_str_len(s: *const c_char) -> i64 {
    settle(unsafe { text_arg(s, "str_len") }.map(str_len), 0)
}

/// Returns the byte count, or 0 on fault
///
/// # Safety
/// `s` must be null or a valid NUL-terminated string
#[unsafe(no_mangle)]
pub unsafe extern "C" fn skol_byte_len(s: *const c_char) -> i64 {
    settle(unsafe { text_arg(s, "byte_len") }.map(byte_len), 0)
}

/// Returns the parsed integer, or 0 on fault
///
/// # Safety
/// `s` must be null or a valid NUL-terminated string
#[unsafe(no_mangle)]
pub unsafe extern "C" fn skol_ctoi(s: *const c_char) -> i64 {
    settle(unsafe { text_arg(s, "ctoi") }.and_then(ctoi), 0)
}

/// Returns the parsed boolean, or false on fault
///
/// # Safety
/// `s` must be null or a valid NUL-terminated string
#[unsafe(no_mangle)]
pub unsafe extern "C" fn skol_parse_bool(s: *const c_char) -> bool {
    settle(unsafe { text_arg(s, "parse_bool") }.and_then(parse_bool), false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fault::skol_string_free;
    use skol_core::{clear_runtime_error, has_runtime_error, take_runtime_error};
    use std::ffi::{CStr, CString};

    #[test]
    fn test_concat() {
        assert_eq!(concat("ab", "cd"), "abcd");
        assert_eq!(concat("", "x"), "x");
        assert_eq!(concat("é", ""), "é");
    }

    #[test]
    fn test_char_at_basic() {
        assert_eq!(char_at("hello", 0), Ok(b'h'));
        assert_eq!(char_at("hello", 1), Ok(101));
        assert_eq!(char_at("hello", 4), Ok(b'o'));
    }

    #[test]
    fn test_char_at_wraps() {
        assert_eq!(char_at("hello", -1), Ok(111));
        assert_eq!(char_at("hello", 5), Ok(b'h'));
        assert_eq!(char_at("hello", 7), Ok(b'l'));
        assert_eq!(char_at("hello", -6), Ok(b'o'));
    }

    #[test]
    fn test_char_at_is_byte_level() {
        // "é" is 0xC3 0xA9
        assert_eq!(char_at("héllo", 1), Ok(0xC3));
        assert_eq!(char_at("héllo", 2), Ok(0xA9));
        assert_eq!(char_at("héllo", 3), Ok(b'l'));
        // wraps over the 6-byte encoding, not the 5 code points
        assert_eq!(char_at("héllo", 6), Ok(b'h'));
    }

    #[test]
    fn test_char_at_empty() {
        assert_eq!(
            char_at("", 0),
            Err(PreludeError::EmptyText { op: "char_at" })
        );
    }

    #[test]
    fn test_substr_basic() {
        assert_eq!(substr("hello", 1, 4).unwrap(), "ell");
        assert_eq!(substr("hello", 0, 5).unwrap(), "hello");
        assert_eq!(substr("hello", 2, 2).unwrap(), "");
    }

    #[test]
    fn test_substr_wraps_bounds_independently() {
        // a: -3 -> 2, b: 100 -> 5
        assert_eq!(substr("hello", -3, 100).unwrap(), "llo");
        // a: 6 -> 1, b: -1 -> 4
        assert_eq!(substr("hello", 6, -1).unwrap(), "ell");
        // a: 10 -> 5, so nothing remains
        assert_eq!(substr("hello", 10, 5).unwrap(), "");
    }

    #[test]
    fn test_substr_reversed_bounds_are_empty() {
        assert_eq!(substr("hello", 4, 1).unwrap(), "");
        // a: -1 -> 4, b: 2
        assert_eq!(substr("hello", -1, 2).unwrap(), "");
    }

    #[test]
    fn test_substr_is_code_point_level() {
        assert_eq!(substr("héllo", 1, 2).unwrap(), "é");
        assert_eq!(substr("日本語テキスト", 2, 4).unwrap(), "語テ");
    }

    #[test]
    fn test_substr_empty_text() {
        assert_eq!(substr("", 0, 0).unwrap(), "");
        assert_eq!(
            substr("", 1, 0),
            Err(PreludeError::EmptyText { op: "substr" })
        );
        assert_eq!(
            substr("", 0, -2),
            Err(PreludeError::EmptyText { op: "substr" })
        );
    }

    #[test]
    fn test_char_append() {
        assert_eq!(char_append("ab", 99).unwrap(), "abc");
        assert_eq!(char_append("", b'x').unwrap(), "x");
        assert_eq!(char_append("é", 0x7f).unwrap(), "é\u{7f}");
    }

    #[test]
    fn test_char_append_rejects_non_ascii_bytes() {
        assert_eq!(
            char_append("ab", 200),
            Err(PreludeError::InvalidUtf8Byte { byte: 200 })
        );
        assert_eq!(
            char_append("ab", 128),
            Err(PreludeError::InvalidUtf8Byte { byte: 128 })
        );
    }

    #[test]
    fn test_lengths() {
        assert_eq!(str_len("hello"), 5);
        assert_eq!(str_len(""), 0);
        assert_eq!(str_len("héllo"), 5);
        assert_eq!(byte_len("héllo"), 6);
        assert_eq!(str_len("🦀"), 1);
        assert_eq!(byte_len("🦀"), 4);
    }

    #[test]
    fn test_ctoi() {
        assert_eq!(ctoi("42"), Ok(42));
        assert_eq!(ctoi("-17"), Ok(-17));
        assert_eq!(ctoi("+8"), Ok(8));
        assert_eq!(ctoi("  12\n"), Ok(12));
        assert_eq!(ctoi("-9223372036854775808"), Ok(i64::MIN));
    }

    #[test]
    fn test_ctoi_rejects_non_literals() {
        for bad in ["", "   ", "12a", "1.5", "0x10", "- 1", "9223372036854775808"] {
            assert_eq!(
                ctoi(bad),
                Err(PreludeError::InvalidInteger {
                    text: bad.to_string()
                }),
                "{:?}",
                bad
            );
        }
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool(" false "), Ok(false));
        assert!(parse_bool("True").is_err());
        assert!(parse_bool("1").is_err());
    }

    #[test]
    fn test_export_text_round_trip() {
        clear_runtime_error();
        let s = CString::new("hello").unwrap();

        let out = unsafe { skol_substr(s.as_ptr(), 1, 4) };
        assert!(!out.is_null());
        assert_eq!(unsafe { CStr::from_ptr(out) }.to_str().unwrap(), "ell");
        unsafe { skol_string_free(out) };

        let out = unsafe { skol_char_append(s.as_ptr(), 33) };
        assert_eq!(unsafe { CStr::from_ptr(out) }.to_str().unwrap(), "hello!");
        unsafe { skol_string_free(out) };

        assert_eq!(unsafe { skol_char_at(s.as_ptr(), -1) }, 111);
        assert_eq!(unsafe { skol_str_len(s.as_ptr()) }, 5);
        assert!(!has_runtime_error());
    }

    #[test]
    fn test_export_faults() {
        clear_runtime_error();
        let empty = CString::new("").unwrap();
        assert_eq!(unsafe { skol_char_at(empty.as_ptr(), 0) }, -1);
        assert!(take_runtime_error().unwrap().contains("empty string"));

        assert_eq!(unsafe { skol_ctoi(std::ptr::null()) }, 0);
        assert!(take_runtime_error().unwrap().contains("null"));

        let s = CString::new("ab").unwrap();
        assert!(unsafe { skol_char_append(s.as_ptr(), 300) }.is_null());
        assert_eq!(
            take_runtime_error(),
            Some("char_append: character code 300 is outside the byte range 0-255".to_string())
        );

        assert!(unsafe { skol_char_append(s.as_ptr(), -1) }.is_null());
        assert_eq!(
            take_runtime_error(),
            Some("char_append: character code -1 is outside the byte range 0-255".to_string())
        );

        assert!(unsafe { skol_char_append(s.as_ptr(), 200) }.is_null());
        assert!(take_runtime_error().unwrap().contains("byte 200"));

        // NUL cannot be returned as a C string
        assert!(unsafe { skol_char_append(s.as_ptr(), 0) }.is_null());
        assert!(take_runtime_error().unwrap().contains("NUL"));
    }
}
