//! Fault reporting and C string marshalling for the `extern "C"` exports
//!
//! Nothing here unwinds: a failed call is turned into a fault (recorded or
//! fatal, per [`FaultConfig`](crate::config::FaultConfig)) and the export
//! returns a sentinel value.

use crate::config::{FaultAction, fault_config};
use libc::c_char;
use skol_core::{PreludeError, Result, set_runtime_error};
use std::ffi::{CStr, CString};
use std::ptr;

/// Report a failed call according to the process fault configuration
pub fn fault(err: PreludeError) {
    tracing::debug!(target: "skol_runtime::fault", error = %err, "support-table call failed");

    match fault_config().action {
        FaultAction::Record => set_runtime_error(err.to_string()),
        FaultAction::Exit => {
            tracing::error!(target: "skol_runtime::fault", error = %err, "exiting on fault");
            eprintln!("skol runtime error: {}", err);
            std::process::exit(1);
        }
    }
}

/// Unwrap a result for an export, faulting and returning `sentinel` on error
pub fn settle<T>(result: Result<T>, sentinel: T) -> T {
    match result {
        Ok(v) => v,
        Err(e) => {
            fault(e);
            sentinel
        }
    }
}

/// Borrow a NUL-terminated UTF-8 argument
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that outlives `'a`
pub unsafe fn text_arg<'a>(ptr: *const c_char, op: &'static str) -> Result<&'a str> {
    if ptr.is_null() {
        return Err(PreludeError::NullPointer { op });
    }
    let cstr = unsafe { CStr::from_ptr(ptr) };
    cstr.to_str().map_err(|_| PreludeError::InvalidText { op })
}

/// Hand a text result to C; the caller owns it and frees it with `skol_string_free`
pub fn text_result(s: String, op: &'static str) -> Result<*mut c_char> {
    CString::new(s)
        .map(CString::into_raw)
        .map_err(|_| PreludeError::InteriorNul { op })
}

/// Settle a text-producing export: null on fault
pub fn settle_text(result: Result<String>, op: &'static str) -> *mut c_char {
    settle(result.and_then(|s| text_result(s, op)), ptr::null_mut())
}

/// Free a string returned by any `skol_*` export
///
/// # Safety
/// `s` must be null or a pointer previously returned by this library and
/// not yet freed
#[unsafe(no_mangle)]
pub unsafe extern "C" fn skol_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}
