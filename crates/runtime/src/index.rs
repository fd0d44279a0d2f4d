//! Wrap-around index normalization
//!
//! Generated code indexes text with any integer, of any sign or magnitude.
//! Both normalizers are closed forms of the same two-phase procedure
//! (subtract the length while too large, then add it while negative) and
//! differ only in where an index equal to a multiple of the length lands:
//!
//! - [`wrap_index`] targets `[0, len)`, for element access: `len` wraps to `0`.
//! - [`wrap_bound`] targets `[0, len]`, for slice bounds: positive indices
//!   stop at `len`, so `substr(s, 0, len)` is the whole text.
//!
//! With `len == 0` the procedure has no target to reduce into; that is
//! reported as `EmptyText` instead of looping.

use skol_core::{PreludeError, Result};

/// Normalize `i` into `[0, len)`
pub fn wrap_index(i: i64, len: usize, op: &'static str) -> Result<usize> {
    if len == 0 {
        return Err(PreludeError::EmptyText { op });
    }
    let n = len as i128;
    Ok((i as i128).rem_euclid(n) as usize)
}

/// Normalize a slice bound into `[0, len]`
///
/// Positive bounds above `len` land in `(0, len]`, negative bounds in
/// `[0, len)`. A zero bound needs no reduction, even for empty text.
pub fn wrap_bound(i: i64, len: usize, op: &'static str) -> Result<usize> {
    let n = len as i128;
    let i = i as i128;
    if (0..=n).contains(&i) {
        return Ok(i as usize);
    }
    if n == 0 {
        return Err(PreludeError::EmptyText { op });
    }
    let wrapped = if i > n { (i - 1).rem_euclid(n) + 1 } else { i.rem_euclid(n) };
    Ok(wrapped as usize)
}
