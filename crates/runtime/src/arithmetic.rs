//! Integer operations for Skol (`_i` entries)
//!
//! Safe Rust functions for generated Rust code, plus `skol_*` exports with C
//! ABI for generated code in other languages.
//!
//! # Overflow Behavior
//!
//! All arithmetic operations use **wrapping semantics** for predictable, defined behavior:
//! - `add_i`: i64::MAX + 1 wraps to i64::MIN
//! - `sub_i`: i64::MIN - 1 wraps to i64::MAX
//! - `mul_i`, `pow_i`: overflow wraps around
//! - `div_i`: i64::MIN / -1 wraps to i64::MIN (special case)
//!
//! # Division
//!
//! `div_i` and `mod_i` are *floored*: the quotient rounds toward negative
//! infinity and the remainder takes the sign of the divisor, so
//! `a == div_i(a, b) * b + mod_i(a, b)` always holds.

use crate::fault::settle;
use skol_core::{PreludeError, Result};

pub fn add_i(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

pub fn sub_i(a: i64, b: i64) -> i64 {
    a.wrapping_sub(b)
}

pub fn mul_i(a: i64, b: i64) -> i64 {
    a.wrapping_mul(b)
}

/// Floor division
///
/// # Errors
/// `DivisionByZero` when `b == 0`
pub fn div_i(a: i64, b: i64) -> Result<i64> {
    if b == 0 {
        return Err(PreludeError::DivisionByZero { op: "div_i" });
    }
    let q = a.wrapping_div(b);
    // Truncation rounded toward zero; step down when the signs differ
    if a.wrapping_rem(b) != 0 && ((a < 0) != (b < 0)) {
        Ok(q - 1)
    } else {
        Ok(q)
    }
}

/// Floored modulo (sign of the divisor)
///
/// # Errors
/// `DivisionByZero` when `b == 0`
pub fn mod_i(a: i64, b: i64) -> Result<i64> {
    if b == 0 {
        return Err(PreludeError::DivisionByZero { op: "mod_i" });
    }
    let r = a.wrapping_rem(b);
    if r != 0 && ((r < 0) != (b < 0)) {
        Ok(r + b)
    } else {
        Ok(r)
    }
}

/// Integer power by squaring, wrapping on overflow
///
/// # Errors
/// `NegativeExponent` when `exp < 0`
pub fn pow_i(base: i64, exp: i64) -> Result<i64> {
    if exp < 0 {
        return Err(PreludeError::NegativeExponent { exponent: exp });
    }
    let mut result: i64 = 1;
    let mut base = base;
    let mut exp = exp as u64;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result.wrapping_mul(base);
        }
        base = base.wrapping_mul(base);
        exp >>= 1;
    }
    Ok(result)
}

pub fn gt_i(a: i64, b: i64) -> bool {
    a > b
}

pub fn lt_i(a: i64, b: i64) -> bool {
    a < b
}

// =============================================================================
// C ABI exports
// =============================================================================

#[unsafe(no_mangle)]
pub extern "C" fn skol_add_i(a: i64, b: i64) -> i64 {
    add_i(a, b)
}

#[unsafe(no_mangle)]
pub extern "C" fn skol_sub_i(a: i64, b: i64) -> i64 {
    sub_i(a, b)
}

#[unsafe(no_mangle)]
pub extern "C" fn skol_mul_i(a: i64, b: i64) -> i64 {
    mul_i(a, b)
}

/// Floor division
///
/// # Error Handling
/// - Division by zero: faults and returns 0
#[unsafe(no_mangle)]
pub extern "C" fn skol_div_i(a: i64, b: i64) -> i64 {
    settle(div_i(a, b), 0)
}

/// Floored modulo
///
/// # Error Handling
/// - Division by zero: faults and returns 0
#[unsafe(no_mangle)]
pub extern "C" fn skol_mod_i(a: i64, b: i64) -> i64 {
    settle(mod_i(a, b), 0)
}

/// # Error Handling
/// - Negative exponent: faults and returns 0
#[unsafe(no_mangle)]
pub extern "C" fn skol_pow_i(base: i64, exp: i64) -> i64 {
    settle(pow_i(base, exp), 0)
}

#[unsafe(no_mangle)]
pub extern "C" fn skol_gt_i(a: i64, b: i64) -> bool {
    gt_i(a, b)
}

#[unsafe(no_mangle)]
pub extern "C" fn skol_lt_i(a: i64, b: i64) -> bool {
    lt_i(a, b)
}
