//! Complex operations for Skol (`_c` entries)
//!
//! `Complex` is `#[repr(C)]`, so the exports take and return it by value.
//!
//! Complex numbers have neither an ordering nor a modulo: `gt_c`, `lt_c` and
//! `mod_c` exist so every kind has the full set of names, but they always
//! fail (`Unordered`, `NoModulo`).
//!
//! Division uses Smith's algorithm (see [`Complex`]'s `Div`), so finite
//! divisors never overflow or underflow an intermediate `|b|²`.

use crate::fault::settle;
use skol_core::{Complex, PreludeError, Result};

pub fn add_c(a: Complex, b: Complex) -> Complex {
    a + b
}

pub fn sub_c(a: Complex, b: Complex) -> Complex {
    a - b
}

pub fn mul_c(a: Complex, b: Complex) -> Complex {
    a * b
}

/// Complex division
///
/// # Errors
/// `DivisionByZero` when `b` is `0+0i`
pub fn div_c(a: Complex, b: Complex) -> Result<Complex> {
    if b.is_zero() {
        return Err(PreludeError::DivisionByZero { op: "div_c" });
    }
    Ok(a / b)
}

/// # Errors
/// Always `NoModulo`
pub fn mod_c(_a: Complex, _b: Complex) -> Result<Complex> {
    Err(PreludeError::NoModulo { op: "mod_c" })
}

/// # Errors
/// Always `Unordered`
pub fn gt_c(_a: Complex, _b: Complex) -> Result<bool> {
    Err(PreludeError::Unordered { op: "gt_c" })
}

/// # Errors
/// Always `Unordered`
pub fn lt_c(_a: Complex, _b: Complex) -> Result<bool> {
    Err(PreludeError::Unordered { op: "lt_c" })
}

// =============================================================================
// C ABI exports
// =============================================================================

#[unsafe(no_mangle)]
pub extern "C" fn skol_add_c(a: Complex, b: Complex) -> Complex {
    add_c(a, b)
}

#[unsafe(no_mangle)]
pub extern "C" fn skol_sub_c(a: Complex, b: Complex) -> Complex {
    sub_c(a, b)
}

#[unsafe(no_mangle)]
pub extern "C" fn skol_mul_c(a: Complex, b: Complex) -> Complex {
    mul_c(a, b)
}

/// # Error Handling
/// - Division by zero: faults and returns `0+0i`
#[unsafe(no_mangle)]
pub extern "C" fn skol_div_c(a: Complex, b: Complex) -> Complex {
    settle(div_c(a, b), Complex::ZERO)
}

/// Always faults and returns `0+0i`
#[unsafe(no_mangle)]
pub extern "C" fn skol_mod_c(a: Complex, b: Complex) -> Complex {
    settle(mod_c(a, b), Complex::ZERO)
}

/// Always faults and returns false
#[unsafe(no_mangle)]
pub extern "C" fn skol_gt_c(a: Complex, b: Complex) -> bool {
    settle(gt_c(a, b), false)
}

/// Always faults and returns false
#[unsafe(no_mangle)]
pub extern "C" fn skol_lt_c(a: Complex, b: Complex) -> bool {
    settle(lt_c(a, b), false)
}
