//! Float operations for Skol (`_f` entries)
//!
//! IEEE 754 throughout: no float operation faults. Division by zero yields
//! an infinity (or NaN for `0.0 / 0.0`), and NaN compares false.

pub fn add_f(a: f64, b: f64) -> f64 {
    a + b
}

pub fn sub_f(a: f64, b: f64) -> f64 {
    a - b
}

pub fn mul_f(a: f64, b: f64) -> f64 {
    a * b
}

/// True (non-flooring) division
pub fn div_f(a: f64, b: f64) -> f64 {
    a / b
}

/// Floored modulo: the result takes the sign of the divisor, including a
/// zero result (`mod_f(-4.0, 2.0)` is `+0.0`).
///
/// A zero divisor yields NaN.
pub fn mod_f(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r == 0.0 {
        0.0_f64.copysign(b)
    } else if (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

pub fn pow_f(base: f64, exp: f64) -> f64 {
    base.powf(exp)
}

pub fn gt_f(a: f64, b: f64) -> bool {
    a > b
}

pub fn lt_f(a: f64, b: f64) -> bool {
    a < b
}

// =============================================================================
// C ABI exports
// =============================================================================

#[unsafe(no_mangle)]
pub extern "C" fn skol_add_f(a: f64, b: f64) -> f64 {
    add_f(a, b)
}

#[unsafe(no_mangle)]
pub extern "C" fn skol_sub_f(a: f64, b: f64) -> f64 {
    sub_f(a, b)
}

#[unsafe(no_mangle)]
pub extern "C" fn skol_mul_f(a: f64, b: f64) -> f64 {
    mul_f(a, b)
}

#[unsafe(no_mangle)]
pub extern "C" fn skol_div_f(a: f64, b: f64) -> f64 {
    div_f(a, b)
}

#[unsafe(no_mangle)]
pub extern "C" fn skol_mod_f(a: f64, b: f64) -> f64 {
    mod_f(a, b)
}

#[unsafe(no_mangle)]
pub extern "C" fn skol_pow_f(base: f64, exp: f64) -> f64 {
    pow_f(base, exp)
}

#[unsafe(no_mangle)]
pub extern "C" fn skol_gt_f(a: f64, b: f64) -> bool {
    gt_f(a, b)
}

#[unsafe(no_mangle)]
pub extern "C" fn skol_lt_f(a: f64, b: f64) -> bool {
    lt_f(a, b)
}
