//! Complex numbers for the `_c` entries of the support table
//!
//! A plain pair of `f64` with a C-compatible layout so generated code can pass
//! it by value across the `extern "C"` boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Complex number `re + im·i`
///
/// # Memory Layout
///
/// `#[repr(C)]` keeps the layout identical to `struct { double re; double im; }`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex::new(0.0, 0.0);
    pub const I: Complex = Complex::new(0.0, 1.0);

    pub const fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    /// True when both components are zero (either sign)
    pub fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    /// Squared magnitude `re² + im²`
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Complex::new(re, 0.0)
    }
}

impl From<i64> for Complex {
    fn from(re: i64) -> Self {
        Complex::new(re as f64, 0.0)
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

/// Smith's algorithm: scales by the larger divisor component so `|rhs|²`
/// is never formed and cannot overflow or underflow for finite divisors.
///
/// A zero divisor yields non-finite components; callers that must fail on
/// zero check `is_zero` first.
impl Div for Complex {
    type Output = Complex;

    fn div(self, rhs: Complex) -> Complex {
        let (a, b, c, d) = (self.re, self.im, rhs.re, rhs.im);
        if c.abs() >= d.abs() {
            let r = d / c;
            let den = c + d * r;
            Complex::new((a + b * r) / den, (b - a * r) / den)
        } else {
            let r = c / d;
            let den = c * r + d;
            Complex::new((a * r + b) / den, (b * r - a) / den)
        }
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

/// Renders as `re+imi` / `re-imi`, e.g. `1+2i`, `0.5-3i`
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_sign_negative() && !self.im.is_nan() {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, -1.0);
        assert_eq!(a + b, Complex::new(4.0, 1.0));
        assert_eq!(a - b, Complex::new(-2.0, 3.0));
        // (1+2i)(3-i) = 3 - i + 6i - 2i² = 5 + 5i
        assert_eq!(a * b, Complex::new(5.0, 5.0));
        assert_eq!(-a, Complex::new(-1.0, -2.0));
    }

    #[test]
    fn test_division() {
        // (4+2i)/(1+i) = (4+2i)(1-i)/2 = (6-2i)/2
        let q = Complex::new(4.0, 2.0) / Complex::new(1.0, 1.0);
        assert_eq!(q, Complex::new(3.0, -1.0));
    }

    #[test]
    fn test_division_at_extreme_magnitudes() {
        // |b|² would underflow to 0
        let q = Complex::new(1.0, 0.0) / Complex::new(1e-200, 0.0);
        assert!((q.re - 1e200).abs() <= 1e200 * 1e-15, "{:?}", q);
        assert_eq!(q.im, 0.0);

        // |b|² would overflow to infinity
        let big = Complex::new(1e200, 1e200);
        assert_eq!(big / big, Complex::new(1.0, 0.0));

        // imaginary-dominant divisor: (2+4i)/(1e-300i) = 4e300 - 2e300i
        let q = Complex::new(2.0, 4.0) / Complex::new(0.0, 1e-300);
        assert!((q.re - 4e300).abs() <= 4e300 * 1e-15, "{:?}", q);
        assert!((q.im + 2e300).abs() <= 2e300 * 1e-15, "{:?}", q);
    }

    #[test]
    fn test_i_squared() {
        assert_eq!(Complex::I * Complex::I, Complex::new(-1.0, 0.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Complex::new(1.0, 2.0).to_string(), "1+2i");
        assert_eq!(Complex::new(0.5, -3.0).to_string(), "0.5-3i");
        assert_eq!(Complex::ZERO.to_string(), "0+0i");
    }

    #[test]
    fn test_zero() {
        assert!(Complex::new(-0.0, 0.0).is_zero());
        assert!(!Complex::I.is_zero());
    }
}
