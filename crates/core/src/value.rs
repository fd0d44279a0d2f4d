//! Value model for the Skol support table
//!
//! Generated code works with statically typed primitives (`i64`, `f64`,
//! `Complex`, `bool`, `u8`, text). `Value` is their dynamic union, used by
//! the kind-agnostic operations (`to_str`, `to_bool`, `eq`) and by hosts that
//! hold heterogeneous values.

use crate::complex::Complex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The value kinds a support-table entry can accept or produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Int,
    Float,
    Complex,
    Bool,
    /// A single byte (0-255)
    Char,
    Text,
    /// Any kind (kind-agnostic parameters such as `eq`'s)
    Any,
}

impl Kind {
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Complex => "complex",
            Kind::Bool => "bool",
            Kind::Char => "char",
            Kind::Text => "text",
            Kind::Any => "any",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value: what generated Skol code talks about
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    /// Integer value
    Int(i64),

    /// Floating-point value (IEEE 754 double precision)
    Float(f64),

    /// Complex value
    Complex(Complex),

    /// Boolean value
    Bool(bool),

    /// Byte-sized character, as produced by `char_at`
    Char(u8),

    /// Text value
    String(String),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Complex(_) => Kind::Complex,
            Value::Bool(_) => Kind::Bool,
            Value::Char(_) => Kind::Char,
            Value::String(_) => Kind::Text,
        }
    }

    /// Numeric payload widened to a complex number, if the value is numeric.
    ///
    /// Chars count as numbers: generated code represents them as integers.
    fn as_complex(&self) -> Option<Complex> {
        match self {
            Value::Int(n) => Some(Complex::from(*n)),
            Value::Float(x) => Some(Complex::from(*x)),
            Value::Complex(c) => Some(*c),
            Value::Char(b) => Some(Complex::from(*b as i64)),
            _ => None,
        }
    }
}

/// Exact comparison of an integer with a float (no rounding of large integers)
fn int_eq_float(i: i64, f: f64) -> bool {
    // 2^63 as f64; the valid i64 range is [-2^63, 2^63)
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    f.fract() == 0.0 && (-LIMIT..LIMIT).contains(&f) && f as i64 == i
}

/// Kind-agnostic equality: numbers compare by value across kinds
/// (`Int(1) == Float(1.0) == Complex(1+0i)`), everything else compares
/// within its own kind.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Int(a), Value::Char(b)) | (Value::Char(b), Value::Int(a)) => *a == *b as i64,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Int(i), Value::Float(f)) | (Value::Float(f), Value::Int(i)) => {
                int_eq_float(*i, *f)
            }
            (Value::Char(b), Value::Float(f)) | (Value::Float(f), Value::Char(b)) => {
                int_eq_float(*b as i64, *f)
            }
            (Value::Int(i), Value::Complex(c)) | (Value::Complex(c), Value::Int(i)) => {
                c.im == 0.0 && int_eq_float(*i, c.re)
            }
            (Value::Char(b), Value::Complex(c)) | (Value::Complex(c), Value::Char(b)) => {
                c.im == 0.0 && int_eq_float(*b as i64, c.re)
            }
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (a, b) => match (a.as_complex(), b.as_complex()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            },
        }
    }
}

/// Native stringification: integers and chars render as decimal numbers
/// (generated code represents characters as their byte value), text renders
/// verbatim.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Complex(c) => write!(f, "{}", c),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Char(b) => write!(f, "{}", b),
            Value::String(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<Complex> for Value {
    fn from(c: Complex) -> Self {
        Value::Complex(c)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<u8> for Value {
    fn from(b: u8) -> Self {
        Value::Char(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}
