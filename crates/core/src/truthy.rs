//! Boolean coercion
//!
//! `Truthy` is the host-native "boolify" behind `to_bool`, `or_`, `and_`
//! and `not_`. Zero and empty are false, everything else is true.

use crate::complex::Complex;
use crate::value::Value;

pub trait Truthy {
    fn truthy(&self) -> bool;
}

impl Truthy for bool {
    fn truthy(&self) -> bool {
        *self
    }
}

impl Truthy for i64 {
    fn truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for u8 {
    fn truthy(&self) -> bool {
        *self != 0
    }
}

/// NaN is truthy: it is not equal to zero
impl Truthy for f64 {
    fn truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for Complex {
    fn truthy(&self) -> bool {
        !self.is_zero()
    }
}

impl Truthy for str {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for Value {
    fn truthy(&self) -> bool {
        match self {
            Value::Int(n) => n.truthy(),
            Value::Float(x) => x.truthy(),
            Value::Complex(c) => c.truthy(),
            Value::Bool(b) => *b,
            Value::Char(b) => b.truthy(),
            Value::String(s) => s.truthy(),
        }
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn truthy(&self) -> bool {
        (**self).truthy()
    }
}
