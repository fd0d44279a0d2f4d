//! Kind-agnostic entries: equality, logic and conversions
//!
//! These are generic over the value kind instead of carrying a suffix per
//! kind. Logical operators coerce through [`Truthy`]; both operands are
//! evaluated because they arrive as call arguments.

use skol_core::Truthy;
use std::fmt::Display;

/// Kind-agnostic equality
pub fn eq<A, B>(a: A, b: B) -> bool
where
    A: PartialEq<B>,
{
    a == b
}

pub fn or_<A: Truthy, B: Truthy>(a: A, b: B) -> bool {
    a.truthy() | b.truthy()
}

pub fn and_<A: Truthy, B: Truthy>(a: A, b: B) -> bool {
    a.truthy() & b.truthy()
}

pub fn not_<T: Truthy>(a: T) -> bool {
    !a.truthy()
}

/// Render a value as text
pub fn to_str<T: Display>(v: T) -> String {
    v.to_string()
}

/// Coerce a value to a boolean
pub fn to_bool<T: Truthy>(v: T) -> bool {
    v.truthy()
}

// =============================================================================
// C ABI exports (boolean operands only)
// =============================================================================

#[unsafe(no_mangle)]
pub extern "C" fn skol_or_(a: bool, b: bool) -> bool {
    or_(a, b)
}

#[unsafe(no_mangle)]
pub extern "C" fn skol_and_(a: bool, b: bool) -> bool {
    and_(a, b)
}

#[unsafe(no_mangle)]
pub extern "C" fn skol_not_(a: bool) -> bool {
    not_(a)
}
