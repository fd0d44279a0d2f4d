//! Skol Core: value model and error plumbing for the Skol runtime support table
//!
//! # Modules
//!
//! - `complex`: `#[repr(C)]` complex numbers for the `_c` entries
//! - `error`: `PreludeError` plus the thread-local error slot for FFI safety
//! - `truthy`: boolean coercion (`Truthy`)
//! - `value`: dynamic `Value` union and the `Kind` tags used by the manifest

pub mod complex;
pub mod error;
pub mod truthy;
pub mod value;

pub use complex::Complex;
pub use error::{
    PreludeError, Result, clear_runtime_error, has_runtime_error, set_runtime_error,
    skol_clear_error as clear_error, skol_get_error as get_error, skol_has_error as has_error,
    skol_take_error as take_error, take_runtime_error,
};
pub use truthy::Truthy;
pub use value::{Kind, Value};
