//! Everything generated code calls, under its Skol name
//!
//! Generated Rust files begin with [`PREAMBLE`](crate::table::PREAMBLE),
//! which glob-imports this module.

pub use crate::arithmetic::{add_i, div_i, gt_i, lt_i, mod_i, mul_i, pow_i, sub_i};
pub use crate::complex_ops::{add_c, div_c, gt_c, lt_c, mod_c, mul_c, sub_c};
pub use crate::float_ops::{add_f, div_f, gt_f, lt_f, mod_f, mul_f, pow_f, sub_f};
pub use crate::logic::{and_, eq, not_, or_, to_bool, to_str};
pub use crate::string_ops::{
    byte_len, char_append, char_at, concat, ctoi, parse_bool, str_len, substr,
};

pub use skol_core::{Complex, PreludeError, Truthy, Value};
