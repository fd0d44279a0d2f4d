//! Skol Runtime: the support table generated Skol programs call into
//!
//! Key design principles:
//! - One short name per operation and operand kind (`add_i`, `add_f`, `add_c`)
//! - Safe Rust functions return `Result<_, PreludeError>` when they can fail
//! - Every concrete-kind entry is also an `extern "C"` export `skol_<name>`
//!   that never unwinds: failures become faults (see [`config`])
//!
//! Generated Rust code imports [`prelude`]; other code generators read the
//! [`table`] as a TOML manifest and link against the staticlib.

pub mod arithmetic;
pub mod complex_ops;
pub mod config;
pub mod fault;
pub mod float_ops;
pub mod index;
pub mod logic;
pub mod prelude;
pub mod string_ops;
pub mod table;

pub use config::{FaultAction, FaultConfig, fault_config};
pub use fault::skol_string_free as string_free;
pub use table::{BUILTINS, Builtin, PREAMBLE, PreludeManifest, lookup};

// Error slot accessors (exported for C linking)
pub use skol_core::{clear_error, get_error, has_error, take_error};
