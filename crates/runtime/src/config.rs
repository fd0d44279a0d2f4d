//! Fault handling configuration for the `extern "C"` exports
//!
//! ## Configuration (Environment Variables)
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SKOL_FAULT_ACTION` | `record` | `record` (store error, return sentinel) or `exit` (terminate) |
//!
//! ## Example
//!
//! ```bash
//! # Stop the program at the first failing support-table call
//! SKOL_FAULT_ACTION=exit ./generated-program
//! ```
//!
//! The variable is read once per process, on the first fault.

use std::sync::OnceLock;

static FAULT_CONFIG: OnceLock<FaultConfig> = OnceLock::new();

/// Environment variable selecting the fault action
pub const FAULT_ACTION_VAR: &str = "SKOL_FAULT_ACTION";

/// Action to take when an exported call fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaultAction {
    /// Store the message in the thread-local error slot and return a sentinel (default)
    #[default]
    Record,
    /// Print the message to stderr and exit the process with status 1
    Exit,
}

/// Fault configuration
#[derive(Debug, Clone, Default)]
pub struct FaultConfig {
    pub action: FaultAction,
}

impl FaultConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let action = std::env::var(FAULT_ACTION_VAR)
            .ok()
            .map(|s| match s.trim().to_lowercase().as_str() {
                "exit" => FaultAction::Exit,
                _ => FaultAction::Record,
            })
            .unwrap_or_default();

        Self { action }
    }
}

/// Process-wide fault configuration, read from the environment on first use
pub fn fault_config() -> &'static FaultConfig {
    FAULT_CONFIG.get_or_init(FaultConfig::from_env)
}
