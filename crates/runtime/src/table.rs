//! The support table: every name generated code may call
//!
//! `BUILTINS` is the single source of truth for names, operand kinds and
//! C symbols. Entries are declared with the `builtin!` macro in a compact
//! notation: `builtin!("div_i", (Int Int -- Int), fallible)`.
//!
//! Code generators that are not written in Rust read the same table as a
//! TOML manifest ([`PreludeManifest`]):
//!
//! ```toml
//! [[builtin]]
//! name = "div_i"
//! args = ["int", "int"]
//! return = "int"
//! fallible = true
//! symbol = "skol_div_i"
//! ```
//!
//! The boolean operators are generic in Rust (any [`Truthy`](skol_core::Truthy)
//! operand) but are listed, and exported, over `bool`.

use serde::{Deserialize, Serialize};
use skol_core::Kind;
use std::collections::HashSet;
use std::path::Path;

/// Line a Rust code generator places at the top of every generated file
pub const PREAMBLE: &str = "use skol_runtime::prelude::*;\n";

/// Prefix of every exported C symbol
pub const SYMBOL_PREFIX: &str = "skol_";

/// One support-table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Builtin {
    pub name: &'static str,
    pub args: &'static [Kind],
    pub ret: Kind,
    /// Returns `Result` in Rust; the C export may fault
    pub fallible: bool,
    /// Has an `extern "C"` export (false for generic entries)
    pub exported: bool,
}

impl Builtin {
    /// C symbol of the export, if there is one
    pub fn symbol(&self) -> Option<String> {
        self.exported.then(|| format!("{}{}", SYMBOL_PREFIX, self.name))
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }
}

/// Declare a table entry: `(ArgKind... -- ReturnKind)`, optionally
/// marked `fallible` or `generic` (no C export)
macro_rules! builtin {
    (@entry $name:literal, ($($arg:ident)* -- $ret:ident), $fallible:expr, $exported:expr) => {
        Builtin {
            name: $name,
            args: &[$(Kind::$arg),*],
            ret: Kind::$ret,
            fallible: $fallible,
            exported: $exported,
        }
    };
    ($name:literal, ($($arg:ident)* -- $ret:ident)) => {
        builtin!(@entry $name, ($($arg)* -- $ret), false, true)
    };
    ($name:literal, ($($arg:ident)* -- $ret:ident), fallible) => {
        builtin!(@entry $name, ($($arg)* -- $ret), true, true)
    };
    ($name:literal, ($($arg:ident)* -- $ret:ident), generic) => {
        builtin!(@entry $name, ($($arg)* -- $ret), false, false)
    };
}

/// Every entry, grouped as in the prelude
pub static BUILTINS: &[Builtin] = &[
    // =========================================================================
    // Conversions and equality (kind-agnostic)
    // =========================================================================
    builtin!("to_str", (Any -- Text), generic),
    builtin!("to_bool", (Any -- Bool), generic),
    builtin!("eq", (Any Any -- Bool), generic),
    // =========================================================================
    // Integer
    // =========================================================================
    builtin!("add_i", (Int Int -- Int)),
    builtin!("sub_i", (Int Int -- Int)),
    builtin!("mul_i", (Int Int -- Int)),
    builtin!("div_i", (Int Int -- Int), fallible),
    builtin!("mod_i", (Int Int -- Int), fallible),
    builtin!("pow_i", (Int Int -- Int), fallible),
    builtin!("gt_i", (Int Int -- Bool)),
    builtin!("lt_i", (Int Int -- Bool)),
    // =========================================================================
    // Float
    // =========================================================================
    builtin!("add_f", (Float Float -- Float)),
    builtin!("sub_f", (Float Float -- Float)),
    builtin!("mul_f", (Float Float -- Float)),
    builtin!("div_f", (Float Float -- Float)),
    builtin!("mod_f", (Float Float -- Float)),
    builtin!("pow_f", (Float Float -- Float)),
    builtin!("gt_f", (Float Float -- Bool)),
    builtin!("lt_f", (Float Float -- Bool)),
    // =========================================================================
    // Complex
    // =========================================================================
    builtin!("add_c", (Complex Complex -- Complex)),
    builtin!("sub_c", (Complex Complex -- Complex)),
    builtin!("mul_c", (Complex Complex -- Complex)),
    builtin!("div_c", (Complex Complex -- Complex), fallible),
    builtin!("mod_c", (Complex Complex -- Complex), fallible),
    builtin!("gt_c", (Complex Complex -- Bool), fallible),
    builtin!("lt_c", (Complex Complex -- Bool), fallible),
    // =========================================================================
    // Logic
    // =========================================================================
    builtin!("or_", (Bool Bool -- Bool)),
    builtin!("and_", (Bool Bool -- Bool)),
    builtin!("not_", (Bool -- Bool)),
    // =========================================================================
    // Text
    // =========================================================================
    builtin!("concat", (Text Text -- Text)),
    builtin!("char_at", (Text Int -- Char), fallible),
    builtin!("substr", (Text Int Int -- Text), fallible),
    builtin!("char_append", (Text Char -- Text), fallible),
    builtin!("str_len", (Text -- Int)),
    builtin!("byte_len", (Text -- Int)),
    builtin!("ctoi", (Text -- Int), fallible),
    builtin!("parse_bool", (Text -- Bool), fallible),
];

/// Find an entry by its Skol name
pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|b| b.name == name)
}

/// A manifest entry, as written to and read from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    pub args: Vec<Kind>,
    #[serde(rename = "return")]
    pub ret: Kind,
    #[serde(default)]
    pub fallible: bool,
    /// Absent for generic entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl From<&Builtin> for ManifestEntry {
    fn from(b: &Builtin) -> Self {
        ManifestEntry {
            name: b.name.to_string(),
            args: b.args.to_vec(),
            ret: b.ret,
            fallible: b.fallible,
            symbol: b.symbol(),
        }
    }
}

/// The support table as a TOML document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreludeManifest {
    #[serde(rename = "builtin")]
    pub builtins: Vec<ManifestEntry>,
}

impl PreludeManifest {
    /// Manifest describing [`BUILTINS`]
    pub fn from_builtins() -> Self {
        PreludeManifest {
            builtins: BUILTINS.iter().map(ManifestEntry::from).collect(),
        }
    }

    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string(self).map_err(|e| format!("Failed to serialize prelude manifest: {}", e))
    }

    /// Parse a prelude manifest from TOML content
    ///
    /// Validates the manifest after parsing to catch:
    /// - An empty table
    /// - Empty or duplicate names
    /// - Symbols that are not plain C identifiers
    pub fn parse(content: &str) -> Result<Self, String> {
        let manifest: Self = toml::from_str(content)
            .map_err(|e| format!("Failed to parse prelude manifest: {}", e))?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Read and parse a manifest file
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Self::parse(&content)
    }

    pub fn get(&self, name: &str) -> Option<&ManifestEntry> {
        self.builtins.iter().find(|e| e.name == name)
    }

    fn validate(&self) -> Result<(), String> {
        if self.builtins.is_empty() {
            return Err("Prelude manifest must define at least one builtin".to_string());
        }

        let mut seen = HashSet::new();
        for (idx, entry) in self.builtins.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(format!("Builtin {} has empty name", idx + 1));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(format!("Builtin '{}' is defined more than once", entry.name));
            }

            if let Some(symbol) = &entry.symbol {
                if symbol.is_empty() {
                    return Err(format!("Builtin '{}' has empty symbol", entry.name));
                }
                // Symbols end up in generated C declarations
                if let Some(c) = symbol
                    .chars()
                    .find(|c| !c.is_ascii_alphanumeric() && *c != '_')
                {
                    return Err(format!(
                        "Builtin '{}' has invalid character '{}' in symbol '{}'. \
                         Only ASCII alphanumeric and underscore are allowed.",
                        entry.name, c, symbol
                    ));
                }
                if symbol.starts_with(|c: char| c.is_ascii_digit()) {
                    return Err(format!(
                        "Builtin '{}' has symbol '{}' starting with a digit",
                        entry.name, symbol
                    ));
                }
            }
        }

        Ok(())
    }
}
