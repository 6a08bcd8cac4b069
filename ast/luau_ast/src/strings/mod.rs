//! Pre-built string literal nodes for well-known Luau strings.
//!
//! AST construction sites reach for the same handful of literals over and
//! over: metamethod names like `__index`, `type()` results like `"number"`,
//! the `", "` separator used when joining. This module builds each of them
//! exactly once and hands out shared references, so call sites never
//! re-intern or re-allocate identical text.
//!
//! The fixed key set is modeled as an enum ([`WellKnownString`]), giving
//! exhaustiveness checking to callers that know their key at compile time.
//! [`StringTable::lookup`] and [`well_known`] cover callers that only hold a
//! key string at runtime.

use std::fmt;
use std::sync::OnceLock;

use crate::string_literal::{string, StringLiteral};

/// The fixed set of well-known strings, one variant per symbolic key.
///
/// For every variant the symbolic key is the literal text itself, so
/// [`WellKnownString::text`] doubles as the lookup key.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum WellKnownString {
    /// Metamethod name `__index`.
    Index,
    /// Metamethod name `__tostring`.
    Tostring,
    /// Metafield name `__mode`.
    Mode,
    /// Weak-key mode string `k`, the value assigned to `__mode`.
    K,
    /// Type name `number`, as returned by `type()`.
    Number,
    /// Type name `table`, as returned by `type()`.
    Table,
    /// Result field name `success`.
    Success,
    /// Result field name `value`.
    Value,
    /// Result field name `error`.
    Error,
    /// List separator `", "` used when joining.
    CommaSpace,
}

impl WellKnownString {
    /// Every variant, in declaration order.
    ///
    /// Invariant: `ALL[w as usize] == w` for every variant, so the table can
    /// index entries by discriminant.
    pub const ALL: [WellKnownString; 10] = [
        WellKnownString::Index,
        WellKnownString::Tostring,
        WellKnownString::Mode,
        WellKnownString::K,
        WellKnownString::Number,
        WellKnownString::Table,
        WellKnownString::Success,
        WellKnownString::Value,
        WellKnownString::Error,
        WellKnownString::CommaSpace,
    ];

    /// Number of well-known strings.
    pub const COUNT: usize = Self::ALL.len();

    /// The literal text this variant denotes (also its lookup key).
    pub const fn text(self) -> &'static str {
        match self {
            WellKnownString::Index => "__index",
            WellKnownString::Tostring => "__tostring",
            WellKnownString::Mode => "__mode",
            WellKnownString::K => "k",
            WellKnownString::Number => "number",
            WellKnownString::Table => "table",
            WellKnownString::Success => "success",
            WellKnownString::Value => "value",
            WellKnownString::Error => "error",
            WellKnownString::CommaSpace => ", ",
        }
    }

    /// Resolve a symbolic key to its variant. Keys are case-sensitive.
    pub fn from_key(key: &str) -> Option<WellKnownString> {
        match key {
            "__index" => Some(WellKnownString::Index),
            "__tostring" => Some(WellKnownString::Tostring),
            "__mode" => Some(WellKnownString::Mode),
            "k" => Some(WellKnownString::K),
            "number" => Some(WellKnownString::Number),
            "table" => Some(WellKnownString::Table),
            "success" => Some(WellKnownString::Success),
            "value" => Some(WellKnownString::Value),
            "error" => Some(WellKnownString::Error),
            ", " => Some(WellKnownString::CommaSpace),
            _ => None,
        }
    }
}

/// Error when a string-keyed lookup uses a key outside the fixed set.
///
/// This is a defect in the calling code, not a runtime condition; callers
/// should surface it rather than retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKeyError {
    /// The key that was not recognized.
    pub key: String,
}

impl fmt::Display for UnknownKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown well-known string key: {:?}", self.key)
    }
}

impl std::error::Error for UnknownKeyError {}

/// Write-once table of pre-built nodes, one per [`WellKnownString`].
///
/// Built once before any lookup and never mutated afterwards; every lookup
/// of the same key returns the same shared node.
pub struct StringTable {
    /// Indexed by variant discriminant.
    entries: [StringLiteral; WellKnownString::COUNT],
}

impl StringTable {
    /// Build all entries. Each node is constructed exactly once.
    pub fn new() -> Self {
        StringTable {
            entries: std::array::from_fn(|i| string(WellKnownString::ALL[i].text())),
        }
    }

    /// Shared node for a well-known string.
    #[inline]
    pub fn get(&self, which: WellKnownString) -> &StringLiteral {
        &self.entries[which as usize]
    }

    /// Shared node for a symbolic key.
    ///
    /// Fails on keys outside the fixed set; the failure path builds no node
    /// and leaves the intern pool untouched.
    pub fn lookup(&self, key: &str) -> Result<&StringLiteral, UnknownKeyError> {
        WellKnownString::from_key(key)
            .map(|which| self.get(which))
            .ok_or_else(|| UnknownKeyError { key: key.to_owned() })
    }

    /// Iterate all entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (WellKnownString, &StringLiteral)> + '_ {
        WellKnownString::ALL.into_iter().zip(self.entries.iter())
    }

    /// Number of entries (always the full fixed set).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the table holds every well-known string.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for StringTable {
    fn default() -> Self {
        Self::new()
    }
}

// Global singleton for the string table
static GLOBAL_TABLE: OnceLock<StringTable> = OnceLock::new();

/// Get the global string table (lazily initialized).
///
/// Initialization runs exactly once; repeated calls return the same table,
/// never a second copy of the nodes.
pub fn string_table() -> &'static StringTable {
    GLOBAL_TABLE.get_or_init(StringTable::new)
}

/// Shared node for a symbolic key, from the global table.
///
/// This is the primary API for call sites that hold a key string.
#[inline]
pub fn well_known(key: &str) -> Result<&'static StringLiteral, UnknownKeyError> {
    string_table().lookup(key)
}

#[cfg(test)]
mod tests;
