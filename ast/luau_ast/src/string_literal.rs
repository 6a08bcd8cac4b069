//! String literal AST node.

use std::fmt::{self, Write};

use crate::interner::global_interner;
use crate::Name;

/// String literal AST node.
///
/// Stores its text as an interned [`Name`], so the node is `Copy` and
/// equality is O(1). Nodes are immutable after construction.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct StringLiteral {
    pub value: Name,
}

crate::static_assert_size!(StringLiteral, 4);

impl StringLiteral {
    /// Create from an already-interned name.
    #[inline]
    pub const fn new(value: Name) -> Self {
        StringLiteral { value }
    }

    /// The literal's exact text, unquoted and unescaped.
    pub fn text(self) -> &'static str {
        global_interner().lookup_static(self.value)
    }
}

/// Build a string literal node for `text`.
///
/// Interns `text` in the process-wide pool; constructing the same text twice
/// yields equal nodes backed by the same storage.
pub fn string(text: &str) -> StringLiteral {
    StringLiteral::new(global_interner().intern(text))
}

impl fmt::Debug for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StringLiteral({:?})", self.text())
    }
}

/// Renders the literal as Luau source: double-quoted and escaped.
///
/// Control characters use the decimal `\ddd` form, padded to three digits so
/// a following digit character cannot extend the escape.
impl fmt::Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for c in self.text().chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\t' => f.write_str("\\t")?,
                '\r' => f.write_str("\\r")?,
                c if u32::from(c) < 0x20 => write!(f, "\\{:03}", u32::from(c))?,
                c => f.write_char(c)?,
            }
        }
        f.write_char('"')
    }
}
