//! Luau AST - Leaf Node Types
//!
//! This crate contains the shared leaf data types for the Luau code
//! construction toolkit:
//! - `Name` for interned string identifiers
//! - `StringInterner` and the process-wide intern pool
//! - `StringLiteral` nodes and the `string()` constructor
//! - `strings` with pre-built nodes for the well-known literals
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: node text is stored as `Name(u32)`, never as an
//!   owned `String`, so nodes are `Copy` and equality is O(1)
//! - **Build Once, Share Everywhere**: the well-known literals are
//!   constructed a single time at first use and every caller receives the
//!   same shared node

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod interner;
mod name;
mod string_literal;
pub mod strings;

pub use interner::{global_interner, InternError, StringInterner};
pub use name::Name;
pub use string_literal::{string, StringLiteral};
pub use strings::{string_table, well_known, StringTable, UnknownKeyError, WellKnownString};
