//! Tests for the well-known string table.

#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use pretty_assertions::assert_eq;

use super::*;

/// Every recognized key with its expected literal text.
const EXPECTED: [(&str, &str); 10] = [
    ("__index", "__index"),
    ("__tostring", "__tostring"),
    ("__mode", "__mode"),
    ("k", "k"),
    ("number", "number"),
    ("table", "table"),
    ("success", "success"),
    ("value", "value"),
    ("error", "error"),
    (", ", ", "),
];

#[test]
fn test_every_key_resolves_to_its_text() {
    for (key, text) in EXPECTED {
        assert_eq!(well_known(key).unwrap().text(), text, "key {key:?}");
    }
}

#[test]
fn test_get_matches_variant_text() {
    let table = string_table();
    for which in WellKnownString::ALL {
        assert_eq!(table.get(which).text(), which.text());
    }
}

#[test]
fn test_lookup_returns_the_shared_node() {
    let table = string_table();
    let first = table.lookup("__index").unwrap();
    let second = table.lookup("__index").unwrap();
    assert!(std::ptr::eq(first, second));
    assert!(std::ptr::eq(first, table.get(WellKnownString::Index)));
}

#[test]
fn test_unknown_key_is_rejected() {
    let err = string_table().lookup("nonexistent").unwrap_err();
    assert_eq!(err.key, "nonexistent");

    // Keys are case-sensitive and never trimmed
    assert!(string_table().lookup("__INDEX").is_err());
    assert!(string_table().lookup(" k").is_err());
    assert!(string_table().lookup("").is_err());
}

#[test]
fn test_unknown_key_does_not_grow_the_intern_pool() {
    let table = string_table();
    let interner = crate::global_interner();
    // Tests in other modules intern concurrently, so probe until the pool is
    // quiet across one failed lookup.
    for _ in 0..64 {
        let before = interner.len();
        assert!(table.lookup("nonexistent").is_err());
        if interner.len() == before {
            return;
        }
    }
    panic!("failed lookup kept coinciding with intern pool growth");
}

#[test]
fn test_unknown_key_error_message() {
    let err = well_known("nope").unwrap_err();
    assert_eq!(err.to_string(), "unknown well-known string key: \"nope\"");
}

#[test]
fn test_exactly_ten_unique_entries() {
    use std::collections::HashSet;

    let table = string_table();
    assert_eq!(table.len(), 10);
    assert!(!table.is_empty());

    let keys: HashSet<&str> = table.iter().map(|(which, _)| which.text()).collect();
    assert_eq!(keys.len(), 10);
}

#[test]
fn test_all_is_in_discriminant_order() {
    for (i, which) in WellKnownString::ALL.into_iter().enumerate() {
        assert_eq!(which as usize, i);
    }
}

#[test]
fn test_from_key_inverts_text() {
    for which in WellKnownString::ALL {
        assert_eq!(WellKnownString::from_key(which.text()), Some(which));
    }
    assert_eq!(WellKnownString::from_key("tostring"), None);
}

#[test]
fn test_global_table_is_idempotent() {
    assert!(std::ptr::eq(string_table(), string_table()));
}

#[test]
fn test_entries_render_as_luau_source() {
    let table = string_table();
    assert_eq!(table.get(WellKnownString::Index).to_string(), "\"__index\"");
    assert_eq!(table.get(WellKnownString::CommaSpace).to_string(), "\", \"");
}
