//! String interner backing the AST node types.
//!
//! Provides O(1) interning and lookup with thread-safe access through an
//! internal read-write lock. Interned text is leaked and lives for the rest
//! of the process, so lookups can hand out `&'static str`.

use std::sync::OnceLock;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::Name;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// Interner exceeded capacity (over 4 billion strings).
    Overflow { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::Overflow { count } => write!(
                f,
                "interner exceeded capacity: {} strings (0x{:X}), max is {} (0x{:X})",
                count,
                count,
                u32::MAX,
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for InternError {}

/// Interner storage behind the lock.
struct Storage {
    /// Map from string content to index.
    map: FxHashMap<&'static str, u32>,
    /// Index-to-content storage.
    strings: Vec<&'static str>,
}

/// String interner with interior mutability.
///
/// # Thread Safety
/// Uses an `RwLock` for concurrent read/write access. Lookups of
/// already-interned strings only take the read lock.
pub struct StringInterner {
    storage: RwLock<Storage>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned at index 0.
    pub fn new() -> Self {
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, 0);
        StringInterner {
            storage: RwLock::new(Storage {
                map,
                strings: vec![empty],
            }),
        }
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    ///
    /// Interning is idempotent: the same text always resolves to the same
    /// `Name`.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        // Fast path: check if already interned
        {
            let guard = self.storage.read();
            if let Some(&index) = guard.map.get(s) {
                return Ok(Name::from_raw(index));
            }
        }

        // Slow path: need to insert
        let mut guard = self.storage.write();

        // Double-check after acquiring write lock
        if let Some(&index) = guard.map.get(s) {
            return Ok(Name::from_raw(index));
        }

        // Leak the string to get 'static lifetime
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());

        let index = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;
        guard.strings.push(leaked);
        guard.map.insert(leaked, index);

        Ok(Name::from_raw(index))
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if the interner exceeds capacity (over 4 billion strings).
    /// Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Look up the string for a Name.
    pub fn lookup(&self, name: Name) -> &str {
        self.storage.read().strings[name.index()]
    }

    /// Look up the string for a Name, returning a `'static` reference.
    ///
    /// This is safe because all interned strings are leaked (never
    /// deallocated).
    pub fn lookup_static(&self, name: Name) -> &'static str {
        self.storage.read().strings[name.index()]
    }

    /// Get the number of interned strings.
    pub fn len(&self) -> usize {
        self.storage.read().strings.len()
    }

    /// Check if the interner is empty (only has the empty string).
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

// Global singleton for the intern pool
static GLOBAL_INTERNER: OnceLock<StringInterner> = OnceLock::new();

/// Get the process-wide interner (lazily initialized).
///
/// Initialization runs exactly once, before any node can be constructed;
/// repeated calls return the same interner. There is no teardown, interned
/// text lives until process exit.
pub fn global_interner() -> &'static StringInterner {
    GLOBAL_INTERNER.get_or_init(StringInterner::new)
}
