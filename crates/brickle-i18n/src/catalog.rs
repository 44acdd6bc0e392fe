#![forbid(unsafe_code)]

//! Message catalog: upper-cased keys mapped to localized strings.
//!
//! Labels reference catalog entries through `%{msg_key}` tokens (see
//! [`crate::interpolate`]). References carry a namespace prefix so that
//! editor-supplied strings cannot collide with embedding applications'
//! own placeholder conventions; only prefixed references resolve against
//! the catalog.

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Namespace prefix references must carry to resolve against a catalog.
pub const DEFAULT_PREFIX: &str = "MSG_";

/// Errors raised when populating a [`MessageCatalog`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Keys must start with a letter and continue with letters, digits,
    /// or underscores.
    #[error("invalid message key `{0}`")]
    InvalidKey(String),
}

/// Whether `key` is a well-formed message key
/// (`[A-Za-z][A-Za-z0-9_]*`).
#[must_use]
pub fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Localized message strings keyed case-insensitively.
///
/// Keys are stored upper-cased; lookups upper-case the query, so
/// `%{msg_greet}` and `%{MSG_GREET}` hit the same entry.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    entries: FxHashMap<String, String>,
    prefix: String,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageCatalog {
    /// Empty catalog with the [`DEFAULT_PREFIX`] namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }

    /// Empty catalog with a custom namespace prefix.
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            entries: FxHashMap::default(),
            prefix: prefix.into(),
        }
    }

    /// The namespace prefix references must carry.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Insert a message under `key` (stored upper-cased, without the
    /// namespace prefix).
    ///
    /// # Errors
    /// [`CatalogError::InvalidKey`] when the key is not of the form
    /// `[A-Za-z][A-Za-z0-9_]*`.
    pub fn insert(
        &mut self,
        key: &str,
        message: impl Into<String>,
    ) -> Result<Option<String>, CatalogError> {
        if !is_valid_key(key) {
            return Err(CatalogError::InvalidKey(key.to_string()));
        }
        Ok(self.entries.insert(key.to_ascii_uppercase(), message.into()))
    }

    /// Look up a message by bare key (case-insensitive, no prefix).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(&key.to_ascii_uppercase())
            .map(String::as_str)
    }

    /// Resolve a raw reference key as it appears inside `%{...}`.
    ///
    /// The key must carry the namespace prefix (case-insensitively);
    /// un-prefixed keys never resolve, whatever the catalog holds.
    #[must_use]
    pub fn resolve_reference(&self, raw_key: &str) -> Option<&str> {
        let upper = raw_key.to_ascii_uppercase();
        let bare = upper.strip_prefix(&self.prefix.to_ascii_uppercase())?;
        self.entries.get(bare).map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
