//! Reserved keyword table.
//!
//! An identifier that spells a reserved keyword must be double-quoted even
//! when its characters would otherwise be safe. The table is built once
//! and only read afterwards, so a single instance can be shared by every
//! thread.
//!
//! ## Sources
//!
//! - [`ReservedWords::postgres`]: the list embedded in this crate
//! - [`ReservedWords::from_list`]: any newline-delimited keyword list
//! - [`ReservedWords::from_path`]: the same, read from disk
//! - [`ReservedWords::global`]: a lazily built, process-wide copy of the
//!   embedded list
//!
//! ```rust
//! use pg_escape::ReservedWords;
//!
//! let words = ReservedWords::from_list("SELECT\nfrom\n\n# comment\n");
//! assert_eq!(words.len(), 2);
//! assert!(words.contains("select"));
//! assert!(words.contains("FROM"));
//! assert!(!words.contains("comment"));
//! ```

use crate::{Error, Result};
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

const POSTGRES_RESERVED: &str = include_str!("reserved.txt");

static GLOBAL: OnceLock<ReservedWords> = OnceLock::new();

/// A case-insensitive set of reserved keywords.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservedWords {
    words: HashSet<String>,
}

impl ReservedWords {
    /// Creates an empty table. Nothing is reserved.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a newline-delimited keyword list.
    ///
    /// Lines are trimmed and lowercased. Blank lines and lines starting
    /// with `#` are skipped.
    #[must_use]
    pub fn from_list(list: &str) -> Self {
        let words: HashSet<String> = list
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        tracing::debug!(count = words.len(), "loaded reserved word list");
        ReservedWords { words }
    }

    /// Reads a newline-delimited keyword list from a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let list = std::fs::read_to_string(path)
            .map_err(|e| Error::io(&format!("{}: {}", path.display(), e)))?;
        Ok(Self::from_list(&list))
    }

    /// Builds the embedded PostgreSQL keyword list.
    #[must_use]
    pub fn postgres() -> Self {
        Self::from_list(POSTGRES_RESERVED)
    }

    /// The process-wide table, built from [`ReservedWords::postgres`] on
    /// first use.
    pub fn global() -> &'static ReservedWords {
        GLOBAL.get_or_init(Self::postgres)
    }

    /// Returns `true` if `word` is reserved, ignoring case.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        self.words.contains(&word.to_lowercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ReservedWords {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        ReservedWords {
            words: iter
                .into_iter()
                .map(|word| word.as_ref().trim().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }
}
