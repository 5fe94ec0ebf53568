use std::fmt;

use crate::mobileregex::errors::ConfigurationError;

/// Address of a pattern in the data table: a group (`carrier`, `mvno`, ...)
/// and an entry inside of it (`china_mobile`, `all`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatternKey {
    pub group: &'static str,
    pub name: &'static str,
}

impl PatternKey {
    pub const fn new(group: &'static str, name: &'static str) -> Self {
        Self { group, name }
    }
}

impl fmt::Display for PatternKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.group, self.name)
    }
}

/// A pattern and the shortest subject it can possibly match, in UTF-16 code
/// units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternEntry<'a> {
    pub pattern: &'a str,
    pub minimum_length: usize,
}

/// Source of the raw patterns, used to isolate the taxonomy from the way
/// patterns are stored and allow different tables to be swapped in easily.
pub trait PatternProvider: Send + Sync {
    /// Returns the entry stored under `key`. Fails with
    /// [`ConfigurationError::UnknownCategory`] if there is none.
    fn lookup(&self, key: PatternKey) -> Result<PatternEntry<'_>, ConfigurationError>;
}
