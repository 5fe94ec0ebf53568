mod helper_constants;
mod helper_functions;
pub mod errors;
pub mod enums;
pub mod options;
pub mod resolver;
pub mod pattern_table;
pub mod mobileregex;

use std::sync::LazyLock;

pub use enums::{Carrier, Category, Family, Operator};
pub use options::{CompileOptions, QueryOptions, SearchRange};
use crate::regexp_cache::RegexCache;
use crate::mobileregex::pattern_table::PatternTable;

/// Pattern table shipped with the crate. Loaded on first access and kept for
/// the lifetime of the process; a broken table panics on that first access.
pub static PATTERN_TABLE: LazyLock<PatternTable> = LazyLock::new(|| {
    match PatternTable::bundled() {
        Err(err) => {
            let err_message = format!("Could not load bundled pattern table: {}", err);
            log::error!("{}", err_message);
            panic!("{}", err_message);
        }
        Ok(table) => table,
    }
});

pub(crate) static REGEX_CACHE: LazyLock<RegexCache> = LazyLock::new(|| {
    RegexCache::with_capacity(32)
});
