//! Regular expressions for mobile numbers issued in mainland China.
//!
//! Numbers are grouped into [`Category`] values: carrier, MVNO, IoT and
//! data-only numbers per operator, plus the `All` and `Sms` unions. A
//! [`MobileRegex`] compiles the pattern of one category once and answers
//! queries against it:
//!
//! ```
//! use china_mobile_regex::{Carrier, Category, CompileOptions, MobileRegex, QueryOptions, SearchRange};
//!
//! let regex = MobileRegex::new(Category::Carrier(Carrier::ChinaMobile), CompileOptions::empty());
//! assert!(regex.matches("13800138000", QueryOptions::empty(), None));
//! assert!(!regex.matches("13800138000", QueryOptions::empty(), Some(SearchRange::new(0, 1))));
//! ```

mod interfaces;
mod mobileregex;
mod regexp_cache;
pub(crate) mod regex_util;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use interfaces::{PatternEntry, PatternKey, PatternProvider};
pub use mobileregex::{
    PATTERN_TABLE,
    Carrier, Category, CompileOptions, Family, Operator, QueryOptions, SearchRange,
    errors::{BuildError, ConfigurationError, PatternCompileError},
    mobileregex::{MobileRegex, is, matches, resolve},
    pattern_table::PatternTable,
    resolver::{PatternResolver, ResolvedPattern},
};
