use std::{borrow::Cow, sync::Arc};

use dashmap::DashMap;
use log::warn;
use regex::RegexBuilder;
use regex_syntax::ParserBuilder;
use thiserror::Error;

use crate::{
    mobileregex::CompileOptions,
    regex_util::{Assertions, BoundedRegex},
};

#[derive(Debug, PartialEq, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct PatternCompileError(#[from] pub regex::Error);

/// Compiles `pattern` with the builder settings that correspond to `options`
/// and records the assertions it uses.
pub(crate) fn build_regex(pattern: &str, options: CompileOptions) -> Result<BoundedRegex, PatternCompileError> {
    let literal = options.contains(CompileOptions::IGNORE_METACHARACTERS);
    let pattern = if literal {
        Cow::Owned(regex::escape(pattern))
    } else {
        Cow::Borrowed(pattern)
    };

    let case_insensitive = options.contains(CompileOptions::CASE_INSENSITIVE);
    // an escaped literal keeps its whitespace significant
    let ignore_whitespace = !literal && options.contains(CompileOptions::ALLOW_COMMENTS_AND_WHITESPACE);
    let dot_matches_new_line = options.contains(CompileOptions::DOT_MATCHES_LINE_SEPARATORS);
    let multi_line = options.contains(CompileOptions::ANCHORS_MATCH_LINES);
    let crlf = !options.contains(CompileOptions::USE_UNIX_LINE_SEPARATORS);

    let regex = RegexBuilder::new(&pattern)
        .case_insensitive(case_insensitive)
        .ignore_whitespace(ignore_whitespace)
        .dot_matches_new_line(dot_matches_new_line)
        .multi_line(multi_line)
        .crlf(crlf)
        .build()?;

    let assertions = match ParserBuilder::new()
        .case_insensitive(case_insensitive)
        .ignore_whitespace(ignore_whitespace)
        .dot_matches_new_line(dot_matches_new_line)
        .multi_line(multi_line)
        .crlf(crlf)
        .build()
        .parse(&pattern)
    {
        Ok(hir) => Assertions::of(&hir),
        Err(err) => {
            warn!("Could not inspect assertions of {}: {}", pattern, err);
            Assertions::ALL
        }
    };
    Ok(BoundedRegex::new(regex, assertions))
}

/// Process-wide store of compiled patterns keyed by pattern text and
/// compile options.
pub struct RegexCache {
    cache: DashMap<(String, CompileOptions), Arc<BoundedRegex>>
}

impl RegexCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn get_regex(&self, pattern: &str, options: CompileOptions) -> Result<Arc<BoundedRegex>, PatternCompileError> {
        let key = (pattern.to_string(), options);
        if let Some(regex) = self.cache.get(&key) {
            Ok(regex.value().clone())
        } else {
            let entry = self.cache.entry(key).or_try_insert_with(|| {
                build_regex(pattern, options).map(Arc::new)
            })?;
            Ok(entry.value().clone())
        }
    }
}

impl Default for RegexCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{mobileregex::CompileOptions, regexp_cache::{build_regex, RegexCache}};

    #[test]
    fn test_same_key_shares_regex() {
        let cache = RegexCache::with_capacity(4);
        let first = cache.get_regex(r"^1\d{10}$", CompileOptions::empty()).unwrap();
        let second = cache.get_regex(r"^1\d{10}$", CompileOptions::empty()).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);

        let insensitive = cache.get_regex(r"^1\d{10}$", CompileOptions::CASE_INSENSITIVE).unwrap();
        assert!(!Arc::ptr_eq(&first, &insensitive));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_invalid_pattern_is_not_cached() {
        let cache = RegexCache::new();
        assert!(cache.get_regex(r"^(1\d{10}$", CompileOptions::empty()).is_err());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_builder_options() {
        let literal = build_regex(r"1\d", CompileOptions::IGNORE_METACHARACTERS).unwrap();
        assert!(literal.is_match(r"x1\dx"));
        assert!(!literal.is_match("12"));

        let lines = build_regex(r"^1\d$", CompileOptions::ANCHORS_MATCH_LINES).unwrap();
        assert!(lines.is_match("x\n12\ny"));
        let crlf = build_regex(r"^1\d$", CompileOptions::ANCHORS_MATCH_LINES).unwrap();
        assert!(crlf.is_match("x\r\n12\r\ny"));
        let unix = build_regex(
            r"^1\d$",
            CompileOptions::ANCHORS_MATCH_LINES | CompileOptions::USE_UNIX_LINE_SEPARATORS,
        ).unwrap();
        assert!(!unix.is_match("x\r\n12\r\ny"));

        let spaced = build_regex(r"^ 1 \d $", CompileOptions::ALLOW_COMMENTS_AND_WHITESPACE).unwrap();
        assert!(spaced.is_match("12"));
    }
}
