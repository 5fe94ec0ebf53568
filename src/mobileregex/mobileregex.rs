// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{
    hash::{Hash, Hasher},
    ops::Range,
    sync::Arc,
};

use log::{debug, trace};

use super::{
    REGEX_CACHE,
    enums::Category,
    errors::{BuildError, PatternCompileError},
    options::{CompileOptions, QueryOptions, SearchRange},
    resolver::{PatternResolver, ResolvedPattern},
};
use crate::{
    interfaces::PatternProvider,
    regex_util::{BoundedRegex, RegexBoundedSearch},
    regexp_cache::build_regex,
    string_util::utf16_len,
};

/// Matches mobile numbers of one [`Category`].
///
/// Building one resolves and compiles the category's pattern, which is not
/// cheap; keep the value around and reuse it for repeated queries. It is
/// immutable and can be shared between threads.
///
/// Two values are equal when their pattern text is equal, whatever options
/// they were compiled with.
#[derive(Debug, Clone)]
pub struct MobileRegex {
    category: Category,
    resolved: ResolvedPattern,
    options: CompileOptions,
    regex: Arc<BoundedRegex>,
}

impl MobileRegex {
    /// Builds a matcher for `category` from the bundled pattern table.
    ///
    /// # Panics
    /// If the pattern does not compile with `options`. Shipped patterns are
    /// controlled by the library, so this is a library bug rather than a
    /// recoverable error; use [`MobileRegex::try_new`] to handle it.
    pub fn new(category: Category, options: CompileOptions) -> Self {
        match Self::try_new(category, options) {
            Ok(regex) => regex,
            Err(err) => {
                log::error!("Unexpected error creating regex for {}: {}", category, err);
                panic!("Unexpected error creating regex for {}: {}", category, err)
            }
        }
    }

    /// Builds a matcher for `category` from the bundled pattern table.
    ///
    /// # Panics
    /// If the bundled table can not be loaded or lacks the category.
    pub fn try_new(category: Category, options: CompileOptions) -> Result<Self, PatternCompileError> {
        let resolver = PatternResolver::bundled();
        Self::build(category, options, &resolver, |pattern| build_regex(pattern, options).map(Arc::new))
            .map_err(BuildError::into_public)
    }

    /// Builds a matcher for `category` from a custom provider. Nothing
    /// panics here; both broken data and invalid patterns are returned.
    pub fn with_provider<P: PatternProvider + ?Sized>(
        category: Category,
        options: CompileOptions,
        provider: &P,
    ) -> Result<Self, BuildError> {
        let resolver = PatternResolver::new(provider);
        Self::build(category, options, &resolver, |pattern| build_regex(pattern, options).map(Arc::new))
    }

    /// Like [`MobileRegex::try_new`], but the compiled pattern comes from a
    /// process-wide cache, so matchers built for the same category and options
    /// share one compiled regex.
    pub fn cached(category: Category, options: CompileOptions) -> Result<Self, PatternCompileError> {
        let resolver = PatternResolver::bundled();
        Self::build(category, options, &resolver, |pattern| REGEX_CACHE.get_regex(pattern, options))
            .map_err(BuildError::into_public)
    }

    fn build<P, F>(
        category: Category,
        options: CompileOptions,
        resolver: &PatternResolver<'_, P>,
        compile: F,
    ) -> Result<Self, BuildError>
    where
        P: PatternProvider + ?Sized,
        F: FnOnce(&str) -> Result<Arc<BoundedRegex>, PatternCompileError>,
    {
        let resolved = resolver.resolve(category)?;
        let regex = compile(resolved.pattern())?;
        debug!("Compiled regex for {} with options {:?}", category, options);
        Ok(Self { category, resolved, options, regex })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Pattern text the matcher was compiled from.
    pub fn pattern(&self) -> &str {
        self.resolved.pattern()
    }

    pub fn minimum_length(&self) -> usize {
        self.resolved.minimum_length()
    }

    pub fn resolved(&self) -> &ResolvedPattern {
        &self.resolved
    }

    pub fn options(&self) -> CompileOptions {
        self.options
    }

    /// Byte span to search, or `None` when the subject or the range is too
    /// short to hold a match. Neither check runs the regex.
    fn search_span(&self, subject: &str, range: Option<SearchRange>) -> Option<Range<usize>> {
        let minimum_length = self.minimum_length();
        // utf-8 length bounds the utf-16 length from above, so the constant
        // time byte check rejects most short subjects before any counting
        if subject.len() < minimum_length || utf16_len(subject) < minimum_length {
            trace!("Subject is shorter than {} for {}", minimum_length, self.category);
            return None;
        }

        let range = range.unwrap_or_else(|| SearchRange::full(subject));
        if range.length < minimum_length {
            trace!("Range {:?} is shorter than {} for {}", range, minimum_length, self.category);
            return None;
        }

        let span = range.to_byte_span(subject);
        if span.is_none() {
            trace!("Range {:?} does not fit the subject", range);
        }
        span
    }

    /// Returns the first match inside `range` (the whole subject when `None`).
    ///
    /// Subjects and ranges shorter than [`MobileRegex::minimum_length`] are
    /// rejected without running the regex. Ranges are in UTF-16 code units;
    /// one that does not fit the subject never matches.
    pub fn first_match<'h>(
        &self,
        subject: &'h str,
        options: QueryOptions,
        range: Option<SearchRange>,
    ) -> Option<&'h str> {
        let span = self.search_span(subject, range)?;
        self.regex.find_bounded(subject, span, options)
    }

    /// Returns every match of every subject, in input order.
    ///
    /// `range` applies to each subject separately. A subject that is too
    /// short for the category, or too short for the range, contributes no
    /// matches; the remaining subjects are still searched.
    pub fn all_matches<'h, I, S>(
        &self,
        subjects: I,
        options: QueryOptions,
        range: Option<SearchRange>,
    ) -> Vec<&'h str>
    where
        I: IntoIterator<Item = &'h S>,
        S: AsRef<str> + ?Sized + 'h,
    {
        let mut matches = Vec::new();
        for subject in subjects {
            let subject = subject.as_ref();
            if let Some(span) = self.search_span(subject, range) {
                matches.extend(self.regex.find_all_bounded(subject, span, options));
            }
        }
        matches
    }

    /// Tests whether `subject` holds a match inside `range`.
    pub fn matches(&self, subject: &str, options: QueryOptions, range: Option<SearchRange>) -> bool {
        self.first_match(subject, options, range).is_some()
    }
}

impl Default for MobileRegex {
    fn default() -> Self {
        Self::new(Category::All, CompileOptions::empty())
    }
}

impl PartialEq for MobileRegex {
    fn eq(&self, other: &Self) -> bool {
        self.pattern() == other.pattern()
    }
}

impl Eq for MobileRegex {}

impl Hash for MobileRegex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern().hash(state);
    }
}

/// Tests whether `subject` is a number of `category`.
///
/// Builds a new [`MobileRegex`] on every call; for repeated checks build one
/// and reuse it.
pub fn matches(
    subject: &str,
    category: Category,
    compile_options: CompileOptions,
    query_options: QueryOptions,
    range: Option<SearchRange>,
) -> bool {
    MobileRegex::new(category, compile_options).matches(subject, query_options, range)
}

/// Same as [`matches`], reads better at some call sites:
/// `is("13800138000", Category::Sms, ...)`.
pub fn is(
    subject: &str,
    category: Category,
    compile_options: CompileOptions,
    query_options: QueryOptions,
    range: Option<SearchRange>,
) -> bool {
    matches(subject, category, compile_options, query_options, range)
}

/// Resolves `category` against the bundled table.
///
/// # Panics
/// If the bundled table can not be loaded or lacks the category.
pub fn resolve(category: Category) -> ResolvedPattern {
    match PatternResolver::bundled().resolve(category) {
        Ok(resolved) => resolved,
        Err(err) => {
            let err_message = format!("Could not resolve {}: {}", category, err);
            log::error!("{}", err_message);
            panic!("{}", err_message);
        }
    }
}
