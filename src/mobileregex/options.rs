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

use std::ops::Range;

use bitflags::bitflags;

use crate::string_util::{utf16_len, utf16_span_to_bytes};

bitflags! {
    /// Options applied once, when a pattern is compiled.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct CompileOptions: u32 {
        /// Match letters in the pattern without regard to case.
        const CASE_INSENSITIVE = 1 << 0;
        /// Ignore whitespace and `#` comments in the pattern.
        const ALLOW_COMMENTS_AND_WHITESPACE = 1 << 1;
        /// Treat the entire pattern as a literal string.
        const IGNORE_METACHARACTERS = 1 << 2;
        /// Allow `.` to match line terminators.
        const DOT_MATCHES_LINE_SEPARATORS = 1 << 3;
        /// Allow `^` and `$` to match the start and end of lines.
        const ANCHORS_MATCH_LINES = 1 << 4;
        /// Treat only `\n` as a line terminator. Without it `\r\n` terminates
        /// lines as well.
        const USE_UNIX_LINE_SEPARATORS = 1 << 5;
        /// Use Unicode word boundaries for `\b`.
        ///
        /// The regex engine already resolves `\b` with Unicode rules, so this
        /// flag changes nothing and is accepted for completeness.
        const USE_UNICODE_WORD_BOUNDARIES = 1 << 6;
    }
}

bitflags! {
    /// Options applied to a single query.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct QueryOptions: u32 {
        /// Progress callbacks are not supported; accepted and ignored.
        const REPORT_PROGRESS = 1 << 0;
        /// Completion callbacks are not supported; accepted and ignored.
        const REPORT_COMPLETION = 1 << 1;
        /// Only report matches that start at the beginning of the search
        /// range. When collecting every match, each one has to start where
        /// the previous match ended.
        const ANCHORED = 1 << 2;
        /// Let `\b` see the text before the search range. `^` and `$` still
        /// match at the range edges unless `WITHOUT_ANCHORING_BOUNDS` is set
        /// as well.
        const WITH_TRANSPARENT_BOUNDS = 1 << 3;
        /// `^` and `$` only match at the real edges of the subject, never at
        /// the edges of the search range. Matches still end inside the range.
        const WITHOUT_ANCHORING_BOUNDS = 1 << 4;
    }
}

/// Part of a subject to search, in UTF-16 code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchRange {
    pub start: usize,
    pub length: usize,
}

impl SearchRange {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Range covering the whole of `subject`.
    pub fn full(subject: &str) -> Self {
        Self::new(0, utf16_len(subject))
    }

    /// Exclusive end offset, `None` on overflow.
    pub fn end(&self) -> Option<usize> {
        self.start.checked_add(self.length)
    }

    /// Byte span of this range inside `subject`, or `None` when the range
    /// does not fit the subject.
    pub fn to_byte_span(&self, subject: &str) -> Option<Range<usize>> {
        utf16_span_to_bytes(subject, self.start, self.length)
    }
}

impl From<Range<usize>> for SearchRange {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end.saturating_sub(range.start))
    }
}

#[cfg(test)]
mod tests {
    use crate::mobileregex::options::SearchRange;

    #[test]
    fn test_search_range() {
        let range = SearchRange::from(2..13);
        assert_eq!(range, SearchRange::new(2, 11));
        assert_eq!(range.end(), Some(13));
        assert_eq!(SearchRange::new(usize::MAX, 1).end(), None);
        assert_eq!(SearchRange::from(5..3), SearchRange::new(5, 0));

        let full = SearchRange::full("电话13800138000");
        assert_eq!(full, SearchRange::new(0, 13));
        assert_eq!(full.end(), Some(13));
        assert_eq!(full.to_byte_span("电话13800138000"), Some(0..17));
        assert_eq!(range.to_byte_span("电话13800138000"), Some(6..17));
        assert_eq!(SearchRange::new(usize::MAX, 1).to_byte_span("13800138000"), None);
    }
}
