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

use std::ops::{Deref, Range};

use regex::Regex;
use regex_syntax::hir::{Hir, Look};

use crate::mobileregex::QueryOptions;

/// Assertions of a pattern that can look past the edge of a search span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assertions {
    pub start_anchors: bool,
    pub end_anchors: bool,
    pub word_boundaries: bool,
}

impl Assertions {
    /// Used when the pattern could not be inspected.
    pub const ALL: Self = Self {
        start_anchors: true,
        end_anchors: true,
        word_boundaries: true,
    };

    pub fn of(hir: &Hir) -> Self {
        let looks = hir.properties().look_set();
        Self {
            start_anchors: [Look::Start, Look::StartLF, Look::StartCRLF]
                .into_iter()
                .any(|look| looks.contains(look)),
            end_anchors: [Look::End, Look::EndLF, Look::EndCRLF]
                .into_iter()
                .any(|look| looks.contains(look)),
            word_boundaries: looks.contains_word(),
        }
    }
}

/// Compiled pattern together with the assertions it uses.
#[derive(Debug, Clone)]
pub struct BoundedRegex {
    regex: Regex,
    assertions: Assertions,
}

impl BoundedRegex {
    pub fn new(regex: Regex, assertions: Assertions) -> Self {
        Self { regex, assertions }
    }

}

impl Deref for BoundedRegex {
    type Target = Regex;

    fn deref(&self) -> &Regex {
        &self.regex
    }
}

/// Searches restricted to a byte span of the haystack.
///
/// How the span edges look to the pattern depends on the query options:
/// * by default the span is cut out of the haystack, so `^` and `$` match at
///   its edges and nothing outside of it is visible;
/// * `WITH_TRANSPARENT_BOUNDS` keeps `^` and `$` matching at the span edges,
///   but `\b` sees the text before the span. The text after the span stays
///   hidden;
/// * `WITHOUT_ANCHORING_BOUNDS` lets `^` and `$` match only at the real
///   edges of the haystack, and assertions see the text outside the span.
///
/// The span end is a hard limit in every mode: no match extends past it.
pub trait RegexBoundedSearch {
    fn find_bounded<'h>(&self, haystack: &'h str, span: Range<usize>, options: QueryOptions) -> Option<&'h str>;
    fn find_all_bounded<'h>(&self, haystack: &'h str, span: Range<usize>, options: QueryOptions) -> Vec<&'h str>;
}

enum Bounds {
    Opaque,
    Transparent,
    NonAnchoring,
}

impl Bounds {
    fn from_options(options: QueryOptions) -> Self {
        if options.contains(QueryOptions::WITHOUT_ANCHORING_BOUNDS) {
            Bounds::NonAnchoring
        } else if options.contains(QueryOptions::WITH_TRANSPARENT_BOUNDS) {
            Bounds::Transparent
        } else {
            Bounds::Opaque
        }
    }
}

fn next_char_boundary(haystack: &str, pos: usize) -> usize {
    haystack[pos..].chars().next().map_or(pos + 1, |c| pos + c.len_utf8())
}

impl BoundedRegex {
    /// Leftmost match inside the span cut out of the haystack.
    fn find_opaque(&self, haystack: &str, span: &Range<usize>, from: usize) -> Option<Range<usize>> {
        let found = self.regex.find_at(&haystack[span.clone()], from - span.start)?;
        Some(span.start + found.start()..span.start + found.end())
    }

    fn find_transparent(&self, haystack: &str, span: &Range<usize>, from: usize) -> Option<Range<usize>> {
        let prefixed = self.regex.find_at(&haystack[..span.end], from).map(|found| found.range());
        if from != span.start || span.start == 0 || !self.assertions.start_anchors {
            return prefixed;
        }

        // `^` has to match at the span start, which only the cut out span shows
        let sliced = self.find_opaque(haystack, span, from);
        if !self.assertions.word_boundaries {
            return sliced;
        }
        match (prefixed, sliced) {
            (Some(prefixed), _) if prefixed.start == span.start => Some(prefixed),
            (_, Some(sliced)) if sliced.start == span.start => Some(sliced),
            (prefixed, _) => prefixed,
        }
    }

    fn find_non_anchoring(&self, haystack: &str, span: &Range<usize>, mut from: usize) -> Option<Range<usize>> {
        while from <= span.end {
            let found = self.regex.find_at(&haystack[..span.end], from)?;
            if found.end() < span.end || span.end == haystack.len() || !self.assertions.end_anchors {
                return Some(found.range());
            }

            // the match may lean on `$` at the span end, recheck it against the whole haystack
            match self.regex.find_at(haystack, found.start()) {
                Some(full) if full.start() == found.start() && full.end() <= span.end => {
                    return Some(full.range());
                }
                _ => from = next_char_boundary(haystack, found.start()),
            }
        }
        None
    }

    fn find_in(&self, haystack: &str, span: &Range<usize>, bounds: &Bounds, from: usize) -> Option<Range<usize>> {
        match bounds {
            Bounds::Opaque => self.find_opaque(haystack, span, from),
            Bounds::Transparent => self.find_transparent(haystack, span, from),
            Bounds::NonAnchoring => self.find_non_anchoring(haystack, span, from),
        }
    }
}

impl RegexBoundedSearch for BoundedRegex {
    fn find_bounded<'h>(&self, haystack: &'h str, span: Range<usize>, options: QueryOptions) -> Option<&'h str> {
        let bounds = Bounds::from_options(options);
        let found = self.find_in(haystack, &span, &bounds, span.start)?;
        // leftmost semantics: a match at the span start would have been found first
        if options.contains(QueryOptions::ANCHORED) && found.start != span.start {
            return None;
        }
        Some(&haystack[found])
    }

    fn find_all_bounded<'h>(&self, haystack: &'h str, span: Range<usize>, options: QueryOptions) -> Vec<&'h str> {
        let anchored = options.contains(QueryOptions::ANCHORED);
        let mut matches = Vec::new();
        let mut expected_start = span.start;

        let bounds = Bounds::from_options(options);
        if let Bounds::Opaque = bounds {
            for found in self.regex.find_iter(&haystack[span.clone()]) {
                if anchored && span.start + found.start() != expected_start {
                    break;
                }
                expected_start = span.start + found.end();
                matches.push(found.as_str());
            }
            return matches;
        }

        let mut from = span.start;
        let mut previous_end = None;
        while from <= span.end {
            let Some(found) = self.find_in(haystack, &span, &bounds, from) else { break };
            if found.is_empty() && previous_end == Some(found.end) {
                // an empty match right behind the previous one is skipped
                from = next_char_boundary(haystack, found.end);
                continue;
            }
            if anchored && found.start != expected_start {
                break;
            }
            expected_start = found.end;
            previous_end = Some(found.end);
            from = if found.is_empty() {
                next_char_boundary(haystack, found.end)
            } else {
                found.end
            };
            matches.push(&haystack[found]);
        }
        matches
    }
}
