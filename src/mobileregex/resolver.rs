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

use log::debug;

use super::{
    PATTERN_TABLE,
    enums::{Category, Composition},
    errors::ConfigurationError,
    helper_functions::alternation,
    pattern_table::PatternTable,
};
use crate::interfaces::PatternProvider;

/// Pattern text of a category together with the shortest subject, in UTF-16
/// code units, that it can possibly match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPattern {
    pattern: String,
    minimum_length: usize,
}

impl ResolvedPattern {
    pub fn new(pattern: String, minimum_length: usize) -> Self {
        Self { pattern, minimum_length }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn minimum_length(&self) -> usize {
        self.minimum_length
    }
}

/// Turns categories into patterns.
///
/// Leaves cost one provider lookup each; unions resolve their members and
/// join them with [`alternation`]. Nothing is cached here, a
/// [`MobileRegex`](super::MobileRegex) keeps the result it was built from.
pub struct PatternResolver<'p, P: PatternProvider + ?Sized = PatternTable> {
    provider: &'p P,
}

impl PatternResolver<'static, PatternTable> {
    /// Resolver over the table shipped with the crate.
    pub fn bundled() -> Self {
        Self::new(&PATTERN_TABLE)
    }
}

impl<'p, P: PatternProvider + ?Sized> PatternResolver<'p, P> {
    pub fn new(provider: &'p P) -> Self {
        Self { provider }
    }

    pub fn resolve(&self, category: Category) -> Result<ResolvedPattern, ConfigurationError> {
        match category.composition() {
            Composition::Leaf(key) => {
                let entry = self.provider.lookup(key)?;
                Ok(ResolvedPattern::new(entry.pattern.to_owned(), entry.minimum_length))
            }
            Composition::Union(members) => {
                let parts = members
                    .iter()
                    .map(|member| self.resolve(*member))
                    .collect::<Result<Vec<_>, _>>()?;
                let resolved = alternation(&parts);
                debug!(
                    "Resolved {} as a union of {} patterns, minimum length {}",
                    category,
                    parts.len(),
                    resolved.minimum_length()
                );
                Ok(resolved)
            }
        }
    }
}
