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

use std::collections::HashMap;

use log::{debug, trace};
use serde::Deserialize;
use strum::IntoEnumIterator;

use super::{
    enums::{Category, Family, MISC_GROUP},
    errors::ConfigurationError,
    helper_constants::BUNDLED_PATTERNS,
    helper_functions::{is_minimum_length_key, minimum_length_for},
    resolver::PatternResolver,
};
use crate::interfaces::{PatternEntry, PatternKey, PatternProvider};

/// Raw document: group name to entries, every value is a string.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct RawPatternTable(HashMap<String, HashMap<String, String>>);

#[derive(Debug, Clone)]
struct StoredPattern {
    pattern: String,
    minimum_length: usize,
}

/// Pattern data provider backed by a json document.
///
/// Every group maps pattern names to pattern strings; minimum lengths are
/// stored next to them as strings, either per group (`min_length`) or per
/// pattern (`<name>_min_length`). They are parsed eagerly, so a table that
/// was built successfully never fails a lookup for a key it holds.
///
/// The table also declares patterns for the unions (`misc.all`, `misc.sms`
/// and every `<group>.all`). Queries never compile those; unions are always
/// resolved from their leaves. The declared entries are reference data, only
/// their minimum lengths are checked by [`PatternTable::validate`].
#[derive(Debug, Clone)]
pub struct PatternTable {
    groups: HashMap<String, HashMap<String, StoredPattern>>,
}

impl PatternTable {
    /// Parses the table without checking it against the taxonomy.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let RawPatternTable(raw) = serde_json::from_str(json)?;
        if raw.is_empty() {
            return Err(ConfigurationError::Empty);
        }

        let mut groups = HashMap::with_capacity(raw.len());
        for (group, values) in raw {
            let mut patterns = HashMap::with_capacity(values.len());
            for (name, pattern) in values.iter() {
                if is_minimum_length_key(name) {
                    continue;
                }
                let minimum_length = minimum_length_for(&group, name, &values)?;
                trace!("Loaded pattern {}.{} with minimum length {}", group, name, minimum_length);
                patterns.insert(name.clone(), StoredPattern { pattern: pattern.clone(), minimum_length });
            }
            groups.insert(group, patterns);
        }
        debug!("Parsed pattern table with {} groups", groups.len());
        Ok(Self { groups })
    }

    /// Checks that every category can be resolved and that the minimum
    /// lengths declared for the unions agree with the computed ones.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for group in Family::iter().map(Family::group).chain([MISC_GROUP]) {
            if !self.groups.contains_key(group) {
                return Err(ConfigurationError::MissingGroup(group.to_owned()));
            }
        }

        let resolver = PatternResolver::new(self);
        for category in Category::all_cases() {
            let resolved = resolver.resolve(category)?;
            if !category.is_union() {
                continue;
            }
            let key = category.declared_key();
            let declared = self.lookup(key)?;
            if declared.minimum_length != resolved.minimum_length() {
                return Err(ConfigurationError::MinimumLengthMismatch {
                    key,
                    declared: declared.minimum_length,
                    computed: resolved.minimum_length(),
                });
            }
        }
        Ok(())
    }

    /// Parses and validates the table shipped with the crate.
    pub fn bundled() -> Result<Self, ConfigurationError> {
        let table = Self::from_json(BUNDLED_PATTERNS)?;
        table.validate()?;
        Ok(table)
    }

    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Number of patterns over all groups.
    pub fn len(&self) -> usize {
        self.groups.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PatternProvider for PatternTable {
    fn lookup(&self, key: PatternKey) -> Result<PatternEntry<'_>, ConfigurationError> {
        self.groups
            .get(key.group)
            .and_then(|patterns| patterns.get(key.name))
            .map(|stored| PatternEntry {
                pattern: &stored.pattern,
                minimum_length: stored.minimum_length,
            })
            .ok_or(ConfigurationError::UnknownCategory(key))
    }
}
