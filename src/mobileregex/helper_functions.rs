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

use super::{
    errors::ConfigurationError,
    helper_constants::{
        ALTERNATION, GROUP_END, MIN_LENGTH_KEY, MIN_LENGTH_SUFFIX, NON_CAPTURING_GROUP_START,
    },
    resolver::ResolvedPattern,
};

/// Joins the patterns into a single non-capturing alternation. The result
/// can match anything one of the parts matches, so it keeps the smallest
/// minimum length.
pub(super) fn alternation(parts: &[ResolvedPattern]) -> ResolvedPattern {
    let pattern = parts
        .iter()
        .map(|part| fast_cat::concat_str!(NON_CAPTURING_GROUP_START, part.pattern(), GROUP_END))
        .collect::<Vec<_>>()
        .join(ALTERNATION);
    let minimum_length = parts
        .iter()
        .map(ResolvedPattern::minimum_length)
        .min()
        .unwrap_or(0);
    ResolvedPattern::new(pattern, minimum_length)
}

pub(super) fn is_minimum_length_key(name: &str) -> bool {
    name == MIN_LENGTH_KEY || name.ends_with(MIN_LENGTH_SUFFIX)
}

/// Minimum length of the pattern `name`: its own `<name>_min_length` entry
/// when present, the group-wide `min_length` otherwise.
pub(super) fn minimum_length_for(
    group: &str,
    name: &str,
    values: &HashMap<String, String>,
) -> Result<usize, ConfigurationError> {
    let own_key = fast_cat::concat_str!(name, MIN_LENGTH_SUFFIX);
    let value = values
        .get(&own_key)
        .or_else(|| values.get(MIN_LENGTH_KEY))
        .ok_or_else(|| ConfigurationError::MissingMinimumLength {
            group: group.to_owned(),
            name: name.to_owned(),
        })?;

    value
        .trim()
        .parse()
        .map_err(|source| ConfigurationError::InvalidMinimumLength {
            group: group.to_owned(),
            name: name.to_owned(),
            value: value.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{alternation, is_minimum_length_key, minimum_length_for};
    use crate::mobileregex::{errors::ConfigurationError, resolver::ResolvedPattern};

    #[test]
    fn test_alternation() {
        let union = alternation(&[
            ResolvedPattern::new("^a$".to_owned(), 3),
            ResolvedPattern::new("^b$".to_owned(), 2),
        ]);
        assert_eq!(union.pattern(), "(?:^a$)|(?:^b$)");
        assert_eq!(union.minimum_length(), 2);
    }

    #[test]
    fn test_minimum_length_lookup() {
        let values: HashMap<String, String> = [
            ("all", "^1$"),
            ("all_min_length", "11"),
            ("sms", "^2$"),
            ("min_length", " 13 "),
            ("bad", "^3$"),
            ("bad_min_length", "eleven"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect();

        assert_eq!(minimum_length_for("misc", "all", &values).unwrap(), 11);
        assert_eq!(minimum_length_for("misc", "sms", &values).unwrap(), 13);
        assert!(matches!(
            minimum_length_for("misc", "bad", &values),
            Err(ConfigurationError::InvalidMinimumLength { .. })
        ));

        let empty = HashMap::new();
        assert!(matches!(
            minimum_length_for("misc", "all", &empty),
            Err(ConfigurationError::MissingMinimumLength { .. })
        ));

        assert!(is_minimum_length_key("min_length"));
        assert!(is_minimum_length_key("sms_min_length"));
        assert!(!is_minimum_length_key("china_mobile"));
    }
}
