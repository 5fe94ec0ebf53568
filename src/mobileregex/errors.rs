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

use std::num::ParseIntError;

use thiserror::Error;

use crate::interfaces::PatternKey;
pub use crate::regexp_cache::PatternCompileError;

/// The pattern data is unusable. Shipped data is controlled by the library,
/// so outside of custom providers these errors are never recoverable.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Pattern data is not valid json: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Pattern data should not be empty")]
    Empty,

    #[error("Pattern data has no `{0}` group")]
    MissingGroup(String),

    #[error("No pattern stored for category key `{0}`")]
    UnknownCategory(PatternKey),

    #[error("Pattern `{group}.{name}` has no minimum length")]
    MissingMinimumLength { group: String, name: String },

    #[error("Minimum length `{value}` of `{group}.{name}` is not a number: {source}")]
    InvalidMinimumLength {
        group: String,
        name: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Declared minimum length {declared} of `{key}` differs from computed {computed}")]
    MinimumLengthMismatch {
        key: PatternKey,
        declared: usize,
        computed: usize,
    },

    #[error("Pattern data provider is unavailable: {0}")]
    Unavailable(String),
}

/// Error of building a matcher against an arbitrary provider.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("{0}")]
    Configuration(#[from] ConfigurationError),

    #[error("{0}")]
    InvalidRegex(#[from] PatternCompileError),
}

impl BuildError {
    /// Keeps the compile error recoverable and turns broken data into a panic.
    pub fn into_public(self) -> PatternCompileError {
        match self {
            BuildError::InvalidRegex(err) => err,
            BuildError::Configuration(err) => {
                log::error!("Pattern data is broken: {}", err);
                panic!("Valid pattern data is expected; this indicates a library bug! {}", err)
            }
        }
    }
}
