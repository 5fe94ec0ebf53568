/// Pattern table shipped with the crate, see `resources/regex.json`.
pub(super) const BUNDLED_PATTERNS: &str = include_str!("../../resources/regex.json");

/// Group-wide minimum length shared by every pattern of a group.
pub(super) const MIN_LENGTH_KEY: &str = "min_length";
/// Suffix of a minimum length that belongs to a single pattern, e.g.
/// `all_min_length` in the `misc` group.
pub(super) const MIN_LENGTH_SUFFIX: &str = "_min_length";

pub(super) const NON_CAPTURING_GROUP_START: &str = "(?:";
pub(super) const GROUP_END: &str = ")";
pub(super) const ALTERNATION: &str = "|";
