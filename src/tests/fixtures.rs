use std::{collections::HashMap, sync::LazyLock};

use strum::IntoEnumIterator;

use crate::mobileregex::{Category, CompileOptions, Family, QueryOptions};

/// Group name to sub-category name to numbers.
type FixtureDocument = HashMap<String, HashMap<String, Vec<u64>>>;

/// Numbers known to be valid per category, plus numbers in ranges the
/// regulator reserved or never assigned (`reserved.carrier`, `reserved.iot`).
static TEST_DATA: LazyLock<FixtureDocument> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../../resources/test_data.json"))
        .expect("Test data should be valid")
});

const RESERVED_GROUP: &str = "reserved";

static ONCE: std::sync::Once = std::sync::Once::new();

pub fn init_logging() {
    ONCE.call_once(|| colog::default_builder()
        .filter_level(log::LevelFilter::Debug)
        .init()
    );
}

fn to_strings(numbers: &[u64]) -> impl Iterator<Item = String> + '_ {
    numbers.iter().map(|number| {
        let mut buf = itoa::Buffer::new();
        buf.format(*number).to_owned()
    })
}

fn group(name: &str) -> &'static HashMap<String, Vec<u64>> {
    TEST_DATA
        .get(name)
        .unwrap_or_else(|| panic!("Test data has no `{}` group", name))
}

/// Valid numbers of `category`; unions collect the numbers of their members.
pub fn numbers_for(category: Category) -> Vec<String> {
    match category {
        Category::All => Family::iter().flat_map(|family| numbers_for(family.all())).collect(),
        Category::Sms => [Family::Carrier, Family::Mvno, Family::DataOnly]
            .into_iter()
            .flat_map(|family| numbers_for(family.all()))
            .collect(),
        _ => {
            let key = category.declared_key();
            let numbers = group(key.group);
            if category.is_union() {
                let mut names: Vec<_> = numbers.keys().collect();
                names.sort();
                names.into_iter().flat_map(|name| to_strings(&numbers[name])).collect()
            } else {
                to_strings(&numbers[key.name]).collect()
            }
        }
    }
}

pub fn reserved_iot_numbers() -> Vec<String> {
    to_strings(&group(RESERVED_GROUP)["iot"]).collect()
}

pub fn reserved_carrier_numbers() -> Vec<String> {
    to_strings(&group(RESERVED_GROUP)["carrier"]).collect()
}

pub fn reserved_numbers() -> Vec<String> {
    let mut numbers = reserved_iot_numbers();
    numbers.extend(reserved_carrier_numbers());
    numbers
}

/// Every prefix of the compile flags, from none to all of them.
/// `IGNORE_METACHARACTERS` is left out, it turns the patterns into literals.
pub fn compile_option_prefixes() -> Vec<CompileOptions> {
    let flags = [
        CompileOptions::CASE_INSENSITIVE,
        CompileOptions::ALLOW_COMMENTS_AND_WHITESPACE,
        CompileOptions::DOT_MATCHES_LINE_SEPARATORS,
        CompileOptions::ANCHORS_MATCH_LINES,
        CompileOptions::USE_UNIX_LINE_SEPARATORS,
        CompileOptions::USE_UNICODE_WORD_BOUNDARIES,
    ];
    (0..=flags.len())
        .map(|n| flags[..n].iter().fold(CompileOptions::empty(), |acc, flag| acc | *flag))
        .collect()
}

/// Every prefix of the query flags, from none to all of them.
pub fn query_option_prefixes() -> Vec<QueryOptions> {
    let flags = [
        QueryOptions::REPORT_PROGRESS,
        QueryOptions::REPORT_COMPLETION,
        QueryOptions::ANCHORED,
        QueryOptions::WITH_TRANSPARENT_BOUNDS,
        QueryOptions::WITHOUT_ANCHORING_BOUNDS,
    ];
    (0..=flags.len())
        .map(|n| flags[..n].iter().fold(QueryOptions::empty(), |acc, flag| acc | *flag))
        .collect()
}
