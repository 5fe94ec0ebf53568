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

use std::fmt;

use strum::{EnumIter, IntoEnumIterator};

use crate::interfaces::PatternKey;

/// Categories of mobile numbers issued in mainland China.
///
/// `All`, `Sms` and the `All` member of every family are unions of other
/// categories; everything else is backed by exactly one pattern in the data
/// table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// **Every number.**
    /// Carrier, MVNO, IoT and data-only numbers.
    #[default]
    All,
    /// **Numbers able to receive SMS.**
    /// Carrier, MVNO and data-only numbers. IoT numbers are data-only by
    /// product definition and are left out.
    Sms,
    /// Numbers operated by one of the carriers.
    Carrier(Carrier),
    /// Numbers operated by a mobile virtual network operator.
    Mvno(Operator),
    /// 13-digit IoT numbers.
    Iot(Operator),
    /// Numbers sold with data plans only.
    DataOnly(Operator),
}

/// Sub-categories of carrier numbers.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Carrier {
    /// Every carrier number.
    All,
    ChinaMobile,
    ChinaUnicom,
    ChinaTelecom,
    /// Maritime satellite numbers (1749).
    Inmarsat,
    /// Emergency communication numbers of the Ministry of Industry and
    /// Information Technology (17406-17412).
    Miit,
}

/// Sub-categories shared by the MVNO, IoT and data-only families.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Every number of the family.
    All,
    ChinaMobile,
    ChinaUnicom,
    ChinaTelecom,
}

/// Families grouping the sub-categories; each one is a group of the data
/// table.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Carrier,
    Mvno,
    Iot,
    DataOnly,
}

/// How a category turns into a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Composition {
    /// Looked up in the data table.
    Leaf(PatternKey),
    /// Alternation of the listed categories.
    Union(&'static [Category]),
}

pub(super) const MISC_GROUP: &str = "misc";

const CARRIER_LEAVES: &[Category] = &[
    Category::Carrier(Carrier::ChinaMobile),
    Category::Carrier(Carrier::ChinaUnicom),
    Category::Carrier(Carrier::ChinaTelecom),
    Category::Carrier(Carrier::Inmarsat),
    Category::Carrier(Carrier::Miit),
];

const MVNO_LEAVES: &[Category] = &[
    Category::Mvno(Operator::ChinaMobile),
    Category::Mvno(Operator::ChinaUnicom),
    Category::Mvno(Operator::ChinaTelecom),
];

const IOT_LEAVES: &[Category] = &[
    Category::Iot(Operator::ChinaMobile),
    Category::Iot(Operator::ChinaUnicom),
    Category::Iot(Operator::ChinaTelecom),
];

const DATA_ONLY_LEAVES: &[Category] = &[
    Category::DataOnly(Operator::ChinaMobile),
    Category::DataOnly(Operator::ChinaUnicom),
    Category::DataOnly(Operator::ChinaTelecom),
];

const ALL_FAMILIES: &[Category] = &[
    Category::Carrier(Carrier::All),
    Category::Mvno(Operator::All),
    Category::Iot(Operator::All),
    Category::DataOnly(Operator::All),
];

const SMS_FAMILIES: &[Category] = &[
    Category::Carrier(Carrier::All),
    Category::Mvno(Operator::All),
    Category::DataOnly(Operator::All),
];

impl Carrier {
    fn key_name(self) -> &'static str {
        match self {
            Carrier::All => "all",
            Carrier::ChinaMobile => "china_mobile",
            Carrier::ChinaUnicom => "china_unicom",
            Carrier::ChinaTelecom => "china_telecom",
            Carrier::Inmarsat => "inmarsat",
            Carrier::Miit => "miit",
        }
    }
}

impl Operator {
    fn key_name(self) -> &'static str {
        match self {
            Operator::All => "all",
            Operator::ChinaMobile => "china_mobile",
            Operator::ChinaUnicom => "china_unicom",
            Operator::ChinaTelecom => "china_telecom",
        }
    }
}

impl Family {
    /// Name of the data table group holding this family.
    pub fn group(self) -> &'static str {
        match self {
            Family::Carrier => "carrier",
            Family::Mvno => "mvno",
            Family::Iot => "iot",
            Family::DataOnly => "data_plan_only",
        }
    }

    /// Category matching every number of the family.
    pub fn all(self) -> Category {
        match self {
            Family::Carrier => Category::Carrier(Carrier::All),
            Family::Mvno => Category::Mvno(Operator::All),
            Family::Iot => Category::Iot(Operator::All),
            Family::DataOnly => Category::DataOnly(Operator::All),
        }
    }
}

impl Category {
    /// Every category in a stable order: `All`, `Sms`, then each family with
    /// its `All` member first.
    pub fn all_cases() -> impl Iterator<Item = Category> {
        [Category::All, Category::Sms]
            .into_iter()
            .chain(Carrier::iter().map(Category::Carrier))
            .chain(Operator::iter().map(Category::Mvno))
            .chain(Operator::iter().map(Category::Iot))
            .chain(Operator::iter().map(Category::DataOnly))
    }

    /// Categories backed by a single data table entry, in the order of
    /// [`Category::all_cases`].
    pub fn leaves() -> impl Iterator<Item = Category> {
        Self::all_cases().filter(|category| category.pattern_key().is_some())
    }

    pub fn family(self) -> Option<Family> {
        match self {
            Category::All | Category::Sms => None,
            Category::Carrier(_) => Some(Family::Carrier),
            Category::Mvno(_) => Some(Family::Mvno),
            Category::Iot(_) => Some(Family::Iot),
            Category::DataOnly(_) => Some(Family::DataOnly),
        }
    }

    /// Data table key of a leaf category, `None` for unions.
    pub fn pattern_key(self) -> Option<PatternKey> {
        match self.composition() {
            Composition::Leaf(key) => Some(key),
            Composition::Union(_) => None,
        }
    }

    pub fn is_union(self) -> bool {
        matches!(self.composition(), Composition::Union(_))
    }

    pub(crate) fn composition(self) -> Composition {
        match self {
            Category::All => Composition::Union(ALL_FAMILIES),
            Category::Sms => Composition::Union(SMS_FAMILIES),
            Category::Carrier(Carrier::All) => Composition::Union(CARRIER_LEAVES),
            Category::Mvno(Operator::All) => Composition::Union(MVNO_LEAVES),
            Category::Iot(Operator::All) => Composition::Union(IOT_LEAVES),
            Category::DataOnly(Operator::All) => Composition::Union(DATA_ONLY_LEAVES),
            _ => Composition::Leaf(self.declared_key()),
        }
    }

    /// Key under which the data table declares its own version of this
    /// category. Unions have one as well (`misc.all`, `carrier.all`, ...).
    pub fn declared_key(self) -> PatternKey {
        match self {
            Category::All => PatternKey::new(MISC_GROUP, "all"),
            Category::Sms => PatternKey::new(MISC_GROUP, "sms"),
            Category::Carrier(carrier) => PatternKey::new(Family::Carrier.group(), carrier.key_name()),
            Category::Mvno(operator) => PatternKey::new(Family::Mvno.group(), operator.key_name()),
            Category::Iot(operator) => PatternKey::new(Family::Iot.group(), operator.key_name()),
            Category::DataOnly(operator) => PatternKey::new(Family::DataOnly.group(), operator.key_name()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::All => f.write_str("all"),
            Category::Sms => f.write_str("sms"),
            _ => write!(f, "{}", self.declared_key()),
        }
    }
}
