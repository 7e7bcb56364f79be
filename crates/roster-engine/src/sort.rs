use roster_types::Member;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Field a roster listing can be ordered by.
///
/// Fixed enumeration with one typed key extractor each; there is no
/// catch-all comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    BirthDate,
    Role,
    UnitName,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "birth-date" | "birth_date" => Ok(SortField::BirthDate),
            "role" => Ok(SortField::Role),
            "unit-name" | "unit_name" | "unit" => Ok(SortField::UnitName),
            _ => Err(format!("Unknown sort field: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Sort field plus direction. Defaults to name ascending, the order the
/// roster opens with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::Name,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortSpec {
    pub fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }
}

fn compare(a: &Member, b: &Member, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.full_name.to_lowercase().cmp(&b.full_name.to_lowercase()),
        SortField::BirthDate => a.birth_date.cmp(&b.birth_date),
        // Raw label order, not ministerial rank.
        SortField::Role => a.role.as_str().cmp(b.role.as_str()),
        // Missing unit sorts as the empty string, i.e. first ascending.
        SortField::UnitName => a.unit_name().unwrap_or("").cmp(b.unit_name().unwrap_or("")),
    }
}

/// Order `records` in place according to `spec`.
pub fn apply(records: &mut [Member], spec: SortSpec) {
    records.sort_by(|a, b| {
        let ordering = compare(a, b, spec.field);
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
