use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::Role;
use super::unit::UnitRef;

/// A single member record as delivered by the record source.
///
/// The roster holds these as an immutable snapshot for one view session;
/// create/edit/delete round-trips go through the record source and replace
/// the snapshot wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Opaque record identifier.
    pub id: Uuid,
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub role: Role,
    /// Formatted national identifier (e.g. "231.548.964-35"). Not validated
    /// here; matched by raw substring in searches.
    pub national_id: String,
    /// Reference copy of the member's organization unit. Absent when the
    /// record source could not resolve one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<UnitRef>,
}

impl Member {
    /// Display name of the member's unit, if any.
    pub fn unit_name(&self) -> Option<&str> {
        self.unit.as_ref().map(|u| u.name.as_str())
    }
}
