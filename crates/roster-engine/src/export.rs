use chrono::NaiveDate;
use roster_types::Member;
use serde::{Deserialize, Serialize};

use crate::age::age_on;
use crate::stats::UNKNOWN_UNIT_LABEL;

/// One row of the tabular membership report.
///
/// Flattened for the export collaborator: ages are resolved, the unit is a
/// plain label (same `"unknown"` placeholder as the statistics), and the
/// field order here is the column order of the rendered document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    pub name: String,
    pub age: i32,
    pub role: String,
    pub unit: String,
    pub national_id: String,
}

/// Flatten `records` into report rows as of `today`.
///
/// Row order follows record order — hand this the filtered+sorted sequence,
/// never a single page.
pub fn report_rows(records: &[Member], today: NaiveDate) -> Vec<ReportRow> {
    records
        .iter()
        .map(|member| ReportRow {
            name: member.full_name.clone(),
            age: age_on(member.birth_date, today),
            role: member.role.to_string(),
            unit: member
                .unit_name()
                .unwrap_or(UNKNOWN_UNIT_LABEL)
                .to_string(),
            national_id: member.national_id.clone(),
        })
        .collect()
}
