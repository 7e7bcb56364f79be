// Engine module - Core roster processing logic (filter, sort, paginate, stats)
// This layer sits between the record snapshot (types) and any rendering surface

pub mod age;
pub mod export;
pub mod filter;
pub mod paginate;
pub mod sort;
pub mod stats;
pub mod view;

pub use export::{report_rows, ReportRow};
pub use filter::MemberFilter;
pub use paginate::Page;
pub use sort::{SortDirection, SortField, SortSpec};
pub use stats::{BracketCount, RoleCount, RosterSummary, UnitCount, UNKNOWN_UNIT_LABEL};
pub use view::RosterView;

use chrono::NaiveDate;
use roster_types::Member;

// Façade API - Stable public interface for the runtime/CLI layers
// Callers should use these functions instead of reaching into modules

/// Filter `records` down to the members matching `filter`, in order.
pub fn filter_members(records: &[Member], filter: &MemberFilter, today: NaiveDate) -> Vec<Member> {
    filter::apply(records, filter, today)
}

/// Order `records` in place according to `spec`.
pub fn sort_members(records: &mut [Member], spec: SortSpec) {
    sort::apply(records, spec)
}

/// Slice out one 1-based page of `records`.
pub fn page_members(records: &[Member], page_number: usize, page_size: usize) -> Page {
    paginate::page(records, page_number, page_size)
}

/// Demographic summary of `records` as of `today`.
pub fn summarize_roster(records: &[Member], today: NaiveDate) -> RosterSummary {
    stats::summarize(records, today)
}
