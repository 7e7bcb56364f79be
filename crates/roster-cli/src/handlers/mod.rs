pub mod export;
pub mod list;
pub mod stats;

use crate::args::FilterArgs;
use anyhow::Result;
use chrono::NaiveDate;
use roster_engine::{RosterView, SortField};
use roster_runtime::Roster;
use uuid::Uuid;

/// Resolve a unit display name (case-insensitive) to the unit id carried on
/// the snapshot records.
fn resolve_unit_id(roster: &Roster, name: &str) -> Result<Uuid> {
    let lowered = name.to_lowercase();
    roster
        .members()
        .iter()
        .filter_map(|m| m.unit.as_ref())
        .find(|u| u.name.to_lowercase() == lowered)
        .map(|u| u.id)
        .ok_or_else(|| anyhow::anyhow!("Unknown organization unit: {}", name))
}

/// Open a view over the snapshot and drive it through its transitions for
/// the given flags.
pub(crate) fn build_view(
    roster: &Roster,
    today: NaiveDate,
    page_size: usize,
    filter: &FilterArgs,
    sort_by: SortField,
    desc: bool,
) -> Result<RosterView> {
    let mut view = roster.view(today, page_size);

    if let Some(search) = &filter.search {
        view.set_search(search.clone());
    }
    view.set_role_filter(filter.role);
    view.set_bracket_filter(filter.bracket);
    if let Some(unit) = &filter.unit {
        view.set_unit_filter(Some(resolve_unit_id(roster, unit)?));
    }

    // The view opens on name ascending; a first toggle on any other field
    // starts it ascending, a second one flips it.
    if sort_by != view.sort_spec().field {
        view.toggle_sort(sort_by);
    }
    if desc {
        view.toggle_sort(sort_by);
    }

    Ok(view)
}
