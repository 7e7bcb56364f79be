use crate::snapshot;
use crate::Result;
use chrono::NaiveDate;
use roster_engine::{RosterSummary, RosterView};
use roster_types::Member;
use std::path::Path;

/// Materialized roster snapshot, the entry point collaborators drive.
///
/// Owns the records loaded from the record source and hands out
/// [`RosterView`]s over copies of them; the snapshot itself stays
/// immutable for the lifetime of the `Roster`.
pub struct Roster {
    members: Vec<Member>,
}

impl Roster {
    /// Load a roster from a snapshot file.
    pub fn open(path: &Path) -> Result<Self> {
        let members = snapshot::load_members(path)?;
        Ok(Self { members })
    }

    /// Wrap an already-materialized record set.
    pub fn from_members(members: Vec<Member>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Open a stateful view over the snapshot.
    pub fn view(&self, today: NaiveDate, page_size: usize) -> RosterView {
        RosterView::new(self.members.clone(), today, page_size)
    }

    /// Headline statistics over the full snapshot.
    pub fn summary(&self, today: NaiveDate) -> RosterSummary {
        roster_engine::summarize_roster(&self.members, today)
    }
}
