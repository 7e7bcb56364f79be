use chrono::NaiveDate;
use roster_types::{AgeBracket, Member, Role};
use uuid::Uuid;

use crate::age::bracket_on;

/// Composite filter over a member snapshot.
///
/// Every clause is optional; the predicate is the AND of the clauses that
/// are set. An empty search string is treated the same as no search.
#[derive(Debug, Clone, Default)]
pub struct MemberFilter {
    pub search: Option<String>,
    pub role: Option<Role>,
    pub unit_id: Option<Uuid>,
    pub bracket: Option<AgeBracket>,
}

impl MemberFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn unit(mut self, unit_id: Uuid) -> Self {
        self.unit_id = Some(unit_id);
        self
    }

    pub fn bracket(mut self, bracket: AgeBracket) -> Self {
        self.bracket = Some(bracket);
        self
    }

    /// Whether `member` passes every active clause as of `today`.
    pub fn matches(&self, member: &Member, today: NaiveDate) -> bool {
        if let Some(search) = self.search.as_deref()
            && !search.is_empty()
        {
            // Names match case-insensitively; national ids are formatted
            // digits, so a raw substring is enough there.
            let name_hit = member
                .full_name
                .to_lowercase()
                .contains(&search.to_lowercase());
            let id_hit = member.national_id.contains(search);
            if !name_hit && !id_hit {
                return false;
            }
        }

        if let Some(role) = self.role
            && member.role != role
        {
            return false;
        }

        if let Some(unit_id) = self.unit_id
            && member.unit.as_ref().map(|u| u.id) != Some(unit_id)
        {
            return false;
        }

        if let Some(bracket) = self.bracket
            && bracket_on(member.birth_date, today) != bracket
        {
            return false;
        }

        true
    }
}

/// Reduce `records` to the members matching `filter`, preserving the
/// original relative order.
pub fn apply(records: &[Member], filter: &MemberFilter, today: NaiveDate) -> Vec<Member> {
    records
        .iter()
        .filter(|m| filter.matches(m, today))
        .cloned()
        .collect()
}
