use chrono::NaiveDate;
use roster_types::{AgeBracket, Member, Role};
use uuid::Uuid;

use crate::filter::{self, MemberFilter};
use crate::paginate::{self, Page};
use crate::sort::{self, SortField, SortSpec};
use crate::stats::{self, RosterSummary};

/// Stateful roster view over an immutable member snapshot.
///
/// Holds the current filter, sort and page state and recomputes every
/// derived view on read; nothing derived is ever stored. All transitions
/// are synchronous and pure over the held state — the asynchronous record
/// source lives entirely outside this type and talks to it via [`reload`].
///
/// [`reload`]: RosterView::reload
#[derive(Debug, Clone)]
pub struct RosterView {
    records: Vec<Member>,
    filter: MemberFilter,
    sort: SortSpec,
    current_page: usize,
    page_size: usize,
    today: NaiveDate,
}

impl RosterView {
    /// Open a view over `records` as of `today`.
    pub fn new(records: Vec<Member>, today: NaiveDate, page_size: usize) -> Self {
        Self {
            records,
            filter: MemberFilter::new(),
            sort: SortSpec::default(),
            current_page: 1,
            page_size,
            today,
        }
    }

    // ==========================================
    // Transitions
    // ==========================================

    /// Set (or clear, with an empty string) the free-text search.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = Some(search.into());
        self.current_page = 1;
    }

    pub fn set_role_filter(&mut self, role: Option<Role>) {
        self.filter.role = role;
        self.current_page = 1;
    }

    pub fn set_unit_filter(&mut self, unit_id: Option<Uuid>) {
        self.filter.unit_id = unit_id;
        self.current_page = 1;
    }

    pub fn set_bracket_filter(&mut self, bracket: Option<AgeBracket>) {
        self.filter.bracket = bracket;
        self.current_page = 1;
    }

    /// Toggle sorting: the current field flips direction, a new field
    /// starts ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort.field == field {
            self.sort.direction = self.sort.direction.flipped();
        } else {
            self.sort = SortSpec::ascending(field);
        }
    }

    /// Store a page number as-is. Reads clamp it into range, so a stale
    /// number left over from a wider result set is harmless.
    pub fn set_page(&mut self, page_number: usize) {
        self.current_page = page_number;
    }

    /// Replace the snapshot wholesale after a record-source round-trip.
    /// Filter and sort state survive the reload; the page does not.
    pub fn reload(&mut self, records: Vec<Member>) {
        self.records = records;
        self.current_page = 1;
    }

    // ==========================================
    // State accessors
    // ==========================================

    pub fn snapshot(&self) -> &[Member] {
        &self.records
    }

    pub fn criteria(&self) -> &MemberFilter {
        &self.filter
    }

    pub fn sort_spec(&self) -> SortSpec {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    // ==========================================
    // Derived views (recomputed on every read)
    // ==========================================

    /// The full filtered and sorted sequence, unpaginated. This is what the
    /// report export collaborator consumes.
    pub fn filtered_sorted(&self) -> Vec<Member> {
        let mut filtered = filter::apply(&self.records, &self.filter, self.today);
        sort::apply(&mut filtered, self.sort);
        filtered
    }

    /// The visible slice: current page of the filtered+sorted sequence,
    /// with the stored page number clamped into `[1, total_pages]`.
    pub fn visible(&self) -> Page {
        let sequence = self.filtered_sorted();
        let total_pages = paginate::total_pages(sequence.len(), self.page_size);
        let display_page = self.current_page.clamp(1, total_pages);
        paginate::page(&sequence, display_page, self.page_size)
    }

    /// Headline statistics. Deliberately computed over the FULL snapshot,
    /// not the filtered view — an active search must not skew the numbers
    /// shown next to the list.
    pub fn summary(&self) -> RosterSummary {
        stats::summarize(&self.records, self.today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::SortDirection;
    use roster_testing::fixtures::{fixed_today, sample_roster};

    fn view() -> RosterView {
        RosterView::new(sample_roster(), fixed_today(), 12)
    }

    #[test]
    fn opens_on_page_one_sorted_by_name_ascending() {
        let view = view();
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.sort_spec(), SortSpec::default());

        let page = view.visible();
        assert_eq!(page.total_count, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 12);
        assert_eq!(page.items[0].full_name, "Aline Moreira");
    }

    #[test]
    fn filter_changes_reset_the_page() {
        let mut view = view();
        view.set_page(3);
        view.set_search("a");
        assert_eq!(view.current_page(), 1);

        view.set_page(2);
        view.set_role_filter(Some(Role::Member));
        assert_eq!(view.current_page(), 1);

        view.set_page(2);
        view.set_bracket_filter(Some(AgeBracket::From30To49));
        assert_eq!(view.current_page(), 1);

        view.set_page(2);
        view.set_unit_filter(None);
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn toggling_the_same_field_twice_returns_to_ascending() {
        let mut view = view();
        let initial: Vec<String> = view
            .filtered_sorted()
            .into_iter()
            .map(|m| m.full_name)
            .collect();

        view.toggle_sort(SortField::Name);
        assert_eq!(view.sort_spec().direction, SortDirection::Descending);

        view.toggle_sort(SortField::Name);
        assert_eq!(view.sort_spec().direction, SortDirection::Ascending);

        let roundtrip: Vec<String> = view
            .filtered_sorted()
            .into_iter()
            .map(|m| m.full_name)
            .collect();
        assert_eq!(initial, roundtrip);
    }

    #[test]
    fn switching_fields_resets_to_ascending() {
        let mut view = view();
        view.toggle_sort(SortField::Name); // name descending
        view.toggle_sort(SortField::BirthDate);
        assert_eq!(
            view.sort_spec(),
            SortSpec::ascending(SortField::BirthDate)
        );
    }

    #[test]
    fn stale_page_is_clamped_for_display() {
        let mut view = view();
        view.set_page(3);
        assert_eq!(view.visible().items.len(), 1); // 25 records, page 3 of 3

        // Narrow the result set below 3 pages; set_page afterwards so the
        // stored number is stale again.
        view.set_search("silva");
        view.set_page(9);
        let page = view.visible();
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page_number, 1); // clamped
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn search_with_no_hits_yields_one_empty_page() {
        let mut view = view();
        view.set_search("no such member");
        let page = view.visible();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn summary_ignores_the_active_filter() {
        let mut view = view();
        view.set_search("silva");
        assert_eq!(view.visible().total_count, 1);

        let summary = view.summary();
        assert_eq!(summary.total_members, 25);
    }

    #[test]
    fn reload_replaces_the_snapshot_and_resets_the_page() {
        let mut view = view();
        view.set_page(2);

        let shrunk: Vec<Member> = sample_roster().into_iter().take(5).collect();
        view.reload(shrunk);

        assert_eq!(view.current_page(), 1);
        assert_eq!(view.snapshot().len(), 5);
        assert_eq!(view.summary().total_members, 5);
    }

    #[test]
    fn filtered_sorted_is_the_whole_sequence_not_a_page() {
        let mut view = view();
        view.set_role_filter(Some(Role::Member));
        assert_eq!(view.filtered_sorted().len(), 13);
        assert_eq!(view.visible().items.len(), 12);
    }
}
