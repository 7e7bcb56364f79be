use roster_types::Member;
use serde::{Deserialize, Serialize};

/// One page of a record sequence plus its page metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub items: Vec<Member>,
    /// Requested page number, 1-based.
    pub page_number: usize,
    pub page_size: usize,
    /// Always at least 1, so an empty result set still renders as one
    /// (empty) page.
    pub total_pages: usize,
    pub total_count: usize,
}

/// Total page count for `total_count` records at `page_size` per page.
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_count.div_ceil(page_size).max(1)
}

/// Slice out page `page_number` (1-based) of `records`.
///
/// The slice is bounded to the available range: a page number of 0 or past
/// the end yields empty `items`. The input number is reported back
/// unclamped; clamping the *stored* page is the view controller's job.
pub fn page(records: &[Member], page_number: usize, page_size: usize) -> Page {
    let total_count = records.len();
    let total_pages = total_pages(total_count, page_size);

    let items = if page_number == 0 || page_size == 0 {
        Vec::new()
    } else {
        let start = (page_number - 1).saturating_mul(page_size);
        let end = start.saturating_add(page_size).min(total_count);
        if start >= total_count {
            Vec::new()
        } else {
            records[start..end].to_vec()
        }
    };

    Page {
        items,
        page_number,
        page_size,
        total_pages,
        total_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_testing::fixtures::sample_roster;

    #[test]
    fn computes_ceiling_page_count() {
        let records = sample_roster();
        assert_eq!(records.len(), 25);

        let page = page(&records, 1, 12);
        assert_eq!(page.total_count, 25);
        assert_eq!(page.total_pages, 3); // ceil(25 / 12)
        assert_eq!(page.items.len(), 12);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let records = sample_roster();
        let page = page(&records, 3, 12);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0], records[24]);
    }

    #[test]
    fn out_of_range_page_degrades_to_empty() {
        let records = sample_roster();
        let page = page(&records, 4, 12);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page_number, 4); // reported back unclamped
    }

    #[test]
    fn page_zero_is_empty_not_a_panic() {
        let records = sample_roster();
        let page = page(&records, 0, 12);
        assert!(page.items.is_empty());
    }

    #[test]
    fn empty_set_still_has_one_page() {
        let page = page(&[], 1, 12);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn zero_page_size_degrades_to_empty() {
        let records = sample_roster();
        let page = page(&records, 1, 0);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn exact_multiple_has_no_phantom_page() {
        let records = sample_roster();
        let page = page(&records[..24], 1, 12);
        assert_eq!(page.total_pages, 2);
    }
}
