use serde::Serialize;

use super::filters::FilterState;
use super::summary::PropertySummary;
use crate::workflows::scoring::Tier;

/// Quick figures shown above the dashboard grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total: usize,
    pub filtered: usize,
    pub top_matches: usize,
    pub active_filters: usize,
}

impl DashboardStats {
    /// `top_matches` counts excellent-tier summaries in the filtered set.
    pub fn collect(total: usize, filtered: &[PropertySummary], active_filters: usize) -> Self {
        Self {
            total,
            filtered: filtered.len(),
            top_matches: filtered
                .iter()
                .filter(|summary| summary.match_tier == Tier::Excellent)
                .count(),
            active_filters,
        }
    }

    pub fn is_filtered(&self) -> bool {
        self.filtered < self.total
    }

    /// Dutch one-liner, e.g. `"8 van 34 woningen · 2 top matches"`.
    pub fn headline(&self) -> String {
        let count = if self.is_filtered() {
            format!("{} van {}", self.filtered, self.total)
        } else {
            self.total.to_string()
        };
        let plural = if self.top_matches == 1 { "" } else { "es" };
        format!("{count} woningen · {} top match{plural}", self.top_matches)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPage {
    pub items: Vec<PropertySummary>,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub stats: DashboardStats,
    pub filters: FilterState,
    /// Canonical query string for the current view, without page.
    pub query: String,
}

/// Page bounds after clamping: `page` lies in `1..=total_pages` and there is
/// always at least one (possibly empty) page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
}

impl PageWindow {
    pub fn new(item_count: usize, requested_page: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = item_count.div_ceil(per_page).max(1);
        let page = requested_page.clamp(1, total_pages);
        Self {
            page,
            per_page,
            total_pages,
        }
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page - 1) * self.per_page;
        let end = (start + self.per_page).min(items.len());
        items.get(start..end).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_clamps_requested_page() {
        let window = PageWindow::new(50, 9, 24);
        assert_eq!(window.total_pages, 3);
        assert_eq!(window.page, 3);

        let numbers: Vec<usize> = (0..50).collect();
        assert_eq!(window.slice(&numbers), &[48, 49]);
    }

    #[test]
    fn empty_input_has_one_empty_page() {
        let window = PageWindow::new(0, 4, 24);
        assert_eq!(window.page, 1);
        assert_eq!(window.total_pages, 1);
        assert!(window.slice::<u8>(&[]).is_empty());
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let window = PageWindow::new(3, 2, 0);
        assert_eq!(window.per_page, 1);
        assert_eq!(window.slice(&["a", "b", "c"]), &["b"]);
    }

    #[test]
    fn headline_mentions_filtered_count() {
        let stats = DashboardStats {
            total: 34,
            filtered: 8,
            top_matches: 1,
            active_filters: 2,
        };
        assert_eq!(stats.headline(), "8 van 34 woningen · 1 top match");

        let unfiltered = DashboardStats {
            filtered: 34,
            top_matches: 3,
            ..stats
        };
        assert_eq!(unfiltered.headline(), "34 woningen · 3 top matches");
    }
}
