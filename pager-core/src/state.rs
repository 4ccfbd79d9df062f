//! Derived pagination state.

use std::ops::Range;

use serde::Serialize;

use crate::config::{MAX_TOTAL_ITEMS, PaginationConfig};
use crate::page::{clamp_page, initial_window, positions_to_pages};

/// Snapshot of everything a page-number control needs to render.
///
/// `page_indices` and `visible_window` hold page numbers (1-based) as half-open
/// ranges, so `1..5` means pages 1, 2, 3 and 4.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    pub total_items: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub page_indices: Range<usize>,
    pub visible_window: Range<usize>,
    pub has_more_before: bool,
    pub has_more_after: bool,
    pub current_page: usize,
}

impl PaginationState {
    /// Build a snapshot from a configuration and zero-based window positions.
    pub(crate) fn from_parts(config: &PaginationConfig, positions: &Range<usize>) -> Self {
        let total_pages = config.total_pages();
        let visible_window = positions_to_pages(positions);
        let non_empty = total_pages > 0;

        Self {
            total_items: config.total_items,
            page_size: config.page_size,
            total_pages,
            page_indices: 1..total_pages + 1,
            has_more_before: non_empty && !visible_window.contains(&1),
            has_more_after: non_empty && !visible_window.contains(&total_pages),
            visible_window,
            current_page: config.current_page,
        }
    }

    /// Visible page numbers, in order.
    pub fn visible_pages(&self) -> Vec<usize> {
        self.visible_window.clone().collect()
    }

    pub fn first_visible(&self) -> Option<usize> {
        (!self.visible_window.is_empty()).then_some(self.visible_window.start)
    }

    pub fn last_visible(&self) -> Option<usize> {
        (!self.visible_window.is_empty()).then(|| self.visible_window.end - 1)
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page <= 1
    }

    /// Whether there is no page after the current one (also true for empty lists).
    pub fn is_last_page(&self) -> bool {
        self.total_pages == 0 || self.current_page >= self.total_pages
    }
}

/// Compute the state implied by a configuration, without any navigation history.
///
/// The current page is clamped into `[1, max(total_pages, 1)]` and the window is
/// placed so that it contains it. Calling this twice with the same config gives
/// the same result.
pub fn configure(config: &PaginationConfig) -> PaginationState {
    let mut config = config.clone();
    config.total_items = config.total_items.min(MAX_TOTAL_ITEMS);
    let total_pages = config.total_pages();
    config.current_page = clamp_page(config.current_page, total_pages);
    let positions = initial_window(config.current_page, config.window_size, total_pages);

    PaginationState::from_parts(&config, &positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PaginationOptions;

    fn config(total_items: f64, page_size: f64, window_size: f64, current_page: f64) -> PaginationConfig {
        PaginationConfig::from_options(&PaginationOptions {
            total_items: Some(total_items),
            page_size: Some(page_size),
            window_size: Some(window_size),
            current_page: Some(current_page),
            ..PaginationOptions::default()
        })
    }

    #[test]
    fn fewer_pages_than_the_window_shows_every_page() {
        let state = configure(&config(100.0, 25.0, 5.0, 1.0));

        assert_eq!(state.total_pages, 4);
        assert_eq!(state.visible_pages(), vec![1, 2, 3, 4]);
        assert!(!state.has_more_before);
        assert!(!state.has_more_after);
    }

    #[test]
    fn empty_list_has_no_pages_and_stays_on_page_one() {
        let state = configure(&config(0.0, 25.0, 5.0, 3.0));

        assert_eq!(state.total_pages, 0);
        assert!(state.page_indices.is_empty());
        assert!(state.visible_window.is_empty());
        assert_eq!(state.current_page, 1);
        assert!(!state.has_more_before);
        assert!(!state.has_more_after);
        assert_eq!(state.first_visible(), None);
    }

    #[test]
    fn current_page_past_the_end_is_clamped_to_the_last_page() {
        let state = configure(&config(100.0, 10.0, 5.0, 42.0));

        assert_eq!(state.current_page, 10);
        assert_eq!(state.visible_pages(), vec![6, 7, 8, 9, 10]);
        assert!(state.has_more_before);
        assert!(!state.has_more_after);
    }

    #[test]
    fn window_in_the_middle_flags_both_sides() {
        let state = configure(&config(1000.0, 10.0, 5.0, 50.0));

        assert_eq!(state.visible_pages(), vec![46, 47, 48, 49, 50]);
        assert_eq!(state.first_visible(), Some(46));
        assert_eq!(state.last_visible(), Some(50));
        assert!(state.has_more_before);
        assert!(state.has_more_after);
    }

    #[test]
    fn item_counts_past_the_cap_are_clamped() {
        let state = configure(&PaginationConfig {
            total_items: usize::MAX,
            page_size: 1,
            current_page: usize::MAX,
            ..PaginationConfig::default()
        });

        assert_eq!(state.total_items, MAX_TOTAL_ITEMS);
        assert_eq!(state.total_pages, MAX_TOTAL_ITEMS);
        assert_eq!(state.page_indices, 1..usize::MAX);
        assert_eq!(state.current_page, MAX_TOTAL_ITEMS);
        assert_eq!(state.last_visible(), Some(MAX_TOTAL_ITEMS));
        assert!(state.has_more_before);
        assert!(!state.has_more_after);
    }

    #[test]
    fn configure_is_idempotent() {
        let config = config(333.0, 7.0, 4.0, 12.0);
        assert_eq!(configure(&config), configure(&config));
    }
}
