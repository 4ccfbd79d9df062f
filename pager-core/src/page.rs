//! Pure pagination math and page-window shaping helpers.

use std::ops::Range;

/// Compute the number of pages for a paginated list.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}

/// Clamp a requested page into a valid range.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Return start/end item indices for a page.
pub fn page_window(total_items: usize, per_page: usize, page: usize) -> (usize, usize) {
    let safe_per_page = per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(safe_per_page);
    let end = start.saturating_add(safe_per_page).min(total_items);
    (start.min(total_items), end)
}

/// Slice `[start, end)` out of the page index list, clamping both ends to its length.
///
/// Returned bounds are zero-based positions, so position `i` holds page `i + 1`.
pub fn slice_window(start: usize, end: usize, total_pages: usize) -> Range<usize> {
    let end = end.min(total_pages);
    let start = start.min(end);
    start..end
}

/// Place a window of `window_size` positions so that `current_page` is visible.
///
/// The window starts `window_size` positions before the current page, or at the
/// beginning of the list when that would go negative.
pub fn initial_window(current_page: usize, window_size: usize, total_pages: usize) -> Range<usize> {
    let start = current_page.saturating_sub(window_size);
    slice_window(start, start.saturating_add(window_size), total_pages)
}

/// Convert zero-based window positions into the page numbers they hold.
pub fn positions_to_pages(positions: &Range<usize>) -> Range<usize> {
    positions.start.saturating_add(1)..positions.end.saturating_add(1)
}
