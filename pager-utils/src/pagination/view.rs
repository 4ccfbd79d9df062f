//! Composition of controls, selector and footer into one renderable view.

use pager_core::{PaginationConfig, PaginationState, page_window};

use crate::labels::Labels;

use super::controls::{NavControl, build_nav_controls};
use super::selector::{PageSizeSelector, SizeOption};

/// Host presentation switches.
///
/// Auto-hide is not here: it travels with the pagination options and is read
/// from [`PaginationConfig::auto_hide`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewOptions {
    /// Render every control as inert.
    pub disabled: bool,
    pub hide_page_size_options_label: bool,
}

/// Page size dropdown as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSizeControl {
    pub label: Option<String>,
    pub page_size: usize,
    pub opened: bool,
    pub options: Vec<SizeOption>,
}

/// Everything needed to draw the pagination row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub page_size: Option<PageSizeControl>,
    pub controls: Vec<NavControl>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Zero-based `[start, end)` item range shown on the current page.
    pub item_range: (usize, usize),
    pub total_items: usize,
}

/// Build the view for the current state, or `None` when auto-hide applies.
pub fn build_pagination_view(
    state: &PaginationState,
    config: &PaginationConfig,
    selector: &PageSizeSelector,
    labels: &Labels,
    options: &ViewOptions,
) -> Option<PaginationView> {
    if config.auto_hide && state.total_pages < 2 {
        return None;
    }

    let page_size = (!config.page_size_options.is_empty()).then(|| PageSizeControl {
        label: (!options.hide_page_size_options_label).then(|| labels.page_size_options.clone()),
        page_size: config.page_size,
        opened: selector.is_open() && !options.disabled,
        options: PageSizeSelector::options(config),
    });

    Some(PaginationView {
        page_size,
        controls: build_nav_controls(state, labels, options.disabled),
        current_page: state.current_page,
        total_pages: state.total_pages,
        item_range: page_window(state.total_items, state.page_size, state.current_page),
        total_items: state.total_items,
    })
}
