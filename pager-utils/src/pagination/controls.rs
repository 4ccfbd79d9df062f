//! Pagination control builders (first/previous/pages/next/last).

use pager_core::{PageChangeEvent, PaginationController, PaginationState};

use crate::labels::Labels;

/// What a control does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    First,
    Previous,
    MoreBefore,
    Page(usize),
    MoreAfter,
    Next,
    Last,
}

/// A single button in the navigation row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavControl {
    pub kind: ControlKind,
    /// Button face text.
    pub text: String,
    /// Hover text, only set for the first/previous/next/last buttons.
    pub tooltip: Option<String>,
    pub disabled: bool,
    /// Whether this is the button of the current page.
    pub selected: bool,
}

/// Build the navigation row for a pagination state.
///
/// The "…" controls only appear when pages are hidden on that side. When
/// `all_disabled` is set every control is inert.
pub fn build_nav_controls(
    state: &PaginationState,
    labels: &Labels,
    all_disabled: bool,
) -> Vec<NavControl> {
    let at_start = state.is_first_page();
    let at_end = state.is_last_page();

    let mut controls = Vec::new();
    controls.push(arrow(ControlKind::First, "«", &labels.first_page, at_start));
    controls.push(arrow(ControlKind::Previous, "‹", &labels.previous_page, at_start));

    if state.has_more_before {
        controls.push(ellipsis(ControlKind::MoreBefore));
    }

    controls.extend(state.visible_window.clone().map(|page| NavControl {
        kind: ControlKind::Page(page),
        text: page.to_string(),
        tooltip: None,
        disabled: false,
        selected: page == state.current_page,
    }));

    if state.has_more_after {
        controls.push(ellipsis(ControlKind::MoreAfter));
    }

    controls.push(arrow(ControlKind::Next, "›", &labels.next_page, at_end));
    controls.push(arrow(ControlKind::Last, "»", &labels.last_page, at_end));

    if all_disabled {
        for control in &mut controls {
            control.disabled = true;
        }
    }

    controls
}

/// Apply a pressed control to the controller.
///
/// Disabled controls do nothing.
pub fn press(control: &NavControl, controller: &mut PaginationController) -> Option<PageChangeEvent> {
    if control.disabled {
        return None;
    }

    match control.kind {
        ControlKind::First => controller.first_page(),
        ControlKind::Previous => controller.previous_page(),
        ControlKind::MoreBefore => controller.load_window_before(),
        ControlKind::Page(page) => Some(controller.go_to_page(page)),
        ControlKind::MoreAfter => controller.load_window_after(),
        ControlKind::Next => controller.next_page(),
        ControlKind::Last => controller.last_page(),
    }
}

fn arrow(kind: ControlKind, glyph: &str, tooltip: &str, disabled: bool) -> NavControl {
    NavControl {
        kind,
        text: glyph.to_owned(),
        tooltip: Some(tooltip.to_owned()),
        disabled,
        selected: false,
    }
}

fn ellipsis(kind: ControlKind) -> NavControl {
    NavControl {
        kind,
        text: "…".to_owned(),
        tooltip: None,
        disabled: false,
        selected: false,
    }
}
