//! Page-window navigation for paginated lists.
//!
//! [`PaginationController`] owns the current page, the page size and the sliding
//! window of visible page numbers, and reports every committed change to its
//! observers as a [`PageChangeEvent`]. [`configure`] computes the same state as a
//! pure function of a [`PaginationConfig`].

/// Raw options, coercion and strict validation.
pub mod config;
/// Stateful navigation.
pub mod controller;
/// Errors from the strict entry points.
pub mod error;
/// Change events and observer registration.
pub mod event;
/// Pure pagination math.
pub mod page;
/// Derived state snapshots.
pub mod state;

pub use config::{
    DEFAULT_PAGE_SIZE, DEFAULT_WINDOW_SIZE, MAX_TOTAL_ITEMS, PaginationConfig, PaginationOptions,
};
pub use controller::PaginationController;
pub use error::PaginationError;
pub use event::{ObserverId, PageChangeEvent, PageObserver};
pub use page::{clamp_page, page_window, total_pages};
pub use state::{PaginationState, configure};
