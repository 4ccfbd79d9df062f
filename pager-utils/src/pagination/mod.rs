//! Stable facade for pagination view helpers used by command handlers.

mod controls;
mod selector;
mod view;

pub use controls::{ControlKind, NavControl, build_nav_controls, press};
pub use selector::{PageSizeSelector, SizeOption};
pub use view::{PageSizeControl, PaginationView, ViewOptions, build_pagination_view};
