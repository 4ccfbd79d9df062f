//! Commands that move the current page or the visible window.

pub mod after;
pub mod before;
pub mod first;
pub mod last;
pub mod next;
pub mod page;
pub mod previous;

use pager_core::PageChangeEvent;

use crate::{Reply, Session};

/// Re-render after a navigation, prefixing a notice when it hit a boundary.
pub(crate) fn reply_after_navigation(
    session: &Session,
    event: Option<PageChangeEvent>,
    boundary_notice: &str,
) -> Reply {
    match event {
        Some(_) => Reply::Text(session.render()),
        None => Reply::Text(format!("{boundary_notice}\n{}", session.render())),
    }
}
