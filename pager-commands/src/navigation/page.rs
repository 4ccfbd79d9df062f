use pager_core::PaginationError;
use pager_utils::parse::parse_one_based_page;

use crate::{CommandMeta, Reply, Session, usage_reply};

pub const META: CommandMeta = CommandMeta {
    name: "page",
    desc: "Open a specific page.",
    category: "navigation",
    usage: "!page <number>",
};

/// Open a page by number, as if its button had been clicked.
///
/// Error behavior:
/// - returns usage text on a missing or invalid page number.
/// - returns bounds text when the page does not exist.
pub fn run(session: &mut Session, arg1: Option<&str>) -> anyhow::Result<Reply> {
    let Some(requested_page) = parse_one_based_page(arg1) else {
        return Ok(usage_reply(&META));
    };

    match session.controller_mut().try_go_to_page(requested_page) {
        Ok(_) => Ok(Reply::Text(session.render())),
        Err(PaginationError::PageOutOfRange { page, total_pages }) if total_pages == 0 => {
            Ok(Reply::Text(format!("Page {page} does not exist. There are no pages yet.")))
        }
        Err(PaginationError::PageOutOfRange { page, total_pages }) => Ok(Reply::Text(format!(
            "Page {page} does not exist. Available pages: 1-{total_pages}."
        ))),
        Err(other) => Err(other.into()),
    }
}
