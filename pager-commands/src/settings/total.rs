use pager_core::PaginationConfig;
use tracing::info;

use pager_utils::parse::parse_count;

use crate::{CommandMeta, Reply, Session, usage_reply};

pub const META: CommandMeta = CommandMeta {
    name: "total",
    desc: "Set the total number of items, as if the underlying list changed.",
    category: "settings",
    usage: "!total <item count>",
};

/// Reconfigure the item count. The current page is kept when it still exists.
pub fn run(session: &mut Session, arg1: Option<&str>) -> anyhow::Result<Reply> {
    let Some(total_items) = parse_count(arg1) else {
        return Ok(usage_reply(&META));
    };

    let config = PaginationConfig {
        total_items,
        ..session.controller().config().clone()
    };
    let state = session.controller_mut().replace_config(config);
    info!(total_items, total_pages = state.total_pages, "item count reconfigured");

    Ok(Reply::Text(session.render()))
}
