use pager_core::PaginationConfig;
use tracing::info;

use pager_utils::parse::parse_positive;

use crate::{CommandMeta, Reply, Session, usage_reply};

pub const META: CommandMeta = CommandMeta {
    name: "window",
    desc: "Set how many page buttons are visible at once.",
    category: "settings",
    usage: "!window <button count>",
};

pub fn run(session: &mut Session, arg1: Option<&str>) -> anyhow::Result<Reply> {
    let Some(window_size) = parse_positive(arg1) else {
        return Ok(usage_reply(&META));
    };

    let config = PaginationConfig {
        window_size,
        ..session.controller().config().clone()
    };
    session.controller_mut().replace_config(config);
    info!(window_size, "window size reconfigured");

    Ok(Reply::Text(session.render()))
}
