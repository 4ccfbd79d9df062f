use pager_utils::parse::parse_positive;

use crate::{CommandMeta, Reply, Session, usage_reply};

pub const META: CommandMeta = CommandMeta {
    name: "size",
    desc: "Change the number of items per page.",
    category: "settings",
    usage: "!size <items per page>",
};

pub fn run(session: &mut Session, arg1: Option<&str>) -> anyhow::Result<Reply> {
    let Some(size) = parse_positive(arg1) else {
        return Ok(usage_reply(&META));
    };

    let event = session.choose_page_size(size);
    let out = match event {
        Some(_) => session.render(),
        None => format!("Already showing {size} items per page.\n{}", session.render()),
    };

    Ok(Reply::Text(out))
}
