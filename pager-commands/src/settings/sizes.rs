use crate::{CommandMeta, Reply, Session};

pub const META: CommandMeta = CommandMeta {
    name: "sizes",
    desc: "Open the page size selector.",
    category: "settings",
    usage: "!sizes",
};

pub fn run(session: &mut Session) -> anyhow::Result<Reply> {
    if session.controller().config().page_size_options.is_empty() {
        return Ok(Reply::Text("No page size options are configured.".to_owned()));
    }

    if session.view_options().disabled {
        return Ok(Reply::Text("Pagination is disabled.".to_owned()));
    }

    session.open_selector();
    Ok(Reply::Text(session.render()))
}
