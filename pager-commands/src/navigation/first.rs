use crate::{CommandMeta, Reply, Session};

pub const META: CommandMeta = CommandMeta {
    name: "first",
    desc: "Jump to the first page.",
    category: "navigation",
    usage: "!first",
};

pub fn run(session: &mut Session) -> anyhow::Result<Reply> {
    let event = session.controller_mut().first_page();
    Ok(super::reply_after_navigation(session, event, "There are no pages yet."))
}
