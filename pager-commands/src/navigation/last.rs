use crate::{CommandMeta, Reply, Session};

pub const META: CommandMeta = CommandMeta {
    name: "last",
    desc: "Jump to the last page.",
    category: "navigation",
    usage: "!last",
};

pub fn run(session: &mut Session) -> anyhow::Result<Reply> {
    let event = session.controller_mut().last_page();
    Ok(super::reply_after_navigation(session, event, "There are no pages yet."))
}
