use crate::{CommandMeta, Reply, Session};

pub const META: CommandMeta = CommandMeta {
    name: "next",
    desc: "Go forward one page.",
    category: "navigation",
    usage: "!next",
};

pub fn run(session: &mut Session) -> anyhow::Result<Reply> {
    let event = session.controller_mut().next_page();
    Ok(super::reply_after_navigation(session, event, "Already on the last page."))
}
