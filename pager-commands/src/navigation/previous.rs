use crate::{CommandMeta, Reply, Session};

pub const META: CommandMeta = CommandMeta {
    name: "prev",
    desc: "Go back one page.",
    category: "navigation",
    usage: "!prev",
};

pub fn run(session: &mut Session) -> anyhow::Result<Reply> {
    let event = session.controller_mut().previous_page();
    Ok(super::reply_after_navigation(session, event, "Already on the first page."))
}
