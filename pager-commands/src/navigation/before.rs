use crate::{CommandMeta, Reply, Session};

pub const META: CommandMeta = CommandMeta {
    name: "before",
    desc: "Reveal the block of pages before the visible ones.",
    category: "navigation",
    usage: "!before",
};

/// Press the leading `…` control.
pub fn run(session: &mut Session) -> anyhow::Result<Reply> {
    let event = session.controller_mut().load_window_before();
    Ok(super::reply_after_navigation(session, event, "No pages before this one."))
}
