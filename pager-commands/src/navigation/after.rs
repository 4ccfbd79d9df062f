use crate::{CommandMeta, Reply, Session};

pub const META: CommandMeta = CommandMeta {
    name: "after",
    desc: "Reveal the block of pages after the visible ones.",
    category: "navigation",
    usage: "!after",
};

/// Press the trailing `…` control.
pub fn run(session: &mut Session) -> anyhow::Result<Reply> {
    let event = session.controller_mut().load_window_after();
    Ok(super::reply_after_navigation(session, event, "No pages after this one."))
}
