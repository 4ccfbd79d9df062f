use crate::{CommandMeta, Reply, Session};

pub const META: CommandMeta = CommandMeta {
    name: "show",
    desc: "Render the pagination controls.",
    category: "utility",
    usage: "!show",
};

pub fn run(session: &mut Session) -> anyhow::Result<Reply> {
    Ok(Reply::Text(session.render()))
}
