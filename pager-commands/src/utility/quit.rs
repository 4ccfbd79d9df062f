use crate::{CommandMeta, Reply};

pub const META: CommandMeta = CommandMeta {
    name: "quit",
    desc: "Leave the session.",
    category: "utility",
    usage: "!quit",
};

pub fn run() -> anyhow::Result<Reply> {
    Ok(Reply::Quit)
}
