pub mod navigation;
pub mod session;
pub mod settings;
pub mod utility;

use tracing::{debug, warn};

use pager_utils::COMMAND_PREFIX;

pub use session::Session;

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    navigation::first::META,
    navigation::previous::META,
    navigation::next::META,
    navigation::last::META,
    navigation::page::META,
    navigation::before::META,
    navigation::after::META,
    settings::size::META,
    settings::sizes::META,
    settings::total::META,
    settings::window::META,
    utility::show::META,
    utility::help::META,
    utility::quit::META,
    // Add new commands here
];

/// Outcome of a handled input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to show the user.
    Text(String),
    /// The user asked to leave.
    Quit,
    /// The line was not a command.
    Ignored,
}

pub fn handle_line(session: &mut Session, line: &str) -> anyhow::Result<Reply> {
    let content = line.trim();

    if !content.starts_with(COMMAND_PREFIX) {
        return Ok(Reply::Ignored);
    }

    let content = content.trim_start_matches(COMMAND_PREFIX).trim();
    let mut command_and_rest = content.splitn(2, char::is_whitespace);
    let cmd = command_and_rest.next().unwrap_or("").to_ascii_lowercase();
    let arg1 = command_and_rest
        .next()
        .map(str::trim)
        .and_then(|rest| rest.split_whitespace().next());

    debug!(command = %cmd, ?arg1, "dispatching command");

    let reply = match cmd.as_str() {
        "first" => navigation::first::run(session)?,
        "prev" | "previous" => navigation::previous::run(session)?,
        "next" => navigation::next::run(session)?,
        "last" => navigation::last::run(session)?,
        "page" => navigation::page::run(session, arg1)?,
        "before" => navigation::before::run(session)?,
        "after" => navigation::after::run(session)?,

        "size" => settings::size::run(session, arg1)?,
        "sizes" => settings::sizes::run(session)?,
        "total" => settings::total::run(session, arg1)?,
        "window" => settings::window::run(session, arg1)?,

        "show" => utility::show::run(session)?,
        "help" => utility::help::run(arg1)?,
        "quit" | "exit" => utility::quit::run()?,
        // Add new commands here
        _ => {
            warn!(command = %cmd, "unknown command");
            Reply::Text(format!(
                "Unknown command `{cmd}`. Try `{COMMAND_PREFIX}help`."
            ))
        }
    };

    Ok(reply)
}

/// Usage reply for a command that received a bad argument.
pub(crate) fn usage_reply(meta: &CommandMeta) -> Reply {
    Reply::Text(format!("Usage: `{}`", meta.usage))
}
