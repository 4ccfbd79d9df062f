use pager_core::{clamp_page, page_window, total_pages};
use pager_utils::parse::parse_one_based_page;

use crate::{COMMANDS, CommandMeta, Reply, usage_reply};

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "!help [page]",
};

const HELP_COMMANDS_PER_PAGE: usize = 8;

/// Render the command catalog, one page at a time.
pub fn run(arg1: Option<&str>) -> anyhow::Result<Reply> {
    let requested_page = match arg1 {
        Some(_) => match parse_one_based_page(arg1) {
            Some(page) => page,
            None => return Ok(usage_reply(&META)),
        },
        None => 1,
    };

    let commands = sorted_commands();
    let total = total_pages(commands.len(), HELP_COMMANDS_PER_PAGE);
    if requested_page > total {
        return Ok(Reply::Text(format!(
            "Page {requested_page} does not exist. Available pages: 1-{total}."
        )));
    }

    let page = clamp_page(requested_page, total);
    let (start, end) = page_window(commands.len(), HELP_COMMANDS_PER_PAGE, page);
    let mut out = commands[start..end]
        .iter()
        .map(|command| format!("{:<28} {} ({})", command.usage, command.desc, command.category))
        .collect::<Vec<_>>()
        .join("\n");

    if total > 1 {
        out.push_str(&format!("\nPage {page}/{total}"));
    }

    Ok(Reply::Text(out))
}

fn sorted_commands() -> Vec<&'static CommandMeta> {
    let mut commands: Vec<&CommandMeta> = COMMANDS.iter().collect();
    commands.sort_by_key(|command| (command.category, command.name));
    commands
}
