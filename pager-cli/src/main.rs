mod settings;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pager_commands::{Reply, Session, handle_line};
use pager_utils::COMMAND_PREFIX;
use pager_utils::labels::Labels;

use crate::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries renders and events
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Load the .env file
    dotenvy::dotenv().ok();

    let settings = Settings::from_env();
    let config = settings.pagination_config()?;
    info!(
        total_items = config.total_items,
        page_size = config.page_size,
        window_size = config.window_size,
        strict = settings.strict,
        "pager configured"
    );

    let mut session = Session::new(config, Labels::from_options(&settings.labels), settings.view);

    // Forward every committed page change to the host as a JSON line
    session
        .controller_mut()
        .subscribe(|event| match serde_json::to_string(event) {
            Ok(line) => println!("event {line}"),
            Err(source) => error!(?source, "failed to encode page change event"),
        });

    println!("{}", session.render());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let reply = match handle_line(&mut session, &line) {
            Ok(reply) => reply,
            Err(source) => {
                error!(?source, "command failed");
                continue;
            }
        };

        match reply {
            Reply::Text(text) => println!("{text}"),
            Reply::Quit => break,
            Reply::Ignored if line.trim().is_empty() => {}
            Reply::Ignored => println!("Commands start with `{COMMAND_PREFIX}`. Try `{COMMAND_PREFIX}help`."),
        }
    }

    info!("pager session closed");
    Ok(()) // Return Success, shutdown cleanly
}
