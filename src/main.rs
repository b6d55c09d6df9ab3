mod config;
mod csv;
mod domain;
mod error;
mod html;
mod notify;
mod source;

use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    domain::event::sort_by_date,
    error::Result,
    notify::{Email, MessageId, Notifier, ResendClient},
};

fn main() {
    // `.env` may carry RUST_LOG, so it is loaded before logging is set up and
    // its own failure goes straight to stderr
    if let Err(e) = load_env_file(Path::new(".env")) {
        eprintln!("could not load .env: {e}");
        std::process::exit(1);
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match execute(Config::from_env()) {
        Ok(id) => println!("{id}"),
        Err(e) => {
            tracing::error!("{e:#}");
            std::process::exit(1);
        }
    }
}

/// Load `path` into the process environment. A missing file is not an error.
fn load_env_file(path: &Path) -> std::result::Result<(), dotenvy::Error> {
    match dotenvy::from_path(path) {
        Err(err) if !err.not_found() => Err(err),
        _ => Ok(()),
    }
}

fn execute(config: config::Result<Config>) -> anyhow::Result<MessageId> {
    let config = config?;
    let notifier = ResendClient::new(&config.api_url, &config.api_key)?;
    Ok(run(&config, &notifier)?)
}

/// Copy, parse, sort, render and send. Stops at the first failing stage.
fn run(config: &Config, notifier: &impl Notifier) -> Result<MessageId> {
    source::prepare_working_file(&config.source_path, &config.working_path)?;

    let mut events = csv::read_file(&config.working_path)?;
    tracing::info!(
        "loaded {} events from {}",
        events.len(),
        config.working_path.display()
    );

    sort_by_date(&mut events);
    for event in &events {
        tracing::debug!(
            "event {} on {}/{}/{}: {}",
            event.id,
            event.day,
            event.month,
            event.year,
            event.name
        );
    }
    let html = html::render(&events)?;

    Ok(notifier.send(&Email::reminder(&config.recipient, html))?)
}
