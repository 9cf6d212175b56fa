use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use roster::data::MemberSource;
use roster::ui::terminal_guard::install_panic_hook;
use roster::{util, App, Config};

/// Search, select, edit and delete member records in the terminal
#[derive(Debug, Parser)]
#[command(name = "roster", version, about)]
struct Cli {
    /// Member list to load: an http(s) URL or a local JSON file
    #[arg(long, short)]
    source: Option<String>,

    /// Directory for config and logs (defaults to ~/.roster)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Timeout for URL sources, in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    util::init_data_dir(cli.data_dir);

    // Initialize logging to file (~/.roster/logs/roster.log)
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    let mut config = Config::load();
    if let Some(source) = cli.source {
        config = config.with_source(MemberSource::parse(&source));
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_request_timeout(Duration::from_secs(secs));
    }
    tracing::info!(source = %config.source, "Starting roster");

    install_panic_hook();
    let mut app = App::new(config);
    app.run().await
}
