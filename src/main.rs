use clap::Parser;
use noteme::core::config::{self, NotemeConfig};
use noteme::storage::JsonFileStore;
use noteme::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "noteme", about = "Notes and recurring todos in your terminal")]
struct Args {
    /// Directory holding notes.json and todos.json (default: ~/.noteme)
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("noteme: {e}; using defaults");
        NotemeConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        args.data_dir.as_deref(),
        args.log_level.as_deref(),
    );
    for warning in &resolved.warnings {
        eprintln!("noteme: {warning}");
    }

    // The only fatal storage error: no data directory, no session.
    let store = JsonFileStore::open(&resolved.data_dir)?;

    // File logger: stdout belongs to the alternate screen
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    match OpenOptions::new()
        .create(true)
        .append(true)
        .open(&resolved.log_file)
    {
        Ok(log_file) => {
            let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
        }
        Err(e) => eprintln!(
            "noteme: cannot open log file {}: {e}",
            resolved.log_file.display()
        ),
    }

    for warning in &resolved.warnings {
        log::warn!("{warning}");
    }
    log::info!(
        "noteme starting up (data dir: {}, log level: {})",
        resolved.data_dir.display(),
        resolved.log_level
    );

    tui::run(resolved, Arc::new(store))
}
