//! `filetool` - a small file utility built on clic.
//!
//! Inspects paths and counts lines, words and characters. Settings are
//! read from `<config dir>/filetool/config.toml` when present; log output
//! is controlled with `FILETOOL_LOG` (a `tracing` filter directive).

mod cli;

use clic::Settings;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;

    let settings = Settings::discover(cli::APP_NAME)?;
    init_tracing(&settings);

    let mut app = cli::build(&settings)?;
    let code = app.run(std::env::args());
    app.destroy();

    std::process::exit(code);
}

/// Installs a stderr subscriber filtered by `FILETOOL_LOG`, then settings.
fn init_tracing(settings: &Settings) {
    let fallback = settings
        .log_filter
        .as_deref()
        .unwrap_or(cli::DEFAULT_LOG_FILTER);

    let filter = EnvFilter::try_from_env(cli::LOG_ENV)
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(cli::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
