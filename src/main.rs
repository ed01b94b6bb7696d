use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use surf_coffee::config::Config;
use surf_coffee::logging::{default_log_path, init_tracing};
use surf_coffee::ui::runtime;

/// Order coffee from your terminal.
#[derive(Debug, Parser)]
#[command(name = "surf-coffee", version, about)]
struct Cli {
    /// Config file (default: <config dir>/surf-coffee/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log file (default: <cache dir>/surf-coffee/surf-coffee.log)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Reserve a header band at the top of the screen
    #[arg(long)]
    full_screen: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    init_tracing(&log_path)
        .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    if cli.full_screen {
        config.host.full_screen = true;
    }

    runtime::run(config).await.context("Terminal UI failed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn defaults_without_args() {
        let cli = Cli::parse_from(["surf-coffee"]);
        assert!(cli.config.is_none());
        assert!(cli.log_file.is_none());
        assert!(!cli.full_screen);
    }

    #[test]
    fn parses_paths_and_flags() {
        let cli = Cli::parse_from([
            "surf-coffee",
            "--config",
            "/tmp/surf.toml",
            "--log-file",
            "/tmp/surf.log",
            "--full-screen",
        ]);
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/surf.toml")));
        assert_eq!(cli.log_file.as_deref(), Some(std::path::Path::new("/tmp/surf.log")));
        assert!(cli.full_screen);
    }
}
