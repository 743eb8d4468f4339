//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for responder
#[derive(Parser, Debug)]
#[command(name = "responder")]
#[command(author, version, about = "Question and answer HTTP service backed by a JSON file")]
#[command(long_about = r#"
Responder serves a collection of questions, each with its own list of
answers, over HTTP. The whole collection is stored in a single JSON file.

Configuration files are loaded from (in priority order):
1. RESPONDER_* environment variables (e.g. RESPONDER_SERVER__PORT=8080)
2. --config <path>     Explicit config file
3. ./responder.toml    Project-level config
4. ~/.config/responder/config.toml   Global config

Example:
  responder
  responder --port 8080 --storage-file /var/lib/responder/questions.json
  responder -vv --config ./dev.toml
"#)]
pub struct Cli {
    /// Interface to bind (overrides config)
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// JSON file holding the question collection (overrides config)
    #[arg(short, long, value_name = "PATH")]
    pub storage_file: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::parse_from([
            "responder",
            "--port",
            "8080",
            "--storage-file",
            "data.json",
            "-vv",
        ]);
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.storage_file, Some(PathBuf::from("data.json")));
        assert_eq!(cli.verbose, 2);
        assert!(cli.host.is_none());
        assert!(!cli.no_config);
    }
}
