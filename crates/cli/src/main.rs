use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::Parser;
use jira_cli::commands::setup;
use jira_cli::{Shell, Terminal};
use jira_cli_config::{ConfigStore, DEFAULT_CONFIG_FILE};
use jira_cli_output::Painter;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "jira-cli", version, about = "Jira CLI Tool", long_about = None)]
struct Cli {
    /// Configure the application to connect to Jira
    #[arg(long)]
    setup: bool,

    /// Path to the config file
    #[arg(long, env = "JIRA_CLI_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable verbose logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let store = ConfigStore::new(cli.config);
    let mut term = Terminal::stdio(Painter::new(!cli.no_color));

    if cli.setup {
        setup::run(&store, &mut term)?;
        return Ok(ExitCode::SUCCESS);
    }

    let exit = Shell::new(store, term).run().await?;
    Ok(exit.into())
}

fn init_tracing(debug: bool) -> Result<()> {
    let default = if debug {
        "warn,jira_cli=debug,jira_cli_api=debug,jira_cli_config=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!("failed to initialize logger: {err}"))
}
