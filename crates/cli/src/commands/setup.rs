use std::io::{BufRead, Write};

use anyhow::Result;
use jira_cli_config::{ConfigStore, StoredConfig};
use jira_cli_output::{Console, Tone};

use crate::terminal::Terminal;

/// Answers collected by the setup prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupParams {
    pub base_url: String,
    pub email: String,
    pub api_token: String,
}

impl SetupParams {
    pub fn prompt<R: BufRead, W: Write>(term: &mut Terminal<R, W>) -> Result<Self> {
        let base_url =
            term.ask("Enter your Jira base URL (e.g., https://yourdomain.atlassian.net): ")?;
        let email = term.ask("Enter your Jira email: ")?;
        let api_token = term.ask_secret("Enter your Jira API token: ")?;

        Ok(Self {
            base_url,
            email,
            api_token,
        })
    }
}

impl From<SetupParams> for StoredConfig {
    fn from(params: SetupParams) -> Self {
        StoredConfig {
            base_url: params.base_url,
            email: params.email,
            api_token: params.api_token,
        }
    }
}

pub fn save<W: Write>(
    store: &ConfigStore,
    params: SetupParams,
    console: &mut Console<W>,
) -> Result<()> {
    store.save(&params.into())?;
    tracing::info!(path = %store.path().display(), "Configuration written");
    console.line(Tone::Success, "Configuration saved successfully!")?;
    Ok(())
}

/// Prompt for connection settings and store them.
pub fn run<R: BufRead, W: Write>(store: &ConfigStore, term: &mut Terminal<R, W>) -> Result<()> {
    let params = SetupParams::prompt(term)?;
    save(store, params, term.console())
}
