use std::io::{BufRead, Write};
use std::process::ExitCode;

use anyhow::Result;
use jira_cli_api::ApiClient;
use jira_cli_auth::build_headers;
use jira_cli_config::ConfigStore;
use jira_cli_output::Tone;
use tracing::debug;

use crate::commands::issues::{
    self, CreateIssueParams, DeleteIssueParams, GetIssueParams, ListIssuesParams,
    UpdateIssueParams,
};
use crate::commands::setup;
use crate::terminal::{InputClosed, Terminal};

const RULE_WIDTH: usize = 60;
const MISSING_CONFIG: &str = "Error: Configuration not found. Please run setup.";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MenuChoice {
    GetIssue,
    CreateIssue,
    UpdateIssue,
    ListIssues,
    DeleteIssue,
    Setup,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::GetIssue,
        MenuChoice::CreateIssue,
        MenuChoice::UpdateIssue,
        MenuChoice::ListIssues,
        MenuChoice::DeleteIssue,
        MenuChoice::Setup,
        MenuChoice::Exit,
    ];

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::GetIssue),
            "2" => Some(MenuChoice::CreateIssue),
            "3" => Some(MenuChoice::UpdateIssue),
            "4" => Some(MenuChoice::ListIssues),
            "5" => Some(MenuChoice::DeleteIssue),
            "6" => Some(MenuChoice::Setup),
            "7" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|choice| *choice == self)
            .map_or(0, |index| index + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::GetIssue => "Get an Issue",
            MenuChoice::CreateIssue => "Create an Issue",
            MenuChoice::UpdateIssue => "Update an Issue",
            MenuChoice::ListIssues => "List All Issues in a Project",
            MenuChoice::DeleteIssue => "Delete an Issue",
            MenuChoice::Setup => "Setup Configuration",
            MenuChoice::Exit => "Exit",
        }
    }

    fn tone(self) -> Tone {
        match self {
            MenuChoice::Setup => Tone::Banner,
            MenuChoice::Exit => Tone::Error,
            _ => Tone::Info,
        }
    }

    fn needs_config(self) -> bool {
        !matches!(self, MenuChoice::Setup | MenuChoice::Exit)
    }
}

/// How the interactive session ended.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ShellExit {
    Normal,
    MissingConfig,
}

impl From<ShellExit> for ExitCode {
    fn from(exit: ShellExit) -> Self {
        match exit {
            ShellExit::Normal => ExitCode::SUCCESS,
            ShellExit::MissingConfig => ExitCode::from(1),
        }
    }
}

enum Connection {
    Ready(ApiClient),
    /// No configuration on disk, or it cannot be read back; fatal.
    Missing,
    /// Configuration exists but the client cannot be built from it.
    Unusable,
}

/// The numbered menu loop.
pub struct Shell<R, W: Write> {
    store: ConfigStore,
    term: Terminal<R, W>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(store: ConfigStore, term: Terminal<R, W>) -> Self {
        Self { store, term }
    }

    pub fn into_terminal(self) -> Terminal<R, W> {
        self.term
    }

    pub async fn run(&mut self) -> Result<ShellExit> {
        match self.menu_loop().await {
            Err(err) if err.is::<InputClosed>() => {
                self.term.console().blank()?;
                self.goodbye()
            }
            other => other,
        }
    }

    async fn menu_loop(&mut self) -> Result<ShellExit> {
        loop {
            self.show_menu()?;

            let input = self.term.ask("Enter your choice: ")?;
            let Some(choice) = MenuChoice::parse(&input) else {
                self.term
                    .console()
                    .error("Invalid choice. Please try again.")?;
                continue;
            };
            debug!(?choice, "Menu selection");

            match choice {
                MenuChoice::Exit => return self.goodbye(),
                MenuChoice::Setup => self.setup()?,
                _ => {
                    if let Some(exit) = self.dispatch(choice).await? {
                        return Ok(exit);
                    }
                }
            }
        }
    }

    fn setup(&mut self) -> Result<()> {
        match setup::run(&self.store, &mut self.term) {
            Err(err) if !err.is::<InputClosed>() => {
                self.term.console().error(format!("Error: {err:#}"))?;
                Ok(())
            }
            other => other,
        }
    }

    async fn dispatch(&mut self, choice: MenuChoice) -> Result<Option<ShellExit>> {
        debug_assert!(choice.needs_config());

        let client = match self.connect()? {
            Connection::Ready(client) => client,
            Connection::Missing => return Ok(Some(ShellExit::MissingConfig)),
            Connection::Unusable => return Ok(None),
        };

        let term = &mut self.term;
        match choice {
            MenuChoice::GetIssue => {
                let params = GetIssueParams::prompt(term)?;
                issues::get_issue(&client, &params, term.console()).await?
            }
            MenuChoice::CreateIssue => {
                let params = CreateIssueParams::prompt(term)?;
                issues::create_issue(&client, &params, term.console()).await?
            }
            MenuChoice::UpdateIssue => {
                let params = UpdateIssueParams::prompt(term)?;
                issues::update_issue(&client, &params, term.console()).await?
            }
            MenuChoice::ListIssues => {
                let params = ListIssuesParams::prompt(term)?;
                issues::list_issues(&client, &params, term.console()).await?
            }
            MenuChoice::DeleteIssue => {
                let params = DeleteIssueParams::prompt(term)?;
                issues::delete_issue(&client, &params, term.console()).await?
            }
            MenuChoice::Setup | MenuChoice::Exit => {}
        }

        Ok(None)
    }

    /// Load the stored configuration and build a client from it.
    fn connect(&mut self) -> Result<Connection> {
        let config = match self.store.load() {
            Ok(config) => config,
            Err(err) => {
                debug!(error = %err, "Configuration unavailable");
                self.term.console().error(MISSING_CONFIG)?;
                return Ok(Connection::Missing);
            }
        };

        let headers = build_headers(&config.email, &config.api_token);
        match ApiClient::new(&config.base_url, &headers) {
            Ok(client) => Ok(Connection::Ready(client)),
            Err(err) => {
                let console = self.term.console();
                console.error(format!("Error: {err}"))?;
                if let Some(hint) = err.suggestion() {
                    console.line(Tone::Info, format!("Hint: {hint}"))?;
                }
                Ok(Connection::Unusable)
            }
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        let console = self.term.console();

        console.blank()?;
        console.plain(&rule)?;
        console.line(Tone::Banner, "Welcome to the Jira CLI Tool")?;
        console.plain(&rule)?;
        for choice in MenuChoice::ALL {
            console.line(
                choice.tone(),
                format!("{}. {}", choice.number(), choice.label()),
            )?;
        }
        console.plain(&rule)?;
        Ok(())
    }

    fn goodbye(&mut self) -> Result<ShellExit> {
        self.term.console().line(Tone::Success, "Goodbye!")?;
        Ok(ShellExit::Normal)
    }
}
