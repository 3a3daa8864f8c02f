use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};

use anyhow::{Context, Result};
use jira_cli_output::{Console, Painter};
use thiserror::Error;

/// Raised when the input stream ends while waiting for an answer.
#[derive(Error, Debug)]
#[error("input closed")]
pub struct InputClosed;

/// Question/answer surface: prompts go to the console, answers come from `input`.
pub struct Terminal<R, W: Write> {
    input: R,
    console: Console<W>,
    hide_secrets: bool,
}

impl Terminal<StdinLock<'static>, Stdout> {
    pub fn stdio(painter: Painter) -> Self {
        let stdin = io::stdin();
        let hide_secrets = stdin.is_terminal();
        Self {
            input: stdin.lock(),
            console: Console::stdout(painter),
            hide_secrets,
        }
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, console: Console<W>) -> Self {
        Self {
            input,
            console,
            hide_secrets: false,
        }
    }

    pub fn console(&mut self) -> &mut Console<W> {
        &mut self.console
    }

    pub fn into_console(self) -> Console<W> {
        self.console
    }

    /// Print `question` and return the trimmed answer.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        self.console.prompt(question)?;
        self.read_line()
    }

    /// Like [`Terminal::ask`], without echo when attached to a real terminal.
    pub fn ask_secret(&mut self, question: &str) -> Result<String> {
        self.console.prompt(question)?;
        if self.hide_secrets {
            let secret = rpassword::read_password().context("Failed to read secret")?;
            return Ok(secret.trim().to_string());
        }
        self.read_line()
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Err(InputClosed.into());
        }
        Ok(line.trim().to_string())
    }
}
