use std::io::{BufRead, Write};

use anyhow::Result;
use jira_cli_api::error::ApiError;
use jira_cli_api::issues::{self, Outcome};
use jira_cli_api::models::{CreateIssueRequest, UpdateIssueRequest};
use jira_cli_api::ApiClient;
use jira_cli_output::{Console, Tone};

use crate::terminal::Terminal;

// Parameters

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetIssueParams {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateIssueParams {
    pub project_key: String,
    pub summary: String,
    pub issue_type: String,
}

/// Blank `summary` or `description` means "leave unchanged".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateIssueParams {
    pub key: String,
    pub summary: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListIssuesParams {
    pub project_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteIssueParams {
    pub key: String,
}

impl GetIssueParams {
    pub fn prompt<R: BufRead, W: Write>(term: &mut Terminal<R, W>) -> Result<Self> {
        Ok(Self {
            key: term.ask("Enter the Jira issue key (e.g., PROJ-123): ")?,
        })
    }
}

impl CreateIssueParams {
    pub fn prompt<R: BufRead, W: Write>(term: &mut Terminal<R, W>) -> Result<Self> {
        let project_key = term.ask("Enter the project key: ")?;
        let summary = term.ask("Enter the issue summary: ")?;
        let issue_type = term.ask("Enter the issue type (e.g., Bug, Task): ")?;
        Ok(Self {
            project_key,
            summary,
            issue_type,
        })
    }
}

impl UpdateIssueParams {
    pub fn prompt<R: BufRead, W: Write>(term: &mut Terminal<R, W>) -> Result<Self> {
        let key = term.ask("Enter the Jira issue key to update (e.g., PROJ-123): ")?;
        let summary = term.ask("Enter the new summary (leave blank to keep current): ")?;
        let description =
            term.ask("Enter the new description (leave blank to keep current): ")?;
        Ok(Self {
            key,
            summary,
            description,
        })
    }
}

impl ListIssuesParams {
    pub fn prompt<R: BufRead, W: Write>(term: &mut Terminal<R, W>) -> Result<Self> {
        Ok(Self {
            project_key: term.ask("Enter the Jira project key: ")?,
        })
    }
}

impl DeleteIssueParams {
    pub fn prompt<R: BufRead, W: Write>(term: &mut Terminal<R, W>) -> Result<Self> {
        Ok(Self {
            key: term.ask("Enter the Jira issue key to delete (e.g., PROJ-123): ")?,
        })
    }
}

// Operations
//
// Server rejections and transport failures are printed and swallowed; only
// console write errors are returned.

pub async fn get_issue<W: Write>(
    client: &ApiClient,
    params: &GetIssueParams,
    console: &mut Console<W>,
) -> Result<()> {
    const ACTION: &str = "fetch issue";

    match client.url(&issues::issue_path(&params.key)) {
        Ok(url) => console.line(Tone::Info, format!("Fetching issue from URL: {url}"))?,
        Err(err) => return report_error(console, ACTION, &err),
    }

    match issues::get_issue(client, &params.key).await {
        Ok(Outcome::Success(issue)) => {
            console.blank()?;
            console.line(Tone::Success, "Issue Details:")?;
            console.plain(format!("Key: {}", issue.key))?;
            console.plain(format!("Summary: {}", issue.summary()))?;
            console.plain(format!("Status: {}", issue.status()))?;
            Ok(())
        }
        Ok(Outcome::Failure { status, body }) => {
            report_rejection(console, ACTION, status.as_u16(), &body)
        }
        Err(err) => report_error(console, ACTION, &err),
    }
}

pub async fn create_issue<W: Write>(
    client: &ApiClient,
    params: &CreateIssueParams,
    console: &mut Console<W>,
) -> Result<()> {
    const ACTION: &str = "create issue";

    let request = CreateIssueRequest::new(
        params.project_key.as_str(),
        params.summary.as_str(),
        params.issue_type.as_str(),
    );

    match issues::create_issue(client, &request).await {
        Ok(Outcome::Success(created)) => {
            tracing::info!(key = %created.key, id = ?created.id, "Issue created");
            console.line(
                Tone::Success,
                format!("Issue created successfully! Key: {}", created.key),
            )?;
            Ok(())
        }
        Ok(Outcome::Failure { status, body }) => {
            report_rejection(console, ACTION, status.as_u16(), &body)
        }
        Err(err) => report_error(console, ACTION, &err),
    }
}

pub async fn update_issue<W: Write>(
    client: &ApiClient,
    params: &UpdateIssueParams,
    console: &mut Console<W>,
) -> Result<()> {
    const ACTION: &str = "update issue";

    let request = UpdateIssueRequest::from_input(&params.summary, &params.description);

    match issues::update_issue(client, &params.key, &request).await {
        Ok(Outcome::Success(())) => {
            console.line(Tone::Success, "Issue updated successfully!")?;
            Ok(())
        }
        Ok(Outcome::Failure { status, body }) => {
            report_rejection(console, ACTION, status.as_u16(), &body)
        }
        Err(err @ ApiError::NothingToUpdate) => {
            console.error(format!("Error: {err}"))?;
            Ok(())
        }
        Err(err) => report_error(console, ACTION, &err),
    }
}

pub async fn list_issues<W: Write>(
    client: &ApiClient,
    params: &ListIssuesParams,
    console: &mut Console<W>,
) -> Result<()> {
    const ACTION: &str = "list issues";

    match issues::list_issues(client, &params.project_key).await {
        Ok(Outcome::Success(found)) => {
            console.blank()?;
            console.line(Tone::Success, "List of Issues:")?;
            for issue in &found {
                console.plain(format!(
                    "- {}: {} (Status: {})",
                    issue.key,
                    issue.summary(),
                    issue.status()
                ))?;
            }
            Ok(())
        }
        Ok(Outcome::Failure { status, body }) => {
            report_rejection(console, ACTION, status.as_u16(), &body)
        }
        Err(err) => report_error(console, ACTION, &err),
    }
}

pub async fn delete_issue<W: Write>(
    client: &ApiClient,
    params: &DeleteIssueParams,
    console: &mut Console<W>,
) -> Result<()> {
    const ACTION: &str = "delete issue";

    match issues::delete_issue(client, &params.key).await {
        Ok(Outcome::Success(())) => {
            console.line(Tone::Success, "Issue deleted successfully!")?;
            Ok(())
        }
        Ok(Outcome::Failure { status, body }) => {
            report_rejection(console, ACTION, status.as_u16(), &body)
        }
        Err(err) => report_error(console, ACTION, &err),
    }
}

fn report_rejection<W: Write>(
    console: &mut Console<W>,
    action: &str,
    status: u16,
    body: &str,
) -> Result<()> {
    console.error(format!("Error: Unable to {action}. {status} - {body}"))?;
    Ok(())
}

fn report_error<W: Write>(console: &mut Console<W>, action: &str, err: &ApiError) -> Result<()> {
    tracing::debug!(error = ?err, "Request did not complete");
    console.error(format!("Error: Unable to {action}. {err}"))?;
    if let Some(hint) = err.suggestion() {
        console.line(Tone::Info, format!("Hint: {hint}"))?;
    }
    Ok(())
}
