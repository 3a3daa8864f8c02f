//! Issue CRUD endpoints. Each call sends exactly one request and compares the
//! reply against the single status code that means success for it.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::models::{CreateIssueRequest, CreatedIssue, Issue, SearchResponse, UpdateIssueRequest};
use crate::{ApiClient, ApiResponse};

const ISSUE_PATH: &str = "/rest/api/3/issue";
const SEARCH_PATH: &str = "/rest/api/3/search";

/// Result of a request that reached the server.
#[derive(Debug, Clone)]
pub enum Outcome<T> {
    Success(T),
    /// The server answered with something other than the expected status.
    Failure { status: StatusCode, body: String },
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

pub fn issue_path(key: &str) -> String {
    format!("{ISSUE_PATH}/{key}")
}

pub async fn get_issue(client: &ApiClient, key: &str) -> Result<Outcome<Issue>> {
    let url = client.url(&issue_path(key))?;
    let response = client.get(url).await?;
    parse(response, StatusCode::OK)
}

pub async fn create_issue(
    client: &ApiClient,
    request: &CreateIssueRequest,
) -> Result<Outcome<CreatedIssue>> {
    let url = client.url(ISSUE_PATH)?;
    let response = client.post(url, request).await?;
    parse(response, StatusCode::CREATED)
}

/// Refuses to send an update with no fields set.
pub async fn update_issue(
    client: &ApiClient,
    key: &str,
    request: &UpdateIssueRequest,
) -> Result<Outcome<()>> {
    if request.is_empty() {
        return Err(ApiError::NothingToUpdate);
    }

    let url = client.url(&issue_path(key))?;
    let response = client.put(url, request).await?;
    Ok(expect_empty(response, StatusCode::NO_CONTENT))
}

/// All issues of a project, as returned by a single search call.
pub async fn list_issues(client: &ApiClient, project_key: &str) -> Result<Outcome<Vec<Issue>>> {
    let mut url = client.url(SEARCH_PATH)?;
    url.query_pairs_mut()
        .append_pair("jql", &format!("project={project_key}"));

    let response = client.get(url).await?;
    Ok(match parse::<SearchResponse>(response, StatusCode::OK)? {
        Outcome::Success(search) => Outcome::Success(search.issues),
        Outcome::Failure { status, body } => Outcome::Failure { status, body },
    })
}

pub async fn delete_issue(client: &ApiClient, key: &str) -> Result<Outcome<()>> {
    let url = client.url(&issue_path(key))?;
    let response = client.delete(url).await?;
    Ok(expect_empty(response, StatusCode::NO_CONTENT))
}

fn parse<T: DeserializeOwned>(response: ApiResponse, expected: StatusCode) -> Result<Outcome<T>> {
    if response.status != expected {
        debug!(status = %response.status, expected = %expected, "Unexpected status");
        return Ok(Outcome::Failure {
            status: response.status,
            body: response.body,
        });
    }
    Ok(Outcome::Success(response.json()?))
}

fn expect_empty(response: ApiResponse, expected: StatusCode) -> Outcome<()> {
    if response.status == expected {
        Outcome::Success(())
    } else {
        debug!(status = %response.status, expected = %expected, "Unexpected status");
        Outcome::Failure {
            status: response.status,
            body: response.body,
        }
    }
}
