//! Request and response records for the issue endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub key: String,
    #[serde(default)]
    pub fields: IssueFields,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueFields {
    pub summary: Option<String>,
    pub status: Option<IssueStatus>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssueStatus {
    pub name: String,
}

impl Issue {
    pub fn summary(&self) -> &str {
        self.fields.summary.as_deref().unwrap_or("")
    }

    pub fn status(&self) -> &str {
        self.fields
            .status
            .as_ref()
            .map(|s| s.name.as_str())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub issues: Vec<Issue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIssue {
    pub key: String,
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateIssueRequest {
    pub fields: CreateIssueFields,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateIssueFields {
    pub project: ProjectRef,
    pub summary: String,
    pub issuetype: IssueTypeRef,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectRef {
    pub key: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct IssueTypeRef {
    pub name: String,
}

impl CreateIssueRequest {
    pub fn new(
        project_key: impl Into<String>,
        summary: impl Into<String>,
        issue_type: impl Into<String>,
    ) -> Self {
        Self {
            fields: CreateIssueFields {
                project: ProjectRef {
                    key: project_key.into(),
                },
                summary: summary.into(),
                issuetype: IssueTypeRef {
                    name: issue_type.into(),
                },
            },
        }
    }
}

/// Partial update: unset fields are left out of the payload entirely.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateIssueRequest {
    pub fields: IssueFieldsUpdate,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct IssueFieldsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<AdfDocument>,
}

impl UpdateIssueRequest {
    /// Build an update from raw input. Blank values count as "not given".
    pub fn from_input(summary: &str, description: &str) -> Self {
        let summary = Some(summary.trim()).filter(|s| !s.is_empty());
        let description = Some(description.trim()).filter(|s| !s.is_empty());

        Self {
            fields: IssueFieldsUpdate {
                summary: summary.map(str::to_owned),
                description: description.map(AdfDocument::text),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.summary.is_none() && self.fields.description.is_none()
    }
}

/// Atlassian Document Format body holding a single paragraph of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdfDocument {
    #[serde(rename = "type")]
    kind: &'static str,
    version: u8,
    content: [AdfParagraph; 1],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdfParagraph {
    #[serde(rename = "type")]
    kind: &'static str,
    content: [AdfText; 1],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdfText {
    #[serde(rename = "type")]
    kind: &'static str,
    text: String,
}

impl AdfDocument {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: "doc",
            version: 1,
            content: [AdfParagraph {
                kind: "paragraph",
                content: [AdfText {
                    kind: "text",
                    text: text.into(),
                }],
            }],
        }
    }
}
