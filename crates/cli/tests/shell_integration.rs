use std::io::Cursor;
use std::path::Path;

use jira_cli::{Shell, ShellExit, Terminal};
use jira_cli_config::{ConfigStore, StoredConfig};
use jira_cli_output::{Console, Painter};
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_config(dir: &Path, base_url: &str) -> ConfigStore {
    let store = ConfigStore::new(dir.join("config.ini"));
    store
        .save(&StoredConfig {
            base_url: base_url.to_string(),
            email: "test_email".to_string(),
            api_token: "test_token".to_string(),
        })
        .unwrap();
    store
}

fn empty_store(dir: &TempDir) -> ConfigStore {
    ConfigStore::new(dir.path().join("config.ini"))
}

async fn run_shell(store: ConfigStore, input: &str) -> (ShellExit, String) {
    let term = Terminal::new(
        Cursor::new(input.as_bytes().to_vec()),
        Console::new(Vec::new(), Painter::plain()),
    );
    let mut shell = Shell::new(store, term);
    let exit = shell.run().await.unwrap();
    let output = shell.into_terminal().into_console().contents();
    (exit, output)
}

#[tokio::test]
async fn test_menu_lists_all_options() {
    let dir = TempDir::new().unwrap();
    let (exit, output) = run_shell(empty_store(&dir), "7\n").await;

    assert_eq!(exit, ShellExit::Normal);
    assert!(output.contains(&"=".repeat(60)));
    assert!(output.contains("Welcome to the Jira CLI Tool"));
    for option in [
        "1. Get an Issue",
        "2. Create an Issue",
        "3. Update an Issue",
        "4. List All Issues in a Project",
        "5. Delete an Issue",
        "6. Setup Configuration",
        "7. Exit",
    ] {
        assert!(output.contains(option), "missing menu entry {option}");
    }
    assert!(output.contains("Enter your choice: "));
    assert!(output.trim_end().ends_with("Goodbye!"));
}

#[tokio::test]
async fn test_invalid_choice_redisplays_menu() {
    let dir = TempDir::new().unwrap();
    let (exit, output) = run_shell(empty_store(&dir), "9\nexit\n7\n").await;

    assert_eq!(exit, ShellExit::Normal);
    assert_eq!(output.matches("Invalid choice. Please try again.").count(), 2);
    assert_eq!(output.matches("Welcome to the Jira CLI Tool").count(), 3);
}

#[tokio::test]
async fn test_operation_without_config_is_fatal() {
    let dir = TempDir::new().unwrap();
    let (exit, output) = run_shell(empty_store(&dir), "1\nTEST-1\n7\n").await;

    assert_eq!(exit, ShellExit::MissingConfig);
    assert!(output.contains("Error: Configuration not found. Please run setup."));
    assert!(!output.contains("Enter the Jira issue key"));
    assert!(!output.contains("Goodbye!"));
}

#[tokio::test]
async fn test_config_without_section_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.ini");
    std::fs::write(&config_path, "[OTHER]\nkey = value\n").unwrap();

    let (exit, _) = run_shell(ConfigStore::new(config_path), "4\n").await;
    assert_eq!(exit, ShellExit::MissingConfig);
}

#[tokio::test]
async fn test_end_of_input_exits_normally() {
    let dir = TempDir::new().unwrap();
    let (exit, output) = run_shell(empty_store(&dir), "").await;

    assert_eq!(exit, ShellExit::Normal);
    assert!(output.contains("Goodbye!"));
}

#[tokio::test]
async fn test_get_issue_through_menu() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/api/3/issue/TEST-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "key": "TEST-1",
            "fields": {"summary": "Test Issue", "status": {"name": "To Do"}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let store = write_config(dir.path(), &mock_server.uri());
    let (exit, output) = run_shell(store, "1\nTEST-1\n7\n").await;

    assert_eq!(exit, ShellExit::Normal);
    assert!(output.contains("Enter the Jira issue key (e.g., PROJ-123): "));
    assert!(output.contains("Key: TEST-1\nSummary: Test Issue\nStatus: To Do\n"));
    assert!(output.contains("Goodbye!"));
}

#[tokio::test]
async fn test_failed_request_returns_to_menu() {
    let mock_server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/rest/api/3/issue/TEST-9"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let store = write_config(dir.path(), &mock_server.uri());
    let (exit, output) = run_shell(store, "5\nTEST-9\n7\n").await;

    assert_eq!(exit, ShellExit::Normal);
    assert!(output.contains("Error: Unable to delete issue. 404 - not here"));
    assert_eq!(output.matches("Welcome to the Jira CLI Tool").count(), 2);
}

#[tokio::test]
async fn test_blank_update_through_menu() {
    let mock_server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let store = write_config(dir.path(), &mock_server.uri());
    let (exit, output) = run_shell(store, "3\nTEST-1\n\n\n7\n").await;

    assert_eq!(exit, ShellExit::Normal);
    assert!(output
        .contains("Error: At least one field (summary or description) must be updated."));
}

#[tokio::test]
async fn test_setup_then_list_through_menu() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/api/3/search"))
        .and(query_param("jql", "project=TEST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "issues": [
                {"key": "TEST-1", "fields": {"summary": "First issue", "status": {"name": "To Do"}}},
                {"key": "TEST-2", "fields": {"summary": "Second issue", "status": {"name": "Done"}}}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let store = ConfigStore::new(dir.path().join("config.ini"));
    let input = format!("6\n{}\nme@example.com\nsecret\n4\nTEST\n7\n", mock_server.uri());
    let (exit, output) = run_shell(store.clone(), &input).await;

    assert_eq!(exit, ShellExit::Normal);
    assert!(output.contains("Configuration saved successfully!"));
    assert!(output.contains(
        "- TEST-1: First issue (Status: To Do)\n- TEST-2: Second issue (Status: Done)\n"
    ));

    let saved = store.load().unwrap();
    assert_eq!(saved.email, "me@example.com");
    assert_eq!(saved.api_token, "secret");
}

#[tokio::test]
async fn test_invalid_base_url_is_reported_inline() {
    let dir = TempDir::new().unwrap();
    let store = write_config(dir.path(), "not a url");
    let (exit, output) = run_shell(store, "2\n7\n").await;

    assert_eq!(exit, ShellExit::Normal);
    assert!(output.contains("Error: Invalid URL"));
    assert!(output.contains("Goodbye!"));
}
