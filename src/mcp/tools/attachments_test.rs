//! Tests for attachment MCP tools

use std::fs;

use rmcp::handler::server::wrapper::Parameters;
use serde_json::{Value, json};
use tempfile::TempDir;

use super::IdParams;
use super::tools_test::{reply, text};
use crate::config::Config;
use crate::domains::attachment::CreateAttachmentParams;
use crate::graphql::MockHttpTransport;
use crate::mcp::server::CrmServer;

fn attachment_reply() -> Value {
    json!({"data": {"attachment": {
        "id": "a1",
        "name": "notes.md",
        "fullPath": "https://files.example.com/attachment/notes.md?token=abc"
    }}})
}

#[tokio::test]
async fn test_get_attachment_with_preview() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.md"), "# Agenda").unwrap();

    let mut transport = MockHttpTransport::new();
    transport
        .expect_post_json()
        .times(1)
        .returning(|_, _, _| Ok(reply(200, attachment_reply())));

    let config = Config::new("test-key", None)
        .unwrap()
        .with_attachment_root(Some(dir.path().to_path_buf()));
    let result = CrmServer::new(&config, transport)
        .get_attachment(Parameters(IdParams {
            id: "a1".to_string(),
        }))
        .await
        .unwrap();

    let body = text(&result);
    let json: Value = serde_json::from_str(body.split_once("\n\n").unwrap().1).unwrap();
    assert_eq!(json["localPreview"]["type"], "text");
    assert_eq!(json["localPreview"]["content"], "# Agenda");
    assert_eq!(json["localPreview"]["truncated"], false);
}

#[tokio::test]
async fn test_get_attachment_without_root() {
    let mut transport = MockHttpTransport::new();
    transport
        .expect_post_json()
        .times(1)
        .returning(|_, _, _| Ok(reply(200, attachment_reply())));

    let result = super::tools_test::server(transport)
        .get_attachment(Parameters(IdParams {
            id: "a1".to_string(),
        }))
        .await
        .unwrap();

    assert!(text(&result).starts_with("Attachment details:\n\n"));
    assert!(!text(&result).contains("localPreview"));
}

#[tokio::test]
async fn test_create_attachment_requires_relationship() {
    let mut transport = MockHttpTransport::new();
    transport.expect_post_json().times(0);

    let result = super::tools_test::server(transport)
        .create_attachment(Parameters(CreateAttachmentParams {
            name: "a.pdf".to_string(),
            full_path: "a.pdf".to_string(),
            ..Default::default()
        }))
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(true));
    assert!(text(&result).starts_with("Error: At least one relationship ID"));
}
