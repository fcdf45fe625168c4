//! Tests for notes

use serde_json::json;

use super::note::{CreateNoteParams, ListNotesParams, Note, UpdateNoteParams};
use super::test_support::{client, connection, data};
use crate::crud::{self, Entity};
use crate::graphql::MockHttpTransport;

#[test]
fn test_update_empty_body_still_sends_document() {
    let (_, patch) = Note::update_input(UpdateNoteParams {
        id: "n1".to_string(),
        body: Some(String::new()),
        ..Default::default()
    });

    let value = serde_json::to_value(&patch).unwrap();
    assert_eq!(value["bodyV2"]["markdown"], "");
    assert!(value["bodyV2"]["blocknote"].as_str().unwrap().starts_with('['));
    assert!(value.get("title").is_none());
}

#[tokio::test]
async fn test_create_note_message() {
    let mut transport = MockHttpTransport::new();
    transport
        .expect_post_json()
        .withf(|_, _, payload| {
            payload["variables"]["input"]["bodyV2"]["markdown"] == "Met with **Ann**"
        })
        .times(1)
        .returning(|_, _, _| Ok(data("createNote", json!({"id": "n1", "title": "Meeting"}))));

    let text = crud::create::<Note, _>(
        &client(transport),
        CreateNoteParams {
            title: "Meeting".to_string(),
            body: Some("  Met with **Ann**  ".to_string()),
        },
    )
    .await
    .unwrap();

    assert!(text.starts_with("✅ Created note: Meeting\n\n"));
}

#[tokio::test]
async fn test_list_notes_clamps_limit() {
    let mut transport = MockHttpTransport::new();
    transport
        .expect_post_json()
        .withf(|_, _, payload| {
            payload["variables"]["limit"] == 60
                && payload["variables"]["filter"] == json!({"title": {"ilike": "%meet%"}})
        })
        .times(1)
        .returning(|_, _, _| Ok(connection("notes", vec![json!({"id": "n1"})], false)));

    let text = crud::list::<Note, _>(
        &client(transport),
        &ListNotesParams {
            limit: Some(500),
            search_term: Some("meet".to_string()),
        },
    )
    .await
    .unwrap();

    assert!(text.starts_with("Found 1 notes\n\n"));
}
