//! Tests for the GraphQL client against a mocked transport

use crate::config::Config;
use crate::error::CrmError;
use crate::graphql::{GraphQlClient, HttpReply, MockHttpTransport};
use serde_json::{Value, json};

fn config() -> Config {
    Config::new("test-api-key", Some("https://test.twenty.com".to_string())).unwrap()
}

fn reply(status: u16, body: &str) -> HttpReply {
    HttpReply {
        status,
        body: body.to_string(),
    }
}

#[tokio::test]
async fn test_request_posts_query_and_variables() {
    let mut transport = MockHttpTransport::new();
    transport
        .expect_post_json()
        .withf(|endpoint, api_key, payload| {
            endpoint == "https://test.twenty.com/graphql"
                && api_key == "test-api-key"
                && payload["query"] == "query GetPerson { person { id } }"
                && payload["variables"] == json!({"id": "123"})
        })
        .times(1)
        .returning(|_, _, _| Ok(reply(200, r#"{"data":{"person":{"id":"123"}}}"#)));

    let client = GraphQlClient::new(&config(), transport);
    let data = client
        .request("query GetPerson { person { id } }", json!({"id": "123"}))
        .await
        .unwrap();

    assert_eq!(data, json!({"person": {"id": "123"}}));
}

#[tokio::test]
async fn test_request_http_failure() {
    let mut transport = MockHttpTransport::new();
    transport
        .expect_post_json()
        .times(1)
        .returning(|_, _, _| Ok(reply(500, "Internal Server Error")));

    let client = GraphQlClient::new(&config(), transport);
    let err = client.request("query Q { x }", json!({})).await.unwrap_err();

    assert!(matches!(err, CrmError::Transport { status: 500, .. }));
    assert_eq!(
        err.to_string(),
        "GraphQL request failed (500): Internal Server Error"
    );
}

#[tokio::test]
async fn test_request_graphql_errors_on_200() {
    let mut transport = MockHttpTransport::new();
    transport.expect_post_json().times(1).returning(|_, _, _| {
        Ok(reply(
            200,
            r#"{"data":null,"errors":[{"message":"Field 'foo' not found"}]}"#,
        ))
    });

    let client = GraphQlClient::new(&config(), transport);
    let err = client.request("query Q { foo }", json!({})).await.unwrap_err();

    assert!(matches!(err, CrmError::Api { .. }));
    let message = err.to_string();
    assert!(message.starts_with("GraphQL errors:"));
    assert!(message.contains("Field 'foo' not found"));
}

#[tokio::test]
async fn test_request_missing_data_is_null() {
    let mut transport = MockHttpTransport::new();
    transport
        .expect_post_json()
        .returning(|_, _, _| Ok(reply(200, "{}")));

    let client = GraphQlClient::new(&config(), transport);
    let data = client.request("query Q { x }", json!({})).await.unwrap();
    assert_eq!(data, Value::Null);
}

#[tokio::test]
async fn test_request_non_json_body() {
    let mut transport = MockHttpTransport::new();
    transport
        .expect_post_json()
        .returning(|_, _, _| Ok(reply(200, "<html>gateway</html>")));

    let client = GraphQlClient::new(&config(), transport);
    let err = client.request("query Q { x }", json!({})).await.unwrap_err();
    assert!(matches!(err, CrmError::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_request_field_deserializes_root_field() {
    #[derive(serde::Deserialize)]
    struct Node {
        id: String,
    }

    let mut transport = MockHttpTransport::new();
    transport
        .expect_post_json()
        .returning(|_, _, _| Ok(reply(200, r#"{"data":{"note":{"id":"n-1"}}}"#)));

    let client = GraphQlClient::new(&config(), transport);
    let node: Node = client
        .request_field("query GetNote { note { id } }", json!({}), "note")
        .await
        .unwrap();
    assert_eq!(node.id, "n-1");
}
