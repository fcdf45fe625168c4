//! Shared helpers for domain tests

use serde_json::{Value, json};

use crate::config::Config;
use crate::graphql::{GraphQlClient, HttpReply, MockHttpTransport};

pub fn client(transport: MockHttpTransport) -> GraphQlClient<MockHttpTransport> {
    let config = Config::new("test-key", Some("https://crm.test".to_string())).unwrap();
    GraphQlClient::new(&config, transport)
}

/// 200 reply wrapping `value` under `data.{field}`.
pub fn data(field: &str, value: Value) -> HttpReply {
    HttpReply {
        status: 200,
        body: json!({ "data": { field: value } }).to_string(),
    }
}

/// 200 reply with a connection of `nodes` under `data.{field}`.
pub fn connection(field: &str, nodes: Vec<Value>, has_next_page: bool) -> HttpReply {
    let edges: Vec<Value> = nodes.into_iter().map(|node| json!({ "node": node })).collect();
    data(
        field,
        json!({
            "edges": edges,
            "pageInfo": { "hasNextPage": has_next_page, "hasPreviousPage": false },
        }),
    )
}

/// Mock that must never be called.
pub fn offline() -> MockHttpTransport {
    let mut transport = MockHttpTransport::new();
    transport.expect_post_json().times(0);
    transport
}
