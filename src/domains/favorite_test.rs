//! Tests for favorites

use serde_json::json;

use super::favorite::{self, AddFavoriteParams, ListFavoritesParams, MISSING_TARGET};
use super::test_support::{client, connection, data, offline};
use crate::error::CrmError;
use crate::graphql::MockHttpTransport;

#[tokio::test]
async fn test_add_requires_target() {
    let err = favorite::add(
        &client(offline()),
        AddFavoriteParams {
            person_id: Some(String::new()),
            position: Some(1.0),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CrmError::Validation { .. }));
    assert!(err.to_string().contains(MISSING_TARGET));
}

#[tokio::test]
async fn test_add_company_favorite() {
    let mut transport = MockHttpTransport::new();
    transport
        .expect_post_json()
        .withf(|_, _, payload| {
            payload["variables"]["input"] == json!({"companyId": "c1", "position": 2.0})
        })
        .times(1)
        .returning(|_, _, _| {
            Ok(data(
                "createFavorite",
                json!({"id": "f1", "companyId": "c1", "position": 2.0}),
            ))
        });

    let text = favorite::add(
        &client(transport),
        AddFavoriteParams {
            company_id: Some("c1".to_string()),
            position: Some(2.0),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(text.starts_with("✅ Added company to favorites (c1)\n\n"));
}

#[tokio::test]
async fn test_add_falls_back_to_requested_target() {
    let mut transport = MockHttpTransport::new();
    transport
        .expect_post_json()
        .times(1)
        .returning(|_, _, _| Ok(data("createFavorite", json!({"id": "f2"}))));

    let text = favorite::add(
        &client(transport),
        AddFavoriteParams {
            person_id: Some("p9".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(text.starts_with("✅ Added person to favorites (p9)"));
}

#[tokio::test]
async fn test_list_filters_by_workspace_member() {
    let mut transport = MockHttpTransport::new();
    transport
        .expect_post_json()
        .withf(|_, _, payload| {
            payload["variables"]["filter"] == json!({"forWorkspaceMemberId": {"eq": "wm1"}})
        })
        .times(1)
        .returning(|_, _, _| Ok(connection("favorites", vec![json!({"id": "f1"})], true)));

    let text = favorite::list(
        &client(transport),
        &ListFavoritesParams {
            for_workspace_member_id: Some("wm1".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(text.starts_with("Found 1 favorite(s) (more available)\n\n"));
}

#[tokio::test]
async fn test_get_and_remove() {
    let mut transport = MockHttpTransport::new();
    transport
        .expect_post_json()
        .withf(|_, _, payload| payload["query"].as_str().unwrap().contains("deleteFavorite"))
        .times(1)
        .returning(|_, _, _| Ok(data("deleteFavorite", json!({"id": "f1"}))));
    transport
        .expect_post_json()
        .withf(|_, _, payload| payload["query"].as_str().unwrap().contains("GetFavorite"))
        .times(1)
        .returning(|_, _, _| Ok(data("favorite", json!({"id": "f1", "personId": "p1"}))));

    let client = client(transport);
    let details = favorite::get(&client, "f1").await.unwrap();
    let removed = favorite::remove(&client, "f1").await.unwrap();

    assert!(details.starts_with("Favorite details:\n\n"));
    assert_eq!(removed, "✅ Removed favorite: f1");
}
