//! Tests for opportunity inputs and filters

use serde_json::json;

use super::opportunity::{
    CreateOpportunityParams, ListOpportunitiesParams, Opportunity, UpdateOpportunityParams,
};
use super::test_support::{client, data};
use crate::crud::{self, Entity};
use crate::graphql::MockHttpTransport;

fn deal() -> CreateOpportunityParams {
    CreateOpportunityParams {
        name: "Big deal".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_create_input_sends_zero_amount() {
    let input = Opportunity::create_input(CreateOpportunityParams {
        amount: Some(0.0),
        ..deal()
    })
    .unwrap();

    let value = serde_json::to_value(&input).unwrap();
    assert_eq!(
        value["amount"],
        json!({"amountMicros": 0, "currencyCode": "USD"})
    );
}

#[test]
fn test_create_input_amount_and_links() {
    let input = Opportunity::create_input(CreateOpportunityParams {
        amount: Some(25000.0),
        currency: Some("EUR".to_string()),
        stage: Some("PROPOSAL".to_string()),
        company_id: Some("c1".to_string()),
        point_of_contact_id: Some("".to_string()),
        ..deal()
    })
    .unwrap();

    let value = serde_json::to_value(&input).unwrap();
    assert_eq!(value["amount"]["amountMicros"], 25000000000i64);
    assert_eq!(value["amount"]["currencyCode"], "EUR");
    assert_eq!(value["stage"], "PROPOSAL");
    assert_eq!(value["companyId"], "c1");
    assert!(value.get("pointOfContactId").is_none());
}

#[test]
fn test_update_null_unlinks_company() {
    let params: UpdateOpportunityParams = serde_json::from_value(json!({
        "id": "o1",
        "companyId": null,
        "stage": "CUSTOMER"
    }))
    .unwrap();

    let (id, patch) = Opportunity::update_input(params);
    assert_eq!(id, "o1");
    assert_eq!(
        serde_json::to_value(&patch).unwrap(),
        json!({"companyId": null, "stage": "CUSTOMER"})
    );
}

#[test]
fn test_list_filter_combines_criteria() {
    let filter = Opportunity::list_filter(&ListOpportunitiesParams {
        search_term: Some("big".to_string()),
        company_id: Some("c1".to_string()),
        stage: Some("NEW".to_string()),
        limit: None,
    });

    assert_eq!(
        filter,
        Some(json!({
            "name": {"ilike": "%big%"},
            "companyId": {"eq": "c1"},
            "stage": {"eq": "NEW"}
        }))
    );
    assert_eq!(
        Opportunity::list_filter(&ListOpportunitiesParams::default()),
        None
    );
}

#[tokio::test]
async fn test_update_renders_updated_record() {
    let mut transport = MockHttpTransport::new();
    transport
        .expect_post_json()
        .withf(|_, _, payload| {
            payload["variables"]["id"] == "o1" && payload["variables"]["input"]["name"] == "Renamed"
        })
        .times(1)
        .returning(|_, _, _| {
            Ok(data(
                "updateOpportunity",
                json!({"id": "o1", "name": "Renamed"}),
            ))
        });

    let text = crud::update::<Opportunity, _>(
        &client(transport),
        UpdateOpportunityParams {
            id: "o1".to_string(),
            name: Some("Renamed".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(text.starts_with("✅ Updated opportunity\n\n"));
    assert!(text.contains("\"name\": \"Renamed\""));
}
