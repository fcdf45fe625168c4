//! Tests for person create/update/list

use serde_json::json;

use super::person::{self, CreatePersonParams, ListPeopleParams, Person, UpdatePersonParams};
use super::test_support::{client, connection, data};
use crate::crud::{self, Entity};
use crate::graphql::MockHttpTransport;

fn john() -> CreatePersonParams {
    CreatePersonParams {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_create_input_shapes_composites() {
    let input = Person::create_input(CreatePersonParams {
        email: Some("john@example.com".to_string()),
        phone: Some("5551234".to_string()),
        phone_country_code: Some("US".to_string()),
        phone_calling_code: Some("+1".to_string()),
        linkedin_url: Some("https://linkedin.com/in/john".to_string()),
        job_title: Some("".to_string()),
        ..john()
    })
    .unwrap();

    let value = serde_json::to_value(&input).unwrap();
    assert_eq!(value["name"], json!({"firstName": "John", "lastName": "Doe"}));
    assert_eq!(value["emails"]["primaryEmail"], "john@example.com");
    assert_eq!(value["emails"]["additionalEmails"], json!([]));
    assert_eq!(value["phones"]["primaryPhoneCountryCode"], "US");
    assert_eq!(value["phones"]["primaryPhoneCallingCode"], "+1");
    assert_eq!(
        value["linkedinLink"]["primaryLinkUrl"],
        "https://linkedin.com/in/john"
    );
    // Empty strings are treated as absent.
    assert!(value.get("jobTitle").is_none());
    assert!(value.get("xLink").is_none());
}

#[test]
fn test_create_input_uses_addresss_key() {
    let input = Person::create_input(CreatePersonParams {
        address: Some("1 Main St".to_string()),
        ..john()
    })
    .unwrap();

    let value = serde_json::to_value(&input).unwrap();
    assert_eq!(value["addresss"], "1 Main St");
    assert!(value.get("address").is_none());
}

#[test]
fn test_params_accept_addresss_alias() {
    let params: CreatePersonParams = serde_json::from_value(json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "addresss": "London"
    }))
    .unwrap();
    assert_eq!(params.address.as_deref(), Some("London"));
}

#[test]
fn test_update_null_clears_field() {
    let params: UpdatePersonParams = serde_json::from_value(json!({
        "id": "p1",
        "jobTitle": null,
        "city": "Berlin"
    }))
    .unwrap();

    let (id, patch) = Person::update_input(params);
    let value = serde_json::to_value(&patch).unwrap();

    assert_eq!(id, "p1");
    assert_eq!(value, json!({"jobTitle": null, "city": "Berlin"}));
}

#[test]
fn test_update_merges_name_parts() {
    let (_, patch) = Person::update_input(UpdatePersonParams {
        id: "p1".to_string(),
        last_name: Some("Smith".to_string()),
        ..Default::default()
    });

    let value = serde_json::to_value(&patch).unwrap();
    assert_eq!(value["name"], json!({"firstName": "", "lastName": "Smith"}));
}

#[test]
fn test_list_filter() {
    assert_eq!(Person::list_filter(&ListPeopleParams::default()), None);

    let filter = Person::list_filter(&ListPeopleParams {
        search_term: Some("ann".to_string()),
        company_id: Some("c1".to_string()),
        limit: None,
    })
    .unwrap();

    assert_eq!(filter["or"][0], json!({"name": {"firstName": {"ilike": "%ann%"}}}));
    assert_eq!(filter["or"][2], json!({"emails": {"primaryEmail": {"ilike": "%ann%"}}}));
    assert_eq!(filter["companyId"], json!({"eq": "c1"}));
}

#[tokio::test]
async fn test_create_without_custom_fields_is_one_call() {
    let mut transport = MockHttpTransport::new();
    transport
        .expect_post_json()
        .withf(|_, _, payload| {
            payload["variables"]["input"]["name"]["firstName"] == "John"
                && payload["query"].as_str().unwrap().contains("createPerson")
        })
        .times(1)
        .returning(|_, _, _| {
            Ok(data(
                "createPerson",
                json!({"id": "p1", "name": {"firstName": "John", "lastName": "Doe"}}),
            ))
        });

    let text = person::create(&client(transport), john()).await.unwrap();

    assert!(text.starts_with("✅ Created person: John Doe\n\n"));
    assert!(text.contains("\"id\": \"p1\""));
}

#[tokio::test]
async fn test_create_resends_dropped_custom_fields() {
    let mut transport = MockHttpTransport::new();
    let mut seq = mockall::Sequence::new();
    transport
        .expect_post_json()
        .withf(|_, _, payload| payload["variables"]["input"]["education"] == "MIT")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _, _| {
            Ok(data(
                "createPerson",
                json!({
                    "id": "p1",
                    "name": {"firstName": "John", "lastName": "Doe"},
                    "education": "",
                    "description": "Engineer"
                }),
            ))
        });
    transport
        .expect_post_json()
        .withf(|_, _, payload| {
            payload["variables"]["id"] == "p1"
                && payload["variables"]["input"] == json!({"education": "MIT"})
        })
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _, _| {
            Ok(data(
                "updatePerson",
                json!({"id": "p1", "education": "MIT"}),
            ))
        });

    let text = person::create(
        &client(transport),
        CreatePersonParams {
            education: Some("MIT".to_string()),
            description: Some("Engineer".to_string()),
            ..john()
        },
    )
    .await
    .unwrap();

    assert!(text.starts_with("✅ Created person: John Doe"));
    assert!(text.contains("\"education\": \"MIT\""));
    assert!(text.contains("\"description\": \"Engineer\""));
}

#[tokio::test]
async fn test_list_reports_more_available() {
    let mut transport = MockHttpTransport::new();
    transport
        .expect_post_json()
        .withf(|_, _, payload| {
            payload["variables"] == json!({"filter": null, "limit": 2})
        })
        .times(1)
        .returning(|_, _, _| {
            Ok(connection(
                "people",
                vec![json!({"id": "p1"}), json!({"id": "p2"})],
                true,
            ))
        });

    let text = crud::list::<Person, _>(
        &client(transport),
        &ListPeopleParams {
            limit: Some(2),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(text.starts_with("Found 2 people (more available)\n\n"));
}

#[tokio::test]
async fn test_get_renders_details() {
    let mut transport = MockHttpTransport::new();
    transport
        .expect_post_json()
        .withf(|_, _, payload| payload["variables"] == json!({"id": "p1"}))
        .times(1)
        .returning(|_, _, _| Ok(data("person", json!({"id": "p1", "city": "Oslo"}))));

    let text = crud::get::<Person, _>(&client(transport), "p1").await.unwrap();

    assert!(text.starts_with("Person details:\n\n"));
    assert!(text.contains("\"city\": \"Oslo\""));
}
