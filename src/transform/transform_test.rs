use super::*;
use serde_json::{Value, json};

fn blocks(body: &RichText) -> Vec<Value> {
    let raw = body.blocknote.as_deref().expect("blocknote present");
    serde_json::from_str::<Vec<Value>>(raw).unwrap()
}

#[test]
fn test_email_composite() {
    let emails = serde_json::to_value(transform_email("john@example.com")).unwrap();
    assert_eq!(
        emails,
        json!({"primaryEmail": "john@example.com", "additionalEmails": []})
    );
}

#[test]
fn test_phone_defaults_missing_codes_to_empty() {
    let phones = serde_json::to_value(transform_phone("1234567890", None, Some("+1"))).unwrap();
    assert_eq!(
        phones,
        json!({
            "primaryPhoneNumber": "1234567890",
            "primaryPhoneCountryCode": "",
            "primaryPhoneCallingCode": "+1",
            "additionalPhones": []
        })
    );
}

#[test]
fn test_link_composite() {
    let link = serde_json::to_value(transform_link("https://acme.com", None)).unwrap();
    assert_eq!(
        link,
        json!({"primaryLinkLabel": "", "primaryLinkUrl": "https://acme.com", "secondaryLinks": []})
    );
}

#[test]
fn test_address_absent_when_nothing_supplied() {
    assert!(transform_address(AddressFields::default()).is_none());
}

#[test]
fn test_address_keeps_only_supplied_fields() {
    let address = transform_address(AddressFields {
        city: Some("Berlin".to_string()),
        country: Some("Germany".to_string()),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(
        serde_json::to_value(address).unwrap(),
        json!({"addressCity": "Berlin", "addressCountry": "Germany"})
    );
}

#[test]
fn test_address_empty_string_counts_as_intent() {
    let address = transform_address(AddressFields {
        street2: Some(String::new()),
        ..Default::default()
    });
    assert_eq!(address, Some(Address::default()));
}

#[test]
fn test_currency_scales_to_micros() {
    let currency = transform_currency(500_000.0, Some("EUR"));
    assert_eq!(currency.amount_micros, Some(500_000_000_000));
    assert_eq!(currency.currency_code.as_deref(), Some("EUR"));
    assert_eq!(
        serde_json::to_value(&currency).unwrap(),
        json!({"amountMicros": 500000000000_i64, "currencyCode": "EUR"})
    );
}

#[test]
fn test_currency_defaults_to_usd() {
    let currency = transform_currency(12.0, None);
    assert_eq!(currency.currency_code.as_deref(), Some("USD"));
    assert_eq!(currency.amount_micros, Some(12_000_000));
}

#[test]
fn test_currency_rounds_fractional_micros() {
    assert_eq!(to_micros(19.99), 19_990_000);
    assert_eq!(to_micros(0.0000012), 1);
    assert_eq!(to_micros(-1.5), -1_500_000);
}

#[test]
fn test_currency_round_trip() {
    for (amount, code) in [(1000.0, "USD"), (0.25, "EUR"), (42.5, "GBP")] {
        let back = currency_from_micros(&transform_currency(amount, Some(code)));
        assert_eq!(back.amount, amount);
        assert_eq!(back.currency_code, code);
    }
}

#[test]
fn test_body_empty_yields_single_empty_paragraph() {
    let body = transform_body("");
    assert_eq!(body.markdown.as_deref(), Some(""));

    let blocks = blocks(&body);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0]["type"], "paragraph");
    assert_eq!(blocks[0]["content"][0]["text"], "");
}

#[test]
fn test_body_splits_paragraphs_in_order() {
    let body = transform_body("A\n\nB");
    let blocks = blocks(&body);

    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0]["id"], "block-1");
    assert_eq!(blocks[0]["content"][0]["text"], "A");
    assert_eq!(blocks[1]["id"], "block-2");
    assert_eq!(blocks[1]["content"][0]["text"], "B");
    assert_eq!(blocks[1]["props"]["textAlignment"], "left");
    assert_eq!(blocks[1]["content"][0]["styles"], json!({}));
}

#[test]
fn test_body_keeps_single_newlines_and_strips_cr() {
    let body = transform_body("  line one\r\nline two\r\n\r\n\r\nnext  ");
    assert_eq!(
        body.markdown.as_deref(),
        Some("line one\r\nline two\r\n\r\n\r\nnext")
    );

    let blocks = blocks(&body);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0]["content"][0]["text"], "line one\nline two");
    assert_eq!(blocks[1]["content"][0]["text"], "next");
}

#[test]
fn test_filter_predicates() {
    assert_eq!(ilike("acme"), json!({"ilike": "%acme%"}));
    assert_eq!(eq("id-1"), json!({"eq": "id-1"}));
}
