//! Mapping of flat tool inputs onto the CRM's composite field shapes.
//!
//! All functions here are pure. Composite structs serialize with the CRM's
//! camelCase member names so they can be embedded directly in mutation inputs.

use serde::{Deserialize, Serialize};
use serde_json::json;

/// Fixed-point scale between a currency amount and its micros representation.
pub const MICROS_PER_UNIT: i64 = 1_000_000;

pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullName {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Emails {
    pub primary_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_emails: Option<Vec<String>>,
}

/// Phone composite. Every member is optional so the same shape serves
/// complete values on create and partial patches on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phones {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_phone_country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_phone_calling_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_phones: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_link_label: Option<String>,
    pub primary_link_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_links: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_street1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_street2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_postcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
}

/// Flat address fields as they arrive from a tool call.
#[derive(Debug, Clone, Default)]
pub struct AddressFields {
    pub street1: Option<String>,
    pub street2: Option<String>,
    pub city: Option<String>,
    pub postcode: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl AddressFields {
    fn any_provided(&self) -> bool {
        [
            &self.street1,
            &self.street2,
            &self.city,
            &self.postcode,
            &self.state,
            &self.country,
        ]
        .iter()
        .any(|field| field.is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    #[serde(default, deserialize_with = "crate::serde_utils::lenient_i64")]
    pub amount_micros: Option<i64>,
    #[serde(default)]
    pub currency_code: Option<String>,
}

/// A currency composite converted back to whole units.
#[derive(Debug, Clone, PartialEq)]
pub struct MoneyAmount {
    pub amount: f64,
    pub currency_code: String,
}

/// Rich-text body stored twice: block document (JSON string) and markdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichText {
    pub blocknote: Option<String>,
    pub markdown: Option<String>,
}

pub fn transform_email(email: &str) -> Emails {
    Emails {
        primary_email: Some(email.to_string()),
        additional_emails: Some(Vec::new()),
    }
}

/// Complete phone composite; missing country/calling codes become empty strings.
pub fn transform_phone(
    number: &str,
    country_code: Option<&str>,
    calling_code: Option<&str>,
) -> Phones {
    Phones {
        primary_phone_number: Some(number.to_string()),
        primary_phone_country_code: Some(country_code.unwrap_or_default().to_string()),
        primary_phone_calling_code: Some(calling_code.unwrap_or_default().to_string()),
        additional_phones: Some(Vec::new()),
    }
}

pub fn transform_link(url: &str, label: Option<&str>) -> Link {
    Link {
        primary_link_label: Some(label.unwrap_or_default().to_string()),
        primary_link_url: Some(url.to_string()),
        secondary_links: Some(Vec::new()),
    }
}

/// Build an address composite from whichever fields were supplied.
///
/// Returns `None` when no field was supplied at all, so callers can tell
/// "leave the address alone" apart from an address update. Supplied empty
/// strings count as intent but are not copied into the composite.
pub fn transform_address(fields: AddressFields) -> Option<Address> {
    if !fields.any_provided() {
        return None;
    }

    let keep = |value: Option<String>| value.filter(|v| !v.is_empty());

    Some(Address {
        address_street1: keep(fields.street1),
        address_street2: keep(fields.street2),
        address_city: keep(fields.city),
        address_postcode: keep(fields.postcode),
        address_state: keep(fields.state),
        address_country: keep(fields.country),
    })
}

/// Scale an amount to integer micros.
///
/// Products that are not whole micros are rounded to the nearest micro,
/// halves away from zero.
pub fn transform_currency(amount: f64, currency_code: Option<&str>) -> Currency {
    Currency {
        amount_micros: Some(to_micros(amount)),
        currency_code: Some(currency_code.unwrap_or(DEFAULT_CURRENCY).to_string()),
    }
}

pub fn to_micros(amount: f64) -> i64 {
    (amount * MICROS_PER_UNIT as f64).round() as i64
}

pub fn from_micros(amount_micros: i64) -> f64 {
    amount_micros as f64 / MICROS_PER_UNIT as f64
}

pub fn currency_from_micros(currency: &Currency) -> MoneyAmount {
    MoneyAmount {
        amount: from_micros(currency.amount_micros.unwrap_or_default()),
        currency_code: currency
            .currency_code
            .clone()
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
    }
}

/// Convert markdown text into the dual rich-text representation.
pub fn transform_body(text: &str) -> RichText {
    let normalized = text.trim();
    RichText {
        blocknote: Some(text_to_blocks(normalized)),
        markdown: Some(normalized.to_string()),
    }
}

/// Minimal block document: one unstyled paragraph per blank-line separated chunk.
fn text_to_blocks(text: &str) -> String {
    let sanitized = text.replace('\r', "");
    let mut paragraphs: Vec<&str> = split_paragraphs(&sanitized)
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    if paragraphs.is_empty() {
        paragraphs.push("");
    }

    let blocks: Vec<_> = paragraphs
        .iter()
        .enumerate()
        .map(|(index, paragraph)| {
            json!({
                "id": format!("block-{}", index + 1),
                "type": "paragraph",
                "props": { "textAlignment": "left" },
                "content": [{ "type": "text", "text": paragraph, "styles": {} }],
            })
        })
        .collect();

    serde_json::Value::Array(blocks).to_string()
}

/// Split on runs of two or more newlines.
fn split_paragraphs(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'\n' {
            let run_start = i;
            while i < bytes.len() && bytes[i] == b'\n' {
                i += 1;
            }
            if i - run_start >= 2 {
                parts.push(&text[start..run_start]);
                start = i;
            }
        } else {
            i += 1;
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Case-insensitive substring predicate used by every search filter.
pub fn ilike(term: &str) -> serde_json::Value {
    json!({ "ilike": format!("%{term}%") })
}

pub fn eq(value: &str) -> serde_json::Value {
    json!({ "eq": value })
}

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;
