//! CRM object types.
//!
//! Uniform objects (person, company, opportunity, task, note, timeline
//! activity) implement [`crate::crud::Entity`] on their record type. Favorites,
//! attachments and the two target tables have hand-written operations because
//! they need a relationship check before any network call and have no update.

pub mod activity;
pub mod attachment;
pub mod company;
pub mod favorite;
pub mod junction;
pub mod note;
pub mod note_target;
pub mod opportunity;
pub mod person;
pub mod task;
pub mod task_target;

#[cfg(test)]
mod test_support;

#[cfg(test)]
mod favorite_test;
#[cfg(test)]
mod note_test;
#[cfg(test)]
mod opportunity_test;
#[cfg(test)]
mod person_test;
#[cfg(test)]
mod task_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::transform::{self, FullName};

/// Treat empty strings like missing values, as tool callers often send `""`.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Accumulates filter predicates; an empty builder means "no filter".
#[derive(Default)]
pub(crate) struct FilterBuilder {
    predicates: Map<String, Value>,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: &str, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.predicates.insert(field.to_string(), transform::eq(value));
        }
        self
    }

    pub fn ilike(mut self, field: &str, term: Option<&str>) -> Self {
        if let Some(term) = term.filter(|t| !t.is_empty()) {
            self.predicates
                .insert(field.to_string(), transform::ilike(term));
        }
        self
    }

    pub fn with(mut self, field: &str, predicate: Option<Value>) -> Self {
        if let Some(predicate) = predicate {
            self.predicates.insert(field.to_string(), predicate);
        }
        self
    }

    pub fn build(self) -> Option<Value> {
        if self.predicates.is_empty() {
            None
        } else {
            Some(Value::Object(self.predicates))
        }
    }
}

/// Company summary resolved on related records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Person or workspace member summary resolved on related records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<FullName>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedBy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// First of the `(kind, id)` pairs that is set, for "linked to" messages.
pub(crate) fn first_link<'a>(links: &[(&'static str, &'a Option<String>)]) -> Option<(&'static str, &'a str)> {
    links
        .iter()
        .find_map(|(kind, id)| id.as_deref().map(|id| (*kind, id)))
}
