//! People.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use crate::crud::{self, Entity, ListLimit};
use crate::error::CrmResult;
use crate::graphql::{GraphQlClient, HttpTransport};
use crate::transform::{
    Emails, FullName, Link, Phones, transform_email, transform_link, transform_phone,
};

use super::{CompanyRef, FilterBuilder, present};

const CREATE_PERSON: &str = r#"
  mutation CreatePerson($input: PersonCreateInput!) {
    createPerson(data: $input) {
      id
      name { firstName lastName }
      emails { primaryEmail additionalEmails }
      phones { primaryPhoneNumber primaryPhoneCountryCode primaryPhoneCallingCode }
      jobTitle
      city
      linkedinLink { primaryLinkUrl }
      xLink { primaryLinkUrl }
      companyId
      education
      addresss
      description
      experience
      createdAt
    }
  }
"#;

const GET_PERSON: &str = r#"
  query GetPerson($id: UUID!) {
    person(filter: { id: { eq: $id } }) {
      id
      name { firstName lastName }
      emails { primaryEmail additionalEmails }
      phones { primaryPhoneNumber primaryPhoneCountryCode primaryPhoneCallingCode }
      jobTitle
      city
      linkedinLink { primaryLinkLabel primaryLinkUrl }
      xLink { primaryLinkLabel primaryLinkUrl }
      companyId
      company { id name }
      education
      addresss
      description
      experience
      createdAt
      updatedAt
    }
  }
"#;

const LIST_PEOPLE: &str = r#"
  query ListPeople($filter: PersonFilterInput, $limit: Int) {
    people(filter: $filter, first: $limit) {
      edges {
        node {
          id
          name { firstName lastName }
          emails { primaryEmail }
          phones { primaryPhoneNumber }
          jobTitle
          city
          companyId
          company { id name }
        }
      }
      pageInfo { hasNextPage hasPreviousPage }
    }
  }
"#;

const UPDATE_PERSON: &str = r#"
  mutation UpdatePerson($id: UUID!, $input: PersonUpdateInput!) {
    updatePerson(id: $id, data: $input) {
      id
      name { firstName lastName }
      emails { primaryEmail }
      phones { primaryPhoneNumber }
      jobTitle
      city
      education
      addresss
      description
      experience
      updatedAt
    }
  }
"#;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<FullName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emails: Option<Emails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phones: Option<Phones>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_link: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_link: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(default, rename = "addresss", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonParams {
    #[schemars(description = "First name (required)")]
    pub first_name: String,
    #[schemars(description = "Last name (required)")]
    pub last_name: String,
    #[schemars(description = "Primary email address")]
    pub email: Option<String>,
    #[schemars(description = "Primary phone number (e.g., '1234567890')")]
    pub phone: Option<String>,
    #[schemars(description = "Phone country code (e.g., 'US', 'DE')")]
    pub phone_country_code: Option<String>,
    #[schemars(description = "Phone calling code (e.g., '+1', '+49')")]
    pub phone_calling_code: Option<String>,
    #[schemars(description = "Job title")]
    pub job_title: Option<String>,
    #[schemars(description = "Company ID to associate with")]
    pub company_id: Option<String>,
    #[schemars(description = "LinkedIn profile URL")]
    pub linkedin_url: Option<String>,
    #[schemars(description = "X/Twitter profile URL")]
    pub x_url: Option<String>,
    #[schemars(description = "City")]
    pub city: Option<String>,
    #[schemars(description = "Education background (free text)")]
    pub education: Option<String>,
    #[serde(alias = "addresss")]
    #[schemars(description = "Postal address as a single free-text value")]
    pub address: Option<String>,
    #[schemars(description = "Free-text description")]
    pub description: Option<String>,
    #[schemars(description = "Professional experience (free text)")]
    pub experience: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePersonParams {
    #[schemars(description = "Person ID (required)")]
    pub id: String,
    #[schemars(description = "First name")]
    pub first_name: Option<String>,
    #[schemars(description = "Last name")]
    pub last_name: Option<String>,
    #[schemars(description = "Primary email address")]
    pub email: Option<String>,
    #[schemars(description = "Primary phone number")]
    pub phone: Option<String>,
    #[schemars(description = "Phone country code")]
    pub phone_country_code: Option<String>,
    #[schemars(description = "Phone calling code")]
    pub phone_calling_code: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schemars(with = "Option<String>", description = "Job title (null clears it)")]
    pub job_title: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schemars(with = "Option<String>", description = "Company ID (null unlinks the company)")]
    pub company_id: Option<Option<String>>,
    #[schemars(description = "LinkedIn profile URL")]
    pub linkedin_url: Option<String>,
    #[schemars(description = "X/Twitter profile URL")]
    pub x_url: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schemars(with = "Option<String>", description = "City (null clears it)")]
    pub city: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schemars(with = "Option<String>", description = "Education background")]
    pub education: Option<Option<String>>,
    #[serde(default, alias = "addresss", deserialize_with = "crate::serde_utils::double_option")]
    #[schemars(with = "Option<String>", description = "Postal address as free text")]
    pub address: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schemars(with = "Option<String>", description = "Free-text description")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schemars(with = "Option<String>", description = "Professional experience")]
    pub experience: Option<Option<String>>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListPeopleParams {
    #[schemars(description = "Number of results to return (max: 60, default: 20)")]
    pub limit: Option<u32>,
    #[schemars(description = "Search by name or email")]
    pub search_term: Option<String>,
    #[schemars(description = "Filter by company ID")]
    pub company_id: Option<String>,
}

impl ListLimit for ListPeopleParams {
    fn limit(&self) -> Option<u32> {
        self.limit
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonInput {
    pub name: FullName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emails: Option<Emails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phones: Option<Phones>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_link: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_link: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(flatten)]
    pub custom: CustomFields,
}

/// Free-text fields the create mutation does not always persist.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct CustomFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(rename = "addresss", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
}

impl CustomFields {
    pub fn is_empty(&self) -> bool {
        self.education.is_none()
            && self.address.is_none()
            && self.description.is_none()
            && self.experience.is_none()
    }

    /// Fields requested here that the stored record lacks or left empty.
    fn missing_from(&self, person: &Person) -> CustomFields {
        let missing = |wanted: &Option<String>, stored: &Option<String>| match stored {
            Some(value) if !value.is_empty() => None,
            _ => wanted.clone(),
        };

        CustomFields {
            education: missing(&self.education, &person.education),
            address: missing(&self.address, &person.address),
            description: missing(&self.description, &person.description),
            experience: missing(&self.experience, &person.experience),
        }
    }
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<FullName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emails: Option<Emails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phones: Option<Phones>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_link: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_link: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Option<String>>,
    #[serde(rename = "addresss", skip_serializing_if = "Option::is_none")]
    pub address: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<Option<String>>,
}

impl From<CustomFields> for PersonPatch {
    fn from(fields: CustomFields) -> Self {
        Self {
            education: fields.education.map(Some),
            address: fields.address.map(Some),
            description: fields.description.map(Some),
            experience: fields.experience.map(Some),
            ..Default::default()
        }
    }
}

impl Entity for Person {
    const NAME: &'static str = "person";
    const TYPE_NAME: &'static str = "Person";
    const PLURAL: Option<&'static str> = Some("people");

    const CREATE_MUTATION: &'static str = CREATE_PERSON;
    const GET_QUERY: &'static str = GET_PERSON;
    const LIST_QUERY: &'static str = LIST_PEOPLE;
    const UPDATE_MUTATION: &'static str = UPDATE_PERSON;

    type Record = Person;
    type CreateParams = CreatePersonParams;
    type UpdateParams = UpdatePersonParams;
    type ListParams = ListPeopleParams;
    type Input = PersonInput;
    type Patch = PersonPatch;

    fn create_input(params: CreatePersonParams) -> CrmResult<PersonInput> {
        let phones = present(params.phone).map(|phone| {
            transform_phone(
                &phone,
                params.phone_country_code.as_deref(),
                params.phone_calling_code.as_deref(),
            )
        });

        Ok(PersonInput {
            name: FullName {
                first_name: params.first_name,
                last_name: params.last_name,
            },
            emails: present(params.email).map(|email| transform_email(&email)),
            phones,
            linkedin_link: present(params.linkedin_url).map(|url| transform_link(&url, None)),
            x_link: present(params.x_url).map(|url| transform_link(&url, None)),
            job_title: present(params.job_title),
            city: present(params.city),
            company_id: present(params.company_id),
            custom: CustomFields {
                education: present(params.education),
                address: present(params.address),
                description: present(params.description),
                experience: present(params.experience),
            },
        })
    }

    fn update_input(params: UpdatePersonParams) -> (String, PersonPatch) {
        let first_name = present(params.first_name);
        let last_name = present(params.last_name);
        let name = (first_name.is_some() || last_name.is_some()).then(|| FullName {
            first_name: first_name.unwrap_or_default(),
            last_name: last_name.unwrap_or_default(),
        });

        let phone = present(params.phone);
        let country_code = present(params.phone_country_code);
        let calling_code = present(params.phone_calling_code);
        let phones = (phone.is_some() || country_code.is_some() || calling_code.is_some()).then(|| {
            Phones {
                primary_phone_number: phone,
                primary_phone_country_code: country_code,
                primary_phone_calling_code: calling_code,
                additional_phones: None,
            }
        });

        let patch = PersonPatch {
            name,
            emails: present(params.email).map(|email| transform_email(&email)),
            phones,
            linkedin_link: present(params.linkedin_url).map(|url| transform_link(&url, None)),
            x_link: present(params.x_url).map(|url| transform_link(&url, None)),
            job_title: params.job_title,
            city: params.city,
            company_id: params.company_id,
            education: params.education,
            address: params.address,
            description: params.description,
            experience: params.experience,
        };

        (params.id, patch)
    }

    fn list_filter(params: &ListPeopleParams) -> Option<Value> {
        let search = params
            .search_term
            .as_deref()
            .filter(|term| !term.is_empty())
            .map(|term| {
                let pattern = crate::transform::ilike(term);
                json!([
                    { "name": { "firstName": pattern } },
                    { "name": { "lastName": pattern } },
                    { "emails": { "primaryEmail": pattern } },
                ])
            });

        FilterBuilder::new()
            .with("or", search)
            .eq("companyId", params.company_id.as_deref())
            .build()
    }

    fn created_message(person: &Person) -> String {
        let name = person.name.clone().unwrap_or(FullName {
            first_name: String::new(),
            last_name: String::new(),
        });
        format!("✅ Created person: {} {}", name.first_name, name.last_name)
    }
}

/// Create a person, then re-send any free-text fields the create dropped.
///
/// The upstream create mutation does not reliably persist the custom text
/// fields, so one follow-up update carries whichever of them came back
/// missing or empty. The rendered record reflects the follow-up's values.
pub async fn create<T: HttpTransport>(
    client: &GraphQlClient<T>,
    params: CreatePersonParams,
) -> CrmResult<String> {
    let input = Person::create_input(params)?;
    let requested = input.custom.clone();

    let mut person: Person = client
        .request_field(CREATE_PERSON, json!({ "input": input }), "createPerson")
        .await?;

    let missing = requested.missing_from(&person);
    if !missing.is_empty() {
        debug!(person_id = %person.id, "Re-sending custom fields dropped on create");
        let patch = PersonPatch::from(missing);
        let updated: Person = client
            .request_field(
                UPDATE_PERSON,
                json!({ "id": person.id, "input": patch }),
                "updatePerson",
            )
            .await?;

        person.education = updated.education.or(person.education);
        person.address = updated.address.or(person.address);
        person.description = updated.description.or(person.description);
        person.experience = updated.experience.or(person.experience);
    }

    crud::render_created::<Person>(&person)
}
