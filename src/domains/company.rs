//! Companies.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::crud::{Entity, ListLimit};
use crate::error::CrmResult;
use crate::transform::{
    Address, AddressFields, Currency, Link, transform_address, transform_currency, transform_link,
};

use super::{FilterBuilder, present};

const CREATE_COMPANY: &str = r#"
  mutation CreateCompany($input: CompanyCreateInput!) {
    createCompany(data: $input) {
      id
      name
      domainName { primaryLinkUrl }
      address {
        addressStreet1 addressStreet2 addressCity
        addressPostcode addressState addressCountry
      }
      employees
      linkedinLink { primaryLinkUrl }
      xLink { primaryLinkUrl }
      annualRecurringRevenue { amountMicros currencyCode }
      idealCustomerProfile
      createdAt
    }
  }
"#;

const GET_COMPANY: &str = r#"
  query GetCompany($id: UUID!) {
    company(filter: { id: { eq: $id } }) {
      id
      name
      domainName { primaryLinkUrl }
      address {
        addressStreet1 addressStreet2 addressCity
        addressPostcode addressState addressCountry
      }
      employees
      linkedinLink { primaryLinkUrl }
      xLink { primaryLinkUrl }
      annualRecurringRevenue { amountMicros currencyCode }
      idealCustomerProfile
      createdAt
      updatedAt
    }
  }
"#;

const LIST_COMPANIES: &str = r#"
  query ListCompanies($filter: CompanyFilterInput, $limit: Int) {
    companies(filter: $filter, first: $limit) {
      edges {
        node {
          id
          name
          domainName { primaryLinkUrl }
          address {
            addressStreet1 addressStreet2 addressCity
            addressPostcode addressState addressCountry
          }
          employees
          annualRecurringRevenue { amountMicros currencyCode }
          idealCustomerProfile
        }
      }
      pageInfo { hasNextPage hasPreviousPage }
    }
  }
"#;

const UPDATE_COMPANY: &str = r#"
  mutation UpdateCompany($id: UUID!, $input: CompanyUpdateInput!) {
    updateCompany(id: $id, data: $input) {
      id
      name
      domainName { primaryLinkUrl }
      address {
        addressStreet1 addressStreet2 addressCity
        addressPostcode addressState addressCountry
      }
      employees
      annualRecurringRevenue { amountMicros currencyCode }
      idealCustomerProfile
      updatedAt
    }
  }
"#;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employees: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_link: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_link: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_recurring_revenue: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal_customer_profile: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyParams {
    #[schemars(description = "Company name (required)")]
    pub name: String,
    #[schemars(description = "Company website URL")]
    pub domain_url: Option<String>,
    #[schemars(description = "Address street line 1")]
    pub address_street1: Option<String>,
    #[schemars(description = "Address street line 2")]
    pub address_street2: Option<String>,
    #[schemars(description = "City")]
    pub address_city: Option<String>,
    #[schemars(description = "Postcode/ZIP")]
    pub address_postcode: Option<String>,
    #[schemars(description = "State/Province")]
    pub address_state: Option<String>,
    #[schemars(description = "Country")]
    pub address_country: Option<String>,
    #[schemars(description = "Number of employees")]
    pub employees: Option<i64>,
    #[schemars(description = "LinkedIn company URL")]
    pub linkedin_url: Option<String>,
    #[schemars(description = "X/Twitter URL")]
    pub x_url: Option<String>,
    #[schemars(description = "Annual recurring revenue (will be stored in micros)")]
    pub annual_recurring_revenue: Option<f64>,
    #[schemars(description = "Currency code (e.g., 'EUR', 'USD'), defaults to USD")]
    pub currency: Option<String>,
    #[schemars(description = "Is this an ideal customer profile")]
    pub ideal_customer_profile: Option<bool>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyParams {
    #[schemars(description = "Company ID (required)")]
    pub id: String,
    #[schemars(description = "Company name")]
    pub name: Option<String>,
    #[schemars(description = "Company website URL")]
    pub domain_url: Option<String>,
    #[schemars(description = "Address street line 1")]
    pub address_street1: Option<String>,
    #[schemars(description = "Address street line 2")]
    pub address_street2: Option<String>,
    #[schemars(description = "City")]
    pub address_city: Option<String>,
    #[schemars(description = "Postcode/ZIP")]
    pub address_postcode: Option<String>,
    #[schemars(description = "State/Province")]
    pub address_state: Option<String>,
    #[schemars(description = "Country")]
    pub address_country: Option<String>,
    #[schemars(description = "Number of employees")]
    pub employees: Option<i64>,
    #[schemars(description = "LinkedIn company URL")]
    pub linkedin_url: Option<String>,
    #[schemars(description = "X/Twitter URL")]
    pub x_url: Option<String>,
    #[schemars(description = "Annual recurring revenue")]
    pub annual_recurring_revenue: Option<f64>,
    #[schemars(description = "Currency code")]
    pub currency: Option<String>,
    #[schemars(description = "Is this an ideal customer profile")]
    pub ideal_customer_profile: Option<bool>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListCompaniesParams {
    #[schemars(description = "Number of results to return (max: 60, default: 20)")]
    pub limit: Option<u32>,
    #[schemars(description = "Search by company name")]
    pub search_term: Option<String>,
}

impl ListLimit for ListCompaniesParams {
    fn limit(&self) -> Option<u32> {
        self.limit
    }
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employees: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_link: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_link: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_recurring_revenue: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ideal_customer_profile: Option<bool>,
}

/// Zero revenue is treated as "not supplied".
fn revenue(amount: Option<f64>, currency: Option<&str>) -> Option<Currency> {
    amount
        .filter(|amount| *amount != 0.0)
        .map(|amount| transform_currency(amount, currency))
}

fn link(url: Option<String>) -> Option<Link> {
    present(url).map(|url| transform_link(&url, None))
}

impl Entity for Company {
    const NAME: &'static str = "company";
    const TYPE_NAME: &'static str = "Company";

    const CREATE_MUTATION: &'static str = CREATE_COMPANY;
    const GET_QUERY: &'static str = GET_COMPANY;
    const LIST_QUERY: &'static str = LIST_COMPANIES;
    const UPDATE_MUTATION: &'static str = UPDATE_COMPANY;

    type Record = Company;
    type CreateParams = CreateCompanyParams;
    type UpdateParams = UpdateCompanyParams;
    type ListParams = ListCompaniesParams;
    type Input = CompanyInput;
    type Patch = CompanyInput;

    fn create_input(params: CreateCompanyParams) -> CrmResult<CompanyInput> {
        let address = transform_address(AddressFields {
            street1: params.address_street1,
            street2: params.address_street2,
            city: params.address_city,
            postcode: params.address_postcode,
            state: params.address_state,
            country: params.address_country,
        });

        Ok(CompanyInput {
            name: Some(params.name),
            domain_name: link(params.domain_url),
            address,
            employees: params.employees,
            linkedin_link: link(params.linkedin_url),
            x_link: link(params.x_url),
            annual_recurring_revenue: revenue(
                params.annual_recurring_revenue,
                params.currency.as_deref(),
            ),
            ideal_customer_profile: params.ideal_customer_profile,
        })
    }

    fn update_input(params: UpdateCompanyParams) -> (String, CompanyInput) {
        // `None` unless at least one address field was supplied.
        let address = transform_address(AddressFields {
            street1: params.address_street1,
            street2: params.address_street2,
            city: params.address_city,
            postcode: params.address_postcode,
            state: params.address_state,
            country: params.address_country,
        });

        let patch = CompanyInput {
            name: params.name,
            domain_name: link(params.domain_url),
            address,
            employees: params.employees,
            linkedin_link: link(params.linkedin_url),
            x_link: link(params.x_url),
            annual_recurring_revenue: revenue(
                params.annual_recurring_revenue,
                params.currency.as_deref(),
            ),
            ideal_customer_profile: params.ideal_customer_profile,
        };

        (params.id, patch)
    }

    fn list_filter(params: &ListCompaniesParams) -> Option<Value> {
        FilterBuilder::new()
            .ilike("name", params.search_term.as_deref())
            .build()
    }

    fn created_message(company: &Company) -> String {
        format!(
            "✅ Created company: {}",
            company.name.as_deref().unwrap_or_default()
        )
    }
}
