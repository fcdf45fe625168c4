//! GraphQL access to the CRM.
//!
//! - `transport`: the HTTP seam (`HttpTransport`) and its reqwest implementation
//! - `client`: request/response handling on top of a transport
//! - `types`: cursor-pagination shapes shared by every list query

mod client;
mod transport;
mod types;

#[cfg(test)]
mod client_test;

pub use client::GraphQlClient;
#[cfg(test)]
pub use transport::MockHttpTransport;
pub use transport::{HttpReply, HttpTransport, ReqwestTransport};
pub use types::{Connection, Edge, PageInfo};
