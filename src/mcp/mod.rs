//! Model Context Protocol (MCP) server exposing the CRM as tools.
//!
//! - **server**: [`CrmServer`], the coordinator implementing `ServerHandler`
//! - **tools**: one router per CRM object, all on `CrmServer`
//!
//! Every tool returns a single text block. Failures are reported as
//! error-flagged tool results (`Error: ...`) rather than protocol errors, so
//! one bad call never takes the server down.

pub mod server;
pub mod tools;


pub use server::{CrmServer, SERVER_NAME};
