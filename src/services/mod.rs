//! Service layer for business logic
//!
//! Shared between the HTTP API and the command-line interface.

mod analytics_service;
mod link_service;
mod redirect;

pub use analytics_service::*;
pub use link_service::*;
pub use redirect::*;
