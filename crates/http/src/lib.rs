//! Typed HTTP client for the aula identity microservice.
//!
//! The identity service is an opaque collaborator: this crate only knows
//! its three session endpoints and how to map its status codes into the
//! client error taxonomy.

pub mod client;
pub mod types;

pub use client::{ClientError, IdentityClient, IdentityClientBuilder};
pub use types::RefreshResponse;
