//! Identity service client

pub mod error;
pub mod identity;
pub mod typed;

pub use error::ClientError;
pub use typed::{IdentityClient, IdentityClientBuilder};
