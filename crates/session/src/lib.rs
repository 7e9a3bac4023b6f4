//! Cross-domain session flow for the aula admin console.
//!
//! The login application lives on another origin and hands credentials to
//! this application through query parameters. This crate turns that
//! handoff into a stored session ([`extractor`]), keeps the session alive
//! against the identity service ([`service`]), and knows how to send the
//! browser back to the login application ([`redirect`]).
//!
//! Nothing in here touches browser APIs; the frontend crates adapt the
//! pieces to the window, which keeps the whole flow natively testable.

pub mod extractor;
pub mod redirect;
pub mod service;

pub use extractor::{extract_session, scrub_url, ExtractError, ExtractOutcome};
pub use redirect::{login_redirect_url, REDIRECT_PARAM};
pub use service::AuthService;
