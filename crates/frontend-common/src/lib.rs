//! Shared frontend pieces for the aula console.
//!
//! Binds the session flow to the browser: a `localStorage` adapter for the
//! storage port, the session context/provider, and the [`SessionGate`]
//! that guards the protected shell.

pub mod browser;
pub mod components;
pub mod config;
pub mod context;
pub mod gate;
pub mod storage;

pub use components::{LoadingSpinner, UnauthorizedRole};
pub use config::{AuthConfig, RuntimeConfig};
pub use context::{use_is_authenticated, use_session, SessionHandle, SessionProvider};
pub use gate::SessionGate;
pub use storage::WebStorage;
