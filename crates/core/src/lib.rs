//! Core session types and ports for the aula admin console.
//!
//! This crate carries no browser or network code: everything here compiles
//! on native targets and is exercised directly by the test suites of the
//! crates that build on it.

pub mod events;
pub mod gate;
pub mod profile;
pub mod session;
pub mod store;

pub use events::{SessionEvent, SessionEvents, Subscription};
pub use gate::GateState;
pub use profile::UserProfile;
pub use session::{check_authentication, AuthSnapshot, Session, SessionSource, ADMIN_ROLE};
pub use store::{keys, MemoryStore, SessionStore};
