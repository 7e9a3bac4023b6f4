//! Shared UI components

pub mod spinner;
pub mod unauthorized;

pub use spinner::LoadingSpinner;
pub use unauthorized::UnauthorizedRole;
