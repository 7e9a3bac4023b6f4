//! Frontend configuration

/// Authentication configuration defaults.
pub struct AuthConfig;

impl AuthConfig {
    /// Identity microservice base URL.
    pub const IDENTITY_BASE_URL: &'static str = "https://identidad.aula.edu";

    /// External login application the browser bounces to.
    pub const LOGIN_APP_URL: &'static str = "https://acceso.aula.edu";
}

/// Resolved configuration for a running console instance.
///
/// Defaults come from [`AuthConfig`]; deployments override them through
/// the provider's `config` prop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub identity_base_url: String,
    pub login_app_url: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            identity_base_url: AuthConfig::IDENTITY_BASE_URL.to_string(),
            login_app_url: AuthConfig::LOGIN_APP_URL.to_string(),
        }
    }
}
