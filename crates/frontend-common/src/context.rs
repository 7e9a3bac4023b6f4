//! Session context and provider

use std::rc::Rc;

use aula_core::{AuthSnapshot, SessionEvents};
use aula_http::IdentityClient;
use aula_session::{login_redirect_url, AuthService};
use tracing::error;
use yew::prelude::*;

use crate::browser;
use crate::config::RuntimeConfig;
use crate::storage::WebStorage;

/// Handle shared with every component below the provider.
///
/// The token store stays the single owner of the session; the snapshot
/// here is only the transient in-memory mirror components render from.
#[derive(Clone)]
pub struct SessionHandle {
    service: Rc<AuthService>,
    config: Rc<RuntimeConfig>,
    snapshot: UseStateHandle<AuthSnapshot>,
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.service, &other.service) && *self.snapshot == *other.snapshot
    }
}

impl SessionHandle {
    /// The per-process authentication service.
    pub fn service(&self) -> &Rc<AuthService> {
        &self.service
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Mirror of the token store as of the last [`SessionHandle::sync`].
    pub fn snapshot(&self) -> AuthSnapshot {
        (*self.snapshot).clone()
    }

    /// Re-read the token store into the mirror.
    pub fn sync(&self) {
        self.snapshot.set(self.service.check_authentication());
    }

    /// Bounce the browser to the login application, carrying the current
    /// page as the post-login return target.
    pub fn redirect_to_login(&self) {
        let return_to = browser::current_url()
            .map(|url| url.to_string())
            .unwrap_or_default();
        match login_redirect_url(&self.config.login_app_url, &return_to) {
            Ok(url) => browser::navigate_to(url.as_str()),
            Err(err) => error!(%err, "login application URL is misconfigured"),
        }
    }
}

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    /// Deployment overrides; the [`RuntimeConfig`] defaults apply when absent.
    #[prop_or_default]
    pub config: Option<RuntimeConfig>,
    pub children: Children,
}

/// Constructs the authentication service once and provides the session
/// context to the subtree.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let config = use_memo(props.config.clone(), |config| {
        config.clone().unwrap_or_default()
    });
    let snapshot = use_state(AuthSnapshot::default);
    let service = {
        let config = config.clone();
        use_memo((), move |_| {
            IdentityClient::new(config.identity_base_url.clone()).map(|client| {
                Rc::new(AuthService::new(
                    client,
                    Rc::new(WebStorage::new()),
                    SessionEvents::new(),
                ))
            })
        })
    };

    match service.as_ref() {
        Ok(service) => {
            let handle = SessionHandle {
                service: service.clone(),
                config,
                snapshot,
            };
            html! {
                <ContextProvider<SessionHandle> context={handle}>
                    {props.children.clone()}
                </ContextProvider<SessionHandle>>
            }
        }
        Err(err) => html! {
            <div class="p-10 text-center text-red-600">
                {format!("No se pudo inicializar el cliente de identidad: {err}")}
            </div>
        },
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
        .expect("SessionHandle not found. Make sure to wrap your component with SessionProvider")
}

/// Hook to check if a complete session is present
#[hook]
pub fn use_is_authenticated() -> bool {
    use_session().snapshot().is_authenticated
}
