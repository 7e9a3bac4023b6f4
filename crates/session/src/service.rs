//! Token validation, refresh, and logout

use std::cell::Cell;
use std::rc::Rc;

use aula_core::{check_authentication, keys, AuthSnapshot, SessionEvent, SessionEvents, SessionStore};
use aula_http::IdentityClient;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Authentication service for the console.
///
/// Constructed once at application start and shared by reference; every
/// failure inside is absorbed into a boolean verdict (fail closed) and the
/// session signals on the event bus.
pub struct AuthService {
    client: IdentityClient,
    store: Rc<dyn SessionStore>,
    events: SessionEvents,
    /// Serializes refresh exchanges. See [`AuthService::refresh`].
    refresh_gate: Mutex<()>,
    /// Bumped after every completed exchange so queued callers can tell a
    /// refresh happened while they waited.
    refresh_epoch: Cell<u64>,
}

impl AuthService {
    pub fn new(client: IdentityClient, store: Rc<dyn SessionStore>, events: SessionEvents) -> Self {
        Self {
            client,
            store,
            events,
            refresh_gate: Mutex::new(()),
            refresh_epoch: Cell::new(0),
        }
    }

    /// The storage port the session lives in.
    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    /// The in-process session signal bus.
    pub fn events(&self) -> &SessionEvents {
        &self.events
    }

    /// Snapshot of what the token store currently holds.
    pub fn check_authentication(&self) -> AuthSnapshot {
        check_authentication(self.store.as_ref())
    }

    /// Confirm the stored access token against the identity service.
    ///
    /// No token means no network call. A 401 triggers exactly one refresh
    /// exchange and the verdict of that exchange becomes the verdict of
    /// this validation; every other failure, transport ones included, is
    /// false.
    pub async fn validate(&self) -> bool {
        let Some(token) = self.store.get(keys::ACCESS_TOKEN) else {
            return false;
        };
        match self.client.me(&token).await {
            Ok(_) => true,
            Err(err) if err.is_auth_expired() => {
                debug!("access token rejected, attempting refresh");
                self.refresh().await
            }
            Err(err) => {
                warn!(%err, "token validation failed");
                false
            }
        }
    }

    /// Exchange the refresh token for a new access token.
    ///
    /// Single-flight: callers that arrive while an exchange is running
    /// queue on the gate and, once it completes, derive the shared outcome
    /// from the store instead of issuing a second request.
    pub async fn refresh(&self) -> bool {
        let epoch = self.refresh_epoch.get();
        let _flight = self.refresh_gate.lock().await;
        if self.refresh_epoch.get() != epoch {
            // An exchange finished while we waited; on success the store
            // holds the renewed token, on failure it was cleared.
            return self.store.get(keys::ACCESS_TOKEN).is_some();
        }

        let renewed = self.exchange().await;
        self.refresh_epoch.set(epoch.wrapping_add(1));
        renewed
    }

    async fn exchange(&self) -> bool {
        let Some(refresh_token) = self.store.get(keys::REFRESH_TOKEN) else {
            debug!("no refresh token available, clearing session");
            self.store.clear_session();
            return false;
        };
        match self.client.refresh(&refresh_token).await {
            Ok(renewed) => {
                self.store.set(keys::ACCESS_TOKEN, &renewed.access_token);
                self.events
                    .emit(&SessionEvent::TokenRenewed(renewed.access_token));
                true
            }
            Err(err) => {
                // Terminal: a failed exchange forces re-authentication.
                warn!(%err, "refresh exchange failed, clearing session");
                self.store.clear_session();
                self.events.emit(&SessionEvent::LoggedOut);
                false
            }
        }
    }

    /// End the session.
    ///
    /// The backend notification is best-effort; the local clear and the
    /// logged-out signal happen regardless. Idempotent.
    pub async fn logout(&self) {
        if let Some(token) = self.store.get(keys::ACCESS_TOKEN) {
            if let Err(err) = self.client.logout(&token).await {
                debug!(%err, "logout notification failed, continuing cleanup");
            }
        }
        self.store.clear_session();
        self.events.emit(&SessionEvent::LoggedOut);
    }
}
