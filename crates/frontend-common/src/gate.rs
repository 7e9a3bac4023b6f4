//! Session gate guarding the protected shell

use aula_core::{keys, GateState};
use aula_session::{extract_session, scrub_url, ExtractOutcome};
use gloo::events::EventListener;
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::StorageEvent;
use yew::prelude::*;

use crate::browser;
use crate::components::{LoadingSpinner, UnauthorizedRole};
use crate::context::{use_session, SessionHandle};

#[derive(Properties, PartialEq)]
pub struct SessionGateProps {
    pub children: Children,
}

/// Gate for the protected application shell.
///
/// Resolution order on mount: URL handoff, stored session, backend check,
/// role check. While resolution is pending only the spinner renders; an
/// unauthenticated outcome bounces the browser to the login application.
/// For the lifetime of the mount the gate also listens for token renewal,
/// logout, and cross-tab storage changes on the access-token key, and
/// re-derives its state from each without a reload.
#[function_component(SessionGate)]
pub fn session_gate(props: &SessionGateProps) -> Html {
    let session = use_session();
    let state = use_state(|| GateState::Initializing);

    // Initial resolution.
    {
        let session = session.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                state.set(resolve(&session).await);
            });
            || ()
        });
    }

    // Session signals, unsubscribed on unmount by dropping the guards.
    {
        let session = session.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            let events = session.service().events().clone();
            let bus_guard = {
                let session = session.clone();
                let state = state.clone();
                events.subscribe(move |event| {
                    session.sync();
                    let snapshot = session.service().check_authentication();
                    apply(&session, &state, GateState::on_event(event, &snapshot));
                })
            };

            let storage_guard = {
                let session = session.clone();
                let state = state.clone();
                EventListener::new(&gloo::utils::window(), "storage", move |event| {
                    let Some(event) = event.dyn_ref::<StorageEvent>() else {
                        return;
                    };
                    if event.key().as_deref() != Some(keys::ACCESS_TOKEN) {
                        return;
                    }
                    session.sync();
                    let snapshot = session.service().check_authentication();
                    apply(&session, &state, GateState::from_snapshot(&snapshot));
                })
            };

            move || {
                drop(bus_guard);
                drop(storage_guard);
            }
        });
    }

    match *state {
        GateState::Initializing => html! {
            <LoadingSpinner text={Some("Comprobando la sesión...".to_string())} />
        },
        GateState::Authenticated => html! { <>{ props.children.clone() }</> },
        GateState::Unauthenticated => html! {
            <LoadingSpinner text={Some("Redirigiendo al acceso...".to_string())} />
        },
        GateState::Unauthorized => html! { <UnauthorizedRole /> },
    }
}

/// Full mount-time resolution.
async fn resolve(session: &SessionHandle) -> GateState {
    let service = session.service().clone();

    if let Some(url) = browser::current_url() {
        if let ExtractOutcome::Rejected(err) = extract_session(&url, service.store()) {
            warn!(%err, "login handoff rejected");
        }
        if let Some(cleaned) = scrub_url(&url) {
            browser::replace_url(&cleaned);
        }
    }

    let snapshot = service.check_authentication();
    session.sync();
    if !snapshot.is_authenticated {
        session.redirect_to_login();
        return GateState::Unauthenticated;
    }

    let backend_valid = service.validate().await;
    // A refresh may have rewritten the access token while we were away.
    let snapshot = service.check_authentication();
    session.sync();

    let resolved = GateState::resolve(&snapshot, backend_valid);
    if resolved == GateState::Unauthenticated {
        session.redirect_to_login();
    }
    resolved
}

/// Store the next state, bouncing to login when the session is gone.
fn apply(session: &SessionHandle, state: &UseStateHandle<GateState>, next: GateState) {
    if next == GateState::Unauthenticated {
        session.redirect_to_login();
    }
    state.set(next);
}
