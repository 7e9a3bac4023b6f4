//! Unauthorized-role card

use yew::prelude::*;

use crate::context::use_session;

/// Shown when the session is real but the role does not grant console
/// access. Terminal until a fresh login replaces the session, so the only
/// action offered is the way back to the login application.
#[function_component(UnauthorizedRole)]
pub fn unauthorized_role() -> Html {
    let session = use_session();

    let on_return = {
        let session = session.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let session = session.clone();
            wasm_bindgen_futures::spawn_local(async move {
                // Drop the foreign-role session before leaving.
                session.service().logout().await;
                session.redirect_to_login();
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
            <div class="bg-white rounded-lg shadow-lg p-8 max-w-md w-full text-center">
                <h2 class="text-xl font-bold text-gray-900 mb-4">
                    {"Acceso no autorizado"}
                </h2>
                <p class="text-gray-600 mb-6">
                    {"Tu cuenta no tiene permisos de administración. Inicia sesión con una cuenta de administrador para continuar."}
                </p>
                <button
                    class="px-4 py-2 text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 rounded-md transition-all"
                    onclick={on_return}
                >
                    {"Volver al acceso"}
                </button>
            </div>
        </div>
    }
}
