use aula_frontend_common::{use_session, SessionGate, SessionProvider};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <SessionGate>
                <AdminShell />
            </SessionGate>
        </SessionProvider>
    }
}

/// Protected console shell. The record sections themselves live behind
/// their own routes served by the micro-frontends; this shell only renders
/// once the gate has confirmed an administrator session.
#[function_component(AdminShell)]
fn admin_shell() -> Html {
    let session = use_session();
    let snapshot = session.snapshot();
    let display_name = snapshot
        .user
        .as_ref()
        .map(|user| user.full_name())
        .unwrap_or_default();

    let on_logout = {
        let session = session.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let session = session.clone();
            wasm_bindgen_futures::spawn_local(async move {
                session.service().logout().await;
                session.redirect_to_login();
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <nav class="bg-white border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between h-16 items-center">
                        <h1 class="text-2xl font-bold text-gray-900">{"Aula · Administración"}</h1>
                        <div class="flex items-center gap-4">
                            <span class="text-sm text-gray-600">
                                {format!("Hola, {display_name}")}
                            </span>
                            <button
                                onclick={on_logout}
                                class="text-sm text-gray-600 hover:text-gray-900"
                            >
                                {"Cerrar sesión"}
                            </button>
                        </div>
                    </div>
                </div>
            </nav>

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10">
                <div class="grid grid-cols-1 gap-6 sm:grid-cols-3">
                    <SectionCard
                        title="Administradores"
                        description="Altas, bajas y permisos del equipo administrador."
                        href="/administradores"
                    />
                    <SectionCard
                        title="Docentes"
                        description="Gestión del profesorado y sus asignaciones."
                        href="/docentes"
                    />
                    <SectionCard
                        title="Noticias"
                        description="Publicación y archivo de noticias del centro."
                        href="/noticias"
                    />
                </div>
            </main>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SectionCardProps {
    title: AttrValue,
    description: AttrValue,
    href: AttrValue,
}

#[function_component(SectionCard)]
fn section_card(props: &SectionCardProps) -> Html {
    html! {
        <a
            href={props.href.clone()}
            class="block bg-white rounded-lg shadow p-6 hover:shadow-md transition-shadow"
        >
            <h3 class="text-lg font-medium text-gray-900">{props.title.clone()}</h3>
            <p class="mt-2 text-sm text-gray-500">{props.description.clone()}</p>
        </a>
    }
}
