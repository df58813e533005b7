use crate::state::auth::use_auth;
use leptos::*;

/// Porta de entrada: sessão ativa vai para o dashboard, o resto para o
/// login.
#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();

    create_effect(move |_| {
        let state = auth.get();
        if state.carregando {
            return;
        }
        let destino = if state.autenticado {
            "/dashboard"
        } else {
            "/login"
        };
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(destino);
        }
    });

    view! {
        <div class="home-container">
            <h1>"Sistema de Solicitações"</h1>
            <p>"Solicitações de viagem corporativa com aprovação em etapas"</p>
            <a href="/login" class="btn btn-primary">
                "Entrar"
            </a>
        </div>
    }
}
