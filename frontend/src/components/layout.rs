use crate::state::auth::{self, use_auth, use_sessao};
use leptos::*;

const LINKS_NAVEGACAO: &[(&str, &str)] = &[
    ("/dashboard", "Dashboard"),
    ("/nova-solicitacao", "Nova Solicitação"),
    ("/aprovacoes", "Aprovações"),
    ("/compras", "Compras"),
];

#[component]
pub fn BarraLateral() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <span class="sidebar-logo">"✈"</span>
                <span class="sidebar-title">"Sistema de Solicitações"</span>
            </div>
            <nav class="sidebar-nav">
                {LINKS_NAVEGACAO
                    .iter()
                    .map(|(caminho, rotulo)| {
                        view! {
                            <a href=*caminho class="sidebar-link">
                                {*rotulo}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

#[component]
pub fn CabecalhoUsuario() -> impl IntoView {
    let (auth, set_auth) = use_auth();
    let sessao = use_sessao();

    let nome = move || {
        auth.get()
            .usuario
            .map(|u| u.name)
            .unwrap_or_else(|| "—".to_string())
    };
    let papel = move || {
        auth.get()
            .usuario
            .map(|u| u.role.rotulo().to_string())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        auth::sair(sessao, set_auth);
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/login");
        }
    };

    view! {
        <div class="header-user">
            <div class="header-user-info">
                <span class="header-user-name">{nome}</span>
                <span class="header-user-role">{papel}</span>
            </div>
            <button class="btn btn-secondary" on:click=on_logout>
                "Sair"
            </button>
        </div>
    }
}

/// Moldura comum de página: barra lateral, cabeçalho com título e o chip
/// do usuário logado.
#[component]
pub fn MolduraPagina(
    #[prop(into)] titulo: String,
    #[prop(optional, into)] subtitulo: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="layout">
            <BarraLateral/>
            <div class="main-content">
                <div class="container">
                    <div class="page-header">
                        <div>
                            <h1 class="page-title">{titulo}</h1>
                            {subtitulo.map(|texto| view! { <p class="page-subtitle">{texto}</p> })}
                        </div>
                        <CabecalhoUsuario/>
                    </div>
                    {children()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn IndicadorCarregando() -> impl IntoView {
    view! {
        <div class="loading">
            <span class="animate-spin loading-spinner"></span>
            "Carregando..."
        </div>
    }
}
