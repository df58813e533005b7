use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    components::guard::RequireAuth,
    pages::{
        AprovacoesPage, ComprasPage, DashboardPage, DetalhesPage, HomePage, LoginPage,
        NovaSolicitacaoPage,
    },
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/dashboard",
    "/nova-solicitacao",
    "/aprovacoes",
    "/compras",
    "/solicitacao/:id",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/dashboard",
    "/nova-solicitacao",
    "/aprovacoes",
    "/compras",
    "/solicitacao/:id",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::api::ApiClient::new());
    view! {
        <AuthProvider>
            <Title text="Sistema de Solicitações"/>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/nova-solicitacao" view=ProtectedNovaSolicitacao/>
                    <Route path="/aprovacoes" view=ProtectedAprovacoes/>
                    <Route path="/compras" view=ProtectedCompras/>
                    <Route path="/solicitacao/:id" view=ProtectedDetalhes/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedNovaSolicitacao() -> impl IntoView {
    view! { <RequireAuth><NovaSolicitacaoPage/></RequireAuth> }
}

#[component]
fn ProtectedAprovacoes() -> impl IntoView {
    view! { <RequireAuth><AprovacoesPage/></RequireAuth> }
}

#[component]
fn ProtectedCompras() -> impl IntoView {
    view! { <RequireAuth><ComprasPage/></RequireAuth> }
}

#[component]
fn ProtectedDetalhes() -> impl IntoView {
    view! { <RequireAuth><DetalhesPage/></RequireAuth> }
}
