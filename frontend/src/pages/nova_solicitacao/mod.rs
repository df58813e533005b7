use leptos::*;

pub mod busca_voos;
pub mod cotacao;
mod panel;
pub mod utils;
pub mod view_model;

pub use panel::NovaSolicitacaoPanel;

#[component]
pub fn NovaSolicitacaoPage() -> impl IntoView {
    view! { <NovaSolicitacaoPanel/> }
}
