use leptos::*;

mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::AprovacoesPanel;

#[component]
pub fn AprovacoesPage() -> impl IntoView {
    view! { <AprovacoesPanel/> }
}
