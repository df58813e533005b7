use leptos::*;

mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::DetalhesPanel;

#[component]
pub fn DetalhesPage() -> impl IntoView {
    view! { <DetalhesPanel/> }
}
