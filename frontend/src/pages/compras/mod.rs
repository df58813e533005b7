use leptos::*;

mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::ComprasPanel;

#[component]
pub fn ComprasPage() -> impl IntoView {
    view! { <ComprasPanel/> }
}
