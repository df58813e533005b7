use leptos::*;

mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::DashboardPanel;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! { <DashboardPanel/> }
}
