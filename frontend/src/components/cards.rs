use leptos::*;

#[component]
pub fn CartaoEstatistica(
    #[prop(into)] icone: String,
    #[prop(into)] valor: Signal<String>,
    #[prop(into)] rotulo: String,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-icon">{icone}</div>
            <div class="stat-content">
                <div class="stat-value">{move || valor.get()}</div>
                <div class="stat-label">{rotulo}</div>
            </div>
        </div>
    }
}

#[component]
pub fn CartaoValorTotal(
    #[prop(into)] valor: Signal<String>,
    #[prop(into)] subtitulo: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="card valor-total-card">
            <h2 class="card-title">"Valor Total Estimado"</h2>
            <div class="valor-total-content">
                <div class="valor-total-value">{move || valor.get()}</div>
                <div class="valor-total-subtitle">{move || subtitulo.get()}</div>
            </div>
        </div>
    }
}
