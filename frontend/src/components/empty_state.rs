use leptos::*;

#[component]
pub fn EstadoVazio(
    #[prop(into)] titulo: String,
    #[prop(optional, into)] descricao: Option<String>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <p class="empty-state-title">{titulo}</p>
            {descricao.map(|texto| view! { <p class="empty-state-description">{texto}</p> })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_title_and_optional_description() {
        let html = render_to_string(|| {
            view! { <EstadoVazio titulo="Nenhuma solicitação encontrada." descricao="Ajuste os filtros."/> }
        });
        assert!(html.contains("Nenhuma solicitação encontrada."));
        assert!(html.contains("Ajuste os filtros."));
    }
}
