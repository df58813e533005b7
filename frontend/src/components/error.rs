use crate::api::ApiError;
use leptos::*;

/// Faixa de erro padrão. Mostra o código da taxonomia quando ele agrega
/// informação além da mensagem.
#[component]
pub fn MensagemErro(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="error-message">
                <div class="error-message-text">
                    {move || error.get().map(|e| e.message).unwrap_or_default()}
                </div>
                {move || {
                    error
                        .get()
                        .filter(|e| e.code != "UNKNOWN" && !e.code.is_empty())
                        .map(|e| view! { <div class="error-message-code">{"Código: "}{e.code}</div> })
                }}
            </div>
        </Show>
    }
}

#[component]
pub fn MensagemSucesso(mensagem: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || mensagem.get().is_some() fallback=|| ()>
            <div class="success-message">
                {move || mensagem.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
