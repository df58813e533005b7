use leptos::ev::KeyboardEvent;
use leptos::*;

/// Modal de decisão com um campo de texto obrigatório: motivo nas etapas de
/// aprovação, número do bilhete no processamento de compras. O botão de
/// rejeição só aparece quando a página fornece o callback.
#[component]
pub fn DialogoDecisao(
    aberto: Signal<bool>,
    #[prop(into)] titulo: MaybeSignal<String>,
    #[prop(into)] rotulo_campo: String,
    #[prop(into)] placeholder: String,
    valor: RwSignal<String>,
    ocupado: Signal<bool>,
    #[prop(into)] confirmar_rotulo: String,
    on_confirmar: Callback<()>,
    #[prop(optional, into)] on_rejeitar: Option<Callback<()>>,
    on_cancelar: Callback<()>,
    #[prop(optional)] multilinha: bool,
) -> impl IntoView {
    let cancelar_fundo = on_cancelar;
    let cancelar_fechar = on_cancelar;
    let cancelar_esc = on_cancelar;
    let cancelar_rodape = on_cancelar;
    let titulo_texto = Signal::derive(move || titulo.get());

    let campo = if multilinha {
        view! {
            <textarea
                class="form-textarea"
                placeholder=placeholder.clone()
                prop:value=move || valor.get()
                on:input=move |ev| valor.set(event_target_value(&ev))
                rows="4"
            ></textarea>
        }
        .into_view()
    } else {
        view! {
            <input
                type="text"
                class="form-input"
                placeholder=placeholder.clone()
                prop:value=move || valor.get()
                on:input=move |ev| valor.set(event_target_value(&ev))
            />
        }
        .into_view()
    };

    view! {
        <Show when=move || aberto.get()>
            <div class="modal-overlay" on:click=move |_| cancelar_fundo.call(())>
                <div
                    class="modal-content"
                    role="dialog"
                    aria-modal="true"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            cancelar_esc.call(());
                        }
                    }
                >
                    <div class="modal-header">
                        <h3 class="modal-title">{move || titulo_texto.get()}</h3>
                        <button
                            type="button"
                            class="modal-close"
                            aria-label="Fechar"
                            on:click=move |_| cancelar_fechar.call(())
                        >
                            "×"
                        </button>
                    </div>
                    <div class="form-group">
                        <label class="form-label">{rotulo_campo.clone()} " *"</label>
                        {campo.clone()}
                    </div>
                    <div class="modal-actions">
                        <button
                            type="button"
                            class="btn btn-success"
                            disabled=move || ocupado.get()
                            on:click=move |_| on_confirmar.call(())
                        >
                            {confirmar_rotulo.clone()}
                        </button>
                        {on_rejeitar.map(|rejeitar| {
                            view! {
                                <button
                                    type="button"
                                    class="btn btn-danger"
                                    disabled=move || ocupado.get()
                                    on:click=move |_| rejeitar.call(())
                                >
                                    "Confirmar Rejeição"
                                </button>
                            }
                        })}
                        <button
                            type="button"
                            class="btn btn-secondary"
                            disabled=move || ocupado.get()
                            on:click=move |_| cancelar_rodape.call(())
                        >
                            "Cancelar"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
