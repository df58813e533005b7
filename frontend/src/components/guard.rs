use crate::{components::layout::IndicadorCarregando, state::auth::use_auth};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let autenticado = create_memo(move |_| auth.get().autenticado);
    let carregando = create_memo(move |_| auth.get().carregando);

    create_effect(move |_| {
        let state = auth.get();
        if state.carregando || state.autenticado {
            return;
        }
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/login");
        }
    });

    view! {
        <Show
            when=move || deve_renderizar(autenticado.get(), carregando.get())
            fallback=move || {
                if carregando.get() {
                    view! { <IndicadorCarregando/> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn deve_renderizar(autenticado: bool, carregando: bool) -> bool {
    autenticado && !carregando
}
