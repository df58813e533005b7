use crate::components::error::MensagemErro;
use crate::pages::login::view_model::use_login_view_model;
use leptos::ev::SubmitEvent;
use leptos::*;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submeter();
    };

    view! {
        <div class="login-container">
            <div class="login-card">
                <div class="login-header">
                    <h1>"Sistema de Solicitações"</h1>
                    <p>"Faça login para continuar"</p>
                </div>

                <form class="login-form" on:submit=on_submit>
                    <MensagemErro error=vm.erro.into()/>

                    <div class="form-group">
                        <label class="form-label">"Email"</label>
                        <input
                            type="email"
                            class="form-input"
                            placeholder="seu@email.com"
                            prop:value=move || vm.email.get()
                            on:input=move |ev| vm.email.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label class="form-label">"Senha"</label>
                        <input
                            type="password"
                            class="form-input"
                            placeholder="••••••••"
                            prop:value=move || vm.senha.get()
                            on:input=move |ev| vm.senha.set(event_target_value(&ev))
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn btn-primary login-btn"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>

                <div class="login-info">
                    <p><strong>"Usuários de teste:"</strong></p>
                    <ul>
                        <li>"Colaborador: joao@empresa.com / 123"</li>
                        <li>"Gerente: maria@empresa.com / 123"</li>
                        <li>"Diretor: pedro@empresa.com / 123"</li>
                        <li>"Compras: ana@empresa.com / 123"</li>
                    </ul>
                </div>
            </div>
        </div>
    }
}
