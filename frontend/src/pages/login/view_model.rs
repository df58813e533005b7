use crate::api::{ApiError, LoginRequest};
use crate::pages::login::utils;
use crate::state::auth;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub email: RwSignal<String>,
    pub senha: RwSignal<String>,
    pub erro: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

impl LoginViewModel {
    pub fn new() -> Self {
        let email = create_rw_signal(String::new());
        let senha = create_rw_signal(String::new());
        let erro = create_rw_signal(None::<ApiError>);
        let login_action = auth::use_login_action();

        create_effect(move |_| {
            if let Some(result) = login_action.value().get() {
                match result {
                    Ok(()) => {
                        erro.set(None);
                        if let Some(win) = web_sys::window() {
                            let _ = win.location().set_href("/dashboard");
                        }
                    }
                    Err(err) => erro.set(Some(err)),
                }
            }
        });

        Self {
            email,
            senha,
            erro,
            login_action,
        }
    }

    /// Valida localmente antes de emitir a chamada; campos vazios nunca
    /// chegam à rede.
    pub fn submeter(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        let email = self.email.get_untracked();
        let senha = self.senha.get_untracked();
        if let Err(err) = utils::validar_credenciais(&email, &senha) {
            self.erro.set(Some(err));
            return;
        }
        self.erro.set(None);
        self.login_action.dispatch(LoginRequest {
            email: email.trim().to_string(),
            password: senha,
        });
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    match use_context::<LoginViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = LoginViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
