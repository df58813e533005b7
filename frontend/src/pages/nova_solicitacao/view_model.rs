use crate::api::{ApiClient, ApiError, NovaSolicitacaoPayload, Voo};
use crate::pages::nova_solicitacao::utils::FormularioSolicitacao;
use crate::state::auth::{use_auth, AuthState};
use leptos::*;

#[derive(Clone, Copy)]
pub struct NovaSolicitacaoViewModel {
    pub form: FormularioSolicitacao,
    pub voo_selecionado: RwSignal<Option<Voo>>,
    pub erro: RwSignal<Option<ApiError>>,
    pub criar_action: Action<NovaSolicitacaoPayload, Result<(), ApiError>>,
    auth: ReadSignal<AuthState>,
}

impl NovaSolicitacaoViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let (auth, _) = use_auth();
        let form = FormularioSolicitacao::default();
        let voo_selecionado = create_rw_signal(None::<Voo>);
        let erro = create_rw_signal(None::<ApiError>);

        if let Some(usuario) = auth.get_untracked().usuario {
            form.preencher_solicitante(&usuario);
        }

        let criar_action = create_action(move |payload: &NovaSolicitacaoPayload| {
            let api = api.clone();
            let payload = payload.clone();
            async move { api.criar_solicitacao(&payload).await.map(|_| ()) }
        });

        create_effect(move |_| {
            if let Some(result) = criar_action.value().get() {
                match result {
                    Ok(()) => {
                        erro.set(None);
                        form.reset();
                        voo_selecionado.set(None);
                        // Criada a solicitação, a fila de aprovação é a
                        // próxima parada.
                        if let Some(win) = web_sys::window() {
                            let _ = win.location().set_href("/aprovacoes");
                        }
                    }
                    Err(err) => erro.set(Some(err)),
                }
            }
        });

        Self {
            form,
            voo_selecionado,
            erro,
            criar_action,
            auth,
        }
    }

    pub fn submeter(&self) {
        if self.criar_action.pending().get_untracked() {
            return;
        }
        let Some(usuario) = self.auth.get_untracked().usuario else {
            self.erro
                .set(Some(ApiError::validation("Sessão expirada. Entre novamente.")));
            return;
        };
        match self
            .form
            .validar_e_montar(&usuario, self.voo_selecionado.get_untracked())
        {
            Ok(payload) => {
                self.erro.set(None);
                self.criar_action.dispatch(payload);
            }
            Err(err) => self.erro.set(Some(err)),
        }
    }
}

pub fn use_nova_solicitacao_view_model() -> NovaSolicitacaoViewModel {
    match use_context::<NovaSolicitacaoViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = NovaSolicitacaoViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{prover_auth, usuario};
    use crate::test_support::ssr::{wait_until, with_local_runtime_async, with_runtime};
    use crate::workflow::Papel;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn invalid_form_never_dispatches_the_create_call() {
        with_runtime(|| {
            prover_auth(Some(usuario(Papel::Colaborador)));
            let vm = NovaSolicitacaoViewModel::new();
            vm.submeter();
            assert!(vm.criar_action.value().get().is_none());
            assert_eq!(vm.erro.get().unwrap().code, "VALIDATION_ERROR");
        });
    }

    #[test]
    fn missing_session_blocks_submission() {
        with_runtime(|| {
            prover_auth(None);
            let vm = NovaSolicitacaoViewModel::new();
            vm.submeter();
            assert!(vm.criar_action.value().get().is_none());
            assert!(vm.erro.get().unwrap().message.contains("Sessão expirada"));
        });
    }

    #[test]
    fn requester_name_is_prefilled_from_the_session() {
        with_runtime(|| {
            prover_auth(Some(usuario(Papel::Colaborador)));
            let vm = NovaSolicitacaoViewModel::new();
            assert_eq!(vm.form.nome_completo.get_untracked(), "João Silva");
        });
    }

    #[test]
    fn valid_form_posts_and_resolves() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start_async().await;
            let mock = server
                .mock_async(|when, then| {
                    when.method(POST)
                        .path("/api/solicitacoes")
                        .json_body_partial(r#"{ "solicitanteId": "u1", "destino": "Recife" }"#);
                    then.status(201).json_body(json!({ "id": "sol-1" }));
                })
                .await;

            prover_auth(Some(usuario(Papel::Colaborador)));
            provide_context(ApiClient::new_with_base_url(server.base_url()));
            let vm = NovaSolicitacaoViewModel::new();
            vm.form.empresa.set("GWIND".to_string());
            vm.form.gestor.set("Carlos Vasconcelos".to_string());
            vm.form.origem.set("São Paulo".to_string());
            vm.form.destino.set("Recife".to_string());
            vm.form.justificativa.set("Visita técnica".to_string());
            vm.form.data_ida.set("2026-09-10".to_string());

            vm.submeter();
            assert!(
                wait_until(|| vm.criar_action.value().get_untracked().is_some()).await,
                "criação deveria terminar"
            );
            assert!(matches!(
                vm.criar_action.value().get_untracked(),
                Some(Ok(()))
            ));
            mock.assert_async().await;

            runtime.dispose();
        });
    }
}
