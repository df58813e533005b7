use crate::api::{ApiClient, ApiError, ProcessamentoPayload, Solicitacao};
use crate::pages::compras::{
    repository::{self, PainelCompras},
    utils::{pode_processar, validar_processamento},
};
use crate::state::auth::{use_auth, AuthState};
use crate::workflow::Papel;
use leptos::*;

#[derive(Clone)]
pub struct PedidoProcessamento {
    pub id: String,
    pub payload: ProcessamentoPayload,
}

#[derive(Clone, Copy)]
pub struct ComprasViewModel {
    pub painel_resource: Resource<u32, Result<PainelCompras, ApiError>>,
    pub selecionada: RwSignal<Option<Solicitacao>>,
    pub bilhete: RwSignal<String>,
    pub erro: RwSignal<Option<ApiError>>,
    pub sucesso: RwSignal<Option<String>>,
    pub processar_action: Action<PedidoProcessamento, Result<(), ApiError>>,
    auth: ReadSignal<AuthState>,
    reload: RwSignal<u32>,
}

pub(crate) fn aplicar_resultado_processamento(
    result: Option<Result<(), ApiError>>,
    erro: RwSignal<Option<ApiError>>,
    sucesso: RwSignal<Option<String>>,
    selecionada: RwSignal<Option<Solicitacao>>,
    bilhete: RwSignal<String>,
    reload: RwSignal<u32>,
) {
    if let Some(result) = result {
        match result {
            Ok(()) => {
                sucesso.set(Some("Compra processada.".to_string()));
                erro.set(None);
                selecionada.set(None);
                bilhete.set(String::new());
                reload.update(|valor| *valor = valor.wrapping_add(1));
            }
            Err(err) => erro.set(Some(err)),
        }
    }
}

impl ComprasViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let (auth, _) = use_auth();
        let selecionada = create_rw_signal(None::<Solicitacao>);
        let bilhete = create_rw_signal(String::new());
        let erro = create_rw_signal(None::<ApiError>);
        let sucesso = create_rw_signal(None::<String>);
        let reload = create_rw_signal(0u32);

        let api_resource = api.clone();
        let painel_resource = create_resource(
            move || reload.get(),
            move |_| {
                let api = api_resource.clone();
                async move { repository::carregar_painel(&api).await }
            },
        );

        let processar_action = create_action(move |pedido: &PedidoProcessamento| {
            let api = api.clone();
            let pedido = pedido.clone();
            async move { repository::processar(&api, &pedido.id, &pedido.payload).await }
        });

        create_effect(move |_| {
            aplicar_resultado_processamento(
                processar_action.value().get(),
                erro,
                sucesso,
                selecionada,
                bilhete,
                reload,
            );
        });

        Self {
            painel_resource,
            selecionada,
            bilhete,
            erro,
            sucesso,
            processar_action,
            auth,
            reload,
        }
    }

    fn papel(&self) -> Option<Papel> {
        self.auth.get_untracked().usuario.map(|usuario| usuario.role)
    }

    pub fn abrir_dialogo(&self, solicitacao: Solicitacao) {
        self.sucesso.set(None);
        match pode_processar(self.papel()) {
            Ok(()) => {
                self.erro.set(None);
                self.bilhete.set(String::new());
                self.selecionada.set(Some(solicitacao));
            }
            Err(err) => self.erro.set(Some(err)),
        }
    }

    pub fn fechar_dialogo(&self) {
        self.selecionada.set(None);
        self.bilhete.set(String::new());
    }

    pub fn confirmar(&self) {
        if self.processar_action.pending().get_untracked() {
            return;
        }
        let Some(solicitacao) = self.selecionada.get_untracked() else {
            return;
        };
        let Some(papel) = self.papel() else {
            self.erro
                .set(Some(ApiError::validation("Sessão expirada. Entre novamente.")));
            return;
        };
        match validar_processamento(&self.bilhete.get_untracked(), papel) {
            Ok(payload) => {
                self.erro.set(None);
                self.processar_action.dispatch(PedidoProcessamento {
                    id: solicitacao.id,
                    payload,
                });
            }
            Err(err) => self.erro.set(Some(err)),
        }
    }

    pub fn aguardando(&self) -> Signal<Vec<Solicitacao>> {
        let painel_resource = self.painel_resource;
        Signal::derive(move || {
            painel_resource
                .get()
                .and_then(|resultado| resultado.ok())
                .map(|painel| painel.aguardando)
                .unwrap_or_default()
        })
    }

    pub fn finalizadas(&self) -> Signal<Vec<Solicitacao>> {
        let painel_resource = self.painel_resource;
        Signal::derive(move || {
            painel_resource
                .get()
                .and_then(|resultado| resultado.ok())
                .map(|painel| painel.finalizadas)
                .unwrap_or_default()
        })
    }
}

pub fn use_compras_view_model() -> ComprasViewModel {
    match use_context::<ComprasViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = ComprasViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{prover_auth, solicitacao_com, usuario};
    use crate::test_support::ssr::{wait_until, with_local_runtime_async, with_runtime};
    use crate::workflow::StatusSolicitacao;
    use httpmock::prelude::*;
    use serde_json::json;

    fn aguardando_compra() -> Solicitacao {
        solicitacao_com(
            "s1",
            "João Silva",
            "São Paulo",
            "Recife",
            StatusSolicitacao::PendenteCompras,
            Some(1800.0),
        )
    }

    #[test]
    fn non_purchasing_roles_are_blocked_before_the_dialog() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            prover_auth(Some(usuario(Papel::Gerente)));
            let vm = ComprasViewModel::new();

            vm.abrir_dialogo(aguardando_compra());

            assert!(vm.selecionada.get().is_none());
            assert_eq!(vm.erro.get().unwrap().code, "PAPEL_NAO_AUTORIZADO");
            assert!(vm.processar_action.value().get().is_none());
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn empty_ticket_blocks_processing_locally() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            prover_auth(Some(usuario(Papel::Compras)));
            let vm = ComprasViewModel::new();

            vm.abrir_dialogo(aguardando_compra());
            assert!(vm.selecionada.get().is_some());

            vm.confirmar();
            assert_eq!(vm.erro.get().unwrap().code, "VALIDATION_ERROR");
            assert!(vm.processar_action.value().get().is_none());
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn processing_posts_the_ticket_and_resets_the_dialog() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            leptos_reactive::suppress_resource_load(true);
            let server = MockServer::start_async().await;
            let mock = server
                .mock_async(|when, then| {
                    when.method(POST)
                        .path("/api/solicitacoes/s1/processar-compras")
                        .json_body(json!({ "processado": true, "observacoes": "LA-123456" }));
                    then.status(200).json_body(json!({ "status": "processada" }));
                })
                .await;

            prover_auth(Some(usuario(Papel::Compras)));
            provide_context(ApiClient::new_with_base_url(server.base_url()));
            let vm = ComprasViewModel::new();

            vm.abrir_dialogo(aguardando_compra());
            vm.bilhete.set("LA-123456".to_string());
            vm.confirmar();

            assert!(
                wait_until(|| vm.processar_action.value().get_untracked().is_some()).await,
                "processamento deveria terminar"
            );
            assert!(matches!(
                vm.processar_action.value().get_untracked(),
                Some(Ok(()))
            ));
            mock.assert_async().await;

            aplicar_resultado_processamento(
                vm.processar_action.value().get_untracked(),
                vm.erro,
                vm.sucesso,
                vm.selecionada,
                vm.bilhete,
                vm.reload,
            );
            assert!(vm.selecionada.get_untracked().is_none());
            assert_eq!(
                vm.sucesso.get_untracked().as_deref(),
                Some("Compra processada.")
            );
            assert_eq!(vm.reload.get_untracked(), 1);

            leptos_reactive::suppress_resource_load(false);
            runtime.dispose();
        });
    }
}
