use crate::api::{ApiClient, ApiError, Solicitacao};
use crate::pages::aprovacoes::{
    repository::{self, PendentesAprovacao},
    utils::{pode_abrir_dialogo, validar_decisao, EtapaAprovacao},
};
use crate::state::auth::{use_auth, AuthState};
use crate::workflow::Papel;
use leptos::*;

#[derive(Clone)]
pub struct PedidoDecisao {
    pub id: String,
    pub etapa: EtapaAprovacao,
    pub decisao: crate::api::DecisaoAprovacao,
}

#[derive(Clone, Copy)]
pub struct AprovacoesViewModel {
    pub aba: RwSignal<EtapaAprovacao>,
    pub pendentes_resource: Resource<u32, Result<PendentesAprovacao, ApiError>>,
    pub selecionada: RwSignal<Option<Solicitacao>>,
    pub motivo: RwSignal<String>,
    pub erro: RwSignal<Option<ApiError>>,
    pub sucesso: RwSignal<Option<String>>,
    pub decidir_action: Action<PedidoDecisao, Result<(), ApiError>>,
    auth: ReadSignal<AuthState>,
    reload: RwSignal<u32>,
}

pub(crate) fn aplicar_resultado_decisao(
    result: Option<Result<(), ApiError>>,
    erro: RwSignal<Option<ApiError>>,
    sucesso: RwSignal<Option<String>>,
    selecionada: RwSignal<Option<Solicitacao>>,
    motivo: RwSignal<String>,
    reload: RwSignal<u32>,
) {
    if let Some(result) = result {
        match result {
            Ok(()) => {
                sucesso.set(Some("Decisão registrada.".to_string()));
                erro.set(None);
                selecionada.set(None);
                motivo.set(String::new());
                reload.update(|valor| *valor = valor.wrapping_add(1));
            }
            Err(err) => erro.set(Some(err)),
        }
    }
}

impl AprovacoesViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let (auth, _) = use_auth();
        let aba = create_rw_signal(EtapaAprovacao::Gerente);
        let selecionada = create_rw_signal(None::<Solicitacao>);
        let motivo = create_rw_signal(String::new());
        let erro = create_rw_signal(None::<ApiError>);
        let sucesso = create_rw_signal(None::<String>);
        let reload = create_rw_signal(0u32);

        let api_resource = api.clone();
        let pendentes_resource = create_resource(
            move || reload.get(),
            move |_| {
                let api = api_resource.clone();
                async move { repository::carregar_pendentes(&api).await }
            },
        );

        let decidir_action = create_action(move |pedido: &PedidoDecisao| {
            let api = api.clone();
            let pedido = pedido.clone();
            async move {
                repository::enviar_decisao(&api, pedido.etapa, &pedido.id, &pedido.decisao).await
            }
        });

        create_effect(move |_| {
            aplicar_resultado_decisao(
                decidir_action.value().get(),
                erro,
                sucesso,
                selecionada,
                motivo,
                reload,
            );
        });

        Self {
            aba,
            pendentes_resource,
            selecionada,
            motivo,
            erro,
            sucesso,
            decidir_action,
            auth,
            reload,
        }
    }

    fn papel(&self) -> Option<Papel> {
        self.auth.get_untracked().usuario.map(|usuario| usuario.role)
    }

    /// Barrado aqui, o clique nem abre o diálogo e nada vai à rede.
    pub fn abrir_dialogo(&self, solicitacao: Solicitacao) {
        self.sucesso.set(None);
        match pode_abrir_dialogo(self.aba.get_untracked(), self.papel()) {
            Ok(()) => {
                self.erro.set(None);
                self.motivo.set(String::new());
                self.selecionada.set(Some(solicitacao));
            }
            Err(err) => self.erro.set(Some(err)),
        }
    }

    pub fn fechar_dialogo(&self) {
        self.selecionada.set(None);
        self.motivo.set(String::new());
    }

    pub fn confirmar(&self, aprovado: bool) {
        if self.decidir_action.pending().get_untracked() {
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
        let etapa = self.aba.get_untracked();
        match validar_decisao(etapa, aprovado, &self.motivo.get_untracked(), papel) {
            Ok(decisao) => {
                self.erro.set(None);
                self.decidir_action.dispatch(PedidoDecisao {
                    id: solicitacao.id,
                    etapa,
                    decisao,
                });
            }
            Err(err) => self.erro.set(Some(err)),
        }
    }

    pub fn pendentes_da_aba(&self) -> Signal<Vec<Solicitacao>> {
        let pendentes_resource = self.pendentes_resource;
        let aba = self.aba;
        Signal::derive(move || {
            let pendentes = pendentes_resource
                .get()
                .and_then(|resultado| resultado.ok())
                .unwrap_or_default();
            match aba.get() {
                EtapaAprovacao::Gerente => pendentes.gerente,
                EtapaAprovacao::Diretor => pendentes.diretor,
            }
        })
    }

    pub fn contagem(&self, etapa: EtapaAprovacao) -> Signal<usize> {
        let pendentes_resource = self.pendentes_resource;
        Signal::derive(move || {
            let pendentes = pendentes_resource
                .get()
                .and_then(|resultado| resultado.ok())
                .unwrap_or_default();
            match etapa {
                EtapaAprovacao::Gerente => pendentes.gerente.len(),
                EtapaAprovacao::Diretor => pendentes.diretor.len(),
            }
        })
    }
}

pub fn use_aprovacoes_view_model() -> AprovacoesViewModel {
    match use_context::<AprovacoesViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AprovacoesViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
