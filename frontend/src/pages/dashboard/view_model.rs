use crate::api::{ApiClient, ApiError, Estatisticas, Solicitacao};
use crate::pages::dashboard::{
    repository::{self, DadosPainel},
    utils::parse_filtro_status,
};
use crate::workflow::{resumo, ResumoEtapas};
use leptos::*;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub dados_resource: Resource<u32, Result<DadosPainel, ApiError>>,
    pub busca: RwSignal<String>,
    pub filtro_status: RwSignal<String>,
    reload: RwSignal<u32>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let reload = create_rw_signal(0u32);
        let dados_resource = create_resource(
            move || reload.get(),
            move |_| {
                let api = api.clone();
                async move { repository::carregar_painel(&api).await }
            },
        );

        Self {
            dados_resource,
            busca: create_rw_signal(String::new()),
            filtro_status: create_rw_signal(super::utils::FILTRO_TODAS.to_string()),
            reload,
        }
    }

    pub fn recarregar(&self) {
        self.reload.update(|valor| *valor = valor.wrapping_add(1));
    }

    pub fn solicitacoes(&self) -> Signal<Vec<Solicitacao>> {
        let dados_resource = self.dados_resource;
        Signal::derive(move || {
            dados_resource
                .get()
                .and_then(|resultado| resultado.ok())
                .map(|dados| dados.solicitacoes)
                .unwrap_or_default()
        })
    }

    pub fn estatisticas(&self) -> Signal<Option<Estatisticas>> {
        let dados_resource = self.dados_resource;
        Signal::derive(move || {
            dados_resource
                .get()
                .and_then(|resultado| resultado.ok())
                .map(|dados| dados.estatisticas)
        })
    }

    /// Lista após o filtro de status e a busca textual, recalculada a cada
    /// mudança da coleção ou dos filtros.
    pub fn filtradas(&self) -> Signal<Vec<Solicitacao>> {
        let todas = self.solicitacoes();
        let busca = self.busca;
        let filtro_status = self.filtro_status;
        Signal::derive(move || {
            let status = parse_filtro_status(&filtro_status.get());
            let busca = busca.get();
            todas.with(|solicitacoes| {
                resumo::filtrar(solicitacoes, status, &busca)
                    .into_iter()
                    .cloned()
                    .collect()
            })
        })
    }

    /// Classificação por etapa recomputada da coleção carregada.
    pub fn resumo(&self) -> Signal<ResumoEtapas> {
        let todas = self.solicitacoes();
        Signal::derive(move || todas.with(|solicitacoes| resumo::resumir(solicitacoes)))
    }

    pub fn valor_total(&self) -> Signal<f64> {
        let todas = self.solicitacoes();
        Signal::derive(move || todas.with(|solicitacoes| resumo::valor_total(solicitacoes)))
    }

    pub fn total_carregadas(&self) -> Signal<usize> {
        let todas = self.solicitacoes();
        Signal::derive(move || todas.with(|solicitacoes| solicitacoes.len()))
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
