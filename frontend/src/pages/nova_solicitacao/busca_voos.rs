use std::collections::HashMap;

use leptos::*;

use crate::api::{ApiClient, ApiError, ParametrosBuscaVoo, PrecoConfirmado, Voo};
use crate::components::error::MensagemErro;
use crate::pages::nova_solicitacao::{
    cotacao::{self, EtiquetaPreco},
    utils::{parse_data, FormularioSolicitacao},
};
use crate::utils::format::{formatar_hora, formatar_momento, formatar_preco};

#[derive(Clone, Copy)]
pub struct BuscaVoosState {
    pub voos: RwSignal<Vec<Voo>>,
    pub mostrar_resultados: RwSignal<bool>,
    pub erro: RwSignal<Option<ApiError>>,
    pub confirmando: RwSignal<bool>,
    pub precos_confirmados: RwSignal<HashMap<String, PrecoConfirmado>>,
    pub buscar_action: Action<ParametrosBuscaVoo, Result<(), ApiError>>,
}

impl BuscaVoosState {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let voos = create_rw_signal(Vec::<Voo>::new());
        let mostrar_resultados = create_rw_signal(false);
        let erro = create_rw_signal(None::<ApiError>);
        let confirmando = create_rw_signal(false);
        let precos_confirmados = create_rw_signal(HashMap::<String, PrecoConfirmado>::new());

        let buscar_action = create_action(move |parametros: &ParametrosBuscaVoo| {
            let api = api.clone();
            let parametros = parametros.clone();
            async move {
                erro.set(None);
                mostrar_resultados.set(false);
                precos_confirmados.set(HashMap::new());

                let resultados = match api.buscar_voos(&parametros).await {
                    Ok(resultados) => resultados,
                    Err(err) => {
                        voos.set(Vec::new());
                        erro.set(Some(err.clone()));
                        return Err(err);
                    }
                };

                voos.set(resultados.clone());
                mostrar_resultados.set(true);

                if resultados.is_empty() {
                    erro.set(Some(ApiError::unknown(
                        "Nenhum voo encontrado para os critérios informados",
                    )));
                    return Ok(());
                }

                // Confirmação sequencial logo após a busca; falhas ficam
                // registradas como preço estimado.
                confirmando.set(true);
                let confirmados = cotacao::confirmar_precos(&api, &resultados).await;
                precos_confirmados.set(confirmados);
                confirmando.set(false);
                Ok(())
            }
        });

        Self {
            voos,
            mostrar_resultados,
            erro,
            confirmando,
            precos_confirmados,
            buscar_action,
        }
    }

    /// Critérios mínimos antes de emitir a busca.
    pub fn montar_parametros(
        origem: &str,
        destino: &str,
        data_ida: &str,
        data_volta: &str,
    ) -> Result<ParametrosBuscaVoo, ApiError> {
        if origem.trim().is_empty() || destino.trim().is_empty() || data_ida.trim().is_empty() {
            return Err(ApiError::validation(
                "Preencha origem, destino e data de ida para buscar voos",
            ));
        }
        let data_ida = parse_data(data_ida)
            .ok_or_else(|| ApiError::validation("Informe uma data de ida válida."))?;
        let data_volta = if data_volta.trim().is_empty() {
            None
        } else {
            Some(
                parse_data(data_volta)
                    .ok_or_else(|| ApiError::validation("Data de volta inválida."))?,
            )
        };
        Ok(ParametrosBuscaVoo {
            origem: origem.trim().to_string(),
            destino: destino.trim().to_string(),
            data_ida,
            data_volta,
        })
    }

    pub fn buscar(&self, form: &FormularioSolicitacao) {
        if self.buscar_action.pending().get_untracked() {
            return;
        }
        match Self::montar_parametros(
            &form.origem.get_untracked(),
            &form.destino.get_untracked(),
            &form.data_ida.get_untracked(),
            &form.data_volta.get_untracked(),
        ) {
            Ok(parametros) => self.buscar_action.dispatch(parametros),
            Err(err) => self.erro.set(Some(err)),
        }
    }
}

pub fn use_busca_voos_state() -> BuscaVoosState {
    match use_context::<BuscaVoosState>() {
        Some(state) => state,
        None => {
            let state = BuscaVoosState::new();
            provide_context(state);
            state
        }
    }
}

#[component]
fn CartaoVooSelecionado(
    voo_selecionado: RwSignal<Option<Voo>>,
) -> impl IntoView {
    move || {
        voo_selecionado.get().map(|voo| {
            let preco = formatar_preco(voo.preco, &voo.moeda);
            let rota = format!("{} → {}", voo.origem, voo.destino);
            let partida = format!("Partida: {}", formatar_momento(&voo.data_ida));
            let escalas = if voo.escalas_ida == 0 {
                "Voo direto".to_string()
            } else {
                format!("{} escala(s)", voo.escalas_ida)
            };
            let volta = voo
                .data_volta
                .map(|data| format!("Volta: {}", formatar_momento(&data)));
            view! {
                <div class="voo-selecionado-card">
                    <div class="voo-selecionado-header">
                        <span class="voo-selecionado-badge">"✓ Voo Selecionado"</span>
                        <button
                            type="button"
                            class="btn-remover-voo"
                            on:click=move |_| voo_selecionado.set(None)
                        >
                            "✕ Remover"
                        </button>
                    </div>
                    <div class="voo-selecionado-info">
                        <div class="voo-info-row">
                            <strong>{voo.companhia.clone()}</strong>
                            <span class="voo-preco">{preco}</span>
                        </div>
                        <div class="voo-info-row">
                            <span>{rota}</span>
                            <span>{voo.duracao_ida.clone().unwrap_or_default()}</span>
                        </div>
                        <div class="voo-info-row">
                            <span>{partida}</span>
                            <span>{escalas}</span>
                        </div>
                        {volta.map(|texto| view! { <div class="voo-info-row"><span>{texto}</span></div> })}
                    </div>
                </div>
            }
        })
    }
}

/// Busca embutida no formulário de nova solicitação: pesquisa ofertas,
/// confirma preços e deixa o solicitante escolher um voo.
#[component]
pub fn BuscaVoos(
    form: FormularioSolicitacao,
    voo_selecionado: RwSignal<Option<Voo>>,
) -> impl IntoView {
    let state = use_busca_voos_state();
    let buscando = state.buscar_action.pending();

    let on_buscar = move |_| state.buscar(&form);

    let resultados = move || {
        if !state.mostrar_resultados.get() {
            return ().into_view();
        }
        let voos = state.voos.get();
        if voos.is_empty() {
            return ().into_view();
        }
        let confirmados = state.precos_confirmados.get();
        let confirmando = state.confirmando.get();
        let cabecalho = format!("Voos Disponíveis ({})", voos.len());
        let cartoes = voos
            .into_iter()
            .map(|voo| {
                let exibido = cotacao::preco_exibido(&voo, &confirmados);
                let etiqueta = if confirmando && exibido.etiqueta == EtiquetaPreco::Estimado {
                    "Confirmando...".to_string()
                } else {
                    exibido.etiqueta.rotulo().to_string()
                };
                let classe_etiqueta = match exibido.etiqueta {
                    EtiquetaPreco::Confirmado => "voo-preco-badge confirmado",
                    EtiquetaPreco::Estimado => "voo-preco-badge estimado",
                };
                let preco = formatar_preco(exibido.valor, &exibido.moeda);
                let saida = formatar_hora(&voo.data_ida);
                let chegada = voo
                    .chegada_ida()
                    .map(|data| formatar_hora(&data))
                    .unwrap_or_else(|| "--:--".to_string());
                let aeroporto_saida = voo
                    .primeiro_segmento_ida()
                    .map(|segmento| segmento.origem.clone())
                    .unwrap_or_else(|| voo.origem.clone());
                let aeroporto_chegada = voo
                    .ultimo_segmento_ida()
                    .map(|segmento| segmento.destino.clone())
                    .unwrap_or_else(|| voo.destino.clone());
                let escalas = if voo.escalas_ida == 0 {
                    "Direto".to_string()
                } else {
                    format!("{} escala(s)", voo.escalas_ida)
                };
                let selecionado = {
                    let id = voo.id.clone();
                    move || {
                        voo_selecionado
                            .get()
                            .map(|atual| atual.id == id)
                            .unwrap_or(false)
                    }
                };
                let rotulo_selecionar = {
                    let marcado = selecionado.clone();
                    move || {
                        if marcado() {
                            "✓ Selecionado"
                        } else {
                            "Selecionar Voo"
                        }
                    }
                };
                let escolher = {
                    let voo = voo.clone();
                    move |_| {
                        voo_selecionado.set(Some(voo.clone()));
                        state.mostrar_resultados.set(false);
                    }
                };
                view! {
                    <div class="voo-card">
                        <div class="voo-card-header">
                            <span class="voo-companhia">{voo.companhia.clone()}</span>
                            <div class="voo-preco-container">
                                <span class="voo-preco-card">{preco}</span>
                                <span class=classe_etiqueta>{etiqueta}</span>
                            </div>
                        </div>
                        <div class="voo-card-body">
                            <div class="voo-trecho">
                                <span class="voo-hora">{saida}</span>
                                <span class="voo-aeroporto">{aeroporto_saida}</span>
                                <span class="voo-duracao">{voo.duracao_ida.clone().unwrap_or_default()}</span>
                                <span class="voo-escalas-badge">{escalas}</span>
                                <span class="voo-hora">{chegada}</span>
                                <span class="voo-aeroporto">{aeroporto_chegada}</span>
                            </div>
                        </div>
                        <div class="voo-card-footer">
                            <button type="button" class="btn btn-primary" on:click=escolher>
                                {rotulo_selecionar}
                            </button>
                        </div>
                    </div>
                }
            })
            .collect_view();
        view! {
            <div class="voos-resultados">
                <div class="voos-resultados-header">
                    <h4>{cabecalho}</h4>
                    <button
                        type="button"
                        class="btn-fechar-resultados"
                        on:click=move |_| state.mostrar_resultados.set(false)
                    >
                        "✕"
                    </button>
                </div>
                <div class="voos-lista">{cartoes}</div>
            </div>
        }
        .into_view()
    };

    view! {
        <div class="busca-voos-container">
            <div class="busca-voos-header">
                <h3>"Buscar e Selecionar Voo"</h3>
                <button
                    type="button"
                    class="btn btn-primary btn-buscar"
                    disabled=move || buscando.get()
                    on:click=on_buscar
                >
                    {move || if buscando.get() { "Buscando..." } else { "🔍 Buscar Voos" }}
                </button>
            </div>

            <MensagemErro error=state.erro.into()/>
            <CartaoVooSelecionado voo_selecionado=voo_selecionado/>
            {resultados}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{wait_until, with_local_runtime_async, with_runtime};
    use httpmock::prelude::*;
    use serde_json::json;

    fn voo_json(i: usize) -> serde_json::Value {
        json!({
            "id": format!("OF{i}"),
            "companhia": "LATAM",
            "preco": 1000.0 + i as f64,
            "moeda": "BRL",
            "origem": "GRU",
            "destino": "REC",
            "dataIda": "2026-09-10T08:30:00",
            "duracaoIda": "PT3H15M",
            "escalasIda": 0,
            "_originalOffer": { "id": format!("OF{i}") }
        })
    }

    #[test]
    fn incomplete_criteria_never_reach_the_network() {
        with_runtime(|| {
            let state = BuscaVoosState::new();
            let form = FormularioSolicitacao::default();
            state.buscar(&form);
            assert!(state.buscar_action.value().get().is_none());
            let erro = state.erro.get().unwrap();
            assert_eq!(erro.code, "VALIDATION_ERROR");
        });
    }

    #[test]
    fn search_confirms_only_the_first_five_offers() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start_async().await;
            server
                .mock_async(|when, then| {
                    when.method(GET).path("/api/voos/buscar");
                    then.status(200)
                        .json_body(json!((1..=8).map(voo_json).collect::<Vec<_>>()));
                })
                .await;
            let confirmacao = server
                .mock_async(|when, then| {
                    when.method(POST).path("/api/voos/confirmar-preco");
                    then.status(200)
                        .json_body(json!({ "preco": 999.0, "moeda": "BRL" }));
                })
                .await;

            provide_context(ApiClient::new_with_base_url(server.base_url()));
            let state = BuscaVoosState::new();
            let form = FormularioSolicitacao::default();
            form.origem.set("GRU".to_string());
            form.destino.set("REC".to_string());
            form.data_ida.set("2026-09-10".to_string());

            state.buscar(&form);
            assert!(
                wait_until(|| state.buscar_action.value().get_untracked().is_some()).await,
                "busca deveria terminar"
            );

            assert_eq!(state.voos.get_untracked().len(), 8);
            assert!(state.mostrar_resultados.get_untracked());
            assert!(!state.confirmando.get_untracked());
            assert_eq!(confirmacao.hits_async().await, 5);

            let confirmados = state.precos_confirmados.get_untracked();
            assert_eq!(confirmados.len(), 5);
            let sexto = &state.voos.get_untracked()[5];
            let exibido = cotacao::preco_exibido(sexto, &confirmados);
            assert_eq!(exibido.etiqueta, EtiquetaPreco::Estimado);

            runtime.dispose();
        });
    }

    #[test]
    fn failed_search_clears_results_and_reports_the_error() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start_async().await;
            server
                .mock_async(|when, then| {
                    when.method(GET).path("/api/voos/buscar");
                    then.status(502)
                        .json_body(json!({ "message": "Erro ao buscar voos. Tente novamente." }));
                })
                .await;

            provide_context(ApiClient::new_with_base_url(server.base_url()));
            let state = BuscaVoosState::new();
            let form = FormularioSolicitacao::default();
            form.origem.set("GRU".to_string());
            form.destino.set("REC".to_string());
            form.data_ida.set("2026-09-10".to_string());

            state.buscar(&form);
            assert!(
                wait_until(|| state.buscar_action.value().get_untracked().is_some()).await,
                "busca deveria terminar"
            );

            assert!(state.voos.get_untracked().is_empty());
            let erro = state.erro.get_untracked().unwrap();
            assert_eq!(erro.message, "Erro ao buscar voos. Tente novamente.");

            runtime.dispose();
        });
    }
}
