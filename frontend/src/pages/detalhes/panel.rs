use crate::api::{Aprovacao, Solicitacao, Voo};
use crate::components::layout::{IndicadorCarregando, MolduraPagina};
use crate::pages::detalhes::{
    utils::{descrever_segmento, rotulo_escalas},
    view_model::DetalhesViewModel,
};
use crate::utils::format::{formatar_data, formatar_data_hora, formatar_momento, formatar_preco};
use leptos::*;
use leptos_router::use_params_map;

fn caixa_aprovacao(titulo: &'static str, aprovacao: &Aprovacao) -> View {
    let classe = if aprovacao.aprovado {
        "aprovacao-box aprovado"
    } else {
        "aprovacao-box rejeitado"
    };
    let status = if aprovacao.aprovado {
        "✓ Aprovado"
    } else {
        "✗ Rejeitado"
    };
    view! {
        <div class="aprovacao-section">
            <h3>{titulo}</h3>
            <div class=classe>
                <div class="aprovacao-status">{status}</div>
                <div class="aprovacao-motivo">{aprovacao.motivo.clone()}</div>
                <div class="aprovacao-data">{formatar_data_hora(&aprovacao.data)}</div>
            </div>
        </div>
    }
    .into_view()
}

fn secao_voo(voo: &Voo) -> View {
    let preco = formatar_preco(voo.preco, &voo.moeda);
    let rota = format!("{} → {}", voo.origem, voo.destino);
    let partida = format!("Partida: {}", formatar_momento(&voo.data_ida));
    let chegada = voo
        .chegada_ida()
        .map(|data| format!("Chegada: {}", formatar_momento(&data)));
    let escalas = rotulo_escalas(voo.escalas_ida);
    let segmentos_ida = voo
        .segmentos_ida()
        .iter()
        .map(|segmento| view! { <li class="segmento-item">{descrever_segmento(segmento)}</li> })
        .collect_view();
    let volta = voo.data_volta.map(|data| {
        let partida_volta = format!("Volta: {}", formatar_momento(&data));
        let chegada_volta = voo
            .chegada_volta()
            .map(|chegada| format!("Chegada: {}", formatar_momento(&chegada)));
        let escalas_volta = voo
            .escalas_volta
            .map(rotulo_escalas)
            .unwrap_or_else(|| "escalas não informadas".to_string());
        let segmentos_volta = voo
            .segmentos_volta()
            .iter()
            .map(|segmento| view! { <li class="segmento-item">{descrever_segmento(segmento)}</li> })
            .collect_view();
        view! {
            <div class="voo-trecho volta">
                <div class="voo-info-row">
                    <span>{partida_volta}</span>
                    {chegada_volta.map(|texto| view! { <span>{texto}</span> })}
                    <span>{escalas_volta}</span>
                </div>
                <ul class="segmentos-lista">{segmentos_volta}</ul>
            </div>
        }
    });

    view! {
        <div class="card voo-escolhido-card">
            <h3>"Voo Escolhido"</h3>
            <div class="voo-info-row">
                <strong>{voo.companhia.clone()}</strong>
                <span class="voo-preco">{preco}</span>
            </div>
            <div class="voo-trecho">
                <div class="voo-info-row">
                    <span>{rota}</span>
                    <span>{partida}</span>
                    {chegada.map(|texto| view! { <span>{texto}</span> })}
                    <span>{escalas}</span>
                </div>
                <ul class="segmentos-lista">{segmentos_ida}</ul>
            </div>
            {volta}
        </div>
    }
    .into_view()
}

fn secao_detalhes(solicitacao: &Solicitacao) -> View {
    let rota = format!("{} → {}", solicitacao.origem, solicitacao.destino);
    let ida = formatar_data(solicitacao.data_ida);
    let volta = solicitacao
        .data_volta
        .map(formatar_data)
        .unwrap_or_else(|| "—".to_string());
    let email = solicitacao
        .solicitante_email
        .clone()
        .unwrap_or_else(|| "sem email".to_string());

    let historico = (!solicitacao.historico.is_empty()).then(|| {
        let itens = solicitacao
            .historico
            .iter()
            .map(|entrada| {
                view! {
                    <div class="historico-item">
                        <div class="historico-acao">{entrada.acao.clone()}</div>
                        {entrada
                            .motivo
                            .clone()
                            .map(|motivo| view! { <div class="historico-motivo">{motivo}</div> })}
                        <div class="historico-data">{formatar_data_hora(&entrada.data)}</div>
                    </div>
                }
            })
            .collect_view();
        view! {
            <div class="historico-section">
                <h3>"Histórico"</h3>
                <div class="historico-list">{itens}</div>
            </div>
        }
    });

    view! {
        <div class="card">
            <div class="detalhes-header">
                <div>
                    <div class="detalhes-solicitante">{solicitacao.solicitante_nome.clone()}</div>
                    <div class="detalhes-email">{email}</div>
                </div>
                <span class=format!("status-badge status-{}", solicitacao.status.chave())>
                    {solicitacao.status.rotulo()}
                </span>
            </div>
            <div class="detalhes-info">
                <div class="info-row">
                    <span class="info-label">"Rota:"</span>
                    <span class="info-value">{rota}</span>
                </div>
                <div class="info-row">
                    <span class="info-label">"Ida:"</span>
                    <span class="info-value">{ida}</span>
                </div>
                <div class="info-row">
                    <span class="info-label">"Volta:"</span>
                    <span class="info-value">{volta}</span>
                </div>
                <div class="info-row">
                    <span class="info-label">"Justificativa:"</span>
                    <span class="info-value">{solicitacao.justificativa.clone()}</span>
                </div>
            </div>

            {solicitacao.voo_escolhido.as_ref().map(secao_voo)}

            {solicitacao
                .aprovacao_gerente
                .as_ref()
                .map(|aprovacao| caixa_aprovacao("Aprovação do Gerente", aprovacao))}
            {solicitacao
                .aprovacao_diretor
                .as_ref()
                .map(|aprovacao| caixa_aprovacao("Aprovação do Diretor", aprovacao))}

            {solicitacao.processamento_compras.as_ref().map(|processamento| {
                let bilhete = processamento
                    .bilhete
                    .clone()
                    .or_else(|| processamento.observacoes.clone());
                view! {
                    <div class="aprovacao-section">
                        <h3>"Processamento de Compras"</h3>
                        <div class="aprovacao-box aprovado">
                            <div class="aprovacao-status">"✓ Processado"</div>
                            {bilhete.map(|numero| view! { <div class="aprovacao-motivo">{numero}</div> })}
                            <div class="aprovacao-data">{formatar_data_hora(&processamento.data)}</div>
                        </div>
                    </div>
                }
            })}

            {historico}

            <div class="form-actions">
                <a href="/dashboard" class="btn btn-secondary">
                    "Voltar"
                </a>
            </div>
        </div>
    }
    .into_view()
}

#[component]
pub fn DetalhesPanel() -> impl IntoView {
    let params = use_params_map();
    let id = Signal::derive(move || {
        params.with(|params| params.get("id").cloned().unwrap_or_default())
    });
    let vm = DetalhesViewModel::new(id);
    let solicitacao_resource = vm.solicitacao_resource;

    let conteudo = move || match solicitacao_resource.get() {
        None => view! { <IndicadorCarregando/> }.into_view(),
        Some(Err(err)) => view! { <div class="error-message">{err.message}</div> }.into_view(),
        Some(Ok(solicitacao)) => secao_detalhes(&solicitacao),
    };

    view! {
        <MolduraPagina titulo="Detalhes da Solicitação">
            {conteudo}
        </MolduraPagina>
    }
}
