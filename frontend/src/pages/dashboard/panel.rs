use crate::components::{
    cards::{CartaoEstatistica, CartaoValorTotal},
    empty_state::EstadoVazio,
    layout::MolduraPagina,
};
use crate::pages::dashboard::{utils, view_model::use_dashboard_view_model};
use crate::utils::format::{formatar_data, formatar_preco};
use leptos::*;

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let estatisticas = vm.estatisticas();
    let filtradas = vm.filtradas();
    let valor_total = vm.valor_total();
    let total_carregadas = vm.total_carregadas();

    let cartoes = move || {
        estatisticas.get().map(|stats| {
            view! {
                <div class="stats-grid">
                    <CartaoEstatistica
                        icone="⏱"
                        valor=Signal::derive(move || stats.pendentes().to_string())
                        rotulo="Pendentes"
                    />
                    <CartaoEstatistica
                        icone="✓"
                        valor=Signal::derive(move || stats.aprovadas.to_string())
                        rotulo="Aprovadas"
                    />
                    <CartaoEstatistica
                        icone="✗"
                        valor=Signal::derive(move || stats.rejeitadas.to_string())
                        rotulo="Rejeitadas"
                    />
                    <CartaoEstatistica
                        icone="🛒"
                        valor=Signal::derive(move || stats.pendente_compras.to_string())
                        rotulo="Em Compra"
                    />
                </div>
            }
        })
    };

    let resumo = vm.resumo();
    let distribuicao = move || {
        let fatias = utils::distribuicao(&resumo.get());
        if fatias.is_empty() {
            ().into_view()
        } else {
            view! {
                <div class="card">
                    <h2 class="card-title">"Distribuição por Status"</h2>
                    <ul class="status-distribution">
                        {fatias
                            .into_iter()
                            .map(|fatia| {
                                view! {
                                    <li class=format!("status-slice status-{}", fatia.status.chave())>
                                        <span>{fatia.status.rotulo()}</span>
                                        <span>{format!("{} ({}%)", fatia.quantidade, fatia.percentual)}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            }
            .into_view()
        }
    };

    let lista = move || {
        let solicitacoes = filtradas.get();
        if solicitacoes.is_empty() {
            return view! { <EstadoVazio titulo="Nenhuma solicitação encontrada."/> }.into_view();
        }
        solicitacoes
            .into_iter()
            .map(|solicitacao| {
                let destino = format!("/solicitacao/{}", solicitacao.id);
                view! {
                    <a href=destino class=format!("solicitacao-item {}", solicitacao.status.chave())>
                        <div class="solicitacao-header">
                            <div class="solicitacao-user-name">{solicitacao.solicitante_nome.clone()}</div>
                            <div class="solicitacao-rota">
                                {format!("{} → {}", solicitacao.origem, solicitacao.destino)}
                            </div>
                            <div class="solicitacao-datas">{formatar_data(solicitacao.data_ida)}</div>
                            <span class=format!("status-badge status-{}", solicitacao.status.chave())>
                                {solicitacao.status.rotulo()}
                            </span>
                        </div>
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <MolduraPagina titulo="Dashboard" subtitulo="Visão geral das solicitações de passagens">
            <div class="page-actions">
                <a href="/nova-solicitacao" class="btn btn-primary">
                    "+ Nova Solicitação"
                </a>
            </div>

            {cartoes}

            <div class="content-grid">
                <div class="content-main">
                    <div class="card">
                        <h2 class="card-title">"Solicitações Recentes"</h2>
                        <div class="filters">
                            <input
                                type="text"
                                class="form-input"
                                placeholder="Buscar por origem, destino ou solicitante..."
                                prop:value=move || vm.busca.get()
                                on:input=move |ev| vm.busca.set(event_target_value(&ev))
                            />
                            <select
                                class="form-select"
                                on:change=move |ev| vm.filtro_status.set(event_target_value(&ev))
                            >
                                <option value="todas">"Todas"</option>
                                <option value="pendente_gerente">"Pendente Gerente"</option>
                                <option value="pendente_diretor">"Pendente Diretor"</option>
                                <option value="pendente_compras">"Pendente Compras"</option>
                                <option value="processada">"Processadas"</option>
                                <option value="rejeitada">"Rejeitadas"</option>
                            </select>
                        </div>
                        <div class="solicitacoes-list">{lista}</div>
                    </div>
                </div>
                <div class="content-sidebar">
                    {distribuicao}
                    <CartaoValorTotal
                        valor=Signal::derive(move || formatar_preco(valor_total.get(), "BRL"))
                        subtitulo=Signal::derive(move || {
                            let total = total_carregadas.get();
                            let plural = if total == 1 { "solicitação" } else { "solicitações" };
                            format!("Base em {total} {plural}")
                        })
                    />
                </div>
            </div>
        </MolduraPagina>
    }
}
