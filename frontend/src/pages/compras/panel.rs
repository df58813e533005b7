use crate::api::Solicitacao;
use crate::components::{
    decision_dialog::DialogoDecisao,
    empty_state::EstadoVazio,
    error::{MensagemErro, MensagemSucesso},
    layout::MolduraPagina,
};
use crate::pages::compras::view_model::{use_compras_view_model, ComprasViewModel};
use crate::utils::format::{formatar_data, formatar_preco};
use crate::workflow::valor_estimado;
use leptos::*;

fn cartao_compra(vm: ComprasViewModel, solicitacao: Solicitacao, pendente: bool) -> View {
    let preco = formatar_preco(valor_estimado(&solicitacao), "BRL");
    let rota = format!("{} → {}", solicitacao.origem, solicitacao.destino);
    let data = formatar_data(solicitacao.data_ida);
    let email = solicitacao
        .solicitante_email
        .clone()
        .unwrap_or_else(|| "sem email".to_string());
    let bilhete = solicitacao
        .processamento_compras
        .as_ref()
        .and_then(|processamento| processamento.bilhete.clone())
        .or_else(|| {
            solicitacao
                .processamento_compras
                .as_ref()
                .and_then(|processamento| processamento.observacoes.clone())
        });
    let acao = pendente.then(|| {
        let solicitacao = solicitacao.clone();
        view! {
            <div class="compra-card-actions">
                <button class="btn btn-primary" on:click=move |_| vm.abrir_dialogo(solicitacao.clone())>
                    "Processar Compra"
                </button>
            </div>
        }
    });
    let selo = if pendente {
        view! { <span class="status-badge-pending">"Pendente"</span> }
    } else {
        view! { <span class="status-badge-finished">"Comprada"</span> }
    };

    view! {
        <div class="compra-card">
            <div class="compra-card-header">
                <div class="compra-user-info">
                    <div class="compra-user-name">{solicitacao.solicitante_nome.clone()}</div>
                    <div class="compra-user-email">{email}</div>
                </div>
                {selo}
            </div>
            <div class="compra-card-body">
                <div class="compra-info-row">
                    <span class="info-label">"Rota:"</span>
                    <span class="info-value">{rota}</span>
                </div>
                <div class="compra-info-row">
                    <span class="info-label">"Data:"</span>
                    <span class="info-value">{data}</span>
                </div>
                <div class="compra-info-row">
                    <span class="info-label">"Valor Estimado:"</span>
                    <span class="info-value price-value">{preco}</span>
                </div>
                {bilhete.map(|numero| {
                    view! {
                        <div class="compra-info-row ticket-row">
                            <span class="info-label">"Bilhete:"</span>
                            <span class="info-value ticket-value">{numero}</span>
                        </div>
                    }
                })}
            </div>
            {acao}
        </div>
    }
    .into_view()
}

#[component]
pub fn ComprasPanel() -> impl IntoView {
    let vm = use_compras_view_model();
    let aguardando = vm.aguardando();
    let finalizadas = vm.finalizadas();
    let ocupado = vm.processar_action.pending();

    let titulo_dialogo = Signal::derive(move || {
        vm.selecionada
            .get()
            .map(|solicitacao| {
                format!(
                    "Processar Compra - {} → {}",
                    solicitacao.origem, solicitacao.destino
                )
            })
            .unwrap_or_default()
    });

    let secao_aguardando = move || {
        let solicitacoes = aguardando.get();
        if solicitacoes.is_empty() {
            return view! { <EstadoVazio titulo="Nenhuma solicitação aguardando compra"/> }
                .into_view();
        }
        solicitacoes
            .into_iter()
            .map(|solicitacao| cartao_compra(vm, solicitacao, true))
            .collect_view()
    };

    let secao_finalizadas = move || {
        let solicitacoes = finalizadas.get();
        if solicitacoes.is_empty() {
            return view! { <EstadoVazio titulo="Nenhuma compra finalizada"/> }.into_view();
        }
        solicitacoes
            .into_iter()
            .map(|solicitacao| cartao_compra(vm, solicitacao, false))
            .collect_view()
    };

    view! {
        <MolduraPagina titulo="Compras" subtitulo="Gerencie as compras de passagens">
            <MensagemErro error=vm.erro.into()/>
            <MensagemSucesso mensagem=vm.sucesso.into()/>

            <div class="compras-section">
                <h2 class="section-title">
                    {move || format!("Aguardando Compra ({})", aguardando.get().len())}
                </h2>
                <div class="compras-cards-grid">{secao_aguardando}</div>
            </div>

            <div class="compras-section">
                <h2 class="section-title">
                    {move || format!("Compras Finalizadas ({})", finalizadas.get().len())}
                </h2>
                <div class="compras-cards-grid">{secao_finalizadas}</div>
            </div>

            <DialogoDecisao
                aberto=Signal::derive(move || vm.selecionada.get().is_some())
                titulo=titulo_dialogo
                rotulo_campo="Número do Bilhete"
                placeholder="Informe o número do bilhete..."
                valor=vm.bilhete
                ocupado=ocupado.into()
                confirmar_rotulo="Confirmar Processamento"
                on_confirmar=Callback::new(move |_| vm.confirmar())
                on_cancelar=Callback::new(move |_| vm.fechar_dialogo())
            />
        </MolduraPagina>
    }
}
