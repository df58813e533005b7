use crate::components::{
    decision_dialog::DialogoDecisao,
    empty_state::EstadoVazio,
    error::{MensagemErro, MensagemSucesso},
    layout::MolduraPagina,
};
use crate::pages::aprovacoes::{utils::EtapaAprovacao, view_model::use_aprovacoes_view_model};
use crate::utils::format::{formatar_data, formatar_preco};
use crate::workflow::valor_estimado;
use leptos::*;

#[component]
pub fn AprovacoesPanel() -> impl IntoView {
    let vm = use_aprovacoes_view_model();
    let pendentes = vm.pendentes_da_aba();
    let contagem_gerente = vm.contagem(EtapaAprovacao::Gerente);
    let contagem_diretor = vm.contagem(EtapaAprovacao::Diretor);
    let ocupado = vm.decidir_action.pending();

    let titulo_dialogo = Signal::derive(move || {
        vm.selecionada
            .get()
            .map(|solicitacao| format!("{} → {}", solicitacao.origem, solicitacao.destino))
            .unwrap_or_default()
    });

    let aba_classe = move |etapa: EtapaAprovacao| {
        if vm.aba.get() == etapa {
            "tab-button active"
        } else {
            "tab-button"
        }
    };

    let cartoes = move || {
        let solicitacoes = pendentes.get();
        if solicitacoes.is_empty() {
            return view! {
                <EstadoVazio titulo="Nenhuma solicitação pendente de aprovação."/>
            }
            .into_view();
        }
        solicitacoes
            .into_iter()
            .map(|solicitacao| {
                let preco = formatar_preco(valor_estimado(&solicitacao), "BRL");
                let rota = format!("{} → {}", solicitacao.origem, solicitacao.destino);
                let data = formatar_data(solicitacao.data_ida);
                let email = solicitacao
                    .solicitante_email
                    .clone()
                    .unwrap_or_else(|| "sem email".to_string());
                let abrir = {
                    let solicitacao = solicitacao.clone();
                    move |_| vm.abrir_dialogo(solicitacao.clone())
                };
                let abrir_rejeicao = abrir.clone();
                view! {
                    <div class="approval-card">
                        <div class="approval-card-header">
                            <div class="approval-user-info">
                                <div class="approval-user-name">{solicitacao.solicitante_nome.clone()}</div>
                                <div class="approval-user-email">{email}</div>
                            </div>
                            <span class="status-badge-pending">"Pendente"</span>
                        </div>
                        <div class="approval-card-body">
                            <div class="approval-info-row">
                                <span class="info-label">"Rota:"</span>
                                <span class="info-value">{rota}</span>
                            </div>
                            <div class="approval-info-row">
                                <span class="info-label">"Data:"</span>
                                <span class="info-value">{data}</span>
                            </div>
                            <div class="approval-info-row">
                                <span class="info-label">"Valor:"</span>
                                <span class="info-value price-value">{preco}</span>
                            </div>
                            <div class="approval-info-row">
                                <span class="info-label">"Motivo:"</span>
                                <span class="info-value">{solicitacao.justificativa.clone()}</span>
                            </div>
                        </div>
                        <div class="approval-card-actions">
                            <button class="btn-approve" on:click=abrir>
                                "Aprovar"
                            </button>
                            <button class="btn-reject" on:click=abrir_rejeicao>
                                "Rejeitar"
                            </button>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <MolduraPagina titulo="Aprovações" subtitulo="Gerencie as solicitações pendentes">
            <div class="tabs-container">
                <button
                    class=move || aba_classe(EtapaAprovacao::Gerente)
                    on:click=move |_| vm.aba.set(EtapaAprovacao::Gerente)
                >
                    {move || {
                        format!("{} ({})", EtapaAprovacao::Gerente.titulo(), contagem_gerente.get())
                    }}
                </button>
                <button
                    class=move || aba_classe(EtapaAprovacao::Diretor)
                    on:click=move |_| vm.aba.set(EtapaAprovacao::Diretor)
                >
                    {move || {
                        format!("{} ({})", EtapaAprovacao::Diretor.titulo(), contagem_diretor.get())
                    }}
                </button>
            </div>

            <MensagemErro error=vm.erro.into()/>
            <MensagemSucesso mensagem=vm.sucesso.into()/>

            <div class="approval-cards-grid">{cartoes}</div>

            <DialogoDecisao
                aberto=Signal::derive(move || vm.selecionada.get().is_some())
                titulo=titulo_dialogo
                rotulo_campo="Motivo/Comentário"
                placeholder="Informe o motivo da aprovação ou rejeição..."
                valor=vm.motivo
                ocupado=ocupado.into()
                confirmar_rotulo="Confirmar Aprovação"
                on_confirmar=Callback::new(move |_| vm.confirmar(true))
                on_rejeitar=Callback::new(move |_| vm.confirmar(false))
                on_cancelar=Callback::new(move |_| vm.fechar_dialogo())
                multilinha=true
            />
        </MolduraPagina>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::test_support::helpers::{prover_auth, usuario};
    use crate::test_support::ssr::render_to_string;
    use crate::workflow::Papel;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn renders_both_approval_tabs() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/solicitacoes");
            then.status(200).json_body(json!([]));
        });
        let base_url = server.base_url();

        let html = render_to_string(move || {
            prover_auth(Some(usuario(Papel::Gerente)));
            provide_context(ApiClient::new_with_base_url(base_url));
            view! { <AprovacoesPanel/> }
        });
        assert!(html.contains("Aprovações"));
        assert!(html.contains("Aprovação Gerente (0)"));
        assert!(html.contains("Aprovação Diretor (0)"));
    }
}
