use crate::components::{error::MensagemErro, layout::MolduraPagina};
use crate::pages::nova_solicitacao::{
    busca_voos::BuscaVoos,
    utils::{DEPARTAMENTOS, EMPRESAS, FLEXIBILIDADES, TIPOS_SERVICO},
    view_model::use_nova_solicitacao_view_model,
};
use leptos::ev::SubmitEvent;
use leptos::*;

fn opcoes(valores: &'static [&'static str], selecionado: RwSignal<String>) -> View {
    valores
        .iter()
        .map(|valor| {
            view! {
                <option value=*valor selected=move || selecionado.get() == *valor>
                    {*valor}
                </option>
            }
        })
        .collect_view()
}

#[component]
pub fn NovaSolicitacaoPanel() -> impl IntoView {
    let vm = use_nova_solicitacao_view_model();
    let form = vm.form;
    let pending = vm.criar_action.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submeter();
    };

    view! {
        <MolduraPagina
            titulo="Nova Solicitação de Passagem"
            subtitulo="Preencha os dados da sua solicitação"
        >
            <div class="card">
                <MensagemErro error=vm.erro.into()/>

                <form on:submit=on_submit>
                    <div class="form-section">
                        <h3 class="section-title">"Tipo de Serviço"</h3>
                        <select
                            class="form-select"
                            on:change=move |ev| form.tipo_servico.set(event_target_value(&ev))
                        >
                            {opcoes(TIPOS_SERVICO, form.tipo_servico)}
                        </select>
                    </div>

                    <div class="form-section">
                        <h3 class="section-title">"Informações Gerais"</h3>
                        <div class="form-group">
                            <label class="form-label">"Nome completo (sem abreviações) *"</label>
                            <input
                                type="text"
                                class="form-input"
                                placeholder="Nome completo"
                                prop:value=move || form.nome_completo.get()
                                on:input=move |ev| form.nome_completo.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label class="form-label">"Empresa *"</label>
                            <select
                                class="form-select"
                                on:change=move |ev| form.empresa.set(event_target_value(&ev))
                            >
                                <option value="">"Selecione..."</option>
                                {opcoes(EMPRESAS, form.empresa)}
                            </select>
                        </div>
                        <div class="form-group">
                            <label class="form-label">"Nome do Gestor *"</label>
                            <input
                                type="text"
                                class="form-input"
                                prop:value=move || form.gestor.get()
                                on:input=move |ev| form.gestor.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label class="form-label">"Departamento"</label>
                            <select
                                class="form-select"
                                on:change=move |ev| form.departamento.set(event_target_value(&ev))
                            >
                                <option value="">"Selecione..."</option>
                                {opcoes(DEPARTAMENTOS, form.departamento)}
                            </select>
                        </div>
                    </div>

                    <div class="form-section">
                        <h3 class="section-title">"Informações da Viagem"</h3>
                        <div class="form-group">
                            <label class="form-label">"Projeto"</label>
                            <input
                                type="text"
                                class="form-input"
                                prop:value=move || form.projeto.get()
                                on:input=move |ev| form.projeto.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label class="form-label">"Motivo da Viagem *"</label>
                            <textarea
                                class="form-textarea"
                                rows="3"
                                prop:value=move || form.justificativa.get()
                                on:input=move |ev| form.justificativa.set(event_target_value(&ev))
                            ></textarea>
                        </div>
                        <div class="form-group">
                            <label class="form-label">"Viagem urgente?"</label>
                            <select
                                class="form-select"
                                on:change=move |ev| form.urgencia.set(event_target_value(&ev))
                            >
                                <option value="NÃO" selected=move || form.urgencia.get() == "NÃO">"NÃO"</option>
                                <option value="SIM" selected=move || form.urgencia.get() == "SIM">"SIM"</option>
                            </select>
                        </div>
                    </div>

                    <div class="form-section">
                        <h3 class="section-title">"Origem e Destino"</h3>
                        <div class="form-group">
                            <label class="form-label">"Cidade de Origem *"</label>
                            <input
                                type="text"
                                class="form-input"
                                prop:value=move || form.origem.get()
                                on:input=move |ev| form.origem.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label class="form-label">"Cidade de Destino *"</label>
                            <input
                                type="text"
                                class="form-input"
                                prop:value=move || form.destino.get()
                                on:input=move |ev| form.destino.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label class="form-label">"Data de Partida *"</label>
                            <input
                                type="date"
                                class="form-input"
                                prop:value=move || form.data_ida.get()
                                on:input=move |ev| form.data_ida.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label class="form-label">"Data de Retorno"</label>
                            <input
                                type="date"
                                class="form-input"
                                prop:value=move || form.data_volta.get()
                                on:input=move |ev| form.data_volta.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label class="form-label">"Flexibilidade de Datas"</label>
                            <select
                                class="form-select"
                                on:change=move |ev| form.flexibilidade.set(event_target_value(&ev))
                            >
                                {opcoes(FLEXIBILIDADES, form.flexibilidade)}
                            </select>
                        </div>
                    </div>

                    <div class="form-section">
                        <BuscaVoos form=form voo_selecionado=vm.voo_selecionado/>
                    </div>

                    <div class="form-actions">
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || pending.get()
                        >
                            {move || if pending.get() { "Enviando..." } else { "Enviar Solicitação" }}
                        </button>
                        <a href="/dashboard" class="btn btn-secondary">
                            "Cancelar"
                        </a>
                    </div>
                </form>
            </div>
        </MolduraPagina>
    }
}
