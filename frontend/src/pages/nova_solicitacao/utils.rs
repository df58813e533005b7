use chrono::NaiveDate;
use leptos::*;

use crate::api::{ApiError, NovaSolicitacaoPayload, Usuario, Voo};

pub const TIPOS_SERVICO: &[&str] = &[
    "Aluguel de veículo",
    "Passagem aérea",
    "Hotel",
    "Passagem rodoviária",
    "Bagagem Extra",
];

pub const EMPRESAS: &[&str] = &[
    "GWIND",
    "BIO ENERGIA",
    "TECHWIND RECIFE",
    "TECHWIND EUA",
    "TECHWIND SERVICES",
];

pub const DEPARTAMENTOS: &[&str] = &[
    "Operações",
    "Engenharia",
    "SGI",
    "EHS",
    "Compras",
    "RH",
    "Financeiro",
    "Diretoria",
    "Comercial",
    "Mobilidade",
];

pub const FLEXIBILIDADES: &[&str] = &[
    "Sem Flexibilidade de alteração",
    "Até 1 dia da data escolhida",
    "Até 3 dias da data escolhida",
    "Até 5 dias da data escolhida",
    "Acima de 5 dias da data escolhida",
];

#[derive(Clone, Copy)]
pub struct FormularioSolicitacao {
    pub tipo_servico: RwSignal<String>,
    pub nome_completo: RwSignal<String>,
    pub empresa: RwSignal<String>,
    pub gestor: RwSignal<String>,
    pub projeto: RwSignal<String>,
    pub justificativa: RwSignal<String>,
    pub urgencia: RwSignal<String>,
    pub departamento: RwSignal<String>,
    pub flexibilidade: RwSignal<String>,
    pub origem: RwSignal<String>,
    pub destino: RwSignal<String>,
    pub data_ida: RwSignal<String>,
    pub data_volta: RwSignal<String>,
}

impl Default for FormularioSolicitacao {
    fn default() -> Self {
        Self {
            tipo_servico: create_rw_signal("Passagem aérea".to_string()),
            nome_completo: create_rw_signal(String::new()),
            empresa: create_rw_signal(String::new()),
            gestor: create_rw_signal(String::new()),
            projeto: create_rw_signal(String::new()),
            justificativa: create_rw_signal(String::new()),
            urgencia: create_rw_signal("NÃO".to_string()),
            departamento: create_rw_signal(String::new()),
            flexibilidade: create_rw_signal(FLEXIBILIDADES[0].to_string()),
            origem: create_rw_signal(String::new()),
            destino: create_rw_signal(String::new()),
            data_ida: create_rw_signal(String::new()),
            data_volta: create_rw_signal(String::new()),
        }
    }
}

impl FormularioSolicitacao {
    pub fn preencher_solicitante(&self, usuario: &Usuario) {
        if self.nome_completo.get_untracked().is_empty() {
            self.nome_completo.set(usuario.name.clone());
        }
    }

    /// Validação local completa; nada chega à rede com campo obrigatório
    /// vazio ou datas inconsistentes.
    pub fn validar_e_montar(
        &self,
        usuario: &Usuario,
        voo_escolhido: Option<Voo>,
    ) -> Result<NovaSolicitacaoPayload, ApiError> {
        let obrigatorios = [
            (self.nome_completo, "Informe seu nome completo."),
            (self.empresa, "Selecione a empresa."),
            (self.gestor, "Informe o nome do gestor."),
            (self.origem, "Informe a cidade de origem."),
            (self.destino, "Informe a cidade de destino."),
            (self.justificativa, "Informe o motivo da viagem."),
        ];
        for (campo, mensagem) in obrigatorios {
            if campo.get_untracked().trim().is_empty() {
                return Err(ApiError::validation(mensagem));
            }
        }

        let data_ida = parse_data(&self.data_ida.get_untracked())
            .ok_or_else(|| ApiError::validation("Informe uma data de partida válida."))?;
        let bruto_volta = self.data_volta.get_untracked();
        let data_volta = if bruto_volta.trim().is_empty() {
            None
        } else {
            let volta = parse_data(&bruto_volta)
                .ok_or_else(|| ApiError::validation("Data de retorno inválida."))?;
            if volta < data_ida {
                return Err(ApiError::validation(
                    "A data de retorno não pode ser anterior à data de partida.",
                ));
            }
            Some(volta)
        };

        Ok(NovaSolicitacaoPayload {
            solicitante_id: usuario.id.clone(),
            solicitante_nome: usuario.name.clone(),
            solicitante_email: usuario.email.clone(),
            origem: self.origem.get_untracked().trim().to_string(),
            destino: self.destino.get_untracked().trim().to_string(),
            data_ida,
            data_volta,
            justificativa: self.justificativa.get_untracked().trim().to_string(),
            tipo_servico: self.tipo_servico.get_untracked(),
            empresa: self.empresa.get_untracked(),
            gestor: self.gestor.get_untracked(),
            projeto: self.projeto.get_untracked(),
            departamento: self.departamento.get_untracked(),
            urgencia: self.urgencia.get_untracked(),
            flexibilidade: self.flexibilidade.get_untracked(),
            voo_escolhido,
        })
    }

    pub fn reset(&self) {
        self.tipo_servico.set("Passagem aérea".to_string());
        self.nome_completo.set(String::new());
        self.empresa.set(String::new());
        self.gestor.set(String::new());
        self.projeto.set(String::new());
        self.justificativa.set(String::new());
        self.urgencia.set("NÃO".to_string());
        self.departamento.set(String::new());
        self.flexibilidade.set(FLEXIBILIDADES[0].to_string());
        self.origem.set(String::new());
        self.destino.set(String::new());
        self.data_ida.set(String::new());
        self.data_volta.set(String::new());
    }
}

/// Entradas `<input type="date">` chegam como AAAA-MM-DD.
pub fn parse_data(bruto: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(bruto.trim(), "%Y-%m-%d").ok()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::helpers::{usuario, voo_simples};
    use crate::test_support::ssr::with_runtime;
    use crate::workflow::Papel;

    fn formulario_valido() -> FormularioSolicitacao {
        let form = FormularioSolicitacao::default();
        form.nome_completo.set("João da Silva Pereira".to_string());
        form.empresa.set("GWIND".to_string());
        form.gestor.set("Carlos Vasconcelos".to_string());
        form.origem.set("São Paulo".to_string());
        form.destino.set("Recife".to_string());
        form.justificativa.set("Inspeção no parque".to_string());
        form.data_ida.set("2026-09-10".to_string());
        form
    }

    #[test]
    fn required_fields_block_submission() {
        with_runtime(|| {
            let form = formulario_valido();
            form.origem.set("  ".to_string());
            let err = form
                .validar_e_montar(&usuario(Papel::Colaborador), None)
                .unwrap_err();
            assert_eq!(err.code, "VALIDATION_ERROR");
            assert_eq!(err.message, "Informe a cidade de origem.");
        });
    }

    #[test]
    fn departure_date_must_parse() {
        with_runtime(|| {
            let form = formulario_valido();
            form.data_ida.set("10/09/2026".to_string());
            let err = form
                .validar_e_montar(&usuario(Papel::Colaborador), None)
                .unwrap_err();
            assert_eq!(err.message, "Informe uma data de partida válida.");
        });
    }

    #[test]
    fn return_before_departure_is_rejected() {
        with_runtime(|| {
            let form = formulario_valido();
            form.data_volta.set("2026-09-01".to_string());
            let err = form
                .validar_e_montar(&usuario(Papel::Colaborador), None)
                .unwrap_err();
            assert!(err.message.contains("data de retorno"));
        });
    }

    #[test]
    fn valid_form_builds_the_payload_from_the_session_user() {
        with_runtime(|| {
            let form = formulario_valido();
            form.data_volta.set("2026-09-14".to_string());
            let payload = form
                .validar_e_montar(&usuario(Papel::Colaborador), Some(voo_simples("OF1", 900.0)))
                .unwrap();
            assert_eq!(payload.solicitante_nome, "João Silva");
            assert_eq!(payload.solicitante_email, "joao@empresa.com");
            assert_eq!(payload.origem, "São Paulo");
            assert_eq!(payload.data_volta.unwrap().to_string(), "2026-09-14");
            assert_eq!(payload.voo_escolhido.unwrap().id, "OF1");
        });
    }

    #[test]
    fn reset_returns_the_form_to_its_defaults() {
        with_runtime(|| {
            let form = formulario_valido();
            form.reset();
            assert!(form.origem.get_untracked().is_empty());
            assert_eq!(form.tipo_servico.get_untracked(), "Passagem aérea");
            assert_eq!(form.urgencia.get_untracked(), "NÃO");
        });
    }
}
