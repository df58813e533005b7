#[cfg(not(target_arch = "wasm32"))]
pub mod ssr;

pub mod helpers {
    use crate::api::types::{Solicitacao, Usuario, Voo};
    use crate::state::auth::AuthState;
    use crate::workflow::{Papel, StatusSolicitacao};
    use chrono::NaiveDate;
    use leptos::*;
    use serde_json::json;

    pub fn usuario(papel: Papel) -> Usuario {
        let (id, nome, email) = match papel {
            Papel::Colaborador => ("u1", "João Silva", "joao@empresa.com"),
            Papel::Gerente => ("u2", "Maria Souza", "maria@empresa.com"),
            Papel::Diretor => ("u3", "Pedro Lima", "pedro@empresa.com"),
            Papel::Compras => ("u4", "Ana Costa", "ana@empresa.com"),
        };
        Usuario {
            id: id.to_string(),
            name: nome.to_string(),
            email: email.to_string(),
            role: papel,
        }
    }

    pub fn voo_simples(id: &str, preco: f64) -> Voo {
        serde_json::from_value(json!({
            "id": id,
            "companhia": "LATAM",
            "preco": preco,
            "moeda": "BRL",
            "origem": "GRU",
            "destino": "REC",
            "dataIda": "2026-09-10T08:30:00",
            "duracaoIda": "PT3H15M",
            "escalasIda": 0,
            "_originalOffer": { "id": id, "type": "flight-offer" }
        }))
        .expect("voo de teste válido")
    }

    pub fn solicitacao_com(
        id: &str,
        solicitante: &str,
        origem: &str,
        destino: &str,
        status: StatusSolicitacao,
        preco: Option<f64>,
    ) -> Solicitacao {
        Solicitacao {
            id: id.to_string(),
            solicitante_id: "u1".to_string(),
            solicitante_nome: solicitante.to_string(),
            solicitante_email: Some("teste@empresa.com".to_string()),
            origem: origem.to_string(),
            destino: destino.to_string(),
            data_ida: NaiveDate::from_ymd_opt(2026, 9, 10).unwrap(),
            data_volta: None,
            justificativa: "Visita técnica".to_string(),
            voo_escolhido: preco.map(|preco| voo_simples(&format!("voo-{id}"), preco)),
            aprovacao_gerente: None,
            aprovacao_diretor: None,
            processamento_compras: None,
            status,
            historico: Vec::new(),
            tipo_servico: None,
            empresa: None,
            gestor: None,
            projeto: None,
            departamento: None,
            urgencia: None,
            flexibilidade: None,
        }
    }

    pub fn prover_auth(usuario: Option<Usuario>) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let autenticado = usuario.is_some();
        let (auth, set_auth) = create_signal(AuthState {
            usuario,
            autenticado,
            carregando: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
