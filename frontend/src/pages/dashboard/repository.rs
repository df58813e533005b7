use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, Estatisticas, Solicitacao};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DadosPainel {
    pub solicitacoes: Vec<Solicitacao>,
    pub estatisticas: Estatisticas,
}

pub async fn carregar_painel(api: &ApiClient) -> Result<DadosPainel, ApiError> {
    let solicitacoes = api.listar_solicitacoes().await?;
    let estatisticas = api.estatisticas().await?;
    Ok(DadosPainel {
        solicitacoes,
        estatisticas,
    })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn loads_requests_and_statistics_together() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/solicitacoes");
                then.status(200).json_body(json!([{
                    "id": "s1",
                    "solicitanteId": "u1",
                    "solicitanteNome": "João Silva",
                    "origem": "Sao Paulo",
                    "destino": "Recife",
                    "dataIda": "2026-09-10",
                    "justificativa": "Visita técnica",
                    "status": "pendente_gerente"
                }]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/estatisticas");
                then.status(200).json_body(json!({
                    "pendenteGerente": 1,
                    "pendenteDiretor": 0,
                    "pendenteCompras": 0,
                    "aprovadas": 0,
                    "rejeitadas": 0
                }));
            })
            .await;

        let api = ApiClient::new_with_base_url(server.base_url());
        let dados = carregar_painel(&api).await.unwrap();
        assert_eq!(dados.solicitacoes.len(), 1);
        assert_eq!(dados.estatisticas.pendente_gerente, 1);
    }

    #[tokio::test]
    async fn statistics_failure_fails_the_whole_load() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/solicitacoes");
                then.status(200).json_body(json!([]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/estatisticas");
                then.status(500).json_body(json!({ "message": "indisponível" }));
            })
            .await;

        let api = ApiClient::new_with_base_url(server.base_url());
        let err = carregar_painel(&api).await.unwrap_err();
        assert_eq!(err.code, "SERVER_ERROR");
    }
}
