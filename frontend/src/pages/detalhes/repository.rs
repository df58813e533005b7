use crate::api::{ApiClient, ApiError, Solicitacao};

pub async fn obter(api: &ApiClient, id: &str) -> Result<Solicitacao, ApiError> {
    api.obter_solicitacao(id).await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn fetches_a_single_request_with_its_audit_trail() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/solicitacoes/sol-1");
                then.status(200).json_body(json!({
                    "id": "sol-1",
                    "solicitanteId": "u1",
                    "solicitanteNome": "João Silva",
                    "origem": "Sao Paulo",
                    "destino": "Recife",
                    "dataIda": "2026-09-10",
                    "justificativa": "Visita técnica",
                    "status": "processada",
                    "processamentoCompras": {
                        "bilhete": "LA-123456",
                        "data": "2026-08-05T10:00:00Z"
                    },
                    "historico": [
                        { "acao": "Solicitação criada", "data": "2026-07-30T09:00:00Z" },
                        { "acao": "Compra processada", "motivo": "LA-123456", "data": "2026-08-05T10:00:00Z" }
                    ]
                }));
            })
            .await;

        let api = ApiClient::new_with_base_url(server.base_url());
        let solicitacao = obter(&api, "sol-1").await.unwrap();
        assert_eq!(solicitacao.historico.len(), 2);
        assert_eq!(
            solicitacao
                .processamento_compras
                .unwrap()
                .bilhete
                .as_deref(),
            Some("LA-123456")
        );
    }
}
