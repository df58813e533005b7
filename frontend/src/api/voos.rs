use serde_json::{json, Value};

use super::{
    client::ApiClient,
    types::{ApiError, ParametrosBuscaVoo, PrecoConfirmado, Voo},
};

impl ApiClient {
    pub async fn buscar_voos(&self, parametros: &ParametrosBuscaVoo) -> Result<Vec<Voo>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let mut query: Vec<(&str, String)> = vec![
            ("origem", parametros.origem.clone()),
            ("destino", parametros.destino.clone()),
            ("dataIda", parametros.data_ida.to_string()),
        ];
        if let Some(volta) = parametros.data_volta {
            query.push(("dataVolta", volta.to_string()));
        }

        let response = self
            .enviar(
                self.http_client()
                    .get(format!("{base_url}/api/voos/buscar"))
                    .query(&query),
            )
            .await?;
        self.ler_json(response).await
    }

    /// Confirma o preço de uma oferta devolvendo o payload original do
    /// provedor intacto, como o backend espera.
    pub async fn confirmar_preco(&self, oferta: &Value) -> Result<PrecoConfirmado, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .enviar(
                self.http_client()
                    .post(format!("{base_url}/api/voos/confirmar-preco"))
                    .json(&json!({ "flightOffer": oferta })),
            )
            .await?;
        self.ler_json(response).await
    }
}
