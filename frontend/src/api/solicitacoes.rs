use serde_json::Value;

use super::{
    client::ApiClient,
    types::{
        ApiError, DecisaoAprovacao, Estatisticas, NovaSolicitacaoPayload, ProcessamentoPayload,
        Solicitacao,
    },
};

impl ApiClient {
    pub async fn listar_solicitacoes(&self) -> Result<Vec<Solicitacao>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .enviar(self.http_client().get(format!("{base_url}/api/solicitacoes")))
            .await?;
        self.ler_json(response).await
    }

    pub async fn obter_solicitacao(&self, id: &str) -> Result<Solicitacao, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .enviar(
                self.http_client()
                    .get(format!("{base_url}/api/solicitacoes/{id}")),
            )
            .await?;
        self.ler_json(response).await
    }

    pub async fn criar_solicitacao(
        &self,
        payload: &NovaSolicitacaoPayload,
    ) -> Result<Value, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .enviar(
                self.http_client()
                    .post(format!("{base_url}/api/solicitacoes"))
                    .json(payload),
            )
            .await?;
        self.ler_json(response).await
    }

    pub async fn aprovar_gerente(
        &self,
        id: &str,
        decisao: &DecisaoAprovacao,
    ) -> Result<Value, ApiError> {
        self.decidir(id, "aprovar-gerente", decisao).await
    }

    pub async fn aprovar_diretor(
        &self,
        id: &str,
        decisao: &DecisaoAprovacao,
    ) -> Result<Value, ApiError> {
        self.decidir(id, "aprovar-diretor", decisao).await
    }

    async fn decidir(
        &self,
        id: &str,
        acao: &str,
        decisao: &DecisaoAprovacao,
    ) -> Result<Value, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .enviar(
                self.http_client()
                    .post(format!("{base_url}/api/solicitacoes/{id}/{acao}"))
                    .json(decisao),
            )
            .await?;
        self.ler_json(response).await
    }

    pub async fn processar_compras(
        &self,
        id: &str,
        processamento: &ProcessamentoPayload,
    ) -> Result<Value, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .enviar(
                self.http_client()
                    .post(format!("{base_url}/api/solicitacoes/{id}/processar-compras"))
                    .json(processamento),
            )
            .await?;
        self.ler_json(response).await
    }

    pub async fn estatisticas(&self) -> Result<Estatisticas, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .enviar(self.http_client().get(format!("{base_url}/api/estatisticas")))
            .await?;
        self.ler_json(response).await
    }
}
