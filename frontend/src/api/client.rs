use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{api::types::ApiError, config};

/// Cliente HTTP do backend de solicitações. Uma instância vive no contexto
/// da aplicação; testes injetam `new_with_base_url` apontando para um
/// servidor de mentira.
#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn enviar(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        request.send().await.map_err(ApiError::de_reqwest)
    }

    /// Sucesso vira o tipo pedido; qualquer outro status vira `ApiError`
    /// com a melhor mensagem que o corpo oferecer.
    pub(crate) async fn ler_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|err| ApiError::parse(format!("Resposta inválida do servidor: {err}")))
        } else {
            Err(Self::erro_do_corpo(status, response).await)
        }
    }

    async fn erro_do_corpo(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        #[derive(Deserialize)]
        struct CorpoErro {
            #[serde(default)]
            message: Option<String>,
            #[serde(default)]
            error: Option<String>,
        }

        let reserva = format!("Erro do servidor ({})", status.as_u16());
        match response.json::<CorpoErro>().await {
            Ok(corpo) => ApiError::server(corpo.message.or(corpo.error).unwrap_or(reserva)),
            Err(_) => ApiError::server(reserva),
        }
    }
}
