use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse, Usuario},
};

impl ApiClient {
    /// `POST /api/login`. O backend sinaliza credenciais inválidas com
    /// `success = false` e HTTP 200, então o campo é checado aqui.
    pub async fn login(&self, request: &LoginRequest) -> Result<Usuario, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .enviar(
                self.http_client()
                    .post(format!("{base_url}/api/login"))
                    .json(request),
            )
            .await?;

        let corpo: LoginResponse = self.ler_json(response).await?;
        if corpo.success {
            corpo
                .user
                .ok_or_else(|| ApiError::parse("Resposta de login sem usuário."))
        } else {
            Err(ApiError::server(
                corpo
                    .message
                    .unwrap_or_else(|| "Credenciais inválidas".to_string()),
            ))
        }
    }
}
