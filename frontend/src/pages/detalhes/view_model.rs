use crate::api::{ApiClient, ApiError, Solicitacao};
use crate::pages::detalhes::repository;
use leptos::*;

#[derive(Clone, Copy)]
pub struct DetalhesViewModel {
    pub solicitacao_resource: Resource<String, Result<Solicitacao, ApiError>>,
}

impl DetalhesViewModel {
    pub fn new(id: Signal<String>) -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let solicitacao_resource = create_resource(
            move || id.get(),
            move |id| {
                let api = api.clone();
                async move { repository::obter(&api, &id).await }
            },
        );
        Self {
            solicitacao_resource,
        }
    }
}
