use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, DecisaoAprovacao, Solicitacao};
use crate::pages::aprovacoes::utils::EtapaAprovacao;
use crate::workflow::{resumo, StatusSolicitacao};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PendentesAprovacao {
    pub gerente: Vec<Solicitacao>,
    pub diretor: Vec<Solicitacao>,
}

pub fn separar_pendentes(solicitacoes: &[Solicitacao]) -> PendentesAprovacao {
    PendentesAprovacao {
        gerente: resumo::do_estagio(solicitacoes, StatusSolicitacao::PendenteGerente),
        diretor: resumo::do_estagio(solicitacoes, StatusSolicitacao::PendenteDiretor),
    }
}

pub async fn carregar_pendentes(api: &ApiClient) -> Result<PendentesAprovacao, ApiError> {
    let todas = api.listar_solicitacoes().await?;
    Ok(separar_pendentes(&todas))
}

pub async fn enviar_decisao(
    api: &ApiClient,
    etapa: EtapaAprovacao,
    id: &str,
    decisao: &DecisaoAprovacao,
) -> Result<(), ApiError> {
    match etapa {
        EtapaAprovacao::Gerente => api.aprovar_gerente(id, decisao).await.map(|_| ()),
        EtapaAprovacao::Diretor => api.aprovar_diretor(id, decisao).await.map(|_| ()),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::helpers::solicitacao_com;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn splits_requests_into_the_two_approval_buckets() {
        let todas = vec![
            solicitacao_com(
                "s1",
                "João",
                "A",
                "B",
                StatusSolicitacao::PendenteGerente,
                None,
            ),
            solicitacao_com(
                "s2",
                "Maria",
                "A",
                "B",
                StatusSolicitacao::PendenteDiretor,
                None,
            ),
            solicitacao_com("s3", "Pedro", "A", "B", StatusSolicitacao::Processada, None),
            solicitacao_com(
                "s4",
                "Ana",
                "A",
                "B",
                StatusSolicitacao::PendenteGerente,
                None,
            ),
        ];
        let pendentes = separar_pendentes(&todas);
        assert_eq!(pendentes.gerente.len(), 2);
        assert_eq!(pendentes.diretor.len(), 1);
        assert_eq!(pendentes.diretor[0].id, "s2");
    }

    #[tokio::test]
    async fn stage_routes_to_the_matching_endpoint() {
        let server = MockServer::start_async().await;
        let gerente = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/solicitacoes/s1/aprovar-gerente");
                then.status(200).json_body(json!({ "status": "pendente_diretor" }));
            })
            .await;
        let diretor = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/solicitacoes/s2/aprovar-diretor");
                then.status(200).json_body(json!({ "status": "pendente_compras" }));
            })
            .await;

        let api = ApiClient::new_with_base_url(server.base_url());
        let decisao = DecisaoAprovacao {
            aprovado: true,
            motivo: "ok".into(),
        };
        enviar_decisao(&api, EtapaAprovacao::Gerente, "s1", &decisao)
            .await
            .unwrap();
        enviar_decisao(&api, EtapaAprovacao::Diretor, "s2", &decisao)
            .await
            .unwrap();

        assert_eq!(gerente.hits_async().await, 1);
        assert_eq!(diretor.hits_async().await, 1);
    }
}
