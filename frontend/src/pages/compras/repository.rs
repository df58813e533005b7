use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, ProcessamentoPayload, Solicitacao};
use crate::workflow::{resumo, StatusSolicitacao};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PainelCompras {
    pub aguardando: Vec<Solicitacao>,
    pub finalizadas: Vec<Solicitacao>,
}

pub fn separar_compras(solicitacoes: &[Solicitacao]) -> PainelCompras {
    PainelCompras {
        aguardando: resumo::do_estagio(solicitacoes, StatusSolicitacao::PendenteCompras),
        finalizadas: resumo::do_estagio(solicitacoes, StatusSolicitacao::Processada),
    }
}

pub async fn carregar_painel(api: &ApiClient) -> Result<PainelCompras, ApiError> {
    let todas = api.listar_solicitacoes().await?;
    Ok(separar_compras(&todas))
}

pub async fn processar(
    api: &ApiClient,
    id: &str,
    payload: &ProcessamentoPayload,
) -> Result<(), ApiError> {
    api.processar_compras(id, payload).await.map(|_| ())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::helpers::solicitacao_com;

    #[test]
    fn splits_into_pending_and_completed_sections() {
        let todas = vec![
            solicitacao_com(
                "s1",
                "João",
                "A",
                "B",
                StatusSolicitacao::PendenteCompras,
                Some(1000.0),
            ),
            solicitacao_com("s2", "Maria", "A", "B", StatusSolicitacao::Processada, None),
            solicitacao_com(
                "s3",
                "Pedro",
                "A",
                "B",
                StatusSolicitacao::PendenteGerente,
                None,
            ),
        ];
        let painel = separar_compras(&todas);
        assert_eq!(painel.aguardando.len(), 1);
        assert_eq!(painel.aguardando[0].id, "s1");
        assert_eq!(painel.finalizadas.len(), 1);
        assert_eq!(painel.finalizadas[0].id, "s2");
    }
}
