use crate::api::{ApiError, ProcessamentoPayload};
use crate::workflow::{aplicar_transicao, AcaoFluxo, Papel, StatusSolicitacao};

/// Barreira ao abrir o diálogo de processamento.
pub fn pode_processar(papel: Option<Papel>) -> Result<(), ApiError> {
    let Some(papel) = papel else {
        return Err(ApiError::validation("Sessão expirada. Entre novamente."));
    };
    if papel == Papel::Compras {
        return Ok(());
    }
    Err(ApiError::papel_nao_autorizado(
        "Apenas a equipe de compras pode processar solicitações aprovadas.",
    ))
}

/// Valida papel e bilhete pela tabela de transição antes de montar o corpo
/// do processamento.
pub fn validar_processamento(
    bilhete: &str,
    papel: Papel,
) -> Result<ProcessamentoPayload, ApiError> {
    let acao = AcaoFluxo::ProcessarCompra {
        bilhete: bilhete.to_string(),
    };
    aplicar_transicao(StatusSolicitacao::PendenteCompras, &acao, papel)?;
    Ok(ProcessamentoPayload {
        processado: true,
        observacoes: bilhete.trim().to_string(),
    })
}
