use crate::api::{ApiError, DecisaoAprovacao};
use crate::workflow::{aplicar_transicao, AcaoFluxo, Papel, StatusSolicitacao};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EtapaAprovacao {
    Gerente,
    Diretor,
}

impl EtapaAprovacao {
    pub fn status(&self) -> StatusSolicitacao {
        match self {
            EtapaAprovacao::Gerente => StatusSolicitacao::PendenteGerente,
            EtapaAprovacao::Diretor => StatusSolicitacao::PendenteDiretor,
        }
    }

    pub fn papel_necessario(&self) -> Papel {
        match self {
            EtapaAprovacao::Gerente => Papel::Gerente,
            EtapaAprovacao::Diretor => Papel::Diretor,
        }
    }

    pub fn titulo(&self) -> &'static str {
        match self {
            EtapaAprovacao::Gerente => "Aprovação Gerente",
            EtapaAprovacao::Diretor => "Aprovação Diretor",
        }
    }
}

/// Barreira ao abrir o diálogo: uma tela desatualizada não dispara rede.
pub fn pode_abrir_dialogo(etapa: EtapaAprovacao, papel: Option<Papel>) -> Result<(), ApiError> {
    let Some(papel) = papel else {
        return Err(ApiError::validation("Sessão expirada. Entre novamente."));
    };
    if papel == etapa.papel_necessario() {
        return Ok(());
    }
    let mensagem = match etapa {
        EtapaAprovacao::Gerente => {
            "Apenas gerentes podem aprovar solicitações pendentes de gerente."
        }
        EtapaAprovacao::Diretor => {
            "Apenas diretores podem aprovar solicitações pendentes de diretor."
        }
    };
    Err(ApiError::papel_nao_autorizado(mensagem))
}

/// Passa a decisão pela tabela de transição (papel + motivo) antes de
/// montar o corpo enviado ao backend.
pub fn validar_decisao(
    etapa: EtapaAprovacao,
    aprovado: bool,
    motivo: &str,
    papel: Papel,
) -> Result<DecisaoAprovacao, ApiError> {
    let acao = if aprovado {
        AcaoFluxo::Aprovar {
            motivo: motivo.to_string(),
        }
    } else {
        AcaoFluxo::Rejeitar {
            motivo: motivo.to_string(),
        }
    };
    aplicar_transicao(etapa.status(), &acao, papel)?;
    Ok(DecisaoAprovacao {
        aprovado,
        motivo: motivo.trim().to_string(),
    })
}
