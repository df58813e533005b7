//! Tabela de transição do fluxo de aprovação.
//!
//! O backend é a autoridade final; esta tabela existe para barrar ações de
//! uma tela desatualizada antes de qualquer chamada de rede. Rejeições aqui
//! nunca são persistidas.

use thiserror::Error;

use super::{papel::Papel, status::StatusSolicitacao};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcaoFluxo {
    Aprovar { motivo: String },
    Rejeitar { motivo: String },
    ProcessarCompra { bilhete: String },
}

impl AcaoFluxo {
    pub fn nome(&self) -> &'static str {
        match self {
            AcaoFluxo::Aprovar { .. } => "aprovar",
            AcaoFluxo::Rejeitar { .. } => "rejeitar",
            AcaoFluxo::ProcessarCompra { .. } => "processar compra",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErroFluxo {
    #[error("apenas {esperado} pode agir sobre solicitações em {status}")]
    PapelNaoAutorizado {
        status: StatusSolicitacao,
        esperado: Papel,
        recebido: Papel,
    },
    #[error("informe um motivo/comentário para a decisão")]
    MotivoObrigatorio,
    #[error("informe o número do bilhete")]
    BilheteObrigatorio,
    #[error("solicitação em {0} não admite a ação \"{1}\"")]
    AcaoInvalida(StatusSolicitacao, &'static str),
    #[error("solicitação em estado final ({0}) não pode ser alterada")]
    EstadoFinal(StatusSolicitacao),
}

/// Quem pode agir sobre cada etapa. `None` para estados finais.
pub fn papel_responsavel(status: StatusSolicitacao) -> Option<Papel> {
    match status {
        StatusSolicitacao::PendenteGerente => Some(Papel::Gerente),
        StatusSolicitacao::PendenteDiretor => Some(Papel::Diretor),
        StatusSolicitacao::PendenteCompras => Some(Papel::Compras),
        StatusSolicitacao::Processada | StatusSolicitacao::Rejeitada => None,
    }
}

/// Valida papel e conteúdo da ação e devolve o próximo status.
pub fn aplicar_transicao(
    status: StatusSolicitacao,
    acao: &AcaoFluxo,
    papel: Papel,
) -> Result<StatusSolicitacao, ErroFluxo> {
    let Some(esperado) = papel_responsavel(status) else {
        return Err(ErroFluxo::EstadoFinal(status));
    };
    if papel != esperado {
        return Err(ErroFluxo::PapelNaoAutorizado {
            status,
            esperado,
            recebido: papel,
        });
    }

    match (status, acao) {
        (StatusSolicitacao::PendenteGerente, AcaoFluxo::Aprovar { motivo }) => {
            exigir_motivo(motivo)?;
            Ok(StatusSolicitacao::PendenteDiretor)
        }
        (StatusSolicitacao::PendenteGerente, AcaoFluxo::Rejeitar { motivo }) => {
            exigir_motivo(motivo)?;
            Ok(StatusSolicitacao::Rejeitada)
        }
        (StatusSolicitacao::PendenteDiretor, AcaoFluxo::Aprovar { motivo }) => {
            exigir_motivo(motivo)?;
            Ok(StatusSolicitacao::PendenteCompras)
        }
        (StatusSolicitacao::PendenteDiretor, AcaoFluxo::Rejeitar { motivo }) => {
            exigir_motivo(motivo)?;
            Ok(StatusSolicitacao::Rejeitada)
        }
        (StatusSolicitacao::PendenteCompras, AcaoFluxo::ProcessarCompra { bilhete }) => {
            if bilhete.trim().is_empty() {
                return Err(ErroFluxo::BilheteObrigatorio);
            }
            Ok(StatusSolicitacao::Processada)
        }
        (status, acao) => Err(ErroFluxo::AcaoInvalida(status, acao.nome())),
    }
}

fn exigir_motivo(motivo: &str) -> Result<(), ErroFluxo> {
    if motivo.trim().is_empty() {
        return Err(ErroFluxo::MotivoObrigatorio);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aprovar() -> AcaoFluxo {
        AcaoFluxo::Aprovar {
            motivo: "dentro da política".to_string(),
        }
    }

    fn rejeitar() -> AcaoFluxo {
        AcaoFluxo::Rejeitar {
            motivo: "fora do orçamento".to_string(),
        }
    }

    fn processar() -> AcaoFluxo {
        AcaoFluxo::ProcessarCompra {
            bilhete: "LA-123456".to_string(),
        }
    }

    #[test]
    fn happy_path_walks_all_three_stages() {
        let s1 = aplicar_transicao(
            StatusSolicitacao::PendenteGerente,
            &aprovar(),
            Papel::Gerente,
        )
        .unwrap();
        assert_eq!(s1, StatusSolicitacao::PendenteDiretor);

        let s2 = aplicar_transicao(s1, &aprovar(), Papel::Diretor).unwrap();
        assert_eq!(s2, StatusSolicitacao::PendenteCompras);

        let s3 = aplicar_transicao(s2, &processar(), Papel::Compras).unwrap();
        assert_eq!(s3, StatusSolicitacao::Processada);
    }

    #[test]
    fn rejection_is_reachable_from_both_approval_stages() {
        assert_eq!(
            aplicar_transicao(
                StatusSolicitacao::PendenteGerente,
                &rejeitar(),
                Papel::Gerente
            )
            .unwrap(),
            StatusSolicitacao::Rejeitada
        );
        assert_eq!(
            aplicar_transicao(
                StatusSolicitacao::PendenteDiretor,
                &rejeitar(),
                Papel::Diretor
            )
            .unwrap(),
            StatusSolicitacao::Rejeitada
        );
    }

    #[test]
    fn terminal_states_admit_no_action() {
        for status in [StatusSolicitacao::Processada, StatusSolicitacao::Rejeitada] {
            for papel in [Papel::Gerente, Papel::Diretor, Papel::Compras] {
                let err = aplicar_transicao(status, &aprovar(), papel).unwrap_err();
                assert_eq!(err, ErroFluxo::EstadoFinal(status));
            }
        }
    }

    #[test]
    fn every_role_is_blocked_outside_its_own_stage() {
        let etapas = [
            (StatusSolicitacao::PendenteGerente, Papel::Gerente),
            (StatusSolicitacao::PendenteDiretor, Papel::Diretor),
            (StatusSolicitacao::PendenteCompras, Papel::Compras),
        ];
        let papeis = [
            Papel::Colaborador,
            Papel::Gerente,
            Papel::Diretor,
            Papel::Compras,
        ];
        for (status, esperado) in etapas {
            let acao = if status == StatusSolicitacao::PendenteCompras {
                processar()
            } else {
                aprovar()
            };
            for papel in papeis {
                let resultado = aplicar_transicao(status, &acao, papel);
                if papel == esperado {
                    assert!(resultado.is_ok(), "{papel} deveria agir em {status}");
                } else {
                    assert_eq!(
                        resultado.unwrap_err(),
                        ErroFluxo::PapelNaoAutorizado {
                            status,
                            esperado,
                            recebido: papel,
                        }
                    );
                }
            }
        }
    }

    #[test]
    fn colaborador_cannot_approve_a_pending_manager_request() {
        let err = aplicar_transicao(
            StatusSolicitacao::PendenteGerente,
            &aprovar(),
            Papel::Colaborador,
        )
        .unwrap_err();
        assert!(matches!(err, ErroFluxo::PapelNaoAutorizado { .. }));
    }

    #[test]
    fn blank_reason_is_a_validation_failure_not_a_transition() {
        for motivo in ["", "   ", "\n\t"] {
            let err = aplicar_transicao(
                StatusSolicitacao::PendenteGerente,
                &AcaoFluxo::Aprovar {
                    motivo: motivo.to_string(),
                },
                Papel::Gerente,
            )
            .unwrap_err();
            assert_eq!(err, ErroFluxo::MotivoObrigatorio);
        }
    }

    #[test]
    fn blank_ticket_blocks_purchase_processing() {
        let err = aplicar_transicao(
            StatusSolicitacao::PendenteCompras,
            &AcaoFluxo::ProcessarCompra {
                bilhete: "  ".to_string(),
            },
            Papel::Compras,
        )
        .unwrap_err();
        assert_eq!(err, ErroFluxo::BilheteObrigatorio);
    }

    #[test]
    fn purchase_stage_does_not_accept_approval_actions() {
        let err = aplicar_transicao(
            StatusSolicitacao::PendenteCompras,
            &aprovar(),
            Papel::Compras,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ErroFluxo::AcaoInvalida(StatusSolicitacao::PendenteCompras, "aprovar")
        );
    }

    #[test]
    fn approval_stages_do_not_accept_purchase_processing() {
        let err = aplicar_transicao(
            StatusSolicitacao::PendenteDiretor,
            &processar(),
            Papel::Diretor,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ErroFluxo::AcaoInvalida(StatusSolicitacao::PendenteDiretor, "processar compra")
        );
    }
}
