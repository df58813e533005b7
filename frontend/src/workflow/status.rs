use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Posição da solicitação no fluxo. Fonte única de verdade para o
/// roteamento de aprovação; qualquer valor fora deste conjunto é erro de
/// dados, nunca um fallback silencioso.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusSolicitacao {
    PendenteGerente,
    PendenteDiretor,
    PendenteCompras,
    Processada,
    Rejeitada,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("status de solicitação desconhecido: {0:?}")]
pub struct StatusDesconhecido(pub String);

impl StatusSolicitacao {
    pub const TODOS: [StatusSolicitacao; 5] = [
        StatusSolicitacao::PendenteGerente,
        StatusSolicitacao::PendenteDiretor,
        StatusSolicitacao::PendenteCompras,
        StatusSolicitacao::Processada,
        StatusSolicitacao::Rejeitada,
    ];

    /// Forma canônica usada no protocolo e em filtros.
    pub fn chave(&self) -> &'static str {
        match self {
            StatusSolicitacao::PendenteGerente => "pendente_gerente",
            StatusSolicitacao::PendenteDiretor => "pendente_diretor",
            StatusSolicitacao::PendenteCompras => "pendente_compras",
            StatusSolicitacao::Processada => "processada",
            StatusSolicitacao::Rejeitada => "rejeitada",
        }
    }

    pub fn rotulo(&self) -> &'static str {
        match self {
            StatusSolicitacao::PendenteGerente => "Pendente Gerente",
            StatusSolicitacao::PendenteDiretor => "Pendente Diretor",
            StatusSolicitacao::PendenteCompras => "Pendente Compras",
            StatusSolicitacao::Processada => "Processada",
            StatusSolicitacao::Rejeitada => "Rejeitada",
        }
    }

    /// Estados finais: nenhuma transição é admitida a partir deles.
    pub fn terminal(&self) -> bool {
        matches!(
            self,
            StatusSolicitacao::Processada | StatusSolicitacao::Rejeitada
        )
    }
}

impl FromStr for StatusSolicitacao {
    type Err = StatusDesconhecido;

    // Além da forma canônica, aceita os aliases maiúsculos que ainda
    // existem em registros antigos do backend. Os status de cotação
    // anteriores à aprovação foram aposentados e não são aceitos.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pendente_gerente" | "PENDENTE_GERENTE" => Ok(StatusSolicitacao::PendenteGerente),
            "pendente_diretor" | "PENDENTE_DIRETOR" => Ok(StatusSolicitacao::PendenteDiretor),
            "pendente_compras" | "EM_COMPRA" | "APROVADO_FINAL" => {
                Ok(StatusSolicitacao::PendenteCompras)
            }
            "processada" | "COMPRADA" => Ok(StatusSolicitacao::Processada),
            "rejeitada" | "REJEITADA" => Ok(StatusSolicitacao::Rejeitada),
            outro => Err(StatusDesconhecido(outro.to_string())),
        }
    }
}

impl TryFrom<String> for StatusSolicitacao {
    type Error = StatusDesconhecido;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatusSolicitacao> for String {
    fn from(status: StatusSolicitacao) -> Self {
        status.chave().to_string()
    }
}

impl std::fmt::Display for StatusSolicitacao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.chave())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_keys_round_trip() {
        for status in StatusSolicitacao::TODOS {
            let parsed: StatusSolicitacao = status.chave().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn legacy_aliases_normalize_onto_the_canonical_set() {
        let casos = [
            ("PENDENTE_GERENTE", StatusSolicitacao::PendenteGerente),
            ("PENDENTE_DIRETOR", StatusSolicitacao::PendenteDiretor),
            ("EM_COMPRA", StatusSolicitacao::PendenteCompras),
            ("APROVADO_FINAL", StatusSolicitacao::PendenteCompras),
            ("COMPRADA", StatusSolicitacao::Processada),
            ("REJEITADA", StatusSolicitacao::Rejeitada),
        ];
        for (bruto, esperado) in casos {
            assert_eq!(bruto.parse::<StatusSolicitacao>().unwrap(), esperado);
        }
    }

    #[test]
    fn unknown_status_fails_loudly() {
        let err = "PENDENTE_COTACAO".parse::<StatusSolicitacao>().unwrap_err();
        assert_eq!(err, StatusDesconhecido("PENDENTE_COTACAO".to_string()));
        assert!("".parse::<StatusSolicitacao>().is_err());
        assert!("Pendente_Gerente".parse::<StatusSolicitacao>().is_err());
    }

    #[test]
    fn serde_emits_canonical_lower_snake() {
        let json = serde_json::to_string(&StatusSolicitacao::PendenteCompras).unwrap();
        assert_eq!(json, "\"pendente_compras\"");

        let legado: StatusSolicitacao = serde_json::from_str("\"EM_COMPRA\"").unwrap();
        assert_eq!(legado, StatusSolicitacao::PendenteCompras);

        assert!(serde_json::from_str::<StatusSolicitacao>("\"AGUARDANDO_ESCOLHA\"").is_err());
    }

    #[test]
    fn only_processada_and_rejeitada_are_terminal() {
        assert!(StatusSolicitacao::Processada.terminal());
        assert!(StatusSolicitacao::Rejeitada.terminal());
        assert!(!StatusSolicitacao::PendenteGerente.terminal());
        assert!(!StatusSolicitacao::PendenteDiretor.terminal());
        assert!(!StatusSolicitacao::PendenteCompras.terminal());
    }

    #[test]
    fn labels_cover_every_status() {
        for status in StatusSolicitacao::TODOS {
            assert!(!status.rotulo().is_empty());
        }
    }
}
