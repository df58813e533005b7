//! Classificação por etapa e agregações derivadas de uma coleção de
//! solicitações. Tudo aqui é puro e recalculado a cada render; nenhuma
//! estrutura guarda estado próprio.

use super::status::StatusSolicitacao;
use crate::api::types::Solicitacao;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResumoEtapas {
    pub pendente_gerente: usize,
    pub pendente_diretor: usize,
    pub pendente_compras: usize,
    pub processadas: usize,
    pub rejeitadas: usize,
}

impl ResumoEtapas {
    pub fn pendentes(&self) -> usize {
        self.pendente_gerente + self.pendente_diretor + self.pendente_compras
    }

    pub fn total(&self) -> usize {
        self.pendentes() + self.processadas + self.rejeitadas
    }

    pub fn contagem(&self, status: StatusSolicitacao) -> usize {
        match status {
            StatusSolicitacao::PendenteGerente => self.pendente_gerente,
            StatusSolicitacao::PendenteDiretor => self.pendente_diretor,
            StatusSolicitacao::PendenteCompras => self.pendente_compras,
            StatusSolicitacao::Processada => self.processadas,
            StatusSolicitacao::Rejeitada => self.rejeitadas,
        }
    }
}

pub fn resumir(solicitacoes: &[Solicitacao]) -> ResumoEtapas {
    let mut resumo = ResumoEtapas::default();
    for solicitacao in solicitacoes {
        match solicitacao.status {
            StatusSolicitacao::PendenteGerente => resumo.pendente_gerente += 1,
            StatusSolicitacao::PendenteDiretor => resumo.pendente_diretor += 1,
            StatusSolicitacao::PendenteCompras => resumo.pendente_compras += 1,
            StatusSolicitacao::Processada => resumo.processadas += 1,
            StatusSolicitacao::Rejeitada => resumo.rejeitadas += 1,
        }
    }
    resumo
}

/// Preço do voo escolhido; solicitação sem voo ou sem preço vale zero e
/// nunca bloqueia a aprovação.
pub fn valor_estimado(solicitacao: &Solicitacao) -> f64 {
    solicitacao
        .voo_escolhido
        .as_ref()
        .map(|voo| voo.preco)
        .unwrap_or(0.0)
}

pub fn valor_total(solicitacoes: &[Solicitacao]) -> f64 {
    solicitacoes.iter().map(valor_estimado).sum()
}

/// Busca textual: substring sem distinção de caixa sobre solicitante,
/// origem e destino.
pub fn corresponde_busca(solicitacao: &Solicitacao, busca: &str) -> bool {
    let busca = busca.trim().to_lowercase();
    if busca.is_empty() {
        return true;
    }
    solicitacao.solicitante_nome.to_lowercase().contains(&busca)
        || solicitacao.origem.to_lowercase().contains(&busca)
        || solicitacao.destino.to_lowercase().contains(&busca)
}

pub fn filtrar<'a>(
    solicitacoes: &'a [Solicitacao],
    status: Option<StatusSolicitacao>,
    busca: &str,
) -> Vec<&'a Solicitacao> {
    solicitacoes
        .iter()
        .filter(|s| status.map(|status| s.status == status).unwrap_or(true))
        .filter(|s| corresponde_busca(s, busca))
        .collect()
}

pub fn do_estagio(
    solicitacoes: &[Solicitacao],
    status: StatusSolicitacao,
) -> Vec<Solicitacao> {
    solicitacoes
        .iter()
        .filter(|s| s.status == status)
        .cloned()
        .collect()
}
