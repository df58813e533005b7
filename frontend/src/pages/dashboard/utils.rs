use crate::workflow::{ResumoEtapas, StatusSolicitacao};

pub const FILTRO_TODAS: &str = "todas";

/// Valor do seletor de status; "todas" desliga o filtro.
pub fn parse_filtro_status(valor: &str) -> Option<StatusSolicitacao> {
    if valor == FILTRO_TODAS {
        None
    } else {
        valor.parse().ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FatiaStatus {
    pub status: StatusSolicitacao,
    pub quantidade: usize,
    pub percentual: u32,
}

/// Distribuição por status para o painel lateral, derivada da coleção
/// carregada; fatias vazias saem da lista, como no gráfico original.
pub fn distribuicao(resumo: &ResumoEtapas) -> Vec<FatiaStatus> {
    let total = resumo.total();
    if total == 0 {
        return Vec::new();
    }

    StatusSolicitacao::TODOS
        .into_iter()
        .map(|status| (status, resumo.contagem(status)))
        .filter(|(_, quantidade)| *quantidade > 0)
        .map(|(status, quantidade)| FatiaStatus {
            status,
            quantidade,
            percentual: ((quantidade as f64 / total as f64) * 100.0).round() as u32,
        })
        .collect()
}
