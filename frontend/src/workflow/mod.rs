pub mod papel;
pub mod resumo;
pub mod status;
pub mod transicao;

pub use papel::Papel;
pub use resumo::{resumir, valor_estimado, valor_total, ResumoEtapas};
pub use status::{StatusDesconhecido, StatusSolicitacao};
pub use transicao::{aplicar_transicao, papel_responsavel, AcaoFluxo, ErroFluxo};
