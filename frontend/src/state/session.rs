//! Sessão autenticada persistida fora do processo (localStorage no
//! navegador). Objeto explícito com carregar/salvar/limpar em vez de um
//! usuário global solto em estado de módulo.

use crate::{api::types::Usuario, utils::storage};

pub const CHAVE_SESSAO: &str = "user";

#[derive(Debug, Clone, Copy, Default)]
pub struct Sessao;

impl Sessao {
    /// Reidrata o usuário salvo. Um registro corrompido é descartado e a
    /// sessão volta a não autenticada.
    pub fn carregar(&self) -> Option<Usuario> {
        let bruto = storage::get_item(CHAVE_SESSAO).ok().flatten()?;
        match serde_json::from_str::<Usuario>(&bruto) {
            Ok(usuario) => Some(usuario),
            Err(err) => {
                log::warn!("sessão persistida inválida, descartando: {err}");
                let _ = storage::remove_item(CHAVE_SESSAO);
                None
            }
        }
    }

    pub fn salvar(&self, usuario: &Usuario) -> Result<(), String> {
        let bruto = serde_json::to_string(usuario).map_err(|err| err.to_string())?;
        storage::set_item(CHAVE_SESSAO, &bruto)
    }

    pub fn limpar(&self) {
        let _ = storage::remove_item(CHAVE_SESSAO);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::helpers::usuario;
    use crate::workflow::Papel;

    #[test]
    fn save_load_clear_round_trip() {
        let sessao = Sessao;
        sessao.limpar();
        assert!(sessao.carregar().is_none());

        let original = usuario(Papel::Diretor);
        sessao.salvar(&original).unwrap();
        assert_eq!(sessao.carregar(), Some(original));

        sessao.limpar();
        assert!(sessao.carregar().is_none());
    }

    #[test]
    fn corrupted_record_is_discarded() {
        crate::utils::storage::set_item(CHAVE_SESSAO, "{not json").unwrap();
        let sessao = Sessao;
        assert!(sessao.carregar().is_none());
        // O registro inválido foi removido no caminho de erro.
        assert!(crate::utils::storage::get_item(CHAVE_SESSAO)
            .unwrap()
            .is_none());
    }

    #[test]
    fn persists_under_the_agreed_key() {
        let sessao = Sessao;
        sessao.salvar(&usuario(Papel::Compras)).unwrap();
        let bruto = crate::utils::storage::get_item("user").unwrap().unwrap();
        assert!(bruto.contains("\"compras\""));
        sessao.limpar();
    }
}
