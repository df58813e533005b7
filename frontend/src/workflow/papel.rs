use serde::{Deserialize, Serialize};

/// Papel do usuário no fluxo de aprovação. Cada papel só executa a
/// transição da sua própria etapa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Papel {
    Colaborador,
    Gerente,
    Diretor,
    Compras,
}

impl Papel {
    pub fn rotulo(&self) -> &'static str {
        match self {
            Papel::Colaborador => "Colaborador",
            Papel::Gerente => "Gerente",
            Papel::Diretor => "Diretor",
            Papel::Compras => "Compras",
        }
    }
}

impl std::fmt::Display for Papel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.rotulo())
    }
}
