pub mod aprovacoes;
pub mod compras;
pub mod dashboard;
pub mod detalhes;
pub mod home;
pub mod login;
pub mod nova_solicitacao;

pub use aprovacoes::AprovacoesPage;
pub use compras::ComprasPage;
pub use dashboard::DashboardPage;
pub use detalhes::DetalhesPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use nova_solicitacao::NovaSolicitacaoPage;
