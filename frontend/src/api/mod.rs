mod auth;
pub mod client;
mod solicitacoes;
pub mod types;
mod voos;

pub use client::*;
pub use types::*;
