//! Confirmação de preço das ofertas retornadas pela busca.
//!
//! No máximo as cinco primeiras ofertas são confirmadas, uma por vez: o
//! provedor externo limita a taxa, então nunca em paralelo. Falha em uma
//! oferta não interrompe o lote e ela permanece com o preço estimado.

use std::collections::HashMap;

use crate::api::{ApiClient, PrecoConfirmado, Voo};

pub const MAX_CONFIRMACOES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EtiquetaPreco {
    Confirmado,
    Estimado,
}

impl EtiquetaPreco {
    pub fn rotulo(&self) -> &'static str {
        match self {
            EtiquetaPreco::Confirmado => "✓ Preço Confirmado",
            EtiquetaPreco::Estimado => "Preço Estimado",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrecoExibido {
    pub valor: f64,
    pub moeda: String,
    pub etiqueta: EtiquetaPreco,
}

/// Percorre as ofertas em ordem e devolve os preços confirmados por id.
/// Ofertas sem o payload original do provedor são puladas.
pub async fn confirmar_precos(
    api: &ApiClient,
    voos: &[Voo],
) -> HashMap<String, PrecoConfirmado> {
    let mut confirmados = HashMap::new();
    for voo in voos.iter().take(MAX_CONFIRMACOES) {
        let Some(oferta) = &voo.oferta_original else {
            continue;
        };
        match api.confirmar_preco(oferta).await {
            Ok(confirmado) => {
                confirmados.insert(voo.id.clone(), confirmado);
            }
            Err(err) => {
                log::warn!("confirmação de preço indisponível para {}: {err}", voo.id);
            }
        }
    }
    confirmados
}

/// Preço a exibir para uma oferta: o confirmado quando existe, senão o
/// estimado da própria busca.
pub fn preco_exibido(voo: &Voo, confirmados: &HashMap<String, PrecoConfirmado>) -> PrecoExibido {
    match confirmados.get(&voo.id).and_then(|confirmado| {
        confirmado.valor().map(|valor| PrecoExibido {
            valor,
            moeda: confirmado
                .moeda
                .clone()
                .unwrap_or_else(|| voo.moeda.clone()),
            etiqueta: EtiquetaPreco::Confirmado,
        })
    }) {
        Some(confirmado) => confirmado,
        None => PrecoExibido {
            valor: voo.preco,
            moeda: voo.moeda.clone(),
            etiqueta: EtiquetaPreco::Estimado,
        },
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::helpers::voo_simples;
    use httpmock::prelude::*;
    use serde_json::json;

    fn ofertas(n: usize) -> Vec<Voo> {
        (1..=n).map(|i| voo_simples(&format!("OF{i}"), 1000.0 + i as f64)).collect()
    }

    #[tokio::test]
    async fn confirms_at_most_the_first_five_offers() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/voos/confirmar-preco");
                then.status(200)
                    .json_body(json!({ "preco": 999.0, "moeda": "BRL" }));
            })
            .await;

        let api = ApiClient::new_with_base_url(server.base_url());
        let voos = ofertas(10);
        let confirmados = confirmar_precos(&api, &voos).await;

        assert_eq!(mock.hits_async().await, 5);
        assert_eq!(confirmados.len(), 5);
        for i in 1..=5 {
            assert!(confirmados.contains_key(&format!("OF{i}")));
        }
        // A sexta oferta segue estimada.
        let sexta = preco_exibido(&voos[5], &confirmados);
        assert_eq!(sexta.etiqueta, EtiquetaPreco::Estimado);
        assert_eq!(sexta.valor, 1006.0);
    }

    #[tokio::test]
    async fn a_failed_confirmation_does_not_abort_the_batch() {
        let server = MockServer::start_async().await;
        // A oferta OF2 falha; as demais confirmam.
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/voos/confirmar-preco")
                    .json_body_partial(r#"{ "flightOffer": { "id": "OF2" } }"#);
                then.status(502).json_body(json!({ "message": "provedor fora" }));
            })
            .await;
        for id in ["OF1", "OF3"] {
            server
                .mock_async(|when, then| {
                    when.method(POST)
                        .path("/api/voos/confirmar-preco")
                        .json_body_partial(&format!(r#"{{ "flightOffer": {{ "id": "{id}" }} }}"#));
                    then.status(200)
                        .json_body(json!({ "preco": 1500.0, "moeda": "BRL" }));
                })
                .await;
        }

        let api = ApiClient::new_with_base_url(server.base_url());
        let voos = ofertas(3);
        let confirmados = confirmar_precos(&api, &voos).await;

        assert_eq!(confirmados.len(), 2);
        assert!(confirmados.contains_key("OF1"));
        assert!(!confirmados.contains_key("OF2"));
        assert!(confirmados.contains_key("OF3"));

        let falhou = preco_exibido(&voos[1], &confirmados);
        assert_eq!(falhou.etiqueta, EtiquetaPreco::Estimado);
    }

    #[tokio::test]
    async fn offers_without_the_original_payload_are_skipped() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/voos/confirmar-preco");
                then.status(200).json_body(json!({ "preco": 1.0 }));
            })
            .await;

        let mut voos = ofertas(2);
        voos[0].oferta_original = None;

        let api = ApiClient::new_with_base_url(server.base_url());
        let confirmados = confirmar_precos(&api, &voos).await;

        assert_eq!(mock.hits_async().await, 1);
        assert!(!confirmados.contains_key("OF1"));
        assert!(confirmados.contains_key("OF2"));
    }
}
