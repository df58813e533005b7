use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::workflow::{Papel, StatusSolicitacao};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usuario {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Papel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<Usuario>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aprovacao {
    pub aprovado: bool,
    pub motivo: String,
    pub data: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessamentoCompras {
    #[serde(default)]
    pub bilhete: Option<String>,
    #[serde(default)]
    pub observacoes: Option<String>,
    pub data: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntradaHistorico {
    pub acao: String,
    #[serde(default)]
    pub motivo: Option<String>,
    pub data: DateTime<Utc>,
}

/// Registro central do fluxo. O backend só o altera pelos endpoints de
/// aprovação/compra; cada mutação acrescenta uma entrada ao `historico`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solicitacao {
    pub id: String,
    pub solicitante_id: String,
    pub solicitante_nome: String,
    #[serde(default)]
    pub solicitante_email: Option<String>,
    pub origem: String,
    pub destino: String,
    pub data_ida: NaiveDate,
    #[serde(default)]
    pub data_volta: Option<NaiveDate>,
    pub justificativa: String,
    #[serde(default)]
    pub voo_escolhido: Option<Voo>,
    #[serde(default)]
    pub aprovacao_gerente: Option<Aprovacao>,
    #[serde(default)]
    pub aprovacao_diretor: Option<Aprovacao>,
    #[serde(default)]
    pub processamento_compras: Option<ProcessamentoCompras>,
    pub status: StatusSolicitacao,
    #[serde(default)]
    pub historico: Vec<EntradaHistorico>,
    #[serde(default)]
    pub tipo_servico: Option<String>,
    #[serde(default)]
    pub empresa: Option<String>,
    #[serde(default)]
    pub gestor: Option<String>,
    #[serde(default)]
    pub projeto: Option<String>,
    #[serde(default)]
    pub departamento: Option<String>,
    #[serde(default)]
    pub urgencia: Option<String>,
    #[serde(default)]
    pub flexibilidade: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentoVoo {
    pub origem: String,
    pub destino: String,
    #[serde(default)]
    pub partida: Option<NaiveDateTime>,
    #[serde(default)]
    pub chegada: Option<NaiveDateTime>,
    #[serde(default)]
    pub companhia: Option<String>,
    #[serde(default)]
    pub numero: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DetalhesVoo {
    #[serde(default)]
    pub ida: Vec<SegmentoVoo>,
    #[serde(default)]
    pub volta: Option<Vec<SegmentoVoo>>,
}

/// Oferta de voo. `preco` chega ora como número, ora como string, conforme
/// o provedor; `_originalOffer` é o payload bruto devolvido intacto na
/// confirmação de preço.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voo {
    pub id: String,
    pub companhia: String,
    #[serde(deserialize_with = "preco_flexivel")]
    pub preco: f64,
    #[serde(default = "moeda_padrao")]
    pub moeda: String,
    pub origem: String,
    pub destino: String,
    pub data_ida: NaiveDateTime,
    #[serde(default)]
    pub data_volta: Option<NaiveDateTime>,
    #[serde(default)]
    pub duracao_ida: Option<String>,
    #[serde(default)]
    pub duracao_volta: Option<String>,
    #[serde(default)]
    pub escalas_ida: u32,
    #[serde(default)]
    pub escalas_volta: Option<u32>,
    #[serde(default)]
    pub detalhes: Option<DetalhesVoo>,
    #[serde(rename = "_originalOffer", default, skip_serializing_if = "Option::is_none")]
    pub oferta_original: Option<Value>,
}

impl Voo {
    pub fn segmentos_ida(&self) -> &[SegmentoVoo] {
        self.detalhes
            .as_ref()
            .map(|d| d.ida.as_slice())
            .unwrap_or(&[])
    }

    pub fn segmentos_volta(&self) -> &[SegmentoVoo] {
        self.detalhes
            .as_ref()
            .and_then(|d| d.volta.as_deref())
            .unwrap_or(&[])
    }

    pub fn primeiro_segmento_ida(&self) -> Option<&SegmentoVoo> {
        self.segmentos_ida().first()
    }

    pub fn ultimo_segmento_ida(&self) -> Option<&SegmentoVoo> {
        self.segmentos_ida().last()
    }

    pub fn ultimo_segmento_volta(&self) -> Option<&SegmentoVoo> {
        self.segmentos_volta().last()
    }

    /// Chegada do último trecho da ida, quando o provedor a informou.
    pub fn chegada_ida(&self) -> Option<NaiveDateTime> {
        self.ultimo_segmento_ida().and_then(|s| s.chegada)
    }

    pub fn chegada_volta(&self) -> Option<NaiveDateTime> {
        self.ultimo_segmento_volta().and_then(|s| s.chegada)
    }
}

fn moeda_padrao() -> String {
    "BRL".to_string()
}

fn preco_flexivel<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PrecoBruto {
        Numero(f64),
        Texto(String),
    }

    match PrecoBruto::deserialize(deserializer)? {
        PrecoBruto::Numero(v) => Ok(v),
        PrecoBruto::Texto(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("preço inválido: {s:?}"))),
    }
}

fn preco_flexivel_opcional<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PrecoBruto {
        Numero(f64),
        Texto(String),
    }

    match Option::<PrecoBruto>::deserialize(deserializer)? {
        None => Ok(None),
        Some(PrecoBruto::Numero(v)) => Ok(Some(v)),
        Some(PrecoBruto::Texto(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("preço inválido: {s:?}"))),
    }
}

/// Resposta de `POST /api/voos/confirmar-preco`. Provedores divergem entre
/// `preco` e `grandTotal`; `valor()` resolve a precedência.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PrecoConfirmado {
    #[serde(default, deserialize_with = "preco_flexivel_opcional")]
    pub preco: Option<f64>,
    #[serde(default, deserialize_with = "preco_flexivel_opcional")]
    pub grand_total: Option<f64>,
    #[serde(default)]
    pub moeda: Option<String>,
}

impl PrecoConfirmado {
    pub fn valor(&self) -> Option<f64> {
        self.preco.or(self.grand_total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Estatisticas {
    pub pendente_gerente: i64,
    pub pendente_diretor: i64,
    pub pendente_compras: i64,
    pub aprovadas: i64,
    pub rejeitadas: i64,
}

impl Estatisticas {
    pub fn pendentes(&self) -> i64 {
        self.pendente_gerente + self.pendente_diretor + self.pendente_compras
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisaoAprovacao {
    pub aprovado: bool,
    pub motivo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessamentoPayload {
    pub processado: bool,
    pub observacoes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovaSolicitacaoPayload {
    pub solicitante_id: String,
    pub solicitante_nome: String,
    pub solicitante_email: String,
    pub origem: String,
    pub destino: String,
    pub data_ida: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_volta: Option<NaiveDate>,
    pub justificativa: String,
    pub tipo_servico: String,
    pub empresa: String,
    pub gestor: String,
    pub projeto: String,
    pub departamento: String,
    pub urgencia: String,
    pub flexibilidade: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voo_escolhido: Option<Voo>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParametrosBuscaVoo {
    pub origem: String,
    pub destino: String,
    pub data_ida: NaiveDate,
    pub data_volta: Option<NaiveDate>,
}

/// Erro normalizado de qualquer operação do cliente. `code` distingue a
/// taxonomia (rede, timeout, validação local, papel, servidor) sem obrigar
/// quem exibe a inspecionar a mensagem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    fn com_codigo(code: &str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::com_codigo("NETWORK_ERROR", message)
    }

    pub fn timeout() -> Self {
        Self::com_codigo(
            "TIMEOUT",
            "O servidor demorou muito para responder. Verifique sua conexão e tente novamente.",
        )
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::com_codigo("SERVER_ERROR", message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::com_codigo("VALIDATION_ERROR", message)
    }

    pub fn papel_nao_autorizado(message: impl Into<String>) -> Self {
        Self::com_codigo("PAPEL_NAO_AUTORIZADO", message)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::com_codigo("PARSE_ERROR", message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::com_codigo("UNKNOWN", message)
    }

    pub fn de_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::timeout()
        } else if err.is_connect() || err.is_request() {
            Self::network("Não foi possível conectar ao servidor. Verifique sua conexão.")
        } else if err.is_decode() {
            Self::parse(format!("Resposta inválida do servidor: {err}"))
        } else {
            Self::unknown(format!("Falha na requisição: {err}"))
        }
    }

    /// Falhas locais nunca chegam à rede.
    pub fn local(&self) -> bool {
        matches!(self.code.as_str(), "VALIDATION_ERROR" | "PAPEL_NAO_AUTORIZADO")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.message
    }
}

impl From<crate::workflow::ErroFluxo> for ApiError {
    fn from(err: crate::workflow::ErroFluxo) -> Self {
        use crate::workflow::ErroFluxo;
        match &err {
            ErroFluxo::PapelNaoAutorizado { .. } => Self::papel_nao_autorizado(err.to_string()),
            ErroFluxo::MotivoObrigatorio
            | ErroFluxo::BilheteObrigatorio
            | ErroFluxo::AcaoInvalida(..)
            | ErroFluxo::EstadoFinal(..) => Self::validation(err.to_string()),
        }
    }
}

impl leptos::IntoView for ApiError {
    fn into_view(self) -> leptos::View {
        leptos::IntoView::into_view(self.message)
    }
}
