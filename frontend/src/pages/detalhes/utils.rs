use crate::api::SegmentoVoo;
use crate::utils::format::formatar_momento;

pub fn rotulo_escalas(escalas: u32) -> String {
    if escalas == 0 {
        "Voo direto".to_string()
    } else {
        format!("{escalas} escala(s)")
    }
}

/// Linha de um trecho no detalhamento do voo; horários ausentes são um
/// caso modelado, não um traço no lugar de um erro.
pub fn descrever_segmento(segmento: &SegmentoVoo) -> String {
    let partida = segmento
        .partida
        .map(|data| formatar_momento(&data))
        .unwrap_or_else(|| "horário não informado".to_string());
    let chegada = segmento
        .chegada
        .map(|data| formatar_momento(&data))
        .unwrap_or_else(|| "horário não informado".to_string());
    let voo = segmento
        .companhia
        .as_deref()
        .zip(segmento.numero.as_deref())
        .map(|(companhia, numero)| format!(" ({companhia} {numero})"))
        .unwrap_or_default();
    format!(
        "{} → {}{voo} · {partida} — {chegada}",
        segmento.origem, segmento.destino
    )
}
