//! pt-BR display formatting for dates and money.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// "R$ 1.234,56" for BRL, "USD 1.234,56" for anything else.
pub fn formatar_preco(valor: f64, moeda: &str) -> String {
    let prefixo = if moeda.is_empty() || moeda == "BRL" {
        "R$".to_string()
    } else {
        moeda.to_string()
    };
    format!("{} {}", prefixo, formatar_valor(valor))
}

fn formatar_valor(valor: f64) -> String {
    let centavos = (valor.abs() * 100.0).round() as u64;
    let inteiro = centavos / 100;
    let fracao = centavos % 100;
    let sinal = if valor < 0.0 { "-" } else { "" };
    format!("{}{},{:02}", sinal, agrupar_milhares(inteiro), fracao)
}

fn agrupar_milhares(valor: u64) -> String {
    let digitos = valor.to_string();
    let mut grupos = Vec::new();
    let bytes = digitos.as_bytes();
    let mut fim = bytes.len();
    while fim > 3 {
        grupos.push(&digitos[fim - 3..fim]);
        fim -= 3;
    }
    grupos.push(&digitos[..fim]);
    grupos.reverse();
    grupos.join(".")
}

pub fn formatar_data(data: NaiveDate) -> String {
    data.format("%d/%m/%Y").to_string()
}

pub fn formatar_data_hora(data: &DateTime<Utc>) -> String {
    data.format("%d/%m/%Y %H:%M").to_string()
}

pub fn formatar_momento(data: &NaiveDateTime) -> String {
    data.format("%d/%m/%Y %H:%M").to_string()
}

pub fn formatar_hora(data: &NaiveDateTime) -> String {
    data.format("%H:%M").to_string()
}
