// Parseo de la columna "DAYS & HOURS".
use tracing::debug;

use crate::algorithm::slots::slot_a_hora;
use crate::models::FranjaHoraria;

fn es_dia(tok: &str) -> bool {
    !tok.is_empty() && tok.chars().all(char::is_alphabetic)
}

fn es_slot(tok: &str) -> bool {
    !tok.is_empty() && tok.chars().all(|c| c.is_ascii_digit())
}

/// Parsear una cadena de días y horas a una lista de franjas.
/// Ejemplo: "MW 3 F 5" -> [M 10:00-11:00, W 10:00-11:00, F 12:00-1:00]
///
/// Cada grupo es una racha de tokens alfabéticos (días) seguida de un token
/// numérico (periodo). Los fragmentos mal formados se descartan sin error:
/// un número sin días, un token mixto ("3A") o días al final sin número.
pub fn parse_dias_horas(s: &str) -> Vec<FranjaHoraria> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    let mut timings = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let mut dias: Vec<&str> = Vec::new();
        while i < tokens.len() && es_dia(tokens[i]) {
            dias.push(tokens[i]);
            i += 1;
        }

        let Some(tok) = tokens.get(i) else {
            if !dias.is_empty() {
                debug!("días sin periodo al final de '{}': {:?}", s, dias);
            }
            break;
        };

        if es_slot(tok) {
            if dias.is_empty() {
                debug!("periodo '{}' sin días en '{}', se ignora", tok, s);
            }
            // un número que no cabe en u32 tampoco está en la tabla
            let rango = tok.parse::<u32>().map(slot_a_hora).unwrap_or("");
            for dia in dias {
                timings.push(FranjaHoraria { day: dia.to_string(), slots: vec![rango.to_string()] });
            }
        } else {
            debug!("token '{}' no reconocido en '{}', se ignora", tok, s);
        }
        i += 1;
    }

    timings
}
