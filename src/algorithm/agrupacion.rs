//! Agrupación de filas de continuación.
//!
//! Una sección con varios instructores ocupa varias filas: la primera lleva el
//! código de sección y las siguientes sólo repiten la columna de instructor.
//! No hay columna que las una, sólo el orden de las filas.

use crate::models::FilaCruda;

/// Recolecta los instructores de la sección que empieza en `inicio`.
///
/// Devuelve `(instructores, cursor)`, donde `cursor` es la última fila consumida:
/// - si la fila siguiente abre otra sección, el cursor queda justo antes de ella,
///   de modo que el `+1` del bucle exterior cae exactamente en esa fila;
/// - si se acaba la tabla, el cursor queda en la última fila examinada.
///
/// Las filas de continuación sin instructor se consumen sin aportar nada.
pub fn obtener_instructores(filas: &[FilaCruda], inicio: usize) -> (Vec<String>, usize) {
    let mut instructores = Vec::new();
    let Some(primera) = filas.get(inicio) else {
        return (instructores, inicio);
    };

    if let Some(nombre) = &primera.instructor {
        instructores.push(nombre.trim().to_string());
    }

    let mut cursor = inicio;
    while cursor + 1 < filas.len() {
        cursor += 1;
        let fila = &filas[cursor];
        if fila.es_seccion() {
            cursor -= 1;
            break;
        }
        if let Some(nombre) = &fila.instructor {
            instructores.push(nombre.trim().to_string());
        }
    }

    (instructores, cursor)
}
