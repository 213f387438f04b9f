use tracing::{debug, warn};

use crate::algorithm::agrupacion::obtener_instructores;
use crate::algorithm::dias_horas::parse_dias_horas;
use crate::algorithm::seccion::tipo_seccion;
use crate::models::{Creditos, Curso, FilaCruda, SeccionHorario, SIN_CREDITO, SIN_FECHA};

fn credito(valor: &Option<String>) -> String {
    valor
        .as_deref()
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| SIN_CREDITO.to_string())
}

fn actualizar_cabecera(curso: &mut Curso, fila: &FilaCruda) {
    if curso.course_code.is_some() && curso.course_code != fila.course_no {
        // una hoja = un curso: la cabecera nueva pisa la anterior
        warn!(
            "cabecera repetida en la hoja: {:?} reemplaza a {:?}",
            fila.course_no, curso.course_code
        );
    }
    curso.course_code = fila.course_no.clone();
    curso.course_title = fila.course_title.clone();
    curso.credits = Creditos {
        lecture: credito(&fila.credit_l),
        practical: credito(&fila.credit_p),
        units: credito(&fila.credit_u),
    };
}

fn construir_seccion(fila: &FilaCruda, codigo: &str, instructors: Vec<String>) -> SeccionHorario {
    SeccionHorario {
        section_type: tipo_seccion(codigo),
        section_number: codigo.to_string(),
        instructors,
        room: fila.room.clone().unwrap_or_default(),
        timing: fila.days_hours.as_deref().map(parse_dias_horas).unwrap_or_default(),
        midsem_date: fila.midsem.clone().unwrap_or_else(|| SIN_FECHA.to_string()),
        compre_date: fila.compre.clone().unwrap_or_else(|| SIN_FECHA.to_string()),
    }
}

/// Recorre las filas de una hoja en una sola pasada y arma su `Curso`.
///
/// Ningún campo es obligatorio: lo que falte toma su valor por defecto
/// ("-" en créditos, "" en sala, "N/A" en fechas, lista vacía en horario).
pub fn normalizar_tabla(filas: &[FilaCruda]) -> Curso {
    let mut curso = Curso::default();
    let mut idx = 0;

    while idx < filas.len() {
        let fila = &filas[idx];

        if fila.es_cabecera() {
            actualizar_cabecera(&mut curso, fila);
        }

        match &fila.sec {
            Some(codigo) => {
                let (instructores, ultimo) = obtener_instructores(filas, idx);
                curso.sections.push(construir_seccion(fila, codigo, instructores));
                idx = ultimo;
            }
            None => debug!("fila {} sin sección, se salta", idx),
        }

        idx += 1;
    }

    curso
}
