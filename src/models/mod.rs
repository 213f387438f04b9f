// Estructuras de datos principales

use indexmap::IndexMap;
use serde::Serialize;

/// Placeholder para créditos ausentes.
pub const SIN_CREDITO: &str = "-";
/// Placeholder para fechas de examen ausentes.
pub const SIN_FECHA: &str = "N/A";

/// Una fila tal cual viene de la hoja, con las 12 columnas fijas.
/// `None` = celda vacía.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilaCruda {
    pub com_cod: Option<String>,
    pub course_no: Option<String>,
    pub course_title: Option<String>,
    pub credit_l: Option<String>,
    pub credit_p: Option<String>,
    pub credit_u: Option<String>,
    pub sec: Option<String>,
    pub instructor: Option<String>,
    pub room: Option<String>,
    pub days_hours: Option<String>,
    pub midsem: Option<String>,
    pub compre: Option<String>,
}

impl FilaCruda {
    /// Construye la fila a partir de las 12 celdas en el orden de la hoja.
    pub fn from_celdas(celdas: [Option<String>; 12]) -> Self {
        let [
            com_cod,
            course_no,
            course_title,
            credit_l,
            credit_p,
            credit_u,
            sec,
            instructor,
            room,
            days_hours,
            midsem,
            compre,
        ] = celdas;
        FilaCruda {
            com_cod,
            course_no,
            course_title,
            credit_l,
            credit_p,
            credit_u,
            sec,
            instructor,
            room,
            days_hours,
            midsem,
            compre,
        }
    }

    pub fn es_cabecera(&self) -> bool {
        self.com_cod.is_some()
    }

    pub fn es_seccion(&self) -> bool {
        self.sec.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TipoSeccion {
    Lecture,
    Practical,
    Tutorial,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FranjaHoraria {
    pub day: String,
    pub slots: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Creditos {
    pub lecture: String,
    pub practical: String,
    pub units: String,
}

impl Default for Creditos {
    fn default() -> Self {
        Creditos {
            lecture: SIN_CREDITO.to_string(),
            practical: SIN_CREDITO.to_string(),
            units: SIN_CREDITO.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeccionHorario {
    pub section_type: TipoSeccion,
    pub section_number: String,
    pub instructors: Vec<String>,
    pub room: String,
    pub timing: Vec<FranjaHoraria>,
    pub midsem_date: String,
    pub compre_date: String,
}

/// Registro de curso de una hoja. Sólo se conserva la última cabecera vista.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Curso {
    pub course_code: Option<String>,
    pub course_title: Option<String>,
    pub credits: Creditos,
    pub sections: Vec<SeccionHorario>,
}

/// Nombre de hoja -> curso, en el orden del libro.
pub type HorarioLibro = IndexMap<String, Curso>;
