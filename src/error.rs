use std::path::PathBuf;

use thiserror::Error;

/// Fallos estructurales: son los únicos que abortan la ejecución.
/// Los campos ausentes nunca llegan aquí, se resuelven con valores por defecto.
#[derive(Debug, Error)]
pub enum TimetableError {
    #[error("no se pudo abrir el libro '{}': {source}", .path.display())]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("no se pudo leer la hoja '{sheet}': {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    #[error("la hoja '{sheet}' tiene {found} columnas; se esperaban {expected}")]
    ColumnLayout {
        sheet: String,
        expected: usize,
        found: usize,
    },

    #[error("error de E/S en '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error serializando el horario: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TimetableError>;
