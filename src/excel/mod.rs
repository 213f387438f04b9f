//! Módulo `excel`: lectura del libro de horarios.
//!
//! Submódulos:
//! - `io`: conversión de celdas de calamine a texto
//! - `horario`: lectura de hojas a filas crudas y armado del horario completo

/// Helpers de celdas
mod io;

/// Lectura del libro: `leer_horario_excel`
mod horario;

pub use horario::{filas_desde_rango, leer_horario_excel};
pub use io::cell_to_field;

/// Columnas fijas de cada hoja: COM COD, COURSE NO., COURSE TITLE, CREDIT L/P/U,
/// SEC, INSTRUCTOR, ROOM, DAYS & HOURS, MIDSEM, COMPRE.
pub const COLUMNAS: usize = 12;
