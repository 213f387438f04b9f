// Biblioteca raíz del crate `timetable`.
// Convierte un libro de horarios (una hoja por curso/división) en un registro
// anidado curso -> secciones -> instructores/horario, listo para serializar.
pub mod algorithm;
pub mod config;
pub mod error;
pub mod excel;
pub mod models;
pub mod output;

pub use config::Config;
pub use error::{Result, TimetableError};
pub use excel::leer_horario_excel;
pub use output::guardar_json;
