//! Configuración de la ejecución.
//!
//! Prioridad: argumento de línea de comandos > variable de entorno > valor por defecto.
//! `main` carga antes el `.env` con `dotenv`, así que las variables definidas ahí
//! también cuentan como entorno.

use std::path::PathBuf;

use tracing::warn;

/// Nombre de salida por defecto.
pub const DEFAULT_OUTPUT: &str = "timetable_data.json";

/// Filas por encima de los datos: la fila de título y la de encabezados.
pub const DEFAULT_SKIP_ROWS: usize = 2;

pub const ENV_OUTPUT: &str = "TIMETABLE_OUTPUT";
pub const ENV_SKIP_ROWS: &str = "TIMETABLE_SKIP_ROWS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub skip_rows: usize,
}

impl Config {
    /// Resuelve la configuración usando el entorno del proceso.
    pub fn resolve(input: PathBuf, output: Option<PathBuf>) -> Self {
        Self::resolve_with(input, output, |k| std::env::var(k).ok())
    }

    /// Igual que `resolve` pero con una función de búsqueda inyectable (tests).
    pub fn resolve_with<F>(input: PathBuf, output: Option<PathBuf>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let output = output
            .or_else(|| lookup(ENV_OUTPUT).filter(|v| !v.trim().is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        let skip_rows = match lookup(ENV_SKIP_ROWS) {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) => n,
                Err(_) => {
                    warn!("{}='{}' no es un número válido, usando {}", ENV_SKIP_ROWS, raw, DEFAULT_SKIP_ROWS);
                    DEFAULT_SKIP_ROWS
                }
            },
            None => DEFAULT_SKIP_ROWS,
        };

        Config { input, output, skip_rows }
    }
}
