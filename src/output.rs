// Escritura del horario normalizado a JSON.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{Result, TimetableError};
use crate::models::HorarioLibro;

/// JSON con indentación de dos espacios; el texto no-ASCII se escribe tal cual.
pub fn to_json_string(horario: &HorarioLibro) -> Result<String> {
    Ok(serde_json::to_string_pretty(horario)?)
}

/// Guarda el horario en `path`, reemplazando el archivo si existe.
pub fn guardar_json(horario: &HorarioLibro, path: &Path) -> Result<()> {
    let io_err = |source| TimetableError::Io { path: path.to_path_buf(), source };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, horario)?;
    writer.flush().map_err(io_err)?;

    info!("JSON file has been created as {}", path.display());
    Ok(())
}
