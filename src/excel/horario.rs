use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};
use tracing::{debug, info};

use crate::algorithm::normalizar_libro;
use crate::error::{Result, TimetableError};
use crate::excel::io::cell_to_field;
use crate::excel::COLUMNAS;
use crate::models::{FilaCruda, HorarioLibro};

/// Convierte el rango usado de una hoja en filas crudas.
///
/// Las posiciones son absolutas (columna A = 0), así una hoja cuyo rango empieza
/// más abajo o más a la derecha se lee igual. Se saltan las primeras `skip_rows`
/// filas (título y encabezados). Una hoja vacía devuelve una tabla vacía; una
/// hoja con otro número de columnas es un error de configuración.
pub fn filas_desde_rango(hoja: &str, range: &Range<Data>, skip_rows: usize) -> Result<Vec<FilaCruda>> {
    let (Some(_), Some(fin)) = (range.start(), range.end()) else {
        debug!("hoja '{}' vacía", hoja);
        return Ok(Vec::new());
    };

    let ancho = fin.1 as usize + 1;
    if ancho != COLUMNAS {
        return Err(TimetableError::ColumnLayout {
            sheet: hoja.to_string(),
            expected: COLUMNAS,
            found: ancho,
        });
    }

    // un salto mayor que u32 deja la hoja sin filas de datos
    let primera = u32::try_from(skip_rows).unwrap_or(u32::MAX);
    let mut filas = Vec::new();
    for r in primera..=fin.0 {
        let celdas: [Option<String>; COLUMNAS] =
            std::array::from_fn(|c| cell_to_field(range.get_value((r, c as u32))));
        filas.push(FilaCruda::from_celdas(celdas));
    }
    Ok(filas)
}

/// Lee todas las hojas del libro y devuelve el horario normalizado (hoja -> curso).
pub fn leer_horario_excel<P: AsRef<Path>>(path: P, skip_rows: usize) -> Result<HorarioLibro> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path).map_err(|source| TimetableError::Workbook {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet_names = workbook.sheet_names().to_owned();
    info!("{} hojas en {:?}", sheet_names.len(), path);

    let mut hojas = Vec::with_capacity(sheet_names.len());
    for hoja in sheet_names {
        let range = workbook
            .worksheet_range(&hoja)
            .map_err(|source| TimetableError::Sheet { sheet: hoja.clone(), source })?;
        let filas = filas_desde_rango(&hoja, &range, skip_rows)?;
        debug!("hoja '{}': {} filas de datos", hoja, filas.len());
        hojas.push((hoja, filas));
    }

    Ok(normalizar_libro(hojas))
}
