// Núcleo del normalizador: funciones puras sobre tablas de filas crudas.
// Declarar submódulos (archivos en la carpeta `src/algorithm`)
pub mod agrupacion;
pub mod dias_horas;
pub mod normalizar;
pub mod seccion;
pub mod slots;

pub use agrupacion::obtener_instructores;
pub use dias_horas::parse_dias_horas;
pub use normalizar::normalizar_tabla;
pub use seccion::tipo_seccion;
pub use slots::slot_a_hora;

use tracing::info;

use crate::models::{FilaCruda, HorarioLibro};

/// Normaliza cada hoja por separado y arma el mapa hoja -> curso.
/// Las hojas no comparten estado; el orden de entrada se conserva.
pub fn normalizar_libro<I>(hojas: I) -> HorarioLibro
where
    I: IntoIterator<Item = (String, Vec<FilaCruda>)>,
{
    let mut horario = HorarioLibro::new();
    for (hoja, filas) in hojas {
        info!("Parsing {}", hoja);
        let curso = normalizar_tabla(&filas);
        horario.insert(hoja, curso);
    }
    horario
}
