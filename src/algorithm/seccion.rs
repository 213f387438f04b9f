use crate::models::TipoSeccion;

/// Tipo de sección según la primera letra del código (L/P/T, sin distinguir mayúsculas).
pub fn tipo_seccion(codigo: &str) -> TipoSeccion {
    match codigo.chars().next().map(|c| c.to_ascii_uppercase()) {
        Some('L') => TipoSeccion::Lecture,
        Some('P') => TipoSeccion::Practical,
        Some('T') => TipoSeccion::Tutorial,
        _ => TipoSeccion::Unknown,
    }
}
