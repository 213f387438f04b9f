use calamine::Data;
use chrono::NaiveDateTime;

/// Formato de fecha para celdas de tipo fecha (igual al que usaban las planillas exportadas).
const FORMATO_FECHA: &str = "%Y-%m-%d %H:%M:%S";

fn fecha_a_texto(fecha: NaiveDateTime) -> String {
    fecha.format(FORMATO_FECHA).to_string()
}

fn numero_a_texto(f: f64) -> String {
    // 3.0 -> "3": los créditos vienen como flotantes enteros
    if f.fract() == 0.0 && f.is_finite() && f.abs() < i64::MAX as f64 {
        (f as i64).to_string()
    } else {
        f.to_string()
    }
}

/// Convierte una celda en un campo de la fila cruda.
///
/// `None` si la celda falta, está vacía, es un error de Excel o sólo tiene espacios.
/// Los textos se recortan; las fechas se escriben como `YYYY-MM-DD HH:MM:SS`.
pub fn cell_to_field(c: Option<&Data>) -> Option<String> {
    let texto = match c? {
        Data::Empty | Data::Error(_) => return None,
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => numero_a_texto(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_datetime().map(fecha_a_texto).unwrap_or_else(|| dt.to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
    };
    (!texto.is_empty()).then_some(texto)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn campo(d: Data) -> Option<String> {
        cell_to_field(Some(&d))
    }

    #[test]
    fn flotante_entero_sin_decimales() {
        assert_eq!(campo(Data::Float(3.0)).as_deref(), Some("3"));
        assert_eq!(campo(Data::Float(1.5)).as_deref(), Some("1.5"));
        assert_eq!(campo(Data::Int(4)).as_deref(), Some("4"));
    }

    #[test]
    fn strings_recortados() {
        assert_eq!(campo(Data::String("  Dr. A ".into())).as_deref(), Some("Dr. A"));
    }

    #[test]
    fn vacios_son_none() {
        assert_eq!(cell_to_field(None), None);
        assert_eq!(campo(Data::Empty), None);
        assert_eq!(campo(Data::String("   ".into())), None);
        assert_eq!(campo(Data::String("L1".into())).as_deref(), Some("L1"));
    }

    #[test]
    fn formato_de_fecha() {
        let fecha = NaiveDate::from_ymd_opt(2024, 3, 5)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .expect("fecha válida");
        assert_eq!(fecha_a_texto(fecha), "2024-03-05 09:30:00");
    }
}
