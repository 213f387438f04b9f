use timetable::algorithm::{normalizar_libro, normalizar_tabla};
use timetable::models::{FilaCruda, HorarioLibro};
use timetable::output::{guardar_json, to_json_string};

fn horario_ejemplo() -> HorarioLibro {
    let filas = vec![
        FilaCruda {
            com_cod: Some("1".into()),
            course_no: Some("HSS F222".into()),
            course_title: Some("Introducción à la Lingüística".into()),
            credit_l: Some("3".into()),
            ..Default::default()
        },
        FilaCruda {
            sec: Some("L1".into()),
            instructor: Some("Dr. Müller".into()),
            days_hours: Some("T Th 4".into()),
            ..Default::default()
        },
    ];
    normalizar_libro(vec![("Semestre I".to_string(), filas)])
}

#[test]
fn test_json_dos_espacios_y_no_ascii() {
    let json = to_json_string(&horario_ejemplo()).expect("serializa");

    assert!(json.starts_with("{\n  \"Semestre I\": {\n    \"course_code\": \"HSS F222\""));
    assert!(json.contains("Introducción à la Lingüística"));
    assert!(json.contains("Dr. Müller"));
    assert!(!json.contains("\\u"));
}

#[test]
fn test_json_estructura() {
    let json = to_json_string(&horario_ejemplo()).expect("serializa");
    let v: serde_json::Value = serde_json::from_str(&json).expect("json válido");
    let curso = &v["Semestre I"];

    assert_eq!(curso["credits"]["lecture"], "3");
    assert_eq!(curso["credits"]["practical"], "-");
    let sec = &curso["sections"][0];
    assert_eq!(sec["section_type"], "Lecture");
    assert_eq!(sec["section_number"], "L1");
    assert_eq!(sec["room"], "");
    assert_eq!(sec["midsem_date"], "N/A");
    assert_eq!(sec["timing"][1]["day"], "Th");
    assert_eq!(sec["timing"][1]["slots"][0], "11:00 - 12:00");
}

#[test]
fn test_course_code_nulo_sin_cabecera() {
    let curso = normalizar_tabla(&[]);
    let mut horario = HorarioLibro::new();
    horario.insert("Vacía".to_string(), curso);
    let v: serde_json::Value = serde_json::from_str(&to_json_string(&horario).unwrap()).unwrap();
    assert!(v["Vacía"]["course_code"].is_null());
    assert_eq!(v["Vacía"]["sections"], serde_json::json!([]));
}

#[test]
fn test_guardar_json_en_disco() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("timetable_data.json");
    let horario = horario_ejemplo();

    guardar_json(&horario, &path).expect("escribe");
    let contenido = std::fs::read_to_string(&path).expect("lee");
    assert_eq!(contenido, to_json_string(&horario).unwrap());
}

#[test]
fn test_guardar_json_ruta_invalida() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("no_existe").join("out.json");
    let err = guardar_json(&horario_ejemplo(), &path).unwrap_err();
    assert!(matches!(err, timetable::TimetableError::Io { .. }));
}
