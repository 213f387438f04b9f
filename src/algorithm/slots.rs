// Tabla fija de periodos (slot) -> franja horaria.

const SLOT_TO_TIME: [&str; 9] = [
    "8:00 - 9:00",
    "9:00 - 10:00",
    "10:00 - 11:00",
    "11:00 - 12:00",
    "12:00 - 1:00",
    "1:00 - 2:00",
    "2:00 - 3:00",
    "3:00 - 4:00",
    "4:00 - 5:00",
];

/// Devuelve la franja del periodo `slot` (1-9). Fuera de la tabla devuelve "".
pub fn slot_a_hora(slot: u32) -> &'static str {
    slot.checked_sub(1)
        .and_then(|i| SLOT_TO_TIME.get(i as usize))
        .copied()
        .unwrap_or("")
}
