// ============================================================================
// RESERVATIONS VIEWMODEL - Alta y baja de reservas
// ============================================================================

use crate::models::Reservation;
use crate::utils::time;

/// Id para la siguiente reserva: max existente + 1, colección vacía => 1
pub fn next_id(rows: &[Reservation]) -> u32 {
    rows.iter().map(|r| r.id).max().unwrap_or(0) + 1
}

/// Validar e insertar una reserva nueva al principio de la colección
/// (newest-first). Los timestamps vienen de inputs datetime-local y se
/// normalizan a ISO-8601. Devuelve el id asignado.
pub fn insert_new(
    rows: &mut Vec<Reservation>,
    user: &str,
    spot: &str,
    start: &str,
    end: &str,
) -> Result<u32, &'static str> {
    let user = user.trim();
    let spot = spot.trim();
    if user.is_empty() || spot.is_empty() || start.is_empty() || end.is_empty() {
        return Err("All fields required.");
    }

    let id = next_id(rows);
    rows.insert(
        0,
        Reservation {
            id,
            user: user.to_string(),
            spot: spot.to_string(),
            start: time::datetime_local_to_iso(start),
            end: time::datetime_local_to_iso(end),
            status: "active".to_string(),
        },
    );
    Ok(id)
}

/// Borrado optimista por id. Devuelve true si existía.
pub fn delete_by_id(rows: &mut Vec<Reservation>, id: u32) -> bool {
    let before = rows.len();
    rows.retain(|r| r.id != id);
    rows.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::demo_data::demo_reservations;
    use crate::utils::time;

    #[test]
    fn next_id_is_max_plus_one() {
        let rows = demo_reservations(time::now());
        assert_eq!(next_id(&rows), 103);
    }

    #[test]
    fn next_id_on_empty_set_is_one() {
        assert_eq!(next_id(&[]), 1);
    }

    #[test]
    fn insert_assigns_id_and_goes_first() {
        let mut rows = demo_reservations(time::now());
        let id = insert_new(
            &mut rows,
            " staff@tamiu.edu ",
            "B07",
            "2026-08-08T10:30",
            "2026-08-08T12:00",
        )
        .unwrap();

        assert_eq!(id, 103);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].id, 103);
        assert_eq!(rows[0].user, "staff@tamiu.edu");
        assert_eq!(rows[0].status, "active");
        assert_eq!(rows[0].start, "2026-08-08T10:30:00.000Z");
    }

    #[test]
    fn insert_rejects_missing_fields() {
        let mut rows = Vec::new();
        let err = insert_new(&mut rows, "a@b.c", "", "2026-08-08T10:30", "2026-08-08T12:00");
        assert_eq!(err, Err("All fields required."));
        assert!(rows.is_empty());
    }

    #[test]
    fn delete_removes_exactly_that_row() {
        let mut rows = demo_reservations(time::now());
        let kept = rows[1].clone();

        assert!(delete_by_id(&mut rows, 101));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], kept);

        // id inexistente: no-op
        assert!(!delete_by_id(&mut rows, 999));
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn ids_are_not_reused_after_delete_of_lower_ids() {
        let mut rows = demo_reservations(time::now());
        delete_by_id(&mut rows, 101);
        // queda la 102 => siguiente id 103, no se recicla el 101
        assert_eq!(next_id(&rows), 103);
    }
}
