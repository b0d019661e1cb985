// ============================================================================
// TIME - Helpers de tiempo ISO-8601
// ============================================================================
// Todos los timestamps persistidos son ISO-8601 UTC con milisegundos, igual
// que Date.toISOString(). Comparar dos timestamps es comparar los strings.
// ============================================================================

use chrono::{DateTime, Duration, NaiveDateTime, SecondsFormat, TimeZone, Utc};

/// Instante actual (UTC)
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Instante actual como ISO-8601 ("2026-08-08T12:34:56.789Z")
pub fn now_iso() -> String {
    to_iso(now())
}

/// Serializar un instante a ISO-8601 con milisegundos
pub fn to_iso(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Instante desplazado respecto a `base` (offset negativo = pasado)
pub fn offset_iso(base: DateTime<Utc>, offset: Duration) -> String {
    to_iso(base + offset)
}

/// Formatear un ISO-8601 para mostrar en tablas.
/// Si el string no parsea, se devuelve tal cual (igual que el formatDT original).
pub fn format_dt(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Normalizar el value de un input datetime-local ("2026-08-08T10:30") a
/// ISO-8601 UTC. Si no parsea se conserva el valor crudo.
pub fn datetime_local_to_iso(value: &str) -> String {
    let parsed = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"));

    match parsed {
        Ok(naive) => to_iso(Utc.from_utc_datetime(&naive)),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_roundtrip_has_millis_and_z() {
        let dt = Utc.with_ymd_and_hms(2026, 8, 8, 12, 0, 0).unwrap();
        assert_eq!(to_iso(dt), "2026-08-08T12:00:00.000Z");
    }

    #[test]
    fn iso_strings_compare_lexically() {
        let base = Utc.with_ymd_and_hms(2026, 8, 8, 12, 0, 0).unwrap();
        let older = offset_iso(base, Duration::hours(-24));
        let newer = offset_iso(base, Duration::minutes(-5));
        assert!(older < newer);
    }

    #[test]
    fn format_dt_falls_back_to_raw_string() {
        assert_eq!(format_dt("not-a-date"), "not-a-date");
        assert_eq!(format_dt("2026-08-08T12:00:00.000Z"), "2026-08-08 12:00");
    }

    #[test]
    fn datetime_local_is_normalized() {
        assert_eq!(
            datetime_local_to_iso("2026-08-08T10:30"),
            "2026-08-08T10:30:00.000Z"
        );
        // valor crudo si no parsea
        assert_eq!(datetime_local_to_iso("garbage"), "garbage");
    }
}
