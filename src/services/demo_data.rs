// ============================================================================
// DEMO DATA - Seeds del modo demo (funciona sin backend)
// ============================================================================

use chrono::{DateTime, Duration, Utc};

use crate::models::{Alert, Reservation, RoverLocation, RoverStatus, Spot, SpotStatus};
use crate::services::store::PersistedStore;
use crate::utils::constants::{LS_ALERTS, LS_LOT, LS_RESERVATIONS};
use crate::utils::time;

/// Sembrar datos demo en el store. Idempotente por clave: solo siembra
/// las claves ausentes, nunca pisa datos existentes.
pub fn seed_demo_data(store: &PersistedStore) {
    let now = time::now();

    if !store.contains(LS_ALERTS) {
        store.set_alerts(&demo_alerts(now));
        log::info!("🌱 [SEED] Alertas demo sembradas");
    }
    if !store.contains(LS_LOT) {
        store.set_lot(&demo_lot());
        log::info!("🌱 [SEED] Lot demo sembrado (50 plazas)");
    }
    if !store.contains(LS_RESERVATIONS) {
        store.set_reservations(&demo_reservations(now));
        log::info!("🌱 [SEED] Reservas demo sembradas");
    }
}

/// Las tres alertas del seed original
pub fn demo_alerts(now: DateTime<Utc>) -> Vec<Alert> {
    vec![
        Alert {
            time: time::to_iso(now),
            level: "info".to_string(),
            message: "Console started (demo mode).".to_string(),
        },
        Alert {
            time: time::offset_iso(now, Duration::minutes(-5)),
            level: "warn".to_string(),
            message: "Rover heartbeat delayed (simulated).".to_string(),
        },
        Alert {
            time: time::offset_iso(now, Duration::hours(-24)),
            level: "info".to_string(),
            message: "Lot occupancy updated.".to_string(),
        },
    ]
}

/// 50 plazas: A01..A25, B01..B25, con estados repartidos en round-robin
/// sobre el patrón free/occupied/free/reserved/free
pub fn demo_lot() -> Vec<Spot> {
    const STATUS_CYCLE: [SpotStatus; 5] = [
        SpotStatus::Free,
        SpotStatus::Occupied,
        SpotStatus::Free,
        SpotStatus::Reserved,
        SpotStatus::Free,
    ];

    let mut spots = Vec::with_capacity(50);
    let mut k = 0usize;
    for row in ["A", "B"] {
        for i in 1..=25 {
            let label = format!("{}{:02}", row, i);
            spots.push(Spot {
                id: label.clone(),
                label,
                status: STATUS_CYCLE[k % STATUS_CYCLE.len()],
            });
            k += 1;
        }
    }
    spots
}

/// Las dos reservas del seed original (ids 101 y 102)
pub fn demo_reservations(now: DateTime<Utc>) -> Vec<Reservation> {
    vec![
        Reservation {
            id: 101,
            user: "student@tamiu.edu".to_string(),
            spot: "A03".to_string(),
            start: time::offset_iso(now, Duration::minutes(-30)),
            end: time::offset_iso(now, Duration::hours(1)),
            status: "active".to_string(),
        },
        Reservation {
            id: 102,
            user: "visitor@gmail.com".to_string(),
            spot: "B12".to_string(),
            start: time::offset_iso(now, Duration::hours(-2)),
            end: time::offset_iso(now, Duration::hours(-1)),
            status: "completed".to_string(),
        },
    ]
}

/// Snapshot sintético de telemetría del rover
pub fn demo_rover_status(now: DateTime<Utc>) -> RoverStatus {
    RoverStatus {
        battery_percent: 78,
        location: RoverLocation {
            x: 12.4,
            y: 3.1,
            frame: "lot".to_string(),
        },
        heartbeat_iso: time::to_iso(now),
        mode: "patrol".to_string(),
        last_task: "scan_row_A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::MemoryBackend;
    use std::collections::HashSet;
    use std::rc::Rc;

    #[test]
    fn lot_has_50_spots_with_unique_ids() {
        let spots = demo_lot();
        assert_eq!(spots.len(), 50);

        let ids: HashSet<_> = spots.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), 50);

        assert_eq!(spots[0].id, "A01");
        assert_eq!(spots[24].id, "A25");
        assert_eq!(spots[25].id, "B01");
        assert_eq!(spots[49].id, "B25");
    }

    #[test]
    fn lot_statuses_follow_the_seed_pattern() {
        let spots = demo_lot();
        // patrón de 5: free, occupied, free, reserved, free => 30/10/10
        let free = spots.iter().filter(|s| s.status == SpotStatus::Free).count();
        let occ = spots
            .iter()
            .filter(|s| s.status == SpotStatus::Occupied)
            .count();
        let res = spots
            .iter()
            .filter(|s| s.status == SpotStatus::Reserved)
            .count();
        assert_eq!((free, occ, res), (30, 10, 10));
        assert_eq!(spots[1].status, SpotStatus::Occupied);
        assert_eq!(spots[3].status, SpotStatus::Reserved);
    }

    #[test]
    fn seeding_is_idempotent() {
        let store = PersistedStore::with_backend(Rc::new(MemoryBackend::new()));
        seed_demo_data(&store);

        // mutar y volver a sembrar: no debe pisar nada
        let mut lot = store.lot();
        lot[0].status = SpotStatus::Reserved;
        store.set_lot(&lot);
        store.set_reservations(&[]);

        seed_demo_data(&store);
        assert_eq!(store.lot()[0].status, SpotStatus::Reserved);
        assert!(store.reservations().is_empty());
    }

    #[test]
    fn seeded_alerts_match_the_original_set() {
        let now = time::now();
        let alerts = demo_alerts(now);
        assert_eq!(alerts.len(), 3);
        assert_eq!(alerts[0].level, "info");
        assert_eq!(alerts[1].level, "warn");
        assert!(alerts[1].message.contains("heartbeat delayed"));
        // la de 24h atrás es la más antigua
        assert!(alerts[2].time < alerts[1].time);
        assert!(alerts[1].time < alerts[0].time);
    }

    #[test]
    fn rover_snapshot_has_the_demo_values() {
        let data = demo_rover_status(time::now());
        assert_eq!(data.battery_percent, 78);
        assert_eq!((data.location.x, data.location.y), (12.4, 3.1));
        assert_eq!(data.location.frame, "lot");
        assert_eq!(data.mode, "patrol");
        assert_eq!(data.last_task, "scan_row_A");
    }
}
