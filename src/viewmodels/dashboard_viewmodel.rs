// ============================================================================
// DASHBOARD VIEWMODEL - Agregados para el dashboard
// ============================================================================

use crate::models::{Alert, Spot, SpotStatus};

/// Contadores agregados del lot
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LotSummary {
    pub free: usize,
    pub occupied: usize,
}

/// Derivar los contadores free/occupied de la colección actual de plazas
pub fn lot_summary(spots: &[Spot]) -> LotSummary {
    LotSummary {
        free: spots.iter().filter(|s| s.status == SpotStatus::Free).count(),
        occupied: spots
            .iter()
            .filter(|s| s.status == SpotStatus::Occupied)
            .count(),
    }
}

/// Las `limit` alertas más recientes, ordenadas por tiempo descendente
pub fn recent_alerts(alerts: &[Alert], limit: usize) -> Vec<Alert> {
    let mut out = alerts.to_vec();
    out.sort_by(|a, b| b.time.cmp(&a.time));
    out.truncate(limit);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::demo_data::{demo_alerts, demo_lot};
    use crate::utils::time;

    #[test]
    fn summary_counts_free_and_occupied() {
        let summary = lot_summary(&demo_lot());
        assert_eq!(summary, LotSummary { free: 30, occupied: 10 });
    }

    #[test]
    fn recent_alerts_are_newest_first_and_capped() {
        let alerts = demo_alerts(time::now());
        let recent = recent_alerts(&alerts, 6);
        assert_eq!(recent.len(), 3);
        assert!(recent[0].time >= recent[1].time);
        assert!(recent[1].time >= recent[2].time);
        assert_eq!(recent[2].message, "Lot occupancy updated.");

        assert_eq!(recent_alerts(&alerts, 2).len(), 2);
    }
}
