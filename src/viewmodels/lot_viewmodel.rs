// ============================================================================
// LOT VIEWMODEL - Filtro y mutación optimista de plazas
// ============================================================================

use crate::models::{Spot, SpotStatus};

/// Filtro del grid: todas o un estado concreto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LotFilter {
    All,
    Status(SpotStatus),
}

impl LotFilter {
    /// Parsear el value del select ("all" o un estado)
    pub fn parse(value: &str) -> LotFilter {
        match SpotStatus::parse(value) {
            Some(status) => LotFilter::Status(status),
            None => LotFilter::All,
        }
    }
}

/// Plazas visibles según el filtro, en el orden de la colección
pub fn filter_spots(spots: &[Spot], filter: LotFilter) -> Vec<Spot> {
    match filter {
        LotFilter::All => spots.to_vec(),
        LotFilter::Status(status) => spots
            .iter()
            .filter(|s| s.status == status)
            .cloned()
            .collect(),
    }
}

/// Ciclar el estado de la plaza `id` in place (free→occupied→reserved→free).
/// Devuelve el nuevo estado, o None si el id no existe.
pub fn cycle_spot(spots: &mut [Spot], id: &str) -> Option<SpotStatus> {
    let spot = spots.iter_mut().find(|s| s.id == id)?;
    spot.status = spot.status.cycled();
    Some(spot.status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::demo_data::demo_lot;

    #[test]
    fn filter_all_keeps_everything() {
        let spots = demo_lot();
        assert_eq!(filter_spots(&spots, LotFilter::parse("all")).len(), 50);
    }

    #[test]
    fn filter_by_status_keeps_only_that_status() {
        let spots = demo_lot();
        let reserved = filter_spots(&spots, LotFilter::parse("reserved"));
        assert_eq!(reserved.len(), 10);
        assert!(reserved.iter().all(|s| s.status == SpotStatus::Reserved));
    }

    #[test]
    fn cycling_a_spot_does_not_touch_the_others() {
        let mut spots = demo_lot();
        let before: Vec<_> = spots.clone();

        // A01 arranca free
        assert_eq!(cycle_spot(&mut spots, "A01"), Some(SpotStatus::Occupied));
        assert_eq!(cycle_spot(&mut spots, "A01"), Some(SpotStatus::Reserved));
        assert_eq!(cycle_spot(&mut spots, "A01"), Some(SpotStatus::Free));

        for (a, b) in spots.iter().zip(before.iter()).skip(1) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn cycling_an_unknown_id_is_a_noop() {
        let mut spots = demo_lot();
        assert_eq!(cycle_spot(&mut spots, "Z99"), None);
        assert_eq!(spots, demo_lot());
    }
}
