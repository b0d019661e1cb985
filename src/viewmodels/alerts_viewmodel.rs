// ============================================================================
// ALERTS VIEWMODEL - Búsqueda, filtro por level y orden
// ============================================================================
// Se recalcula en cada cambio de input, sin debounce. Los timestamps son
// ISO-8601 así que ordenar por tiempo es ordenar los strings.
// ============================================================================

use crate::models::Alert;

/// Dirección del orden temporal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Newest,
    Oldest,
}

impl SortOrder {
    pub fn parse(value: &str) -> SortOrder {
        if value == "oldest" {
            SortOrder::Oldest
        } else {
            SortOrder::Newest
        }
    }
}

/// Query de la vista de alertas
#[derive(Debug, Clone)]
pub struct AlertQuery {
    /// Substring del mensaje, case-insensitive
    pub search: String,
    /// "all" o un level concreto
    pub level: String,
    pub sort: SortOrder,
}

impl Default for AlertQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            level: "all".to_string(),
            sort: SortOrder::Newest,
        }
    }
}

/// Aplicar level, búsqueda y orden sobre la colección
pub fn filter_alerts(alerts: &[Alert], query: &AlertQuery) -> Vec<Alert> {
    let text = query.search.trim().to_lowercase();

    let mut out: Vec<Alert> = alerts
        .iter()
        .filter(|a| query.level == "all" || a.level == query.level)
        .filter(|a| text.is_empty() || a.message.to_lowercase().contains(&text))
        .cloned()
        .collect();

    match query.sort {
        SortOrder::Newest => out.sort_by(|a, b| b.time.cmp(&a.time)),
        SortOrder::Oldest => out.sort_by(|a, b| a.time.cmp(&b.time)),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::demo_data::demo_alerts;
    use crate::utils::time;

    fn seeded() -> Vec<Alert> {
        demo_alerts(time::now())
    }

    #[test]
    fn search_is_case_insensitive_substring_over_message() {
        let query = AlertQuery {
            search: "HEARTBEAT".to_string(),
            ..AlertQuery::default()
        };
        let out = filter_alerts(&seeded(), &query);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].message, "Rover heartbeat delayed (simulated).");
    }

    #[test]
    fn level_warn_returns_the_same_single_alert() {
        let query = AlertQuery {
            level: "warn".to_string(),
            ..AlertQuery::default()
        };
        let out = filter_alerts(&seeded(), &query);
        assert_eq!(out.len(), 1);
        assert!(out[0].message.contains("heartbeat delayed"));
    }

    #[test]
    fn oldest_sort_puts_the_24h_entry_first() {
        let query = AlertQuery {
            sort: SortOrder::parse("oldest"),
            ..AlertQuery::default()
        };
        let out = filter_alerts(&seeded(), &query);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].message, "Lot occupancy updated.");
        assert!(out[0].time < out[1].time && out[1].time < out[2].time);
    }

    #[test]
    fn newest_sort_is_the_default() {
        let out = filter_alerts(&seeded(), &AlertQuery::default());
        assert_eq!(out[0].message, "Console started (demo mode).");
    }

    #[test]
    fn whitespace_only_search_matches_everything() {
        let query = AlertQuery {
            search: "   ".to_string(),
            ..AlertQuery::default()
        };
        assert_eq!(filter_alerts(&seeded(), &query).len(), 3);
    }
}
