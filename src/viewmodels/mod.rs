pub mod alerts_viewmodel;
pub mod auth_viewmodel;
pub mod dashboard_viewmodel;
pub mod lot_viewmodel;
pub mod reservations_viewmodel;

pub use alerts_viewmodel::{filter_alerts, AlertQuery, SortOrder};
pub use auth_viewmodel::{validate_login, validate_register};
pub use dashboard_viewmodel::{lot_summary, recent_alerts, LotSummary};
pub use lot_viewmodel::{cycle_spot, filter_spots, LotFilter};
pub use reservations_viewmodel::{delete_by_id, insert_new, next_id};
