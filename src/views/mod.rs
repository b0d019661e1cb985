pub mod alerts;
pub mod dashboard;
pub mod login;
pub mod lot;
pub mod not_found;
pub mod register;
pub mod reservations;
pub mod rover;
pub mod settings;
pub mod shell;

pub use alerts::render_alerts;
pub use dashboard::render_dashboard;
pub use login::render_login;
pub use lot::render_lot;
pub use not_found::render_not_found;
pub use register::render_register;
pub use reservations::render_reservations;
pub use rover::render_rover;
pub use settings::render_settings;
pub use shell::{render_shell, Shell};
