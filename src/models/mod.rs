pub mod alert;
pub mod reservation;
pub mod rover;
pub mod session;
pub mod settings;
pub mod spot;

pub use alert::Alert;
pub use reservation::Reservation;
pub use rover::{RoverLocation, RoverStatus};
pub use session::{Session, User};
pub use settings::Settings;
pub use spot::{Spot, SpotStatus};
