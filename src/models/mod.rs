//! Data models for Solmar

pub mod blackout;
pub mod claims;
pub mod guest;
pub mod report;
pub mod reservation;
pub mod room;
pub mod tariff;

// Re-export commonly used types
pub use blackout::Blackout;
pub use claims::{Capability, StaffClaims, StaffRole};
pub use guest::Guest;
pub use report::{CalendarCell, DayRow};
pub use reservation::{Reservation, ReservationDetails, ReservationStatus};
pub use room::Room;
pub use tariff::Tariff;
