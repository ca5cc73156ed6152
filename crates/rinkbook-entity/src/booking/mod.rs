pub mod model;
pub mod status;

pub use model::{Booking, NewBooking, RentalRequest};
pub use status::BookingStatus;
