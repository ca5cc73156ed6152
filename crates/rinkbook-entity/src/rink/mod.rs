pub mod model;
pub mod status;

pub use model::{NewRink, Rink, UpdateRink};
pub use status::RinkStatus;
