pub mod model;
pub mod rental;

pub use model::{Equipment, EquipmentKind, EquipmentStatus, NewEquipment, UpdateEquipment};
pub use rental::EquipmentRental;
