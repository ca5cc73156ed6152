//! Equipment inventory management.

pub mod service;

pub use service::EquipmentService;
