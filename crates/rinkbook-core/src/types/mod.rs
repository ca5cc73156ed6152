//! Shared types used across the Rinkbook crates.

pub mod money;
pub mod pagination;
pub mod time_range;

pub use money::round_money;
pub use time_range::TimeRange;
