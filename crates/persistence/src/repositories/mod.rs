//! Repository implementations for database access.

pub mod asthma_event;

pub use asthma_event::{AsthmaEventRepository, NewAsthmaEvent};
