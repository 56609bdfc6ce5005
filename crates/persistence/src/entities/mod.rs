//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod asthma_event;

pub use asthma_event::AsthmaEventEntity;
