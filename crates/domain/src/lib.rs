//! Domain layer for the AirSafe backend.
//!
//! This crate contains:
//! - Domain models (EnvironmentalReading, SafetyZone, AsthmaEvent)
//! - Pure domain services (safety classification, zone rendering)

pub mod models;
pub mod services;
