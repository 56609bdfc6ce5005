//! Shared utilities and common types for the AirSafe backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Common validation logic
//! - Cursor pagination for event feeds

pub mod pagination;
pub mod validation;
