//! Test fixtures for courier-router.
//!
//! Provides realistic test data: real Stockholm pickup and delivery
//! locations plus helpers for building stops.

pub mod stockholm_locations;

pub use stockholm_locations::*;
