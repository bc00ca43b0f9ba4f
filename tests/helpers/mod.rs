//! Test helpers module
//!
//! This module provides utilities and helpers for testing the CharityConnect
//! crate against a seeded in-memory document store.

pub mod test_data;

pub use test_data::*;
