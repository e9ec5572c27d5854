//! Shift Billing Engine
//!
//! This crate provides functionality for billing worked shifts against
//! company rate configurations: shift durations, day classification,
//! tiered and flat rate application, and per-period aggregation.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
