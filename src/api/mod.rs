//! API Facade
//!
//! Thin fetch-based client for the PowerPay backend, plus the mock dataset
//! used by the degraded read path.

pub mod client;
pub mod mock;

pub use client::*;
