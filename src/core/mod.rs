//! Core application modules
//!
//! This module contains configuration, constants, logging, wire logging,
//! and the API client.

pub mod client;
pub mod config;
pub mod constants;
pub mod logging;
pub mod wire;
