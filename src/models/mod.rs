//! API data models
//!
//! This module contains data structures for the Chat Completions and
//! Responses endpoints.

pub mod chat;
pub mod responses;
