//! Local content helpers
//!
//! Image encoding and document loading for the multimodal demos.

pub mod document;
pub mod media;
