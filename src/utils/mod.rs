//! Utility modules for the Taskaio application.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Timestamp generation, parsing, and human-readable formatting
//! - [`validation`] - Parsing untyped task payloads and sanitizing task fields

pub mod datetime;
pub mod validation;
