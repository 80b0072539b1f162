//! Shared utilities used across the crate

pub mod error_handling;
