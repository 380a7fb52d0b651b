//! Command handlers for the Storable CLI.

pub mod config;
pub mod misc;
pub mod values;
