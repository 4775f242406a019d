//! Command implementations for the shutter CLI.

pub mod config;
pub mod decode;
pub mod import;
pub mod info;
