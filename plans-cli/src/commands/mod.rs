//! Command implementations for the plans CLI

pub mod serve;

pub use serve::run_serve;
