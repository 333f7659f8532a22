//! Repository implementations for database access

pub mod plans;

pub use plans::{DbError, PlanRepo};
