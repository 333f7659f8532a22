//! Route handlers, one module per resource

pub mod buy;
pub mod health;
pub mod plans;
