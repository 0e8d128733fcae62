//! Route and role constants shared across services.

pub mod paths;
pub mod roles;
