//! CLI command implementations.

pub mod callback;
pub mod classify;
pub mod sign;
pub mod verify;
