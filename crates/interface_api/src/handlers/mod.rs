//! Request handlers

pub mod fund;
pub mod health;
