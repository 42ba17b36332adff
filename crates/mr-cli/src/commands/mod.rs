//! Command implementations

pub mod common;
pub mod report;
