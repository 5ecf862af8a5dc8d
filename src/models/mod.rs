//! Core data models for batch conversion

pub mod job;
pub mod outcome;

pub use job::*;
pub use outcome::*;
