//! Utility functions

pub mod helpers;

pub use helpers::*;
