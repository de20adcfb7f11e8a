//! Environment utilities and constants for harmony-search

pub mod constants;
pub mod env_utils;

pub use constants::*;
pub use env_utils::*;
