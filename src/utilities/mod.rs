//! Shared utilities.

pub mod errors;
pub mod string_utils;
