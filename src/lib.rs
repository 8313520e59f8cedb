pub mod adapter;
pub mod cli;
pub mod error;
pub mod output;
pub mod root;
pub mod runner;

pub use error::{Result, StyleGateError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS: i32 = 1;
pub const EXIT_RUNTIME_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
