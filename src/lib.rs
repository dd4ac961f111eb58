//! utilkit library
//!
//! Pure tool transforms (`tools`), the embedded catalog, persisted state
//! services and the command-line handlers behind the `utilkit` binary.

// Module declarations
#[macro_use]
pub mod tools;

pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod services;
