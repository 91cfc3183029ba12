//! bibscrub CLI library
//!
//! This library provides the command-line interface for the bibscrub
//! record normalization and feature-pruning pipeline.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod progress;

pub use error::{CliError, CliResult};
