//! Testing infrastructure for hitsplit integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Isolated working directory with input files and CLI execution
//! - `assertions`: Checks on the produced NDJSON tables and diagnostics
//! - `fixtures`: Session line generation

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
