//! reittiolainen
//!
//! Command line client for the Reittiopas journey planner. The binary in
//! `main.rs` wires these modules together; they live in a library so the
//! handlers and argument parsing can be tested directly.

pub mod cli;
pub mod commands;
pub mod config;
