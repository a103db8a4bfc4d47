//! Molint core library.
//!
//! This crate exposes programmatic APIs for structurally checking trees of
//! Modelica-like source files before they are handed to a full modeling
//! environment. The checks are lexical heuristics, not a parser: they catch
//! obvious mistakes (unbalanced brackets, mismatched block definitions,
//! missing required sections) without building an AST or resolving names.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `checks`: The per-file structural pattern checks (the core).
//! - `lint`: Directory walk, per-file orchestration, summary accumulation.
//! - `models`: Data models for diagnostics, reports, and the run summary.
//! - `output`: Human/JSON printers for check runs.
//! - `sim`: Boundary trait for the downstream modeling environment
//!   (interface only; the lint pipeline never calls it).

pub mod checks;
pub mod cli;
pub mod config;
pub mod lint;
pub mod models;
pub mod output;
pub mod sim;
