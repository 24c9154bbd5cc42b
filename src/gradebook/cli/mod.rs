//! # CLI Behavior
//!
//! This is one UI client for the gradebook library. It is the only place that
//! knows about stdout/stderr, exit codes and output formatting.
//!
//! Every invocation opens the database (creating tables on first use), runs a
//! single command and exits:
//!
//! - `students add -n NAME [-g GROUP] -p G1 G2 G3 G4 G5`
//! - `students display [--format table|json]`
//! - `students find [--format table|json]`
//!
//! The database path comes from `--db`, then `GRADEBOOK_DB`, then
//! `~/students.db`.

mod commands;
mod render;
mod setup;

pub use commands::run;
