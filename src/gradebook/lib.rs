//! # Gradebook Architecture
//!
//! Gradebook records students (a name, a group label and five grades) in a local
//! SQLite file. The library holds everything except terminal concerns; the
//! `students` binary is a thin client over it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, handles exit codes     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, returns `CmdResult`           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / display / find over any `StudentStore`             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `StudentStore` trait                                     │
//! │  - SqliteStore (production), InMemoryStore (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process.
//! Diagnostics go through `tracing`; the binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction, SQLite schema and implementations
//! - [`model`]: `Student` and `Performance`
//! - [`config`]: Database location resolution
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
