//! # Students CLI
//!
//! The `students` binary is intentionally thin: the CLI lives in `cli/`, and
//! this file only invokes `cli::run()` and turns errors into an exit code.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/gradebook/cli/)                             │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Logging, store opening and dispatch (commands.rs)        │
//! │  - Table / JSON rendering (render.rs)                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                 gradebook::api::GradebookApi
//! ```
//!
//! Argument errors are reported by clap (exit code 2) before the database is
//! touched. Any other failure is printed as `Error: ...` and exits with 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
