//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. It dispatches to `commands::*` and hands back `CmdResult` values;
//! it never prints and holds no logic of its own.
//!
//! `GradebookApi<S: StudentStore>` is generic over the backend:
//! - Production: `GradebookApi<SqliteStore>`
//! - Testing: `GradebookApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::store::StudentStore;

pub struct GradebookApi<S: StudentStore> {
    store: S,
}

impl<S: StudentStore> GradebookApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_student(
        &mut self,
        name: impl Into<String>,
        group: Option<String>,
        grades: Vec<i64>,
    ) -> Result<CmdResult> {
        commands::add::run(&mut self.store, NewStudent::new(name, group, grades))
    }

    pub fn list_students(&self) -> Result<CmdResult> {
        commands::display::run(&self.store)
    }

    pub fn find_failing(&self) -> Result<CmdResult> {
        commands::find::run(&self.store)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, NewStudent};
