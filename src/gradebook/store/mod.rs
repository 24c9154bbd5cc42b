//! # Storage Layer
//!
//! The [`StudentStore`] trait is the storage abstraction the command layer
//! works against.
//!
//! ## Implementations
//!
//! - [`sqlite::SqliteStore`]: Production store in a single SQLite file
//!   - Tables `groups` and `students`, created on open (see [`schema`])
//!   - Grades kept as a comma-joined string in `students.performance`
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Same ordering and filtering rules as the SQLite store
//!
//! ## Storage Format
//!
//! ```text
//! groups(group_id, group_number)
//! students(student_id, student_name, group_id -> groups, performance)
//! ```
//!
//! Groups are created lazily: the first student added with an unseen label
//! creates the group row, later students reuse it.

use crate::error::Result;
use crate::model::{Performance, Student};

pub mod memory;
pub mod schema;
pub mod sqlite;

/// Abstract interface for student storage.
pub trait StudentStore {
    /// Insert a student, creating its group if the label is new.
    ///
    /// A `None` group violates the `groups.group_number` NOT NULL constraint
    /// and fails with [`crate::error::GradebookError::Store`], writing nothing.
    fn add_student(
        &mut self,
        name: &str,
        group: Option<&str>,
        performance: &Performance,
    ) -> Result<()>;

    /// All students in insertion order.
    fn list_students(&self) -> Result<Vec<Student>>;

    /// Students whose stored grades contain a failing mark, in insertion order.
    fn list_failing(&self) -> Result<Vec<Student>>;
}
