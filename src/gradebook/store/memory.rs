use super::StudentStore;
use crate::error::{GradebookError, Result};
use crate::model::{Performance, Student};

#[derive(Debug, Clone)]
struct StudentRow {
    name: String,
    group_id: usize,
    performance: Performance,
}

/// In-memory [`StudentStore`] for tests. Mirrors the SQLite store's group
/// dedup, ordering and failing-filter rules.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    groups: Vec<String>,
    students: Vec<StudentRow>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    fn resolve_group(&mut self, label: &str) -> usize {
        match self.groups.iter().position(|g| g == label) {
            Some(id) => id,
            None => {
                self.groups.push(label.to_string());
                self.groups.len() - 1
            }
        }
    }

    fn to_student(&self, row: &StudentRow) -> Student {
        Student::new(
            row.name.clone(),
            self.groups[row.group_id].clone(),
            row.performance.clone(),
        )
    }
}

/// The error SQLite raises when a group label is NULL.
fn missing_group_error() -> GradebookError {
    GradebookError::Store(rusqlite::Error::SqliteFailure(
        rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_CONSTRAINT_NOTNULL),
        Some("NOT NULL constraint failed: groups.group_number".to_string()),
    ))
}

impl StudentStore for InMemoryStore {
    fn add_student(
        &mut self,
        name: &str,
        group: Option<&str>,
        performance: &Performance,
    ) -> Result<()> {
        let group = group.ok_or_else(missing_group_error)?;
        let group_id = self.resolve_group(group);
        self.students.push(StudentRow {
            name: name.to_string(),
            group_id,
            performance: performance.clone(),
        });
        Ok(())
    }

    fn list_students(&self) -> Result<Vec<Student>> {
        Ok(self.students.iter().map(|row| self.to_student(row)).collect())
    }

    fn list_failing(&self) -> Result<Vec<Student>> {
        Ok(self
            .students
            .iter()
            .filter(|row| row.performance.is_failing())
            .map(|row| self.to_student(row))
            .collect())
    }
}
