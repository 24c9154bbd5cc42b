use super::schema;
use super::StudentStore;
use crate::error::Result;
use crate::model::{Performance, Student, FAILING_MARK};
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction};
use std::path::Path;
use tracing::debug;

const SELECT_STUDENTS: &str = "
    SELECT students.student_name, groups.group_number, students.performance
    FROM students
    INNER JOIN groups ON groups.group_id = students.group_id";

/// SQLite-backed implementation of [`StudentStore`].
///
/// The connection lives as long as the store; the CLI opens one per
/// invocation and drops it before exiting.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database at `path`, creating missing tables.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = schema::open_database(path.as_ref())?;
        Ok(Self { conn })
    }

    /// Opens an in-memory database (for testing).
    pub fn in_memory() -> Result<Self> {
        let conn = schema::open_in_memory()?;
        Ok(Self { conn })
    }

    fn query_students(&self, filter: Option<&str>) -> Result<Vec<Student>> {
        let rows: Vec<(String, String, String)> = match filter {
            Some(pattern) => {
                let sql = format!(
                    "{} WHERE students.performance LIKE ?1 ORDER BY students.student_id",
                    SELECT_STUDENTS
                );
                let mut stmt = self.conn.prepare(&sql)?;
                let mapped = stmt.query_map(params![pattern], student_row)?;
                mapped.collect::<rusqlite::Result<_>>()?
            }
            None => {
                let sql = format!("{} ORDER BY students.student_id", SELECT_STUDENTS);
                let mut stmt = self.conn.prepare(&sql)?;
                let mapped = stmt.query_map([], student_row)?;
                mapped.collect::<rusqlite::Result<_>>()?
            }
        };

        debug!(count = rows.len(), "loaded student rows");

        rows.into_iter()
            .map(|(name, group, performance)| {
                performance
                    .parse::<Performance>()
                    .map(|performance| Student::new(name, group, performance))
            })
            .collect()
    }
}

fn student_row(row: &Row<'_>) -> rusqlite::Result<(String, String, String)> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
}

/// Returns the id of the group labelled `label`, inserting it if unseen.
///
/// A `None` label is bound as NULL: the lookup finds nothing and the insert
/// fails on the NOT NULL constraint.
///
/// Lookup and insert are separate statements, so two writers racing on the
/// same new label could both insert. Only one process uses the file at a time.
fn resolve_group(tx: &Transaction<'_>, label: Option<&str>) -> Result<i64> {
    let existing: Option<i64> = tx
        .query_row(
            "SELECT group_id FROM groups WHERE group_number = ?1",
            params![label],
            |row| row.get(0),
        )
        .optional()?;

    if let Some(id) = existing {
        debug!(group = ?label, id, "resolved existing group");
        return Ok(id);
    }

    tx.execute(
        "INSERT INTO groups (group_number) VALUES (?1)",
        params![label],
    )?;
    let id = tx.last_insert_rowid();
    debug!(group = ?label, id, "created group");
    Ok(id)
}

impl StudentStore for SqliteStore {
    fn add_student(
        &mut self,
        name: &str,
        group: Option<&str>,
        performance: &Performance,
    ) -> Result<()> {
        let tx = self.conn.transaction()?;
        let group_id = resolve_group(&tx, group)?;
        tx.execute(
            "INSERT INTO students (student_name, group_id, performance) VALUES (?1, ?2, ?3)",
            params![name, group_id, performance.encode()],
        )?;
        tx.commit()?;
        debug!(name, group_id, "inserted student");
        Ok(())
    }

    fn list_students(&self) -> Result<Vec<Student>> {
        self.query_students(None)
    }

    fn list_failing(&self) -> Result<Vec<Student>> {
        self.query_students(Some(&format!("%{}%", FAILING_MARK)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GradebookError;
    use tempfile::TempDir;

    fn perf(grades: &[i64]) -> Performance {
        Performance::new(grades.to_vec()).unwrap()
    }

    fn count(store: &SqliteStore, table: &str) -> i64 {
        store
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                row.get(0)
            })
            .unwrap()
    }

    #[test]
    fn add_then_list_round_trips() {
        let mut store = SqliteStore::in_memory().unwrap();
        store.add_student("A", Some("1"), &perf(&[1, 2, 3, 4, 5])).unwrap();

        let students = store.list_students().unwrap();
        assert_eq!(students, vec![Student::new("A", "1", perf(&[1, 2, 3, 4, 5]))]);
    }

    #[test]
    fn stores_grades_as_comma_joined_text() {
        let mut store = SqliteStore::in_memory().unwrap();
        store.add_student("A", Some("1"), &perf(&[5, 4, 3, 2, 1])).unwrap();

        let stored: String = store
            .conn
            .query_row("SELECT performance FROM students", [], |row| row.get(0))
            .unwrap();
        assert_eq!(stored, "5,4,3,2,1");
    }

    #[test]
    fn reuses_group_for_same_label() {
        let mut store = SqliteStore::in_memory().unwrap();
        store.add_student("A", Some("1"), &perf(&[1, 2, 3, 4, 5])).unwrap();
        store.add_student("B", Some("1"), &perf(&[3, 3, 3, 3, 3])).unwrap();
        store.add_student("C", Some("2"), &perf(&[4, 4, 4, 4, 4])).unwrap();

        assert_eq!(count(&store, "groups"), 2);
        assert_eq!(count(&store, "students"), 3);

        let groups: Vec<String> = store
            .list_students()
            .unwrap()
            .into_iter()
            .map(|s| s.group)
            .collect();
        assert_eq!(groups, vec!["1", "1", "2"]);
    }

    #[test]
    fn lists_in_insertion_order() {
        let mut store = SqliteStore::in_memory().unwrap();
        for (name, group) in [("A", "1"), ("B", "2"), ("C", "3")] {
            store.add_student(name, Some(group), &perf(&[1, 2, 3, 4, 5])).unwrap();
        }

        let names: Vec<String> = store
            .list_students()
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn missing_group_hits_not_null_constraint() {
        let mut store = SqliteStore::in_memory().unwrap();
        let err = store
            .add_student("A", None, &perf(&[5, 5, 5, 5, 5]))
            .unwrap_err();

        assert!(matches!(err, GradebookError::Store(_)));
        assert!(err
            .to_string()
            .contains("NOT NULL constraint failed: groups.group_number"));
        assert_eq!(count(&store, "groups"), 0);
        assert_eq!(count(&store, "students"), 0);
    }

    #[test]
    fn failing_filter_matches_textual_two() {
        let mut store = SqliteStore::in_memory().unwrap();
        store.add_student("A", Some("1"), &perf(&[1, 2, 3, 4, 5])).unwrap();
        store.add_student("B", Some("2"), &perf(&[1, 1, 3, 4, 5])).unwrap();
        store.add_student("C", Some("3"), &perf(&[1, 2, 3, 4, 5])).unwrap();

        let failing = store.list_failing().unwrap();
        assert_eq!(
            failing,
            vec![
                Student::new("A", "1", perf(&[1, 2, 3, 4, 5])),
                Student::new("C", "3", perf(&[1, 2, 3, 4, 5])),
            ]
        );
    }

    #[test]
    fn failing_filter_ignores_group_label() {
        let mut store = SqliteStore::in_memory().unwrap();
        store.add_student("B", Some("2"), &perf(&[1, 1, 3, 4, 5])).unwrap();
        assert!(store.list_failing().unwrap().is_empty());
    }

    #[test]
    fn failing_filter_matches_two_inside_larger_grade() {
        let mut store = SqliteStore::in_memory().unwrap();
        store.add_student("D", Some("1"), &perf(&[12, 3, 3, 4, 5])).unwrap();
        assert_eq!(store.list_failing().unwrap().len(), 1);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = SqliteStore::in_memory().unwrap();
        assert!(store.list_students().unwrap().is_empty());
        assert!(store.list_failing().unwrap().is_empty());
    }

    #[test]
    fn malformed_stored_grades_surface_as_error() {
        let store = SqliteStore::in_memory().unwrap();
        store
            .conn
            .execute("INSERT INTO groups (group_number) VALUES ('1')", [])
            .unwrap();
        store
            .conn
            .execute(
                "INSERT INTO students (student_name, group_id, performance) VALUES ('X', 1, 'a,b')",
                [],
            )
            .unwrap();
        assert!(store.list_students().is_err());
    }

    #[test]
    fn data_persists_across_reopen() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("students.db");

        {
            let mut store = SqliteStore::open(&path).unwrap();
            store.add_student("A", Some("1"), &perf(&[1, 2, 3, 4, 5])).unwrap();
        }

        let mut store = SqliteStore::open(&path).unwrap();
        store.add_student("B", Some("1"), &perf(&[5, 5, 5, 5, 5])).unwrap();

        assert_eq!(store.list_students().unwrap().len(), 2);
        assert_eq!(count(&store, "groups"), 1);
    }
}
