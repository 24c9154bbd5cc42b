use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::StudentStore;

/// Lists students with a failing grade.
///
/// "Failing" is the store's textual rule: the stored grade string contains
/// `2` anywhere, see [`crate::model::Performance::is_failing`].
pub fn run<S: StudentStore>(store: &S) -> Result<CmdResult> {
    let students = store.list_failing()?;
    Ok(CmdResult::default().with_listed_students(students))
}
