use crate::commands::{CmdMessage, CmdResult, NewStudent};
use crate::error::Result;
use crate::model::Performance;
use crate::store::StudentStore;
use tracing::debug;

pub fn run<S: StudentStore>(store: &mut S, student: NewStudent) -> Result<CmdResult> {
    let performance = Performance::new(student.grades)?;
    let group = student.group.as_deref();
    store.add_student(&student.name, group, &performance)?;
    debug!(name = %student.name, ?group, "student added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added {} to group {} ({}).",
        student.name,
        group.unwrap_or_default(),
        performance
    )));
    Ok(result)
}
