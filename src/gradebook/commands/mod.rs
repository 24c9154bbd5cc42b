use crate::model::Student;

pub mod add;
pub mod display;
pub mod find;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_students: Vec<Student>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_students(mut self, students: Vec<Student>) -> Self {
        self.listed_students = students;
        self
    }
}

/// Input for the `add` command.
///
/// `group` is optional on the command line but required by the store: a
/// student without one is rejected by the `groups.group_number` NOT NULL
/// constraint.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub group: Option<String>,
    pub grades: Vec<i64>,
}

impl NewStudent {
    pub fn new(name: impl Into<String>, group: Option<String>, grades: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            group,
            grades,
        }
    }
}
