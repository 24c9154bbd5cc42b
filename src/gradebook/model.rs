use crate::error::{GradebookError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Number of grades recorded for every student.
pub const GRADE_COUNT: usize = 5;

/// Separator used in the stored form of a [`Performance`].
pub const GRADE_SEPARATOR: char = ',';

/// The grade that marks a student as failing.
pub const FAILING_MARK: &str = "2";

/// The ordered grades of one student.
///
/// Stored as a comma-joined decimal string (`"1,2,3,4,5"`), which must parse
/// back to the same sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Performance(Vec<i64>);

impl Performance {
    pub fn new(grades: Vec<i64>) -> Result<Self> {
        if grades.len() != GRADE_COUNT {
            return Err(GradebookError::InvalidPerformance(format!(
                "expected {} grades, got {}",
                GRADE_COUNT,
                grades.len()
            )));
        }
        Ok(Self(grades))
    }

    pub fn grades(&self) -> &[i64] {
        &self.0
    }

    /// The stored form: grades joined with `,`, no spaces.
    pub fn encode(&self) -> String {
        self.join_grades(&GRADE_SEPARATOR.to_string())
    }

    fn join_grades(&self, sep: &str) -> String {
        self.0
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(sep)
    }

    /// Whether the stored form contains the failing mark anywhere.
    ///
    /// This is a textual match on [`Performance::encode`], so a grade of 12
    /// counts too. The SQL store applies the same rule with `LIKE '%2%'`.
    pub fn is_failing(&self) -> bool {
        self.encode().contains(FAILING_MARK)
    }
}

impl FromStr for Performance {
    type Err = GradebookError;

    /// Parses the stored form. Any count of grades is accepted here so rows
    /// written by other tools still load.
    fn from_str(s: &str) -> Result<Self> {
        s.split(GRADE_SEPARATOR)
            .map(|part| {
                part.trim().parse::<i64>().map_err(|_| {
                    GradebookError::InvalidPerformance(format!("'{}' in \"{}\"", part, s))
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }
}

impl fmt::Display for Performance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join_grades(", "))
    }
}

/// A student as listed by the query layer, with the group label joined in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub name: String,
    pub group: String,
    pub performance: Performance,
}

impl Student {
    pub fn new(name: impl Into<String>, group: impl Into<String>, performance: Performance) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
            performance,
        }
    }
}
