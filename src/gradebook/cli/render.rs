//! # Rendering
//!
//! Turns listed students into terminal output. Layout is done in Rust with
//! display-width aware padding so non-ASCII names keep the columns aligned.
//! Cells are padded, never truncated.

use console::style;
use gradebook::api::{CmdMessage, MessageLevel};
use gradebook::error::Result;
use gradebook::model::Student;
use unicode_width::UnicodeWidthStr;

pub const EMPTY_MESSAGE: &str = "List of students is empty.";

const INDEX_WIDTH: usize = 4;
const NAME_WIDTH: usize = 30;
const GROUP_WIDTH: usize = 10;
const PERFORMANCE_WIDTH: usize = 20;

const COLUMN_WIDTHS: [usize; 4] = [INDEX_WIDTH, NAME_WIDTH, GROUP_WIDTH, PERFORMANCE_WIDTH];
const HEADERS: [&str; 4] = ["No", "Name", "Group", "Performance"];

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
    Center,
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = width.saturating_sub(text.width());
    match align {
        Align::Left => format!("{}{}", text, " ".repeat(fill)),
        Align::Right => format!("{}{}", " ".repeat(fill), text),
        Align::Center => {
            let left = fill / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(fill - left))
        }
    }
}

fn border_line() -> String {
    let dashes: Vec<String> = COLUMN_WIDTHS.iter().map(|w| "-".repeat(*w)).collect();
    format!("+-{}-+", dashes.join("-+-"))
}

fn table_row(cells: [String; 4]) -> String {
    format!("| {} |", cells.join(" | "))
}

/// Renders students as a bordered table, or the empty message when there
/// are none. The result ends with a newline.
pub fn render_students(students: &[Student]) -> String {
    if students.is_empty() {
        return format!("{}\n", EMPTY_MESSAGE);
    }

    let line = border_line();
    let mut lines = vec![
        line.clone(),
        table_row(std::array::from_fn(|i| {
            pad(HEADERS[i], COLUMN_WIDTHS[i], Align::Center)
        })),
        line.clone(),
    ];

    for (idx, student) in students.iter().enumerate() {
        lines.push(table_row([
            pad(&(idx + 1).to_string(), INDEX_WIDTH, Align::Right),
            pad(&student.name, NAME_WIDTH, Align::Left),
            pad(&student.group, GROUP_WIDTH, Align::Left),
            pad(&student.performance.to_string(), PERFORMANCE_WIDTH, Align::Left),
        ]));
        lines.push(line.clone());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Renders students as a pretty JSON array.
pub fn render_students_json(students: &[Student]) -> Result<String> {
    let mut out = serde_json::to_string_pretty(students)?;
    out.push('\n');
    Ok(out)
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Success => println!("{}", style(&message.content).green()),
        }
    }
}
