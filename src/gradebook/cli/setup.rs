use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use gradebook::config::DB_ENV_VAR;
use gradebook::model::GRADE_COUNT;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width bordered table
    #[default]
    Table,
    /// Pretty-printed JSON array
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "students", bin_name = "students", version)]
#[command(about = "Keep a gradebook of students in a local SQLite file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// The database file name
    #[arg(long, global = true, env = DB_ENV_VAR, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new student
    Add {
        /// The student's name
        #[arg(short, long)]
        name: String,

        /// The student's group
        #[arg(short, long)]
        group: Option<String>,

        /// The student's performance (5 grades)
        #[arg(
            short,
            long,
            required = true,
            num_args = GRADE_COUNT,
            action = ArgAction::Set,
            allow_negative_numbers = true,
            value_name = "GRADE"
        )]
        performance: Vec<i64>,
    },

    /// Display all students
    Display {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Select the students with a failing grade
    Find {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("students").chain(args.iter().copied()))
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_with_five_grades() {
        let cli = parse(&["add", "--name", "A", "--group", "1", "--performance", "1", "2", "3", "4", "5"])
            .unwrap();
        match cli.command {
            Commands::Add {
                name,
                group,
                performance,
            } => {
                assert_eq!(name, "A");
                assert_eq!(group.as_deref(), Some("1"));
                assert_eq!(performance, vec![1, 2, 3, 4, 5]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_short_flags_and_missing_group() {
        let cli = parse(&["add", "-n", "B", "-p", "5", "4", "3", "2", "1"]).unwrap();
        match cli.command {
            Commands::Add { group, performance, .. } => {
                assert!(group.is_none());
                assert_eq!(performance, vec![5, 4, 3, 2, 1]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_too_few_grades() {
        let err = parse(&["add", "-n", "A", "-p", "1", "2", "3", "4"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WrongNumberOfValues);
    }

    #[test]
    fn rejects_too_many_grades() {
        assert!(parse(&["add", "-n", "A", "-p", "1", "2", "3", "4", "5", "6"]).is_err());
    }

    #[test]
    fn rejects_non_integer_grade() {
        let err = parse(&["add", "-n", "A", "-p", "1", "2", "x", "4", "5"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn requires_name_and_performance() {
        let err = parse(&["add", "-p", "1", "2", "3", "4", "5"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = parse(&["add", "-n", "A"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn db_is_accepted_after_subcommand() {
        let cli = parse(&["display", "--db", "/tmp/x.db"]).unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/x.db")));
        assert!(matches!(
            cli.command,
            Commands::Display {
                format: OutputFormat::Table
            }
        ));
    }

    #[test]
    fn parses_json_format_for_find() {
        let cli = parse(&["find", "--format", "json"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Find {
                format: OutputFormat::Json
            }
        ));
    }

    #[test]
    fn requires_a_subcommand() {
        assert!(parse(&[]).is_err());
    }
}
