use super::render::{print_messages, render_students, render_students_json};
use super::setup::{Cli, Commands, OutputFormat};
use clap::Parser;
use gradebook::api::GradebookApi;
use gradebook::config::GradebookConfig;
use gradebook::error::Result;
use gradebook::model::Student;
use gradebook::store::sqlite::SqliteStore;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

type Api = GradebookApi<SqliteStore>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = GradebookConfig::resolve(cli.db);
    debug!(db = %config.db_path().display(), "using database");
    let mut api = GradebookApi::new(SqliteStore::open(config.db_path())?);

    match cli.command {
        Commands::Add {
            name,
            group,
            performance,
        } => handle_add(&mut api, name, group, performance),
        Commands::Display { format } => handle_display(&api, format),
        Commands::Find { format } => handle_find(&api, format),
    }
}

/// Diagnostics go to stderr so table output stays machine-readable.
fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_add(
    api: &mut Api,
    name: String,
    group: Option<String>,
    grades: Vec<i64>,
) -> Result<()> {
    let result = api.add_student(name, group, grades)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_display(api: &Api, format: OutputFormat) -> Result<()> {
    let result = api.list_students()?;
    print_students(&result.listed_students, format)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_find(api: &Api, format: OutputFormat) -> Result<()> {
    let result = api.find_failing()?;
    print_students(&result.listed_students, format)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_students(students: &[Student], format: OutputFormat) -> Result<()> {
    let out = match format {
        OutputFormat::Table => render_students(students),
        OutputFormat::Json => render_students_json(students)?,
    };
    print!("{}", out);
    Ok(())
}
