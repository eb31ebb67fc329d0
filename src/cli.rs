use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "reportd")]
#[command(about = "School report queries over a SQLite workspace", version)]
pub struct Cli {
    /// Workspace directory holding school.sqlite3
    #[arg(long, global = true, env = "REPORTD_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Answer JSON-lines requests on stdin (default)
    Serve,
    /// Run all twelve reports once and print them
    Demo(DemoArgs),
}

/// Sample identifiers used by the demo run.
#[derive(Debug, Clone, Args)]
pub struct DemoArgs {
    #[arg(long, default_value_t = 6)]
    pub best_discipline: i64,
    #[arg(long, default_value_t = 4)]
    pub averages_discipline: i64,
    #[arg(long, default_value_t = 2)]
    pub group: i64,
    #[arg(long, default_value_t = 3)]
    pub grades_group: i64,
    #[arg(long, default_value_t = 5)]
    pub grades_discipline: i64,
    #[arg(long, default_value_t = 5)]
    pub teacher: i64,
    #[arg(long, default_value_t = 29)]
    pub courses_student: i64,
    #[arg(long, default_value_t = 24)]
    pub student: i64,
    #[arg(long, default_value_t = 4)]
    pub latest_discipline: i64,
    #[arg(long, default_value_t = 2)]
    pub latest_group: i64,
}

#[derive(Parser)]
struct DemoOnly {
    #[command(flatten)]
    args: DemoArgs,
}

impl Default for DemoArgs {
    /// The `default_value_t` set above, with no flags given.
    fn default() -> Self {
        DemoOnly::parse_from(["demo"]).args
    }
}
