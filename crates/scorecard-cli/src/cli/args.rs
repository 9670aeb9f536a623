use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "scorecard",
    version,
    about = "Record student scores and predict a faculty from the strongest subject"
)]
pub struct Cli {
    /// Optional YAML config (db_path, log_level)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Database file; overrides config and SCORECARD_DB
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create the database file and table
    Init,
    /// Store a new student record
    Submit(SubmitArgs),
    /// Overwrite the record with the given id
    Update(UpdateArgs),
    /// Remove the record with the given id
    Delete(IdArgs),
    /// List every record in id order
    List(ListArgs),
    /// Show a single record
    Show(IdArgs),
    /// Print the predicted category without storing anything
    Classify(ScoreArgs),
    /// Append the rows of an older score database
    ImportLegacy(ImportLegacyArgs),
    /// Print the version
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Subject A score (biology)
    #[arg(long, allow_hyphen_values = true)]
    pub score_a: String,

    /// Subject B score (physics)
    #[arg(long, allow_hyphen_values = true)]
    pub score_b: String,

    /// Subject C score (english)
    #[arg(long, allow_hyphen_values = true)]
    pub score_c: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct SubmitArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub name: String,

    #[command(flatten)]
    pub scores: ScoreArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct UpdateArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub id: String,

    #[arg(long, allow_hyphen_values = true)]
    pub name: String,

    #[command(flatten)]
    pub scores: ScoreArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct IdArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub id: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ListArgs {
    /// Output format: text | json
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Write to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ImportLegacyArgs {
    /// Path of the old database (tables `siswa` or `nilai_siswa`)
    #[arg(long)]
    pub from: PathBuf,
}
