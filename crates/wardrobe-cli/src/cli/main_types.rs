use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wardrobe-cli")]
#[command(about = "Batch calculator for sliding wardrobe doors, liners and dropdowns")]
#[command(version)]
#[command(after_help = "Examples:
  wardrobe-cli template --output openings.toml   # Write a starter openings file
  wardrobe-cli calc openings.toml                # Results table for every opening
  wardrobe-cli calc openings.toml --format csv   # CSV with every field
  wardrobe-cli calc openings.toml --problems-only
  wardrobe-cli show openings.toml --row 2        # Door sizes sheet for row 2
  wardrobe-cli layout openings.toml --row 2      # Diagram layout as JSON
  wardrobe-cli config show                       # Show system constants

Environment Variables:
  WARDROBE_FORMAT   Default output format for calc (table, csv, json)
  NO_COLOR          Disable coloured tables")]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Custom configuration directory path
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Dimension every opening in a file
    Calc(CalcArgs),
    /// Door sizes sheet for one opening
    Show(RowArgs),
    /// Diagram layout for one opening, as JSON
    Layout(LayoutArgs),
    /// Write a starter openings file
    Template {
        /// Destination (.toml or .json)
        #[arg(short, long, default_value = "openings.toml")]
        output: PathBuf,
    },
    /// Configuration management (show, init)
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective system constants and settings
    Show,
    /// Write a settings file containing the default constants
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}

/// Options shared by commands that read an openings file
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Openings file (.toml or .json)
    pub file: PathBuf,

    /// Reject widths, heights and door counts below their minimum instead of clamping
    #[arg(long, help_heading = "Input Options")]
    pub strict: bool,
}

#[derive(Args, Debug)]
#[command(after_help = "Examples:
  wardrobe-cli calc openings.toml
  wardrobe-cli calc openings.json --format json --output results.json
  wardrobe-cli calc openings.toml --problems-only --strict")]
pub struct CalcArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format: table, csv or json (default from WARDROBE_FORMAT or config)
    #[arg(short, long, help_heading = "Output Options")]
    pub format: Option<String>,

    /// Write output to a file instead of stdout
    #[arg(short, long, help_heading = "Output Options")]
    pub output: Option<PathBuf>,

    /// Only list openings that need checking
    #[arg(long, help_heading = "Output Options")]
    pub problems_only: bool,

    /// Disable coloured tables
    #[arg(long, help_heading = "Output Options")]
    pub no_color: bool,
}

#[derive(Args, Debug)]
pub struct RowArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Row number, starting at 1
    #[arg(short, long)]
    pub row: usize,

    /// Disable coloured tables
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Args, Debug)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Row number, starting at 1
    #[arg(short, long)]
    pub row: usize,

    /// Write the layout JSON to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
