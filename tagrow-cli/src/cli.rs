//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "tagrow",
    about = "Render a wrapping row of tags that truncates to an \"N+ more\" indicator"
)]
pub struct Args {
    /// JSON file with row settings (container_width, max_lines, spacing, density)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON file with the tags to show, as [{"id": ..., "display_name": ...}]
    #[arg(long)]
    pub tags: Option<PathBuf>,

    /// Row width in columns
    #[arg(long)]
    pub width: Option<i64>,

    /// Maximum number of lines before truncating
    #[arg(long)]
    pub max_lines: Option<i64>,

    /// Let the row wrap without a line limit
    #[arg(long, conflicts_with = "max_lines")]
    pub unbounded: bool,

    /// Columns between neighbouring tags
    #[arg(long)]
    pub spacing: Option<f32>,

    /// Blank rows between lines
    #[arg(long)]
    pub line_spacing: Option<f32>,

    /// Toggle selection of a tag id (repeatable)
    #[arg(long = "select", value_name = "ID")]
    pub select: Vec<String>,

    /// Activate the overflow indicator and show the hidden tags
    #[arg(long)]
    pub open_more: bool,

    /// Print the layout result as JSON instead of drawing it
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
