use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod convert;
mod logging;
mod question;
mod schema;
mod settings;
mod writer;

use crate::settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "quiz-csv")]
#[command(about = "Converts question-bank CSV files into a quiz JSON file")]
#[command(version)]
struct Cli {
    /// Directory scanned for input files
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Extension of the input files
    #[arg(long)]
    extension: Option<String>,

    /// JSON file to write, overwritten if it exists
    #[arg(long)]
    output: Option<PathBuf>,

    /// Value of the authored_by field
    #[arg(long)]
    author: Option<String>,

    /// Prefix of every question id
    #[arg(long)]
    id_prefix: Option<String>,

    /// Minimum number of digits in a question id
    #[arg(long)]
    id_width: Option<usize>,

    /// Fail if any answer letter could not be recognized
    #[arg(long)]
    strict: bool,
}

impl Cli {
    fn into_settings(self) -> Settings {
        let mut settings = Settings::default();
        if let Some(input_dir) = self.input_dir {
            settings.input_dir = input_dir;
        }
        if let Some(extension) = self.extension {
            settings.extension = extension.trim_start_matches('.').to_owned();
        }
        if let Some(output) = self.output {
            settings.output = output;
        }
        if let Some(author) = self.author {
            settings.author = author;
        }
        if let Some(id_prefix) = self.id_prefix {
            settings.id_format.prefix = id_prefix;
        }
        if let Some(id_width) = self.id_width {
            settings.id_format.width = id_width;
        }
        settings.strict = self.strict;
        settings
    }
}

fn main() -> Result<()> {
    logging::init_logging();
    let settings = Cli::parse().into_settings();

    let report = convert::run(&settings)?;
    convert::check_strict(&report, settings.strict)
}
