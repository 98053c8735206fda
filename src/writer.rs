use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::question::Question;

/// Overwrites `destination` with the questions as a pretty-printed JSON array.
/// Non-ASCII text is written as is.
pub fn write_questions(destination: &Path, questions: &[Question]) -> Result<()> {
    let file = File::create(destination)
        .with_context(|| format!("could not create {}", destination.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, questions)
        .with_context(|| format!("could not serialize questions to {}", destination.display()))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
