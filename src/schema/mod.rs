use anyhow::{Context, Result};
use csv::StringRecord;
use std::fmt;
use std::fs::File;
use std::path::Path;
use tracing::warn;

use crate::question::RawQuestion;

pub mod culture;
pub mod original;


#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Schema {
    Original,
    Culture,
}

impl Schema {
    pub fn category(self) -> &'static str {
        match self {
            Schema::Original => original::CATEGORY,
            Schema::Culture => culture::CATEGORY,
        }
    }

    pub fn normalize(self, row: &StringRecord) -> RowOutcome {
        match self {
            Schema::Original => original::normalize(row),
            Schema::Culture => culture::normalize(row),
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Schema::Original => write!(f, "original"),
            Schema::Culture => write!(f, "culture"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SkipReason {
    TooShort { found: usize, expected: usize },
    NotEnoughChoices(usize),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SkipReason::TooShort { found, expected } => {
                write!(f, "{} fields, expected at least {}", found, expected)
            }
            SkipReason::NotEnoughChoices(count) => {
                write!(f, "only {} non-empty choices", count)
            }
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RowOutcome {
    Accepted(RawQuestion),
    // Emitted as is because the correct answer letter was not one of A-D.
    Unranked(RawQuestion, String),
    Skipped(SkipReason),
}

struct Descriptor {
    schema: Schema,
    matches_header: fn(&StringRecord) -> bool,
}

// First match wins.
const DESCRIPTORS: &[Descriptor] = &[
    Descriptor {
        schema: Schema::Original,
        matches_header: original::matches_header,
    },
    Descriptor {
        schema: Schema::Culture,
        matches_header: culture::matches_header,
    },
];

pub fn classify(header: &StringRecord) -> Option<Schema> {
    DESCRIPTORS
        .iter()
        .find(|descriptor| (descriptor.matches_header)(header))
        .map(|descriptor| descriptor.schema)
}

/// Reads the header row of `source` and returns the schema it matches, if any.
/// Unreadable files are reported as unknown.
pub fn detect(source: &Path) -> Option<Schema> {
    match read_header(source) {
        Ok(header) => classify(&header),
        Err(e) => {
            warn!("Could not read header of {}: {:#}", source.display(), e);
            None
        }
    }
}

fn read_header(source: &Path) -> Result<StringRecord> {
    let mut csv_reader = open(source)?;
    let header = csv_reader
        .headers()
        .with_context(|| format!("invalid header row in {}", source.display()))?;
    Ok(header.clone())
}

pub fn open(source: &Path) -> Result<csv::Reader<File>> {
    let file = File::open(source).with_context(|| format!("could not open {}", source.display()))?;
    Ok(csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file))
}
