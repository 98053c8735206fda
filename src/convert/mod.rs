use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::question::{IdCounter, Question, RawQuestion};
use crate::schema::{self, RowOutcome, Schema};
use crate::settings::Settings;
use crate::writer;

mod report;


pub use report::{FileReport, Report};

/// Lists the files of `dir` with the given extension, sorted by path.
/// Hidden files and subdirectories are ignored.
pub fn discover_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("could not list input directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Could not read entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        let path = entry.path();
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        let matches_extension = path.extension().map_or(false, |e| e == extension);
        if !hidden && matches_extension && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

pub struct Converter<'a> {
    settings: &'a Settings,
    counter: IdCounter,
    questions: Vec<Question>,
    report: Report,
}

impl<'a> Converter<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Converter {
            settings,
            counter: IdCounter::new(),
            questions: Vec::new(),
            report: Report::default(),
        }
    }

    pub fn process_file(&mut self, source: &Path) {
        info!("Processing {}", source.display());
        let schema = schema::detect(source);
        let mut file_report = FileReport::new(source, schema);
        if let Some(schema) = schema {
            if let Err(e) = self.read_rows(source, schema, &mut file_report) {
                warn!("Stopped reading {}: {:#}", source.display(), e);
            }
        }
        self.report.push(file_report);
    }

    fn read_rows(
        &mut self,
        source: &Path,
        schema: Schema,
        file_report: &mut FileReport,
    ) -> Result<()> {
        let mut csv_reader = schema::open(source)?;
        for (index, row) in csv_reader.records().enumerate() {
            // The header is row 1
            let row_number = index + 2;
            let row = match row {
                Ok(row) => row,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    warn!("{} row {}: {}", source.display(), row_number, e);
                    file_report.rows_skipped += 1;
                    continue;
                }
            };

            match schema.normalize(&row) {
                RowOutcome::Accepted(raw_question) => self.emit(raw_question, file_report),
                RowOutcome::Unranked(raw_question, letter) => {
                    warn!(
                        "{} row {}: unrecognized answer letter {:?}, keeping choice order",
                        source.display(),
                        row_number,
                        letter
                    );
                    file_report.unrecognized_answers += 1;
                    self.emit(raw_question, file_report);
                }
                RowOutcome::Skipped(reason) => {
                    debug!("{} row {} skipped: {}", source.display(), row_number, reason);
                    file_report.rows_skipped += 1;
                }
            }
        }
        Ok(())
    }

    fn emit(&mut self, raw_question: RawQuestion, file_report: &mut FileReport) {
        let question_id = self.settings.id_format.format(self.counter.next());
        self.questions
            .push(Question::new(question_id, raw_question, &self.settings.author));
        file_report.records += 1;
    }

    pub fn finish(self) -> (Vec<Question>, Report) {
        (self.questions, self.report)
    }
}

/// Fails when `strict` is set and some answer letters were not recognized.
pub fn check_strict(report: &Report, strict: bool) -> Result<()> {
    let unrecognized = report.total_unrecognized_answers();
    if strict && unrecognized > 0 {
        bail!(
            "{} question(s) had an unrecognized answer letter",
            unrecognized
        );
    }
    Ok(())
}

/// Converts every input file and writes the output file.
pub fn run(settings: &Settings) -> Result<Report> {
    let files = discover_files(&settings.input_dir, &settings.extension)?;
    info!("Found {} {} file(s)", files.len(), settings.extension);

    let mut converter = Converter::new(settings);
    for source in &files {
        converter.process_file(source);
    }
    let (questions, report) = converter.finish();

    writer::write_questions(&settings.output, &questions)?;
    report.log_summary(&settings.output);
    Ok(report)
}
