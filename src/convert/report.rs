use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::schema::Schema;

#[derive(Clone, Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub schema: Option<Schema>,
    pub records: usize,
    pub rows_skipped: usize,
    pub unrecognized_answers: usize,
}

impl FileReport {
    pub fn new(path: &Path, schema: Option<Schema>) -> Self {
        FileReport {
            path: path.to_path_buf(),
            schema,
            records: 0,
            rows_skipped: 0,
            unrecognized_answers: 0,
        }
    }

    fn log(&self) {
        match self.schema {
            Some(schema) => info!(
                "{}: {} format, {} question(s), {} row(s) skipped",
                self.path.display(),
                schema,
                self.records,
                self.rows_skipped
            ),
            None => info!("{}: unknown format, skipped", self.path.display()),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Report {
    files: Vec<FileReport>,
}

impl Report {
    pub fn push(&mut self, file_report: FileReport) {
        file_report.log();
        self.files.push(file_report);
    }

    pub fn get_files(&self) -> &Vec<FileReport> {
        &self.files
    }

    pub fn recognized_files(&self) -> usize {
        self.files.iter().filter(|f| f.schema.is_some()).count()
    }

    pub fn total_records(&self) -> usize {
        self.files.iter().map(|f| f.records).sum()
    }

    pub fn total_rows_skipped(&self) -> usize {
        self.files.iter().map(|f| f.rows_skipped).sum()
    }

    pub fn total_unrecognized_answers(&self) -> usize {
        self.files.iter().map(|f| f.unrecognized_answers).sum()
    }

    pub fn records_per_category(&self) -> BTreeMap<&'static str, usize> {
        let mut categories = BTreeMap::new();
        for file_report in &self.files {
            if let Some(schema) = file_report.schema {
                if file_report.records > 0 {
                    *categories.entry(schema.category()).or_insert(0) += file_report.records;
                }
            }
        }
        categories
    }

    pub fn log_summary(&self, output: &Path) {
        info!(
            "Wrote {} question(s) from {} of {} file(s) to {}",
            self.total_records(),
            self.recognized_files(),
            self.get_files().len(),
            output.display()
        );
        for (category, count) in self.records_per_category() {
            info!("  {}: {}", category, count);
        }
        let unrecognized = self.total_unrecognized_answers();
        if unrecognized > 0 {
            info!(
                "{} question(s) kept their original choice order (unrecognized answer letter)",
                unrecognized
            );
        }
    }
}
