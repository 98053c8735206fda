use std::path::PathBuf;

use crate::question::IdFormat;

#[derive(Clone, Debug)]
pub struct Settings {
    pub input_dir: PathBuf,
    pub extension: String,
    pub output: PathBuf,
    pub author: String,
    pub id_format: IdFormat,
    pub strict: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            input_dir: PathBuf::from("."),
            extension: "csv".to_owned(),
            output: PathBuf::from("questions.json"),
            author: "claude".to_owned(),
            id_format: IdFormat::default(),
            strict: false,
        }
    }
}
