use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

#[cfg(test)]
mod tests;

lazy_static! {
    static ref LINE_BREAK_REGEX: Regex = Regex::new("\r\n|\r|\n").unwrap();
}

/// Replaces every line break with a single space and trims the result.
pub fn clean_question_text(text: &str) -> String {
    LINE_BREAK_REGEX.replace_all(text, " ").trim().to_owned()
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct QuestionId(u32);

impl QuestionId {
    pub fn ordinal(self) -> u32 {
        self.0
    }
}

/// Hands out dense, strictly increasing question ids for a whole run.
#[derive(Debug)]
pub struct IdCounter {
    next: u32,
}

impl IdCounter {
    pub fn new() -> Self {
        IdCounter { next: 1 }
    }

    pub fn next(&mut self) -> QuestionId {
        let id = QuestionId(self.next);
        self.next += 1;
        id
    }
}

impl Default for IdCounter {
    fn default() -> Self {
        IdCounter::new()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IdFormat {
    pub prefix: String,
    pub width: usize,
}

impl IdFormat {
    pub fn format(&self, id: QuestionId) -> String {
        format!("{}{:0width$}", self.prefix, id.ordinal(), width = self.width)
    }
}

impl Default for IdFormat {
    fn default() -> Self {
        IdFormat {
            prefix: "Q".to_owned(),
            width: 3,
        }
    }
}

/// A normalized row that has not been assigned an id yet.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawQuestion {
    pub keyword: String,
    pub category: String,
    pub question: String,
    pub choice: Vec<String>,
    pub year: String,
    pub reference_url: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Question {
    #[serde(rename = "questionID")]
    pub question_id: String,
    pub keyword: String,
    pub category: String,
    pub question: String,
    pub choice: Vec<String>,
    pub year: String,
    pub reference_url: String,
    pub authored_by: String,
}

impl Question {
    pub fn new(question_id: String, raw_question: RawQuestion, authored_by: &str) -> Self {
        Question {
            question_id,
            keyword: raw_question.keyword,
            category: raw_question.category,
            question: raw_question.question,
            choice: raw_question.choice,
            year: raw_question.year,
            reference_url: raw_question.reference_url,
            authored_by: authored_by.to_owned(),
        }
    }
}
