//! Layout: question, A, B, C, D, correct letter.

use csv::StringRecord;

use super::{RowOutcome, SkipReason};
use crate::question::{clean_question_text, RawQuestion};

pub const CORRECT_ANSWER_LABEL: &str = "正解";
pub const CATEGORY: &str = "食";

const MIN_FIELDS: usize = 6;
const LETTERS: [&str; 4] = ["A", "B", "C", "D"];

pub fn matches_header(header: &StringRecord) -> bool {
    header.len() >= MIN_FIELDS && header.iter().any(|field| field == CORRECT_ANSWER_LABEL)
}

pub fn normalize(row: &StringRecord) -> RowOutcome {
    if row.len() < MIN_FIELDS {
        return RowOutcome::Skipped(SkipReason::TooShort {
            found: row.len(),
            expected: MIN_FIELDS,
        });
    }

    let choices: Vec<&str> = (1..=LETTERS.len()).map(|index| &row[index]).collect();
    let letter = row[5].trim().to_uppercase();
    let into_raw_question = |choice: Vec<String>| RawQuestion {
        keyword: String::new(),
        category: CATEGORY.to_owned(),
        question: clean_question_text(&row[0]),
        choice,
        year: String::new(),
        reference_url: String::new(),
    };

    match LETTERS.iter().position(|candidate| *candidate == letter) {
        Some(correct) => {
            // Correct answer first, the rest keep their column order
            let mut choice = vec![choices[correct].to_owned()];
            choice.extend(
                choices
                    .iter()
                    .enumerate()
                    .filter(|(index, _)| *index != correct)
                    .map(|(_, text)| text.to_string()),
            );
            RowOutcome::Accepted(into_raw_question(choice))
        }
        None => {
            let choice = choices.iter().map(|text| text.to_string()).collect();
            RowOutcome::Unranked(into_raw_question(choice), letter)
        }
    }
}
