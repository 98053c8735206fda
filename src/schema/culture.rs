//! Layout: era, keyword, reference url, question, A, B, C, D.
//! The first choice is the correct one.

use csv::StringRecord;

use super::{RowOutcome, SkipReason};
use crate::question::{clean_question_text, RawQuestion};

pub const ERA_LABEL: &str = "年代情報";
pub const CATEGORY: &str = "日本の食文化(現代)";

const MIN_FIELDS: usize = 8;
const CHOICES_START: usize = 4;
const CHOICE_COUNT: usize = 4;

pub fn matches_header(header: &StringRecord) -> bool {
    header.len() >= MIN_FIELDS
        && header
            .get(0)
            .map_or(false, |field| field.contains(ERA_LABEL))
}

pub fn normalize(row: &StringRecord) -> RowOutcome {
    if row.len() < MIN_FIELDS {
        return RowOutcome::Skipped(SkipReason::TooShort {
            found: row.len(),
            expected: MIN_FIELDS,
        });
    }

    let choice: Vec<String> = row
        .iter()
        .skip(CHOICES_START)
        .take(CHOICE_COUNT)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
        .collect();
    if choice.len() < CHOICE_COUNT {
        return RowOutcome::Skipped(SkipReason::NotEnoughChoices(choice.len()));
    }

    RowOutcome::Accepted(RawQuestion {
        keyword: row[1].trim().to_owned(),
        category: CATEGORY.to_owned(),
        question: clean_question_text(&row[3]),
        choice,
        year: row[0].trim().to_owned(),
        reference_url: row[2].trim().to_owned(),
    })
}
