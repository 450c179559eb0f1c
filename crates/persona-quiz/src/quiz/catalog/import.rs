use super::CatalogError;
use crate::quiz::domain::{Dimension, Question, QuestionMode};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct QuestionRow {
    id: String,
    dimension: String,
    text: String,
    weight: f64,
    #[serde(default)]
    reverse: bool,
    mode: String,
}

impl QuestionRow {
    fn into_question(self) -> Result<Question, CatalogError> {
        let dimension =
            Dimension::from_code(&self.dimension).ok_or_else(|| CatalogError::UnknownDimension {
                id: self.id.clone(),
                code: self.dimension.clone(),
            })?;
        let mode = QuestionMode::from_tag(&self.mode).ok_or_else(|| CatalogError::UnknownMode {
            id: self.id.clone(),
            tag: self.mode.clone(),
        })?;

        Ok(Question {
            id: self.id,
            dimension,
            text: self.text,
            weight: self.weight,
            reverse: self.reverse,
            mode,
        })
    }
}

pub(super) fn parse_questions<R: Read>(reader: R) -> Result<Vec<Question>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut questions = Vec::new();
    for row in csv_reader.deserialize::<QuestionRow>() {
        questions.push(row?.into_question()?);
    }

    Ok(questions)
}
