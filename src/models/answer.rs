// src/models/answer.rs

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// One row for the 'respuestas' table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnswer {
    pub pregunta_id: i64,
    pub respuesta: String,
}

/// DTO for answer submission: question id (as JSON object key) to answer.
#[derive(Debug, Deserialize)]
pub struct SubmitAnswersRequest {
    pub respuestas: BTreeMap<String, Value>,
}

impl SubmitAnswersRequest {
    /// Converts the submitted mapping into rows.
    /// Returns `None` if any key is not an integer question id.
    pub fn into_answers(self) -> Option<Vec<NewAnswer>> {
        self.respuestas
            .into_iter()
            .map(|(key, value)| {
                let pregunta_id = key.trim().parse().ok()?;
                Some(NewAnswer {
                    pregunta_id,
                    respuesta: answer_text(value),
                })
            })
            .collect()
    }
}

/// Strings are stored verbatim, any other value as compact JSON.
pub fn answer_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
