// src/models/question.rs

use serde::Serialize;
use serde_json::Value;
use sqlx::prelude::FromRow;

/// Represents the 'preguntas' table in the database.
#[derive(Debug, Clone, FromRow)]
pub struct QuestionRow {
    pub id: i64,

    /// Prompt shown to the respondent.
    pub texto: String,

    /// Free-form question kind (e.g. 'abierta', 'opcion'). Not validated.
    pub tipo: Option<String>,

    /// JSON list of options, stored as text.
    pub opciones: Option<String>,

    pub activa: bool,

    /// Display order, ascending.
    pub orden: i32,
}

/// Question as sent to the client, with `opciones` decoded.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: i64,
    pub texto: String,
    pub tipo: Option<String>,
    pub opciones: Option<Vec<Value>>,
    pub activa: bool,
    pub orden: i32,
}

impl TryFrom<QuestionRow> for Question {
    type Error = serde_json::Error;

    fn try_from(row: QuestionRow) -> Result<Self, Self::Error> {
        let opciones = match row.opciones.as_deref() {
            Some(raw) if !raw.is_empty() => Some(serde_json::from_str(raw)?),
            _ => None,
        };

        Ok(Question {
            id: row.id,
            texto: row.texto,
            tipo: row.tipo,
            opciones,
            activa: row.activa,
            orden: row.orden,
        })
    }
}
