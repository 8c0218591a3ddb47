// src/store/mod.rs

mod postgres;

pub use postgres::PgStore;

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::{
        answer::NewAnswer,
        question::QuestionRow,
        teacher::{NewTeacher, Teacher},
    },
};

/// Storage seam used by the handlers.
///
/// Every call is self-contained: implementations acquire whatever connection
/// they need and release it before returning, on success and on error.
#[async_trait]
pub trait SurveyStore: Send + Sync {
    /// Active questions, ascending by `orden`. `opciones` is returned undecoded.
    async fn active_questions(&self) -> Result<Vec<QuestionRow>, AppError>;

    /// Inserts one row per answer, all or nothing. Returns the number of rows written.
    async fn save_answers(&self, colegio: &str, answers: &[NewAnswer]) -> Result<u64, AppError>;

    /// Inserts a teacher row and returns its id.
    async fn insert_teacher(&self, teacher: &NewTeacher) -> Result<i64, AppError>;

    /// Looks up a teacher by access code. Codes are not unique; any match is returned.
    async fn find_teacher_by_code(&self, codigo: &str) -> Result<Option<Teacher>, AppError>;
}
