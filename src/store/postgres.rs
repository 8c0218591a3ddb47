// src/store/postgres.rs

use async_trait::async_trait;
use sqlx::{
    Connection, PgConnection,
    postgres::PgConnectOptions,
};

use super::SurveyStore;
use crate::{
    error::AppError,
    models::{
        answer::NewAnswer,
        question::QuestionRow,
        teacher::{NewTeacher, Teacher},
    },
};

/// PostgreSQL store that opens a fresh connection for every operation.
///
/// The connection is owned by the calling future and closed when it is dropped,
/// so every exit path releases it. Failures are logged once, when the error
/// is rendered into a response.
#[derive(Debug, Clone)]
pub struct PgStore {
    options: PgConnectOptions,
}

impl PgStore {
    pub fn new(options: PgConnectOptions) -> Self {
        Self { options }
    }

    async fn connect(&self) -> Result<PgConnection, AppError> {
        PgConnection::connect_with(&self.options)
            .await
            .map_err(|e| AppError::ConnectionError(e.to_string()))
    }
}

#[async_trait]
impl SurveyStore for PgStore {
    async fn active_questions(&self) -> Result<Vec<QuestionRow>, AppError> {
        let mut conn = self.connect().await?;

        sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, texto, tipo, opciones, activa, orden
            FROM preguntas
            WHERE activa = TRUE
            ORDER BY orden ASC, id ASC
            "#,
        )
        .fetch_all(&mut conn)
        .await
        .map_err(AppError::from)
    }

    async fn save_answers(&self, colegio: &str, answers: &[NewAnswer]) -> Result<u64, AppError> {
        let mut conn = self.connect().await?;

        // Dropping `tx` without commit rolls back every insert made so far.
        let mut tx = conn.begin().await?;
        let mut written = 0;

        for answer in answers {
            written += sqlx::query(
                r#"
                INSERT INTO respuestas (colegio, pregunta_id, respuesta)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(colegio)
            .bind(answer.pregunta_id)
            .bind(&answer.respuesta)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }

        tx.commit().await?;

        Ok(written)
    }

    async fn insert_teacher(&self, teacher: &NewTeacher) -> Result<i64, AppError> {
        let mut conn = self.connect().await?;

        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO profesores (nombre, email, codigo_acceso)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&teacher.nombre)
        .bind(&teacher.email)
        .bind(&teacher.codigo_acceso)
        .fetch_one(&mut conn)
        .await
        .map_err(AppError::from)
    }

    async fn find_teacher_by_code(&self, codigo: &str) -> Result<Option<Teacher>, AppError> {
        let mut conn = self.connect().await?;

        sqlx::query_as::<_, Teacher>(
            r#"
            SELECT id, nombre, email, codigo_acceso
            FROM profesores
            WHERE codigo_acceso = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(codigo)
        .fetch_optional(&mut conn)
        .await
        .map_err(AppError::from)
    }
}
