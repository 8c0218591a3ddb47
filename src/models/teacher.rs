// src/models/teacher.rs

use serde::Deserialize;
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'profesores' table in the database.
#[derive(Debug, Clone, FromRow)]
pub struct Teacher {
    pub id: i64,
    pub nombre: String,
    pub email: String,

    /// Generated `PROF####` code. Not guaranteed unique.
    pub codigo_acceso: String,
}

/// Row to insert for a new teacher.
#[derive(Debug, Clone)]
pub struct NewTeacher {
    pub nombre: String,
    pub email: String,
    pub codigo_acceso: String,
}

/// DTO for the admin "add teacher" endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct AddTeacherRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "El nombre debe tener entre 1 y 100 caracteres."
    ))]
    pub nombre: String,
    #[validate(email(message = "El email no es válido."))]
    pub email: String,
}

/// DTO for login. A missing `codigo` behaves like an empty one.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub codigo: String,
}
