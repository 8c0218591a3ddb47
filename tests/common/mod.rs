// tests/common/mod.rs

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cuestionario::{
    config::Config,
    error::AppError,
    models::{
        answer::NewAnswer,
        question::QuestionRow,
        teacher::{NewTeacher, Teacher},
    },
    routes,
    state::AppState,
    store::SurveyStore,
    utils::hash::hash_secret,
};

pub const SCHOOL_TOKEN: &str = "colegio2025";
pub const ADMIN_KEY: &str = "clave-admin";

/// In-memory stand-in for the PostgreSQL store.
#[derive(Default)]
pub struct MemoryStore {
    pub questions: Mutex<Vec<QuestionRow>>,
    pub answers: Mutex<Vec<(String, NewAnswer)>>,
    pub teachers: Mutex<Vec<Teacher>>,
    /// Index of the answer whose insert fails, simulating a mid-batch error.
    pub fail_answer_at: Option<usize>,
    /// Every call fails as if the database were unreachable.
    pub offline: bool,
    pub calls: AtomicUsize,
}

impl MemoryStore {
    pub fn with_questions(questions: Vec<QuestionRow>) -> Self {
        Self {
            questions: Mutex::new(questions),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<(), AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.offline {
            return Err(AppError::ConnectionError("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl SurveyStore for MemoryStore {
    async fn active_questions(&self) -> Result<Vec<QuestionRow>, AppError> {
        self.enter()?;
        let mut rows: Vec<QuestionRow> = self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.activa)
            .cloned()
            .collect();
        rows.sort_by_key(|q| (q.orden, q.id));
        Ok(rows)
    }

    async fn save_answers(&self, colegio: &str, answers: &[NewAnswer]) -> Result<u64, AppError> {
        self.enter()?;
        let mut staged = Vec::new();
        for (i, answer) in answers.iter().enumerate() {
            if self.fail_answer_at == Some(i) {
                return Err(AppError::query("simulated insert failure"));
            }
            staged.push((colegio.to_string(), answer.clone()));
        }
        let written = staged.len() as u64;
        self.answers.lock().unwrap().extend(staged);
        Ok(written)
    }

    async fn insert_teacher(&self, teacher: &NewTeacher) -> Result<i64, AppError> {
        self.enter()?;
        let mut teachers = self.teachers.lock().unwrap();
        let id = teachers.len() as i64 + 1;
        teachers.push(Teacher {
            id,
            nombre: teacher.nombre.clone(),
            email: teacher.email.clone(),
            codigo_acceso: teacher.codigo_acceso.clone(),
        });
        Ok(id)
    }

    async fn find_teacher_by_code(&self, codigo: &str) -> Result<Option<Teacher>, AppError> {
        self.enter()?;
        Ok(self
            .teachers
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.codigo_acceso == codigo)
            .cloned())
    }
}

pub fn question(id: i64, orden: i32, activa: bool, opciones: Option<&str>) -> QuestionRow {
    QuestionRow {
        id,
        texto: format!("Pregunta {}", id),
        tipo: opciones.map(|_| "opcion".to_string()),
        opciones: opciones.map(str::to_string),
        activa,
        orden,
    }
}

pub fn test_config(admin_key_hash: Option<String>) -> Config {
    Config {
        db_host: "localhost".to_string(),
        db_port: 5432,
        db_name: "cuestionario".to_string(),
        db_user: "root".to_string(),
        db_password: String::new(),
        school_token: SCHOOL_TOKEN.to_string(),
        admin_key_hash,
        bind_addr: "127.0.0.1:0".to_string(),
        static_dir: PathBuf::from("static"),
        rust_log: "error".to_string(),
    }
}

/// Spawns the app on a random port and returns its base URL.
pub async fn spawn_app(store: Arc<dyn SurveyStore>) -> String {
    let hash = hash_secret(ADMIN_KEY).expect("Failed to hash admin key");
    spawn_app_with_config(store, test_config(Some(hash))).await
}

pub async fn spawn_app_with_config(store: Arc<dyn SurveyStore>, config: Config) -> String {
    let state = AppState { store, config };
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}
