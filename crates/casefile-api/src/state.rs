//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use casefile_core::config::AppConfig;
use casefile_database::repositories::{
    CaseRepository, OptionSetRepository, PersonRepository, UploadRepository,
};
use casefile_service::{CaseService, OptionSetService, PersonService, UploadService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    /// Person repository.
    pub person_repo: Arc<PersonRepository>,
    /// Case repository.
    pub case_repo: Arc<CaseRepository>,
    /// Option set repository.
    pub option_set_repo: Arc<OptionSetRepository>,
    /// Upload repository.
    pub upload_repo: Arc<UploadRepository>,

    /// Person service.
    pub person_service: Arc<PersonService>,
    /// Case service.
    pub case_service: Arc<CaseService>,
    /// Option set service.
    pub option_set_service: Arc<OptionSetService>,
    /// Upload service.
    pub upload_service: Arc<UploadService>,
}

impl AppState {
    /// Wire up repositories and services over a connected pool.
    pub fn new(config: Arc<AppConfig>, db_pool: PgPool) -> Self {
        let person_repo = Arc::new(PersonRepository::new(db_pool.clone()));
        let case_repo = Arc::new(CaseRepository::new(db_pool.clone()));
        let option_set_repo = Arc::new(OptionSetRepository::new(db_pool.clone()));
        let upload_repo = Arc::new(UploadRepository::new(db_pool.clone()));

        let person_service = Arc::new(PersonService::new(
            person_repo.clone(),
            option_set_repo.clone(),
        ));
        let case_service = Arc::new(CaseService::new(case_repo.clone(), person_repo.clone()));
        let option_set_service = Arc::new(OptionSetService::new(option_set_repo.clone()));
        let upload_service = Arc::new(UploadService::new(upload_repo.clone()));

        Self {
            config,
            db_pool,
            person_repo,
            case_repo,
            option_set_repo,
            upload_repo,
            person_service,
            case_service,
            option_set_service,
            upload_service,
        }
    }
}
