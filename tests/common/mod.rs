#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, ServiceExt, extract::Request, routing::get};
use axum_test::TestServer;
use book_service::api::handlers::health_handler;
use book_service::api::routes::book_routes;
use book_service::application::services::BookService;
use book_service::domain::entities::{Book, NewBook};
use book_service::domain::repositories::BookRepository;
use book_service::error::AppError;
use book_service::infrastructure::persistence::InMemoryBookRepository;
use book_service::routes::app_router;
use book_service::state::AppState;
use std::sync::Arc;

/// Store that fails every call, standing in for an unreachable database.
pub struct UnavailableRepository;

#[async_trait]
impl BookRepository for UnavailableRepository {
    async fn find_all(&self) -> Result<Vec<Book>, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Book>, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn save(&self, _id: Option<i64>, _book: NewBook) -> Result<Book, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn delete_by_id(&self, _id: i64) -> Result<(), AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn create_test_state(repository: Arc<dyn BookRepository>) -> AppState {
    AppState::new(Arc::new(BookService::new(repository)), "memory")
}

pub fn make_server_with(repository: Arc<dyn BookRepository>) -> TestServer {
    let state = create_test_state(repository);
    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", book_routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

pub fn make_server() -> TestServer {
    make_server_with(Arc::new(InMemoryBookRepository::new()))
}

/// Serves the production router, including path normalisation and tracing.
pub fn make_app_server() -> TestServer {
    let state = create_test_state(Arc::new(InMemoryBookRepository::new()));
    let app = ServiceExt::<Request>::into_make_service(app_router(state));
    TestServer::new(app).unwrap()
}
