#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use club_registry::domain::entities::User;
use club_registry::domain::repositories::UserRepository;
use club_registry::error::AppError;
use club_registry::prelude::{MemoryUserRepository, RuntimeMode};
use club_registry::routes::build_router;
use club_registry::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;

pub const SALLY_ID: &str = "3c8da4d5-1597-46e7-baa1-e402aed70d80";
pub const JOHN_ID: &str = "ce20079c-2326-4f17-8ac4-f617bfd28b7f";
pub const BASE_URL: &str = "http://localhost:8000";

pub fn create_test_state(repository: Arc<dyn UserRepository>, mode: RuntimeMode) -> AppState {
    AppState::new(repository, mode, BASE_URL)
}

/// Full router over a freshly seeded store.
pub fn make_server() -> TestServer {
    let state = create_test_state(Arc::new(MemoryUserRepository::seeded()), RuntimeMode::Test);
    TestServer::new(build_router(state)).unwrap()
}

pub fn make_server_with(repository: Arc<dyn UserRepository>, mode: RuntimeMode) -> TestServer {
    TestServer::new(build_router(create_test_state(repository, mode))).unwrap()
}

pub fn valid_payload() -> Value {
    json!({
        "username": "sallyTwo",
        "password": "abc12345",
        "favoriteClub": "Ogden Curling Club"
    })
}

pub async fn list_users(server: &TestServer) -> Vec<Value> {
    let response = server.get("/user").await;
    response.assert_status_ok();
    response.json::<Vec<Value>>()
}

pub fn ids(users: &[Value]) -> Vec<String> {
    users
        .iter()
        .map(|u| u["id"].as_str().unwrap().to_string())
        .collect()
}

/// Store whose every operation fails with an internal error.
pub struct FailingRepository;

#[async_trait]
impl UserRepository for FailingRepository {
    async fn list_all(&self) -> Result<Vec<User>, AppError> {
        Err(AppError::internal(
            "Store unavailable",
            json!({ "operation": "list_all" }),
        ))
    }

    async fn delete_by_id(&self, _id: &str) -> Result<bool, AppError> {
        Err(AppError::internal(
            "Store unavailable",
            json!({ "operation": "delete_by_id" }),
        ))
    }

    async fn append(&self, _user: User) -> Result<(), AppError> {
        Err(AppError::internal(
            "Store unavailable",
            json!({ "operation": "append" }),
        ))
    }
}

/// Store that panics on every operation.
pub struct PanickingRepository;

#[async_trait]
impl UserRepository for PanickingRepository {
    async fn list_all(&self) -> Result<Vec<User>, AppError> {
        panic!("store exploded")
    }

    async fn delete_by_id(&self, _id: &str) -> Result<bool, AppError> {
        panic!("store exploded")
    }

    async fn append(&self, _user: User) -> Result<(), AppError> {
        panic!("store exploded")
    }
}
