//! JSON CRUD service over bakeries and their baked goods.
//!
//! The router is built from an explicitly constructed [`AppState`], so tests
//! can run it against an isolated in-memory store.

mod config;
mod error;
mod extract;
mod handlers;
mod server;

pub use config::{Config, ConfigError};
pub use error::{ApiError, ApiResult, ErrorBody};
pub use extract::{EntityId, FormFields};
pub use handlers::{BakeryResponse, MessageBody, router};
pub use server::start;

use bakery_service::sea_orm::DatabaseConnection;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub conn: DatabaseConnection,
}

impl AppState {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}
