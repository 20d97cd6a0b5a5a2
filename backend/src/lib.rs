//! Supply Chain Dashboard - backend library
//!
//! Wires the mock catalog, the session store and the page handlers behind
//! the `scd` command-line front end.

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};

use services::{
    CatalogService, FileStorage, LocalStorage, MockAuthService, NotificationService, SessionStore,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: CatalogService,
    pub session: Arc<SessionStore>,
}

impl AppState {
    pub fn new(config: Config, catalog: CatalogService, session: SessionStore) -> Self {
        Self {
            config: Arc::new(config),
            catalog,
            session: Arc::new(session),
        }
    }

    /// Build the state from configuration: load the catalog and restore the
    /// session persisted in the storage file
    pub fn from_config(config: Config) -> AppResult<Self> {
        let catalog = CatalogService::from_config(&config.catalog, config.display.locale)?;

        let storage: Arc<dyn LocalStorage> =
            Arc::new(FileStorage::new(config.session.storage_path.clone()));
        let session = SessionStore::restore(
            Arc::new(MockAuthService::from_config(&config.session)),
            storage,
            NotificationService::new(),
            config.session.storage_key.clone(),
        );

        Ok(Self::new(config, catalog, session))
    }
}
