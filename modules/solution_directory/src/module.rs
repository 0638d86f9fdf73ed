//! Module declaration and lifecycle
//!
//! The host process calls, in order: [`SolutionDirectoryModule::migrate`] (when
//! it owns the schema), [`SolutionDirectoryModule::init`], then
//! [`SolutionDirectoryModule::register_rest`] and/or
//! [`SolutionDirectoryModule::client`].

use crate::config::Config;
use crate::contract::SolutionDirectoryApi;
use crate::domain::Service;
use crate::infra::storage::{SeaOrmCompanyRepository, SeaOrmSolutionRepository};
use anyhow::Result;
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Solution directory module
pub struct SolutionDirectoryModule {
    config: RwLock<Config>,
    service: RwLock<Option<Arc<Service>>>,
}

impl Default for SolutionDirectoryModule {
    fn default() -> Self {
        Self {
            config: RwLock::new(Config::default()),
            service: RwLock::new(None),
        }
    }
}

impl SolutionDirectoryModule {
    /// Build repositories and the domain service on top of `db`
    pub fn init(&self, config: Config, db: Arc<DatabaseConnection>) -> Result<()> {
        let categories = Arc::new(config.load_categories()?);

        // Build repositories
        let companies = Arc::new(SeaOrmCompanyRepository::new(db.clone()));
        let solutions = Arc::new(SeaOrmSolutionRepository::new(db));

        // Build domain service
        let service = Arc::new(Service::new(
            companies,
            solutions,
            categories.clone(),
            config.clone(),
        ));

        *self.config.write() = config;
        *self.service.write() = Some(service);

        tracing::info!(
            super_categories = categories.super_categories().len(),
            "Solution directory initialized"
        );
        Ok(())
    }

    /// Apply pending schema migrations
    pub async fn migrate(db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("Solution directory migrations completed");
        Ok(())
    }

    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    /// Domain service, available after [`Self::init`]
    pub fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }

    /// In-process client for other modules
    pub fn client(&self) -> Result<Arc<dyn SolutionDirectoryApi>> {
        let client = crate::api::native::NativeClient::new(self.service()?);
        Ok(Arc::new(client))
    }

    /// Mount the REST routes on `router`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let service = self.service()?;

        tracing::info!(
            base_path = crate::api::rest::routes::BASE_PATH,
            "Registering solution directory REST routes"
        );
        Ok(crate::api::rest::routes::register_routes(router, service))
    }
}
