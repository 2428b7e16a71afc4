use std::sync::Arc;
use std::time::Duration;

use moniker_resolver::rpc::RpcResolver;
use moniker_resolver::static_resolver::StaticResolver;
use moniker_resolver::traits::DomainResolver;
use moniker_storage::file::FileNameStore;
use moniker_storage::memory::MemoryNameStore;
use moniker_storage::sqlite::SqliteNameStore;
use moniker_storage::traits::WalletNameStore;
use moniker_types::primitives::Address;

use crate::analytics::{Analytics, AnalyticsLogger, JsonLinesAnalytics, TracingAnalytics};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::view_model::RenameWalletViewModel;

/// Collaborators shared by every command, built once from the config.
pub struct AppContext {
    pub store: Arc<dyn WalletNameStore>,
    pub resolver: Arc<dyn DomainResolver>,
    pub analytics: Arc<dyn AnalyticsLogger>,
    /// Whether lookups can take a network round trip.
    pub resolution_enabled: bool,
    pub resolution_timeout: Duration,
}

impl AppContext {
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        Ok(Self {
            store: create_store(config)?,
            resolver: create_resolver(config)?,
            analytics: create_analytics(config),
            resolution_enabled: config.resolver.enabled,
            resolution_timeout: Duration::from_secs(config.resolver.timeout_secs),
        })
    }

    pub fn view_model(&self, account: Address) -> RenameWalletViewModel {
        RenameWalletViewModel::new(
            account,
            self.store.clone(),
            self.resolver.clone(),
            self.analytics.clone(),
        )
    }
}

/// Create a name store from the configured backend.
pub fn create_store(config: &AppConfig) -> Result<Arc<dyn WalletNameStore>, AppError> {
    match config.storage.backend.as_str() {
        "memory" => Ok(Arc::new(MemoryNameStore::new())),
        "file" => Ok(Arc::new(FileNameStore::in_dir(&config.data_dir()))),
        "sqlite" => {
            let data_dir = config.data_dir();
            std::fs::create_dir_all(&data_dir)?;
            let db_path = data_dir.join("wallet-names.db");
            let store = SqliteNameStore::new(db_path.to_str().unwrap_or("wallet-names.db"))?;
            Ok(Arc::new(store))
        }
        other => Err(AppError::ConfigError {
            reason: format!(
                "unknown storage backend '{}', expected 'file', 'sqlite', or 'memory'",
                other
            ),
        }),
    }
}

/// Create the ENS resolver, or an empty table when resolution is disabled.
pub fn create_resolver(config: &AppConfig) -> Result<Arc<dyn DomainResolver>, AppError> {
    if !config.resolver.enabled {
        return Ok(Arc::new(StaticResolver::empty()));
    }
    let resolver = RpcResolver::new(
        &config.resolver.rpc_url,
        &config.resolver.method,
        Duration::from_secs(config.resolver.timeout_secs),
    )?;
    Ok(Arc::new(resolver))
}

/// Tracing events always; a JSON-lines file when configured.
pub fn create_analytics(config: &AppConfig) -> Arc<dyn AnalyticsLogger> {
    let mut analytics = Analytics::new().with(Arc::new(TracingAnalytics));
    if let Some(path) = &config.analytics.log_file {
        analytics = analytics.with(Arc::new(JsonLinesAnalytics::new(path)));
    }
    Arc::new(analytics)
}
