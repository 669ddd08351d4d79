use mongodb::{Client, Database};
use std::sync::Arc;
use tokio::sync::{OnceCell, RwLock};
use tracing::{debug, info};

use super::{MongoConfig, MongoError, connect_from_config};

/// Process-wide MongoDB client, connected on first use.
///
/// Cloning is cheap: every clone shares the same underlying cell, so the
/// whole process holds at most one connection pool. Concurrent first callers
/// await the same connection attempt instead of racing to open their own. A
/// failed attempt leaves the cell empty and the next caller tries again.
///
/// [`reset`](Self::reset) drops the cached client so the next call reconnects;
/// used at shutdown and to isolate tests.
#[derive(Clone)]
pub struct SharedMongoClient {
    inner: Arc<Inner>,
}

struct Inner {
    config: MongoConfig,
    cell: RwLock<Arc<OnceCell<Client>>>,
}

impl SharedMongoClient {
    pub fn new(config: MongoConfig) -> Self {
        Self::with_cell(config, OnceCell::new())
    }

    /// Wrap an already connected client
    pub fn from_client(config: MongoConfig, client: Client) -> Self {
        Self::with_cell(config, OnceCell::new_with(Some(client)))
    }

    fn with_cell(config: MongoConfig, cell: OnceCell<Client>) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                cell: RwLock::new(Arc::new(cell)),
            }),
        }
    }

    pub fn config(&self) -> &MongoConfig {
        &self.inner.config
    }

    /// Return the cached client, connecting first if needed
    pub async fn client(&self) -> Result<Client, MongoError> {
        // Clone the cell out so a concurrent reset never blocks on a slow connect
        let cell = Arc::clone(&*self.inner.cell.read().await);

        let client = cell
            .get_or_try_init(|| async {
                debug!("MongoDB client not initialized yet, connecting");
                connect_from_config(&self.inner.config).await
            })
            .await?;

        Ok(client.clone())
    }

    /// Handle to the configured database
    pub async fn database(&self) -> Result<Database, MongoError> {
        let client = self.client().await?;
        Ok(client.database(&self.inner.config.database))
    }

    pub async fn is_initialized(&self) -> bool {
        self.inner.cell.read().await.initialized()
    }

    /// Drop the cached client. Returns `true` if one was initialized.
    pub async fn reset(&self) -> bool {
        let mut guard = self.inner.cell.write().await;
        let previous = std::mem::replace(&mut *guard, Arc::new(OnceCell::new()));
        let was_initialized = previous.initialized();
        if was_initialized {
            info!("MongoDB client reset");
        }
        was_initialized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn unconnected_client() -> Client {
        // Building a client does not open connections until an operation runs
        Client::with_uri_str("mongodb://localhost:27017").await.unwrap()
    }

    #[tokio::test]
    async fn test_new_is_lazy() {
        let shared = SharedMongoClient::new(MongoConfig::default());
        assert!(!shared.is_initialized().await);
    }

    #[tokio::test]
    async fn test_from_client_is_initialized_and_reset_clears_it() {
        let shared = SharedMongoClient::from_client(MongoConfig::default(), unconnected_client().await);
        assert!(shared.is_initialized().await);

        assert!(shared.reset().await);
        assert!(!shared.is_initialized().await);
        assert!(!shared.reset().await);
    }

    #[tokio::test]
    async fn test_clones_share_the_cell() {
        let shared = SharedMongoClient::from_client(MongoConfig::default(), unconnected_client().await);
        let clone = shared.clone();

        shared.reset().await;
        assert!(!clone.is_initialized().await);
    }

    #[tokio::test]
    async fn test_failed_initialization_leaves_cell_empty() {
        let shared = SharedMongoClient::new(MongoConfig::new("not-a-mongodb-uri"));

        assert!(shared.client().await.is_err());
        assert!(!shared.is_initialized().await);
        // A second attempt runs the initializer again rather than caching the error
        assert!(shared.database().await.is_err());
    }

    #[tokio::test]
    async fn test_database_uses_configured_name() {
        let config = MongoConfig::with_database("mongodb://localhost:27017", "inventario");
        let shared = SharedMongoClient::from_client(config, unconnected_client().await);
        let db = shared.database().await.unwrap();
        assert_eq!(db.name(), "inventario");
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_concurrent_first_use_connects_once() {
        let url = std::env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let shared = SharedMongoClient::new(MongoConfig::with_database(url, "articulos_test"));

        let (a, b) = tokio::join!(shared.client(), shared.client());
        assert!(a.is_ok() && b.is_ok());
        assert!(shared.is_initialized().await);
    }
}
