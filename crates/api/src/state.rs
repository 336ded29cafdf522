use std::sync::Arc;

use faq_store::{ArticleStore, Directory};
use tokio::sync::Mutex;

use crate::config::ServerConfig;
use crate::session::SessionStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The article collection. Handlers lock, run one reducer, and release.
    pub store: Arc<Mutex<ArticleStore>>,
    /// User lookup and reference lists.
    pub directory: Arc<dyn Directory>,
    /// Open login sessions keyed by token `jti`.
    pub sessions: Arc<SessionStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: ArticleStore, directory: Arc<dyn Directory>, config: ServerConfig) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            directory,
            sessions: Arc::new(SessionStore::new()),
            config: Arc::new(config),
        }
    }
}
