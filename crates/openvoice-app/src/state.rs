use std::sync::Arc;

use openvoice_config::Config;
use openvoice_types::TranslationView;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    /// Displayed outcome. Whichever workflow instance resolves last
    /// owns this slot (promises may resolve out of issue order).
    pub view: RwLock<Option<TranslationView>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            view: RwLock::new(None),
        }
    }
}
