use std::sync::Arc;

use crate::config::Config;
use crate::matching::scorer::{KeywordMatchScorer, MatchScorer};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable match scorer. Default: KeywordMatchScorer built from config.
    pub scorer: Arc<dyn MatchScorer>,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let scorer = Arc::new(KeywordMatchScorer::new(
            config.skill_match_mode,
            config.weights,
        ));
        AppState { config, scorer }
    }
}
