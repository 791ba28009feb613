use anyhow::{anyhow, Context, Result};

use crate::matching::detect::SkillMatchMode;
use crate::matching::weights::MatchWeights;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub skill_match_mode: SkillMatchMode,
    pub weights: MatchWeights,
    pub max_screening_batch: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            skill_match_mode: SkillMatchMode::default(),
            weights: MatchWeights::default(),
            max_screening_batch: 200,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let port = match get("PORT") {
            Some(v) => v
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => defaults.port,
        };

        let skill_match_mode = match get("SKILL_MATCH_MODE") {
            Some(v) => v
                .parse::<SkillMatchMode>()
                .map_err(|e| anyhow!(e))
                .context("SKILL_MATCH_MODE is invalid")?,
            None => defaults.skill_match_mode,
        };

        let weights = match get("MATCH_SKILL_WEIGHT") {
            Some(v) => {
                let skill = v
                    .parse::<f64>()
                    .context("MATCH_SKILL_WEIGHT must be a number")?;
                MatchWeights::from_skill_weight(skill)
                    .ok_or_else(|| anyhow!("MATCH_SKILL_WEIGHT must be between 0 and 1, got {skill}"))?
            }
            None => defaults.weights,
        };

        let max_screening_batch = match get("MAX_SCREENING_BATCH") {
            Some(v) => v
                .parse::<usize>()
                .context("MAX_SCREENING_BATCH must be a positive integer")?,
            None => defaults.max_screening_batch,
        };
        if max_screening_batch == 0 {
            return Err(anyhow!("MAX_SCREENING_BATCH must be at least 1"));
        }

        Ok(Config {
            port,
            rust_log: get("RUST_LOG").unwrap_or(defaults.rust_log),
            skill_match_mode,
            weights,
            max_screening_batch,
        })
    }
}
