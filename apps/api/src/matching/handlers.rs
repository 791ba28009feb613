//! Axum route handlers for the Match API.

use std::collections::HashSet;

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::catalog::{catalog_view, CatalogView};
use crate::matching::categories::{categorize_skills, SkillCategories};
use crate::matching::detect::{detect_seniority, Seniority};
use crate::matching::scorer::MatchResult;
use crate::models::resume::{null_as_default, JobDescription, ResumeProfile};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    /// A null or absent resume is scored as an empty profile.
    #[serde(default)]
    pub resume: Option<ResumeProfile>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub match_result: MatchResult,
    pub seniority: Seniority,
    pub skill_categories: SkillCategories,
    pub scorer_backend: &'static str,
    pub scored_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ScreeningCandidate {
    pub candidate_id: Uuid,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub resume: Option<ResumeProfile>,
}

#[derive(Debug, Deserialize)]
pub struct ScreenRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_description: String,
    pub candidates: Vec<ScreeningCandidate>,
}

#[derive(Debug, Serialize)]
pub struct RankedCandidate {
    pub rank: usize,
    pub candidate_id: Uuid,
    pub name: String,
    pub match_result: MatchResult,
}

#[derive(Debug, Serialize)]
pub struct ScreenResponse {
    pub ranked: Vec<RankedCandidate>,
    pub seniority: Seniority,
    pub scorer_backend: &'static str,
    pub scored_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match/score
///
/// Scores one resume against one job. An empty description is not an error;
/// it produces the zero result.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Json<ScoreResponse> {
    let resume = request.resume.unwrap_or_default();

    let match_result = state
        .scorer
        .score_text(&resume, &request.job_title, &request.job_description);

    Json(ScoreResponse {
        match_result,
        seniority: detect_seniority(&request.job_title, &request.job_description),
        skill_categories: categorize_skills(&resume.skills),
        scorer_backend: state.scorer.backend(),
        scored_at: Utc::now(),
    })
}

/// POST /api/v1/match/screen
///
/// Scores a batch of candidates against one job and ranks them by score,
/// highest first. Equal scores keep submission order.
pub async fn handle_screen(
    State(state): State<AppState>,
    Json(request): Json<ScreenRequest>,
) -> Result<Json<ScreenResponse>, AppError> {
    validate_screen_request(&request, state.config.max_screening_batch)?;

    let job = JobDescription::new(request.job_title, request.job_description);

    let mut scored: Vec<(ScreeningCandidate, MatchResult)> = request
        .candidates
        .into_iter()
        .map(|candidate| {
            let result = match &candidate.resume {
                Some(resume) => state.scorer.score(resume, &job),
                None => state.scorer.score(&ResumeProfile::default(), &job),
            };
            (candidate, result)
        })
        .collect();

    scored.sort_by(|(_, a), (_, b)| b.score.total_cmp(&a.score));

    let ranked: Vec<RankedCandidate> = scored
        .into_iter()
        .enumerate()
        .map(|(i, (candidate, match_result))| RankedCandidate {
            rank: i + 1,
            candidate_id: candidate.candidate_id,
            name: candidate.name,
            match_result,
        })
        .collect();

    info!(
        "Screened {} candidates (top score {})",
        ranked.len(),
        ranked.first().map(|r| r.match_result.score).unwrap_or(0.0)
    );

    Ok(Json(ScreenResponse {
        ranked,
        seniority: detect_seniority(&job.title, &job.description),
        scorer_backend: state.scorer.backend(),
        scored_at: Utc::now(),
    }))
}

/// GET /api/v1/match/catalog
pub async fn handle_catalog() -> Json<CatalogView> {
    Json(catalog_view())
}

fn validate_screen_request(request: &ScreenRequest, max_batch: usize) -> Result<(), AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    if request.candidates.is_empty() {
        return Err(AppError::Validation(
            "candidates cannot be empty".to_string(),
        ));
    }
    if request.candidates.len() > max_batch {
        return Err(AppError::Validation(format!(
            "at most {max_batch} candidates can be screened at once, got {}",
            request.candidates.len()
        )));
    }

    let mut seen = HashSet::new();
    for candidate in &request.candidates {
        if !seen.insert(candidate.candidate_id) {
            return Err(AppError::Validation(format!(
                "duplicate candidate_id {}",
                candidate.candidate_id
            )));
        }
    }
    Ok(())
}
