//! Match Scoring — pluggable, trait-based scorer that measures a parsed resume
//! against a job title and description.
//!
//! Default: `KeywordMatchScorer` (catalog keyword overlap plus a rough
//! experience-years estimate). `AppState` holds an `Arc<dyn MatchScorer>`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::detect::{
    detect_job_skills, detect_seniority, estimate_experience_years, SkillMatchMode,
};
use crate::matching::weights::{round_one_decimal, MatchWeights};
use crate::models::resume::{JobDescription, ResumeProfile};

/// Cumulative years at which the experience sub-score reaches 100%.
const FULL_EXPERIENCE_YEARS: f64 = 10.0;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Score breakdown for one resume against one job.
///
/// `matched_skills` and `missing_skills` are disjoint and together are exactly
/// the catalog skills found in the job description. Both are listed in catalog
/// order, though callers should not rely on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: f64,                   // 0 – 100, one decimal
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub experience_match: f64,        // 0 – 100, one decimal
}

impl MatchResult {
    pub fn zero() -> Self {
        Self {
            score: 0.0,
            matched_skills: vec![],
            missing_skills: vec![],
            experience_match: 0.0,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching the handlers.
pub trait MatchScorer: Send + Sync {
    fn score(&self, resume: &ResumeProfile, job: &JobDescription) -> MatchResult;

    /// Scores against a job given as loose title and description text.
    fn score_text(
        &self,
        resume: &ResumeProfile,
        job_title: &str,
        job_description: &str,
    ) -> MatchResult {
        self.score(resume, &JobDescription::new(job_title, job_description))
    }

    /// Short label reported alongside results.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordMatchScorer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordMatchScorer {
    pub mode: SkillMatchMode,
    pub weights: MatchWeights,
}

impl KeywordMatchScorer {
    pub fn new(mode: SkillMatchMode, weights: MatchWeights) -> Self {
        Self { mode, weights }
    }
}

impl MatchScorer for KeywordMatchScorer {
    fn score(&self, resume: &ResumeProfile, job: &JobDescription) -> MatchResult {
        compute_match(resume, job, self.mode, self.weights)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

fn compute_match(
    resume: &ResumeProfile,
    job: &JobDescription,
    mode: SkillMatchMode,
    weights: MatchWeights,
) -> MatchResult {
    if job.description.is_empty() {
        return MatchResult::zero();
    }

    let job_skills = detect_job_skills(&job.description, mode);
    let resume_skills: HashSet<String> = resume.skills.iter().map(|s| s.to_lowercase()).collect();

    let (matched, missing): (Vec<&str>, Vec<&str>) = job_skills
        .iter()
        .copied()
        .partition(|skill| resume_skills.contains(*skill));

    let skill_match = if job_skills.is_empty() {
        0.0
    } else {
        matched.len() as f64 / job_skills.len() as f64 * 100.0
    };

    // Detected but not weighted into the score.
    let seniority = detect_seniority(&job.title, &job.description);

    let exp_years = estimate_experience_years(&resume.experience);
    let experience_match = (exp_years as f64 / FULL_EXPERIENCE_YEARS * 100.0).min(100.0);

    let overall = weights.combine(skill_match, experience_match);

    debug!(
        skill_match,
        experience_match,
        exp_years,
        job_level = seniority.level,
        required = job_skills.len(),
        matched = matched.len(),
        "computed match score"
    );

    MatchResult {
        score: round_one_decimal(overall),
        matched_skills: matched.into_iter().map(str::to_string).collect(),
        missing_skills: missing.into_iter().map(str::to_string).collect(),
        experience_match: round_one_decimal(experience_match),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
