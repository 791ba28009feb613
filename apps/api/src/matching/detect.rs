//! Text signal extraction: catalog skills, seniority, and rough experience years.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::matching::catalog::{DEFAULT_JOB_LEVEL, SENIORITY_TABLE, SKILL_CATALOG};
use crate::models::resume::ExperienceEntry;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// How a catalog keyword must appear in job text to count as required.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillMatchMode {
    /// Plain substring containment; "java" matches inside "javascript".
    #[default]
    Substring,
    /// Occurrence must not touch an alphanumeric character on either side.
    WordBoundary,
}

impl FromStr for SkillMatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "substring" => Ok(SkillMatchMode::Substring),
            "word_boundary" | "word-boundary" => Ok(SkillMatchMode::WordBoundary),
            other => Err(format!(
                "unknown skill match mode '{other}' (expected 'substring' or 'word_boundary')"
            )),
        }
    }
}

/// Catalog skills present in `text`, in catalog order.
pub fn detect_job_skills(text: &str, mode: SkillMatchMode) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    SKILL_CATALOG
        .iter()
        .copied()
        .filter(|skill| match mode {
            SkillMatchMode::Substring => lowered.contains(skill),
            SkillMatchMode::WordBoundary => contains_bounded(&lowered, skill),
        })
        .collect()
}

fn contains_bounded(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(start, matched)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + matched.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// Target seniority inferred from job text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Seniority {
    /// Table keyword that matched, if any.
    pub keyword: Option<&'static str>,
    pub level: u8,
}

/// First seniority keyword (table order) found in the title or description.
/// Falls back to mid-level.
pub fn detect_seniority(job_title: &str, job_description: &str) -> Seniority {
    let title = job_title.to_lowercase();
    let description = job_description.to_lowercase();

    SENIORITY_TABLE
        .iter()
        .find(|(keyword, _)| title.contains(keyword) || description.contains(keyword))
        .map(|&(keyword, level)| Seniority {
            keyword: Some(keyword),
            level,
        })
        .unwrap_or(Seniority {
            keyword: None,
            level: DEFAULT_JOB_LEVEL,
        })
}

/// Sums the first integer found in each entry's duration text.
///
/// "3 years" adds 3, but "2018 - 2020" adds 2018: date ranges are not parsed.
/// Entries without a duration or without digits add nothing.
pub fn estimate_experience_years(experience: &[ExperienceEntry]) -> u64 {
    experience
        .iter()
        .filter_map(|entry| entry.duration.as_deref())
        .filter_map(first_integer)
        .fold(0u64, u64::saturating_add)
}

fn first_integer(text: &str) -> Option<u64> {
    // Only overflow can fail on an ASCII digit run.
    DIGIT_RUN
        .find(text)
        .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
}
