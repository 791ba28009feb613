//! Static keyword tables used for skill detection and seniority inference.
//!
//! Order matters: skills are reported in catalog order, and the first
//! seniority keyword found wins.

use serde::Serialize;

/// Recognised technology keywords, lowercase.
pub const SKILL_CATALOG: &[&str] = &[
    "python",
    "javascript",
    "java",
    "c++",
    "c#",
    "ruby",
    "php",
    "swift",
    "kotlin",
    "go",
    "rust",
    "typescript",
    "html",
    "css",
    "django",
    "flask",
    "react",
    "angular",
    "vue",
    "node",
    "spring",
    "rails",
    "laravel",
    ".net",
    "tensorflow",
    "pytorch",
    "pandas",
    "numpy",
    "docker",
    "kubernetes",
    "git",
    "aws",
    "azure",
    "gcp",
    "mongodb",
    "postgresql",
    "mysql",
    "sql",
    "nosql",
    "linux",
    "ci/cd",
    "jenkins",
    "github actions",
    "rest",
    "graphql",
    "api",
];

/// Seniority keyword → level, in scan order.
pub const SENIORITY_TABLE: &[(&str, u8)] = &[
    ("junior", 1),
    ("mid-level", 2),
    ("senior", 3),
    ("lead", 4),
    ("principal", 5),
    ("architect", 5),
];

/// Level assumed when no seniority keyword appears in the job text.
pub const DEFAULT_JOB_LEVEL: u8 = 2;

#[derive(Debug, Clone, Serialize)]
pub struct SeniorityLevel {
    pub keyword: &'static str,
    pub level: u8,
}

/// Serializable view of both tables, served by `GET /api/v1/match/catalog`.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub skills: Vec<&'static str>,
    pub seniority: Vec<SeniorityLevel>,
    pub default_level: u8,
}

pub fn catalog_view() -> CatalogView {
    CatalogView {
        skills: SKILL_CATALOG.to_vec(),
        seniority: SENIORITY_TABLE
            .iter()
            .map(|&(keyword, level)| SeniorityLevel { keyword, level })
            .collect(),
        default_level: DEFAULT_JOB_LEVEL,
    }
}
