use serde::{Deserialize, Serialize};

const PROGRAMMING: &[&str] = &[
    "python", "java", "javascript", "c++", "c#", "ruby", "php", "swift", "kotlin", "go", "rust",
];
const WEB: &[&str] = &[
    "html", "css", "javascript", "react", "angular", "vue", "node", "django", "flask",
];
const DATABASE: &[&str] = &["sql", "mysql", "postgresql", "mongodb", "oracle", "redis"];
const DEVOPS: &[&str] = &["docker", "kubernetes", "aws", "azure", "gcp", "ci/cd", "jenkins"];

/// Per-category counts of a candidate's skills, for the review screen.
///
/// A skill is counted in every category with a keyword contained in it, so
/// "JavaScript" lands in both `programming` and `web`. `other` is what remains
/// of the total and never goes below zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategories {
    pub programming: usize,
    pub web: usize,
    pub database: usize,
    pub devops: usize,
    pub other: usize,
}

pub fn categorize_skills(skills: &[String]) -> SkillCategories {
    let lowered: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();
    let count = |keywords: &[&str]| {
        lowered
            .iter()
            .filter(|skill| keywords.iter().any(|k| skill.contains(k)))
            .count()
    };

    let programming = count(PROGRAMMING);
    let web = count(WEB);
    let database = count(DATABASE);
    let devops = count(DEVOPS);
    let other = lowered
        .len()
        .saturating_sub(programming + web + database + devops);

    SkillCategories {
        programming,
        web,
        database,
        devops,
        other,
    }
}
