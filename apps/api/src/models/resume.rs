use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit JSON `null` like a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parsed resume as handed over by the resume parser.
///
/// Every field defaults when absent or null; an empty profile is a valid
/// input and scores as zero signal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<EducationEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: Option<String>,
    pub company: Option<String>,
    /// Free text such as "3 years" or "2018 - 2020".
    pub duration: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub year: Option<String>,
}

/// Job posting text supplied per scoring call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobDescription {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

impl JobDescription {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}
