use serde::{Deserialize, Serialize};

/// A single education record; only the degree or program title feeds the
/// summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageEntry {
    #[serde(rename = "language")]
    pub name: String,
}

/// One employment period. Years are kept as free-form strings: the platform
/// stores ongoing positions with markers like `Present` instead of a number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(default)]
    pub start_year: Option<String>,
    #[serde(default)]
    pub end_year: Option<String>,
}

/// A candidate résumé as stored by the platform.
#[derive(Debug, Clone, PartialEq)]
pub struct Resume {
    pub id: String,
    pub title: String,
    pub address: String,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillEntry>,
    pub languages: Vec<LanguageEntry>,
    pub experience: Vec<ExperienceEntry>,
}
