//! Canonical text summaries fed to the embedding model.
//!
//! Labels and field order are part of the contract: stored match scores are
//! only comparable across runs while the summary layout stays fixed.

use crate::domain::job::Job;
use crate::domain::resume::{ExperienceEntry, Resume};

/// Total professional experience in years, with a count of entries whose
/// start year could not be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExperienceTenure {
    pub years: i32,
    pub malformed_entries: usize,
}

/// Sum the `max(0, end - start)` contribution of every experience entry.
///
/// A missing start year is read as `current_year`. A missing, empty or
/// non-numeric end year marks an ongoing position and is also read as
/// `current_year`. An entry whose start year is present but not an integer
/// contributes nothing and is counted as malformed instead of failing the
/// whole record. Year arithmetic saturates, so extreme values clamp
/// instead of wrapping.
pub fn total_experience_years(entries: &[ExperienceEntry], current_year: i32) -> ExperienceTenure {
    let mut tenure = ExperienceTenure::default();

    for entry in entries {
        let start = match entry.start_year.as_deref() {
            None => current_year,
            Some(raw) => match raw.trim().parse::<i32>() {
                Ok(year) => year,
                Err(_) => {
                    tenure.malformed_entries += 1;
                    continue;
                }
            },
        };

        let end = entry
            .end_year
            .as_deref()
            .and_then(parse_end_year)
            .unwrap_or(current_year);

        tenure.years = tenure.years.saturating_add(end.saturating_sub(start).max(0));
    }

    tenure
}

/// End years must be plain digit strings; anything else (`Present`, `""`,
/// even `" 2022 "`) is an open-ended marker. Start years are parsed with
/// surrounding whitespace allowed, end years are not.
fn parse_end_year(raw: &str) -> Option<i32> {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Map total years of experience to the platform's seniority labels.
pub fn experience_level(total_years: f32) -> &'static str {
    if total_years < 2.0 {
        "Entry Level"
    } else if total_years < 5.0 {
        "Mid Level"
    } else if total_years < 10.0 {
        "Senior Level"
    } else {
        "Executive"
    }
}

/// Build a textual prompt describing a résumé for embedding.
///
/// The prompt includes the following fields in order: title, address,
/// experience level, education, skills and languages.
fn resume_prompt(
    title: &str,
    address: &str,
    level: &str,
    education: &str,
    skills: &str,
    languages: &str,
) -> String {
    format!(
        "Title: {title}\nAddress: {address}\nExperience Level: {level}\nEducation: {education}\nSkills: {skills}\nLanguages: {languages}",
    )
}

/// Build a textual prompt describing a job posting for embedding.
///
/// The prompt includes the following fields in order: job title, location,
/// experience level, required skills and description.
fn job_prompt(
    job_title: &str,
    location: &str,
    level: &str,
    skills: &str,
    description: &str,
) -> String {
    format!(
        "Job Title: {job_title}\nLocation: {location}\nExperience Level: {level}\nRequired Skills: {skills}\nDescription: {description}",
    )
}

/// Render a résumé into its embedding summary, using a precomputed
/// seniority level (see [`total_experience_years`] and
/// [`experience_level`]).
pub fn resume_summary(resume: &Resume, level: &str) -> String {
    let education = join_list(resume.education.iter().map(|entry| entry.title.as_str()));
    let skills = join_list(resume.skills.iter().map(|entry| entry.name.as_str()));
    let languages = join_list(resume.languages.iter().map(|entry| entry.name.as_str()));

    resume_prompt(
        &resume.title,
        &resume.address,
        level,
        &education,
        &skills,
        &languages,
    )
}

/// Render a job posting into its embedding summary.
pub fn job_summary(job: &Job) -> String {
    let skills = job.required_skills.join(", ");

    job_prompt(
        &job.job_title,
        &job.location,
        &job.experience_level,
        &skills,
        &job.description,
    )
}

fn join_list<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.collect::<Vec<_>>().join(", ")
}
