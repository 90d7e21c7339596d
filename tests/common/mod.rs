//! Helpers for integration tests.

use jobmatch::db::{DbPool, establish_connection_pool};
use jobmatch::domain::job::Job;
use jobmatch::domain::resume::{ExperienceEntry, Resume, SkillEntry};
use jobmatch::processing::embedding::{Embedder, EmbeddingError};
use tempfile::TempDir;

/// Temporary database used in integration tests; the backing directory is
/// removed when the value is dropped.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temporary directory.");
        let path = dir.path().join("test.db");
        let pool = establish_connection_pool(
            path.to_str().expect("Temporary path is not valid UTF-8."),
        )
        .expect("Failed to establish SQLite connection.");

        TestDb { _dir: dir, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

/// Maps each summary containing a marker substring to a fixed vector;
/// anything without a marker embeds to the zero vector.
pub struct StubEmbedder {
    markers: Vec<(&'static str, Vec<f32>)>,
    dimension: usize,
}

impl StubEmbedder {
    pub fn new(markers: Vec<(&'static str, Vec<f32>)>) -> Self {
        let dimension = markers.first().map(|(_, v)| v.len()).unwrap_or(3);
        Self { markers, dimension }
    }
}

impl Embedder for StubEmbedder {
    fn model_name(&self) -> &str {
        "stub"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn embed(&mut self, texts: Vec<String>) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Ok(texts
            .iter()
            .map(|text| {
                self.markers
                    .iter()
                    .find(|(marker, _)| text.contains(marker))
                    .map(|(_, vector)| vector.clone())
                    .unwrap_or_else(|| vec![0.0; self.dimension])
            })
            .collect())
    }
}

pub fn resume(id: &str, title: &str, skills: &[&str]) -> Resume {
    Resume {
        id: id.to_string(),
        title: title.to_string(),
        address: "Springfield".to_string(),
        education: Vec::new(),
        skills: skills
            .iter()
            .map(|name| SkillEntry {
                name: name.to_string(),
            })
            .collect(),
        languages: Vec::new(),
        experience: vec![ExperienceEntry {
            start_year: Some("2020".to_string()),
            end_year: Some("2023".to_string()),
        }],
    }
}

pub fn job(id: &str, job_title: &str, status: &str) -> Job {
    Job {
        id: id.to_string(),
        job_title: job_title.to_string(),
        location: "Springfield".to_string(),
        experience_level: "Mid Level".to_string(),
        required_skills: vec!["Communication".to_string()],
        description: "Help the team ship.".to_string(),
        status: status.to_string(),
    }
}
