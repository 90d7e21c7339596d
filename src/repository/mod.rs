use diesel::r2d2::{ConnectionManager, PooledConnection};

use crate::db::{DbConnection, DbPool};
use crate::domain::job::Job;
use crate::domain::recommendation::MatchEntry;
use crate::domain::resume::Resume;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod job;
pub mod recommendation;
pub mod resume;

pub trait ResumeReader {
    fn list_resumes(&self) -> RepositoryResult<Vec<Resume>>;
}

pub trait ResumeWriter {
    fn create_resumes(&self, resumes: &[Resume]) -> RepositoryResult<usize>;
}

pub trait JobReader {
    fn list_active_jobs(&self) -> RepositoryResult<Vec<Job>>;
}

pub trait JobWriter {
    fn create_jobs(&self, jobs: &[Job]) -> RepositoryResult<usize>;
}

pub trait RecommendationReader {
    fn job_recommendations(&self, job_id: &str) -> RepositoryResult<Vec<MatchEntry>>;
    fn resume_recommendations(&self, resume_id: &str) -> RepositoryResult<Vec<MatchEntry>>;
}

pub trait RecommendationWriter {
    fn replace_job_recommendations(
        &self,
        job_id: &str,
        entries: &[MatchEntry],
    ) -> RepositoryResult<usize>;
    fn replace_resume_recommendations(
        &self,
        resume_id: &str,
        entries: &[MatchEntry],
    ) -> RepositoryResult<usize>;
}

/// Diesel-backed repository over a shared connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<PooledConnection<ConnectionManager<DbConnection>>> {
        Ok(self.pool.get()?)
    }
}
