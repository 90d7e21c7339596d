use diesel::prelude::*;

use crate::domain::job::Job as DomainJob;
use crate::models::{decode_json_list, encode_json_list};
use crate::repository::errors::RepositoryError;

/// Database row for a job posting; `required_skills` is a JSON text column.
#[derive(Debug, Clone, Queryable, Insertable)]
#[diesel(table_name = crate::schema::jobs)]
pub struct Job {
    pub id: String,
    pub job_title: String,
    pub location: String,
    pub experience_level: String,
    pub required_skills: String,
    pub description: String,
    pub status: String,
}

impl TryFrom<Job> for DomainJob {
    type Error = RepositoryError;

    fn try_from(row: Job) -> Result<Self, Self::Error> {
        Ok(DomainJob {
            required_skills: decode_json_list(&row.required_skills, "required_skills")?,
            id: row.id,
            job_title: row.job_title,
            location: row.location,
            experience_level: row.experience_level,
            description: row.description,
            status: row.status,
        })
    }
}

impl TryFrom<&DomainJob> for Job {
    type Error = RepositoryError;

    fn try_from(job: &DomainJob) -> Result<Self, Self::Error> {
        Ok(Job {
            id: job.id.clone(),
            job_title: job.job_title.clone(),
            location: job.location.clone(),
            experience_level: job.experience_level.clone(),
            required_skills: encode_json_list(&job.required_skills, "required_skills")?,
            description: job.description.clone(),
            status: job.status.clone(),
        })
    }
}
