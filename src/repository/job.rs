use diesel::prelude::*;

use crate::domain::job::{Job, STATUS_ACTIVE};
use crate::models::job::Job as DbJob;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, JobReader, JobWriter};

impl JobReader for DieselRepository {
    fn list_active_jobs(&self) -> RepositoryResult<Vec<Job>> {
        use crate::schema::jobs;

        let mut conn = self.conn()?;

        // Inactive jobs are filtered out here so they never reach matching.
        let rows: Vec<DbJob> = jobs::table
            .filter(jobs::status.eq(STATUS_ACTIVE))
            .order(jobs::id.asc())
            .load::<DbJob>(&mut conn)?;

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id.clone();
                match Job::try_from(row) {
                    Ok(job) => Some(job),
                    Err(e) => {
                        log::warn!("Skipping unreadable job {id}: {e}");
                        None
                    }
                }
            })
            .collect())
    }
}

impl JobWriter for DieselRepository {
    fn create_jobs(&self, jobs: &[Job]) -> RepositoryResult<usize> {
        use crate::schema::jobs;

        if jobs.is_empty() {
            return Ok(0);
        }

        let rows = jobs
            .iter()
            .map(DbJob::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut conn = self.conn()?;
        let inserted = conn.transaction(|conn| {
            diesel::insert_into(jobs::table)
                .values(&rows)
                .execute(conn)
                .map_err(RepositoryError::from)
        })?;

        Ok(inserted)
    }
}
