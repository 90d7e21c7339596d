use diesel::prelude::*;

use crate::domain::resume::Resume;
use crate::models::resume::Resume as DbResume;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ResumeReader, ResumeWriter};

impl ResumeReader for DieselRepository {
    fn list_resumes(&self) -> RepositoryResult<Vec<Resume>> {
        use crate::schema::resumes;

        let mut conn = self.conn()?;

        let rows: Vec<DbResume> = resumes::table
            .order(resumes::id.asc())
            .load::<DbResume>(&mut conn)?;

        // A record that fails to decode is skipped, not fatal for the run.
        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id.clone();
                match Resume::try_from(row) {
                    Ok(resume) => Some(resume),
                    Err(e) => {
                        log::warn!("Skipping unreadable resume {id}: {e}");
                        None
                    }
                }
            })
            .collect())
    }
}

impl ResumeWriter for DieselRepository {
    fn create_resumes(&self, resumes: &[Resume]) -> RepositoryResult<usize> {
        use crate::schema::resumes;

        if resumes.is_empty() {
            return Ok(0);
        }

        let rows = resumes
            .iter()
            .map(DbResume::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut conn = self.conn()?;
        let inserted = conn.transaction(|conn| {
            diesel::insert_into(resumes::table)
                .values(&rows)
                .execute(conn)
                .map_err(RepositoryError::from)
        })?;

        Ok(inserted)
    }
}
