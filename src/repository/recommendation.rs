use diesel::prelude::*;
use diesel::result::QueryResult;

use crate::db::DbConnection;
use crate::domain::recommendation::MatchEntry;
use crate::models::recommendation::{
    JobMatch as DbJobMatch, NewJobMatch as DbNewJobMatch, NewResumeMatch as DbNewResumeMatch,
    ResumeMatch as DbResumeMatch,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, RecommendationReader, RecommendationWriter};

fn job_exists(conn: &mut DbConnection, job_id: &str) -> QueryResult<bool> {
    use crate::schema::jobs;

    let count: i64 = jobs::table
        .filter(jobs::id.eq(job_id))
        .count()
        .get_result(conn)?;

    Ok(count > 0)
}

fn resume_exists(conn: &mut DbConnection, resume_id: &str) -> QueryResult<bool> {
    use crate::schema::resumes;

    let count: i64 = resumes::table
        .filter(resumes::id.eq(resume_id))
        .count()
        .get_result(conn)?;

    Ok(count > 0)
}

impl RecommendationReader for DieselRepository {
    fn job_recommendations(&self, job_id: &str) -> RepositoryResult<Vec<MatchEntry>> {
        use crate::schema::job_matches;

        let mut conn = self.conn()?;

        let rows = job_matches::table
            .filter(job_matches::job_id.eq(job_id))
            .order(job_matches::position.asc())
            .load::<DbJobMatch>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|row| MatchEntry {
                id: row.resume_id,
                score: row.score,
            })
            .collect())
    }

    fn resume_recommendations(&self, resume_id: &str) -> RepositoryResult<Vec<MatchEntry>> {
        use crate::schema::resume_matches;

        let mut conn = self.conn()?;

        let rows = resume_matches::table
            .filter(resume_matches::resume_id.eq(resume_id))
            .order(resume_matches::position.asc())
            .load::<DbResumeMatch>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|row| MatchEntry {
                id: row.job_id,
                score: row.score,
            })
            .collect())
    }
}

impl RecommendationWriter for DieselRepository {
    fn replace_job_recommendations(
        &self,
        job_id: &str,
        entries: &[MatchEntry],
    ) -> RepositoryResult<usize> {
        use crate::schema::job_matches;

        let mut conn = self.conn()?;

        if !job_exists(&mut conn, job_id)? {
            return Err(RepositoryError::NotFound(format!("job {job_id}")));
        }

        let rows = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| DbNewJobMatch {
                job_id: job_id.to_string(),
                resume_id: entry.id.clone(),
                score: entry.score,
                position: position as i32,
            })
            .collect::<Vec<_>>();

        let inserted = conn.transaction(|conn| {
            diesel::delete(job_matches::table.filter(job_matches::job_id.eq(job_id)))
                .execute(conn)?;

            if rows.is_empty() {
                return Ok(0);
            }

            diesel::insert_into(job_matches::table)
                .values(&rows)
                .execute(conn)
                .map_err(RepositoryError::from)
        })?;

        Ok(inserted)
    }

    fn replace_resume_recommendations(
        &self,
        resume_id: &str,
        entries: &[MatchEntry],
    ) -> RepositoryResult<usize> {
        use crate::schema::resume_matches;

        let mut conn = self.conn()?;

        if !resume_exists(&mut conn, resume_id)? {
            return Err(RepositoryError::NotFound(format!("resume {resume_id}")));
        }

        let rows = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| DbNewResumeMatch {
                resume_id: resume_id.to_string(),
                job_id: entry.id.clone(),
                score: entry.score,
                position: position as i32,
            })
            .collect::<Vec<_>>();

        let inserted = conn.transaction(|conn| {
            diesel::delete(resume_matches::table.filter(resume_matches::resume_id.eq(resume_id)))
                .execute(conn)?;

            if rows.is_empty() {
                return Ok(0);
            }

            diesel::insert_into(resume_matches::table)
                .values(&rows)
                .execute(conn)
                .map_err(RepositoryError::from)
        })?;

        Ok(inserted)
    }
}
