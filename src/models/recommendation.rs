use diesel::prelude::*;

/// Stored row of a job's recommendation list, ordered by `position`.
#[derive(Debug, Clone, Queryable)]
pub struct JobMatch {
    pub id: i32,
    pub job_id: String,
    pub resume_id: String,
    pub score: f32,
    pub position: i32,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::job_matches)]
pub struct NewJobMatch {
    pub job_id: String,
    pub resume_id: String,
    pub score: f32,
    pub position: i32,
}

/// Stored row of a résumé's recommendation list, ordered by `position`.
#[derive(Debug, Clone, Queryable)]
pub struct ResumeMatch {
    pub id: i32,
    pub resume_id: String,
    pub job_id: String,
    pub score: f32,
    pub position: i32,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::resume_matches)]
pub struct NewResumeMatch {
    pub resume_id: String,
    pub job_id: String,
    pub score: f32,
    pub position: i32,
}
