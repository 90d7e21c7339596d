/// Status value a job must carry to take part in matching.
pub const STATUS_ACTIVE: &str = "Active";

/// A job posting as stored by the platform.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub id: String,
    pub job_title: String,
    pub location: String,
    pub experience_level: String,
    pub required_skills: Vec<String>,
    pub description: String,
    pub status: String,
}

impl Job {
    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }
}
