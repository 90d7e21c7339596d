use diesel::prelude::*;

use crate::domain::resume::Resume as DomainResume;
use crate::models::{decode_json_list, encode_json_list};
use crate::repository::errors::RepositoryError;

/// Database row for a résumé. The list-valued fields are stored as JSON
/// text columns.
#[derive(Debug, Clone, Queryable, Insertable)]
#[diesel(table_name = crate::schema::resumes)]
pub struct Resume {
    pub id: String,
    pub title: String,
    pub address: String,
    pub education: String,
    pub skills: String,
    pub languages: String,
    pub experience: String,
}

impl TryFrom<Resume> for DomainResume {
    type Error = RepositoryError;

    fn try_from(row: Resume) -> Result<Self, Self::Error> {
        Ok(DomainResume {
            education: decode_json_list(&row.education, "education")?,
            skills: decode_json_list(&row.skills, "skills")?,
            languages: decode_json_list(&row.languages, "languages")?,
            experience: decode_json_list(&row.experience, "experience")?,
            id: row.id,
            title: row.title,
            address: row.address,
        })
    }
}

impl TryFrom<&DomainResume> for Resume {
    type Error = RepositoryError;

    fn try_from(resume: &DomainResume) -> Result<Self, Self::Error> {
        Ok(Resume {
            id: resume.id.clone(),
            title: resume.title.clone(),
            address: resume.address.clone(),
            education: encode_json_list(&resume.education, "education")?,
            skills: encode_json_list(&resume.skills, "skills")?,
            languages: encode_json_list(&resume.languages, "languages")?,
            experience: encode_json_list(&resume.experience, "experience")?,
        })
    }
}
