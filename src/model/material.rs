use serde::{Deserialize, Serialize};

//study_material
#[derive(Debug, Deserialize, Serialize)]
pub struct StudyMaterial {
    pub uuid: String,
    pub course_id: String,
    pub subject_id: String,

    pub title: String,
    pub link: String,
    pub posted_by: String,

    pub created_at: i64,
}
