use serde::{Deserialize, Serialize};

//assignment
#[derive(Debug, Deserialize, Serialize)]
pub struct Assignment {
    pub uuid: String,
    pub course_id: String,
    pub subject_id: String,

    pub title: String,
    pub description: String,
    pub posted_by: String,
    pub due_date: i64,

    pub created_at: i64,
}
