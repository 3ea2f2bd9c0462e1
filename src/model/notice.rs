use serde::{Deserialize, Serialize};

//notice
#[derive(Debug, Deserialize, Serialize)]
pub struct Notice {
    pub uuid: String,
    pub course_id: String,

    pub title: String,
    pub content: String,
    pub posted_by: String,

    pub created_at: i64,
}
