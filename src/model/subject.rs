use serde::{Deserialize, Serialize};

//subject
#[derive(Debug, Deserialize, Serialize)]
pub struct Subject {
    pub uuid: String,
    pub course_id: String,

    pub name: String,
    pub code: String,

    pub created_at: i64,
}
