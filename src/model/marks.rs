use serde::{Deserialize, Serialize};

//marks_entry
#[derive(Debug, Deserialize, Serialize)]
pub struct MarksEntry {
    pub uuid: String,
    pub student_id: String,
    pub subject_id: String,

    pub exam: String,
    pub obtained: i64,
    pub total: i64,
    pub entered_by: String,

    pub created_at: i64,
}
