use serde::{Deserialize, Serialize};

//attendance_record
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AttendanceRecord {
    pub student_id: String,
    pub present: bool,
}

//attendance_session
#[derive(Debug, Deserialize, Serialize)]
pub struct AttendanceSession {
    pub uuid: String,
    pub course_id: String,
    pub subject_id: String,

    pub marked_by: String,
    pub records: Vec<AttendanceRecord>,

    pub created_at: i64,
}
