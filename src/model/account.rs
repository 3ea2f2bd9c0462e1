use serde::{Deserialize, Serialize};

//role for account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Role { Admin, Teacher, Student }
impl std::fmt::Display for Role {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{:?}", self)
    }
}

//student_profile
#[derive(Debug, Deserialize, Serialize)]
pub struct StudentProfile {
    pub uuid: String,

    pub first_name: String,
    pub last_name: String,
    pub roll_number: String,
    pub course_id: Option<String>,

    pub created_at: i64,
}
