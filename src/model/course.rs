use serde::{Deserialize, Serialize};

//course
#[derive(Debug, Deserialize, Serialize)]
pub struct Course {
    pub uuid: String,

    pub name: String,
    pub code: String,

    pub created_at: i64,
}
