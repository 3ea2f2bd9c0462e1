use mongodb::bson::{doc, Bson, Document};
use serde::{Deserialize, Serialize};

use super::Account::Role;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum NotificationType {
    Notice,
    Attendance,
    Assignment,
    Marks,
    Material,
    General,
}
impl std::fmt::Display for NotificationType {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{:?}", self)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Priority { Low, Medium, High, Urgent }
impl std::fmt::Display for Priority {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{:?}", self)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AudienceType {
    All,
    Teachers,
    Students,
    Course,
    Specific,
}
impl std::fmt::Display for AudienceType {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{:?}", self)
    }
}

/// Snapshot of whoever triggered the notification, not a live reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sender {
    pub id: String,
    pub role: Role,
    pub name: String,
}

/// The stored targeting rule. Immutable once the notification is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipients {
    pub r#type: AudienceType,
    pub course_id: Option<String>,
    pub subject_id: Option<String>,
    pub user_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadReceipt {
    pub user_id: String,
    pub read_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedData {
    pub entity_type: String,
    pub entity_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub uuid: String,

    pub title: String,
    pub message: String,
    pub n_type: NotificationType,
    pub priority: Priority,

    pub sender: Sender,
    pub recipients: Recipients,

    pub read_by: Vec<ReadReceipt>,
    pub related_data: Option<RelatedData>,

    pub is_active: bool,
    // Stored but not filtered on anywhere yet
    pub expires_at: Option<i64>,

    pub created_at: i64,
}

impl Notification {
    /// Builds the filter matching every active notification visible to the
    /// given user. The same document backs both the list and the count
    /// queries so the two can never drift apart.
    ///
    /// `course_id` is the student's enrolled course when known; when the
    /// lookup came back empty the course clause is simply left out.
    pub fn visibility_filter(
        user_id: &str,
        role: &Role,
        course_id: Option<&str>,
    ) -> Document {
        if let Role::Admin = role {
            return doc! { "is_active": true };
        }

        let mut clauses: Vec<Bson> = vec![
            doc! { "recipients.type": AudienceType::All.to_string() }.into(),
            doc! { "recipients.user_ids": user_id }.into(),
        ];

        match role {
            Role::Teacher => {
                clauses.push(
                    doc! { "recipients.type": AudienceType::Teachers.to_string() }.into(),
                );
            }
            Role::Student => {
                clauses.push(
                    doc! { "recipients.type": AudienceType::Students.to_string() }.into(),
                );
                if let Some(course_id) = course_id {
                    clauses.push(doc! { "recipients.course_id": course_id }.into());
                }
            }
            Role::Admin => unreachable!(),
        }

        doc! {
            "is_active": true,
            "$or": clauses,
        }
    }

    /// Visibility filter narrowed to notifications the user has not read yet.
    pub fn unread_filter(
        user_id: &str,
        role: &Role,
        course_id: Option<&str>,
    ) -> Document {
        let mut filter = Self::visibility_filter(user_id, role, course_id);
        filter.insert("read_by.user_id", doc! { "$ne": user_id });
        filter
    }

    /// Guard document for the read-marking update: matches only when the
    /// user is not already in `read_by`, so the paired `$push` can never
    /// insert a duplicate receipt.
    pub fn not_yet_read_by(uuid: &str, user_id: &str) -> Document {
        doc! {
            "uuid": uuid,
            "read_by.user_id": { "$ne": user_id },
        }
    }

    pub fn read_receipt_update(user_id: &str, now: i64) -> Document {
        doc! {
            "$push": {
                "read_by": {
                    "user_id": user_id,
                    "read_at": now,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn or_clauses(filter: &Document) -> Vec<Document> {
        filter
            .get_array("$or")
            .unwrap()
            .iter()
            .map(|clause| clause.as_document().unwrap().clone())
            .collect()
    }

    #[test]
    fn admin_sees_every_active_notification() {
        let filter = Notification::visibility_filter("admin-1", &Role::Admin, None);
        assert_eq!(filter, doc! { "is_active": true });
    }

    #[test]
    fn teacher_filter_has_all_specific_and_teachers_clauses() {
        let filter = Notification::visibility_filter("teacher-1", &Role::Teacher, None);

        assert_eq!(filter.get_bool("is_active").unwrap(), true);

        let clauses = or_clauses(&filter);
        assert_eq!(clauses.len(), 3);
        assert!(clauses.contains(&doc! { "recipients.type": "All" }));
        assert!(clauses.contains(&doc! { "recipients.user_ids": "teacher-1" }));
        assert!(clauses.contains(&doc! { "recipients.type": "Teachers" }));
    }

    #[test]
    fn student_filter_includes_course_clause_when_enrolled() {
        let filter =
            Notification::visibility_filter("student-1", &Role::Student, Some("course-x"));

        let clauses = or_clauses(&filter);
        assert_eq!(clauses.len(), 4);
        assert!(clauses.contains(&doc! { "recipients.type": "All" }));
        assert!(clauses.contains(&doc! { "recipients.user_ids": "student-1" }));
        assert!(clauses.contains(&doc! { "recipients.type": "Students" }));
        assert!(clauses.contains(&doc! { "recipients.course_id": "course-x" }));
    }

    #[test]
    fn student_without_course_gets_no_course_clause() {
        let filter = Notification::visibility_filter("student-1", &Role::Student, None);

        let clauses = or_clauses(&filter);
        assert_eq!(clauses.len(), 3);
        assert!(!clauses
            .iter()
            .any(|clause| clause.contains_key("recipients.course_id")));
    }

    #[test]
    fn unread_filter_excludes_already_read() {
        let filter = Notification::unread_filter("student-1", &Role::Student, None);

        assert_eq!(
            filter.get_document("read_by.user_id").unwrap(),
            &doc! { "$ne": "student-1" }
        );
        // Visibility part is untouched
        assert_eq!(filter.get_bool("is_active").unwrap(), true);
        assert!(filter.contains_key("$or"));
    }

    #[test]
    fn read_marking_guard_blocks_duplicates() {
        let guard = Notification::not_yet_read_by("notif-1", "user-1");
        assert_eq!(
            guard,
            doc! {
                "uuid": "notif-1",
                "read_by.user_id": { "$ne": "user-1" },
            }
        );

        let update = Notification::read_receipt_update("user-1", 1700000000000);
        assert_eq!(
            update,
            doc! {
                "$push": {
                    "read_by": {
                        "user_id": "user-1",
                        "read_at": 1700000000000_i64,
                    }
                }
            }
        );
    }
}
