use chrono::Utc;
use mongodb::Database;
use uuid::Uuid;

use crate::Model::Notification::{
    AudienceType, Notification, NotificationType, Priority, Recipients, RelatedData, Sender,
};

/// Domain events that produce a notification. The audience rule and message
/// template for each are fixed here, not chosen by the caller.
#[derive(Debug, Clone)]
pub enum Event {
    Notice {
        notice_id: String,
        course_id: String,
        title: String,
    },
    Assignment {
        assignment_id: String,
        course_id: String,
        subject_id: String,
        title: String,
    },
    Material {
        material_id: String,
        course_id: String,
        subject_id: String,
        title: String,
    },
    Attendance {
        session_id: String,
        course_id: String,
        subject_id: String,
        subject_name: String,
    },
    Marks {
        entry_id: String,
        student_id: String,
        subject_name: String,
    },
}

/// Writes the notification for a domain event. Never fails the caller:
/// a lost notification must not fail the action that produced it, so any
/// store error is logged and swallowed here.
pub async fn emit(db: &Database, sender: Sender, event: Event) {
    if let Err(error) = try_emit(db, sender, event).await {
        log::error!("notification emit failed: {:?}", error);
    }
}

async fn try_emit(
    db: &Database,
    sender: Sender,
    event: Event,
) -> mongodb::error::Result<()> {
    let notification = build(sender, event, Utc::now().timestamp_millis());

    let collection = db.collection::<Notification>("notification");
    collection.insert_one(notification).await?;

    Ok(())
}

fn build(sender: Sender, event: Event, now: i64) -> Notification {
    let (n_type, title, message, recipients, related_data) = match event {
        Event::Notice { notice_id, course_id, title } => (
            NotificationType::Notice,
            title.clone(),
            format!("{} posted a new notice: {}", sender.name, title),
            Recipients {
                r#type: AudienceType::Course,
                course_id: Some(course_id),
                subject_id: None,
                user_ids: Vec::new(),
            },
            RelatedData {
                entity_type: "notice".to_string(),
                entity_id: notice_id,
            },
        ),
        Event::Assignment { assignment_id, course_id, subject_id, title } => (
            NotificationType::Assignment,
            title.clone(),
            format!("{} added a new assignment: {}", sender.name, title),
            Recipients {
                r#type: AudienceType::Course,
                course_id: Some(course_id),
                subject_id: Some(subject_id),
                user_ids: Vec::new(),
            },
            RelatedData {
                entity_type: "assignment".to_string(),
                entity_id: assignment_id,
            },
        ),
        Event::Material { material_id, course_id, subject_id, title } => (
            NotificationType::Material,
            title.clone(),
            format!("{} uploaded new study material: {}", sender.name, title),
            Recipients {
                r#type: AudienceType::Course,
                course_id: Some(course_id),
                subject_id: Some(subject_id),
                user_ids: Vec::new(),
            },
            RelatedData {
                entity_type: "material".to_string(),
                entity_id: material_id,
            },
        ),
        Event::Attendance { session_id, course_id, subject_id, subject_name } => (
            NotificationType::Attendance,
            format!("Attendance: {}", subject_name),
            format!("{} marked attendance for {}", sender.name, subject_name),
            Recipients {
                r#type: AudienceType::Course,
                course_id: Some(course_id),
                subject_id: Some(subject_id),
                user_ids: Vec::new(),
            },
            RelatedData {
                entity_type: "attendance".to_string(),
                entity_id: session_id,
            },
        ),
        Event::Marks { entry_id, student_id, subject_name } => (
            NotificationType::Marks,
            format!("Marks updated: {}", subject_name),
            format!("{} updated marks for {}", sender.name, subject_name),
            Recipients {
                r#type: AudienceType::Specific,
                course_id: None,
                subject_id: None,
                user_ids: vec![student_id],
            },
            RelatedData {
                entity_type: "marks".to_string(),
                entity_id: entry_id,
            },
        ),
    };

    Notification {
        uuid: Uuid::new_v4().to_string(),
        title,
        message,
        n_type,
        priority: Priority::Medium,
        sender,
        recipients,
        read_by: Vec::new(),
        related_data: Some(related_data),
        is_active: true,
        expires_at: None,
        created_at: now,
    }
}

#[cfg(test)]
mod tests {
    use crate::Model::Account::Role;

    use super::*;

    fn sender() -> Sender {
        Sender {
            id: "teacher-1".to_string(),
            role: Role::Teacher,
            name: "Prof. Karim".to_string(),
        }
    }

    #[test]
    fn notice_event_targets_the_course() {
        let notification = build(
            sender(),
            Event::Notice {
                notice_id: "notice-1".to_string(),
                course_id: "course-x".to_string(),
                title: "Exam schedule".to_string(),
            },
            42,
        );

        assert_eq!(notification.n_type, NotificationType::Notice);
        assert_eq!(notification.recipients.r#type, AudienceType::Course);
        assert_eq!(notification.recipients.course_id.as_deref(), Some("course-x"));
        assert_eq!(notification.recipients.subject_id, None);
        assert!(notification.recipients.user_ids.is_empty());
        assert_eq!(
            notification.message,
            "Prof. Karim posted a new notice: Exam schedule"
        );
        assert_eq!(notification.created_at, 42);
    }

    #[test]
    fn assignment_event_is_course_and_subject_scoped() {
        let notification = build(
            sender(),
            Event::Assignment {
                assignment_id: "assign-1".to_string(),
                course_id: "course-x".to_string(),
                subject_id: "subject-y".to_string(),
                title: "Lab report 3".to_string(),
            },
            42,
        );

        assert_eq!(notification.recipients.r#type, AudienceType::Course);
        assert_eq!(notification.recipients.course_id.as_deref(), Some("course-x"));
        assert_eq!(notification.recipients.subject_id.as_deref(), Some("subject-y"));
        assert_eq!(
            notification.message,
            "Prof. Karim added a new assignment: Lab report 3"
        );

        let related = notification.related_data.unwrap();
        assert_eq!(related.entity_type, "assignment");
        assert_eq!(related.entity_id, "assign-1");
    }

    #[test]
    fn marks_event_targets_exactly_one_student() {
        let notification = build(
            sender(),
            Event::Marks {
                entry_id: "entry-1".to_string(),
                student_id: "student-s".to_string(),
                subject_name: "Physics".to_string(),
            },
            42,
        );

        assert_eq!(notification.recipients.r#type, AudienceType::Specific);
        assert_eq!(notification.recipients.user_ids, vec!["student-s".to_string()]);
        assert_eq!(notification.recipients.course_id, None);
        assert_eq!(
            notification.message,
            "Prof. Karim updated marks for Physics"
        );
    }

    #[tokio::test]
    async fn emit_swallows_store_failures() {
        // Nothing listens on port 1; with the short server-selection
        // timeout every write through this client fails fast.
        let client = mongodb::Client::with_uri_str(
            "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=100&connectTimeoutMS=100",
        )
        .await
        .unwrap();

        let db = client.database("campushub_test");

        // The producing action must survive the lost write: emit returning
        // at all (instead of erroring or panicking) is the property.
        emit(
            &db,
            sender(),
            Event::Assignment {
                assignment_id: "assign-1".to_string(),
                course_id: "course-x".to_string(),
                subject_id: "subject-y".to_string(),
                title: "Lab report 3".to_string(),
            },
        )
        .await;
    }

    #[test]
    fn every_event_starts_active_unread_and_medium_priority() {
        let notification = build(
            sender(),
            Event::Attendance {
                session_id: "session-1".to_string(),
                course_id: "course-x".to_string(),
                subject_id: "subject-y".to_string(),
                subject_name: "Chemistry".to_string(),
            },
            42,
        );

        assert!(notification.is_active);
        assert!(notification.read_by.is_empty());
        assert_eq!(notification.priority, Priority::Medium);
        assert_eq!(notification.expires_at, None);
        assert_eq!(
            notification.message,
            "Prof. Karim marked attendance for Chemistry"
        );
    }
}
