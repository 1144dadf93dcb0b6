use serde::Serialize;

use tw_entities::{
    activity::{Activity, AuditLogEntry},
    email::EmailAddress,
};

#[derive(Debug, Serialize)]
pub struct ActivityRecord {
    pub id: String,
    pub at: i64,
    pub by: Option<String>,
    pub action: String,
    pub context: Option<String>,
    pub comment: Option<String>,
}

impl From<AuditLogEntry> for ActivityRecord {
    fn from(from: AuditLogEntry) -> Self {
        let AuditLogEntry {
            id,
            activity: Activity { at, by },
            action,
            context,
            comment,
        } = from;
        Self {
            id: id.into(),
            at: at.as_millis(),
            by: by.map(EmailAddress::into_string),
            action,
            context,
            comment,
        }
    }
}
