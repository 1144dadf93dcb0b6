use crate::{email::*, id::Id, time::*};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub at: TimestampMs,
    pub by: Option<EmailAddress>,
}

impl Activity {
    pub fn now(by: Option<EmailAddress>) -> Self {
        Self {
            at: TimestampMs::now(),
            by,
        }
    }
}

/// One record of the append-only audit trail.
///
/// `action` is a dotted verb like `trip.create` or `user.ban`,
/// `context` names the affected record.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogEntry {
    pub id       : Id,
    pub activity : Activity,
    pub action   : String,
    pub context  : Option<String>,
    pub comment  : Option<String>,
}

impl AuditLogEntry {
    pub fn new(activity: Activity, action: impl Into<String>) -> Self {
        Self {
            id: Id::new(),
            activity,
            action: action.into(),
            context: None,
            comment: None,
        }
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}
