use super::prelude::*;
use crate::{usecases, RepoError};

/// Appends one entry to the audit trail.
///
/// Returns the entry id, which doubles as the public confirmation
/// code, e.g. for OAuth data-deletion requests.
pub fn record_activity<R: AuditLogRepo>(repo: &R, entry: AuditLogEntry) -> Result<Id> {
    let id = entry.id.clone();
    repo.log_audit_entry(&entry)?;
    log::debug!("Recorded activity {} ({})", id, entry.action);
    Ok(id)
}

/// Admin view of the audit trail, most recent entries first.
pub fn list_activities<D>(
    db: &D,
    account: &EmailAddress,
    query: &AuditLogQuery,
    pagination: &Pagination,
) -> Result<Vec<AuditLogEntry>>
where
    D: UserRepo + AuditLogRepo,
{
    usecases::authorize_user_by_email(db, account, Role::Admin)?;
    Ok(db.audit_log_entries(query, pagination)?)
}

/// Looks up one entry by its id/confirmation code.
pub fn get_activity<R: AuditLogRepo>(repo: &R, id: &Id) -> Result<AuditLogEntry> {
    repo.try_get_audit_log_entry(id)?
        .ok_or(Error::Repo(RepoError::NotFound))
}
