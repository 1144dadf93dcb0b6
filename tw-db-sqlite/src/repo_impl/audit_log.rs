use super::*;

impl AuditLogRepo for DbReadOnly<'_> {
    fn log_audit_entry(&self, _entry: &AuditLogEntry) -> Result<()> {
        unreachable!();
    }

    fn audit_log_entries(
        &self,
        query: &AuditLogQuery,
        pagination: &Pagination,
    ) -> Result<Vec<AuditLogEntry>> {
        audit_log_entries(&mut self.conn.borrow_mut(), query, pagination)
    }
    fn try_get_audit_log_entry(&self, id: &Id) -> Result<Option<AuditLogEntry>> {
        try_get_audit_log_entry(&mut self.conn.borrow_mut(), id)
    }
    fn count_audit_log_entries(&self) -> Result<usize> {
        count_audit_log_entries(&mut self.conn.borrow_mut())
    }
}

impl AuditLogRepo for DbReadWrite<'_> {
    fn log_audit_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        log_audit_entry(&mut self.conn.borrow_mut(), entry)
    }

    fn audit_log_entries(
        &self,
        query: &AuditLogQuery,
        pagination: &Pagination,
    ) -> Result<Vec<AuditLogEntry>> {
        audit_log_entries(&mut self.conn.borrow_mut(), query, pagination)
    }
    fn try_get_audit_log_entry(&self, id: &Id) -> Result<Option<AuditLogEntry>> {
        try_get_audit_log_entry(&mut self.conn.borrow_mut(), id)
    }
    fn count_audit_log_entries(&self) -> Result<usize> {
        count_audit_log_entries(&mut self.conn.borrow_mut())
    }
}

impl AuditLogRepo for DbConnection<'_> {
    fn log_audit_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        log_audit_entry(&mut self.conn.borrow_mut(), entry)
    }

    fn audit_log_entries(
        &self,
        query: &AuditLogQuery,
        pagination: &Pagination,
    ) -> Result<Vec<AuditLogEntry>> {
        audit_log_entries(&mut self.conn.borrow_mut(), query, pagination)
    }
    fn try_get_audit_log_entry(&self, id: &Id) -> Result<Option<AuditLogEntry>> {
        try_get_audit_log_entry(&mut self.conn.borrow_mut(), id)
    }
    fn count_audit_log_entries(&self) -> Result<usize> {
        count_audit_log_entries(&mut self.conn.borrow_mut())
    }
}

fn load_audit_log_entry(model: models::AuditLogEntity) -> AuditLogEntry {
    let models::AuditLogEntity {
        id,
        at_ms,
        created_by,
        action,
        context,
        comment,
    } = model;
    AuditLogEntry {
        id: id.into(),
        activity: Activity {
            at: TimestampMs::from_millis(at_ms),
            by: created_by.map(EmailAddress::new_unchecked),
        },
        action,
        context,
        comment,
    }
}

fn log_audit_entry(conn: &mut SqliteConnection, entry: &AuditLogEntry) -> Result<()> {
    let model = models::NewAuditLogEntry {
        id: entry.id.as_str(),
        at_ms: entry.activity.at.as_millis(),
        created_by: entry.activity.by.as_ref().map(EmailAddress::as_str),
        action: &entry.action,
        context: entry.context.as_deref(),
        comment: entry.comment.as_deref(),
    };
    match diesel::insert_into(schema::audit_log::table)
        .values(&model)
        .execute(conn)
    {
        Ok(_) => Ok(()),
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            Err(repo::Error::AlreadyExists)
        }
        Err(err) => Err(from_diesel_err(err)),
    }
}

fn audit_log_entries(
    conn: &mut SqliteConnection,
    query: &AuditLogQuery,
    pagination: &Pagination,
) -> Result<Vec<AuditLogEntry>> {
    use schema::audit_log::dsl;
    let mut sql_query = dsl::audit_log
        .select((
            dsl::id,
            dsl::at_ms,
            dsl::created_by,
            dsl::action,
            dsl::context,
            dsl::comment,
        ))
        // Entries within the same millisecond keep a stable
        // newest-first order via the insertion sequence.
        .order_by((dsl::at_ms.desc(), dsl::rowid.desc()))
        .into_boxed();
    if let Some(since) = query.since {
        sql_query = sql_query.filter(dsl::at_ms.ge(since.as_millis()));
    }
    if let Some(until) = query.until {
        sql_query = sql_query.filter(dsl::at_ms.le(until.as_millis()));
    }
    if let Some(prefix) = &query.action_prefix {
        sql_query = sql_query.filter(dsl::action.like(format!("{prefix}%")));
    }
    if let Some(by) = &query.by {
        sql_query = sql_query.filter(dsl::created_by.eq(by.as_str()));
    }
    if let Some(offset) = pagination.offset {
        sql_query = sql_query.offset(offset as i64);
    }
    if let Some(limit) = pagination.limit {
        sql_query = sql_query.limit(limit as i64);
    }
    Ok(sql_query
        .load::<models::AuditLogEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_audit_log_entry)
        .collect())
}

fn try_get_audit_log_entry(
    conn: &mut SqliteConnection,
    id: &Id,
) -> Result<Option<AuditLogEntry>> {
    use schema::audit_log::dsl;
    Ok(dsl::audit_log
        .select((
            dsl::id,
            dsl::at_ms,
            dsl::created_by,
            dsl::action,
            dsl::context,
            dsl::comment,
        ))
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::AuditLogEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_audit_log_entry))
}

fn count_audit_log_entries(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::audit_log::dsl;
    Ok(dsl::audit_log
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
