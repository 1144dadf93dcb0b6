use super::*;

#[get("/admin/activities.csv?<offset>&<limit>&<action>&<since>&<until>&<by>")]
pub fn activities_csv_export(
    connections: sqlite::Connections,
    account: Account,
    offset: Option<u64>,
    limit: Option<u64>,
    action: Option<String>,
    since: Option<i64>,
    until: Option<i64>,
    by: Option<String>,
) -> result::Result<(ContentType, String), ApiError> {
    let query = AuditLogQuery {
        since: since.map(TimestampMs::from_millis),
        until: until.map(TimestampMs::from_millis),
        action_prefix: action,
        by: by.map(|b| b.parse()).transpose()?,
    };
    let db = connections.shared()?;
    let entries = usecases::list_activities(
        &db,
        account.email(),
        &query,
        &Pagination { offset, limit },
    )?;
    // Release the database connection asap
    drop(db);

    let records: Vec<_> = entries
        .into_iter()
        .map(adapters::csv::ActivityRecord::from)
        .collect();

    let buff: Vec<u8> = vec![];
    let mut wtr = csv::Writer::from_writer(buff);

    for r in records {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    let data = String::from_utf8(wtr.into_inner()?)?;

    Ok((ContentType::CSV, data))
}
