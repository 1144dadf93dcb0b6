use super::*;

#[get("/admin/users?<offset>&<limit>")]
pub fn get_users(
    db: sqlite::Connections,
    auth: Auth,
    offset: Option<u64>,
    limit: Option<u64>,
) -> Result<Vec<json::User>> {
    let db = db.shared()?;
    auth.user_with_min_role(&db, Role::Admin)?;
    let users = usecases::list_users(&db, &Pagination { offset, limit })?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

#[post("/admin/users/<email>/role", format = "application/json", data = "<change>")]
pub fn post_user_role(
    db: sqlite::Connections,
    account: Account,
    email: String,
    change: JsonResult<json::ChangeUserRole>,
) -> Result<()> {
    let role = change?.into_inner().role;
    flows::change_user_role(&db, account.email(), &email.parse()?, role.into())?;
    Ok(Json(()))
}

#[post("/admin/users/<email>/ban")]
pub fn post_user_ban(db: sqlite::Connections, account: Account, email: String) -> Result<()> {
    flows::ban_user(&db, account.email(), &email.parse()?)?;
    Ok(Json(()))
}

#[post("/admin/users/<email>/unban")]
pub fn post_user_unban(db: sqlite::Connections, account: Account, email: String) -> Result<()> {
    flows::unban_user(&db, account.email(), &email.parse()?)?;
    Ok(Json(()))
}

#[delete("/admin/users/<email>")]
pub fn delete_user(db: sqlite::Connections, account: Account, email: String) -> Result<()> {
    flows::delete_user_by_admin(&db, account.email(), &email.parse()?)?;
    Ok(Json(()))
}

#[get("/admin/activities?<offset>&<limit>&<action>&<since>&<until>&<by>")]
pub fn get_activities(
    db: sqlite::Connections,
    account: Account,
    offset: Option<u64>,
    limit: Option<u64>,
    action: Option<String>,
    since: Option<i64>,
    until: Option<i64>,
    by: Option<String>,
) -> Result<Vec<json::AuditLogEntry>> {
    let query = AuditLogQuery {
        since: since.map(TimestampMs::from_millis),
        until: until.map(TimestampMs::from_millis),
        action_prefix: action,
        by: by.map(|b| b.parse()).transpose()?,
    };
    let entries = usecases::list_activities(
        &db.shared()?,
        account.email(),
        &query,
        &Pagination { offset, limit },
    )?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::{
        api::tests::prelude::*,
        tests::{register_admin, register_user},
    };

    #[test]
    fn user_listing_is_admin_only() {
        let (client, db) = setup();
        register_user(&db, "jo@example.com", "secret123", true);
        register_admin(&db, "admin@example.com", "secret123");

        let res = client.get("/admin/users").dispatch();
        assert_eq!(res.status(), Status::Unauthorized);

        let jo_token = login_token(&client, "jo@example.com", "secret123");
        let res = client
            .get("/admin/users")
            .header(bearer(&jo_token))
            .dispatch();
        assert_eq!(res.status(), Status::Forbidden);

        let admin_token = login_token(&client, "admin@example.com", "secret123");
        let res = client
            .get("/admin/users")
            .header(bearer(&admin_token))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        test_json(&res);
        let users: Vec<json::User> = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!(2, users.len());
    }

    #[test]
    fn role_changes_respect_the_hierarchy() {
        let (client, db) = setup();
        register_user(&db, "jo@example.com", "secret123", true);
        register_admin(&db, "admin@example.com", "secret123");
        let admin_token = login_token(&client, "admin@example.com", "secret123");

        let res = client
            .post("/admin/users/jo@example.com/role")
            .header(ContentType::JSON)
            .header(bearer(&admin_token))
            .body(r#"{"role":"guest"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);

        // Nobody can promote to their own level.
        let res = client
            .post("/admin/users/jo@example.com/role")
            .header(ContentType::JSON)
            .header(bearer(&admin_token))
            .body(r#"{"role":"admin"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Forbidden);

        let res = client
            .get("/admin/users")
            .header(bearer(&admin_token))
            .dispatch();
        let users: Vec<json::User> = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        let jo = users.iter().find(|u| u.email == "jo@example.com").unwrap();
        assert!(matches!(jo.role, json::UserRole::Guest));
    }

    #[test]
    fn banned_users_cannot_login() {
        let (client, db) = setup();
        register_user(&db, "jo@example.com", "secret123", true);
        register_admin(&db, "admin@example.com", "secret123");
        let admin_token = login_token(&client, "admin@example.com", "secret123");

        let res = client
            .post("/admin/users/jo@example.com/ban")
            .header(bearer(&admin_token))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let res = client
            .post("/login")
            .header(ContentType::JSON)
            .body(r#"{"email":"jo@example.com","password":"secret123"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Forbidden);

        let res = client
            .post("/admin/users/jo@example.com/unban")
            .header(bearer(&admin_token))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let res = client
            .post("/login")
            .header(ContentType::JSON)
            .body(r#"{"email":"jo@example.com","password":"secret123"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
    }

    #[test]
    fn banning_requires_the_admin_role() {
        let (client, db) = setup();
        register_user(&db, "jo@example.com", "secret123", true);
        register_user(&db, "sam@example.com", "secret123", true);
        let jo_token = login_token(&client, "jo@example.com", "secret123");
        let res = client
            .post("/admin/users/sam@example.com/ban")
            .header(bearer(&jo_token))
            .dispatch();
        assert_eq!(res.status(), Status::Forbidden);
    }

    #[test]
    fn admins_delete_accounts() {
        let (client, db) = setup();
        register_user(&db, "jo@example.com", "secret123", true);
        register_admin(&db, "admin@example.com", "secret123");
        let admin_token = login_token(&client, "admin@example.com", "secret123");

        let res = client
            .delete("/admin/users/jo@example.com")
            .header(bearer(&admin_token))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let res = client
            .post("/login")
            .header(ContentType::JSON)
            .body(r#"{"email":"jo@example.com","password":"secret123"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Unauthorized);
    }

    #[test]
    fn activity_log_is_admin_only_and_filterable() {
        let (client, db) = setup();
        register_user(&db, "jo@example.com", "secret123", true);
        register_admin(&db, "admin@example.com", "secret123");
        let jo_token = login_token(&client, "jo@example.com", "secret123");

        let res = client
            .post("/trips")
            .header(ContentType::JSON)
            .header(bearer(&jo_token))
            .body(
                r#"{"title":"Weekender","starts_on":"2026-09-04","ends_on":"2026-09-06",
                    "lat":53.55,"lng":9.99}"#,
            )
            .dispatch();
        assert_eq!(res.status(), Status::Ok);

        let res = client
            .get("/admin/activities")
            .header(bearer(&jo_token))
            .dispatch();
        assert_eq!(res.status(), Status::Forbidden);

        let admin_token = login_token(&client, "admin@example.com", "secret123");
        let res = client
            .get("/admin/activities?action=trip")
            .header(bearer(&admin_token))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        test_json(&res);
        let entries: Vec<json::AuditLogEntry> =
            serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!(1, entries.len());
        assert_eq!("trip.create", entries[0].action);
        assert_eq!(Some("jo@example.com".to_string()), entries[0].by);

        let res = client
            .get("/admin/activities?by=admin@example.com")
            .header(bearer(&admin_token))
            .dispatch();
        let entries: Vec<json::AuditLogEntry> =
            serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert!(entries.is_empty());
    }
}
