use super::*;

impl CategoryRepo for DbReadOnly<'_> {
    fn create_category(&self, _category: &Category) -> Result<()> {
        unreachable!();
    }

    fn all_categories(&self) -> Result<Vec<Category>> {
        all_categories(&mut self.conn.borrow_mut())
    }
    fn get_category(&self, id: &str) -> Result<Category> {
        get_category(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_category_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        try_get_category_by_slug(&mut self.conn.borrow_mut(), slug)
    }
}

impl CategoryRepo for DbReadWrite<'_> {
    fn create_category(&self, category: &Category) -> Result<()> {
        create_category(&mut self.conn.borrow_mut(), category)
    }

    fn all_categories(&self) -> Result<Vec<Category>> {
        all_categories(&mut self.conn.borrow_mut())
    }
    fn get_category(&self, id: &str) -> Result<Category> {
        get_category(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_category_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        try_get_category_by_slug(&mut self.conn.borrow_mut(), slug)
    }
}

impl CategoryRepo for DbConnection<'_> {
    fn create_category(&self, category: &Category) -> Result<()> {
        create_category(&mut self.conn.borrow_mut(), category)
    }

    fn all_categories(&self) -> Result<Vec<Category>> {
        all_categories(&mut self.conn.borrow_mut())
    }
    fn get_category(&self, id: &str) -> Result<Category> {
        get_category(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_category_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        try_get_category_by_slug(&mut self.conn.borrow_mut(), slug)
    }
}

fn category_from_entity_and_translations(
    model: models::CategoryEntity,
    translations: &[models::CategoryTranslationEntity],
) -> Category {
    let models::CategoryEntity {
        rowid,
        id,
        slug,
        icon,
    } = model;
    let translations = translations
        .iter()
        .filter(|t| t.category_rowid == rowid)
        .map(|t| CategoryTranslation {
            locale: t.locale.clone(),
            name: t.name.clone(),
        })
        .collect();
    Category {
        id: id.into(),
        slug,
        icon,
        translations,
    }
}

fn create_category(conn: &mut SqliteConnection, category: &Category) -> Result<()> {
    let model = models::NewCategory {
        id: category.id.as_str(),
        slug: &category.slug,
        icon: category.icon.as_deref(),
    };
    match diesel::insert_into(schema::categories::table)
        .values(&model)
        .execute(conn)
    {
        Ok(_) => (),
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            return Err(repo::Error::AlreadyExists);
        }
        Err(err) => return Err(from_diesel_err(err)),
    }
    let category_rowid = resolve_category_rowid(conn, category.id.as_str())?;
    let translations: Vec<_> = category
        .translations
        .iter()
        .map(|t| models::NewCategoryTranslation {
            category_rowid,
            locale: &t.locale,
            name: &t.name,
        })
        .collect();
    diesel::insert_into(schema::category_translations::table)
        .values(&translations)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn all_categories(conn: &mut SqliteConnection) -> Result<Vec<Category>> {
    use schema::{categories::dsl as c_dsl, category_translations::dsl as t_dsl};
    let categories = c_dsl::categories
        .order_by(c_dsl::slug.asc())
        .load::<models::CategoryEntity>(conn)
        .map_err(from_diesel_err)?;
    let translations = t_dsl::category_translations
        .order_by(t_dsl::locale.asc())
        .load::<models::CategoryTranslationEntity>(conn)
        .map_err(from_diesel_err)?;
    Ok(categories
        .into_iter()
        .map(|c| category_from_entity_and_translations(c, &translations))
        .collect())
}

fn get_category(conn: &mut SqliteConnection, id: &str) -> Result<Category> {
    use schema::categories::dsl;
    let model = dsl::categories
        .filter(dsl::id.eq(id))
        .first::<models::CategoryEntity>(conn)
        .map_err(from_diesel_err)?;
    let translations = load_translations(conn, model.rowid)?;
    Ok(category_from_entity_and_translations(model, &translations))
}

fn try_get_category_by_slug(conn: &mut SqliteConnection, slug: &str) -> Result<Option<Category>> {
    use schema::categories::dsl;
    let Some(model) = dsl::categories
        .filter(dsl::slug.eq(slug))
        .first::<models::CategoryEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
    else {
        return Ok(None);
    };
    let translations = load_translations(conn, model.rowid)?;
    Ok(Some(category_from_entity_and_translations(
        model,
        &translations,
    )))
}

fn load_translations(
    conn: &mut SqliteConnection,
    category_rowid: i64,
) -> Result<Vec<models::CategoryTranslationEntity>> {
    use schema::category_translations::dsl;
    dsl::category_translations
        .filter(dsl::category_rowid.eq(category_rowid))
        .order_by(dsl::locale.asc())
        .load::<models::CategoryTranslationEntity>(conn)
        .map_err(from_diesel_err)
}
