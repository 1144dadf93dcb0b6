use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewPreference {
    pub category: Id,
    pub score: i64,
}

/// Bulk upsert of the user's category preferences.
///
/// Scores are clamped into the valid range instead of rejected.
pub fn update_preferences<D>(
    db: &D,
    account: &EmailAddress,
    prefs: Vec<NewPreference>,
) -> Result<Vec<UserPreference>>
where
    D: CategoryRepo + PreferenceRepo,
{
    let updated_at = Timestamp::now();
    let mut stored = Vec::with_capacity(prefs.len());
    for NewPreference { category, score } in prefs {
        // Unknown categories indicate a stale client.
        db.get_category(category.as_str())?;
        let preference = UserPreference {
            user: account.clone(),
            category,
            score: PreferenceScore::clamped(score),
            updated_at,
        };
        db.upsert_preference(&preference)?;
        stored.push(preference);
    }
    log::debug!("Updated {} preferences of {}", stored.len(), account);
    Ok(stored)
}

pub fn get_preferences<R: PreferenceRepo>(
    repo: &R,
    account: &EmailAddress,
) -> Result<Vec<UserPreference>> {
    Ok(repo.preferences_of_user(account)?)
}
