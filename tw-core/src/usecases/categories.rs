use super::prelude::*;

pub fn all_categories<R: CategoryRepo>(repo: &R) -> Result<Vec<Category>> {
    Ok(repo.all_categories()?)
}
