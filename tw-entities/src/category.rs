use crate::id::Id;

/// A place category with localized display names.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Category {
    pub id: Id,
    pub slug: String,
    pub icon: Option<String>,
    pub translations: Vec<CategoryTranslation>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CategoryTranslation {
    pub locale : String,
    pub name   : String,
}

impl Category {
    pub const DEFAULT_LOCALE: &'static str = "en";

    /// The display name for the given locale, falling back to the
    /// default locale and finally to the slug.
    pub fn name(&self, locale: &str) -> &str {
        self.translations
            .iter()
            .find(|t| t.locale == locale)
            .or_else(|| {
                self.translations
                    .iter()
                    .find(|t| t.locale == Self::DEFAULT_LOCALE)
            })
            .map(|t| t.name.as_str())
            .unwrap_or(self.slug.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category() -> Category {
        Category {
            id: Id::new(),
            slug: "museum".into(),
            icon: None,
            translations: vec![
                CategoryTranslation {
                    locale: "en".into(),
                    name: "Museum".into(),
                },
                CategoryTranslation {
                    locale: "de".into(),
                    name: "Museum".into(),
                },
                CategoryTranslation {
                    locale: "fr".into(),
                    name: "Musée".into(),
                },
            ],
        }
    }

    #[test]
    fn localized_name_with_fallback() {
        let c = category();
        assert_eq!("Musée", c.name("fr"));
        assert_eq!("Museum", c.name("es"));
        let bare = Category {
            translations: vec![],
            ..c
        };
        assert_eq!("museum", bare.name("en"));
    }
}
