use super::prelude::*;
use crate::{
    authorization::{
        language::{authorize, LanguageAction},
        Actor,
    },
    util::{parse::trimmed_or_none, validate::Validate},
};

#[derive(Debug, Clone)]
pub struct NewLanguage {
    pub name: String,
    pub autonym: Option<String>,
    pub code: String,
}

pub fn create_language<R: LanguageRepo>(
    repo: &R,
    actor: &Actor,
    new_language: NewLanguage,
) -> Result<Language> {
    authorize(actor, LanguageAction::Create)?;
    let NewLanguage {
        name,
        autonym,
        code,
    } = new_language;
    let language = Language {
        id: Id::new(),
        name: name.trim().to_owned(),
        autonym: trimmed_or_none(autonym),
        code: code.trim().to_owned(),
    };
    language.validate()?;
    log::debug!("Creating new language: code = {}", language.code);
    repo.create_language(&language)?;
    Ok(language)
}

pub fn all_languages<R: LanguageRepo>(repo: &R) -> Result<Vec<Language>> {
    Ok(repo.all_languages()?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};
    use crate::{authorization::Denial, repositories::Error as RepoError};

    fn new_language(name: &str, code: &str) -> NewLanguage {
        NewLanguage {
            name: name.into(),
            autonym: None,
            code: code.into(),
        }
    }

    #[test]
    fn create_languages_with_unique_codes() {
        let db = MockDb::default();
        let staff = add_account(&db, "staff", true);
        let mut german = new_language("German", " de ");
        german.autonym = Some("Deutsch".into());
        let german = create_language(&db, &staff, german).unwrap();
        assert_eq!("de", german.code);
        assert_eq!(Some("Deutsch"), german.autonym.as_deref());
        assert!(matches!(
            create_language(&db, &staff, new_language("Deutsch", "de")),
            Err(Error::Repo(RepoError::AlreadyExists))
        ));
        assert_eq!(1, all_languages(&db).unwrap().len());
    }

    #[test]
    fn reject_invalid_languages() {
        let db = MockDb::default();
        let staff = add_account(&db, "staff", true);
        let user = add_account(&db, "user", false);
        assert!(matches!(
            create_language(&db, &user, new_language("German", "de")),
            Err(Error::Forbidden(Denial::StaffOnly))
        ));
        assert!(matches!(
            create_language(&db, &staff, new_language(" ", "de")),
            Err(Error::Name)
        ));
        assert!(matches!(
            create_language(&db, &staff, new_language("German", "")),
            Err(Error::Code)
        ));
        assert!(matches!(
            create_language(&db, &staff, new_language("German", "de-1901-x-long")),
            Err(Error::Code)
        ));
        assert!(all_languages(&db).unwrap().is_empty());
    }
}
