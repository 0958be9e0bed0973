use super::prelude::*;
use crate::{
    authorization::{
        bug::{authorize, is_visible, BugAction},
        Actor,
    },
    repositories::Error as RepoError,
    util::{diff::Diff, validate::Validate},
};

#[derive(Debug, Clone)]
pub struct NewBug {
    pub title: String,
    pub description: String,
    pub bug_type: BugType,
}

#[derive(Debug, Clone, Default)]
pub struct BugUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub bug_type: Option<BugType>,
    pub status: Option<BugStatus>,
}

pub fn create_bug<R: BugRepo>(repo: &R, actor: &Actor, new_bug: NewBug) -> Result<Bug> {
    let NewBug {
        title,
        description,
        bug_type,
    } = new_bug;
    let now = TimestampMs::now();
    let bug = Bug {
        id: Id::new(),
        author: actor.account.clone(),
        title: title.trim().to_owned(),
        description: description.trim().to_owned(),
        bug_type,
        status: BugStatus::default(),
        created_at: now,
        updated_at: now,
    };
    bug.validate()?;
    log::debug!("Creating new bug report: id = {}", bug.id);
    repo.create_bug(&bug)?;
    Ok(bug)
}

pub fn update_bug<R: BugRepo>(repo: &R, actor: &Actor, id: &Id, update: BugUpdate) -> Result<Bug> {
    let current = get_bug(repo, actor, id)?;
    let BugUpdate {
        title,
        description,
        bug_type,
        status,
    } = update;
    let mut proposed = current.clone();
    if let Some(title) = title {
        proposed.title = title.trim().to_owned();
    }
    if let Some(description) = description {
        proposed.description = description.trim().to_owned();
    }
    if let Some(bug_type) = bug_type {
        proposed.bug_type = bug_type;
    }
    if let Some(status) = status {
        proposed.status = status;
    }
    let changes = current.changed_fields(&proposed);
    authorize(
        actor,
        BugAction::Update {
            current: &current,
            changes: &changes,
        },
    )?;
    if changes.is_empty() {
        return Ok(current);
    }
    proposed.validate()?;
    proposed.updated_at = TimestampMs::now();
    log::debug!("Updating bug {}: {}", proposed.id, changes);
    repo.update_bug(&proposed)?;
    Ok(proposed)
}

pub fn delete_bug<R: BugRepo>(repo: &R, actor: &Actor, id: &Id) -> Result<()> {
    get_bug(repo, actor, id)?;
    authorize(actor, BugAction::Delete)?;
    repo.delete_bug(id)?;
    Ok(())
}

/// Bugs of other authors do not exist for non-staff actors.
pub fn get_bug<R: BugRepo>(repo: &R, actor: &Actor, id: &Id) -> Result<Bug> {
    let bug = repo.get_bug(id)?;
    if !is_visible(actor, &bug) {
        return Err(RepoError::NotFound.into());
    }
    Ok(bug)
}

pub fn list_bugs<R: BugRepo>(repo: &R, actor: &Actor) -> Result<Vec<Bug>> {
    if actor.is_staff {
        Ok(repo.all_bugs()?)
    } else {
        Ok(repo.bugs_by_author(&actor.account)?)
    }
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};
    use crate::authorization::Denial;

    fn new_bug() -> NewBug {
        NewBug {
            title: "Login fails".into(),
            description: "Nothing happens".into(),
            bug_type: BugType::Error,
        }
    }

    #[test]
    fn bugs_are_private_to_their_authors() {
        let db = MockDb::default();
        let author = add_account(&db, "author", false);
        let other = add_account(&db, "other", false);
        let staff = add_account(&db, "staff", true);
        let bug = create_bug(&db, &author, new_bug()).unwrap();
        assert_eq!(BugStatus::ToDo, bug.status);
        assert_eq!(1, list_bugs(&db, &author).unwrap().len());
        assert!(list_bugs(&db, &other).unwrap().is_empty());
        assert_eq!(1, list_bugs(&db, &staff).unwrap().len());
        assert!(matches!(
            get_bug(&db, &other, &bug.id),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn only_staff_changes_status() {
        let db = MockDb::default();
        let author = add_account(&db, "author", false);
        let staff = add_account(&db, "staff", true);
        let bug = create_bug(&db, &author, new_bug()).unwrap();
        let done = BugUpdate {
            status: Some(BugStatus::Done),
            ..Default::default()
        };
        assert!(matches!(
            update_bug(&db, &author, &bug.id, done.clone()),
            Err(Error::Forbidden(Denial::BugStatus))
        ));
        let retitle = BugUpdate {
            title: Some("Login button does nothing".into()),
            ..Default::default()
        };
        assert!(update_bug(&db, &author, &bug.id, retitle).is_ok());
        assert_eq!(
            BugStatus::Done,
            update_bug(&db, &staff, &bug.id, done).unwrap().status
        );
    }

    #[test]
    fn only_staff_deletes() {
        let db = MockDb::default();
        let author = add_account(&db, "author", false);
        let staff = add_account(&db, "staff", true);
        let bug = create_bug(&db, &author, new_bug()).unwrap();
        assert!(matches!(
            delete_bug(&db, &author, &bug.id),
            Err(Error::Forbidden(Denial::StaffOnly))
        ));
        assert!(delete_bug(&db, &staff, &bug.id).is_ok());
    }

    #[test]
    fn reject_empty_title() {
        let db = MockDb::default();
        let author = add_account(&db, "author", false);
        let mut bug = new_bug();
        bug.title = "  ".into();
        assert!(matches!(create_bug(&db, &author, bug), Err(Error::Title)));
    }
}
