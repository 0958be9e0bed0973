use super::*;
use crate::util::diff::{BugField, ChangedFields};

#[derive(Debug, Clone, Copy)]
pub enum BugAction<'a> {
    Update {
        current: &'a Bug,
        changes: &'a ChangedFields<BugField>,
    },
    Delete,
    Attach {
        bug: &'a Bug,
    },
    DeleteAttachment,
}

pub fn authorize(actor: &Actor, action: BugAction<'_>) -> Decision {
    if actor.is_staff {
        return Ok(());
    }
    match action {
        BugAction::Update { current, changes } => {
            allow_if(
                actor.is(&current.author) && !changes.contains(BugField::Author),
                Denial::BugAuthor,
            )?;
            allow_if(!changes.contains(BugField::Status), Denial::BugStatus)
        }
        BugAction::Attach { bug } => allow_if(actor.is(&bug.author), Denial::BugAuthor),
        BugAction::Delete | BugAction::DeleteAttachment => Err(Denial::StaffOnly),
    }
}

/// Bugs are only visible to their authors and staff.
pub fn is_visible(actor: &Actor, bug: &Bug) -> bool {
    actor.is_staff || actor.is(&bug.author)
}
