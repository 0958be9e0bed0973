use super::*;

#[derive(Debug, Clone, Copy)]
pub enum ProfileAction<'a> {
    Update { owner: &'a Id },
    Delete { owner: &'a Id },
}

/// Profiles are exclusively maintained by their owners.
pub fn authorize(actor: &Actor, action: ProfileAction<'_>) -> Decision {
    match action {
        ProfileAction::Update { owner } | ProfileAction::Delete { owner } => {
            allow_if(actor.is(owner), Denial::ProfileOwner)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    #[test]
    fn only_the_owner() {
        let owner = user();
        let action = ProfileAction::Update {
            owner: &owner.account,
        };
        assert!(authorize(&owner, action).is_ok());
        assert_eq!(Err(Denial::ProfileOwner), authorize(&user(), action));
        assert_eq!(Err(Denial::ProfileOwner), authorize(&staff(), action));
        let action = ProfileAction::Delete {
            owner: &owner.account,
        };
        assert!(authorize(&owner, action).is_ok());
        assert_eq!(Err(Denial::ProfileOwner), authorize(&staff(), action));
    }
}
