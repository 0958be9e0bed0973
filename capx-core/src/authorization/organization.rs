use super::*;
use crate::util::diff::{ChangedFields, OrganizationField};

#[derive(Debug, Clone, Copy)]
pub enum OrganizationAction<'a> {
    Create,
    Update {
        current: &'a Organization,
        changes: &'a ChangedFields<OrganizationField>,
    },
    Delete,
}

pub fn authorize(actor: &Actor, action: OrganizationAction<'_>) -> Decision {
    match action {
        OrganizationAction::Create | OrganizationAction::Delete => {
            staff_only(actor, Denial::StaffOnly)
        }
        OrganizationAction::Update { current, changes } => {
            if actor.is_staff {
                return Ok(());
            }
            allow_if(
                current.is_managed_by(&actor.account),
                Denial::EditOrganization,
            )?;
            allow_if(
                !changes.contains(OrganizationField::Managers),
                Denial::ChangeManagers,
            )
        }
    }
}

/// Organizations without managers are only visible to staff.
pub fn is_visible(actor: &Actor, org: &Organization) -> bool {
    actor.is_staff || org.has_managers()
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};
    use crate::util::diff::Diff;

    fn org(managers: Vec<Id>) -> Organization {
        Organization {
            id: Id::new(),
            display_name: "Org".into(),
            acronym: Some("ORG".into()),
            profile_image: None,
            home_project: None,
            contact: None,
            social_media: None,
            territories: vec![],
            managers,
            created_at: TimestampMs::now(),
        }
    }

    #[test]
    fn create_and_delete_are_staff_only() {
        assert_eq!(
            Err(Denial::StaffOnly),
            authorize(&user(), OrganizationAction::Create)
        );
        assert_eq!(
            Err(Denial::StaffOnly),
            authorize(&user(), OrganizationAction::Delete)
        );
        assert!(authorize(&staff(), OrganizationAction::Create).is_ok());
        assert!(authorize(&staff(), OrganizationAction::Delete).is_ok());
    }

    #[test]
    fn managers_can_update_but_not_change_managers() {
        let manager = user();
        let current = org(vec![manager.account.clone()]);
        let renamed = Organization {
            display_name: "Renamed".into(),
            ..current.clone()
        };
        let changes = current.changed_fields(&renamed);
        let action = OrganizationAction::Update {
            current: &current,
            changes: &changes,
        };
        assert!(authorize(&manager, action).is_ok());
        assert_eq!(Err(Denial::EditOrganization), authorize(&user(), action));

        let other_managers = Organization {
            managers: vec![Id::new()],
            ..current.clone()
        };
        let changes = current.changed_fields(&other_managers);
        let action = OrganizationAction::Update {
            current: &current,
            changes: &changes,
        };
        assert_eq!(Err(Denial::ChangeManagers), authorize(&manager, action));
        assert!(authorize(&staff(), action).is_ok());
    }

    #[test]
    fn unmanaged_organizations_are_hidden() {
        let unmanaged = org(vec![]);
        assert!(!is_visible(&user(), &unmanaged));
        assert!(is_visible(&staff(), &unmanaged));
        assert!(is_visible(&user(), &org(vec![Id::new()])));
    }
}
