//! Typed comparison of a persisted record with a proposed version of it.

use std::{collections::BTreeSet, fmt};

use strum::AsRefStr;

use crate::entities::*;

/// The set of fields that differ between two versions of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFields<F: Ord>(BTreeSet<F>);

impl<F: Ord> Default for ChangedFields<F> {
    fn default() -> Self {
        Self(BTreeSet::new())
    }
}

impl<F: Ord + Copy> ChangedFields<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, field: F, changed: bool) -> &mut Self {
        if changed {
            self.0.insert(field);
        }
        self
    }

    pub fn contains(&self, field: F) -> bool {
        self.0.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// No field besides the allowed ones has been changed.
    pub fn is_subset_of(&self, allowed: &[F]) -> bool {
        self.0.iter().all(|f| allowed.contains(f))
    }

    pub fn iter(&self) -> impl Iterator<Item = F> + '_ {
        self.0.iter().copied()
    }
}

impl<F: Ord + Copy> FromIterator<F> for ChangedFields<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<F: Ord + AsRef<str>> fmt::Display for ChangedFields<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for field in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(field.as_ref())?;
            first = false;
        }
        Ok(())
    }
}

pub trait Diff {
    type Field: Ord + Copy;

    fn changed_fields(&self, proposed: &Self) -> ChangedFields<Self::Field>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ParticipationField {
    Event,
    Participant,
    Role,
    ConfirmedOrganizer,
    ConfirmedParticipant,
}

impl Diff for Participation {
    type Field = ParticipationField;

    fn changed_fields(&self, proposed: &Self) -> ChangedFields<Self::Field> {
        use ParticipationField as F;
        // Exhaustive destructuring: new fields must be considered here.
        let Participation {
            id: _,
            event,
            participant,
            role,
            confirmed_organizer,
            confirmed_participant,
            created_at: _,
            updated_at: _,
        } = self;
        let mut changes = ChangedFields::new();
        changes
            .record(F::Event, *event != proposed.event)
            .record(F::Participant, *participant != proposed.participant)
            .record(F::Role, *role != proposed.role)
            .record(
                F::ConfirmedOrganizer,
                *confirmed_organizer != proposed.confirmed_organizer,
            )
            .record(
                F::ConfirmedParticipant,
                *confirmed_participant != proposed.confirmed_participant,
            );
        changes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum OrgParticipationField {
    Event,
    Organization,
    Role,
    ConfirmedOrganizer,
    ConfirmedOrganization,
}

impl Diff for OrgParticipation {
    type Field = OrgParticipationField;

    fn changed_fields(&self, proposed: &Self) -> ChangedFields<Self::Field> {
        use OrgParticipationField as F;
        let OrgParticipation {
            id: _,
            event,
            organization,
            role,
            confirmed_organizer,
            confirmed_organization,
            created_at: _,
            updated_at: _,
        } = self;
        let mut changes = ChangedFields::new();
        changes
            .record(F::Event, *event != proposed.event)
            .record(F::Organization, *organization != proposed.organization)
            .record(F::Role, *role != proposed.role)
            .record(
                F::ConfirmedOrganizer,
                *confirmed_organizer != proposed.confirmed_organizer,
            )
            .record(
                F::ConfirmedOrganization,
                *confirmed_organization != proposed.confirmed_organization,
            );
        changes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum OrganizationField {
    DisplayName,
    Acronym,
    ProfileImage,
    HomeProject,
    Contact,
    SocialMedia,
    Territories,
    Managers,
}

impl Diff for Organization {
    type Field = OrganizationField;

    fn changed_fields(&self, proposed: &Self) -> ChangedFields<Self::Field> {
        use OrganizationField as F;
        let Organization {
            id: _,
            display_name,
            acronym,
            profile_image,
            home_project,
            contact,
            social_media,
            territories,
            managers,
            created_at: _,
        } = self;
        let mut changes = ChangedFields::new();
        changes
            .record(F::DisplayName, *display_name != proposed.display_name)
            .record(F::Acronym, *acronym != proposed.acronym)
            .record(F::ProfileImage, *profile_image != proposed.profile_image)
            .record(F::HomeProject, *home_project != proposed.home_project)
            .record(F::Contact, *contact != proposed.contact)
            .record(F::SocialMedia, *social_media != proposed.social_media)
            .record(
                F::Territories,
                !same_members(territories, &proposed.territories),
            )
            .record(F::Managers, !same_members(managers, &proposed.managers));
        changes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum BugField {
    Author,
    Title,
    Description,
    BugType,
    Status,
}

impl Diff for Bug {
    type Field = BugField;

    fn changed_fields(&self, proposed: &Self) -> ChangedFields<Self::Field> {
        use BugField as F;
        let Bug {
            id: _,
            author,
            title,
            description,
            bug_type,
            status,
            created_at: _,
            updated_at: _,
        } = self;
        let mut changes = ChangedFields::new();
        changes
            .record(F::Author, *author != proposed.author)
            .record(F::Title, *title != proposed.title)
            .record(F::Description, *description != proposed.description)
            .record(F::BugType, *bug_type != proposed.bug_type)
            .record(F::Status, *status != proposed.status);
        changes
    }
}

// Order and duplicates are irrelevant for sets of references.
fn same_members(a: &[Id], b: &[Id]) -> bool {
    a.iter().collect::<BTreeSet<_>>() == b.iter().collect::<BTreeSet<_>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participation() -> Participation {
        let now = TimestampMs::now();
        Participation {
            id: Id::new(),
            event: Id::new(),
            participant: Id::new(),
            role: ParticipantRole::Volunteer,
            confirmed_organizer: true,
            confirmed_participant: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn identical_records_have_no_changes() {
        let p = participation();
        assert!(p.changed_fields(&p.clone()).is_empty());
    }

    #[test]
    fn timestamps_are_ignored() {
        let p = participation();
        let proposed = Participation {
            updated_at: TimestampMs::from_millis(0),
            ..p.clone()
        };
        assert!(p.changed_fields(&proposed).is_empty());
    }

    #[test]
    fn detect_single_confirmation_change() {
        let p = participation();
        let proposed = Participation {
            confirmed_participant: true,
            ..p.clone()
        };
        let changes = p.changed_fields(&proposed);
        assert!(changes.contains(ParticipationField::ConfirmedParticipant));
        assert!(changes.is_subset_of(&[ParticipationField::ConfirmedParticipant]));
        assert_eq!("confirmed_participant", changes.to_string());
    }

    #[test]
    fn detect_multiple_changes() {
        let p = participation();
        let proposed = Participation {
            role: ParticipantRole::Organizer,
            confirmed_participant: true,
            ..p.clone()
        };
        let changes = p.changed_fields(&proposed);
        assert!(!changes.is_subset_of(&[ParticipationField::ConfirmedParticipant]));
        assert_eq!("role, confirmed_participant", changes.to_string());
    }

    #[test]
    fn reordered_managers_are_not_a_change() {
        let a = Id::new();
        let b = Id::new();
        let org = Organization {
            id: Id::new(),
            display_name: "Org".into(),
            acronym: None,
            profile_image: None,
            home_project: None,
            contact: None,
            social_media: None,
            territories: vec![],
            managers: vec![a.clone(), b.clone()],
            created_at: TimestampMs::now(),
        };
        let proposed = Organization {
            managers: vec![b, a],
            ..org.clone()
        };
        assert!(org.changed_fields(&proposed).is_empty());
    }
}
