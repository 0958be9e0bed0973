use std::{cell::RefCell, collections::HashSet, result};

use super::{prelude::*, NewEvent};
use crate::repositories::Error as RepoError;

type RepoResult<T> = result::Result<T, RepoError>;

trait Key {
    fn key(&self) -> &Id;
}

macro_rules! impl_key {
    ($($t:ty => $field:ident),* $(,)?) => {
        $(
            impl Key for $t {
                fn key(&self) -> &Id {
                    &self.$field
                }
            }
        )*
    };
}

impl_key!(
    Account => id,
    Profile => account,
    Event => id,
    Participation => id,
    OrgParticipation => id,
    Skill => id,
    Organization => id,
    Territory => id,
    Language => id,
    WikimediaProject => id,
    Bug => id,
    Attachment => id,
);

#[derive(Default)]
pub struct MockDb {
    pub accounts: RefCell<Vec<Account>>,
    pub profiles: RefCell<Vec<Profile>>,
    pub events: RefCell<Vec<Event>>,
    pub participations: RefCell<Vec<Participation>>,
    pub org_participations: RefCell<Vec<OrgParticipation>>,
    pub skills: RefCell<Vec<Skill>>,
    pub orgs: RefCell<Vec<Organization>>,
    pub territories: RefCell<Vec<Territory>>,
    pub languages: RefCell<Vec<Language>>,
    pub wikimedia_projects: RefCell<Vec<WikimediaProject>>,
    pub bugs: RefCell<Vec<Bug>>,
    pub attachments: RefCell<Vec<(Attachment, AttachmentContent)>>,
}

fn get<T: Clone + Key>(objects: &[T], id: &Id) -> RepoResult<T> {
    match objects.iter().find(|x| x.key() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn create<T: Clone + Key>(objects: &mut Vec<T>, e: &T) -> RepoResult<()> {
    if objects.iter().any(|x| x.key() == e.key()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(e.clone());
    Ok(())
}

fn update<T: Clone + Key>(objects: &mut [T], e: &T) -> RepoResult<()> {
    match objects.iter().position(|x| x.key() == e.key()) {
        Some(pos) => {
            objects[pos] = e.clone();
            Ok(())
        }
        None => Err(RepoError::NotFound),
    }
}

fn delete<T: Clone + Key>(objects: &mut Vec<T>, id: &Id) -> RepoResult<()> {
    match objects.iter().position(|x| x.key() == id) {
        Some(pos) => {
            objects.remove(pos);
            Ok(())
        }
        None => Err(RepoError::NotFound),
    }
}

impl AccountRepo for MockDb {
    fn create_account(&self, account: &Account) -> RepoResult<()> {
        if self
            .accounts
            .borrow()
            .iter()
            .any(|a| a.username == account.username)
        {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.accounts.borrow_mut(), account)
    }
    fn update_account(&self, account: &Account) -> RepoResult<()> {
        update(&mut self.accounts.borrow_mut(), account)
    }
    fn delete_account(&self, id: &Id) -> RepoResult<()> {
        delete(&mut self.accounts.borrow_mut(), id)?;
        self.profiles.borrow_mut().retain(|p| &p.account != id);
        self.participations
            .borrow_mut()
            .retain(|p| &p.participant != id);
        self.bugs.borrow_mut().retain(|b| &b.author != id);
        for event in self.events.borrow_mut().iter_mut() {
            if event.creator.as_ref() == Some(id) {
                event.creator = None;
            }
        }
        for org in self.orgs.borrow_mut().iter_mut() {
            org.managers.retain(|m| m != id);
        }
        Ok(())
    }
    fn get_account(&self, id: &Id) -> RepoResult<Account> {
        get(&self.accounts.borrow(), id)
    }
    fn try_get_account_by_username(&self, username: &str) -> RepoResult<Option<Account>> {
        Ok(self
            .accounts
            .borrow()
            .iter()
            .find(|a| a.username == username)
            .cloned())
    }
    fn all_accounts(&self) -> RepoResult<Vec<Account>> {
        Ok(self.accounts.borrow().clone())
    }
}

impl ProfileRepo for MockDb {
    fn create_profile(&self, profile: &Profile) -> RepoResult<()> {
        create(&mut self.profiles.borrow_mut(), profile)
    }
    fn update_profile(&self, profile: &Profile) -> RepoResult<()> {
        update(&mut self.profiles.borrow_mut(), profile)
    }
    fn get_profile(&self, account: &Id) -> RepoResult<Profile> {
        get(&self.profiles.borrow(), account)
    }
    fn all_profiles(&self) -> RepoResult<Vec<Profile>> {
        Ok(self.profiles.borrow().clone())
    }
}

impl EventRepo for MockDb {
    fn create_event(&self, event: &Event) -> RepoResult<()> {
        create(&mut self.events.borrow_mut(), event)
    }
    fn update_event(&self, event: &Event) -> RepoResult<()> {
        update(&mut self.events.borrow_mut(), event)
    }
    fn delete_event(&self, id: &Id) -> RepoResult<()> {
        delete(&mut self.events.borrow_mut(), id)?;
        self.participations.borrow_mut().retain(|p| &p.event != id);
        self.org_participations
            .borrow_mut()
            .retain(|p| &p.event != id);
        Ok(())
    }
    fn get_event(&self, id: &Id) -> RepoResult<Event> {
        get(&self.events.borrow(), id)
    }
    fn all_events_chronologically(&self) -> RepoResult<Vec<Event>> {
        let mut events = self.events.borrow().clone();
        events.sort_by_key(|e| e.time_begin);
        Ok(events)
    }
}

impl ParticipationRepo for MockDb {
    fn create_participation(&self, participation: &Participation) -> RepoResult<()> {
        if self.participations.borrow().iter().any(|p| {
            p.event == participation.event && p.participant == participation.participant
        }) {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.participations.borrow_mut(), participation)
    }
    fn update_participation(&self, participation: &Participation) -> RepoResult<()> {
        update(&mut self.participations.borrow_mut(), participation)
    }
    fn delete_participation(&self, id: &Id) -> RepoResult<()> {
        delete(&mut self.participations.borrow_mut(), id)
    }
    fn get_participation(&self, id: &Id) -> RepoResult<Participation> {
        get(&self.participations.borrow(), id)
    }
    fn participations_of_event(&self, event: &Id) -> RepoResult<Vec<Participation>> {
        Ok(self
            .participations
            .borrow()
            .iter()
            .filter(|p| &p.event == event)
            .cloned()
            .collect())
    }
    fn all_participations(&self) -> RepoResult<Vec<Participation>> {
        Ok(self.participations.borrow().clone())
    }
}

impl OrgParticipationRepo for MockDb {
    fn create_org_participation(&self, participation: &OrgParticipation) -> RepoResult<()> {
        if self.org_participations.borrow().iter().any(|p| {
            p.event == participation.event && p.organization == participation.organization
        }) {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.org_participations.borrow_mut(), participation)
    }
    fn update_org_participation(&self, participation: &OrgParticipation) -> RepoResult<()> {
        update(&mut self.org_participations.borrow_mut(), participation)
    }
    fn delete_org_participation(&self, id: &Id) -> RepoResult<()> {
        delete(&mut self.org_participations.borrow_mut(), id)
    }
    fn get_org_participation(&self, id: &Id) -> RepoResult<OrgParticipation> {
        get(&self.org_participations.borrow(), id)
    }
    fn org_participations_of_event(&self, event: &Id) -> RepoResult<Vec<OrgParticipation>> {
        Ok(self
            .org_participations
            .borrow()
            .iter()
            .filter(|p| &p.event == event)
            .cloned()
            .collect())
    }
    fn all_org_participations(&self) -> RepoResult<Vec<OrgParticipation>> {
        Ok(self.org_participations.borrow().clone())
    }
}

impl SkillRepo for MockDb {
    fn create_skill(&self, skill: &Skill) -> RepoResult<()> {
        create(&mut self.skills.borrow_mut(), skill)
    }
    fn update_skill(&self, skill: &Skill) -> RepoResult<()> {
        update(&mut self.skills.borrow_mut(), skill)
    }
    fn delete_skill(&self, id: &Id) -> RepoResult<()> {
        delete(&mut self.skills.borrow_mut(), id)
    }
    fn get_skill(&self, id: &Id) -> RepoResult<Skill> {
        get(&self.skills.borrow(), id)
    }
    fn all_skills(&self) -> RepoResult<Vec<Skill>> {
        Ok(self.skills.borrow().clone())
    }
    fn subtypes_of_skill(&self, id: &Id) -> RepoResult<Vec<Id>> {
        Ok(self
            .skills
            .borrow()
            .iter()
            .filter(|s| s.supertypes.contains(id))
            .map(|s| s.id.clone())
            .collect())
    }
    fn ancestors_of_skills(&self, ids: &[Id]) -> RepoResult<Vec<Skill>> {
        let skills = self.skills.borrow();
        let mut visited = HashSet::new();
        let mut pending = ids.to_vec();
        let mut ancestors = vec![];
        while let Some(id) = pending.pop() {
            if !visited.insert(id.clone()) {
                continue;
            }
            if let Some(skill) = skills.iter().find(|s| s.id == id) {
                pending.extend(skill.supertypes.iter().cloned());
                ancestors.push(skill.clone());
            }
        }
        Ok(ancestors)
    }
}

impl OrganizationRepo for MockDb {
    fn create_org(&self, org: &Organization) -> RepoResult<()> {
        create(&mut self.orgs.borrow_mut(), org)
    }
    fn update_org(&self, org: &Organization) -> RepoResult<()> {
        update(&mut self.orgs.borrow_mut(), org)
    }
    fn delete_org(&self, id: &Id) -> RepoResult<()> {
        delete(&mut self.orgs.borrow_mut(), id)?;
        self.org_participations
            .borrow_mut()
            .retain(|p| &p.organization != id);
        Ok(())
    }
    fn get_org(&self, id: &Id) -> RepoResult<Organization> {
        get(&self.orgs.borrow(), id)
    }
    fn all_orgs(&self) -> RepoResult<Vec<Organization>> {
        Ok(self.orgs.borrow().clone())
    }
}

impl TerritoryRepo for MockDb {
    fn create_territory(&self, territory: &Territory) -> RepoResult<()> {
        if self
            .territories
            .borrow()
            .iter()
            .any(|t| t.name == territory.name)
        {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.territories.borrow_mut(), territory)
    }
    fn get_territory(&self, id: &Id) -> RepoResult<Territory> {
        get(&self.territories.borrow(), id)
    }
    fn all_territories(&self) -> RepoResult<Vec<Territory>> {
        Ok(self.territories.borrow().clone())
    }
}

impl LanguageRepo for MockDb {
    fn create_language(&self, language: &Language) -> RepoResult<()> {
        if self
            .languages
            .borrow()
            .iter()
            .any(|l| l.code == language.code)
        {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.languages.borrow_mut(), language)
    }
    fn get_language(&self, id: &Id) -> RepoResult<Language> {
        get(&self.languages.borrow(), id)
    }
    fn all_languages(&self) -> RepoResult<Vec<Language>> {
        Ok(self.languages.borrow().clone())
    }
}

impl WikimediaProjectRepo for MockDb {
    fn create_wikimedia_project(&self, project: &WikimediaProject) -> RepoResult<()> {
        if self
            .wikimedia_projects
            .borrow()
            .iter()
            .any(|p| p.code == project.code)
        {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.wikimedia_projects.borrow_mut(), project)
    }
    fn get_wikimedia_project(&self, id: &Id) -> RepoResult<WikimediaProject> {
        get(&self.wikimedia_projects.borrow(), id)
    }
    fn all_wikimedia_projects(&self) -> RepoResult<Vec<WikimediaProject>> {
        Ok(self.wikimedia_projects.borrow().clone())
    }
}

impl BugRepo for MockDb {
    fn create_bug(&self, bug: &Bug) -> RepoResult<()> {
        create(&mut self.bugs.borrow_mut(), bug)
    }
    fn update_bug(&self, bug: &Bug) -> RepoResult<()> {
        update(&mut self.bugs.borrow_mut(), bug)
    }
    fn delete_bug(&self, id: &Id) -> RepoResult<()> {
        delete(&mut self.bugs.borrow_mut(), id)?;
        self.attachments.borrow_mut().retain(|(a, _)| &a.bug != id);
        Ok(())
    }
    fn get_bug(&self, id: &Id) -> RepoResult<Bug> {
        get(&self.bugs.borrow(), id)
    }
    fn all_bugs(&self) -> RepoResult<Vec<Bug>> {
        Ok(self.bugs.borrow().clone())
    }
    fn bugs_by_author(&self, author: &Id) -> RepoResult<Vec<Bug>> {
        Ok(self
            .bugs
            .borrow()
            .iter()
            .filter(|b| &b.author == author)
            .cloned()
            .collect())
    }
}

impl AttachmentRepo for MockDb {
    fn create_attachment(
        &self,
        attachment: &Attachment,
        content: &AttachmentContent,
    ) -> RepoResult<()> {
        let mut attachments = self.attachments.borrow_mut();
        if attachments.iter().any(|(a, _)| a.id == attachment.id) {
            return Err(RepoError::AlreadyExists);
        }
        attachments.push((attachment.clone(), content.clone()));
        Ok(())
    }
    fn delete_attachment(&self, id: &Id) -> RepoResult<()> {
        let mut attachments = self.attachments.borrow_mut();
        match attachments.iter().position(|(a, _)| &a.id == id) {
            Some(pos) => {
                attachments.remove(pos);
                Ok(())
            }
            None => Err(RepoError::NotFound),
        }
    }
    fn get_attachment(&self, id: &Id) -> RepoResult<Attachment> {
        self.attachments
            .borrow()
            .iter()
            .find(|(a, _)| &a.id == id)
            .map(|(a, _)| a.clone())
            .ok_or(RepoError::NotFound)
    }
    fn load_attachment_content(&self, id: &Id) -> RepoResult<AttachmentContent> {
        self.attachments
            .borrow()
            .iter()
            .find(|(a, _)| &a.id == id)
            .map(|(_, c)| c.clone())
            .ok_or(RepoError::NotFound)
    }
    fn attachments_of_bug(&self, bug: &Id) -> RepoResult<Vec<Attachment>> {
        Ok(self
            .attachments
            .borrow()
            .iter()
            .filter(|(a, _)| &a.bug == bug)
            .map(|(a, _)| a.clone())
            .collect())
    }
    fn count_attachments_of_bug(&self, bug: &Id) -> RepoResult<usize> {
        Ok(self
            .attachments
            .borrow()
            .iter()
            .filter(|(a, _)| &a.bug == bug)
            .count())
    }
}

/// Registers an active account together with its profile.
pub fn add_account(db: &MockDb, username: &str, is_staff: bool) -> Actor {
    let account = Account {
        id: Id::new(),
        username: username.into(),
        email: None,
        password: String::new().into(),
        is_staff,
        is_active: true,
        date_joined: Timestamp::now(),
    };
    db.create_account(&account).unwrap();
    db.create_profile(&Profile::new(account.id.clone())).unwrap();
    Actor::from(&account)
}

pub fn new_event(name: &str) -> NewEvent {
    NewEvent {
        name: name.into(),
        location_type: LocationType::Virtual,
        openstreetmap_id: None,
        url: None,
        wikidata_qid: None,
        time_begin: 1_700_000_000,
        time_end: 1_700_003_600,
        related_skills: vec![],
    }
}
