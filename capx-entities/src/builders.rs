pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{account_builder::*, event_builder::*, skill_builder::*};

pub mod event_builder {

    use super::*;
    use crate::{event::*, id::*, time::*};

    #[derive(Debug)]
    pub struct EventBuild {
        event: Event,
    }

    impl EventBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.event.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.event.name = name.into();
            self
        }
        pub fn creator(mut self, creator: Option<&Id>) -> Self {
            self.event.creator = creator.cloned();
            self
        }
        pub fn begin(mut self, secs: i64) -> Self {
            self.event.time_begin = Timestamp::from_secs(secs);
            self
        }
        pub fn end(mut self, secs: i64) -> Self {
            self.event.time_end = Timestamp::from_secs(secs);
            self
        }
        pub fn related_skills(mut self, skills: Vec<Id>) -> Self {
            self.event.related_skills = skills;
            self
        }
        pub fn finish(self) -> Event {
            self.event
        }
    }

    impl Builder for Event {
        type Build = EventBuild;
        fn build() -> EventBuild {
            let now = TimestampMs::now();
            EventBuild {
                event: Event {
                    id: Id::new(),
                    name: "An event".into(),
                    location_type: LocationType::Virtual,
                    openstreetmap_id: None,
                    url: None,
                    wikidata_qid: None,
                    time_begin: Timestamp::from_secs(1_700_000_000),
                    time_end: Timestamp::from_secs(1_700_003_600),
                    creator: None,
                    related_skills: vec![],
                    created_at: now,
                    updated_at: now,
                },
            }
        }
    }
}

pub mod skill_builder {

    use super::*;
    use crate::{id::*, skill::*, time::*};

    #[derive(Debug)]
    pub struct SkillBuild {
        skill: Skill,
    }

    impl SkillBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.skill.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.skill.name = name.into();
            self
        }
        pub fn wikidata_item(mut self, item: &str) -> Self {
            self.skill.wikidata_item = Some(item.into());
            self
        }
        pub fn supertypes(mut self, supertypes: Vec<&str>) -> Self {
            self.skill.supertypes = supertypes.into_iter().map(Id::from).collect();
            self
        }
        pub fn finish(self) -> Skill {
            self.skill
        }
    }

    impl Builder for Skill {
        type Build = SkillBuild;
        fn build() -> SkillBuild {
            SkillBuild {
                skill: Skill {
                    id: Id::new(),
                    name: "A skill".into(),
                    description: None,
                    wikidata_item: None,
                    supertypes: vec![],
                    created_at: TimestampMs::now(),
                },
            }
        }
    }
}

pub mod account_builder {

    use super::*;
    use crate::{account::*, id::*, time::*};

    #[derive(Debug)]
    pub struct AccountBuild {
        account: Account,
    }

    impl AccountBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.account.id = id.into();
            self
        }
        pub fn username(mut self, username: &str) -> Self {
            self.account.username = username.into();
            self
        }
        pub fn password(mut self, password: &str) -> Self {
            self.account.password = password.parse().unwrap();
            self
        }
        pub fn staff(mut self, is_staff: bool) -> Self {
            self.account.is_staff = is_staff;
            self
        }
        pub fn active(mut self, is_active: bool) -> Self {
            self.account.is_active = is_active;
            self
        }
        pub fn finish(self) -> Account {
            self.account
        }
    }

    impl Builder for Account {
        type Build = AccountBuild;
        fn build() -> AccountBuild {
            AccountBuild {
                account: Account {
                    id: Id::new(),
                    username: "someone".into(),
                    email: None,
                    // Not a valid bcrypt hash, so nobody can log in
                    // unless a password has been set explicitly.
                    password: String::new().into(),
                    is_staff: false,
                    is_active: true,
                    date_joined: Timestamp::now(),
                },
            }
        }
    }
}
