pub mod prelude {
    pub use capx_core::{
        authorization::Actor,
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };
    pub use capx_db_sqlite::Connections;

    pub use crate::error::*;

    pub const DEFAULT_PASSWORD: &str = "secret123";

    pub struct BackendFixture {
        pub db_connections: Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = Connections::init(":memory:", 1).unwrap();
            capx_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap())
                .unwrap();
            Self { db_connections }
        }

        pub fn register(&self, username: &str) -> Account {
            crate::prelude::register_account(
                &self.db_connections,
                usecases::NewAccount {
                    username: username.into(),
                    email: None,
                    password: DEFAULT_PASSWORD.into(),
                },
            )
            .unwrap()
        }

        pub fn register_staff(&self, username: &str) -> Account {
            self.register(username);
            crate::prelude::change_staff_status(&self.db_connections, username, true).unwrap()
        }

        pub fn actor(&self, account: &Account) -> Actor {
            crate::prelude::authenticate(&self.db_connections, &account.id).unwrap()
        }

        pub fn create_event(&self, creator: &Account, name: &str) -> Event {
            crate::prelude::create_event(&self.db_connections, &self.actor(creator), new_event(name))
                .unwrap()
        }
    }

    pub fn new_event(name: &str) -> usecases::NewEvent {
        usecases::NewEvent {
            name: name.into(),
            location_type: LocationType::InPerson,
            openstreetmap_id: None,
            url: None,
            wikidata_qid: None,
            time_begin: 1_700_000_000,
            time_end: 1_700_086_400,
            related_skills: vec![],
        }
    }
}
