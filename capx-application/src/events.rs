use super::*;

pub fn create_event(
    connections: &sqlite::Connections,
    actor: &Actor,
    new_event: usecases::NewEvent,
) -> Result<Event> {
    let event = connections.exclusive()?.transaction(|conn| {
        usecases::create_event(conn, actor, new_event).map_err(|err| report("create event", err))
    })?;
    info!("Created event {} by {}", event.id, actor.account);
    Ok(event)
}

pub fn update_event(
    connections: &sqlite::Connections,
    actor: &Actor,
    id: &Id,
    update: usecases::EventUpdate,
) -> Result<Event> {
    let event = connections.exclusive()?.transaction(|conn| {
        usecases::update_event(conn, actor, id, update).map_err(|err| report("update event", err))
    })?;
    info!("Updated event {} by {}", event.id, actor.account);
    Ok(event)
}

pub fn delete_event(connections: &sqlite::Connections, actor: &Actor, id: &Id) -> Result<()> {
    connections.exclusive()?.transaction(|conn| {
        usecases::delete_event(conn, actor, id).map_err(|err| report("delete event", err))
    })?;
    info!("Deleted event {} by {}", id, actor.account);
    Ok(())
}

pub fn get_event(connections: &sqlite::Connections, id: &Id) -> Result<Event> {
    let conn = connections.shared()?;
    Ok(usecases::get_event(&conn, id)?)
}

pub fn all_events(connections: &sqlite::Connections) -> Result<Vec<Event>> {
    let conn = connections.shared()?;
    Ok(usecases::all_events(&conn)?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn only_the_team_updates_an_event() {
        let fixture = BackendFixture::new();
        let alice = fixture.register("alice");
        let bob = fixture.register("bob");
        let event = fixture.create_event(&alice, "Hackathon");

        let update = usecases::EventUpdate {
            name: Some("Wikimedia Hackathon".into()),
            ..Default::default()
        };
        assert!(matches!(
            super::update_event(
                &fixture.db_connections,
                &fixture.actor(&bob),
                &event.id,
                update.clone()
            ),
            Err(AppError::Business(BError::Parameter(
                usecases::Error::Forbidden(_)
            )))
        ));
        let updated =
            super::update_event(&fixture.db_connections, &fixture.actor(&alice), &event.id, update)
                .unwrap();
        assert_eq!("Wikimedia Hackathon", updated.name);
        assert_eq!(
            updated,
            super::get_event(&fixture.db_connections, &event.id).unwrap()
        );
    }

    #[test]
    fn only_staff_deletes_an_event() {
        let fixture = BackendFixture::new();
        let alice = fixture.register("alice");
        let admin = fixture.register_staff("admin");
        let event = fixture.create_event(&alice, "Hackathon");
        assert!(super::delete_event(&fixture.db_connections, &fixture.actor(&alice), &event.id).is_err());
        super::delete_event(&fixture.db_connections, &fixture.actor(&admin), &event.id).unwrap();
        assert!(super::all_events(&fixture.db_connections).unwrap().is_empty());
        assert!(matches!(
            super::delete_event(&fixture.db_connections, &fixture.actor(&admin), &event.id),
            Err(AppError::Business(BError::Repo(RepoError::NotFound)))
        ));
    }
}
