use super::*;

pub fn add_participation(
    connections: &sqlite::Connections,
    actor: &Actor,
    new_participation: usecases::NewParticipation,
) -> Result<Participation> {
    let participation = connections.exclusive()?.transaction(|conn| {
        usecases::add_participation(conn, actor, new_participation)
            .map_err(|err| report("add participant", err))
    })?;
    info!(
        "Added participant {} to event {} by {}",
        participation.participant, participation.event, actor.account
    );
    Ok(participation)
}

pub fn update_participation(
    connections: &sqlite::Connections,
    actor: &Actor,
    id: &Id,
    update: usecases::ParticipationUpdate,
) -> Result<Participation> {
    let participation = connections.exclusive()?.transaction(|conn| {
        usecases::update_participation(conn, actor, id, update)
            .map_err(|err| report("update participant", err))
    })?;
    info!(
        "Updated participation {} by {}: role = {:?}, confirmed = {}",
        participation.id,
        actor.account,
        participation.role,
        participation.is_confirmed()
    );
    Ok(participation)
}

pub fn delete_participation(
    connections: &sqlite::Connections,
    actor: &Actor,
    id: &Id,
) -> Result<()> {
    connections.exclusive()?.transaction(|conn| {
        usecases::delete_participation(conn, actor, id)
            .map_err(|err| report("delete participant", err))
    })?;
    info!("Deleted participation {} by {}", id, actor.account);
    Ok(())
}

pub fn get_participation(
    connections: &sqlite::Connections,
    actor: &Actor,
    id: &Id,
) -> Result<Participation> {
    let conn = connections.shared()?;
    Ok(usecases::get_participation(&conn, actor, id)?)
}

pub fn list_participations(
    connections: &sqlite::Connections,
    actor: &Actor,
    event: Option<&Id>,
) -> Result<Vec<Participation>> {
    let conn = connections.shared()?;
    Ok(usecases::list_participations(&conn, actor, event)?)
}

pub fn add_org_participation(
    connections: &sqlite::Connections,
    actor: &Actor,
    new_participation: usecases::NewOrgParticipation,
) -> Result<OrgParticipation> {
    let participation = connections.exclusive()?.transaction(|conn| {
        usecases::add_org_participation(conn, actor, new_participation)
            .map_err(|err| report("add organization", err))
    })?;
    info!(
        "Added organization {} to event {} by {}",
        participation.organization, participation.event, actor.account
    );
    Ok(participation)
}

pub fn update_org_participation(
    connections: &sqlite::Connections,
    actor: &Actor,
    id: &Id,
    update: usecases::OrgParticipationUpdate,
) -> Result<OrgParticipation> {
    let participation = connections.exclusive()?.transaction(|conn| {
        usecases::update_org_participation(conn, actor, id, update)
            .map_err(|err| report("update organization of event", err))
    })?;
    info!(
        "Updated organization participation {} by {}: role = {:?}, confirmed = {}",
        participation.id,
        actor.account,
        participation.role,
        participation.is_confirmed()
    );
    Ok(participation)
}

pub fn delete_org_participation(
    connections: &sqlite::Connections,
    actor: &Actor,
    id: &Id,
) -> Result<()> {
    connections.exclusive()?.transaction(|conn| {
        usecases::delete_org_participation(conn, actor, id)
            .map_err(|err| report("delete organization of event", err))
    })?;
    info!("Deleted organization participation {} by {}", id, actor.account);
    Ok(())
}

pub fn get_org_participation(
    connections: &sqlite::Connections,
    actor: &Actor,
    id: &Id,
) -> Result<OrgParticipation> {
    let conn = connections.shared()?;
    Ok(usecases::get_org_participation(&conn, actor, id)?)
}

pub fn list_org_participations(
    connections: &sqlite::Connections,
    actor: &Actor,
    event: Option<&Id>,
) -> Result<Vec<OrgParticipation>> {
    let conn = connections.shared()?;
    Ok(usecases::list_org_participations(&conn, actor, event)?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn participant_confirms_invitation() {
        let fixture = BackendFixture::new();
        let alice = fixture.register("alice");
        let bob = fixture.register("bob");
        let carol = fixture.register("carol");
        let event = fixture.create_event(&alice, "Edit-a-thon");

        let invitation = super::add_participation(
            &fixture.db_connections,
            &fixture.actor(&alice),
            usecases::NewParticipation {
                event: event.id.clone(),
                participant: bob.id.clone(),
                role: ParticipantRole::Volunteer,
            },
        )
        .unwrap();
        assert!(invitation.confirmed_organizer);
        assert!(!invitation.confirmed_participant);

        // Unconfirmed records are hidden from outsiders
        let visible = super::list_participations(
            &fixture.db_connections,
            &fixture.actor(&carol),
            Some(&event.id),
        )
        .unwrap();
        assert_eq!(1, visible.len());
        assert_eq!(alice.id, visible[0].participant);

        let confirmed = super::update_participation(
            &fixture.db_connections,
            &fixture.actor(&bob),
            &invitation.id,
            usecases::ParticipationUpdate {
                confirmed_participant: Some(true),
                ..Default::default()
            },
        )
        .unwrap();
        assert!(confirmed.is_confirmed());
        let visible = super::list_participations(
            &fixture.db_connections,
            &fixture.actor(&carol),
            Some(&event.id),
        )
        .unwrap();
        assert_eq!(2, visible.len());
    }

    #[test]
    fn volunteer_cannot_promote_itself() {
        let fixture = BackendFixture::new();
        let alice = fixture.register("alice");
        let bob = fixture.register("bob");
        let event = fixture.create_event(&alice, "Edit-a-thon");
        let invitation = super::add_participation(
            &fixture.db_connections,
            &fixture.actor(&alice),
            usecases::NewParticipation {
                event: event.id.clone(),
                participant: bob.id.clone(),
                role: ParticipantRole::Volunteer,
            },
        )
        .unwrap();
        let promotion = usecases::ParticipationUpdate {
            role: Some(ParticipantRole::Organizer),
            ..Default::default()
        };
        assert!(matches!(
            super::update_participation(
                &fixture.db_connections,
                &fixture.actor(&bob),
                &invitation.id,
                promotion.clone(),
            ),
            Err(AppError::Business(BError::Parameter(
                usecases::Error::Forbidden(_)
            )))
        ));
        let promoted = super::update_participation(
            &fixture.db_connections,
            &fixture.actor(&alice),
            &invitation.id,
            promotion,
        )
        .unwrap();
        assert_eq!(ParticipantRole::Organizer, promoted.role);
    }

    #[test]
    fn manager_confirms_organization() {
        let fixture = BackendFixture::new();
        let admin = fixture.register_staff("admin");
        let alice = fixture.register("alice");
        let manager = fixture.register("manager");
        let event = fixture.create_event(&alice, "Conference");
        let org = crate::prelude::create_org(
            &fixture.db_connections,
            &fixture.actor(&admin),
            usecases::NewOrganization {
                display_name: "Wikimedia Argentina".into(),
                acronym: Some("WMAR".into()),
                managers: vec![manager.id.clone()],
                ..Default::default()
            },
        )
        .unwrap();
        let sponsoring = super::add_org_participation(
            &fixture.db_connections,
            &fixture.actor(&alice),
            usecases::NewOrgParticipation {
                event: event.id.clone(),
                organization: org.id.clone(),
                role: OrgRole::Sponsor,
            },
        )
        .unwrap();
        assert!(!sponsoring.is_confirmed());
        let confirmed = super::update_org_participation(
            &fixture.db_connections,
            &fixture.actor(&manager),
            &sponsoring.id,
            usecases::OrgParticipationUpdate {
                confirmed_organization: Some(true),
                ..Default::default()
            },
        )
        .unwrap();
        assert!(confirmed.is_confirmed());
        assert!(matches!(
            super::add_org_participation(
                &fixture.db_connections,
                &fixture.actor(&alice),
                usecases::NewOrgParticipation {
                    event: event.id.clone(),
                    organization: org.id.clone(),
                    role: OrgRole::Supporter,
                },
            ),
            Err(AppError::Business(BError::Repo(RepoError::AlreadyExists)))
        ));
    }
}
