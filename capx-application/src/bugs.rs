use super::*;

pub fn create_bug(
    connections: &sqlite::Connections,
    actor: &Actor,
    new_bug: usecases::NewBug,
) -> Result<Bug> {
    let bug = connections.exclusive()?.transaction(|conn| {
        usecases::create_bug(conn, actor, new_bug).map_err(|err| report("create bug", err))
    })?;
    info!("Created bug {} by {}", bug.id, bug.author);
    Ok(bug)
}

pub fn update_bug(
    connections: &sqlite::Connections,
    actor: &Actor,
    id: &Id,
    update: usecases::BugUpdate,
) -> Result<Bug> {
    let bug = connections.exclusive()?.transaction(|conn| {
        usecases::update_bug(conn, actor, id, update).map_err(|err| report("update bug", err))
    })?;
    info!("Updated bug {} by {}: status = {:?}", bug.id, actor.account, bug.status);
    Ok(bug)
}

pub fn delete_bug(connections: &sqlite::Connections, actor: &Actor, id: &Id) -> Result<()> {
    connections.exclusive()?.transaction(|conn| {
        usecases::delete_bug(conn, actor, id).map_err(|err| report("delete bug", err))
    })?;
    info!("Deleted bug {}", id);
    Ok(())
}

pub fn get_bug(connections: &sqlite::Connections, actor: &Actor, id: &Id) -> Result<Bug> {
    let conn = connections.shared()?;
    Ok(usecases::get_bug(&conn, actor, id)?)
}

pub fn list_bugs(connections: &sqlite::Connections, actor: &Actor) -> Result<Vec<Bug>> {
    let conn = connections.shared()?;
    Ok(usecases::list_bugs(&conn, actor)?)
}

pub fn add_attachment(
    connections: &sqlite::Connections,
    actor: &Actor,
    bug: &Id,
    new_attachment: usecases::NewAttachment,
) -> Result<Attachment> {
    let attachment = connections.exclusive()?.transaction(|conn| {
        usecases::add_attachment(conn, actor, bug, new_attachment)
            .map_err(|err| report("add attachment", err))
    })?;
    info!(
        "Attached {} ({} bytes) to bug {}",
        attachment.id, attachment.size, attachment.bug
    );
    Ok(attachment)
}

pub fn attachments_of_bug(
    connections: &sqlite::Connections,
    actor: &Actor,
    bug: &Id,
) -> Result<Vec<Attachment>> {
    let conn = connections.shared()?;
    Ok(usecases::attachments_of_bug(&conn, actor, bug)?)
}

pub fn load_attachment(
    connections: &sqlite::Connections,
    actor: &Actor,
    id: &Id,
) -> Result<(Attachment, AttachmentContent)> {
    let conn = connections.shared()?;
    Ok(usecases::load_attachment(&conn, actor, id)?)
}

pub fn delete_attachment(connections: &sqlite::Connections, actor: &Actor, id: &Id) -> Result<()> {
    connections.exclusive()?.transaction(|conn| {
        usecases::delete_attachment(conn, actor, id).map_err(|err| report("delete attachment", err))
    })?;
    info!("Deleted attachment {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn new_bug() -> usecases::NewBug {
        usecases::NewBug {
            title: "Search is slow".into(),
            description: "Searching for skills takes seconds".into(),
            bug_type: BugType::Improvement,
        }
    }

    fn attachment(size: usize) -> usecases::NewAttachment {
        usecases::NewAttachment {
            file_name: Some("screenshot.png".into()),
            content_type: Some("image/png".into()),
            content: AttachmentContent(vec![0; size]),
        }
    }

    #[test]
    fn bugs_are_private_to_their_authors() {
        let fixture = BackendFixture::new();
        let alice = fixture.actor(&fixture.register("alice"));
        let bob = fixture.actor(&fixture.register("bob"));
        let admin = fixture.actor(&fixture.register_staff("admin"));
        let bug = super::create_bug(&fixture.db_connections, &alice, new_bug()).unwrap();
        assert_eq!(BugStatus::ToDo, bug.status);
        assert!(super::list_bugs(&fixture.db_connections, &bob).unwrap().is_empty());
        assert!(matches!(
            super::get_bug(&fixture.db_connections, &bob, &bug.id),
            Err(AppError::Business(BError::Repo(RepoError::NotFound)))
        ));
        assert_eq!(
            vec![bug.clone()],
            super::list_bugs(&fixture.db_connections, &alice).unwrap()
        );
        let status_change = usecases::BugUpdate {
            status: Some(BugStatus::InProgress),
            ..Default::default()
        };
        assert!(super::update_bug(
            &fixture.db_connections,
            &alice,
            &bug.id,
            status_change.clone()
        )
        .is_err());
        let updated =
            super::update_bug(&fixture.db_connections, &admin, &bug.id, status_change).unwrap();
        assert_eq!(BugStatus::InProgress, updated.status);
    }

    #[test]
    fn attachment_limits() {
        let fixture = BackendFixture::new();
        let alice = fixture.actor(&fixture.register("alice"));
        let bug = super::create_bug(&fixture.db_connections, &alice, new_bug()).unwrap();
        assert!(matches!(
            super::add_attachment(
                &fixture.db_connections,
                &alice,
                &bug.id,
                attachment(usecases::MAX_ATTACHMENT_SIZE as usize + 1)
            ),
            Err(AppError::Business(BError::Parameter(
                usecases::Error::AttachmentTooLarge
            )))
        ));
        for _ in 0..usecases::MAX_ATTACHMENTS_PER_BUG {
            super::add_attachment(&fixture.db_connections, &alice, &bug.id, attachment(1024))
                .unwrap();
        }
        assert!(matches!(
            super::add_attachment(&fixture.db_connections, &alice, &bug.id, attachment(1)),
            Err(AppError::Business(BError::Parameter(
                usecases::Error::TooManyAttachments
            )))
        ));
        let attachments =
            super::attachments_of_bug(&fixture.db_connections, &alice, &bug.id).unwrap();
        assert_eq!(usecases::MAX_ATTACHMENTS_PER_BUG, attachments.len());
        let (metadata, content) =
            super::load_attachment(&fixture.db_connections, &alice, &attachments[0].id).unwrap();
        assert_eq!(attachments[0], metadata);
        assert_eq!(1024, content.0.len());
    }
}
