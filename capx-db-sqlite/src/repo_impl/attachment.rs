use super::*;

impl<'a> AttachmentRepo for DbReadOnly<'a> {
    fn create_attachment(&self, _attachment: &Attachment, _content: &AttachmentContent) -> Result<()> {
        unreachable!();
    }
    fn delete_attachment(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }
    fn get_attachment(&self, id: &Id) -> Result<Attachment> {
        get_attachment(&mut self.conn.borrow_mut(), id)
    }
    fn load_attachment_content(&self, id: &Id) -> Result<AttachmentContent> {
        load_attachment_content(&mut self.conn.borrow_mut(), id)
    }
    fn attachments_of_bug(&self, bug: &Id) -> Result<Vec<Attachment>> {
        attachments_of_bug(&mut self.conn.borrow_mut(), bug)
    }
    fn count_attachments_of_bug(&self, bug: &Id) -> Result<usize> {
        count_attachments_of_bug(&mut self.conn.borrow_mut(), bug)
    }
}

impl<'a> AttachmentRepo for DbConnection<'a> {
    fn create_attachment(&self, attachment: &Attachment, content: &AttachmentContent) -> Result<()> {
        create_attachment(&mut self.conn.borrow_mut(), attachment, content)
    }
    fn delete_attachment(&self, id: &Id) -> Result<()> {
        delete_attachment(&mut self.conn.borrow_mut(), id)
    }
    fn get_attachment(&self, id: &Id) -> Result<Attachment> {
        get_attachment(&mut self.conn.borrow_mut(), id)
    }
    fn load_attachment_content(&self, id: &Id) -> Result<AttachmentContent> {
        load_attachment_content(&mut self.conn.borrow_mut(), id)
    }
    fn attachments_of_bug(&self, bug: &Id) -> Result<Vec<Attachment>> {
        attachments_of_bug(&mut self.conn.borrow_mut(), bug)
    }
    fn count_attachments_of_bug(&self, bug: &Id) -> Result<usize> {
        count_attachments_of_bug(&mut self.conn.borrow_mut(), bug)
    }
}

fn create_attachment(
    conn: &mut SqliteConnection,
    attachment: &Attachment,
    content: &AttachmentContent,
) -> Result<()> {
    let Attachment {
        id,
        bug,
        file_name,
        content_type,
        size,
        uploaded_at,
    } = attachment;
    let bug_rowid = resolve_bug_rowid(conn, bug)?;
    diesel::insert_into(schema::attachments::table)
        .values(&models::NewAttachment {
            id: id.as_str(),
            bug_rowid,
            file_name: file_name.as_deref(),
            content_type: content_type.as_deref(),
            size: *size as i64,
            content: &content.0,
            uploaded_at: uploaded_at.as_millis(),
        })
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_attachment(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::attachments::dsl;
    let count = diesel::delete(schema::attachments::table.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_attachment(conn: &mut SqliteConnection, id: &Id) -> Result<Attachment> {
    use schema::{attachments::dsl, bugs::dsl as bug_dsl};
    let entity = schema::attachments::table
        .inner_join(schema::bugs::table.on(bug_dsl::rowid.eq(dsl::bug_rowid)))
        .select((
            dsl::id,
            bug_dsl::id,
            dsl::file_name,
            dsl::content_type,
            dsl::size,
            dsl::uploaded_at,
        ))
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::AttachmentEntity>(conn)
        .map_err(from_diesel_err)?;
    Ok(load_attachment(entity))
}

fn load_attachment_content(conn: &mut SqliteConnection, id: &Id) -> Result<AttachmentContent> {
    use schema::attachments::dsl;
    let content = schema::attachments::table
        .select(dsl::content)
        .filter(dsl::id.eq(id.as_str()))
        .first::<Vec<u8>>(conn)
        .map_err(from_diesel_err)?;
    Ok(AttachmentContent(content))
}

fn attachments_of_bug(conn: &mut SqliteConnection, bug: &Id) -> Result<Vec<Attachment>> {
    use schema::{attachments::dsl, bugs::dsl as bug_dsl};
    Ok(schema::attachments::table
        .inner_join(schema::bugs::table.on(bug_dsl::rowid.eq(dsl::bug_rowid)))
        .select((
            dsl::id,
            bug_dsl::id,
            dsl::file_name,
            dsl::content_type,
            dsl::size,
            dsl::uploaded_at,
        ))
        .filter(bug_dsl::id.eq(bug.as_str()))
        .order_by(dsl::rowid)
        .load::<models::AttachmentEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_attachment)
        .collect())
}

fn count_attachments_of_bug(conn: &mut SqliteConnection, bug: &Id) -> Result<usize> {
    use schema::{attachments::dsl, bugs::dsl as bug_dsl};
    let count = schema::attachments::table
        .inner_join(schema::bugs::table.on(bug_dsl::rowid.eq(dsl::bug_rowid)))
        .filter(bug_dsl::id.eq(bug.as_str()))
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count as usize)
}

fn load_attachment(entity: models::AttachmentEntity) -> Attachment {
    let models::AttachmentEntity {
        id,
        bug_id,
        file_name,
        content_type,
        size,
        uploaded_at,
    } = entity;
    Attachment {
        id: id.into(),
        bug: bug_id.into(),
        file_name,
        content_type,
        size: size as u64,
        uploaded_at: TimestampMs::from_millis(uploaded_at),
    }
}
