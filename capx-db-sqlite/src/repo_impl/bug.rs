use super::*;

impl<'a> BugRepo for DbReadOnly<'a> {
    fn create_bug(&self, _bug: &Bug) -> Result<()> {
        unreachable!();
    }
    fn update_bug(&self, _bug: &Bug) -> Result<()> {
        unreachable!();
    }
    fn delete_bug(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }
    fn get_bug(&self, id: &Id) -> Result<Bug> {
        get_bug(&mut self.conn.borrow_mut(), id)
    }
    fn all_bugs(&self) -> Result<Vec<Bug>> {
        load_bugs(&mut self.conn.borrow_mut(), None)
    }
    fn bugs_by_author(&self, author: &Id) -> Result<Vec<Bug>> {
        load_bugs(&mut self.conn.borrow_mut(), Some(author))
    }
}

impl<'a> BugRepo for DbConnection<'a> {
    fn create_bug(&self, bug: &Bug) -> Result<()> {
        create_bug(&mut self.conn.borrow_mut(), bug)
    }
    fn update_bug(&self, bug: &Bug) -> Result<()> {
        update_bug(&mut self.conn.borrow_mut(), bug)
    }
    fn delete_bug(&self, id: &Id) -> Result<()> {
        delete_bug(&mut self.conn.borrow_mut(), id)
    }
    fn get_bug(&self, id: &Id) -> Result<Bug> {
        get_bug(&mut self.conn.borrow_mut(), id)
    }
    fn all_bugs(&self) -> Result<Vec<Bug>> {
        load_bugs(&mut self.conn.borrow_mut(), None)
    }
    fn bugs_by_author(&self, author: &Id) -> Result<Vec<Bug>> {
        load_bugs(&mut self.conn.borrow_mut(), Some(author))
    }
}

fn new_bug<'b>(conn: &mut SqliteConnection, bug: &'b Bug) -> Result<models::NewBug<'b>> {
    let Bug {
        id,
        author,
        title,
        description,
        bug_type,
        status,
        created_at,
        updated_at,
    } = bug;
    Ok(models::NewBug {
        id: id.as_str(),
        author_rowid: resolve_account_rowid(conn, author)?,
        title,
        description,
        bug_type: store_enum(*bug_type),
        status: store_enum(*status),
        created_at: created_at.as_millis(),
        updated_at: updated_at.as_millis(),
    })
}

fn create_bug(conn: &mut SqliteConnection, bug: &Bug) -> Result<()> {
    let new_bug = new_bug(conn, bug)?;
    diesel::insert_into(schema::bugs::table)
        .values(&new_bug)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_bug(conn: &mut SqliteConnection, bug: &Bug) -> Result<()> {
    use schema::bugs::dsl;
    let changeset = new_bug(conn, bug)?;
    let count = diesel::update(schema::bugs::table.filter(dsl::id.eq(bug.id.as_str())))
        .set(&changeset)
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

// Attachments are deleted by the database.
fn delete_bug(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::bugs::dsl;
    let count = diesel::delete(schema::bugs::table.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_bug(conn: &mut SqliteConnection, id: &Id) -> Result<Bug> {
    use schema::{accounts::dsl as acc_dsl, bugs::dsl};
    let entity = schema::bugs::table
        .inner_join(schema::accounts::table.on(acc_dsl::rowid.eq(dsl::author_rowid)))
        .select((
            dsl::id,
            acc_dsl::id,
            dsl::title,
            dsl::description,
            dsl::bug_type,
            dsl::status,
            dsl::created_at,
            dsl::updated_at,
        ))
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::BugEntity>(conn)
        .map_err(from_diesel_err)?;
    load_bug(entity)
}

fn load_bugs(conn: &mut SqliteConnection, author: Option<&Id>) -> Result<Vec<Bug>> {
    use schema::{accounts::dsl as acc_dsl, bugs::dsl};
    let mut query = schema::bugs::table
        .inner_join(schema::accounts::table.on(acc_dsl::rowid.eq(dsl::author_rowid)))
        .select((
            dsl::id,
            acc_dsl::id,
            dsl::title,
            dsl::description,
            dsl::bug_type,
            dsl::status,
            dsl::created_at,
            dsl::updated_at,
        ))
        .order_by(dsl::created_at.desc())
        .into_boxed();
    if let Some(author) = author {
        query = query.filter(acc_dsl::id.eq(author.as_str()));
    }
    query
        .load::<models::BugEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_bug)
        .collect()
}

fn load_bug(entity: models::BugEntity) -> Result<Bug> {
    let models::BugEntity {
        id,
        author_id,
        title,
        description,
        bug_type,
        status,
        created_at,
        updated_at,
    } = entity;
    Ok(Bug {
        id: id.into(),
        author: author_id.into(),
        title,
        description,
        bug_type: load_enum(bug_type, "bug type")?,
        status: load_enum(status, "bug status")?,
        created_at: TimestampMs::from_millis(created_at),
        updated_at: TimestampMs::from_millis(updated_at),
    })
}
