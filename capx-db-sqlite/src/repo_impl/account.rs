use super::*;

impl<'a> AccountRepo for DbReadOnly<'a> {
    fn create_account(&self, _account: &Account) -> Result<()> {
        unreachable!();
    }
    fn update_account(&self, _account: &Account) -> Result<()> {
        unreachable!();
    }
    fn delete_account(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }
    fn get_account(&self, id: &Id) -> Result<Account> {
        get_account(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_account_by_username(&self, username: &str) -> Result<Option<Account>> {
        try_get_account_by_username(&mut self.conn.borrow_mut(), username)
    }
    fn all_accounts(&self) -> Result<Vec<Account>> {
        all_accounts(&mut self.conn.borrow_mut())
    }
}

impl<'a> AccountRepo for DbConnection<'a> {
    fn create_account(&self, account: &Account) -> Result<()> {
        create_account(&mut self.conn.borrow_mut(), account)
    }
    fn update_account(&self, account: &Account) -> Result<()> {
        update_account(&mut self.conn.borrow_mut(), account)
    }
    fn delete_account(&self, id: &Id) -> Result<()> {
        delete_account(&mut self.conn.borrow_mut(), id)
    }
    fn get_account(&self, id: &Id) -> Result<Account> {
        get_account(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_account_by_username(&self, username: &str) -> Result<Option<Account>> {
        try_get_account_by_username(&mut self.conn.borrow_mut(), username)
    }
    fn all_accounts(&self) -> Result<Vec<Account>> {
        all_accounts(&mut self.conn.borrow_mut())
    }
}

fn new_account(account: &Account) -> models::NewAccount<'_> {
    let Account {
        id,
        username,
        email,
        password,
        is_staff,
        is_active,
        date_joined,
    } = account;
    models::NewAccount {
        id: id.as_str(),
        username,
        email: email.as_ref().map(EmailAddress::as_str),
        password: password.as_ref(),
        is_staff: *is_staff,
        is_active: *is_active,
        date_joined: date_joined.as_secs(),
    }
}

fn load_account(entity: models::AccountEntity) -> Account {
    let models::AccountEntity {
        rowid: _,
        id,
        username,
        email,
        password,
        is_staff,
        is_active,
        date_joined,
    } = entity;
    Account {
        id: id.into(),
        username,
        email: email.map(EmailAddress::new_unchecked),
        password: password.into(),
        is_staff,
        is_active,
        date_joined: Timestamp::from_secs(date_joined),
    }
}

fn create_account(conn: &mut SqliteConnection, account: &Account) -> Result<()> {
    diesel::insert_into(schema::accounts::table)
        .values(&new_account(account))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_account(conn: &mut SqliteConnection, account: &Account) -> Result<()> {
    use schema::accounts::dsl;
    let count = diesel::update(schema::accounts::table.filter(dsl::id.eq(account.id.as_str())))
        .set(&new_account(account))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

// The profile, memberships, bugs and management roles of the
// account are deleted by the database.
fn delete_account(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::accounts::dsl;
    let count = diesel::delete(schema::accounts::table.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_account(conn: &mut SqliteConnection, id: &Id) -> Result<Account> {
    use schema::accounts::dsl;
    let entity = schema::accounts::table
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::AccountEntity>(conn)
        .map_err(from_diesel_err)?;
    Ok(load_account(entity))
}

fn try_get_account_by_username(
    conn: &mut SqliteConnection,
    username: &str,
) -> Result<Option<Account>> {
    use schema::accounts::dsl;
    Ok(schema::accounts::table
        .filter(dsl::username.eq(username))
        .first::<models::AccountEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_account))
}

fn all_accounts(conn: &mut SqliteConnection) -> Result<Vec<Account>> {
    use schema::accounts::dsl;
    Ok(schema::accounts::table
        .order_by(dsl::username)
        .load::<models::AccountEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_account)
        .collect())
}
