use super::{check_references, dedup_ids, prelude::*};
use crate::authorization::{
    territory::{authorize, TerritoryAction},
    Actor,
};

#[derive(Debug, Clone)]
pub struct NewTerritory {
    pub name: String,
    pub parents: Vec<Id>,
}

pub fn create_territory<R: TerritoryRepo>(
    repo: &R,
    actor: &Actor,
    new_territory: NewTerritory,
) -> Result<Territory> {
    authorize(actor, TerritoryAction::Create)?;
    let NewTerritory { name, parents } = new_territory;
    let name = name.trim().to_owned();
    if name.is_empty() {
        return Err(Error::Name);
    }
    let parents = dedup_ids(parents);
    check_references(
        &parents,
        |id| repo.get_territory(id).map(|_| ()),
        Error::UnknownTerritory,
    )?;
    let territory = Territory {
        id: Id::new(),
        name,
        parents,
    };
    log::debug!("Creating new territory: name = {}", territory.name);
    repo.create_territory(&territory)?;
    Ok(territory)
}

pub fn all_territories<R: TerritoryRepo>(repo: &R) -> Result<Vec<Territory>> {
    Ok(repo.all_territories()?)
}
