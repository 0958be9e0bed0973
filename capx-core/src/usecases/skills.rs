use super::{dedup_ids, prelude::*};
use crate::{
    authorization::{
        skill::{authorize, SkillAction},
        Actor,
    },
    taxonomy::SkillGraph,
    util::{parse::trimmed_or_none, validate::Validate},
};

#[derive(Debug, Clone)]
pub struct NewSkill {
    pub name: String,
    pub description: Option<String>,
    pub wikidata_item: Option<String>,
    pub supertypes: Vec<Id>,
}

/// Changes of an existing skill.
///
/// `None` keeps the current value, blank strings
/// clear optional values.
#[derive(Debug, Clone, Default)]
pub struct SkillUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub wikidata_item: Option<String>,
    pub supertypes: Option<Vec<Id>>,
}

/// Rejects supertypes that are unknown or would close a cycle.
///
/// Only the proposed supertypes and their ancestors are loaded.
fn check_supertypes<R: SkillRepo>(repo: &R, skill: &Skill) -> Result<()> {
    let ancestors = repo.ancestors_of_skills(&skill.supertypes)?;
    SkillGraph::from_skills(&ancestors).upsert(&skill.id, &skill.supertypes)?;
    Ok(())
}

pub fn create_skill<R: SkillRepo>(repo: &R, actor: &Actor, new_skill: NewSkill) -> Result<Skill> {
    authorize(actor, SkillAction::Create)?;
    let NewSkill {
        name,
        description,
        wikidata_item,
        supertypes,
    } = new_skill;
    let skill = Skill {
        id: Id::new(),
        name: name.trim().to_owned(),
        description: trimmed_or_none(description),
        wikidata_item: trimmed_or_none(wikidata_item),
        supertypes: dedup_ids(supertypes),
        created_at: TimestampMs::now(),
    };
    skill.validate()?;
    check_supertypes(repo, &skill)?;
    log::debug!("Creating new skill: id = {}", skill.id);
    repo.create_skill(&skill)?;
    Ok(skill)
}

pub fn update_skill<R: SkillRepo>(
    repo: &R,
    actor: &Actor,
    id: &Id,
    update: SkillUpdate,
) -> Result<Skill> {
    let mut skill = repo.get_skill(id)?;
    authorize(actor, SkillAction::Update)?;
    let SkillUpdate {
        name,
        description,
        wikidata_item,
        supertypes,
    } = update;
    if let Some(name) = name {
        skill.name = name.trim().to_owned();
    }
    if description.is_some() {
        skill.description = trimmed_or_none(description);
    }
    if wikidata_item.is_some() {
        skill.wikidata_item = trimmed_or_none(wikidata_item);
    }
    if let Some(supertypes) = supertypes {
        skill.supertypes = dedup_ids(supertypes);
        check_supertypes(repo, &skill)?;
    }
    skill.validate()?;
    log::debug!("Updating skill: id = {}", skill.id);
    repo.update_skill(&skill)?;
    Ok(skill)
}

/// Deletes a skill that no other skill refers to as a supertype.
pub fn delete_skill<R: SkillRepo>(repo: &R, actor: &Actor, id: &Id) -> Result<()> {
    repo.get_skill(id)?;
    let referrers = repo.subtypes_of_skill(id)?;
    authorize(
        actor,
        SkillAction::Delete {
            referrers: &referrers,
        },
    )?;
    repo.delete_skill(id)?;
    Ok(())
}

pub fn get_skill<R: SkillRepo>(repo: &R, id: &Id) -> Result<Skill> {
    Ok(repo.get_skill(id)?)
}

pub fn all_skills<R: SkillRepo>(repo: &R) -> Result<Vec<Skill>> {
    Ok(repo.all_skills()?)
}
