use std::collections::BTreeSet;

use thiserror::Error;

use crate::entities::*;

/// Replacement of some of the skill sets of a profile.
///
/// Omitted sets (`None`) keep their persisted value.
#[derive(Debug, Clone, Default)]
pub struct SkillSetsUpdate {
    pub known: Option<Vec<Id>>,
    pub available: Option<Vec<Id>>,
    pub wanted: Option<Vec<Id>>,
}

impl SkillSetsUpdate {
    pub fn is_empty(&self) -> bool {
        self.known.is_none() && self.available.is_none() && self.wanted.is_none()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("You cannot update the profile with available skills that are not known.")]
pub struct SkillSetConflict {
    pub not_known: Vec<Id>,
}

/// Merges the update into the current skill sets.
///
/// Every available skill must also be a known skill.
pub fn merge_skill_sets(
    current: &ProfileSkills,
    update: SkillSetsUpdate,
) -> Result<ProfileSkills, SkillSetConflict> {
    let SkillSetsUpdate {
        known,
        available,
        wanted,
    } = update;
    let merged = ProfileSkills {
        known: dedup(known.unwrap_or_else(|| current.known.clone())),
        available: dedup(available.unwrap_or_else(|| current.available.clone())),
        wanted: dedup(wanted.unwrap_or_else(|| current.wanted.clone())),
    };
    let known: BTreeSet<_> = merged.known.iter().collect();
    let not_known: Vec<_> = merged
        .available
        .iter()
        .filter(|s| !known.contains(s))
        .cloned()
        .collect();
    if !not_known.is_empty() {
        return Err(SkillSetConflict { not_known });
    }
    Ok(merged)
}

fn dedup(mut ids: Vec<Id>) -> Vec<Id> {
    ids.sort();
    ids.dedup();
    ids
}
