use super::*;

#[derive(Debug, Clone, Copy)]
pub enum SkillAction<'a> {
    Create,
    Update,
    Delete {
        /// Skills that list the skill as a supertype.
        referrers: &'a [Id],
    },
}

pub fn authorize(actor: &Actor, action: SkillAction<'_>) -> Decision {
    staff_only(actor, Denial::StaffOnly)?;
    match action {
        SkillAction::Create | SkillAction::Update => Ok(()),
        SkillAction::Delete { referrers } => {
            allow_if(referrers.is_empty(), Denial::SkillReferenced)
        }
    }
}
