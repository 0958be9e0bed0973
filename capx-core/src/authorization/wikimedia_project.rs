use super::*;

#[derive(Debug, Clone, Copy)]
pub enum WikimediaProjectAction {
    Create,
}

pub fn authorize(actor: &Actor, action: WikimediaProjectAction) -> Decision {
    match action {
        WikimediaProjectAction::Create => staff_only(actor, Denial::StaffOnly),
    }
}
