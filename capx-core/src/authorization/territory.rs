use super::*;

#[derive(Debug, Clone, Copy)]
pub enum TerritoryAction {
    Create,
}

pub fn authorize(actor: &Actor, action: TerritoryAction) -> Decision {
    match action {
        TerritoryAction::Create => staff_only(actor, Denial::StaffOnly),
    }
}
