use super::*;

#[derive(Debug, Clone, Copy)]
pub enum LanguageAction {
    Create,
}

pub fn authorize(actor: &Actor, action: LanguageAction) -> Decision {
    match action {
        LanguageAction::Create => staff_only(actor, Denial::StaffOnly),
    }
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    #[test]
    fn staff_only() {
        assert!(authorize(&staff(), LanguageAction::Create).is_ok());
        assert_eq!(Err(Denial::StaffOnly), authorize(&user(), LanguageAction::Create));
    }
}
