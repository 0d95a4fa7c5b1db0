use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Resolution status of a choice.
///
/// A choice starts `Unresolved` and becomes `Resolved` on its first pick.
/// Further manual picks loop on `Resolved`; nothing leads back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceStatus {
    #[default]
    Unresolved,
    Resolved,
}

impl StateMachine for ChoiceStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ChoiceStatus::*;
        matches!((self, target), (Unresolved, Resolved) | (Resolved, Resolved))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        vec![ChoiceStatus::Resolved]
    }
}
