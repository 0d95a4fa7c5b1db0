use serde::Serialize;

use crate::domain::foundation::ChoiceId;

use super::ChoiceStatus;

/// Read-only snapshot of a choice, as handed to polling clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceStatusView {
    pub id: ChoiceId,
    pub title: String,
    pub options: Vec<String>,
    pub picked: Option<String>,
    pub history: Vec<String>,
    /// Number of picks so far; always `history.len()`.
    pub count: usize,
    pub status: ChoiceStatus,
}
