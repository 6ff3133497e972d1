use super::money::{MAX_AMOUNT_CHARS, Money, parse_amount};
use super::participant::{Participant, ParticipantId, ParticipantName};
use super::settlement::{Settlement, SettlementCalculator, Transfer};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Calculator,
}

/// A user action against the participant list. Amounts and names are raw
/// field contents; validation happens when the action is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Start,
    AddParticipant { name: String, amount: String },
    RenameParticipant { id: ParticipantId, name: String },
    UpdateAmount { id: ParticipantId, amount: String },
    RemoveParticipant { id: ParticipantId },
}

/// Everything a settlement report needs, detached from application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementSnapshot {
    pub total: Money,
    pub per_person_share: Money,
    pub participants: Vec<Participant>,
    pub transfers: Vec<Transfer>,
}

/// The application state: which screen is shown and who is in the group.
///
/// States are values. [`AppState::apply`] consumes a state and returns the
/// next one, and the settlement is computed lazily once per state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    screen: Screen,
    participants: Vec<Participant>,
    settlement: OnceLock<Settlement>,
}

impl PartialEq for AppState {
    fn eq(&self, other: &Self) -> bool {
        self.screen == other.screen && self.participants == other.participants
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Applies `action` and returns the resulting state.
    ///
    /// Actions that cannot apply (a blank name, an unknown id) return the
    /// state unchanged.
    pub fn apply(self, action: Action) -> Self {
        let Self {
            mut screen,
            mut participants,
            settlement,
        } = self;

        match action {
            Action::Start => {
                screen = Screen::Calculator;
                // Participants are untouched, so the cached settlement still holds.
                return Self {
                    screen,
                    participants,
                    settlement,
                };
            }
            Action::AddParticipant { name, amount } => match ParticipantName::new(&name) {
                Ok(name) => {
                    let id = ParticipantId::next_after(&participants);
                    participants.push(Participant::new(id, name, parse_amount(&amount)));
                }
                Err(_) => {
                    return Self {
                        screen,
                        participants,
                        settlement,
                    };
                }
            },
            Action::RenameParticipant { id, name } => {
                if let Some(p) = participants.iter_mut().find(|p| p.id == id) {
                    p.name = ParticipantName::truncated(&name);
                }
            }
            Action::UpdateAmount { id, amount } => {
                if let Some(p) = participants.iter_mut().find(|p| p.id == id) {
                    let field: String = amount.chars().take(MAX_AMOUNT_CHARS).collect();
                    p.amount_paid = parse_amount(&field);
                }
            }
            Action::RemoveParticipant { id } => participants.retain(|p| p.id != id),
        }

        Self {
            screen,
            participants,
            settlement: OnceLock::new(),
        }
    }

    /// The settlement for the current participants, computed on first use.
    pub fn settlement(&self) -> &Settlement {
        self.settlement
            .get_or_init(|| SettlementCalculator::calculate(&self.participants))
    }

    pub fn snapshot(&self) -> SettlementSnapshot {
        let settlement = self.settlement();
        SettlementSnapshot {
            total: settlement.total,
            per_person_share: settlement.per_person_share,
            participants: self.participants.clone(),
            transfers: settlement.transfers.clone(),
        }
    }
}
