use super::money::{Money, parse_amount};
use crate::error::SettleError;
use std::fmt;

/// Longest participant name, in characters.
pub const MAX_NAME_CHARS: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantId(pub u32);

impl ParticipantId {
    pub const FIRST: Self = Self(1);

    /// Next free id for a list: one past the highest id in use, or
    /// [`ParticipantId::FIRST`] when the list is empty.
    pub fn next_after<'a>(participants: impl IntoIterator<Item = &'a Participant>) -> Self {
        participants
            .into_iter()
            .map(|p| p.id.0)
            .max()
            .map_or(Self::FIRST, |max| Self(max + 1))
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A display name of at most [`MAX_NAME_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParticipantName(String);

impl ParticipantName {
    /// Validates a name for a new participant: trimmed, truncated, non-empty.
    pub fn new(raw: &str) -> Result<Self, SettleError> {
        let name = Self::truncated(raw.trim());
        if name.0.is_empty() {
            Err(SettleError::ValidationError(
                "Participant name must not be empty".to_string(),
            ))
        } else {
            Ok(name)
        }
    }

    /// Name as typed into an edit field. Only the length limit applies.
    pub fn truncated(raw: &str) -> Self {
        Self(raw.chars().take(MAX_NAME_CHARS).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A person who paid some amount toward the shared expense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: ParticipantName,
    pub amount_paid: Money,
}

impl Participant {
    pub fn new(id: ParticipantId, name: ParticipantName, amount_paid: Money) -> Self {
        Self {
            id,
            name,
            amount_paid,
        }
    }
}

/// A participant row as it arrives from a form or a CSV file, before any
/// validation. The amount stays a string until [`ParticipantRecord::amount_paid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRecord {
    pub name: String,
    pub amount: String,
}

impl ParticipantRecord {
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
        }
    }

    pub fn amount_paid(&self) -> Money {
        parse_amount(&self.amount)
    }
}
