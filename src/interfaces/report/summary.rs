use crate::domain::state::SettlementSnapshot;
use crate::error::Result;
use std::io::Write;

/// Writes the human-readable settlement summary.
///
/// ```text
/// Total spent: 40.00
/// Per person: 13.33
///
/// Paid:
///   A: 30.00
///   B: 10.00
///   C: 0.00
///
/// Transfers:
///   C -> A: 13.33
///   B -> A: 3.33
/// ```
pub struct SummaryWriter<W: Write> {
    sink: W,
}

impl<W: Write> SummaryWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn write_summary(&mut self, snapshot: &SettlementSnapshot) -> Result<()> {
        writeln!(self.sink, "Total spent: {}", snapshot.total)?;
        writeln!(self.sink, "Per person: {}", snapshot.per_person_share)?;

        if !snapshot.participants.is_empty() {
            writeln!(self.sink)?;
            writeln!(self.sink, "Paid:")?;
            for participant in &snapshot.participants {
                writeln!(
                    self.sink,
                    "  {}: {}",
                    participant.name, participant.amount_paid
                )?;
            }
        }

        writeln!(self.sink)?;
        if snapshot.transfers.is_empty() {
            writeln!(self.sink, "No transfers needed. Everyone is settled.")?;
        } else {
            writeln!(self.sink, "Transfers:")?;
            for transfer in &snapshot.transfers {
                writeln!(
                    self.sink,
                    "  {} -> {}: {}",
                    transfer.from, transfer.to, transfer.amount
                )?;
            }
        }

        self.sink.flush()?;
        Ok(())
    }
}
